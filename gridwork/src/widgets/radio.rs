//! Radio indicator - a single-selection marker.
//!
//! Display only: it renders the selected/unselected glyph but registers no
//! handlers. Single-selection toggling is not implemented, so the indicator
//! never participates in focus or click routing.

use trellis::{Color, Element, Style};

/// A radio indicator builder.
///
/// # Example
///
/// ```ignore
/// let elem = Radio::new()
///     .id("row-marker")
///     .selected(true)
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Radio {
    id: Option<String>,
    label: Option<String>,
    selected: bool,
    disabled: bool,
    style: Option<Style>,
    style_disabled: Option<Style>,
    label_style: Option<Style>,
}

impl Radio {
    /// Create a new radio indicator builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indicator id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set an optional label rendered next to the indicator.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set whether the indicator shows as selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Mark the indicator as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the indicator style.
    pub fn style(mut self, s: Style) -> Self {
        self.style = Some(s);
        self
    }

    /// Set the style when disabled.
    pub fn style_disabled(mut self, s: Style) -> Self {
        self.style_disabled = Some(s);
        self
    }

    /// Set the label style.
    pub fn label_style(mut self, s: Style) -> Self {
        self.label_style = Some(s);
        self
    }

    /// Build the indicator element.
    pub fn build(self) -> Element {
        // Radio indicator: ● for selected, ○ for unselected
        let indicator = if self.selected { "●" } else { "○" };

        let mut indicator_elem = Element::text(indicator);
        if let Some(style) = self.style.clone() {
            indicator_elem = indicator_elem.style(style);
        }

        let mut elem = if let Some(label_text) = &self.label {
            let mut label_elem = Element::text(label_text);
            if let Some(style) = self.label_style.clone() {
                label_elem = label_elem.style(style);
            }

            Element::row()
                .gap(1)
                .children(vec![indicator_elem, label_elem])
        } else {
            indicator_elem
        };

        elem = elem.disabled(self.disabled);

        let disabled_style = self
            .style_disabled
            .unwrap_or_else(|| Style::new().background(Color::var("radio.disabled")));
        elem = elem.style_disabled(disabled_style);

        if let Some(id) = &self.id {
            elem = elem.id(id);
        }
        elem
    }
}
