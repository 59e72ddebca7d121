//! Checkbox widget - a toggleable checkbox with optional label.

use trellis::{Element, Style};

use crate::{EventData, HandlerContext, HandlerRegistry, State, WidgetHandlers};

/// Checkbox display variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckboxVariant {
    /// Large checkbox: [x] or [ ]
    #[default]
    Big,
    /// Small checkbox: ◼ or ◻
    Small,
}

impl CheckboxVariant {
    /// The indicator glyph for the given checked state.
    pub fn indicator(self, checked: bool) -> &'static str {
        match self {
            CheckboxVariant::Big => {
                if checked {
                    "[x]"
                } else {
                    "[ ]"
                }
            }
            CheckboxVariant::Small => {
                if checked {
                    "◼"
                } else {
                    "◻"
                }
            }
        }
    }
}

/// Typestate marker: checkbox needs a state reference.
pub struct NeedsState;

/// Typestate marker: checkbox has a state reference.
pub struct HasState<'a>(&'a State<bool>);

/// A checkbox widget builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// let agree = State::new(false);
/// let elem = Checkbox::new()
///     .id("agree")
///     .label("I agree to terms")
///     .state(&agree)
///     .build(&registry, &WidgetHandlers::new());
/// ```
#[derive(Clone, Debug)]
pub struct Checkbox<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    label: Option<String>,
    variant: CheckboxVariant,
    disabled: bool,
    style: Option<Style>,
    style_focused: Option<Style>,
    style_disabled: Option<Style>,
    label_style: Option<Style>,
}

impl Default for Checkbox<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox<NeedsState> {
    /// Create a new checkbox builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            label: None,
            variant: CheckboxVariant::default(),
            disabled: false,
            style: None,
            style_focused: None,
            style_disabled: None,
            label_style: None,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<bool>) -> Checkbox<HasState<'_>> {
        Checkbox {
            state_marker: HasState(s),
            id: self.id,
            label: self.label,
            variant: self.variant,
            disabled: self.disabled,
            style: self.style,
            style_focused: self.style_focused,
            style_disabled: self.style_disabled,
            label_style: self.label_style,
        }
    }
}

impl<S> Checkbox<S> {
    /// Set the checkbox id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the checkbox label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the checkbox variant.
    pub fn variant(mut self, v: CheckboxVariant) -> Self {
        self.variant = v;
        self
    }

    /// Use small variant (◼/◻).
    pub fn small(mut self) -> Self {
        self.variant = CheckboxVariant::Small;
        self
    }

    /// Use big variant ([x]/[ ]).
    pub fn big(mut self) -> Self {
        self.variant = CheckboxVariant::Big;
        self
    }

    /// Mark the checkbox as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the checkbox style (applies to the checkbox indicator).
    pub fn style(mut self, s: Style) -> Self {
        self.style = Some(s);
        self
    }

    /// Set the style when focused.
    pub fn style_focused(mut self, s: Style) -> Self {
        self.style_focused = Some(s);
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
}

impl<'a> Checkbox<HasState<'a>> {
    /// Build the checkbox element.
    ///
    /// Registers the toggle handler unless disabled. The `on_change` callback,
    /// if provided, receives `EventData::Toggle` with the post-toggle value.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let checked = state.get();
        let id = self.id.clone().unwrap_or_else(|| "checkbox".into());

        // Build the checkbox indicator element
        let mut checkbox_elem = Element::text(self.variant.indicator(checked));
        if let Some(style) = self.style.clone() {
            checkbox_elem = checkbox_elem.style(style);
        }

        // Build the full element (indicator + optional label)
        let mut elem = if let Some(label_text) = &self.label {
            let mut label_elem = Element::text(label_text);
            if let Some(label_style) = self.label_style.clone() {
                label_elem = label_elem.style(label_style);
            }

            Element::row()
                .gap(1)
                .children(vec![checkbox_elem, label_elem])
        } else {
            checkbox_elem
        };

        elem = elem
            .id(&id)
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled);

        if let Some(style) = self.style_focused {
            elem = elem.style_focused(style);
        }
        if let Some(style) = self.style_disabled {
            elem = elem.style_disabled(style);
        }

        // Register toggle handler if not disabled
        if !self.disabled {
            if let Some(on_change) = handlers.get("on_change").cloned() {
                let state_clone = state.clone();
                let source_id = id.clone();
                registry.register(
                    &id,
                    "on_activate",
                    std::sync::Arc::new(move |_hx| {
                        state_clone.update(|v| *v = !*v);
                        let fx = HandlerContext::with_data(
                            source_id.clone(),
                            "on_change",
                            EventData::Toggle {
                                selected: state_clone.get(),
                            },
                        );
                        on_change(&fx);
                    }),
                );
            } else {
                // Toggle without user callback
                let state_clone = state.clone();
                registry.register(
                    &id,
                    "on_activate",
                    std::sync::Arc::new(move |_hx| {
                        state_clone.update(|v| *v = !*v);
                    }),
                );
            }
        }

        elem
    }
}
