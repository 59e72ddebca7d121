//! DataGrid widget - a selectable grid assembled from column/row descriptors.
//!
//! The grid owns its selection state: callers hand in plain descriptors and
//! the grid tracks per-row flags plus the select-all flag internally, keyed
//! by row id (or position when ids are absent or not unique). Rendering
//! composes a fixed region structure: optional action bar, body with header
//! and data rows (or a placeholder), and a footer shell that is always
//! present.

use std::sync::Arc;

use trellis::{Color, Element, Size, Style};

use crate::state::State;
use crate::{EventData, HandlerContext, HandlerRegistry, WidgetHandlers};

use super::checkbox::CheckboxVariant;
use super::radio::Radio;
use super::selection::{assign_keys, RowKey, SelectionMode, SelectionSet};

/// Width of the leading selection column.
const SELECT_COLUMN_WIDTH: u16 = 4;

// =============================================================================
// Column
// =============================================================================

/// Column width specification.
#[derive(Clone, Debug)]
pub enum ColumnWidth {
    /// Fixed width in characters.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
    /// Auto-size to content (not yet implemented - treated as Flex(1)).
    Auto,
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

/// A grid column definition.
///
/// The sort and filter flags are carried on the descriptor but nothing acts
/// on them yet; the grid renders columns in the order supplied.
#[derive(Clone, Debug)]
pub struct Column {
    /// Header text displayed at the top.
    pub header: String,
    /// Width specification.
    pub width: ColumnWidth,
    /// Whether the column is declared sortable.
    pub sortable: bool,
    /// Whether the column is declared filterable.
    pub filterable: bool,
    /// Styling for this column's header cell.
    pub style: Option<Style>,
}

impl Column {
    /// Create a new column with the given header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            width: ColumnWidth::default(),
            sortable: false,
            filterable: false,
            style: None,
        }
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set a flex width for this column.
    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    /// Set auto width for this column.
    pub fn auto(mut self) -> Self {
        self.width = ColumnWidth::Auto;
        self
    }

    /// Declare the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Declare the column filterable.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Set the header cell style.
    pub fn style(mut self, s: Style) -> Self {
        self.style = Some(s);
        self
    }
}

// =============================================================================
// Row and Cell
// =============================================================================

/// A cell descriptor: content plus optional styling.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    /// The cell content. Absent content renders as an empty cell.
    pub content: Option<Element>,
    /// Styling for the cell wrapper.
    pub style: Option<Style>,
}

impl Cell {
    /// Create a cell from an element.
    pub fn new(content: Element) -> Self {
        Self {
            content: Some(content),
            style: None,
        }
    }

    /// Create a text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Element::text(text))
    }

    /// Set the cell style.
    pub fn style(mut self, s: Style) -> Self {
        self.style = Some(s);
        self
    }
}

impl From<Element> for Cell {
    fn from(content: Element) -> Self {
        Cell::new(content)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::text(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::text(text)
    }
}

/// A row descriptor: ordered cells, optional styling, optional stable id.
///
/// The selection flag is not part of the descriptor; the grid state owns it.
#[derive(Clone, Debug, Default)]
pub struct Row {
    /// Stable identifier used for selection. Optional; rows without one are
    /// keyed by position.
    pub id: Option<String>,
    /// The cells, rendered in order.
    pub cells: Vec<Cell>,
    /// Styling for the row wrapper.
    pub style: Option<Style>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a cell.
    pub fn cell(mut self, cell: impl Into<Cell>) -> Self {
        self.cells.push(cell.into());
        self
    }

    /// Set all cells at once.
    pub fn cells<C: Into<Cell>>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
        self.cells = cells.into_iter().map(Into::into).collect();
        self
    }

    /// Set the row style.
    pub fn style(mut self, s: Style) -> Self {
        self.style = Some(s);
        self
    }
}

// =============================================================================
// DataGridState
// =============================================================================

/// State for a DataGrid widget.
///
/// Owns the descriptors and the selection table. Rows and keys stay parallel:
/// mutate the collection through `set_rows` so keys and flags are reassigned
/// together.
#[derive(Clone, Debug, Default)]
pub struct DataGridState {
    /// Column definitions.
    pub columns: Vec<Column>,
    /// Selection mode, fixed at construction.
    pub mode: SelectionMode,
    /// The key of the last activated row.
    pub last_activated: Option<RowKey>,
    /// Currently focused row key (for focus styling).
    pub focused_key: Option<RowKey>,

    rows: Vec<Row>,
    keys: Vec<RowKey>,
    selection: SelectionSet,
}

impl DataGridState {
    /// Create a new grid state. Every row starts unselected.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, mode: SelectionMode) -> Self {
        let keys = assign_keys(rows.iter().map(|r| r.id.as_deref()));
        Self {
            columns,
            mode,
            last_activated: None,
            focused_key: None,
            rows,
            keys,
            selection: SelectionSet::new(),
        }
    }

    /// The rows, in supplied order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row keys, parallel to `rows()`.
    pub fn keys(&self) -> &[RowKey] {
        &self.keys
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The key of the row at the given index.
    pub fn key_at(&self, index: usize) -> Option<&RowKey> {
        self.keys.get(index)
    }

    /// The index of the row with the given key.
    pub fn index_of(&self, key: &RowKey) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Flip the select-all flag and drive every row flag to match.
    /// Returns the new select-all value.
    pub fn toggle_all(&mut self) -> bool {
        let value = self.selection.toggle_all(&self.keys);
        log::debug!("[datagrid] toggle_all -> {value}");
        value
    }

    /// Flip the flag of the row with the given id.
    ///
    /// Returns the row's new flag, or `None` when no row carries that id
    /// (including ids demoted to index keys because they were duplicated).
    pub fn toggle_row(&mut self, row_id: &str) -> Option<bool> {
        let key = self.keys.iter().find(|k| k.id() == Some(row_id)).cloned();
        match key {
            Some(key) => self.toggle_key(&key),
            None => {
                log::debug!("[datagrid] toggle_row: no row with id {row_id:?}");
                None
            }
        }
    }

    /// Flip the flag of the row with the given key.
    /// Returns the row's new flag, or `None` for an unknown key.
    pub fn toggle_key(&mut self, key: &RowKey) -> Option<bool> {
        if !self.keys.contains(key) {
            return None;
        }
        let selected = self.selection.toggle(key.clone(), &self.keys);
        log::debug!("[datagrid] toggle {key} -> {selected}");
        Some(selected)
    }

    /// Check if the row with the given key is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selection.is_selected(key)
    }

    /// The select-all flag.
    pub fn all_selected(&self) -> bool {
        self.selection.all_selected()
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// The currently selected rows, in supplied order.
    ///
    /// When the select-all flag is set this is the whole collection.
    pub fn selected_rows(&self) -> Vec<&Row> {
        if self.selection.all_selected() {
            return self.rows.iter().collect();
        }
        self.rows
            .iter()
            .zip(&self.keys)
            .filter(|(_, key)| self.selection.is_selected(key))
            .map(|(row, _)| row)
            .collect()
    }

    /// Replace the row collection and resync selection.
    ///
    /// Flags for id-keyed rows that are still present survive; positional
    /// flags are dropped, and the select-all flag is recomputed.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.keys = assign_keys(self.rows.iter().map(|r| r.id.as_deref()));
        self.selection.resync(&self.keys);
        log::debug!(
            "[datagrid] set_rows: {} rows, {} selected",
            self.rows.len(),
            self.selection.len()
        );
    }
}

// =============================================================================
// DataGrid Widget
// =============================================================================

/// Typestate marker: grid needs a state reference.
pub struct NeedsState;

/// Typestate marker: grid has a state reference.
pub struct HasGridState<'a>(&'a State<DataGridState>);

/// A data grid widget builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// let grid = State::new(DataGridState::new(columns, rows, SelectionMode::Multi));
/// let elem = DataGrid::new()
///     .id("users")
///     .footer(Element::text("3 users"))
///     .state(&grid)
///     .build(&registry, &handlers);
/// ```
pub struct DataGrid<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    class: Option<String>,
    style: Option<Style>,
    action_bar: Option<Element>,
    action_bar_style: Option<Style>,
    footer: Option<Element>,
    footer_style: Option<Style>,
    placeholder: Option<String>,
    pagination: bool,
    header_style: Option<Style>,
    row_style: Option<Style>,
    row_style_selected: Option<Style>,
    row_style_focused: Option<Style>,
    cell_style: Option<Style>,
}

impl Default for DataGrid<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGrid<NeedsState> {
    /// Create a new grid builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            class: None,
            style: None,
            action_bar: None,
            action_bar_style: None,
            footer: None,
            footer_style: None,
            placeholder: None,
            pagination: false,
            header_style: None,
            row_style: None,
            row_style_selected: None,
            row_style_focused: None,
            cell_style: None,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<DataGridState>) -> DataGrid<HasGridState<'_>> {
        DataGrid {
            state_marker: HasGridState(s),
            id: self.id,
            class: self.class,
            style: self.style,
            action_bar: self.action_bar,
            action_bar_style: self.action_bar_style,
            footer: self.footer,
            footer_style: self.footer_style,
            placeholder: self.placeholder,
            pagination: self.pagination,
            header_style: self.header_style,
            row_style: self.row_style,
            row_style_selected: self.row_style_selected,
            row_style_focused: self.row_style_focused,
            cell_style: self.cell_style,
        }
    }
}

impl<S> DataGrid<S> {
    /// Set the grid id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set a class name annotation on the host container.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the host container style.
    pub fn style(mut self, s: Style) -> Self {
        self.style = Some(s);
        self
    }

    /// Set the action bar content. The action bar region renders only when
    /// content is supplied.
    pub fn action_bar(mut self, content: Element) -> Self {
        self.action_bar = Some(content);
        self
    }

    /// Set the action bar style.
    pub fn action_bar_style(mut self, s: Style) -> Self {
        self.action_bar_style = Some(s);
        self
    }

    /// Set the footer content. The footer shell renders even without content.
    pub fn footer(mut self, content: Element) -> Self {
        self.footer = Some(content);
        self
    }

    /// Set the footer style.
    pub fn footer_style(mut self, s: Style) -> Self {
        self.footer_style = Some(s);
        self
    }

    /// Set the placeholder text shown when the grid has no rows.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Set the pagination flag. Accepted for configuration parity; it has no
    /// effect on rendering.
    pub fn pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    /// Set the header cell style.
    pub fn header_style(mut self, s: Style) -> Self {
        self.header_style = Some(s);
        self
    }

    /// Set the style for each data row.
    pub fn row_style(mut self, s: Style) -> Self {
        self.row_style = Some(s);
        self
    }

    /// Set the style for selected rows.
    pub fn row_style_selected(mut self, s: Style) -> Self {
        self.row_style_selected = Some(s);
        self
    }

    /// Set the style when a row is focused.
    pub fn row_style_focused(mut self, s: Style) -> Self {
        self.row_style_focused = Some(s);
        self
    }

    /// Set the style for cells.
    pub fn cell_style(mut self, s: Style) -> Self {
        self.cell_style = Some(s);
        self
    }
}

impl<'a> DataGrid<HasGridState<'a>> {
    /// Build the grid element.
    ///
    /// Registers selection handlers in the registry. The `on_change` callback
    /// fires after any selection change (`EventData::Toggle` for the
    /// select-all control, `EventData::Selection` for a row checkbox); the
    /// `on_activate` callback fires when a row is activated.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let grid_id = self.id.clone().unwrap_or_else(|| "datagrid".into());
        let current = state.get();

        if self.pagination {
            log::debug!("[datagrid] pagination flag set (no effect)");
        }

        let mut children = Vec::new();
        if self.action_bar.is_some() {
            children.push(self.build_action_bar(&grid_id));
        }
        children.push(self.build_body(&current, &grid_id, registry, handlers, state));
        children.push(self.build_footer(&grid_id));

        let mut root = Element::col()
            .id(&grid_id)
            .width(Size::Fill)
            .height(Size::Fill)
            .data("role", "grid")
            .children(children);

        if let Some(class) = &self.class {
            root = root.data("class", class);
        }
        if let Some(style) = self.style.clone() {
            root = root.style(style);
        }

        root
    }

    /// Build the action bar region. Only called when content was supplied.
    fn build_action_bar(&self, grid_id: &str) -> Element {
        let mut bar = Element::row()
            .id(&format!("{grid_id}-actions"))
            .width(Size::Fill)
            .height(Size::Auto);

        if let Some(content) = self.action_bar.clone() {
            bar = bar.child(content);
        }
        if let Some(style) = self.action_bar_style.clone() {
            bar = bar.style(style);
        }

        bar
    }

    /// Build the body region: header row plus data rows or placeholder.
    fn build_body(
        &self,
        current: &DataGridState,
        grid_id: &str,
        registry: &HandlerRegistry,
        handlers: &WidgetHandlers,
        state: &State<DataGridState>,
    ) -> Element {
        let mut body_children = Vec::new();
        body_children.push(self.build_header_row(current, grid_id, registry, handlers, state));

        if current.is_empty() {
            body_children.push(self.build_placeholder(grid_id));
        } else {
            for (row, key) in current.rows().iter().zip(current.keys()) {
                body_children.push(
                    self.build_data_row(row, key, current, grid_id, registry, handlers, state),
                );
            }
        }

        Element::col()
            .id(&format!("{grid_id}-body"))
            .width(Size::Fill)
            .height(Size::Fill)
            .children(body_children)
    }

    /// Build the header row: the select-all cell (mode permitting) followed
    /// by one cell per column.
    fn build_header_row(
        &self,
        current: &DataGridState,
        grid_id: &str,
        registry: &HandlerRegistry,
        handlers: &WidgetHandlers,
        state: &State<DataGridState>,
    ) -> Element {
        let mut row = Element::row()
            .id(&format!("{grid_id}-header"))
            .width(Size::Fill)
            .height(Size::Fixed(1));

        if let Some(cell) = self.build_select_all_cell(current, grid_id, registry, handlers, state)
        {
            row = row.child(cell);
        }

        for (i, col) in current.columns.iter().enumerate() {
            let cell_width = match &col.width {
                ColumnWidth::Fixed(w) => Size::Fixed(*w),
                ColumnWidth::Flex(w) => Size::Flex(*w),
                ColumnWidth::Auto => Size::Flex(1), // Treat Auto as Flex(1) for now
            };

            let base = self.header_style.clone().unwrap_or_else(|| {
                Style::new()
                    .background(Color::var("grid.header_bg"))
                    .bold()
            });
            let style = match &col.style {
                Some(s) => base.merge(s),
                None => base,
            };

            let cell = Element::box_()
                .id(&format!("{grid_id}-col-{i}"))
                .width(cell_width)
                .height(Size::Fixed(1))
                .data("role", "columnheader")
                .style(style)
                .child(Element::text(&col.header));

            row = row.child(cell);
        }

        row
    }

    /// Build the leading header cell for the active selection mode.
    ///
    /// Multi gets the select-all checkbox; Single gets a blank spacer, never
    /// a radio; None gets no cell at all.
    fn build_select_all_cell(
        &self,
        current: &DataGridState,
        grid_id: &str,
        registry: &HandlerRegistry,
        handlers: &WidgetHandlers,
        state: &State<DataGridState>,
    ) -> Option<Element> {
        match current.mode {
            SelectionMode::None => None,
            SelectionMode::Single => Some(
                Element::box_()
                    .width(Size::Fixed(SELECT_COLUMN_WIDTH))
                    .height(Size::Fixed(1)),
            ),
            SelectionMode::Multi => {
                let select_all_id = format!("{grid_id}-select-all");
                let indicator = CheckboxVariant::Big.indicator(current.all_selected());

                let cell = Element::box_()
                    .id(&select_all_id)
                    .width(Size::Fixed(SELECT_COLUMN_WIDTH))
                    .height(Size::Fixed(1))
                    .data("role", "columnheader")
                    .focusable(true)
                    .clickable(true)
                    .child(Element::text(indicator));

                let state_clone = state.clone();
                let on_change = handlers.get("on_change").cloned();
                let source_id = select_all_id.clone();
                registry.register(
                    &select_all_id,
                    "on_activate",
                    Arc::new(move |_hx| {
                        state_clone.update(|g| {
                            g.toggle_all();
                        });
                        if let Some(ref handler) = on_change {
                            let selected = state_clone.with(|g| g.all_selected());
                            let fx = HandlerContext::with_data(
                                source_id.clone(),
                                "on_change",
                                EventData::Toggle { selected },
                            );
                            handler(&fx);
                        }
                    }),
                );

                Some(cell)
            }
        }
    }

    /// Build a data row: selection control (mode permitting) followed by one
    /// cell per cell descriptor.
    #[allow(clippy::too_many_arguments)]
    fn build_data_row(
        &self,
        row_data: &Row,
        key: &RowKey,
        current: &DataGridState,
        grid_id: &str,
        registry: &HandlerRegistry,
        handlers: &WidgetHandlers,
        state: &State<DataGridState>,
    ) -> Element {
        let row_id = format!("{grid_id}-row-{key}");
        let is_selected = current.is_selected(key);
        let has_focus = current.focused_key.as_ref() == Some(key);

        let mut row = Element::row()
            .id(&row_id)
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .data("role", "row")
            .focusable(true)
            .clickable(true);

        if let Some(cell) =
            self.build_select_cell(key, is_selected, current.mode, grid_id, registry, handlers, state)
        {
            row = row.child(cell);
        }

        for (i, cell) in row_data.cells.iter().enumerate() {
            let cell_width = match current.columns.get(i).map(|c| &c.width) {
                Some(ColumnWidth::Fixed(w)) => Size::Fixed(*w),
                Some(ColumnWidth::Flex(w)) => Size::Flex(*w),
                Some(ColumnWidth::Auto) | None => Size::Flex(1),
            };

            let mut cell_elem = Element::box_()
                .id(&format!("{grid_id}-cell-{key}-{i}"))
                .width(cell_width)
                .height(Size::Fixed(1))
                .data("role", "gridcell");

            let style = match (&self.cell_style, &cell.style) {
                (Some(base), Some(s)) => Some(base.clone().merge(s)),
                (Some(base), None) => Some(base.clone()),
                (None, Some(s)) => Some(s.clone()),
                (None, None) => None,
            };
            if let Some(style) = style {
                cell_elem = cell_elem.style(style);
            }

            if let Some(content) = &cell.content {
                cell_elem = cell_elem.child(content.clone());
            }

            row = row.child(cell_elem);
        }

        // Apply base row style, then the descriptor's own styling
        if let Some(ref style) = self.row_style {
            row = row.style(style.clone());
        }
        if let Some(ref style) = row_data.style {
            let merged = match &self.row_style {
                Some(base) => base.clone().merge(style),
                None => style.clone(),
            };
            row = row.style(merged);
        }

        // Apply selected style
        if is_selected {
            if let Some(ref style) = self.row_style_selected {
                row = row.style(style.clone());
            } else {
                row = row.style(
                    Style::new()
                        .background(Color::var("grid.row_selected"))
                        .foreground(Color::var("text.inverted")),
                );
            }
        }

        // Apply focused style based on focused_key
        if has_focus {
            if let Some(ref style) = self.row_style_focused {
                row = row.style(style.clone());
            } else {
                row = row.style(
                    Style::new()
                        .background(Color::var("grid.row_focused"))
                        .foreground(Color::var("text.inverted")),
                );
            }
        }

        // Register activation handler. Activation never changes selection;
        // it records the key and forwards to the user callback.
        {
            let state_clone = state.clone();
            let key_clone = key.clone();
            let on_activate = handlers.get("on_activate").cloned();
            let source_id = row_id.clone();
            registry.register(
                &row_id,
                "on_activate",
                Arc::new(move |_hx| {
                    state_clone.update(|g| {
                        g.last_activated = Some(key_clone.clone());
                    });
                    if let Some(ref handler) = on_activate {
                        let selected = state_clone.with(|g| g.is_selected(&key_clone));
                        let fx = HandlerContext::with_data(
                            source_id.clone(),
                            "on_activate",
                            EventData::Selection {
                                key: key_clone.to_string(),
                                selected,
                            },
                        );
                        handler(&fx);
                    }
                }),
            );
        }

        // Register focus/blur handlers to track the focused row
        {
            let state_clone = state.clone();
            let key_clone = key.clone();
            registry.register(
                &row_id,
                "on_focus",
                Arc::new(move |_hx| {
                    state_clone.update(|g| {
                        g.focused_key = Some(key_clone.clone());
                    });
                }),
            );

            let state_clone = state.clone();
            let key_clone = key.clone();
            registry.register(
                &row_id,
                "on_blur",
                Arc::new(move |_hx| {
                    state_clone.update(|g| {
                        // Only clear if this row was the focused one
                        if g.focused_key.as_ref() == Some(&key_clone) {
                            g.focused_key = None;
                        }
                    });
                }),
            );
        }

        row
    }

    /// Build the leading selection cell for a data row.
    ///
    /// Multi gets a checkbox wired to toggle that row; Single gets a radio
    /// indicator with no wiring; None gets no cell at all.
    #[allow(clippy::too_many_arguments)]
    fn build_select_cell(
        &self,
        key: &RowKey,
        is_selected: bool,
        mode: SelectionMode,
        grid_id: &str,
        registry: &HandlerRegistry,
        handlers: &WidgetHandlers,
        state: &State<DataGridState>,
    ) -> Option<Element> {
        match mode {
            SelectionMode::None => None,
            SelectionMode::Single => Some(
                Element::box_()
                    .id(&format!("{grid_id}-select-{key}"))
                    .width(Size::Fixed(SELECT_COLUMN_WIDTH))
                    .height(Size::Fixed(1))
                    .data("role", "gridcell")
                    .child(Radio::new().selected(is_selected).build()),
            ),
            SelectionMode::Multi => {
                let select_id = format!("{grid_id}-select-{key}");
                let indicator = CheckboxVariant::Big.indicator(is_selected);

                let cell = Element::box_()
                    .id(&select_id)
                    .width(Size::Fixed(SELECT_COLUMN_WIDTH))
                    .height(Size::Fixed(1))
                    .data("role", "gridcell")
                    .focusable(true)
                    .clickable(true)
                    .child(Element::text(indicator));

                let state_clone = state.clone();
                let key_clone = key.clone();
                let on_change = handlers.get("on_change").cloned();
                let source_id = select_id.clone();
                registry.register(
                    &select_id,
                    "on_activate",
                    Arc::new(move |_hx| {
                        state_clone.update(|g| {
                            g.toggle_key(&key_clone);
                        });
                        if let Some(ref handler) = on_change {
                            let selected = state_clone.with(|g| g.is_selected(&key_clone));
                            let fx = HandlerContext::with_data(
                                source_id.clone(),
                                "on_change",
                                EventData::Selection {
                                    key: key_clone.to_string(),
                                    selected,
                                },
                            );
                            handler(&fx);
                        }
                    }),
                );

                Some(cell)
            }
        }
    }

    /// Build the placeholder shown when the grid has no rows.
    fn build_placeholder(&self, grid_id: &str) -> Element {
        let mut placeholder = Element::box_()
            .id(&format!("{grid_id}-placeholder"))
            .width(Size::Fill)
            .height(Size::Fill);

        if let Some(text) = &self.placeholder {
            placeholder = placeholder.child(Element::text(text));
        }

        placeholder
    }

    /// Build the footer region. The shell renders even without content.
    fn build_footer(&self, grid_id: &str) -> Element {
        let mut footer = Element::row()
            .id(&format!("{grid_id}-footer"))
            .width(Size::Fill)
            .height(Size::Auto);

        if let Some(content) = self.footer.clone() {
            footer = footer.child(content);
        }
        if let Some(style) = self.footer_style.clone() {
            footer = footer.style(style);
        }

        footer
    }
}
