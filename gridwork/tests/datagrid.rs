use std::sync::{Arc, Mutex};

use gridwork::{
    dispatch_event, Checkbox, Column, DataGrid, DataGridState, EventData, Handler, HandlerContext,
    HandlerRegistry, Radio, Row, RowKey, SelectionMode, State, WidgetHandlers,
};
use trellis::{find_element, Content, Element, Event, Key, Modifiers, MouseButton, Size};

fn columns() -> Vec<Column> {
    vec![Column::new("Name").fixed(12), Column::new("Age").fixed(4)]
}

fn people() -> Vec<Row> {
    vec![
        Row::new().id("r1").cell("Alice").cell("34"),
        Row::new().id("r2").cell("Bert").cell("27"),
        Row::new().id("r3").cell("Cleo").cell("41"),
    ]
}

fn grid(mode: SelectionMode) -> State<DataGridState> {
    State::new(DataGridState::new(columns(), people(), mode))
}

fn render(state: &State<DataGridState>, registry: &HandlerRegistry) -> Element {
    DataGrid::new()
        .id("users")
        .state(state)
        .build(registry, &WidgetHandlers::new())
}

fn click(target: &str) -> Event {
    Event::Click {
        target: Some(target.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

fn press_enter(target: &str) -> Event {
    Event::Key {
        target: Some(target.to_string()),
        key: Key::Enter,
        modifiers: Modifiers::new(),
    }
}

fn child_ids(elem: &Element) -> Vec<&str> {
    elem.content.children().iter().map(|c| c.id.as_str()).collect()
}

/// First text content found in the element or its descendants.
fn first_text(elem: &Element) -> Option<&str> {
    if let Some(text) = elem.content.as_text() {
        return Some(text);
    }
    elem.content.children().iter().find_map(first_text)
}

/// Collect EventData payloads from forwarded handler contexts.
fn capturing_handlers(
    event: &'static str,
    captured: &Arc<Mutex<Vec<EventData>>>,
) -> WidgetHandlers {
    let mut handlers = WidgetHandlers::new();
    let captured = captured.clone();
    let handler: Handler = Arc::new(move |hx: &HandlerContext| {
        captured.lock().unwrap().push(hx.event().clone());
    });
    handlers.insert(event, handler);
    handlers
}

// ============================================================================
// Region composition
// ============================================================================

#[test]
fn test_regions_render_in_fixed_order() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    let root = DataGrid::new()
        .id("users")
        .action_bar(Element::text("actions").id("toolbar"))
        .footer(Element::text("3 users").id("count"))
        .state(&state)
        .build(&registry, &WidgetHandlers::new());

    assert_eq!(root.id, "users");
    assert_eq!(
        child_ids(&root),
        vec!["users-actions", "users-body", "users-footer"]
    );

    // Header comes first inside the body, then one element per row
    let body = find_element(&root, "users-body").unwrap();
    assert_eq!(
        child_ids(body),
        vec!["users-header", "users-row-r1", "users-row-r2", "users-row-r3"]
    );
}

#[test]
fn test_action_bar_absent_when_not_supplied() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    let root = render(&state, &registry);

    assert_eq!(child_ids(&root), vec!["users-body", "users-footer"]);
    assert!(find_element(&root, "users-actions").is_none());
}

#[test]
fn test_footer_shell_renders_without_content() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    let root = render(&state, &registry);

    let footer = find_element(&root, "users-footer").unwrap();
    assert!(footer.content.children().is_empty());
}

#[test]
fn test_placeholder_replaces_rows_when_empty() {
    let state = State::new(DataGridState::new(
        columns(),
        Vec::new(),
        SelectionMode::Multi,
    ));
    let registry = HandlerRegistry::new();
    let root = DataGrid::new()
        .id("users")
        .placeholder("No data to display")
        .state(&state)
        .build(&registry, &WidgetHandlers::new());

    let body = find_element(&root, "users-body").unwrap();
    assert_eq!(child_ids(body), vec!["users-header", "users-placeholder"]);

    let placeholder = find_element(&root, "users-placeholder").unwrap();
    assert_eq!(first_text(placeholder), Some("No data to display"));
}

#[test]
fn test_placeholder_without_text_is_empty_shell() {
    let state = State::new(DataGridState::new(
        columns(),
        Vec::new(),
        SelectionMode::Multi,
    ));
    let registry = HandlerRegistry::new();
    let root = render(&state, &registry);

    let placeholder = find_element(&root, "users-placeholder").unwrap();
    assert!(placeholder.content.children().is_empty());
    assert!(placeholder.content.as_text().is_none());
}

#[test]
fn test_class_annotation_lands_on_host() {
    let state = grid(SelectionMode::None);
    let registry = HandlerRegistry::new();
    let root = DataGrid::new()
        .id("users")
        .class("dense")
        .state(&state)
        .build(&registry, &WidgetHandlers::new());

    assert_eq!(root.get_data("class").map(String::as_str), Some("dense"));
}

// ============================================================================
// Selection modes
// ============================================================================

#[test]
fn test_multi_mode_renders_select_all_and_row_checkboxes() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    let root = render(&state, &registry);

    let select_all = find_element(&root, "users-select-all").unwrap();
    assert_eq!(first_text(select_all), Some("[ ]"));
    assert!(select_all.focusable);

    for id in ["users-select-r1", "users-select-r2", "users-select-r3"] {
        let cell = find_element(&root, id).unwrap();
        assert_eq!(first_text(cell), Some("[ ]"));
        assert!(cell.focusable);
    }

    // Indicators follow the state on the next render
    state.update(|g| {
        g.toggle_all();
    });
    registry.clear();
    let root = render(&state, &registry);
    assert_eq!(
        first_text(find_element(&root, "users-select-all").unwrap()),
        Some("[x]")
    );
    assert_eq!(
        first_text(find_element(&root, "users-select-r2").unwrap()),
        Some("[x]")
    );
}

#[test]
fn test_single_mode_blank_header_and_radio_rows() {
    let state = grid(SelectionMode::Single);
    let registry = HandlerRegistry::new();
    let root = render(&state, &registry);

    // No select-all control; the header keeps a blank spacer instead
    assert!(find_element(&root, "users-select-all").is_none());
    let header = find_element(&root, "users-header").unwrap();
    let header_children = header.content.children();
    assert_eq!(header_children.len(), 3);
    assert!(matches!(header_children[0].content, Content::None));
    assert_eq!(header_children[0].width, Size::Fixed(4));

    // Rows carry display-only radio indicators
    let cell = find_element(&root, "users-select-r1").unwrap();
    assert_eq!(first_text(cell), Some("○"));
    assert!(!cell.focusable);
    assert!(!cell.clickable);

    state.update(|g| {
        g.toggle_key(&RowKey::Id("r1".to_string()));
    });
    registry.clear();
    let root = render(&state, &registry);
    assert_eq!(
        first_text(find_element(&root, "users-select-r1").unwrap()),
        Some("●")
    );
    assert_eq!(
        first_text(find_element(&root, "users-select-r2").unwrap()),
        Some("○")
    );
}

#[test]
fn test_none_mode_renders_no_selection_cells() {
    let state = grid(SelectionMode::None);
    let registry = HandlerRegistry::new();
    let root = render(&state, &registry);

    let header = find_element(&root, "users-header").unwrap();
    assert_eq!(header.content.children().len(), 2);
    assert!(find_element(&root, "users-select-all").is_none());
    assert!(find_element(&root, "users-select-r1").is_none());
}

#[test]
fn test_elements_carry_grid_roles() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    let root = render(&state, &registry);

    let role = |id: &str| {
        find_element(&root, id)
            .and_then(|e| e.get_data("role"))
            .map(String::as_str)
    };

    assert_eq!(root.get_data("role").map(String::as_str), Some("grid"));
    assert_eq!(role("users-col-0"), Some("columnheader"));
    assert_eq!(role("users-select-all"), Some("columnheader"));
    assert_eq!(role("users-row-r1"), Some("row"));
    assert_eq!(role("users-cell-r1-0"), Some("gridcell"));
    assert_eq!(role("users-select-r1"), Some("gridcell"));
}

#[test]
fn test_rows_render_cells_in_order() {
    let rows = vec![
        Row::new().id("r1").cell("Alice").cell("34").cell("extra"),
        Row::new().id("r2").cell("Bert"),
    ];
    let state = State::new(DataGridState::new(columns(), rows, SelectionMode::None));
    let registry = HandlerRegistry::new();
    let root = render(&state, &registry);

    assert_eq!(
        first_text(find_element(&root, "users-cell-r1-0").unwrap()),
        Some("Alice")
    );
    assert_eq!(
        first_text(find_element(&root, "users-cell-r1-1").unwrap()),
        Some("34")
    );

    // Column widths map onto cells; cells past the last column fall back to flex
    let cell0 = find_element(&root, "users-cell-r1-0").unwrap();
    assert_eq!(cell0.width, Size::Fixed(12));
    let cell2 = find_element(&root, "users-cell-r1-2").unwrap();
    assert_eq!(cell2.width, Size::Flex(1));

    // A short row renders exactly its own cells, no padding
    let row2 = find_element(&root, "users-row-r2").unwrap();
    assert_eq!(child_ids(row2), vec!["users-cell-r2-0"]);
}

#[test]
fn test_header_renders_column_titles() {
    let state = grid(SelectionMode::None);
    let registry = HandlerRegistry::new();
    let root = render(&state, &registry);

    assert_eq!(
        first_text(find_element(&root, "users-col-0").unwrap()),
        Some("Name")
    );
    assert_eq!(
        first_text(find_element(&root, "users-col-1").unwrap()),
        Some("Age")
    );
}

// ============================================================================
// Registry wiring
// ============================================================================

#[test]
fn test_click_select_all_toggles_every_row() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    render(&state, &registry);

    let result = dispatch_event(&click("users-select-all"), &registry);
    assert!(result.is_handled());
    assert!(state.with(|g| g.all_selected()));
    assert_eq!(state.with(|g| g.selected_count()), 3);

    // Second click deselects everything
    dispatch_event(&click("users-select-all"), &registry);
    assert!(!state.with(|g| g.all_selected()));
    assert_eq!(state.with(|g| g.selected_count()), 0);
}

#[test]
fn test_click_row_checkbox_toggles_that_row_only() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    render(&state, &registry);

    let result = dispatch_event(&click("users-select-r2"), &registry);
    assert!(result.is_handled());

    assert!(state.with(|g| g.is_selected(&RowKey::Id("r2".to_string()))));
    assert!(!state.with(|g| g.is_selected(&RowKey::Id("r1".to_string()))));
    assert!(!state.with(|g| g.all_selected()));
}

#[test]
fn test_last_row_checkbox_completes_select_all() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    render(&state, &registry);

    dispatch_event(&click("users-select-r1"), &registry);
    dispatch_event(&click("users-select-r2"), &registry);
    assert!(!state.with(|g| g.all_selected()));

    dispatch_event(&click("users-select-r3"), &registry);
    assert!(state.with(|g| g.all_selected()));
}

#[test]
fn test_on_change_payload_for_select_all() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let handlers = capturing_handlers("on_change", &captured);

    DataGrid::new()
        .id("users")
        .state(&state)
        .build(&registry, &handlers);

    dispatch_event(&click("users-select-all"), &registry);
    dispatch_event(&click("users-select-all"), &registry);

    let payloads = captured.lock().unwrap();
    assert_eq!(
        *payloads,
        vec![
            EventData::Toggle { selected: true },
            EventData::Toggle { selected: false },
        ]
    );
}

#[test]
fn test_on_change_payload_for_row_checkbox() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let handlers = capturing_handlers("on_change", &captured);

    DataGrid::new()
        .id("users")
        .state(&state)
        .build(&registry, &handlers);

    dispatch_event(&click("users-select-r2"), &registry);

    let payloads = captured.lock().unwrap();
    assert_eq!(
        *payloads,
        vec![EventData::Selection {
            key: "r2".to_string(),
            selected: true,
        }]
    );
    assert_eq!(payloads[0].selection_key(), Some("r2"));
    assert_eq!(payloads[0].selected(), Some(true));
}

#[test]
fn test_row_activation_records_key_without_selecting() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let handlers = capturing_handlers("on_activate", &captured);

    DataGrid::new()
        .id("users")
        .state(&state)
        .build(&registry, &handlers);

    let result = dispatch_event(&press_enter("users-row-r1"), &registry);
    assert!(result.is_handled());

    // Activation is not selection
    assert_eq!(
        state.with(|g| g.last_activated.clone()),
        Some(RowKey::Id("r1".to_string()))
    );
    assert_eq!(state.with(|g| g.selected_count()), 0);

    let payloads = captured.lock().unwrap();
    assert_eq!(
        *payloads,
        vec![EventData::Selection {
            key: "r1".to_string(),
            selected: false,
        }]
    );
}

#[test]
fn test_focus_and_blur_track_the_focused_row() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    render(&state, &registry);

    dispatch_event(
        &Event::Focus {
            target: "users-row-r2".to_string(),
        },
        &registry,
    );
    assert_eq!(
        state.with(|g| g.focused_key.clone()),
        Some(RowKey::Id("r2".to_string()))
    );

    // Focus moves to another row before the blur for the old one lands
    dispatch_event(
        &Event::Focus {
            target: "users-row-r3".to_string(),
        },
        &registry,
    );
    dispatch_event(
        &Event::Blur {
            target: "users-row-r2".to_string(),
        },
        &registry,
    );
    assert_eq!(
        state.with(|g| g.focused_key.clone()),
        Some(RowKey::Id("r3".to_string()))
    );

    dispatch_event(
        &Event::Blur {
            target: "users-row-r3".to_string(),
        },
        &registry,
    );
    assert_eq!(state.with(|g| g.focused_key.clone()), None);
}

// ============================================================================
// Selection scenarios
// ============================================================================

#[test]
fn test_individual_toggles_reach_select_all() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    render(&state, &registry);

    dispatch_event(&click("users-select-r1"), &registry);
    dispatch_event(&click("users-select-r2"), &registry);
    assert!(!state.with(|g| g.all_selected()));

    dispatch_event(&click("users-select-r3"), &registry);
    assert!(state.with(|g| g.all_selected()));

    // Deselecting one row immediately clears the flag
    dispatch_event(&click("users-select-r2"), &registry);
    assert!(!state.with(|g| g.all_selected()));
    let selected: Vec<Option<String>> = state.with(|g| {
        g.selected_rows().iter().map(|r| r.id.clone()).collect()
    });
    assert_eq!(
        selected,
        vec![Some("r1".to_string()), Some("r3".to_string())]
    );
}

#[test]
fn test_empty_grid_operations_are_safe() {
    let state = State::new(DataGridState::new(
        columns(),
        Vec::new(),
        SelectionMode::Multi,
    ));
    let registry = HandlerRegistry::new();
    let root = DataGrid::new()
        .id("users")
        .placeholder("Nothing here")
        .state(&state)
        .build(&registry, &WidgetHandlers::new());

    assert!(find_element(&root, "users-placeholder").is_some());

    state.update(|g| {
        assert_eq!(g.toggle_row("r1"), None);
        // Toggle-all on an empty grid flips the flag but selects nothing
        assert!(g.toggle_all());
        assert!(g.selected_rows().is_empty());
    });
}

#[test]
fn test_select_all_roundtrip() {
    let state = grid(SelectionMode::Multi);
    let registry = HandlerRegistry::new();
    render(&state, &registry);

    dispatch_event(&click("users-select-all"), &registry);
    assert_eq!(state.with(|g| g.selected_rows().len()), 3);

    dispatch_event(&click("users-select-all"), &registry);
    assert_eq!(state.with(|g| g.selected_rows().len()), 0);
}

// ============================================================================
// Checkbox widget
// ============================================================================

#[test]
fn test_checkbox_renders_indicator_and_label() {
    let checked = State::new(false);
    let registry = HandlerRegistry::new();
    let elem = Checkbox::new()
        .id("confirm")
        .label("Confirm")
        .state(&checked)
        .build(&registry, &WidgetHandlers::new());

    assert_eq!(elem.id, "confirm");
    let children = elem.content.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].content.as_text(), Some("[ ]"));
    assert_eq!(children[1].content.as_text(), Some("Confirm"));
}

#[test]
fn test_checkbox_small_variant_glyphs() {
    let checked = State::new(true);
    let registry = HandlerRegistry::new();
    let elem = Checkbox::new()
        .id("confirm")
        .small()
        .state(&checked)
        .build(&registry, &WidgetHandlers::new());

    assert_eq!(elem.content.as_text(), Some("◼"));
}

#[test]
fn test_checkbox_click_toggles_state() {
    let checked = State::new(false);
    let registry = HandlerRegistry::new();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let handlers = capturing_handlers("on_change", &captured);

    Checkbox::new()
        .id("confirm")
        .state(&checked)
        .build(&registry, &handlers);

    let result = dispatch_event(&click("confirm"), &registry);
    assert!(result.is_handled());
    assert!(checked.get());

    let payloads = captured.lock().unwrap();
    assert_eq!(*payloads, vec![EventData::Toggle { selected: true }]);
}

#[test]
fn test_checkbox_disabled_registers_nothing() {
    let checked = State::new(false);
    let registry = HandlerRegistry::new();
    let elem = Checkbox::new()
        .id("confirm")
        .disabled()
        .state(&checked)
        .build(&registry, &WidgetHandlers::new());

    assert!(!elem.focusable);
    assert!(!elem.clickable);
    assert!(elem.disabled);
    assert!(registry.is_empty());

    let result = dispatch_event(&click("confirm"), &registry);
    assert!(!result.is_handled());
    assert!(!checked.get());
}

// ============================================================================
// Radio widget
// ============================================================================

#[test]
fn test_radio_renders_selection_glyphs() {
    let selected = Radio::new().id("pick").selected(true).build();
    assert_eq!(selected.content.as_text(), Some("●"));

    let unselected = Radio::new().id("pick").build();
    assert_eq!(unselected.content.as_text(), Some("○"));
}

#[test]
fn test_radio_with_label() {
    let elem = Radio::new().id("pick").label("Option A").build();
    let children = elem.content.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].content.as_text(), Some("○"));
    assert_eq!(children[1].content.as_text(), Some("Option A"));
}

#[test]
fn test_radio_is_not_interactive() {
    let elem = Radio::new().id("pick").selected(true).build();
    assert!(!elem.focusable);
    assert!(!elem.clickable);
}
