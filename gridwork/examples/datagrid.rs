//! DataGrid Widget Example
//!
//! Interactive demo of the DataGrid widget: multi-selection with a select-all
//! header, an action bar with a standalone checkbox, and live row resync.
//!
//! Tab moves focus, Space or Enter activates the focused element, q quits.
//! The grid is projected to plain text each frame; a real host would run its
//! own layout and paint passes over the element tree.

use std::fs::File;
use std::io::{stdout, Write};
use std::sync::Arc;

use crossterm::event::{read, Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{cursor, execute};
use gridwork::{
    dispatch_event, Checkbox, Column, DataGrid, DataGridState, Handler, HandlerContext,
    HandlerRegistry, Row, SelectionMode, State, WidgetHandlers,
};
use simplelog::{Config, LevelFilter, WriteLogger};
use trellis::{find_element, Content, Direction, Element, FocusState, LayoutResult, Size};

fn columns() -> Vec<Column> {
    vec![
        Column::new("Name").fixed(14),
        Column::new("Role").fixed(18),
        Column::new("Status").fixed(10),
    ]
}

fn crew_rows(include_archived: bool) -> Vec<Row> {
    let mut rows = vec![
        Row::new().id("ripley").cell("Ripley").cell("Warrant Officer").cell("Active"),
        Row::new().id("dallas").cell("Dallas").cell("Captain").cell("Active"),
        Row::new().id("lambert").cell("Lambert").cell("Navigator").cell("Active"),
        Row::new().id("parker").cell("Parker").cell("Chief Engineer").cell("Active"),
    ];
    if include_archived {
        rows.push(Row::new().id("kane").cell("Kane").cell("Executive Officer").cell("Archived"));
        rows.push(Row::new().id("brett").cell("Brett").cell("Technician").cell("Archived"));
    }
    rows
}

/// Build the whole demo UI and register its handlers.
fn build_ui(
    grid: &State<DataGridState>,
    show_archived: &State<bool>,
    registry: &HandlerRegistry,
) -> Element {
    // Toggling the checkbox swaps the row collection; selections keyed by
    // row id survive the resync.
    let mut archive_handlers = WidgetHandlers::new();
    let grid_clone = grid.clone();
    let on_change: Handler = Arc::new(move |hx: &HandlerContext| {
        let include = hx.event().selected().unwrap_or(false);
        log::info!("[demo] show archived -> {include}");
        grid_clone.update(|g| g.set_rows(crew_rows(include)));
    });
    archive_handlers.insert("on_change", on_change);

    let action_bar = Element::row().gap(2).children(vec![
        Checkbox::new()
            .id("show-archived")
            .label("Show archived")
            .small()
            .state(show_archived)
            .build(registry, &archive_handlers),
        Element::text("Space toggles the focused control"),
    ]);

    let (selected, total) = grid.with(|g| (g.selected_count(), g.row_count()));
    let footer = Element::text(format!("{selected} of {total} selected"));

    let mut grid_handlers = WidgetHandlers::new();
    let change_logger: Handler = Arc::new(|hx: &HandlerContext| {
        log::info!("[demo] selection changed: {:?}", hx.event());
    });
    grid_handlers.insert("on_change", change_logger);
    let activate_logger: Handler = Arc::new(|hx: &HandlerContext| {
        log::info!("[demo] row activated: {:?}", hx.event());
    });
    grid_handlers.insert("on_activate", activate_logger);

    DataGrid::new()
        .id("crew")
        .action_bar(action_bar)
        .footer(footer)
        .placeholder("No crew on the manifest")
        .state(grid)
        .build(registry, &grid_handlers)
}

/// Render one element as a single line, padding cells to their fixed widths.
fn line_for(elem: &Element) -> String {
    match &elem.content {
        Content::Text(text) => text.clone(),
        Content::Children(children) => {
            let parts: Vec<String> = children
                .iter()
                .map(|child| {
                    let text = line_for(child);
                    match child.width {
                        Size::Fixed(w) => format!("{text:<width$}", width = w as usize),
                        _ => text,
                    }
                })
                .collect();
            parts.join(" ")
        }
        Content::None => String::new(),
    }
}

/// Project the element tree to lines: row containers become single lines,
/// column containers stack their children.
fn collect_lines(elem: &Element, focused: Option<&str>, lines: &mut Vec<String>) {
    let marker = |elem: &Element| {
        let has_focus = focused.is_some_and(|id| find_element(elem, id).is_some());
        if has_focus { "> " } else { "  " }
    };

    match (&elem.direction, &elem.content) {
        (Direction::Row, _) => lines.push(format!("{}{}", marker(elem), line_for(elem))),
        (Direction::Column, Content::Children(children)) => {
            for child in children {
                collect_lines(child, focused, lines);
            }
        }
        (Direction::Column, _) => lines.push(format!("{}{}", marker(elem), line_for(elem))),
    }
}

fn paint(root: &Element, focus: &FocusState) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let mut lines = vec!["DataGrid Demo".to_string(), String::new()];
    collect_lines(root, focus.focused(), &mut lines);
    lines.push(String::new());
    lines.push(format!("focused: {}", focus.focused().unwrap_or("none")));
    lines.push("Tab: move focus | Space/Enter: activate | q: quit".to_string());

    for line in lines {
        write!(out, "{line}\r\n")?;
    }
    out.flush()
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("datagrid.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let grid = State::new(DataGridState::new(
        columns(),
        crew_rows(false),
        SelectionMode::Multi,
    ));
    let show_archived = State::new(false);
    let registry = HandlerRegistry::new();
    let mut focus = FocusState::new();
    // Keyboard-only demo, so hit testing never runs against this layout
    let layout = LayoutResult::new();

    enable_raw_mode()?;
    let result = (|| -> std::io::Result<()> {
        loop {
            registry.clear();
            let root = build_ui(&grid, &show_archived, &registry);
            paint(&root, &focus)?;

            let raw = read()?;
            if let CrosstermEvent::Key(key) = &raw {
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('q') {
                    return Ok(());
                }
            }

            for event in focus.process_events(&[raw], &root, &layout) {
                dispatch_event(&event, &registry);
            }
        }
    })();
    disable_raw_mode()?;

    result
}
