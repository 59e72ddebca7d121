//! Built-in widgets for gridwork.
//!
//! Widgets are interactive UI components that can respond to user input.
//! Each widget is a builder that produces a trellis Element.
//!
//! Stateful widgets take a `State<T>` reference and register closures in the
//! `HandlerRegistry` at build time, keyed by element id and event name. When
//! an event targets one of their elements, `dispatch_event` looks up the
//! closure and runs it; the closure mutates the state and forwards a
//! `HandlerContext` with semantic payload to the caller's `WidgetHandlers`
//! callback when one was supplied.
//!
//! ```ignore
//! let checked = State::new(false);
//! let elem = Checkbox::new()
//!     .id("confirm")
//!     .label("Confirm")
//!     .state(&checked)
//!     .build(&registry, &handlers);
//! ```

pub mod checkbox;
pub mod datagrid;
pub mod radio;
pub mod selection;

pub use checkbox::{Checkbox, CheckboxVariant};
pub use datagrid::{Cell, Column, ColumnWidth, DataGrid, DataGridState, Row};
pub use radio::Radio;
pub use selection::{assign_keys, RowKey, SelectionMode, SelectionSet};
