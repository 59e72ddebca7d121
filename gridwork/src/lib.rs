pub mod dispatch;
pub mod handler;
pub mod state;
pub mod widgets;

pub use dispatch::{dispatch_event, DispatchResult};
pub use handler::{EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers};
pub use state::State;
pub use widgets::{
    assign_keys, Cell, Checkbox, CheckboxVariant, Column, ColumnWidth, DataGrid, DataGridState,
    Radio, Row, RowKey, SelectionMode, SelectionSet,
};
