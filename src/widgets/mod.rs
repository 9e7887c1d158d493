//! Widgets built on the core component layer.

pub mod input;
pub mod task_item;
pub mod task_list;

pub use input::Input;
pub use task_item::{
    Control, TaskItem, TaskItemCallbacks, TaskItemTheme, TrailingAffordance, CONTROLS,
};
pub use task_list::{TaskEvent, TaskList};
