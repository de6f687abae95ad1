//! Reusable UI components

pub mod add_task;
pub mod button;
pub mod footer;
pub mod header;
pub mod task_list;

pub use add_task::AddTask;
pub use button::Button;
pub use footer::Footer;
pub use header::{Header, HeaderButton, add_form_toggle, header_button};
pub use task_list::{EMPTY_LIST, TaskItem, TaskList, task_class};
