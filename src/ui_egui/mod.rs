mod app;
mod picker_button;

pub use app::{PickerDemoApp, ScheduleForm};
pub use picker_button::{DateTimePickerButton, PickerOutput};
