pub mod calendar;
pub mod format;
pub mod interval;

pub use calendar::Calendar;
pub use format::{LabelFormatter, TickFormat};
pub use interval::TimeInterval;
