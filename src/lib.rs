//! fintime-scale: gap-free ordinal time axis for irregularly sampled series.
//!
//! Financial series carry data only while a market is open, so a plain linear
//! time axis renders large empty stretches for weekends, holidays and
//! after-hours. [`TimeIndexScale`] plots the ordinal position of each sample
//! instead, keeping the axis visually continuous while tick generation and
//! labeling stay calendar-aware.

pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;
pub mod time;

pub use crate::core::{LinearScale, TimeIndexScale, TimeIndexScaleConfig, TimeStamp, widen};
pub use error::{ScaleError, ScaleResult};
pub use interaction::Zoomable;
pub use time::{Calendar, LabelFormatter, TickFormat, TimeInterval};
