pub mod linear;
pub(crate) mod lookup;
pub(crate) mod ticks;
pub mod time_index;

pub use linear::{LinearScale, widen};
pub use time_index::{TimeIndexScale, TimeIndexScaleConfig, TimeStamp};
