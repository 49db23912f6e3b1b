//! Utility modules

pub mod time;

pub use time::{Clock, SystemClock, unix_now_millis};
