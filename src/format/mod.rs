pub mod format;

pub use format::{format_2dp, format_5dp, format_duration_ms};
