pub mod format;

pub use format::{format_axis_label, format_axis_percentage, format_date, format_percentage};
