//! Shared formatting and string helpers.

pub mod strings;
pub mod time;

pub use strings::{combine_strings, format_mark, format_on_off};
pub use time::{
    export_timestamp, export_timestamp_at, format_date_time, format_play_time, import_timestamp,
    validate_date_format,
};
