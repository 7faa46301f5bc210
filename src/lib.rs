pub mod config;
pub mod confirm;
pub mod error;
pub mod number;
pub mod report;
pub mod system;
pub mod uptime;

pub use confirm::{ButtonState, ClickOutcome, RestartButton};
pub use error::{FormatError, FormatResult};
pub use number::{format_locale_number, NumberLocale};
pub use uptime::{
    format_uptime, format_uptime_with, parse_seconds, seconds_from_f64, try_format_uptime, Uptime,
    UptimeStyle,
};
