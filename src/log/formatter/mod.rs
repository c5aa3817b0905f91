mod ansi;
mod core;
mod csv_formatter;
mod json_formatter;
mod raw_formatter;
mod registry;
mod text_formatter;

pub use ansi::strip_ansi;
pub use self::core::{LogFormatter, DEFAULT_TIMESTAMP_LAYOUT, RFC3339_TIMESTAMP_LAYOUT};
pub use csv_formatter::{CsvFormatter, CsvFormatterConfig};
pub use json_formatter::{JsonFormatter, JsonFormatterConfig};
pub use raw_formatter::{RawFormatter, RawFormatterConfig};
pub use registry::{create_formatter_from_options, register_formatters};
pub use text_formatter::{LevelColor, LevelColors, TextFormatter, TextFormatterConfig};
