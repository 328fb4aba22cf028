// Common utilities

pub mod bool_parser;
pub mod default_value;
pub mod log_format;
pub mod splitter;

pub use bool_parser::{parse_bool, BoolOptions};
pub use default_value::DefaultValue;
pub use log_format::LogFormat;
pub use splitter::Splitter;
