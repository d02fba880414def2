mod conversions;
pub mod entry;
pub mod parser;
