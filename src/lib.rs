//! Abisol crate.

pub mod parser {
    pub use abisol_parser::*;
}

pub mod sol {
    pub use abisol_sol::*;
}

pub use abisol_sol::{
    generate, generate_from_str, generate_with_formatter, GenerateOptions, GenerationMode,
};
