//! Utils for expansion.
use abisol_parser::AbiParameter;

pub const INDENT: &str = "    ";

/// Line oriented output buffer keeping track of the indentation level.
#[derive(Debug, Default)]
pub struct SolWriter {
    buf: String,
    level: usize,
}

impl SolWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: &str) {
        for _ in 0..self.level {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    /// Opens a `{` block, indenting everything until the matching [`Self::close`].
    pub fn open(&mut self, header: &str) {
        self.line(&format!("{} {{", header));
        self.level += 1;
    }

    pub fn close(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.line("}");
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Name used for a parameter in the output. Unnamed struct members are not
/// valid Solidity, they are named after their position.
pub fn member_name(param: &AbiParameter, position: usize) -> String {
    if param.name.is_empty() {
        format!("_{}", position)
    } else {
        param.name.clone()
    }
}

/// Joins already rendered parameters.
pub fn join_params(params: &[String]) -> String {
    params.join(", ")
}
