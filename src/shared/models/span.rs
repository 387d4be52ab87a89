//! Source location types
//!
//! These types represent 1-indexed line/column positions in source code.

use serde::{Deserialize, Serialize};

/// A line/column range in source code (1-indexed lines, as tree-sitter
/// positions are 0-indexed and every tokenizer converts on extraction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn contains_line(&self, line: u32) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Number of lines spanned, inclusive of both endpoints.
    pub fn line_count(&self) -> u32 {
        if self.end_line >= self.start_line {
            self.end_line - self.start_line + 1
        } else {
            0
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::zero()
    }
}
