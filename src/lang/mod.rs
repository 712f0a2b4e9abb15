/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

pub type LineNumber = Option<u32>;

/// Jumping here ends the program instead of failing.
pub const END_OF_PROGRAM: u32 = u32::MAX;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Category;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::{tokenize, tokenize_all};
pub use line::Line;
pub use parse::Parser;

pub mod ast;
pub mod token;

#[cfg(test)]
mod tests;
