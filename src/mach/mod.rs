/*!
## Rust Machine Module

This Rust module evaluates expressions, stores variables and the
program, and runs BASIC statements.

*/

mod command;
mod eval;
mod listing;
mod operation;
mod runtime;
mod stack;
mod statement;
mod val;
mod var;

pub use command::Command;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::{Array, Var, Variable};

#[cfg(test)]
mod tests;
