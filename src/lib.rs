//! # Line BASIC
//!
//! A line-numbered BASIC interpreter with a typed variable store.
//!
//! Build with `cargo install --path .` then run `basic` from a terminal,
//! optionally followed by a program to load and run.
//! ```text
//! > 10 print "Hello"
//! > run
//! Hello
//! > █
//! ```
//!
//! The library half can be embedded. [`mach::Runtime`](mach/struct.Runtime.html)
//! takes typed lines through `enter` and reports output through the
//! events returned by `execute`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
