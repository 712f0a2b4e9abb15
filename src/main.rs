//! # BASIC
//!
//! Line-numbered BASIC with a typed variable store.
//!

use clap::Parser;

mod term;

/// A line-numbered BASIC interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Program to load and run first. A path or an http(s) URL.
    file: Option<String>,

    /// Print errors without ANSI styling.
    #[arg(long)]
    no_color: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    term::main(args);
}
