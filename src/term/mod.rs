extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::Args;
use ansi_term::Style;
use basic::error;
use basic::lang::Error;
use basic::mach::{Event, Listing, Runtime};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main(args: Args) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
        return;
    }
    if let Err(error) = main_loop(args, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(args: Args, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let style = if args.no_color {
        Style::new()
    } else {
        Style::new().bold()
    };
    let command = Interface::new("BASIC")?;
    command.set_prompt("> ")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);

    if let Some(file) = &args.file {
        runtime.enter(&format!("run \"{}\"", file));
    }

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.get_listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => {
                command.write_fmt(format_args!("{}\n", style.paint(error.to_string())))?;
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::List(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Cls => {
                let terminal = mortal::Terminal::new()?;
                terminal.clear_screen()?;
            }
            Event::Load(s) => match load(&s) {
                Ok(listing) => runtime.set_listing(listing),
                Err(error) => {
                    command.write_fmt(format_args!("{}\n", style.paint(error.to_string())))?
                }
            },
            Event::Save(s) => {
                if let Err(error) = save(runtime.get_listing(), &s) {
                    command.write_fmt(format_args!("{}\n", style.paint(error.to_string())))?;
                }
            }
            Event::Exit => break,
        }
    }
    Ok(())
}

struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if let Ok(num) = prompter.buffer().parse::<u32>() {
            if let Some(s) = self.listing.get_line(num) {
                let mut comp = Completion::simple(s);
                comp.suffix = linefeed::complete::Suffix::None;
                return Some(vec![comp]);
            }
        }
        None
    }
}

fn is_url(filename: &str) -> bool {
    filename.starts_with("http://") || filename.starts_with("https://")
}

fn load(filename: &str) -> Result<Listing, Error> {
    debug!("load {}", filename);
    let text = if is_url(filename) {
        fetch(filename)?
    } else {
        read(filename)?
    };
    let mut listing = Listing::default();
    for (index, line) in text.lines().enumerate() {
        if let Err(error) = listing.load_str(line) {
            return Err(error.message(&format!(
                "In line {} of the file. (Not BASIC line number)",
                index + 1
            )));
        }
    }
    Ok(listing)
}

fn read(filename: &str) -> Result<String, Error> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(DiskIoError; msg.as_str())),
            }
        }
    };
    let mut text = String::new();
    for line in reader.lines() {
        match line {
            Ok(line) => {
                text.push_str(&line);
                text.push('\n');
            }
            Err(error) => return Err(error!(DiskIoError; error.to_string().as_str())),
        }
    }
    Ok(text)
}

fn fetch(url: &str) -> Result<String, Error> {
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(error) => return Err(error!(DiskIoError; error.to_string().as_str())),
    };
    if !response.status().is_success() {
        return Err(error!(FileNotFound; response.status().to_string().as_str()));
    }
    match response.text() {
        Ok(text) => Ok(text),
        Err(error) => Err(error!(DiskIoError; error.to_string().as_str())),
    }
}

fn save(listing: Listing, filename: &str) -> Result<(), Error> {
    if is_url(filename) {
        return Err(error!(BadFileName; "CANNOT SAVE TO URL"));
    }
    if listing.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    debug!("save {}", filename);
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(DiskIoError; error.to_string().as_str())),
    };
    for line in listing.lines() {
        if let Err(error) = writeln!(file, "{}", line) {
            return Err(error!(DiskIoError; error.to_string().as_str()));
        }
    }
    Ok(())
}
