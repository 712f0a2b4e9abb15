use super::{Command, Listing, Var};
use crate::error;
use crate::lang::ast::Expression;
use crate::lang::{Error, Line};
use log::{trace, warn};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter session
///
/// Owns the program, the variables and the execution state. Does no
/// I/O of its own: the caller feeds typed lines to `enter` and polls
/// `execute` for events.

pub struct Runtime {
    pub(super) listing: Listing,
    pub(super) var: Var,
    pub(super) state: State,
    pub(super) events: VecDeque<Event>,
    pub(super) run_after_load: bool,
}

/// What the caller must act on next.
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Input(String),
    List(String),
    Error(Error),
    Load(String),
    Save(String),
    Cls,
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum State {
    Stopped,
    Running,
    /// Waiting for `enter` to supply a value for `target`.
    Input { target: Expression, running: bool },
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            listing: Listing::default(),
            var: Var::new(),
            state: State::Stopped,
            events: VecDeque::new(),
            run_after_load: false,
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Accept one line of typed text. Returns true when the line is
    /// worth keeping in the shell's history.
    pub fn enter(&mut self, s: &str) -> bool {
        if let State::Input { .. } = self.state {
            self.enter_input(s);
            return true;
        }
        self.run_after_load = false;
        let line = Line::new(s);
        match line.number() {
            Some(number) => {
                if line.is_empty() {
                    self.listing.remove_line(number);
                } else {
                    self.listing.set_line(number, line.words().to_vec());
                }
                true
            }
            None if line.is_empty() => false,
            None => {
                trace!("direct {}", line);
                if let Err(error) = self.statement(line.words()) {
                    self.events.push_back(Event::Error(error));
                }
                true
            }
        }
    }

    /// Run at most `cycles` program lines and report what happened.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            match self.state {
                State::Stopped => return Event::Stopped,
                State::Input { .. } => return Event::Input("? ".to_string()),
                State::Running => {
                    if let Err(error) = self.step() {
                        let error = error.in_line_number(self.listing.current());
                        warn!("program stopped: {}", error);
                        self.stop();
                        self.events.push_back(Event::Error(error));
                    }
                }
            }
        }
        match self.events.pop_front() {
            Some(event) => event,
            None if self.state == State::Running => Event::Running,
            None => self.execute(1),
        }
    }

    /// Stop a running program or a pending input.
    pub fn interrupt(&mut self) {
        if self.state == State::Stopped {
            return;
        }
        let error = error!(Break, self.listing.current());
        warn!("interrupted: {}", error);
        self.stop();
        self.events.push_back(Event::Error(error));
    }

    pub fn get_listing(&self) -> Listing {
        self.listing.clone()
    }

    /// Replace the program, usually with one read from storage.
    pub fn set_listing(&mut self, listing: Listing) {
        self.stop();
        self.listing = listing;
        if std::mem::replace(&mut self.run_after_load, false) {
            self.start();
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub(super) fn start(&mut self) {
        self.listing.reset();
        self.state = State::Running;
    }

    pub(super) fn stop(&mut self) {
        self.listing.end();
        self.state = State::Stopped;
    }

    fn step(&mut self) -> Result<()> {
        let words = match self.listing.next() {
            Some(line) => {
                trace!("line {}", line);
                line.words().to_vec()
            }
            None => {
                self.state = State::Stopped;
                return Ok(());
            }
        };
        self.statement(&words)
    }

    /// Dispatch one statement by its verb. An unknown verb is an
    /// assignment without `LET`.
    pub(super) fn statement(&mut self, words: &[String]) -> Result<()> {
        let verb = match words.first() {
            Some(verb) => verb,
            None => return Ok(()),
        };
        if self.is_running() && Command::is_illegal_in_program(verb) {
            return Err(error!(IllegalInProgram; &verb.to_uppercase()));
        }
        let args = &words[1..];
        let command = match Command::from_verb(verb) {
            Some(command) => command,
            None => return self.r#let(words),
        };
        trace!("{:?} {:?}", command, args);
        match command {
            Command::Clear => self.r#clear(),
            Command::Cls => self.r#cls(),
            Command::Delete => self.r#delete(args),
            Command::Dim => self.r#dim(args),
            Command::End => self.r#end(),
            Command::Exit => self.r#exit(),
            Command::For => self.r#for(args),
            Command::Gosub => self.r#gosub(args),
            Command::Goto => self.r#goto(args),
            Command::If => self.r#if(args),
            Command::Input => self.r#input(args),
            Command::Let => self.r#let(args),
            Command::List => self.r#list(args),
            Command::Load => self.r#load(args),
            Command::New => self.r#new_program(),
            Command::Next => self.r#next(args),
            Command::Print => self.r#print(args),
            Command::Rem => Ok(()),
            Command::Return => self.r#return(),
            Command::Run => self.r#run(args),
            Command::Save => self.r#save(args),
        }
    }

    fn enter_input(&mut self, s: &str) {
        let (target, running) = match std::mem::replace(&mut self.state, State::Stopped) {
            State::Input { target, running } => (target, running),
            other => {
                self.state = other;
                return;
            }
        };
        match self.assign_input(&target, s) {
            Ok(()) => {
                self.state = if running {
                    State::Running
                } else {
                    State::Stopped
                };
            }
            Err(error) => {
                self.events.push_back(Event::Error(error));
                self.state = State::Input { target, running };
            }
        }
    }
}
