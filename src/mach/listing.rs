use super::Stack;
use crate::error;
use crate::lang::{Error, Line, LineNumber, END_OF_PROGRAM};
use log::debug;
use std::collections::{btree_map::Values, BTreeMap, HashMap};

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Lines are kept ordered by number. The cursor is two positions:
/// `current` is the line being executed and `pointer` is the line
/// that will execute next. `None` in `pointer` means the program
/// has ended.

#[derive(Debug, Clone)]
pub struct Listing {
    source: BTreeMap<u32, Line>,
    current: LineNumber,
    pointer: LineNumber,
    returns: Stack<u32>,
    loops: HashMap<String, ForLoop>,
}

#[derive(Debug, Clone)]
struct ForLoop {
    start: u32,
    /// Line after `NEXT`, `END_OF_PROGRAM` when `NEXT` is the last line.
    end: u32,
    resumed: bool,
}

impl Default for Listing {
    fn default() -> Listing {
        Listing {
            source: BTreeMap::new(),
            current: None,
            pointer: None,
            returns: Stack::new("GOSUB NESTED TOO DEEP"),
            loops: HashMap::new(),
        }
    }
}

impl Listing {
    /// Forget the program and all execution state.
    pub fn clear(&mut self) {
        debug!("clear listing");
        self.source.clear();
        self.current = None;
        self.pointer = None;
        self.returns.clear();
        self.loops.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Insert or replace.
    pub fn set_line(&mut self, number: u32, words: Vec<String>) {
        debug!("set line {}", number);
        self.source.insert(number, Line::from_parts(number, words));
    }

    pub fn remove_line(&mut self, number: u32) -> bool {
        debug!("remove line {}", number);
        self.source.remove(&number).is_some()
    }

    pub fn has_line(&self, number: u32) -> bool {
        self.source.contains_key(&number)
    }

    /// Listing text of one line.
    pub fn get_line(&self, number: u32) -> Option<String> {
        self.source.get(&number).map(|line| line.to_string())
    }

    pub fn lines(&self) -> Values<'_, u32, Line> {
        self.source.values()
    }

    pub fn current(&self) -> LineNumber {
        self.current
    }

    /// Position at the first line for a new run.
    pub fn reset(&mut self) {
        self.current = None;
        self.pointer = self.source.keys().next().copied();
        self.returns.clear();
        self.loops.clear();
    }

    /// Advance and return the line about to execute.
    pub fn next(&mut self) -> Option<&Line> {
        let pointer = self.pointer?;
        let number = match self.source.range(pointer..).next() {
            Some((number, _)) => *number,
            None => {
                self.end();
                return None;
            }
        };
        self.current = Some(number);
        self.pointer = self.line_after(number);
        self.source.get(&number)
    }

    pub fn end(&mut self) {
        self.pointer = None;
    }

    pub fn is_ended(&self) -> bool {
        self.pointer.is_none()
    }

    pub fn goto(&mut self, number: u32) -> Result<()> {
        if number == END_OF_PROGRAM {
            debug!("goto end of program");
            self.end();
            return Ok(());
        }
        if !self.has_line(number) {
            return Err(error!(UndefinedLine; &number.to_string()));
        }
        debug!("goto {}", number);
        self.pointer = Some(number);
        Ok(())
    }

    /// Jump, remembering where to come back to. Nothing is pushed
    /// when the target does not exist.
    pub fn gosub(&mut self, number: u32) -> Result<()> {
        if number != END_OF_PROGRAM && !self.has_line(number) {
            return Err(error!(UndefinedLine; &number.to_string()));
        }
        let return_to = self.pointer.unwrap_or(END_OF_PROGRAM);
        self.returns.push(return_to)?;
        debug!("gosub {} returning to {}", number, return_to);
        self.goto(number)
    }

    pub fn return_from_gosub(&mut self) -> Result<()> {
        if self.returns.is_empty() {
            return Err(error!(ReturnWithoutGosub));
        }
        let number = self.returns.pop()?;
        debug!("return to {}", number);
        self.goto(number)
    }

    /// Record the current line as the start of a loop on `name`,
    /// replacing any earlier loop on the same name.
    pub fn enter_for_loop(&mut self, name: &str) -> bool {
        let start = match self.current {
            Some(start) => start,
            None => return false,
        };
        debug!("enter for {} at {}", name, start);
        self.loops.insert(
            name.to_string(),
            ForLoop {
                start,
                end: END_OF_PROGRAM,
                resumed: false,
            },
        );
        true
    }

    /// Jump back to the loop start. The line after the current one
    /// becomes the exit target.
    pub fn continue_for_loop(&mut self, name: &str) -> bool {
        let after = self.pointer.unwrap_or(END_OF_PROGRAM);
        let start = match self.loops.get_mut(name) {
            Some(for_loop) => {
                for_loop.end = after;
                for_loop.resumed = true;
                for_loop.start
            }
            None => return false,
        };
        debug!("continue for {} at {}", name, start);
        self.pointer = Some(start);
        true
    }

    /// Forget the loop and jump to its exit target.
    pub fn exit_for_loop(&mut self, name: &str) -> bool {
        match self.loops.remove(name) {
            Some(for_loop) => {
                debug!("exit for {} to {}", name, for_loop.end);
                if for_loop.end == END_OF_PROGRAM {
                    self.end();
                } else {
                    self.pointer = Some(for_loop.end);
                }
                true
            }
            None => false,
        }
    }

    pub fn is_for_loop_active(&self, name: &str) -> bool {
        self.loops.contains_key(name)
    }

    /// True once per jump back from `continue_for_loop`. A loop line
    /// reached any other way starts the loop over.
    pub fn take_for_loop_resume(&mut self, name: &str) -> bool {
        match self.loops.get_mut(name) {
            Some(for_loop) if self.current == Some(for_loop.start) => {
                std::mem::replace(&mut for_loop.resumed, false)
            }
            _ => false,
        }
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, s: &str) -> Result<()> {
        let line = Line::new(s);
        match line.number() {
            Some(number) if line.is_empty() => {
                self.remove_line(number);
                Ok(())
            }
            Some(number) => {
                self.source.insert(number, line);
                Ok(())
            }
            None if line.is_empty() => Ok(()),
            None => Err(error!(DirectStatementInFile)),
        }
    }

    fn line_after(&self, number: u32) -> LineNumber {
        use std::ops::Bound::{Excluded, Unbounded};
        self.source
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(n, _)| *n)
    }
}
