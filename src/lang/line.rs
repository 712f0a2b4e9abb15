use super::{LineNumber, END_OF_PROGRAM};

/// ## One line of entered text
///
/// Split into word fragments the same way for typed commands,
/// stored program lines, and files being loaded.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    words: Vec<String>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let mut words = split(s);
        let mut number = None;
        if let Some(first) = words.first() {
            if first.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(n) = first.parse::<u32>() {
                    if n < END_OF_PROGRAM {
                        number = Some(n);
                        words.remove(0);
                    }
                }
            }
        }
        Line { number, words }
    }

    pub fn from_parts(number: u32, words: Vec<String>) -> Line {
        Line {
            number: Some(number),
            words,
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The lower-cased leading word, which names the statement.
    pub fn verb(&self) -> Option<String> {
        self.words.first().map(|w| w.to_lowercase())
    }

    pub fn arguments(&self) -> &[String] {
        match self.words.len() {
            0 => &self.words,
            _ => &self.words[1..],
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self.words.join(" ");
        match self.number {
            Some(number) => write!(f, "{} {}", number, s),
            None => write!(f, "{}", s),
        }
    }
}

fn split(s: &str) -> Vec<String> {
    let mut words = vec![];
    let mut word = String::new();
    let mut quoted = false;
    for ch in s.chars() {
        if ch == '"' {
            quoted = !quoted;
        } else if !quoted && ch.is_whitespace() {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            continue;
        }
        word.push(ch);
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}
