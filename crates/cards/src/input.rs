//! Search input line and trigger handling.

use dealcards_catalog::Query;

/// What a search trigger resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Nothing usable was typed; show the prompt and stop.
    Prompt,
    /// Hand this query to the catalog.
    Search(Query),
}

/// A key press as seen by the input line, independent of the terminal
/// backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Backspace,
    Other,
}

/// Whether `key` starts a search. Typing alone never fetches.
pub fn is_trigger(key: Key) -> bool {
    matches!(key, Key::Enter)
}

/// Reads the input value at trigger time.
pub fn submit(value: &str) -> Submission {
    match Query::parse(value) {
        Ok(query) => Submission::Search(query),
        Err(_) => Submission::Prompt,
    }
}

/// Editable single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    value: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Trigger (Enter or explicit activation): reads and trims the value.
    ///
    /// The typed text is left in place either way.
    pub fn submit(&self) -> Submission {
        submit(&self.value)
    }
}
