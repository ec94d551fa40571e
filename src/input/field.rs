use crate::input::validation::is_valid_numeric_entry;

/// A numeric entry field that refuses keystrokes producing invalid text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryField {
    text: String,
}

impl EntryField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append one character, returns false if the keystroke was rejected
    pub fn insert(&mut self, c: char) -> bool {
        let mut candidate = self.text.clone();
        candidate.push(c);
        self.replace(candidate)
    }

    /// Type `input` one keystroke at a time, returns how many were rejected
    pub fn type_text(&mut self, input: &str) -> usize {
        input.chars().filter(|c| !self.insert(*c)).count()
    }

    /// Replace the whole text (a paste), returns false if rejected
    pub fn replace(&mut self, candidate: String) -> bool {
        if !is_valid_numeric_entry(&candidate) {
            return false;
        }
        self.text = candidate;
        true
    }

    /// Remove the last character, deletions pass through the filter as well
    ///
    /// Erasing the digit of ".5" would leave ".", so that keystroke is refused.
    pub fn backspace(&mut self) -> Option<char> {
        let mut candidate = self.text.clone();
        let removed = candidate.pop()?;
        self.replace(candidate).then_some(removed)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
