//! Newline-joined life transcript

/// Chronological narrative log of one life
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    text: String,
}

impl Narrative {
    /// Append a line. Empty text is ignored.
    pub fn append(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
