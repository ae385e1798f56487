//! The document buffer abstraction.
//!
//! The editor never edits text itself; the user types into the toolkit's
//! widget. What the editor needs is to read the whole text on Save and to
//! replace the whole text on New and Open, so that is all this trait asks.

/// Whole-buffer access to the text being edited.
pub trait Buffer {
    /// Returns the full buffer content, exactly as it would be saved.
    fn text(&self) -> String;

    /// Replaces the full buffer content.
    fn replace(&mut self, text: &str);

    /// Returns true if the buffer holds no text.
    fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

impl Buffer for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn replace(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_buffer_replace() {
        let mut buffer = String::from("old text");
        Buffer::replace(&mut buffer, "new");
        assert_eq!(Buffer::text(&buffer), "new");

        Buffer::replace(&mut buffer, "");
        assert!(Buffer::is_empty(&buffer));
    }
}
