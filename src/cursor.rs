use crate::error::TextcombError;

/// A position that was observed on a [`Cursor`] and can be rewound to.
///
/// Only the cursor hands these out, so a rewind can never land on an
/// offset outside the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

impl Checkpoint {
    pub fn position(self) -> usize {
        self.0
    }
}

/// Rewindable view over an input that is fully materialized up front
///
/// The position always stays in `0..=len`; `position == len` means the input
/// is exhausted. One cursor is created per top-level parse and threaded by
/// mutable borrow through every step of that parse.
#[derive(Debug, Clone)]
pub struct Cursor {
    data: Vec<char>,
    position: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Cursor {
            data: input.chars().collect(),
            position: 0,
        }
    }

    /// Get the character at the current position
    ///
    /// Returns an error if the cursor is positioned at the end of the input
    pub fn peek(&self) -> Result<char, TextcombError> {
        self.data
            .get(self.position)
            .copied()
            .ok_or(TextcombError::CannotReadValueAtEof {
                position: self.position,
            })
    }

    pub fn has_next(&self) -> bool {
        self.position < self.data.len()
    }

    /// Move one character forward. Stays put once the input is exhausted.
    pub fn advance(&mut self) {
        if self.has_next() {
            self.position += 1;
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set the position directly. Seeking to `len` (exhaustion) is allowed.
    pub fn seek(&mut self, position: usize) -> Result<(), TextcombError> {
        if position > self.data.len() {
            return Err(TextcombError::SeekOutOfBounds {
                position,
                len: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.0;
    }

    /// The unconsumed suffix of the input
    pub fn remainder(&self) -> String {
        self.data[self.position..].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut cursor = Cursor::new("hello");

        assert_eq!(cursor.peek().unwrap(), 'h');
        assert!(cursor.has_next());

        cursor.advance();
        assert_eq!(cursor.peek().unwrap(), 'e');
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remainder(), "ello");
    }

    #[test]
    fn test_eof() {
        let mut cursor = Cursor::new("ab");

        cursor.advance();
        cursor.advance();
        assert!(!cursor.has_next());
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remainder(), "");

        let error = cursor.peek().unwrap_err();
        assert!(matches!(
            error,
            TextcombError::CannotReadValueAtEof { position: 2 }
        ));
    }

    #[test]
    fn test_advance_saturates() {
        let mut cursor = Cursor::new("x");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_empty_input() {
        let cursor = Cursor::new("");
        assert!(cursor.is_empty());
        assert!(!cursor.has_next());
        assert!(cursor.peek().is_err());
        assert_eq!(cursor.remainder(), "");
    }

    #[test]
    fn test_seek_within_bounds() {
        let mut cursor = Cursor::new("abc");

        cursor.seek(2).unwrap();
        assert_eq!(cursor.peek().unwrap(), 'c');

        // Seeking to exhaustion is valid
        cursor.seek(3).unwrap();
        assert!(!cursor.has_next());

        cursor.seek(0).unwrap();
        assert_eq!(cursor.peek().unwrap(), 'a');
    }

    #[test]
    fn test_seek_out_of_bounds() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();

        let error = cursor.seek(4).unwrap_err();
        assert!(matches!(
            error,
            TextcombError::SeekOutOfBounds {
                position: 4,
                len: 3
            }
        ));
        // Failed seek leaves the position alone
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_checkpoint_rewind() {
        let mut cursor = Cursor::new("abcd");
        cursor.advance();

        let saved_at_b = cursor.checkpoint();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.peek().unwrap(), 'd');

        cursor.rewind(saved_at_b);
        assert_eq!(cursor.peek().unwrap(), 'b');
        assert_eq!(saved_at_b.position(), 1);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("héllo");
        assert_eq!(cursor.len(), 5);

        cursor.advance();
        assert_eq!(cursor.peek().unwrap(), 'é');
        cursor.advance();
        assert_eq!(cursor.remainder(), "llo");
    }
}
