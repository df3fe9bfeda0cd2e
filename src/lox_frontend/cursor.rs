use super::span::CodePosition;
use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    char_iterator: Peekable<CharIndices<'src>>,
    position: CodePosition,
}

impl<'src> Cursor<'src> {
    /// Creates a character stream for the source string.
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            char_iterator: source.char_indices().peekable(),
            position: CodePosition::new(0, 1, 1),
        }
    }

    /// Position of the cursor.
    pub fn get_position(&self) -> CodePosition {
        self.position
    }

    /// Peeks the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.char_iterator.peek().map(|&(_, ch)| ch)
    }

    /// Peeks the next to next character without consuming it.
    pub fn peek_next(&self) -> Option<char> {
        let mut lookahead = self.char_iterator.clone();
        lookahead.next();
        lookahead.next().map(|(_, ch)| ch)
    }

    /// Consumes the next character.
    pub fn take(&mut self) -> Option<char> {
        let (_, ch) = self.char_iterator.next()?;

        self.position.byte_pos = self
            .char_iterator
            .peek()
            .map(|&(idx, _)| idx)
            .unwrap_or(self.source.len());
        if ch == '\n' {
            self.position.line_no += 1;
            self.position.column_no = 1;
        } else {
            self.position.column_no += 1;
        }

        Some(ch)
    }

    /// Consumes the next character if it equals target char.
    pub fn take_if(&mut self, target: char) -> bool {
        match self.peek() {
            Some(ch) if ch == target => {
                self.take();
                true
            }
            _ => false,
        }
    }

    /// Consumes next characters as long as they meet condition.
    /// At the end, the next character fails condition.
    pub fn take_while<F>(&mut self, condition: F)
    where
        F: Fn(char) -> bool,
    {
        while let Some(ch) = self.peek() {
            if !condition(ch) {
                break;
            }
            self.take();
        }
    }

    /// Consumes next characters as long as they do not meet condition.
    /// At the end, the next character meets condition.
    pub fn take_until<F>(&mut self, condition: F)
    where
        F: Fn(char) -> bool,
    {
        self.take_while(|ch| !condition(ch));
    }

    /// Source text between `start` and the current position.
    pub fn slice_from(&self, start: CodePosition) -> &'src str {
        &self.source[start.byte_pos..self.position.byte_pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("a\nbc");
        cursor.take();
        cursor.take();
        assert_eq!(cursor.get_position(), CodePosition::new(2, 2, 1));

        cursor.take();
        assert_eq!(cursor.get_position(), CodePosition::new(3, 2, 2));
    }

    #[test]
    fn test_lookahead_does_not_consume() {
        let mut cursor = Cursor::new("1.5");
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.peek_next(), Some('.'));
        assert_eq!(cursor.get_position().byte_pos, 0);
    }

    #[test]
    fn test_slice_from_multibyte() {
        let mut cursor = Cursor::new("\"é\"");
        let start = cursor.get_position();
        cursor.take();
        cursor.take_until(|ch| ch == '"');
        cursor.take();
        assert_eq!(cursor.slice_from(start), "\"é\"");
        assert_eq!(cursor.peek(), None);
    }
}
