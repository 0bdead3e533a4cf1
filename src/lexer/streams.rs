use super::lexer_stream::LexerStream;
use crate::error_handling::Result;
use std::str::Chars;

pub struct StrStream<'a> {
    chars: Chars<'a>,
}

impl<'a> StrStream<'a> {
    pub fn new(pattern: &'a str) -> Self {
        Self {
            chars: pattern.chars(),
        }
    }
}

impl LexerStream for StrStream<'_> {
    fn get_next_char(&mut self) -> Result<Option<char>> {
        Ok(self.chars.next())
    }
}
