use crate::error_handling::Result;
use crate::lexer::LexerStream;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenType {
    Literal(char), // Any non-reserved character
    AnyChar,       // .
    Star,          // *
    Plus,          // +
    Question,      // ?
    Alternation,   // |
    LeftParen,     // (
    RightParen,    // )
    End,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    token_type: TokenType,
    pos: usize,
}

impl Token {
    pub fn new(token_type: TokenType, pos: usize) -> Self {
        Self { token_type, pos }
    }

    pub fn get_token_type(&self) -> TokenType {
        self.token_type
    }

    /// Character offset in the pattern where this token starts. The `End`
    /// token sits one past the last character.
    pub fn get_pos(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        TokenType::End == self.token_type
    }
}

pub struct Lexer<'a> {
    input_stream: Box<dyn LexerStream + 'a>,
    pos: usize,
    reached_end: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input_stream: Box<dyn LexerStream + 'a>) -> Self {
        Self {
            input_stream,
            pos: 0,
            reached_end: false,
        }
    }

    /// Returns the next token, or `None` once the `End` token has been handed out.
    pub fn get_next_token(&mut self) -> Result<Option<Token>> {
        if self.reached_end {
            return Ok(None);
        }

        let pos = self.pos;
        let token_type = match self.input_stream.get_next_char()? {
            Some(c) => {
                self.pos += 1;
                Self::classify(c)
            }
            None => {
                self.reached_end = true;
                TokenType::End
            }
        };
        Ok(Some(Token::new(token_type, pos)))
    }

    /// Drains the stream. The returned vector always ends with exactly one `End` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.get_next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn classify(c: char) -> TokenType {
        match c {
            '.' => TokenType::AnyChar,
            '*' => TokenType::Star,
            '+' => TokenType::Plus,
            '?' => TokenType::Question,
            '|' => TokenType::Alternation,
            '(' => TokenType::LeftParen,
            ')' => TokenType::RightParen,
            _ => TokenType::Literal(c),
        }
    }
}
