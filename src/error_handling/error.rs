use crate::lexer::Token;

#[derive(Debug)]
pub enum Error {
    UnexpectedCharacter { character: char, pos: usize },
    SyntaxError(Token),
    NestingTooDeep(Token),
    YamlParsingError(serde_yaml::Error),
    IOError(std::io::Error),
    MissingSuiteKey(&'static str),
    InvalidSelfTestSuite,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnexpectedCharacter { character, pos } => {
                write!(f, "unexpected character {:?} at position {}", character, pos)
            }
            Error::SyntaxError(token) => write!(
                f,
                "unexpected token {:?} at position {}",
                token.get_token_type(),
                token.get_pos()
            ),
            Error::NestingTooDeep(token) => write!(
                f,
                "pattern nests too deeply at {:?} at position {}",
                token.get_token_type(),
                token.get_pos()
            ),
            Error::YamlParsingError(e) => write!(f, "failed to parse YAML: {}", e),
            Error::IOError(e) => write!(f, "I/O error: {}", e),
            Error::MissingSuiteKey(key) => write!(f, "missing key `{}` in self-test suite", key),
            Error::InvalidSelfTestSuite => write!(f, "malformed self-test suite"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::YamlParsingError(e) => Some(e),
            Error::IOError(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenType;

    #[test]
    fn test_syntax_error_names_token_and_position() {
        let err = Error::SyntaxError(Token::new(TokenType::RightParen, 3));
        assert_eq!(err.to_string(), "unexpected token RightParen at position 3");
    }

    #[test]
    fn test_nesting_too_deep_names_token_and_position() {
        let err = Error::NestingTooDeep(Token::new(TokenType::LeftParen, 250));
        assert_eq!(err.to_string(), "pattern nests too deeply at LeftParen at position 250");
    }

    #[test]
    fn test_unexpected_character_names_char_and_position() {
        let err = Error::UnexpectedCharacter {
            character: '\\',
            pos: 5,
        };
        assert_eq!(err.to_string(), "unexpected character '\\\\' at position 5");
    }
}
