mod lexer;
mod lexer_stream;
mod streams;

pub use lexer::Lexer;
pub use lexer::Token;
pub use lexer::TokenType;
pub use lexer_stream::LexerStream;
pub use streams::StrStream;
