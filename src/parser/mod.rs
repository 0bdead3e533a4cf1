pub mod ast_node;
mod parser;

pub use parser::ParserStream;
