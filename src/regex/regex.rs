use crate::error_handling::Result;
use crate::matcher::Matcher;
use crate::parser::ast_node::AstNode;
use crate::parser::ParserStream;
use tracing::debug;

/// A compiled pattern. Parsing happens once in [`Regex::new`]; the AST is
/// then reused, read-only, for every text passed to [`Regex::is_match`].
pub struct Regex {
    pattern: String,
    ast: AstNode,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Regex> {
        let mut parser = ParserStream::from_pattern(pattern)?;
        let ast = parser.parse()?;
        debug!(pattern, ast = ?ast, "compiled pattern");
        Ok(Self {
            pattern: pattern.to_string(),
            ast,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        Matcher::new(&self.ast).is_match(text)
    }

    pub fn get_pattern(&self) -> &str {
        &self.pattern
    }

    pub fn get_ast(&self) -> &AstNode {
        &self.ast
    }
}

impl std::fmt::Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Regex( {:?} {:?} )", self.pattern, self.ast)
    }
}
