use super::ast_node::{
    AstNode, AstNodeAlternation, AstNodeGroup, AstNodeLiteral, AstNodeQuantifier,
    AstNodeSequence, QuantifierKind,
};
use crate::error_handling::{
    Error::{NestingTooDeep, SyntaxError},
    Result,
};
use crate::lexer::{Lexer, StrStream, Token, TokenType};

// Recursive descent over the grammar, lowest precedence first:
//   alternation := sequence ('|' sequence)*
//   sequence    := quantified*
//   quantified  := atom ('*' | '+' | '?')?
//   atom        := Literal | AnyChar | '(' alternation ')'
pub struct ParserStream {
    tokens: Vec<Token>,
    pos: usize,   // Current position in the token stream
    depth: usize, // Open groups plus pending alternation folds
}

impl ParserStream {
    /// Deepest AST the parser builds. Parsing, matching and dropping all
    /// recurse once per level, so this bounds their stack usage.
    pub const MAX_NESTING_DEPTH: usize = 250;

    pub fn new(mut tokens: Vec<Token>) -> Self {
        if false == tokens.last().is_some_and(|token| token.is_end()) {
            let end_pos = tokens.last().map_or(0, |token| token.get_pos() + 1);
            tokens.push(Token::new(TokenType::End, end_pos));
        }
        ParserStream {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let mut lexer = Lexer::new(Box::new(StrStream::new(pattern)));
        Ok(Self::new(lexer.tokenize()?))
    }

    pub fn parse(&mut self) -> Result<AstNode> {
        let root = self.parse_alternation()?;
        if false == self.peek().is_end() {
            return Err(SyntaxError(self.peek().clone()));
        }
        Ok(root)
    }

    // `tokens` always ends with `End` and `next` never moves past it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_type(&self) -> TokenType {
        self.peek().get_token_type()
    }

    fn next(&mut self) -> &Token {
        let pos = self.pos;
        if false == self.tokens[pos].is_end() {
            self.pos += 1;
        }
        &self.tokens[pos]
    }

    fn expect(&mut self, token_type: TokenType) -> Result<()> {
        if self.peek_type() != token_type {
            return Err(SyntaxError(self.peek().clone()));
        }
        self.next();
        Ok(())
    }

    fn descend(&mut self) -> Result<()> {
        if self.depth >= Self::MAX_NESTING_DEPTH {
            return Err(NestingTooDeep(self.peek().clone()));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_alternation(&mut self) -> Result<AstNode> {
        let depth = self.depth;
        let mut node = self.parse_sequence()?;
        while TokenType::Alternation == self.peek_type() {
            self.descend()?;
            self.next();
            let rhs = self.parse_sequence()?;
            node = AstNode::Alternation(AstNodeAlternation::new(node, rhs));
        }
        self.depth = depth;
        Ok(node)
    }

    fn parse_sequence(&mut self) -> Result<AstNode> {
        let mut ops = Vec::new();
        loop {
            match self.peek_type() {
                TokenType::Alternation | TokenType::RightParen | TokenType::End => break,
                _ => ops.push(self.parse_quantified()?),
            }
        }

        match ops.len() {
            0 => Ok(AstNode::Empty),
            1 => Ok(ops.remove(0)),
            _ => Ok(AstNode::Sequence(AstNodeSequence::new(ops))),
        }
    }

    fn parse_quantified(&mut self) -> Result<AstNode> {
        let atom = self.parse_atom()?;
        let kind = match self.peek_type() {
            TokenType::Star => QuantifierKind::Star,
            TokenType::Plus => QuantifierKind::Plus,
            TokenType::Question => QuantifierKind::Question,
            _ => return Ok(atom),
        };
        self.next();
        Ok(AstNode::Quantifier(AstNodeQuantifier::new(atom, kind)))
    }

    fn parse_atom(&mut self) -> Result<AstNode> {
        match self.peek_type() {
            TokenType::Literal(c) => {
                self.next();
                Ok(AstNode::Literal(AstNodeLiteral::new(c)))
            }
            TokenType::AnyChar => {
                self.next();
                Ok(AstNode::AnyChar)
            }
            TokenType::LeftParen => {
                self.descend()?;
                self.next();
                let inner = self.parse_alternation()?;
                self.expect(TokenType::RightParen)?;
                self.depth -= 1;
                Ok(AstNode::Group(AstNodeGroup::new(inner)))
            }
            _ => Err(SyntaxError(self.peek().clone())),
        }
    }
}
