use crate::parser::ast_node::{AstNode, AstNodeQuantifier, QuantifierKind};
use tracing::trace;

/// Walks an AST against a text. Offsets are counted in `char`s.
///
/// Quantifiers are greedy and never give back what they consumed: `a*a`
/// does not match `"aaa"`. Only alternation retries, and only between its
/// two branches at the same offset.
pub struct Matcher<'a> {
    ast: &'a AstNode,
}

impl<'a> Matcher<'a> {
    pub fn new(ast: &'a AstNode) -> Self {
        Self { ast }
    }

    /// Unanchored search: true if the AST matches starting at any offset in
    /// `0..=text.len()`.
    pub fn is_match(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        (0..=chars.len()).any(|start| match self.match_at(&chars, start) {
            Some(end) => {
                trace!(start, end, "matched");
                true
            }
            None => false,
        })
    }

    /// Matches the whole AST at `pos`, returning the offset one past the
    /// consumed input.
    pub fn match_at(&self, text: &[char], pos: usize) -> Option<usize> {
        Self::match_node(self.ast, text, pos)
    }

    fn match_node(node: &AstNode, text: &[char], pos: usize) -> Option<usize> {
        match node {
            AstNode::Empty => Some(pos),
            AstNode::Literal(literal) => match text.get(pos) {
                Some(&c) if c == literal.get_value() => Some(pos + 1),
                _ => None,
            },
            AstNode::AnyChar => (pos < text.len()).then_some(pos + 1),
            AstNode::Sequence(sequence) => sequence
                .get_ops()
                .iter()
                .try_fold(pos, |curr_pos, op| Self::match_node(op, text, curr_pos)),
            AstNode::Alternation(alternation) => {
                Self::match_node(alternation.get_op1(), text, pos)
                    .or_else(|| Self::match_node(alternation.get_op2(), text, pos))
            }
            AstNode::Quantifier(quantifier) => Self::match_quantifier(quantifier, text, pos),
            AstNode::Group(group) => Self::match_node(group.get_op1(), text, pos),
        }
    }

    fn match_quantifier(
        quantifier: &AstNodeQuantifier,
        text: &[char],
        pos: usize,
    ) -> Option<usize> {
        let op = quantifier.get_op1();
        match quantifier.get_kind() {
            QuantifierKind::Star => Some(Self::repeat(op, text, pos)),
            QuantifierKind::Plus => {
                let first = Self::match_node(op, text, pos)?;
                Some(Self::repeat(op, text, first))
            }
            QuantifierKind::Question => Self::match_node(op, text, pos).or(Some(pos)),
        }
    }

    // Stops at the first failing or zero-width repetition.
    fn repeat(op: &AstNode, text: &[char], pos: usize) -> usize {
        let mut curr_pos = pos;
        while let Some(next_pos) = Self::match_node(op, text, curr_pos) {
            if next_pos <= curr_pos {
                break;
            }
            curr_pos = next_pos;
        }
        curr_pos
    }
}
