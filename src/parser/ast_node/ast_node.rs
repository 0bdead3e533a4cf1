use super::ast_node_alternation::AstNodeAlternation;
use super::ast_node_group::AstNodeGroup;
use super::ast_node_literal::AstNodeLiteral;
use super::ast_node_quantifier::AstNodeQuantifier;
use super::ast_node_sequence::AstNodeSequence;

/// A node of the parsed pattern. Every node owns its children; the tree is
/// never mutated once the parser returns it.
pub enum AstNode {
    Empty,                           // Matches the empty string
    Literal(AstNodeLiteral),         // Single character literal
    AnyChar,                         // .
    Sequence(AstNodeSequence),       // Two or more concatenated expressions
    Alternation(AstNodeAlternation), // Either of two expressions
    Quantifier(AstNodeQuantifier),   // *, + or ? applied to an expression
    Group(AstNodeGroup),             // Parenthesized expression
}

impl PartialEq for AstNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AstNode::Empty, AstNode::Empty) => true,
            (AstNode::Literal(l1), AstNode::Literal(l2)) => l1 == l2,
            (AstNode::AnyChar, AstNode::AnyChar) => true,
            (AstNode::Sequence(s1), AstNode::Sequence(s2)) => s1 == s2,
            (AstNode::Alternation(a1), AstNode::Alternation(a2)) => a1 == a2,
            (AstNode::Quantifier(q1), AstNode::Quantifier(q2)) => q1 == q2,
            (AstNode::Group(g1), AstNode::Group(g2)) => g1 == g2,
            _ => false,
        }
    }
}

impl std::fmt::Debug for AstNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AstNode::Empty => write!(f, "Empty"),
            AstNode::Literal(l) => write!(f, "{:?}", l),
            AstNode::AnyChar => write!(f, "AnyChar"),
            AstNode::Sequence(s) => write!(f, "{:?}", s),
            AstNode::Alternation(a) => write!(f, "{:?}", a),
            AstNode::Quantifier(q) => write!(f, "{:?}", q),
            AstNode::Group(g) => write!(f, "{:?}", g),
        }
    }
}
