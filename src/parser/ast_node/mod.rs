pub(crate) mod ast_node;
mod ast_node_alternation;
mod ast_node_group;
mod ast_node_literal;
mod ast_node_quantifier;
mod ast_node_sequence;

pub use ast_node::AstNode;
pub use ast_node_alternation::AstNodeAlternation;
pub use ast_node_group::AstNodeGroup;
pub use ast_node_literal::AstNodeLiteral;
pub use ast_node_quantifier::{AstNodeQuantifier, QuantifierKind};
pub use ast_node_sequence::AstNodeSequence;
