use super::ast_node::AstNode;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuantifierKind {
    Star,     // Zero or more
    Plus,     // One or more
    Question, // Zero or one
}

pub struct AstNodeQuantifier {
    m_op1: Box<AstNode>,
    m_kind: QuantifierKind,
}

impl AstNodeQuantifier {
    pub(crate) fn new(p0: AstNode, kind: QuantifierKind) -> AstNodeQuantifier {
        AstNodeQuantifier {
            m_op1: Box::new(p0),
            m_kind: kind,
        }
    }

    pub fn get_op1(&self) -> &AstNode {
        &self.m_op1
    }

    pub fn get_kind(&self) -> QuantifierKind {
        self.m_kind
    }
}

impl PartialEq for AstNodeQuantifier {
    fn eq(&self, other: &Self) -> bool {
        self.m_kind == other.m_kind && self.m_op1 == other.m_op1
    }
}

impl std::fmt::Debug for AstNodeQuantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}( {:?} )", self.m_kind, self.m_op1)
    }
}
