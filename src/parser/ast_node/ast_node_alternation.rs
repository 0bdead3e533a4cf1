use super::ast_node::AstNode;

pub struct AstNodeAlternation {
    m_op1: Box<AstNode>,
    m_op2: Box<AstNode>,
}

impl AstNodeAlternation {
    pub(crate) fn new(p0: AstNode, p1: AstNode) -> AstNodeAlternation {
        AstNodeAlternation {
            m_op1: Box::new(p0),
            m_op2: Box::new(p1),
        }
    }

    pub fn get_op1(&self) -> &AstNode {
        &self.m_op1
    }

    pub fn get_op2(&self) -> &AstNode {
        &self.m_op2
    }
}

impl PartialEq for AstNodeAlternation {
    fn eq(&self, other: &Self) -> bool {
        self.m_op1 == other.m_op1 && self.m_op2 == other.m_op2
    }
}

impl std::fmt::Debug for AstNodeAlternation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Alternation( {:?} {:?} )", self.m_op1, self.m_op2)
    }
}
