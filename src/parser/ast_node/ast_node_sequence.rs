use super::ast_node::AstNode;

// Only built for two or more operands; shorter sequences collapse to the
// single operand or to `AstNode::Empty`.
pub struct AstNodeSequence {
    m_ops: Vec<AstNode>,
}

impl AstNodeSequence {
    pub(crate) fn new(ops: Vec<AstNode>) -> AstNodeSequence {
        AstNodeSequence { m_ops: ops }
    }

    pub fn get_ops(&self) -> &[AstNode] {
        &self.m_ops
    }
}

impl PartialEq for AstNodeSequence {
    fn eq(&self, other: &Self) -> bool {
        self.m_ops == other.m_ops
    }
}

impl std::fmt::Debug for AstNodeSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Sequence(")?;
        for op in &self.m_ops {
            write!(f, " {:?}", op)?;
        }
        write!(f, " )")
    }
}
