pub struct AstNodeLiteral {
    m_value: char,
}

impl AstNodeLiteral {
    pub(crate) fn new(value: char) -> AstNodeLiteral {
        AstNodeLiteral { m_value: value }
    }

    pub fn get_value(&self) -> char {
        self.m_value
    }
}

impl PartialEq for AstNodeLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.m_value == other.m_value
    }
}

impl std::fmt::Debug for AstNodeLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Literal( {:?} )", self.m_value)
    }
}
