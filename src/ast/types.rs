use std::fmt::Display;

/// A type as written in the source: the bare identifier text, not yet
/// resolved to anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type(pub String);

impl Type {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Type {
    fn from(name: &str) -> Self {
        Type(name.to_string())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
