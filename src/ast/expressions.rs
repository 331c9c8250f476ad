use std::any::Any;

use crate::{lexer::tokens::Token, Location};

use super::ast::{Expr, ExprType, ExprWrapper, Indentation, Node};

// LITERALS

/// Integer Literal
/// A 64-bit signed integer parsed from the decimal text of its token.
#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self, _indentation: Indentation) -> String {
        self.token.literal.clone()
    }
    fn get_location(&self) -> Location {
        self.token.location
    }
}

impl Expr for IntegerLiteral {
    fn get_expr_type(&self) -> ExprType {
        ExprType::IntegerLiteral
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
}
