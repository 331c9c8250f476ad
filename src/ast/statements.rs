use std::{any::Any, fmt::Display, slice::Iter};

use crate::{lexer::tokens::Token, Location};

use super::{
    ast::{ExprWrapper, Indentation, Node, Stmt, StmtType, StmtWrapper},
    types::Type,
};

/// Root of the tree: the top-level statements of one compilation unit, in
/// source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn render(&self) -> String {
        self.statements
            .iter()
            .map(|statement| statement.render(Indentation::default()))
            .collect()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[derive(Debug, Clone)]
pub struct Block {
    /// The `{` token
    pub token: Token,
    pub statements: Vec<StmtWrapper>,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }

    /// Renders the braces and body without the leading indentation, so the
    /// block can follow a header on the same line.
    pub fn render_body(&self, indentation: Indentation) -> String {
        let mut out = String::from("{\n");
        for statement in &self.statements {
            out.push_str(&statement.render(indentation.deeper()));
        }
        out.push_str(&indentation.indent());
        out.push_str("}\n");
        out
    }
}

impl Node for Block {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self, indentation: Indentation) -> String {
        indentation.indent() + &self.render_body(indentation)
    }
    fn get_location(&self) -> Location {
        self.token.location
    }
}

impl Stmt for Block {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::Block
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArgument {
    pub name: String,
    pub type_: Type,
}

#[derive(Debug, Clone)]
pub struct Function {
    /// The `fn` token
    pub token: Token,
    pub name: String,
    pub arguments: Vec<FunctionArgument>,
    pub return_type: Option<Type>,
    pub body: Block,
}

impl Function {
    pub fn has_return_type(&self) -> bool {
        self.return_type.is_some()
    }
}

impl Node for Function {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self, indentation: Indentation) -> String {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| format!("{} {}", argument.name, argument.type_))
            .collect::<Vec<String>>()
            .join(", ");

        let mut out = format!("{}fn {}({}) ", indentation.indent(), self.name, arguments);
        if let Some(return_type) = &self.return_type {
            out.push_str(&format!("{} ", return_type));
        }
        out.push_str(&self.body.render_body(indentation));

        out
    }
    fn get_location(&self) -> Location {
        self.token.location
    }
}

impl Stmt for Function {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::Function
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}

/// `name := value`
#[derive(Debug, Clone)]
pub struct ImplicitVariableDefinition {
    /// The name's identifier token
    pub token: Token,
    pub name: String,
    pub value: ExprWrapper,
}

impl Node for ImplicitVariableDefinition {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn render(&self, indentation: Indentation) -> String {
        format!(
            "{}{} := {}\n",
            indentation.indent(),
            self.name,
            self.value.render(indentation)
        )
    }
    fn get_location(&self) -> Location {
        self.token.location
    }
}

impl Stmt for ImplicitVariableDefinition {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ImplicitVariableDefinition
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
}
