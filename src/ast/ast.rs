use std::{any::Any, fmt::Debug};

use crate::Location;

/// Rendering depth. Statements start their output with the indentation,
/// expressions only indent lines after their first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indentation(pub usize);

impl Indentation {
    pub fn indent(&self) -> String {
        " ".repeat(self.0 * 4)
    }

    pub fn deeper(&self) -> Indentation {
        Indentation(self.0 + 1)
    }
}

/// Node Trait
///
/// Behaviour shared by every node in the AST.
pub trait Node: Debug {
    /// Literal text of the token the node originates from.
    fn token_literal(&self) -> &str;
    /// Structured text rendering at the given depth.
    fn render(&self, indentation: Indentation) -> String;
    /// Location of the node's first token.
    fn get_location(&self) -> Location;
}

/// Statement Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum StmtType {
    Block,
    Function,
    ImplicitVariableDefinition,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Node {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt + Send>);

impl StmtWrapper {
    pub fn new<T: Stmt + Send + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Node for StmtWrapper {
    fn token_literal(&self) -> &str {
        self.0.token_literal()
    }
    fn render(&self, indentation: Indentation) -> String {
        self.0.render(indentation)
    }
    fn get_location(&self) -> Location {
        self.0.get_location()
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ExprType {
    IntegerLiteral,
}

/// Expression Trait
///
/// Defines the behavior of all expression types in the AST.
pub trait Expr: Node {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    fn clone_wrapper(&self) -> ExprWrapper;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr + Send>);

impl ExprWrapper {
    pub fn new<T: Expr + Send + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Node for ExprWrapper {
    fn token_literal(&self) -> &str {
        self.0.token_literal()
    }
    fn render(&self, indentation: Indentation) -> String {
        self.0.render(indentation)
    }
    fn get_location(&self) -> Location {
        self.0.get_location()
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}
