/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core node traits, wrappers and indentation
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the program root and statement nodes
/// - types: The unresolved type name used in declarations
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
