//! The compilation pipeline from source text to an executable function.
//!
//! The stages are strictly layered and communicate only through their output
//! values:
//!
//! 1. [`lexer`] turns the source string into a stream of classified tokens.
//! 2. [`parser`] turns the token stream into an [`Expression`]: a syntax tree
//!    plus the expression's variable binding order.
//! 3. [`codegen`] lowers the tree into a [`CompiledFunction`] that can be
//!    invoked any number of times with concrete arguments.
//!
//! [`Expression`]: crate::ast::Expression
//! [`CompiledFunction`]: codegen::CompiledFunction

pub mod codegen;
pub mod lexer;
pub mod parser;
