//! # exprfn
//!
//! exprfn compiles textual arithmetic expressions into executable numeric
//! functions. An expression such as `2x + 1` becomes a reusable function
//! taking one `f64` argument per distinct variable (in ascending name order)
//! and returning an `f64`; compilation happens once, invocation any number of
//! times.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::CompileError, registry::Registry};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum and related types that represent an
/// arithmetic expression as a tree, together with the expression's variable
/// binding order. The tree is built by the parser and consumed by the code
/// generator.
///
/// # Responsibilities
/// - Defines the node kinds the expression grammar can produce.
/// - Fixes the binding order: distinct variable names, sorted ascending.
/// - Enables structural comparison of trees for testing.
pub mod ast;
/// Orchestrates the pipeline from source text to executable function.
///
/// This module ties together the lexer, the parser, and the code generator.
/// Each stage is independent and communicates only through its output value,
/// so the stages can also be driven individually.
///
/// # Responsibilities
/// - Tokenizes source text against a registry.
/// - Parses the token stream by iterative list reduction.
/// - Lowers the syntax tree into a reusable stack program.
pub mod compiler;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, lowering, or invoking an expression, split into categories a
/// driving layer can match on: lexical, syntax, internal, and evaluation.
///
/// # Responsibilities
/// - Defines one error type per category, each carrying the offending
///   position or token where one exists.
/// - Collects the compile-time categories under `CompileError`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Declares the fixed table of named functions and constants.
///
/// This module defines the `Registry` the pipeline resolves identifiers
/// against, and the standard instance with `pi`, `e`, and the common
/// transcendental functions.
///
/// # Responsibilities
/// - Maps names to constant values and to native functions with arities.
/// - Provides the shared, immutable standard registry.
/// - Allows custom tables for tests or embedding.
pub mod registry;

pub use crate::compiler::codegen::CompiledFunction;

/// Compiles `source` against the standard registry.
///
/// Equivalent to [`compile_with`] with [`registry::standard`].
///
/// # Errors
/// Returns a [`CompileError`] if `source` fails to tokenize or parse, or if
/// an internal invariant breaks during lowering.
///
/// # Examples
/// ```
/// let double = exprfn::compile("2x").unwrap();
/// assert_eq!(double.call(&[5.0]), Ok(10.0));
///
/// let constant = exprfn::compile("2^3^2").unwrap();
/// assert_eq!(constant.call(&[]), Ok(64.0));
/// ```
pub fn compile(source: &str) -> Result<CompiledFunction, CompileError> {
    compile_with(source, registry::standard())
}

/// Compiles `source` against a caller-supplied registry.
///
/// The same registry classifies identifiers during tokenization, resolves
/// constants and arities during parsing, and provides call targets during
/// lowering.
///
/// # Errors
/// Returns a [`CompileError`] if `source` fails to tokenize or parse, or if
/// an internal invariant breaks during lowering.
///
/// # Examples
/// ```
/// use exprfn::registry::Registry;
///
/// let registry = Registry::with_entries(&[("half", 1, |args: &[f64]| args[0] / 2.0)], &[]);
/// let function = exprfn::compile_with("half(x) + 1", &registry).unwrap();
/// assert_eq!(function.call(&[8.0]), Ok(5.0));
/// ```
pub fn compile_with(source: &str, registry: &Registry) -> Result<CompiledFunction, CompileError> {
    let expression = compiler::parser::parse(compiler::lexer::tokenize(source, registry), registry)?;
    Ok(compiler::codegen::lower(&expression, registry)?)
}
