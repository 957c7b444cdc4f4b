mod eval_error;
mod internal_error;
mod lexical_error;
mod syntax_error;

pub use eval_error::EvalError;
pub use internal_error::InternalError;
pub use lexical_error::LexicalError;
pub use syntax_error::SyntaxError;

#[derive(Debug, Clone, PartialEq)]
/// Umbrella over everything that can go wrong between source text and a
/// compiled function.
///
/// The three categories are deliberately kept distinct so a driving layer can
/// match on them and render different diagnostics, as the error contract
/// requires. Evaluation-time errors ([`EvalError`]) are not part of this enum;
/// they belong to the compiled function's invocation surface.
pub enum CompileError {
    /// The tokenizer rejected a character.
    Lexical(LexicalError),
    /// The parser rejected the token stream.
    Syntax(SyntaxError),
    /// A compiler invariant was violated; a defect, not an input problem.
    Internal(InternalError),
}

impl From<LexicalError> for CompileError {
    fn from(error: LexicalError) -> Self {
        Self::Lexical(error)
    }
}

impl From<SyntaxError> for CompileError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<InternalError> for CompileError {
    fn from(error: InternalError) -> Self {
        Self::Internal(error)
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(error) => error.fmt(f),
            Self::Syntax(error) => error.fmt(f),
            Self::Internal(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for CompileError {}
