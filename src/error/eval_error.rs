#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur when invoking a compiled function.
///
/// Binding problems surface here, at evaluation time, not at compile time: a
/// compiled function knows which variables it reads but cannot know what the
/// caller will supply until it is called.
pub enum EvalError {
    /// Named bindings did not cover every variable the expression references.
    UndefinedVariables {
        /// The missing names, in ascending order.
        names: Vec<String>,
    },
    /// A positional call supplied the wrong number of arguments.
    ArgumentCountMismatch {
        /// How many arguments the compiled function requires.
        expected: usize,
        /// How many the caller supplied.
        found:    usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariables { names } => {
                write!(f, "Undefined variables found: {}.", names.join(", "))
            },
            Self::ArgumentCountMismatch { expected, found } => {
                write!(f, "Expected {expected} argument(s), got {found}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
