#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a defect in the compiler itself rather than in the user's input.
///
/// These conditions are unreachable for any token stream that passed the
/// grammar checks; observing one means a reduction pass or the lowering stage
/// violated its own invariant.
pub enum InternalError {
    /// The four reduction passes left more than one element on the list.
    UnreducedElements {
        /// How many elements remained.
        remaining: usize,
    },
    /// Lowering met a variable that is not in the expression's binding order.
    UnboundVariable {
        /// The variable name.
        name: String,
    },
    /// Lowering met a function name absent from the registry, even though the
    /// parser validated it against the same registry.
    UnknownFunction {
        /// The function name.
        name: String,
    },
    /// The parser met a constant-name token whose name is absent from the
    /// registry, even though the lexer classified it against the same one.
    UnknownConstant {
        /// The constant name.
        name: String,
    },
}

impl std::fmt::Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreducedElements { remaining } => {
                write!(f,
                       "Internal error: reduction left {remaining} elements instead of one.")
            },
            Self::UnboundVariable { name } => {
                write!(f,
                       "Internal error: variable '{name}' is missing from the binding order.")
            },
            Self::UnknownFunction { name } => {
                write!(f,
                       "Internal error: function '{name}' vanished from the registry.")
            },
            Self::UnknownConstant { name } => {
                write!(f,
                       "Internal error: constant '{name}' vanished from the registry.")
            },
        }
    }
}

impl std::error::Error for InternalError {}
