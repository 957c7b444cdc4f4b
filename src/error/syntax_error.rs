use crate::compiler::lexer::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents all grammar violations the parser can detect.
///
/// Every variant that has an offending token carries it, so a driving layer
/// can point at the exact source position. End-of-input conditions have no
/// token to carry. Syntax errors are fatal to the parse: no recovery is
/// attempted and no partial tree is produced.
pub enum SyntaxError {
    /// A literal token did not parse as a number.
    IncorrectLiteral {
        /// The offending literal token.
        token: Token,
    },
    /// An expression was required but none was found.
    ///
    /// Raised for an empty input (no token available to carry) and for an
    /// opening parenthesis with nothing after it.
    ExpressionExpected {
        /// The token after which the expression was expected, if any.
        token: Option<Token>,
    },
    /// A closing parenthesis `)` was expected but not found.
    ClosingParenExpected {
        /// The token that opened the unterminated group.
        token: Token,
    },
    /// A function name was not followed by `(`.
    ArgumentListExpected {
        /// The function-name token.
        token: Token,
    },
    /// The input ended where a function argument should begin.
    ArgumentExpected {
        /// The `(` or `,` preceding the missing argument.
        token: Token,
    },
    /// A function call supplied the wrong number of arguments.
    ParameterCountMismatch {
        /// The function-name token.
        token:    Token,
        /// The arity declared in the registry.
        expected: usize,
        /// The argument count actually parsed.
        found:    usize,
    },
    /// A token kind that cannot begin a primary expression.
    UnexpectedToken {
        /// The offending token.
        token: Token,
    },
    /// An infix operator had no expression to its left.
    LeftOperandExpected {
        /// The operator token.
        token: Token,
    },
    /// An infix operator had no expression to its right.
    RightOperandExpected {
        /// The operator token.
        token: Token,
    },
    /// The input ended with a dangling sign or operator.
    TrailingExpressionExpected,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncorrectLiteral { token } => {
                write!(f,
                       "Syntax error at position {}: incorrect literal '{}'.",
                       token.position, token)
            },
            Self::ExpressionExpected { token: Some(token) } => {
                write!(f,
                       "Syntax error at position {}: expression expected.",
                       token.position)
            },
            Self::ExpressionExpected { token: None } => {
                write!(f, "Syntax error: expression expected.")
            },
            Self::ClosingParenExpected { token } => {
                write!(f,
                       "Syntax error at position {}: closing parenthesis ')' expected.",
                       token.position)
            },
            Self::ArgumentListExpected { token } => {
                write!(f,
                       "Syntax error at position {}: argument list expected after '{}'.",
                       token.position, token)
            },
            Self::ArgumentExpected { token } => {
                write!(f,
                       "Syntax error at position {}: argument expected.",
                       token.position)
            },
            Self::ParameterCountMismatch { token,
                                           expected,
                                           found, } => {
                write!(f,
                       "Syntax error at position {}: '{}' expects {} parameter(s), got {}.",
                       token.position, token, expected, found)
            },
            Self::UnexpectedToken { token } => {
                write!(f,
                       "Syntax error at position {}: unexpected token '{}'.",
                       token.position, token)
            },
            Self::LeftOperandExpected { token } => {
                write!(f,
                       "Syntax error at position {}: left expression expected for '{}'.",
                       token.position, token)
            },
            Self::RightOperandExpected { token } => {
                write!(f,
                       "Syntax error at position {}: right expression expected for '{}'.",
                       token.position, token)
            },
            Self::TrailingExpressionExpected => {
                write!(f, "Syntax error: expression expected at end of text.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
