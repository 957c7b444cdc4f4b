/// An abstract syntax tree (AST) node representing a parsed arithmetic
/// expression.
///
/// `Node` is a closed set of variants covering everything the expression
/// grammar can produce: numeric literals (including substituted constants),
/// variable references, unary negation, binary operations, and calls to
/// registry functions. Each node exclusively owns its children, so the tree
/// has no sharing and no cycles; dropping the root drops the whole tree.
///
/// Nodes are immutable once built. `PartialEq` is derived so that tests can
/// compare trees structurally (e.g. implicit multiplication against its
/// explicit spelling).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal, or a named constant already resolved to its value.
    Number(f64),
    /// Reference to a caller-supplied variable by name.
    Variable(String),
    /// Unary minus applied to the contained node.
    Negation(Box<Node>),
    /// A binary operation combining two sub-expressions.
    BinaryOp {
        /// Left operand.
        left:  Box<Node>,
        /// Right operand.
        right: Box<Node>,
        /// The operator.
        op:    BinaryOperator,
    },
    /// A call to a registry function, e.g. `sin(x)`.
    ///
    /// The argument count has already been validated against the registry's
    /// declared arity at parse time.
    Call {
        /// Name of the function being called.
        name: String,
        /// Arguments in source order.
        args: Vec<Node>,
    },
}

impl Node {
    /// Combines two nodes with a binary operator.
    ///
    /// Small convenience used by the reduction passes, which build many
    /// `BinaryOp` nodes while splicing the element list.
    #[must_use]
    pub fn binary(left: Self, right: Self, op: BinaryOperator) -> Self {
        Self::BinaryOp { left:  Box::new(left),
                         right: Box::new(right),
                         op }
    }
}

/// Represents a binary operator of the expression grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`, or juxtaposition)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// The result of a successful parse: the AST root plus the expression's
/// variable binding order.
///
/// `variables` contains exactly the distinct variable names reachable from
/// `root`, sorted ascending lexicographically. The index of a name in this
/// sequence is the argument slot any function compiled from this expression
/// reads for that variable; the binding is established here, at parse time,
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Root of the syntax tree.
    pub root:      Node,
    /// Distinct variable names in ascending order; the positional argument
    /// contract of every compiled form of this expression.
    pub variables: Vec<String>,
}
