use crate::registry::NativeFn;

/// One operation of the stack program a syntax tree is lowered into.
///
/// Every instruction's stack effect is fixed: loads push one value, `Negate`
/// rewrites the top in place, the arithmetic instructions replace the top two
/// values with one, and `Call` replaces the top `arity` values with one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Instruction {
    /// Push the constant-pool entry at the given index.
    LoadConst(usize),
    /// Push the caller argument at the given binding-order index.
    LoadArg(usize),
    /// Negate the value on top of the stack.
    Negate,
    /// Pop two values, push their sum.
    Add,
    /// Pop two values, push their difference.
    Sub,
    /// Pop two values, push their product.
    Mul,
    /// Pop two values, push their quotient.
    Div,
    /// Pop `arity` values, pass them to `native`, push the result.
    Call {
        /// The registry-provided native operation.
        native: NativeFn,
        /// How many operands the call consumes.
        arity:  usize,
    },
}
