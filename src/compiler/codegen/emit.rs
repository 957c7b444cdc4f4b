use super::{instruction::Instruction, program::CompiledFunction};
use crate::{ast::{BinaryOperator, Expression, Node},
            error::InternalError,
            registry::Registry};

/// The native operation behind the `^` operator. Hardwired rather than
/// looked up, so exponentiation works under any registry.
fn raise(args: &[f64]) -> f64 {
    args[0].powf(args[1])
}

/// Lowers an expression into a [`CompiledFunction`].
///
/// The tree is walked post-order once; operands are emitted before the
/// instruction that consumes them, and the operand stack's high-water mark
/// is tracked along the way. Call nodes must have been arity-checked against
/// `registry`, as the parser guarantees.
///
/// # Parameters
/// - `expression`: The parsed expression to lower.
/// - `registry`: The table call targets are resolved against. Must be the
///   registry the expression was parsed with.
///
/// # Returns
/// The compiled function, or an [`InternalError`] if the tree references a
/// variable outside the expression's binding order or a function missing
/// from `registry`.
///
/// # Example
/// ```
/// use exprfn::{compiler::{codegen::lower, lexer::tokenize, parser::parse}, registry};
///
/// let registry = registry::standard();
/// let expression = parse(tokenize("x + 1", registry), registry).unwrap();
/// let function = lower(&expression, registry).unwrap();
/// assert_eq!(function.call(&[2.0]), Ok(3.0));
/// ```
pub fn lower(expression: &Expression, registry: &Registry) -> Result<CompiledFunction, InternalError> {
    let mut codegen = Codegen { instructions: Vec::new(),
                                constants: Vec::new(),
                                variables: &expression.variables,
                                registry,
                                depth: 0,
                                max_depth: 0 };
    codegen.emit_node(&expression.root)?;

    Ok(CompiledFunction { instructions: codegen.instructions,
                          constants:    codegen.constants,
                          variables:    expression.variables.clone(),
                          max_stack:    codegen.max_depth, })
}

/// Accumulated emission state for one lowering run.
struct Codegen<'a> {
    instructions: Vec<Instruction>,
    constants:    Vec<f64>,
    variables:    &'a [String],
    registry:     &'a Registry,
    depth:        usize,
    max_depth:    usize,
}

impl Codegen<'_> {
    fn emit_node(&mut self, node: &Node) -> Result<(), InternalError> {
        match node {
            Node::Number(value) => {
                let index = self.constant_index(*value);
                self.instructions.push(Instruction::LoadConst(index));
                self.push();
            },
            Node::Variable(name) => {
                // The binding order is sorted, so the argument slot is the
                // name's rank within it.
                let Ok(index) = self.variables.binary_search_by(|v| v.as_str().cmp(name)) else {
                    return Err(InternalError::UnboundVariable { name: name.clone() });
                };
                self.instructions.push(Instruction::LoadArg(index));
                self.push();
            },
            Node::Negation(inner) => {
                self.emit_node(inner)?;
                self.instructions.push(Instruction::Negate);
            },
            Node::BinaryOp { left, right, op } => {
                self.emit_node(left)?;
                self.emit_node(right)?;
                let instruction = match op {
                    BinaryOperator::Add => Instruction::Add,
                    BinaryOperator::Sub => Instruction::Sub,
                    BinaryOperator::Mul => Instruction::Mul,
                    BinaryOperator::Div => Instruction::Div,
                    BinaryOperator::Pow => Instruction::Call { native: raise,
                                                               arity:  2, },
                };
                self.instructions.push(instruction);
                self.depth -= 1;
            },
            Node::Call { name, args } => {
                for arg in args {
                    self.emit_node(arg)?;
                }
                let Some(function) = self.registry.function(name) else {
                    return Err(InternalError::UnknownFunction { name: name.clone() });
                };
                self.instructions.push(Instruction::Call { native: function.native,
                                                           arity:  function.arity, });
                self.depth = self.depth + 1 - function.arity;
                self.max_depth = self.max_depth.max(self.depth);
            },
        }
        Ok(())
    }

    fn push(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    /// Returns the pool index for `value`, reusing an existing entry when the
    /// bit patterns match exactly (so `0.0` and `-0.0` stay distinct).
    fn constant_index(&mut self, value: f64) -> usize {
        if let Some(index) = self.constants
                                 .iter()
                                 .position(|constant| constant.to_bits() == value.to_bits())
        {
            return index;
        }
        self.constants.push(value);
        self.constants.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn number(value: f64) -> Node {
        Node::Number(value)
    }

    #[test]
    fn repeated_constants_share_one_pool_entry() {
        let root = Node::binary(number(2.0), number(2.0), BinaryOperator::Add);
        let expression = Expression { root,
                                      variables: Vec::new() };
        let function = lower(&expression, registry::standard()).expect("should lower");

        assert_eq!(function.constants, vec![2.0]);
        assert_eq!(function.instructions,
                   vec![Instruction::LoadConst(0), Instruction::LoadConst(0), Instruction::Add]);
    }

    #[test]
    fn zero_and_negative_zero_get_distinct_pool_entries() {
        let root = Node::binary(number(0.0), number(-0.0), BinaryOperator::Add);
        let expression = Expression { root,
                                      variables: Vec::new() };
        let function = lower(&expression, registry::standard()).expect("should lower");

        assert_eq!(function.constants.len(), 2);
    }

    #[test]
    fn stack_high_water_mark_follows_the_deepest_operand_chain() {
        // 1 + 2 * 3 holds three operands at its deepest point.
        let root = Node::binary(number(1.0),
                                Node::binary(number(2.0), number(3.0), BinaryOperator::Mul),
                                BinaryOperator::Add);
        let expression = Expression { root,
                                      variables: Vec::new() };
        let function = lower(&expression, registry::standard()).expect("should lower");

        assert_eq!(function.max_stack, 3);
    }

    #[test]
    fn variables_load_their_binding_order_slot() {
        let root = Node::binary(Node::Variable("b".to_string()),
                                Node::Variable("a".to_string()),
                                BinaryOperator::Sub);
        let expression = Expression { root,
                                      variables: vec!["a".to_string(), "b".to_string()] };
        let function = lower(&expression, registry::standard()).expect("should lower");

        assert_eq!(function.instructions,
                   vec![Instruction::LoadArg(1), Instruction::LoadArg(0), Instruction::Sub]);
    }

    #[test]
    fn variable_outside_the_binding_order_is_an_internal_error() {
        let expression = Expression { root:      Node::Variable("x".to_string()),
                                      variables: Vec::new(), };
        let error = lower(&expression, registry::standard());

        assert_eq!(error,
                   Err(InternalError::UnboundVariable { name: "x".to_string() }));
    }

    #[test]
    fn unknown_call_target_is_an_internal_error() {
        let expression = Expression { root:      Node::Call { name: "missing".to_string(),
                                                              args: vec![number(1.0)], },
                                      variables: Vec::new(), };
        let error = lower(&expression, registry::standard());

        assert_eq!(error,
                   Err(InternalError::UnknownFunction { name: "missing".to_string() }));
    }
}
