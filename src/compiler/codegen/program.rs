use std::collections::HashMap;

use super::instruction::Instruction;
use crate::error::EvalError;

/// An executable numeric function compiled from one expression.
///
/// The function takes one `f64` per distinct variable of the source
/// expression, in ascending name order, and returns one `f64`. It holds no
/// mutable state, so a single instance can be invoked any number of times,
/// from any number of threads, always producing the same output for the same
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFunction {
    pub(super) instructions: Vec<Instruction>,
    pub(super) constants:    Vec<f64>,
    pub(super) variables:    Vec<String>,
    pub(super) max_stack:    usize,
}

impl CompiledFunction {
    /// The variable names this function reads, in ascending order; argument
    /// position `i` of [`call`](Self::call) binds `variables()[i]`.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// How many arguments [`call`](Self::call) requires.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.variables.len()
    }

    /// Invokes the function with positional arguments.
    ///
    /// # Parameters
    /// - `args`: One value per variable, in the order of
    ///   [`variables`](Self::variables).
    ///
    /// # Returns
    /// The computed value. Numeric edge cases follow IEEE 754 semantics:
    /// division by zero yields an infinity and invalid operations yield NaN,
    /// neither is an error.
    ///
    /// # Errors
    /// [`EvalError::ArgumentCountMismatch`] if `args.len()` differs from
    /// [`arity`](Self::arity).
    ///
    /// # Example
    /// ```
    /// let function = exprfn::compile("a + b / b + a").unwrap();
    /// assert_eq!(function.call(&[3.0, 4.0]), Ok(7.0));
    /// ```
    pub fn call(&self, args: &[f64]) -> Result<f64, EvalError> {
        if args.len() != self.variables.len() {
            return Err(EvalError::ArgumentCountMismatch { expected: self.variables.len(),
                                                          found:    args.len(), });
        }

        let mut stack = vec![0.0; self.max_stack];
        let mut top = 0;

        for instruction in &self.instructions {
            match *instruction {
                Instruction::LoadConst(index) => {
                    stack[top] = self.constants[index];
                    top += 1;
                },
                Instruction::LoadArg(index) => {
                    stack[top] = args[index];
                    top += 1;
                },
                Instruction::Negate => stack[top - 1] = -stack[top - 1],
                Instruction::Add => {
                    top -= 1;
                    stack[top - 1] += stack[top];
                },
                Instruction::Sub => {
                    top -= 1;
                    stack[top - 1] -= stack[top];
                },
                Instruction::Mul => {
                    top -= 1;
                    stack[top - 1] *= stack[top];
                },
                Instruction::Div => {
                    top -= 1;
                    stack[top - 1] /= stack[top];
                },
                Instruction::Call { native, arity } => {
                    let base = top - arity;
                    stack[base] = native(&stack[base..top]);
                    top = base + 1;
                },
            }
        }

        Ok(stack[top - 1])
    }

    /// Invokes the function with named bindings instead of positional
    /// arguments.
    ///
    /// # Errors
    /// [`EvalError::UndefinedVariables`] listing every variable `bindings`
    /// does not cover, in ascending order. Extra bindings are ignored.
    pub fn call_bound(&self, bindings: &HashMap<String, f64>) -> Result<f64, EvalError> {
        let mut args = Vec::with_capacity(self.variables.len());
        let mut missing = Vec::new();

        for name in &self.variables {
            match bindings.get(name) {
                Some(value) => args.push(*value),
                None => missing.push(name.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(EvalError::UndefinedVariables { names: missing });
        }
        self.call(&args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_with_one() -> CompiledFunction {
        CompiledFunction { instructions: vec![Instruction::LoadArg(0),
                                              Instruction::LoadConst(0),
                                              Instruction::Add],
                           constants:    vec![1.0],
                           variables:    vec!["x".to_string()],
                           max_stack:    2, }
    }

    #[test]
    fn call_executes_the_stack_program() {
        assert_eq!(sum_with_one().call(&[2.0]), Ok(3.0));
    }

    #[test]
    fn call_rejects_a_wrong_argument_count() {
        assert_eq!(sum_with_one().call(&[]),
                   Err(EvalError::ArgumentCountMismatch { expected: 1,
                                                          found:    0, }));
        assert_eq!(sum_with_one().call(&[1.0, 2.0]),
                   Err(EvalError::ArgumentCountMismatch { expected: 1,
                                                          found:    2, }));
    }

    #[test]
    fn call_bound_reads_arguments_by_name() {
        let bindings = HashMap::from([("x".to_string(), 41.0), ("unused".to_string(), 0.0)]);
        assert_eq!(sum_with_one().call_bound(&bindings), Ok(42.0));
    }

    #[test]
    fn call_bound_lists_every_missing_name_in_order() {
        let function = CompiledFunction { instructions: vec![Instruction::LoadArg(0),
                                                             Instruction::LoadArg(1),
                                                             Instruction::LoadArg(2),
                                                             Instruction::Add,
                                                             Instruction::Add],
                                          constants:    Vec::new(),
                                          variables:    vec!["a".to_string(),
                                                             "b".to_string(),
                                                             "c".to_string()],
                                          max_stack:    3, };
        let bindings = HashMap::from([("b".to_string(), 1.0)]);

        assert_eq!(function.call_bound(&bindings),
                   Err(EvalError::UndefinedVariables { names: vec!["a".to_string(),
                                                                   "c".to_string()] }));
    }

    #[test]
    fn division_by_zero_follows_ieee_semantics() {
        let function = CompiledFunction { instructions: vec![Instruction::LoadConst(0),
                                                             Instruction::LoadConst(1),
                                                             Instruction::Div],
                                          constants:    vec![1.0, 0.0],
                                          variables:    Vec::new(),
                                          max_stack:    2, };

        assert_eq!(function.call(&[]), Ok(f64::INFINITY));
    }
}
