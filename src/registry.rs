use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Signature of a native numeric operation backing a registry function.
///
/// The slice holds exactly as many values as the function's declared arity;
/// the parser guarantees this before a call node is ever built, and the
/// evaluator slices the operand stack accordingly.
pub type NativeFn = fn(&[f64]) -> f64;

/// A registry entry describing one named function.
#[derive(Debug, Clone, Copy)]
pub struct Function {
    /// The number of arguments the function requires.
    pub arity:  usize,
    /// The native operation invoked with the evaluated arguments.
    pub native: NativeFn,
}

/// The fixed table of named functions and constants.
///
/// A `Registry` is consumed read-only by all three pipeline stages: the lexer
/// uses it to classify identifiers, the parser to check arities and substitute
/// constant values, and the code generator to resolve call targets. It is
/// populated once and never mutated afterwards, so a single instance can be
/// shared by any number of concurrent compilations without locking.
///
/// Most callers use [`standard`], the process-wide table matching the
/// documented default (`pi`, `e`, `sin`, `cos`, `tan`, `exp`, `sqrt`, `pow`);
/// a custom instance can be built with [`Registry::with_entries`] for tests or
/// embedding.
#[derive(Debug, Clone)]
pub struct Registry {
    functions: HashMap<String, Function>,
    constants: HashMap<String, f64>,
}

impl Registry {
    /// Creates a registry from explicit function and constant tables.
    ///
    /// # Parameters
    /// - `functions`: `(name, arity, native operation)` triples.
    /// - `constants`: `(name, value)` pairs.
    ///
    /// # Example
    /// ```
    /// use exprfn::registry::Registry;
    ///
    /// let registry = Registry::with_entries(&[("double", 1, |args: &[f64]| args[0] * 2.0)],
    ///                                       &[("answer", 42.0)]);
    /// assert!(registry.function("double").is_some());
    /// assert_eq!(registry.constant("answer"), Some(42.0));
    /// ```
    #[must_use]
    pub fn with_entries(functions: &[(&str, usize, NativeFn)], constants: &[(&str, f64)]) -> Self {
        Self { functions: functions.iter()
                                   .map(|&(name, arity, native)| {
                                       (name.to_string(), Function { arity, native })
                                   })
                                   .collect(),
               constants: constants.iter()
                                   .map(|&(name, value)| (name.to_string(), value))
                                   .collect(), }
    }

    /// Builds the standard registry: `pi` and `e` as constants, the unary
    /// transcendental functions `sin`, `cos`, `tan`, `exp`, `sqrt`, and the
    /// binary `pow` (which also implements the `^` operator).
    #[must_use]
    pub fn standard() -> Self {
        Self::with_entries(&[("sin", 1, |args: &[f64]| args[0].sin()),
                             ("cos", 1, |args: &[f64]| args[0].cos()),
                             ("tan", 1, |args: &[f64]| args[0].tan()),
                             ("exp", 1, |args: &[f64]| args[0].exp()),
                             ("sqrt", 1, |args: &[f64]| args[0].sqrt()),
                             ("pow", 2, |args: &[f64]| args[0].powf(args[1]))],
                           &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)])
    }

    /// Looks up a function entry by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Looks up a constant value by name.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Returns `true` if `name` denotes a registered function.
    #[must_use]
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns `true` if `name` denotes a registered constant.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }
}

static STANDARD: Lazy<Registry> = Lazy::new(Registry::standard);

/// Returns the process-wide standard registry.
///
/// Initialized lazily on first use and shared read-only afterwards; safe to
/// hand to any number of threads.
#[must_use]
pub fn standard() -> &'static Registry {
    &STANDARD
}
