//! Grammar analysis: token stream in, syntax tree out.
//!
//! Precedence is not handled by recursive descent. A *group* (the whole
//! input, a parenthesized span, or one function argument) is first collected
//! into a flat list of finished nodes and raw operator tokens, and the list
//! is then collapsed by four reduction passes in a fixed order: exponents,
//! juxtaposed nodes (implicit multiplication), multiplicative operators,
//! additive operators. See [`reduce`] for the pass mechanics.

use std::{iter::Peekable, vec};

use crate::{ast::Expression,
            compiler::lexer::{Token, TokenKind},
            error::{CompileError, LexicalError, SyntaxError},
            registry::Registry};

mod group;
mod reduce;

/// The parser's view of the token stream: an owning, peekable cursor.
type Cursor = Peekable<vec::IntoIter<Token>>;

/// Parses a token stream into an [`Expression`].
///
/// Whitespace tokens are discarded up front; the remaining tokens are parsed
/// as one group. A group stops at the first unconsumed `)` or `,`, so tokens
/// after a stray top-level `)` are ignored rather than rejected.
///
/// The expression's binding order is the set of distinct variable names in
/// the stream, sorted ascending. It is fixed here and never recomputed by
/// later stages.
///
/// # Parameters
/// - `tokens`: The token stream, usually fresh from
///   [`tokenize`](crate::compiler::lexer::tokenize).
/// - `registry`: The table used to resolve constant values and function
///   arities. Must be the registry the tokens were classified against.
///
/// # Returns
/// The parsed [`Expression`], or the first error the pipeline detects.
///
/// # Errors
/// [`CompileError::Lexical`] if the stream contains a tokenization error,
/// [`CompileError::Syntax`] for any grammar violation, and
/// [`CompileError::Internal`] if a reduction invariant breaks.
///
/// # Example
/// ```
/// use exprfn::{compiler::{lexer::tokenize, parser::parse}, registry};
///
/// let registry = registry::standard();
/// let expression = parse(tokenize("2x + 1", registry), registry).unwrap();
/// assert_eq!(expression.variables, vec!["x"]);
/// ```
pub fn parse<I>(tokens: I, registry: &Registry) -> Result<Expression, CompileError>
    where I: IntoIterator<Item = Result<Token, LexicalError>>
{
    let tokens = tokens.into_iter()
                       .filter(|token| !matches!(token, Ok(t) if t.kind == TokenKind::WhiteSpace))
                       .collect::<Result<Vec<_>, _>>()?;

    if tokens.is_empty() {
        return Err(SyntaxError::ExpressionExpected { token: None }.into());
    }

    let mut variables: Vec<String> = tokens.iter()
                                           .filter(|token| token.kind == TokenKind::Variable)
                                           .map(|token| token.text.clone())
                                           .collect();
    variables.sort();
    variables.dedup();

    let mut cursor = tokens.into_iter().peekable();
    let root = group::parse_group(&mut cursor, registry)?;

    Ok(Expression { root, variables })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::{BinaryOperator, Node},
                compiler::lexer::tokenize,
                error::InternalError,
                registry};

    fn parse_text(text: &str) -> Result<Expression, CompileError> {
        let registry = registry::standard();
        parse(tokenize(text, registry), registry)
    }

    fn root(text: &str) -> Node {
        parse_text(text).expect("should parse").root
    }

    #[test]
    fn implicit_multiplication_matches_its_explicit_spelling() {
        assert_eq!(root("2x"), root("2 * x"));
        assert_eq!(root("2(x + 1)"), root("2 * (x + 1)"));
        assert_eq!(root("1 x 2"), root("1 * x * 2"));
    }

    #[test]
    fn exponentiation_is_left_associative() {
        let expected = Node::binary(Node::binary(Node::Number(2.0),
                                                 Node::Number(3.0),
                                                 BinaryOperator::Pow),
                                    Node::Number(2.0),
                                    BinaryOperator::Pow);
        assert_eq!(root("2^3^2"), expected);
    }

    #[test]
    fn exponentiation_binds_tighter_than_juxtaposition() {
        // "2x^2" reads as 2 * (x^2), not (2x)^2.
        let expected = Node::binary(Node::Number(2.0),
                                    Node::binary(Node::Variable("x".to_string()),
                                                 Node::Number(2.0),
                                                 BinaryOperator::Pow),
                                    BinaryOperator::Mul);
        assert_eq!(root("2x^2"), expected);
    }

    #[test]
    fn signs_before_a_right_operand_are_consumed_by_the_operator() {
        let expected = Node::binary(Node::Number(2.0),
                                    Node::Negation(Box::new(Node::Number(3.0))),
                                    BinaryOperator::Mul);
        assert_eq!(root("2 * -3"), expected);
        assert_eq!(root("2 * - + -3"), root("2 * 3"));
    }

    #[test]
    fn leading_sign_negates_the_first_node() {
        let expected = Node::binary(Node::Negation(Box::new(Node::Variable("x".to_string()))),
                                    Node::Number(1.0),
                                    BinaryOperator::Add);
        assert_eq!(root("-x + 1"), expected);
        assert_eq!(root("+x"), Node::Variable("x".to_string()));
    }

    #[test]
    fn doubled_subtraction_signs_cancel() {
        let expected = Node::binary(Node::Number(2.0), Node::Number(3.0), BinaryOperator::Add);
        assert_eq!(root("2 - - 3"), expected);
    }

    #[test]
    fn binding_order_is_distinct_and_ascending() {
        let expression = parse_text("b + a * b / c").expect("should parse");
        assert_eq!(expression.variables, vec!["a", "b", "c"]);
    }

    #[test]
    fn constants_are_substituted_at_parse_time() {
        assert_eq!(root("pi"), Node::Number(std::f64::consts::PI));
    }

    #[test]
    fn stray_tokens_after_a_top_level_group_are_ignored() {
        assert_eq!(root("1)"), Node::Number(1.0));
        assert_eq!(root("1) + 2"), Node::Number(1.0));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse_text(""),
                         Err(CompileError::Syntax(SyntaxError::ExpressionExpected { token: None }))));
        assert!(matches!(parse_text("   "),
                         Err(CompileError::Syntax(SyntaxError::ExpressionExpected { token: None }))));
    }

    #[test]
    fn dangling_operator_at_end_of_text_is_rejected() {
        assert!(matches!(parse_text("1 +"),
                         Err(CompileError::Syntax(SyntaxError::TrailingExpressionExpected))));
    }

    #[test]
    fn unterminated_parenthesis_is_rejected() {
        assert!(matches!(parse_text("(1 + 2"),
                         Err(CompileError::Syntax(SyntaxError::ClosingParenExpected { .. }))));
    }

    #[test]
    fn opening_parenthesis_at_end_of_text_is_rejected() {
        assert!(matches!(parse_text("2 * ("),
                         Err(CompileError::Syntax(SyntaxError::ExpressionExpected { token: Some(_) }))));
    }

    #[test]
    fn empty_parentheses_are_rejected() {
        assert!(matches!(parse_text("()"),
                         Err(CompileError::Syntax(SyntaxError::UnexpectedToken { .. }))));
    }

    #[test]
    fn function_name_without_argument_list_is_rejected() {
        assert!(matches!(parse_text("sin 1"),
                         Err(CompileError::Syntax(SyntaxError::ArgumentListExpected { .. }))));
    }

    #[test]
    fn argument_list_cut_off_by_end_of_text_is_rejected() {
        assert!(matches!(parse_text("sin("),
                         Err(CompileError::Syntax(SyntaxError::ArgumentExpected { .. }))));
        assert!(matches!(parse_text("pow(1,"),
                         Err(CompileError::Syntax(SyntaxError::ArgumentExpected { .. }))));
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        let error = parse_text("sin(1, 2)");
        assert!(matches!(error,
                         Err(CompileError::Syntax(SyntaxError::ParameterCountMismatch { expected: 1,
                                                                                        found: 2,
                                                                                        .. }))));
    }

    #[test]
    fn operator_without_left_operand_is_rejected() {
        assert!(matches!(parse_text("^ 2"),
                         Err(CompileError::Syntax(SyntaxError::LeftOperandExpected { .. }))));
        assert!(matches!(parse_text("* 2"),
                         Err(CompileError::Syntax(SyntaxError::LeftOperandExpected { .. }))));
    }

    #[test]
    fn operator_without_right_operand_is_rejected() {
        assert!(matches!(parse_text("2 ^ * 3"),
                         Err(CompileError::Syntax(SyntaxError::RightOperandExpected { .. }))));
        assert!(matches!(parse_text("2 ^"),
                         Err(CompileError::Syntax(SyntaxError::RightOperandExpected { .. }))));
    }

    #[test]
    fn lexical_errors_pass_through_the_parser() {
        let error = parse_text("2 # 3");
        assert!(matches!(error, Err(CompileError::Lexical(lexical)) if lexical.position == 2));
    }

    #[test]
    fn mismatched_registry_surfaces_as_an_internal_error() {
        let custom = Registry::with_entries(&[], &[("tau", std::f64::consts::TAU)]);
        let error = parse(tokenize("tau", &custom), registry::standard());
        assert!(matches!(error,
                         Err(CompileError::Internal(InternalError::UnknownConstant { .. }))));
    }
}
