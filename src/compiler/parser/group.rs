use super::{Cursor, reduce};
use crate::{ast::Node,
            compiler::lexer::{Token, TokenKind},
            error::{CompileError, InternalError, SyntaxError},
            registry::Registry};

/// One entry of the flat list a group is collected into before reduction:
/// either a finished syntax-tree node or a raw operator token that a
/// reduction pass will consume.
#[derive(Debug, Clone)]
pub(super) enum Element {
    /// A finished sub-expression.
    Node(Node),
    /// An operator token awaiting its reduction pass.
    Operator(Token),
}

/// Parses one group: tokens up to the first unconsumed `)`, `,`, or end of
/// input.
///
/// The first token is consumed unconditionally, so a group that begins with a
/// terminator fails with `UnexpectedToken`; from the second token on, a
/// terminator ends the group and is left on the cursor for the caller.
/// Callers must ensure at least one token is available.
///
/// Parenthesized spans and function calls recurse into this function for
/// their inner groups, consuming their own closing parenthesis on the way
/// out. The collected element list is handed to [`reduce::reduce`], so the
/// returned node is already fully folded.
pub(super) fn parse_group(cursor: &mut Cursor, registry: &Registry) -> Result<Node, CompileError> {
    let mut elements = Vec::new();

    loop {
        let Some(token) = cursor.next() else {
            break;
        };

        match token.kind {
            TokenKind::Literal => match token.text.parse::<f64>() {
                Ok(value) => elements.push(Element::Node(Node::Number(value))),
                Err(_) => return Err(SyntaxError::IncorrectLiteral { token }.into()),
            },
            TokenKind::ConstantName => {
                let Some(value) = registry.constant(&token.text) else {
                    return Err(InternalError::UnknownConstant { name: token.text }.into());
                };
                elements.push(Element::Node(Node::Number(value)));
            },
            TokenKind::Variable => {
                elements.push(Element::Node(Node::Variable(token.text)));
            },
            TokenKind::Operator => {
                elements.push(Element::Operator(token));
            },
            TokenKind::OpeningParen => {
                if cursor.peek().is_none() {
                    return Err(SyntaxError::ExpressionExpected { token: Some(token) }.into());
                }

                let inner = parse_group(cursor, registry)?;

                match cursor.next() {
                    Some(next) if next.kind == TokenKind::ClosingParen => {},
                    _ => return Err(SyntaxError::ClosingParenExpected { token }.into()),
                }

                elements.push(Element::Node(inner));
            },
            TokenKind::FunctionName => {
                elements.push(Element::Node(parse_call(token, cursor, registry)?));
            },
            TokenKind::ClosingParen | TokenKind::Comma | TokenKind::WhiteSpace => {
                return Err(SyntaxError::UnexpectedToken { token }.into());
            },
        }

        match cursor.peek() {
            Some(next) if next.kind != TokenKind::ClosingParen && next.kind != TokenKind::Comma => {},
            _ => break,
        }
    }

    reduce::reduce(elements)
}

/// Parses a function call after its name token has been consumed.
///
/// The name must be followed by a parenthesized argument list; each argument
/// is one group, and the parsed count must match the registry's declared
/// arity. The arity check runs only after the closing parenthesis has been
/// seen, so an unterminated list reports the missing parenthesis rather than
/// a wrong count.
fn parse_call(name: Token, cursor: &mut Cursor, registry: &Registry) -> Result<Node, CompileError> {
    let Some(function) = registry.function(&name.text) else {
        return Err(InternalError::UnknownFunction { name: name.text }.into());
    };
    let expected = function.arity;

    let mut delimiter = match cursor.next() {
        Some(token) if token.kind == TokenKind::OpeningParen => token,
        _ => return Err(SyntaxError::ArgumentListExpected { token: name }.into()),
    };

    let mut args = Vec::new();
    loop {
        if cursor.peek().is_none() {
            return Err(SyntaxError::ArgumentExpected { token: delimiter }.into());
        }

        args.push(parse_group(cursor, registry)?);

        match cursor.next() {
            Some(token) if token.kind == TokenKind::Comma => delimiter = token,
            Some(token) if token.kind == TokenKind::ClosingParen => break,
            _ => return Err(SyntaxError::ClosingParenExpected { token: name.clone() }.into()),
        }
    }

    if args.len() != expected {
        return Err(SyntaxError::ParameterCountMismatch { token: name,
                                                         expected,
                                                         found: args.len() }.into());
    }

    Ok(Node::Call { name: name.text,
                    args })
}
