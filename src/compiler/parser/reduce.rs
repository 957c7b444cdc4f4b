//! The four reduction passes that collapse a group's element list into a
//! single node.
//!
//! Each pass is one left-to-right scan over the list with in-place splicing.
//! The order of the passes is the precedence ladder: exponents first, then
//! juxtaposed nodes (implicit multiplication), then `*` and `/`, then `+`
//! and `-`. Within a pass, resuming the scan at the merged node's position
//! makes every operator left-associative, `^` included.

use super::group::Element;
use crate::{ast::{BinaryOperator, Node},
            error::{CompileError, InternalError, SyntaxError}};

/// Collapses `elements` into a single node by running the four passes.
///
/// # Errors
/// A `SyntaxError` if an operator lacks an operand, or an `InternalError` if
/// the passes leave anything other than exactly one node. The latter is
/// unreachable for a grammar-conformant list and indicates a defect in the
/// passes themselves.
pub(super) fn reduce(mut elements: Vec<Element>) -> Result<Node, CompileError> {
    fold_infix(&mut elements, |text| (text == "^").then_some(BinaryOperator::Pow))?;
    fold_juxtaposed(&mut elements);
    fold_infix(&mut elements, |text| {
        match text {
            "*" => Some(BinaryOperator::Mul),
            "/" => Some(BinaryOperator::Div),
            _ => None,
        }
    })?;
    fold_additive(&mut elements)?;

    if elements.len() != 1 {
        return Err(InternalError::UnreducedElements { remaining: elements.len() }.into());
    }
    Ok(take_node(&mut elements, 0))
}

/// Removes and returns the element at `index`, which the calling scan has
/// already checked to be a node.
fn take_node(elements: &mut Vec<Element>, index: usize) -> Node {
    match elements.remove(index) {
        Element::Node(node) => node,
        Element::Operator(_) => unreachable!("checked to be a node before removal"),
    }
}

/// Folds every operator `select` recognizes into a `BinaryOp` node.
///
/// At each selected operator the element to its left must already be a node.
/// To the right, any run of `+`/`-` tokens is consumed as the operand's sign
/// before the operand itself; an odd number of `-` wraps it in a negation.
/// The scan resumes at the merged node, so a following operator of the same
/// class sees it as its left operand.
fn fold_infix<F>(elements: &mut Vec<Element>, select: F) -> Result<(), CompileError>
    where F: Fn(&str) -> Option<BinaryOperator>
{
    let mut i = 0;
    while i < elements.len() {
        let (token, op) = match &elements[i] {
            Element::Operator(token) => {
                match select(&token.text) {
                    Some(op) => (token.clone(), op),
                    None => {
                        i += 1;
                        continue;
                    },
                }
            },
            Element::Node(_) => {
                i += 1;
                continue;
            },
        };

        if i == 0 || !matches!(elements[i - 1], Element::Node(_)) {
            return Err(SyntaxError::LeftOperandExpected { token }.into());
        }

        let mut negative = false;
        let right = loop {
            if i + 1 == elements.len() {
                return Err(SyntaxError::RightOperandExpected { token }.into());
            }
            match elements.remove(i + 1) {
                Element::Node(node) => break node,
                Element::Operator(sign) if sign.text == "+" => {},
                Element::Operator(sign) if sign.text == "-" => negative = !negative,
                Element::Operator(_) => {
                    return Err(SyntaxError::RightOperandExpected { token }.into());
                },
            }
        };
        let right = if negative {
            Node::Negation(Box::new(right))
        } else {
            right
        };

        elements.remove(i);
        let left = take_node(elements, i - 1);
        elements.insert(i - 1, Element::Node(Node::binary(left, right, op)));
        // The scan stays at `i`: the next same-class operator has shifted
        // into this position, with the merged node as its left operand.
    }

    Ok(())
}

/// Merges every run of adjacent nodes into left-nested multiplications, so
/// that `2x` and `1 x 2` read as products.
///
/// Runs after the exponent pass and before the multiplicative one, which is
/// what makes `2x^2` read as `2 * (x^2)` rather than `(2x)^2`.
fn fold_juxtaposed(elements: &mut Vec<Element>) {
    let mut i = 0;
    while i + 1 < elements.len() {
        if matches!(elements[i], Element::Node(_)) && matches!(elements[i + 1], Element::Node(_)) {
            let right = take_node(elements, i + 1);
            let left = take_node(elements, i);
            elements.insert(i, Element::Node(Node::binary(left, right, BinaryOperator::Mul)));
        } else {
            i += 1;
        }
    }
}

/// Folds the remaining `+`/`-` tokens and merges everything into the list
/// head.
///
/// A sign accumulator starts unset; the first sign token sets it positive,
/// and every `-` inverts it, so `2 - - 3` adds. When a node is reached, the
/// head either absorbs it (`Add`, or `Sub` for a net-negative sign) or, for
/// the very first node, takes a negation if the accumulated sign is
/// negative. A sign still pending when the list ends is a dangling trailing
/// operator.
fn fold_additive(elements: &mut Vec<Element>) -> Result<(), CompileError> {
    let mut sign = 0i8;
    let mut i = 0;
    while i < elements.len() {
        match &elements[i] {
            Element::Operator(token) => {
                if sign == 0 {
                    sign = 1;
                }
                if token.text == "-" {
                    sign = -sign;
                }
                elements.remove(i);
            },
            Element::Node(_) => {
                if i == 0 {
                    if sign == -1 {
                        let head = take_node(elements, 0);
                        elements.insert(0, Element::Node(Node::Negation(Box::new(head))));
                    }
                    i += 1;
                } else {
                    let right = take_node(elements, i);
                    let head = take_node(elements, 0);
                    let op = if sign == -1 {
                        BinaryOperator::Sub
                    } else {
                        BinaryOperator::Add
                    };
                    elements.insert(0, Element::Node(Node::binary(head, right, op)));
                    // The element after the absorbed node has shifted into
                    // position `i`.
                }
                sign = 0;
            },
        }
    }

    if sign != 0 {
        return Err(SyntaxError::TrailingExpressionExpected.into());
    }

    Ok(())
}
