use logos::Logos;

use crate::{error::LexicalError, registry::Registry};

/// Raw token shapes recognized by the generated lexer.
///
/// This enum only distinguishes what can be decided from the character stream
/// alone; identifier classification (function vs. constant vs. variable) needs
/// the registry and happens in [`Tokens`], the wrapping iterator.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum RawToken {
    /// A run of whitespace characters, kept as a token so that concatenating
    /// all token texts reproduces the input exactly.
    #[regex(r"[ \t\r\n\x0C]+")]
    WhiteSpace,
    /// Numeric literal: one or more digits, optionally followed by `.` and
    /// more digits. A bare trailing `.` (as in `3.`) is accepted as written.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Literal,
    /// Identifier run: a letter followed by letters and digits.
    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Identifier,
    /// One of the five single-character operators.
    #[regex(r"[+\-*/^]")]
    Operator,
    /// `(`
    #[token("(")]
    OpeningParen,
    /// `)`
    #[token(")")]
    ClosingParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// Classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of whitespace; discarded by the parser.
    WhiteSpace,
    /// A numeric literal.
    Literal,
    /// An identifier bound to neither a function nor a constant.
    Variable,
    /// An identifier naming a registry function.
    FunctionName,
    /// An identifier naming a registry constant.
    ConstantName,
    /// `(`
    OpeningParen,
    /// `)`
    ClosingParen,
    /// `,`
    Comma,
    /// One of `+ - * / ^`.
    Operator,
}

/// A classified, positioned substring of the source text.
///
/// Tokens are produced in source order with contiguous, non-overlapping
/// spans; `position` is the byte offset of the first character of `text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The exact source substring.
    pub text:     String,
    /// Byte offset of the token in the source.
    pub position: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Lazy token stream over one source string.
///
/// Produced by [`tokenize`]. The stream is restartable only by calling
/// [`tokenize`] again; it cannot be rewound mid-iteration, so consumers that
/// need more than one pass must materialize it first. After the first lexical
/// error the stream is exhausted.
pub struct Tokens<'a> {
    lexer:    logos::Lexer<'a, RawToken>,
    registry: &'a Registry,
    failed:   bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let raw = self.lexer.next()?;
        let text = self.lexer.slice();
        let position = self.lexer.span().start;

        let Ok(raw) = raw else {
            self.failed = true;
            let character = text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Some(Err(LexicalError { position, character }));
        };

        let kind = match raw {
            RawToken::WhiteSpace => TokenKind::WhiteSpace,
            RawToken::Literal => TokenKind::Literal,
            // Function and constant names take precedence over reading the
            // same spelling as a variable.
            RawToken::Identifier if self.registry.is_function(text) => TokenKind::FunctionName,
            RawToken::Identifier if self.registry.is_constant(text) => TokenKind::ConstantName,
            RawToken::Identifier => TokenKind::Variable,
            RawToken::Operator => TokenKind::Operator,
            RawToken::OpeningParen => TokenKind::OpeningParen,
            RawToken::ClosingParen => TokenKind::ClosingParen,
            RawToken::Comma => TokenKind::Comma,
        };

        Some(Ok(Token { kind,
                        text: text.to_string(),
                        position }))
    }
}

/// Tokenizes `text` in one left-to-right pass.
///
/// Whitespace is emitted as tokens rather than skipped, so the concatenation
/// of all token texts reproduces `text` exactly. Identifiers are classified
/// against `registry`: function names first, then constant names, then
/// variables.
///
/// # Parameters
/// - `text`: The source to tokenize.
/// - `registry`: The table used to classify identifiers.
///
/// # Returns
/// A lazy stream of `Result<Token, LexicalError>`; the first `Err` carries
/// the position of the character no rule accepts, and ends the stream.
///
/// # Example
/// ```
/// use exprfn::{compiler::lexer::tokenize, registry};
///
/// let tokens: Result<Vec<_>, _> = tokenize("2 + x", registry::standard()).collect();
/// assert_eq!(tokens.unwrap().len(), 5);
/// ```
pub fn tokenize<'a>(text: &'a str, registry: &'a Registry) -> Tokens<'a> {
    Tokens { lexer: RawToken::lexer(text),
             registry,
             failed: false }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text, registry::standard()).map(|t| t.expect("should lex").kind)
                                            .collect()
    }

    #[test]
    fn concatenated_token_texts_reproduce_the_input() {
        let text = "  3.5*sin( pi , x1)^- 2 ";
        let rebuilt: String = tokenize(text, registry::standard()).map(|t| t.expect("should lex").text)
                                                                  .collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn identifiers_classify_against_the_registry() {
        assert_eq!(kinds("sin pi x"),
                   vec![TokenKind::FunctionName,
                        TokenKind::WhiteSpace,
                        TokenKind::ConstantName,
                        TokenKind::WhiteSpace,
                        TokenKind::Variable]);
    }

    #[test]
    fn literal_accepts_a_bare_trailing_dot() {
        let tokens: Vec<_> = tokenize("3.", registry::standard()).collect::<Result<_, _>>()
                                                                 .expect("should lex");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Literal);
        assert_eq!(tokens[0].text, "3.");
    }

    #[test]
    fn unexpected_character_reports_its_position() {
        let error = tokenize("2 # 3", registry::standard()).find_map(Result::err)
                                                           .expect("should fail");
        assert_eq!(error, LexicalError { position:  2,
                                         character: '#', });
    }

    #[test]
    fn stream_ends_after_a_lexical_error() {
        let results: Vec<_> = tokenize("2 # 3", registry::standard()).collect();
        assert_eq!(results.len(), 3);
        assert!(results[2].is_err());
    }
}
