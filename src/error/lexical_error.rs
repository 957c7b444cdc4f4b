/// Represents a failed tokenization: an unrecognized character in the input.
///
/// Lexical errors are fatal to the tokenization pass; no recovery is
/// attempted and no further tokens are produced after one is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    /// Byte offset of the offending character in the source text.
    pub position:  usize,
    /// The character that no lexer rule accepts.
    pub character: char,
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Lexical error at position {}: unexpected character '{}'.",
               self.position, self.character)
    }
}

impl std::error::Error for LexicalError {}
