#[derive(Debug)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Encountered a character that does not begin any token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input line.
        offset:    usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, offset } => write!(f,
                                                                        "Error at offset {offset}: Unrecognized character '{character}'."),
        }
    }
}

impl std::error::Error for LexError {}
