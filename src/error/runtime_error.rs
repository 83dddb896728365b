#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name:   String,
        /// Byte offset where the error occurred.
        offset: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name:   String,
        /// Byte offset where the error occurred.
        offset: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of arguments the function accepts.
        expected: usize,
        /// The number of arguments that were supplied.
        found:    usize,
        /// Byte offset where the error occurred.
        offset:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, offset } => {
                write!(f, "Error at offset {offset}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, offset } => {
                write!(f, "Error at offset {offset}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          offset, } => write!(f,
                                                              "Error at offset {offset}: Function '{name}' expects {expected} arguments, but got {found}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
