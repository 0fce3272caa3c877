use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An index outside `[0, len)` was handed to a raw index accessor.
    InvalidIndex(usize, usize),
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::InvalidIndex(index, len) => {
                write!(f, "index {} out of range for heap of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for HeapError {}
