use crate::slot::ReuseIdentifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    IndexOutOfRange {
        index: usize,
        count: usize,
    },
    SlotKindMismatch {
        expected: ReuseIdentifier,
        found: ReuseIdentifier,
    },
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::IndexOutOfRange { index, count } => {
                write!(f, "index {index} out of range for {count} items")
            }
            BindError::SlotKindMismatch { expected, found } => {
                write!(f, "slot kind mismatch; expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for BindError {}
