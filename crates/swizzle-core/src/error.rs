use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("swizzle selects no component")]
    Empty,
    #[error("swizzle selects {0} components, but at most 4 are allowed")]
    TooLong(usize),
    #[error("axis index {0} is out of range")]
    InvalidIndex(usize),
    #[error("`{0}` is not a swizzle letter")]
    UnknownLetter(char),
    #[error("`{name}` mixes letters of different alphabets")]
    MixedAlphabet { name: String },
    #[error("`{name}` is not in ascending axis order without repetition")]
    NotCanonical { name: String },
    #[error("`{name}` is not a swizzle method")]
    UnknownMethod { name: String },
}
