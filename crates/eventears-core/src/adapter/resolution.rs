//! Settled values of a single-shot event future.

pub use crate::error::Rejection;

/// What a success event delivered
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<A> {
    /// The event carried no arguments.
    Empty,
    /// The event carried exactly one argument.
    Single(A),
    /// The event carried several arguments, in emission order.
    Many(Vec<A>),
}

impl<A: Clone> Resolution<A> {
    /// Build a resolution from the arguments of one emission
    pub(crate) fn from_args(args: &[A]) -> Self {
        match args {
            [] => Resolution::Empty,
            [single] => Resolution::Single(single.clone()),
            many => Resolution::Many(many.to_vec()),
        }
    }
}

impl<A> Resolution<A> {
    /// The single value, if there is exactly one
    pub fn single(&self) -> Option<&A> {
        match self {
            Resolution::Single(value) => Some(value),
            _ => None,
        }
    }

    /// Flatten into the list of delivered arguments
    pub fn into_vec(self) -> Vec<A> {
        match self {
            Resolution::Empty => Vec::new(),
            Resolution::Single(value) => vec![value],
            Resolution::Many(values) => values,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Resolution::Empty)
    }
}

/// Final state of a single-shot event future
pub type Outcome<A> = Result<Resolution<A>, Rejection<A>>;
