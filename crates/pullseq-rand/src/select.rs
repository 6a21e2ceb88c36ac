use thiserror::Error;

use crate::Randomness;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Selection from an empty sequence has no meaningful result.
    #[error("invalid argument: cannot select from an empty sequence")]
    InvalidArgument,
}

/// Picks one element of `items` uniformly at random by index.
pub fn random_item<'a, T, R: Randomness>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T, SelectError> {
    if items.is_empty() {
        return Err(SelectError::InvalidArgument);
    }

    Ok(&items[rng.pick_index(items.len())])
}
