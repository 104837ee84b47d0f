//! Order-preserving fixed-size partitioning.

use adblock_core::{AdblockError, Result};

/// Split `items` into consecutive slices of at most `size` elements
///
/// Only the last slice may be shorter than `size`. Concatenating the slices in
/// order reproduces `items` exactly. An empty input gives no slices.
pub fn chunk<T>(items: &[T], size: usize) -> Result<Vec<&[T]>> {
    if size == 0 {
        return Err(AdblockError::InvalidChunkSize);
    }

    Ok(items.chunks(size).collect())
}
