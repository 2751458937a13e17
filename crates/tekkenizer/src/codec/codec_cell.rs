//! # Shared Lazy Codec

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{TKResult, codec::Codec, types::TokenType};

/// A codec built exactly once, on first use.
///
/// Concurrent first callers block until the single build finishes; all
/// then share the same [`Arc<Codec>`]. A failed build leaves the cell
/// empty, so a later call retries.
///
/// Hold it in application state (or a `static`), not behind a lock.
#[derive(Debug)]
pub struct CodecCell<T: TokenType> {
    cell: OnceCell<Arc<Codec<T>>>,
}

impl<T: TokenType> Default for CodecCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> CodecCell<T> {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// The codec, if already built.
    pub fn get(&self) -> Option<&Arc<Codec<T>>> {
        self.cell.get()
    }

    /// Get the codec, building it with `init` on first use.
    pub fn get_or_try_init<F>(
        &self,
        init: F,
    ) -> TKResult<Arc<Codec<T>>>
    where
        F: FnOnce() -> TKResult<Codec<T>>,
    {
        self.cell
            .get_or_try_init(|| init().map(Arc::new))
            .cloned()
    }
}
