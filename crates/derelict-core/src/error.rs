/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when a world-model invariant would be violated.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The inventory is already at capacity.
    #[error("inventory is full ({capacity} items)")]
    InventoryFull {
        /// The fixed capacity that was hit.
        capacity: usize,
    },
}
