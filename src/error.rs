//! Error taxonomy for the warehouse engine.
//!
//! Every condition here is reported, never fatal: core operations handle
//! failures locally and hand back a typed outcome. The orchestrator forwards
//! lower-layer signals (e.g. a `NotFound` from the identity index) in its own
//! results without changing their kind.

use thiserror::Error;

/// Unified error type for all warehouse operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarehouseError {
    /// Lookup, removal, or update target does not exist.
    #[error("product {0} not found")]
    NotFound(i64),

    /// Add attempted with an id that is already catalogued.
    #[error("product {0} already exists")]
    Duplicate(i64),

    /// An order asked for more units than are available.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// A fixed-capacity structure is full. Names the saturated structure.
    #[error("{0} is full")]
    Overflow(&'static str),

    /// Dequeue/processing attempted on an empty structure.
    #[error("{0} is empty")]
    Empty(&'static str),

    /// Order quantity must be strictly positive.
    #[error("order quantity must be greater than zero")]
    InvalidQuantity,
}
