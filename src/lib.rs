//! # stockcore
//!
//! In-memory warehouse inventory engine with a multi-index catalog.
//!
//! ## Architecture
//!
//! Every product is tracked by four independent index structures that the
//! warehouse keeps mutually consistent:
//!
//! - **Ordered index**: slab-arena AVL tree keyed by product id
//! - **Identity index**: separate-chaining, resizing hash table (the
//!   authoritative record store)
//! - **Priority indices**: min- and max-heaps ranked by cumulative sales,
//!   with in-place key update
//!
//! A bounded FIFO order queue with an urgent fast lane sits on top for
//! fulfillment; the [`Warehouse`] orchestrator is the only component that
//! mutates more than one structure per logical action.
//!
//! ## Design Principles
//!
//! 1. **Write-through consistency**: each index holds its own copy of a
//!    product; every mutation rewrites every stale copy in the same call
//! 2. **No floating point**: monetary values use `rust_decimal`
//! 3. **Arena-allocated nodes**: tree and chain links are slab keys with
//!    single-owner semantics, never shared references
//! 4. **Synchronous execution**: single-threaded, nothing blocks
//! 5. **Total operations**: every failure is a reported, typed outcome —
//!    nothing aborts the process
//!
//! ## Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use stockcore::{Product, Warehouse};
//!
//! let mut warehouse = Warehouse::new(16, 64, 100);
//!
//! warehouse
//!     .add_product(Product::new(1, "Anvil", "Hardware", 40, Decimal::new(12_50, 2)))
//!     .unwrap();
//!
//! let order_id = warehouse.place_order(1, 5, false).unwrap();
//! let fulfilled = warehouse.process_next_order().unwrap();
//!
//! assert_eq!(fulfilled.order_id, order_id);
//! assert_eq!(warehouse.search_product(1).unwrap().quantity, 35);
//! assert_eq!(warehouse.search_product(1).unwrap().sales_count, 5);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy shared by every component
pub mod error;

/// Core data types: Product, Order
pub mod types;

/// Index structures: ordered, identity, priority
pub mod index;

/// Order queue and repository orchestrator
pub mod warehouse;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::WarehouseError;
pub use index::{AvlTree, HeapKind, ProductMap, SalesHeap};
pub use types::{Order, Product};
pub use warehouse::{OrderQueue, Warehouse};
