//! Index structures for the warehouse catalog.
//!
//! ## Architecture
//!
//! Every product is held in four independent indices at once:
//!
//! - [`AvlTree`]: ordered index keyed by id (range/identity queries,
//!   sorted dumps)
//! - [`ProductMap`]: identity index, the authoritative record store
//! - [`SalesHeap`] ×2: min- and max-polarity priority indices ranked by
//!   cumulative sales
//!
//! Tree and chain nodes live in `slab` arenas and reference each other by
//! stable `usize` keys, so no structure needs shared mutable aliasing.
//!
//! ## Performance
//!
//! | Operation                  | Complexity   |
//! |----------------------------|--------------|
//! | Ordered insert/remove/get  | O(log n)     |
//! | Identity insert/get/remove | O(1) average |
//! | Heap insert                | O(log n)     |
//! | Heap peek                  | O(1)         |
//! | Heap key update            | O(n) locate + O(log n) sift |
//!
//! Keeping the four structures in agreement is the orchestrator's job
//! ([`crate::warehouse::Warehouse`]); nothing here writes to a sibling
//! index.

pub mod avl;
pub mod hash;
pub mod heap;

pub use avl::AvlTree;
pub use hash::ProductMap;
pub use heap::{HeapKind, SalesHeap};
