//! Priority indices: fixed-capacity binary heaps ranked by sales count.
//!
//! One backing type serves both polarities: [`SalesHeap::min`] tracks the
//! lowest seller at its root, [`SalesHeap::max`] the best seller. The
//! warehouse keeps one of each.
//!
//! ## Key Update
//!
//! [`SalesHeap::update_sales`] locates the entry by linear scan, overwrites
//! its ranking field, then restores heap order by sifting in the correct
//! direction only: toward the root when the new value outranks the old one
//! for this heap's polarity, toward the leaves otherwise. Sifting up
//! unconditionally would leave the invariant broken whenever a value moves
//! away from the favored extreme.
//!
//! ## Retention
//!
//! These heaps never delete entries. A product removed from the live
//! catalog keeps its last copy here — they are historical sales trackers,
//! not live-stock trackers.

use crate::error::WarehouseError;
use crate::types::Product;

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// Heap polarity: which extreme lives at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    /// Root holds the minimum sales count
    Min,
    /// Root holds the maximum sales count
    Max,
}

impl HeapKind {
    /// True when ranking value `a` belongs closer to the root than `b`.
    #[inline]
    fn outranks(self, a: u32, b: u32) -> bool {
        match self {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }
}

/// Fixed-capacity binary heap of products, ranked by `sales_count`.
#[derive(Debug)]
pub struct SalesHeap {
    kind: HeapKind,
    entries: Vec<Product>,
    capacity: usize,
}

impl SalesHeap {
    /// Create a min-heap (lowest seller at the root).
    pub fn min(capacity: usize) -> Self {
        Self::with_kind(HeapKind::Min, capacity)
    }

    /// Create a max-heap (best seller at the root).
    pub fn max(capacity: usize) -> Self {
        Self::with_kind(HeapKind::Max, capacity)
    }

    fn with_kind(kind: HeapKind, capacity: usize) -> Self {
        assert!(capacity > 0, "heap capacity must be positive");
        Self {
            kind,
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// This heap's polarity.
    #[inline]
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Number of tracked products.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the heap is at fixed capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Fixed capacity set at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the backing store in heap-array order.
    #[inline]
    pub fn as_slice(&self) -> &[Product] {
        &self.entries
    }

    // ========================================================================
    // Core operations
    // ========================================================================

    /// Append a product and sift it up. Reports `Overflow` at capacity.
    pub fn insert(&mut self, product: Product) -> Result<(), WarehouseError> {
        if self.is_full() {
            return Err(WarehouseError::Overflow("sales heap"));
        }
        self.entries.push(product);
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// The root: global minimum or maximum by sales count.
    #[inline]
    pub fn peek(&self) -> Option<&Product> {
        self.entries.first()
    }

    /// Overwrite the ranking field of the entry with the given id, then
    /// restore heap order by sifting in the correct direction only.
    ///
    /// The entry is located by linear scan (O(n)); `NotFound` if absent.
    pub fn update_sales(&mut self, id: i64, new_sales: u32) -> Result<(), WarehouseError> {
        let pos = self
            .entries
            .iter()
            .position(|p| p.id == id)
            .ok_or(WarehouseError::NotFound(id))?;

        let old_sales = self.entries[pos].sales_count;
        self.entries[pos].sales_count = new_sales;

        if self.kind.outranks(new_sales, old_sales) {
            // Moved toward the favored extreme: bubble toward the root.
            self.sift_up(pos);
        } else {
            // Moved away from it: bubble toward the leaves.
            self.sift_down(pos);
        }
        Ok(())
    }

    /// Verify the heap invariant: no child outranks its parent.
    pub fn is_ordered(&self) -> bool {
        (1..self.entries.len()).all(|i| {
            !self
                .kind
                .outranks(self.entries[i].sales_count, self.entries[parent(i)].sales_count)
        })
    }

    // ========================================================================
    // Sift operations
    // ========================================================================

    fn sift_up(&mut self, mut i: usize) {
        while i != 0
            && self.kind.outranks(
                self.entries[i].sales_count,
                self.entries[parent(i)].sales_count,
            )
        {
            self.entries.swap(i, parent(i));
            i = parent(i);
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let mut best = i;
            let l = left(i);
            let r = right(i);

            if l < self.entries.len()
                && self.kind.outranks(
                    self.entries[l].sales_count,
                    self.entries[best].sales_count,
                )
            {
                best = l;
            }
            if r < self.entries.len()
                && self.kind.outranks(
                    self.entries[r].sales_count,
                    self.entries[best].sales_count,
                )
            {
                best = r;
            }

            if best == i {
                break;
            }
            self.entries.swap(i, best);
            i = best;
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
