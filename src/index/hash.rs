//! Identity index: separate-chaining hash table keyed by product id.
//!
//! ## Design
//!
//! This is the authoritative store — every other index holds copies. Chain
//! nodes live in a [`Slab`] arena; each bucket holds the slab key of its
//! chain head and nodes link forward with `Option<usize>`, so chain links
//! have single-owner semantics just like the tree arena.
//!
//! ## Policies (observable, covered by tests)
//!
//! - Bucket selection: `|id| mod capacity`.
//! - New keys are spliced at the chain head (most-recently-inserted-first);
//!   existing keys are overwritten in place (update semantics).
//! - After any occupancy-increasing insert, if load factor exceeds 0.75 the
//!   bucket array doubles and every node is rehashed in one pass over the
//!   old buckets.

use slab::Slab;

use crate::types::Product;

/// Chain node stored in the slab arena.
#[derive(Debug)]
struct ChainNode {
    key: i64,
    product: Product,
    next: Option<usize>,
}

/// Resizing hash index over products, keyed by id.
#[derive(Debug)]
pub struct ProductMap {
    nodes: Slab<ChainNode>,
    buckets: Vec<Option<usize>>,
    len: usize,
}

impl ProductMap {
    /// Create a map with the given initial bucket count.
    ///
    /// `capacity` must be positive; the bucket array grows automatically.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "hash capacity must be positive");
        Self {
            nodes: Slab::with_capacity(capacity),
            buckets: vec![None; capacity],
            len: 0,
        }
    }

    /// Number of products stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket-array capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index for a key: `|id| mod capacity`.
    #[inline]
    fn bucket_of(&self, key: i64) -> usize {
        (key.unsigned_abs() as usize) % self.buckets.len()
    }

    // ========================================================================
    // Insert / Update
    // ========================================================================

    /// Insert a product, overwriting any existing entry with the same id.
    pub fn insert(&mut self, product: Product) {
        let bucket = self.bucket_of(product.id);

        // Existing key anywhere in the chain: update in place.
        let mut current = self.buckets[bucket];
        while let Some(idx) = current {
            if self.nodes[idx].key == product.id {
                self.nodes[idx].product = product;
                return;
            }
            current = self.nodes[idx].next;
        }

        // New key: splice at the chain head.
        let head = self.buckets[bucket];
        let idx = self.nodes.insert(ChainNode {
            key: product.id,
            product,
            next: head,
        });
        self.buckets[bucket] = Some(idx);
        self.len += 1;

        // Grow past load factor 0.75 (integer math: len/cap > 3/4).
        if self.len * 4 > self.buckets.len() * 3 {
            self.grow();
        }
    }

    /// Double the bucket array and rehash every node in one pass.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old_buckets = std::mem::replace(&mut self.buckets, vec![None; new_capacity]);

        for head in old_buckets {
            let mut current = head;
            while let Some(idx) = current {
                let next = self.nodes[idx].next;

                // Re-splice this node at the head of its new bucket.
                let new_bucket = (self.nodes[idx].key.unsigned_abs() as usize) % new_capacity;
                self.nodes[idx].next = self.buckets[new_bucket];
                self.buckets[new_bucket] = Some(idx);

                current = next;
            }
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Look up a product by id.
    pub fn get(&self, id: i64) -> Option<&Product> {
        let mut current = self.buckets[self.bucket_of(id)];
        while let Some(idx) = current {
            if self.nodes[idx].key == id {
                return Some(&self.nodes[idx].product);
            }
            current = self.nodes[idx].next;
        }
        None
    }

    /// Look up a product by id, mutably.
    pub fn get_mut(&mut self, id: i64) -> Option<&mut Product> {
        let mut current = self.buckets[self.bucket_of(id)];
        while let Some(idx) = current {
            if self.nodes[idx].key == id {
                return Some(&mut self.nodes[idx].product);
            }
            current = self.nodes[idx].next;
        }
        None
    }

    /// Check whether an id is present.
    #[inline]
    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Remove and return the product with the given id, unlinking it from
    /// its chain. Returns `None` if the id is absent.
    pub fn remove(&mut self, id: i64) -> Option<Product> {
        let bucket = self.bucket_of(id);

        let mut prev: Option<usize> = None;
        let mut current = self.buckets[bucket];
        while let Some(idx) = current {
            if self.nodes[idx].key == id {
                let next = self.nodes[idx].next;
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(prev_idx) => self.nodes[prev_idx].next = next,
                }
                self.len -= 1;
                return Some(self.nodes.remove(idx).product);
            }
            prev = current;
            current = self.nodes[idx].next;
        }
        None
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Iterate over all products in bucket-traversal order
    /// (bucket 0..capacity, each chain head to tail).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            map: self,
            bucket: 0,
            node: None,
        }
    }
}

/// Bucket-order iterator over a [`ProductMap`].
#[derive(Debug)]
pub struct Iter<'a> {
    map: &'a ProductMap,
    bucket: usize,
    node: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(idx) = self.node {
                self.node = self.map.nodes[idx].next;
                return Some(&self.map.nodes[idx].product);
            }
            if self.bucket >= self.map.buckets.len() {
                return None;
            }
            self.node = self.map.buckets[self.bucket];
            self.bucket += 1;
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn create_test_product(id: i64) -> Product {
        Product::new(id, format!("Product {id}"), "Test", 10, Decimal::ONE)
    }

    #[test]
    fn test_map_new() {
        let map = ProductMap::with_capacity(16);

        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), 16);
        assert!(map.get(1).is_none());
    }

    #[test]
    fn test_map_insert_and_get() {
        let mut map = ProductMap::with_capacity(16);

        map.insert(create_test_product(1));
        map.insert(create_test_product(2));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(1).unwrap().id, 1);
        assert_eq!(map.get(2).unwrap().id, 2);
        assert!(map.get(3).is_none());
        assert!(map.contains(1));
        assert!(!map.contains(3));
    }

    #[test]
    fn test_map_insert_overwrites_existing() {
        let mut map = ProductMap::with_capacity(16);

        map.insert(create_test_product(1));
        let mut updated = create_test_product(1);
        updated.quantity = 77;
        map.insert(updated);

        // Update semantics: same len, newest value wins.
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(1).unwrap().quantity, 77);
    }

    #[test]
    fn test_map_get_mut() {
        let mut map = ProductMap::with_capacity(16);
        map.insert(create_test_product(5));

        map.get_mut(5).unwrap().sales_count = 40;

        assert_eq!(map.get(5).unwrap().sales_count, 40);
        assert!(map.get_mut(6).is_none());
    }

    #[test]
    fn test_map_remove() {
        let mut map = ProductMap::with_capacity(16);
        map.insert(create_test_product(1));
        map.insert(create_test_product(2));

        let removed = map.remove(1).unwrap();
        assert_eq!(removed.id, 1);
        assert_eq!(map.len(), 1);
        assert!(map.get(1).is_none());
        assert!(map.contains(2));

        assert!(map.remove(1).is_none());
        assert!(map.remove(99).is_none());
    }

    #[test]
    fn test_map_chain_collisions() {
        // Capacity 8 and ids 0, 8, 16 all land in bucket 0.
        let mut map = ProductMap::with_capacity(8);
        map.insert(create_test_product(0));
        map.insert(create_test_product(8));
        map.insert(create_test_product(16));

        assert_eq!(map.capacity(), 8); // below the growth trigger
        assert_eq!(map.get(0).unwrap().id, 0);
        assert_eq!(map.get(8).unwrap().id, 8);
        assert_eq!(map.get(16).unwrap().id, 16);

        // Chains are most-recently-inserted-first.
        let ids: Vec<i64> = map.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![16, 8, 0]);
    }

    #[test]
    fn test_map_remove_middle_of_chain() {
        let mut map = ProductMap::with_capacity(8);
        map.insert(create_test_product(0));
        map.insert(create_test_product(8));
        map.insert(create_test_product(16));

        // 8 sits in the middle of the bucket-0 chain (16 -> 8 -> 0).
        assert_eq!(map.remove(8).unwrap().id, 8);

        let ids: Vec<i64> = map.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![16, 0]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_map_negative_ids_hash_by_magnitude() {
        let mut map = ProductMap::with_capacity(8);
        map.insert(create_test_product(-5));
        map.insert(create_test_product(5));

        // |−5| and |5| share bucket 5 but remain distinct keys.
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(-5).unwrap().id, -5);
        assert_eq!(map.get(5).unwrap().id, 5);

        let ids: Vec<i64> = map.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, -5]);
    }

    #[test]
    fn test_map_grows_past_load_factor() {
        let mut map = ProductMap::with_capacity(4);

        map.insert(create_test_product(1));
        map.insert(create_test_product(2));
        map.insert(create_test_product(3));
        assert_eq!(map.capacity(), 4); // 3/4 is not strictly greater than 0.75

        map.insert(create_test_product(4));
        assert_eq!(map.capacity(), 8); // 4/4 > 0.75 doubles the buckets

        for id in 1..=4 {
            assert_eq!(map.get(id).unwrap().id, id);
        }
    }

    #[test]
    fn test_map_load_factor_bound_holds() {
        let mut map = ProductMap::with_capacity(4);

        for id in 0..200 {
            map.insert(create_test_product(id));
            // Post-resize invariant: len/capacity <= 0.75.
            assert!(map.len() * 4 <= map.capacity() * 3);
        }
        assert_eq!(map.len(), 200);
    }

    #[test]
    fn test_map_rehash_preserves_all_entries() {
        let mut map = ProductMap::with_capacity(2);

        for id in -50..50 {
            map.insert(create_test_product(id));
        }

        assert_eq!(map.len(), 100);
        for id in -50..50 {
            assert_eq!(map.get(id).unwrap().id, id, "lost id {id} across rehashes");
        }

        let mut seen: Vec<i64> = map.iter().map(|p| p.id).collect();
        assert_eq!(seen.len(), 100);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn test_map_iter_bucket_order() {
        let mut map = ProductMap::with_capacity(8);
        map.insert(create_test_product(2));
        map.insert(create_test_product(1));
        map.insert(create_test_product(9)); // bucket 1, ahead of 1

        let ids: Vec<i64> = map.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 1, 2]);
    }
}
