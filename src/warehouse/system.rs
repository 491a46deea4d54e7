//! Warehouse orchestrator: the single entry point over all four indices
//! and the order queue.
//!
//! ## Write-Through
//!
//! The identity index holds the authoritative copy of every product; the
//! ordered index and both sales heaps hold independent copies. This struct
//! is the only component that mutates more than one index per logical
//! action, and every mutating call rewrites every stale copy before it
//! returns:
//!
//! | Mutation              | Identity | Ordered | Heaps            |
//! |-----------------------|----------|---------|------------------|
//! | `add_product`         | insert   | insert  | insert (both)    |
//! | `remove_product`      | remove   | remove  | retained         |
//! | `update_stock`        | rewrite  | rewrite | untouched        |
//! | `process_next_order`  | rewrite  | rewrite | `update_sales`   |
//!
//! Heaps rank by cumulative sales, so stock-only changes never touch them,
//! and product removal leaves their last copy in place — they are
//! historical sales trackers.
//!
//! Execution is single-threaded and synchronous; each operation runs as one
//! uninterrupted sequence, which is the only atomicity this design needs.

use tracing::{debug, info, warn};

use crate::error::WarehouseError;
use crate::index::{AvlTree, ProductMap, SalesHeap};
use crate::types::{Order, Product};
use crate::warehouse::OrderQueue;

/// Multi-index product repository with order fulfillment.
#[derive(Debug)]
pub struct Warehouse {
    /// Identity index: authoritative record store
    catalog: ProductMap,

    /// Ordered index: sorted dumps and id-ordered queries
    ordered: AvlTree,

    /// Low-seller tracker (min-heap by sales count)
    low_sales: SalesHeap,

    /// Best-seller tracker (max-heap by sales count)
    best_sales: SalesHeap,

    /// Pending orders awaiting fulfillment
    orders: OrderQueue,

    /// Next order id to assign (starts at 1, consumed only on success)
    next_order_id: u64,
}

impl Warehouse {
    /// Create a warehouse.
    ///
    /// # Arguments
    ///
    /// * `hash_capacity` - initial identity-index bucket count (grows
    ///   automatically past load factor 0.75)
    /// * `heap_capacity` - fixed capacity of each sales heap
    /// * `queue_capacity` - fixed capacity of the order queue
    ///
    /// All three must be positive.
    pub fn new(hash_capacity: usize, heap_capacity: usize, queue_capacity: usize) -> Self {
        Self {
            catalog: ProductMap::with_capacity(hash_capacity),
            ordered: AvlTree::new(),
            low_sales: SalesHeap::min(heap_capacity),
            best_sales: SalesHeap::max(heap_capacity),
            orders: OrderQueue::with_capacity(queue_capacity),
            next_order_id: 1,
        }
    }

    // ========================================================================
    // Product management
    // ========================================================================

    /// Add a new product to every index.
    ///
    /// Rejects `Duplicate` if the id is already catalogued, and `Overflow`
    /// if either sales heap is at capacity — checked up front so a rejected
    /// add leaves no index touched.
    pub fn add_product(&mut self, product: Product) -> Result<(), WarehouseError> {
        if self.catalog.contains(product.id) {
            return Err(WarehouseError::Duplicate(product.id));
        }
        if self.low_sales.is_full() || self.best_sales.is_full() {
            return Err(WarehouseError::Overflow("sales heap"));
        }

        self.low_sales.insert(product.clone())?;
        self.best_sales.insert(product.clone())?;
        self.ordered.insert(product.clone());
        info!(product_id = product.id, name = %product.name, "product added");
        self.catalog.insert(product);
        Ok(())
    }

    /// Remove a product from the identity and ordered indices.
    ///
    /// Both sales heaps keep their last copy: sales history outlives stock
    /// presence. Returns the removed authoritative record.
    pub fn remove_product(&mut self, id: i64) -> Result<Product, WarehouseError> {
        let removed = self.catalog.remove(id).ok_or(WarehouseError::NotFound(id))?;
        self.ordered.remove(id);
        info!(product_id = id, name = %removed.name, "product removed");
        Ok(removed)
    }

    /// Apply a signed stock delta to a product.
    ///
    /// Writes the identity copy, then the ordered copy. Sales heaps rank by
    /// sales count, not stock, so they are not touched. A delta that would
    /// drive stock negative is rejected with `InsufficientStock`; reaching
    /// exactly 0 here does not retire the product (only fulfillment does).
    /// Returns the new on-hand quantity.
    pub fn update_stock(&mut self, id: i64, delta: i32) -> Result<u32, WarehouseError> {
        let product = self
            .catalog
            .get_mut(id)
            .ok_or(WarehouseError::NotFound(id))?;

        let updated = i64::from(product.quantity) + i64::from(delta);
        if updated < 0 {
            return Err(WarehouseError::InsufficientStock {
                requested: delta.unsigned_abs(),
                available: product.quantity,
            });
        }
        let updated =
            u32::try_from(updated).map_err(|_| WarehouseError::Overflow("stock count"))?;

        product.quantity = updated;
        if let Some(copy) = self.ordered.get_mut(id) {
            copy.quantity = updated;
        }
        debug!(product_id = id, quantity = updated, "stock updated");
        Ok(updated)
    }

    /// Look up a product in the identity index.
    #[inline]
    pub fn search_product(&self, id: i64) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// All products in hash-bucket traversal order (not sorted).
    pub fn list_all_products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.iter()
    }

    /// Number of live products.
    #[inline]
    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    // ========================================================================
    // Order lifecycle
    // ========================================================================

    /// Validate and enqueue an order; returns the assigned order id.
    ///
    /// Availability accounts for stock already committed to queued orders:
    /// `available = on-hand − reserved`. The queue bound is checked before
    /// an order id is consumed.
    pub fn place_order(
        &mut self,
        product_id: i64,
        quantity: u32,
        urgent: bool,
    ) -> Result<u64, WarehouseError> {
        if quantity == 0 {
            return Err(WarehouseError::InvalidQuantity);
        }
        let on_hand = self
            .catalog
            .get(product_id)
            .ok_or(WarehouseError::NotFound(product_id))?
            .quantity;
        if self.orders.is_full() {
            return Err(WarehouseError::Overflow("order queue"));
        }

        let reserved = self.orders.reserved_for(product_id);
        let available = u64::from(on_hand).saturating_sub(reserved);
        if u64::from(quantity) > available {
            return Err(WarehouseError::InsufficientStock {
                requested: quantity,
                available: available as u32,
            });
        }

        let order_id = self.next_order_id;
        self.next_order_id += 1;
        self.orders
            .enqueue(Order::new(order_id, product_id, quantity, urgent))?;
        info!(order_id, product_id, quantity, urgent, "order placed");
        Ok(order_id)
    }

    /// Dequeue and fulfill the front order.
    ///
    /// The order is consumed even when fulfillment fails: stock is
    /// re-validated at processing time because the catalog may have changed
    /// since placement. On success the product is debited, its sales count
    /// credited, and the new record written through the identity index, the
    /// ordered index, and both sales heaps. A product whose stock reaches
    /// exactly 0 is retired via [`Warehouse::remove_product`].
    ///
    /// Returns the fulfilled order.
    pub fn process_next_order(&mut self) -> Result<Order, WarehouseError> {
        let order = self
            .orders
            .dequeue()
            .ok_or(WarehouseError::Empty("order queue"))?;

        let product = match self.catalog.get_mut(order.product_id) {
            Some(product) => product,
            None => {
                warn!(
                    order_id = order.order_id,
                    product_id = order.product_id,
                    "dropping order: product no longer catalogued"
                );
                return Err(WarehouseError::NotFound(order.product_id));
            }
        };

        if product.quantity < order.quantity {
            let available = product.quantity;
            warn!(
                order_id = order.order_id,
                product_id = order.product_id,
                requested = order.quantity,
                available,
                "dropping order: stock no longer covers it"
            );
            return Err(WarehouseError::InsufficientStock {
                requested: order.quantity,
                available,
            });
        }

        product.quantity -= order.quantity;
        product.sales_count += order.quantity;
        let product_id = product.id;
        let quantity = product.quantity;
        let sales_count = product.sales_count;

        if let Some(copy) = self.ordered.get_mut(product_id) {
            copy.quantity = quantity;
            copy.sales_count = sales_count;
        }
        self.sync_heaps(product_id, sales_count);

        info!(
            order_id = order.order_id,
            product_id,
            fulfilled = order.quantity,
            remaining = quantity,
            "order fulfilled"
        );

        if quantity == 0 {
            info!(product_id, "stock depleted, retiring product");
            self.remove_product(product_id)?;
        }

        Ok(order)
    }

    /// Push a new sales-count key value into both priority indices.
    fn sync_heaps(&mut self, product_id: i64, sales_count: u32) {
        if let Err(err) = self.low_sales.update_sales(product_id, sales_count) {
            warn!(product_id, %err, "low-sales heap missed a key update");
        }
        if let Err(err) = self.best_sales.update_sales(product_id, sales_count) {
            warn!(product_id, %err, "best-sales heap missed a key update");
        }
    }

    /// Pending orders, front to back.
    pub fn pending_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// The order that `process_next_order` would fulfill next.
    #[inline]
    pub fn next_pending(&self) -> Option<&Order> {
        self.orders.peek()
    }

    /// Number of orders waiting in the queue.
    #[inline]
    pub fn pending_order_count(&self) -> usize {
        self.orders.len()
    }

    // ========================================================================
    // Reporting (read-only)
    // ========================================================================

    /// All live products sorted by ascending id (ordered-index dump).
    pub fn products_by_id(&self) -> Vec<&Product> {
        self.ordered.in_order()
    }

    /// Low-seller tracker in heap-array order.
    #[inline]
    pub fn low_sales_snapshot(&self) -> &[Product] {
        self.low_sales.as_slice()
    }

    /// Best-seller tracker in heap-array order.
    #[inline]
    pub fn best_sales_snapshot(&self) -> &[Product] {
        self.best_sales.as_slice()
    }

    /// Product with the lowest cumulative sales ever tracked.
    #[inline]
    pub fn lowest_selling(&self) -> Option<&Product> {
        self.low_sales.peek()
    }

    /// Product with the highest cumulative sales ever tracked.
    #[inline]
    pub fn best_selling(&self) -> Option<&Product> {
        self.best_sales.peek()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
