//! stockcore - Demo Binary
//!
//! Scripted walkthrough of the warehouse engine: catalog mutations, order
//! lifecycle, and the reporting surfaces. Run with `RUST_LOG=debug` to see
//! the write-through events.

use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use stockcore::{Product, Warehouse};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===========================================");
    println!("  stockcore - warehouse inventory engine");
    println!("===========================================");
    println!();

    let mut warehouse = Warehouse::new(16, 64, 100);

    println!("Stocking the catalog...");
    let seed = [
        Product::with_sales(1, "Anvil", "Hardware", 100, Decimal::new(12_50, 2), 80),
        Product::with_sales(2, "Lantern", "Outdoor", 50, Decimal::new(8_99, 2), 65),
        Product::with_sales(3, "Rope (30m)", "Outdoor", 30, Decimal::new(15_00, 2), 120),
        Product::with_sales(4, "Hammer", "Hardware", 75, Decimal::new(9_25, 2), 40),
    ];
    for product in seed {
        if let Err(err) = warehouse.add_product(product) {
            println!("  add rejected: {err}");
        }
    }
    println!("  {} products catalogued", warehouse.product_count());
    println!();

    println!("Catalog by id (ordered index):");
    for product in warehouse.products_by_id() {
        println!(
            "  #{:<3} {:<12} qty {:>4}  sales {:>4}  ${}",
            product.id, product.name, product.quantity, product.sales_count, product.price
        );
    }
    println!();

    println!("Sales extremes:");
    if let Some(low) = warehouse.lowest_selling() {
        println!("  lowest seller: {} (sales {})", low.name, low.sales_count);
    }
    if let Some(best) = warehouse.best_selling() {
        println!("  best seller:   {} (sales {})", best.name, best.sales_count);
    }
    println!();

    println!("Placing orders...");
    for (product_id, quantity, urgent) in [(1, 20, false), (4, 10, false), (2, 5, true)] {
        match warehouse.place_order(product_id, quantity, urgent) {
            Ok(order_id) => println!(
                "  order #{order_id}: {quantity} units of product {product_id}{}",
                if urgent { " (urgent)" } else { "" }
            ),
            Err(err) => println!("  placement rejected: {err}"),
        }
    }
    // Oversized request: rejected, queue untouched.
    if let Err(err) = warehouse.place_order(3, 500, false) {
        println!("  placement rejected: {err}");
    }
    println!();

    println!("Pending queue (front to back):");
    for order in warehouse.pending_orders() {
        println!(
            "  order #{} -> product {} x{}{}",
            order.order_id,
            order.product_id,
            order.quantity,
            if order.urgent { " [urgent]" } else { "" }
        );
    }
    println!();

    println!("Processing the queue...");
    while let Ok(order) = warehouse.process_next_order() {
        let remaining = warehouse
            .search_product(order.product_id)
            .map(|p| p.quantity);
        println!(
            "  fulfilled order #{} (product {} x{}), remaining stock: {:?}",
            order.order_id, order.product_id, order.quantity, remaining
        );
    }
    println!();

    println!("Sales extremes after fulfillment:");
    if let Some(low) = warehouse.lowest_selling() {
        println!("  lowest seller: {} (sales {})", low.name, low.sales_count);
    }
    if let Some(best) = warehouse.best_selling() {
        println!("  best seller:   {} (sales {})", best.name, best.sales_count);
    }
}
