use bijak::core::*;
use rust_decimal_macros::dec;

fn main() {
    // ── 1. Builder error: missing customer ────────────────────────────
    println!("=== Builder Error ===");
    let result = InvoiceBuilder::new("INV-000001")
        .add_item(LineItem::new("Cotton Yarn", dec!(2), dec!(85)))
        .build();
    match result {
        Ok(_) => println!("  Invoice built (unexpected)"),
        Err(e) => println!("  Build failed: {}", e),
    }

    // ── 2. Validation problems are aggregated, not thrown one at a time ──
    println!("\n=== Validation Errors ===");
    let result = InvoiceBuilder::new("INV-000002")
        .customer(Customer::new("  "))
        .add_item(LineItem::new("", dec!(0), dec!(-1)))
        .build();
    match result {
        Ok(_) => println!("  Invoice is valid (unexpected)"),
        Err(e) => println!("  {}", e),
    }

    // ── 3. Record-level cross-checks catch tampered totals ────────────
    println!("\n=== Totals Cross-Check ===");
    let mut invoice = InvoiceBuilder::new("TAX-000001")
        .kind(InvoiceKind::Tax)
        .customer(Customer::new("Sharma Medical Stores"))
        .add_item(LineItem::new("Medical Gloves", dec!(2), dec!(45)))
        .build()
        .unwrap();
    invoice.items[0].total = Some(dec!(1.00));
    for e in validate_invoice_totals(&invoice) {
        println!("  - {}", e);
    }
}
