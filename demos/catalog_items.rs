use bijak::catalog;
use bijak::core::*;
use rust_decimal_macros::dec;

fn main() {
    println!("Categories:");
    for category in catalog::CATEGORIES {
        let count = catalog::items_in_category(category).count();
        println!("  {} ({} items)", category, count);
    }

    println!("\nSearch 'cotton roll':");
    for item in catalog::search("cotton roll") {
        println!("  {} — {}", item.name, format_inr(item.default_unit_price()));
    }

    // Compose an invoice from a catalog entry
    let rolls = catalog::item_by_id("surgical-cotton-rolls").unwrap();
    let invoice = InvoiceBuilder::new(invoice_serial(InvoiceKind::Proforma, 0))
        .customer(Customer::new("Patil Distributors"))
        .add_item(
            LineItem::new(rolls.name, dec!(40), rolls.default_unit_price())
                .description(rolls.description),
        )
        .build()
        .unwrap();

    let totals = invoice.totals.as_ref().unwrap();
    println!(
        "\n{} for {}: {}",
        invoice.number,
        invoice.customer.name,
        format_inr(totals.total_amount)
    );
}
