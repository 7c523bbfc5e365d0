use bijak::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    // A tax invoice for an intrastate sale with the standard 6% + 6% split
    let invoice = InvoiceBuilder::new(invoice_serial(InvoiceKind::Tax, 4))
        .kind(InvoiceKind::Tax)
        .customer(
            Customer::new("Sharma Medical Stores")
                .email("accounts@sharma.co.in")
                .phone("+91 98200 12345")
                .address("14 MG Road, Pune"),
        )
        .order_reference("PO-7741", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
        .add_item(
            LineItem::new("Surgical Cotton Rolls", dec!(20), dec!(25))
                .description("Sterile cotton rolls for medical use"),
        )
        .add_item(LineItem::new("Surgical Cotton Gauze", dec!(10), dec!(30)))
        .add_item(LineItem::new("Medical Gloves", dec!(5), dec!(45)))
        .build()
        .expect("invoice should be valid");

    let totals = invoice.totals.as_ref().unwrap();
    println!("{}", invoice.kind.title());
    println!("Number:   {}", invoice.number);
    println!("Customer: {}", invoice.customer.name);
    println!("Place of supply: {} ({})", invoice.state, invoice.state_code);
    println!("---");
    for item in &invoice.items {
        println!(
            "  {} x {} @ {} = {}",
            item.quantity,
            item.name,
            format_inr(item.unit_price),
            format_inr(item.total.unwrap())
        );
    }
    println!("---");
    println!("Subtotal:  {}", format_inr(totals.subtotal));
    println!(
        "CGST {}%:   {}",
        invoice.gst.cgst_rate,
        format_inr(totals.cgst_amount)
    );
    println!(
        "SGST {}%:   {}",
        invoice.gst.sgst_rate,
        format_inr(totals.sgst_amount)
    );
    println!("Total:     {}", format_inr(totals.total_amount));
}
