use bijak::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let quotation = QuotationBuilder::new(
        quotation_serial(7),
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
    )
    .reference("Your enquiry no. 114 dated 12 June 2024")
    .recipient(
        Recipient::new("The Medical Officer")
            .designation("Chief Pharmacist")
            .department("District Hospital, Pune")
            .address("Station Road, Pune 411001"),
    )
    .subject("Supply of surgical cotton items")
    .add_item(
        QuotationLineItem::new("Cotton Wadding", 3, dec!(55))
            .unit_packing("1 Than")
            .mrp(dec!(60)),
    )
    .add_item(QuotationLineItem::new("Surgical Cotton Rolls", 12, dec!(25.50)).unit_packing("1 Roll"))
    .notes("Rates are inclusive of GST. Delivery within 7 days of order.")
    .build()
    .expect("quotation should be valid");

    println!("QUOTATION {}", quotation.number);
    println!("Date: {}", format_long_date(quotation.date));
    println!("To:   {}", quotation.recipient.name);
    if let Some(subject) = &quotation.subject {
        println!("Sub:  {}", subject);
    }
    println!("---");
    for item in &quotation.items {
        println!(
            "  {:>3} x {} ({}) = {}",
            item.quantity,
            item.name,
            item.unit_packing.as_deref().unwrap_or("-"),
            format_inr(item.total.unwrap())
        );
    }
    println!("---");
    println!("Subtotal: {}", format_inr(quotation.subtotal.unwrap()));
    if let Some(notes) = &quotation.notes {
        println!("\n{}", notes);
    }
}
