use bijak::core::*;

fn main() {
    // A request straight off the wire with several problems at once
    let body = r#"{
        "customerName": "  ",
        "customerEmail": "not-an-address",
        "cgstRate": 150,
        "items": [
            {"name": "", "quantity": 0, "unitPrice": -5}
        ]
    }"#;

    let request: CreateInvoiceRequest = serde_json::from_str(body).unwrap();
    let errors = validate_invoice_request(&request);
    println!("Found {} validation errors:", errors.len());
    for e in &errors {
        println!("  - {}", e);
    }

    // A clean request passes
    let body = r#"{
        "customerName": "Patil Distributors",
        "items": [{"name": "Cotton Yarn", "quantity": 3, "unitPrice": 85}]
    }"#;
    let request: CreateInvoiceRequest = serde_json::from_str(body).unwrap();
    println!(
        "\nClean request: {} errors",
        validate_invoice_request(&request).len()
    );

    // Serial numbering for the document series
    println!("\nGenerated serials:");
    let mut seq = SerialSequence::invoices(InvoiceKind::Tax, 4);
    for _ in 0..3 {
        println!("  {}", seq.next_serial());
    }
    let mut seq = SerialSequence::quotations(0);
    for _ in 0..2 {
        println!("  {}", seq.next_serial());
    }
}
