#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parse → validate → build must not panic at any step.
    if let Ok(request) = serde_json::from_slice::<bijak::core::CreateInvoiceRequest>(data) {
        let _ = bijak::core::validate_invoice_request(&request);
        let _ = bijak::core::InvoiceBuilder::from_request("FUZZ-000001", request).build();
    }
});
