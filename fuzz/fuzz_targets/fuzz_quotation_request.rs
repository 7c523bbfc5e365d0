#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    // Parse → validate → build must not panic at any step.
    if let Ok(request) = serde_json::from_slice::<bijak::core::CreateQuotationRequest>(data) {
        let _ = bijak::core::validate_quotation_request(&request);
        let _ = bijak::core::QuotationBuilder::from_request("FUZZ-000001", request, date).build();
    }
});
