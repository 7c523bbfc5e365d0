//! GST state-code validation.
//!
//! Lookup of the two-digit GST state codes (the first two digits of a
//! GSTIN) used for the place-of-supply fields on an invoice. Covers the
//! current official list, including union territories and "Other Territory".

/// Check whether `code` is a known GST state code.
pub fn is_known_state_code(code: &str) -> bool {
    STATE_CODES.binary_search_by_key(&code, |(c, _)| c).is_ok()
}

/// Look up the state name for a GST state code.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATE_CODES
        .binary_search_by_key(&code, |(c, _)| c)
        .ok()
        .map(|i| STATE_CODES[i].1)
}

/// Look up the GST state code for a state name (case-insensitive).
pub fn state_code(name: &str) -> Option<&'static str> {
    STATE_CODES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(c, _)| *c)
}

/// GST state codes with state names. Sorted by code for binary search.
static STATE_CODES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
];
