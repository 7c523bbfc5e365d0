use rust_decimal::Decimal;

use super::calc;
use super::error::ValidationError;
use super::states::is_known_state_code;
use super::types::*;

/// Validate an invoice-creation request.
/// Returns all validation errors found (not just the first); an empty list
/// means the request is well-formed. Never panics — the caller decides
/// whether to reject based on non-emptiness.
pub fn validate_invoice_request(request: &CreateInvoiceRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if request.customer_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer_name",
            "customer name is required",
        ));
    }

    if request.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "at least one line item is required",
        ));
    }

    for (i, item) in request.items.iter().enumerate() {
        validate_item_fields(&item.name, item.quantity, item.unit_price, i, &mut errors);
    }

    if let Some(rate) = request.cgst_rate {
        validate_rate("cgst_rate", "CGST", rate, &mut errors);
    }
    if let Some(rate) = request.sgst_rate {
        validate_rate("sgst_rate", "SGST", rate, &mut errors);
    }
    if let Some(rate) = request.igst_rate {
        validate_rate("igst_rate", "IGST", rate, &mut errors);
    }

    // transaction_type and invoice_type are enums — unrecognized values are
    // rejected at deserialization, so nothing to check here.

    if let Some(email) = &request.customer_email {
        validate_email("customer_email", email, &mut errors);
    }

    if let Some(code) = &request.state_code {
        validate_state_code(code, &mut errors);
    }

    errors
}

/// Validate a quotation-creation request. Same contract as
/// [`validate_invoice_request`].
pub fn validate_quotation_request(request: &CreateQuotationRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if request.to_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "to_name",
            "recipient name is required",
        ));
    }

    if request.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "at least one line item is required",
        ));
    }

    for (i, item) in request.items.iter().enumerate() {
        validate_quotation_item_fields(
            &item.name,
            item.quantity,
            item.rate_including_gst,
            item.mrp,
            i,
            &mut errors,
        );
    }

    errors
}

/// Validate a constructed invoice record, including its computed totals.
///
/// Runs the same field rules as [`validate_invoice_request`] against the
/// record, then cross-checks the stored breakdown when present.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.customer.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer.name",
            "customer name is required",
        ));
    }

    if invoice.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "at least one line item is required",
        ));
    }

    for (i, item) in invoice.items.iter().enumerate() {
        validate_item_fields(&item.name, item.quantity, item.unit_price, i, &mut errors);
    }

    validate_rate("gst.cgst_rate", "CGST", invoice.gst.cgst_rate, &mut errors);
    validate_rate("gst.sgst_rate", "SGST", invoice.gst.sgst_rate, &mut errors);
    validate_rate("gst.igst_rate", "IGST", invoice.gst.igst_rate, &mut errors);

    if let Some(email) = &invoice.customer.email {
        validate_email("customer.email", email, &mut errors);
    }

    validate_state_code(&invoice.state_code, &mut errors);

    if invoice.totals.is_some() {
        errors.extend(validate_invoice_totals(invoice));
    }

    errors
}

/// Cross-check an invoice's stored totals against its line items and GST
/// configuration. The breakdown must reconcile exactly: line totals
/// recompute to the same cents, the subtotal is their exact sum, only the
/// active regime carries tax, and the grand total is the plain sum of its
/// parts.
pub fn validate_invoice_totals(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(totals) = &invoice.totals else {
        errors.push(ValidationError::new(
            "totals",
            "totals must be calculated before validation",
        ));
        return errors;
    };

    for (i, item) in invoice.items.iter().enumerate() {
        if let (Some(stored), Ok(expected)) = (
            item.total,
            calc::line_total(item.quantity, item.unit_price),
        ) {
            if stored != expected {
                errors.push(ValidationError::new(
                    format!("items[{i}].total"),
                    format!("stored total {stored} does not match computed {expected}"),
                ));
            }
        }
    }

    let expected_subtotal = calc::subtotal(&invoice.items);
    if totals.subtotal != expected_subtotal {
        errors.push(ValidationError::new(
            "totals.subtotal",
            format!(
                "subtotal {} does not match sum of line totals {}",
                totals.subtotal, expected_subtotal
            ),
        ));
    }

    match invoice.gst.transaction_type {
        TransactionType::Intrastate => {
            if !totals.igst_amount.is_zero() {
                errors.push(ValidationError::new(
                    "totals.igst_amount",
                    "intrastate documents must not carry IGST",
                ));
            }
        }
        TransactionType::Interstate => {
            if !totals.cgst_amount.is_zero() || !totals.sgst_amount.is_zero() {
                errors.push(ValidationError::new(
                    "totals.cgst_amount",
                    "interstate documents must not carry CGST or SGST",
                ));
            }
        }
    }

    let expected_tax = totals.cgst_amount + totals.sgst_amount + totals.igst_amount;
    if totals.total_tax_amount != expected_tax {
        errors.push(ValidationError::new(
            "totals.total_tax_amount",
            format!(
                "total tax {} does not match CGST + SGST + IGST = {}",
                totals.total_tax_amount, expected_tax
            ),
        ));
    }

    let expected_total = totals.subtotal + totals.total_tax_amount;
    if totals.total_amount != expected_total {
        errors.push(ValidationError::new(
            "totals.total_amount",
            format!(
                "total {} does not match subtotal {} + tax {}",
                totals.total_amount, totals.subtotal, totals.total_tax_amount
            ),
        ));
    }

    errors
}

/// Validate a constructed quotation record, cross-checking the stored
/// subtotal when present.
pub fn validate_quotation(quotation: &Quotation) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if quotation.recipient.name.trim().is_empty() {
        errors.push(ValidationError::new(
            "recipient.name",
            "recipient name is required",
        ));
    }

    if quotation.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "at least one line item is required",
        ));
    }

    for (i, item) in quotation.items.iter().enumerate() {
        validate_quotation_item_fields(
            &item.name,
            item.quantity,
            item.rate_including_gst,
            item.mrp,
            i,
            &mut errors,
        );
    }

    if let Some(subtotal) = quotation.subtotal {
        let expected: Decimal = quotation.items.iter().filter_map(|item| item.total).sum();
        if subtotal != expected {
            errors.push(ValidationError::new(
                "subtotal",
                format!("subtotal {subtotal} does not match sum of line totals {expected}"),
            ));
        }
    }

    errors
}

fn validate_item_fields(
    name: &str,
    quantity: Decimal,
    unit_price: Decimal,
    index: usize,
    errors: &mut Vec<ValidationError>,
) {
    let prefix = format!("items[{index}]");

    if name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "item name must not be blank",
        ));
    }

    if quantity <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must be greater than 0",
        ));
    }

    if unit_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "unit price must be 0 or greater",
        ));
    }
}

fn validate_quotation_item_fields(
    name: &str,
    quantity: u32,
    rate_including_gst: Decimal,
    mrp: Option<Decimal>,
    index: usize,
    errors: &mut Vec<ValidationError>,
) {
    let prefix = format!("items[{index}]");

    if name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "item name must not be blank",
        ));
    }

    if quantity == 0 {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must be at least 1",
        ));
    }

    if rate_including_gst.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.rate_including_gst"),
            "rate must be 0 or greater",
        ));
    }

    if let Some(mrp) = mrp {
        if mrp.is_sign_negative() {
            errors.push(ValidationError::new(
                format!("{prefix}.mrp"),
                "MRP must be 0 or greater",
            ));
        }
    }
}

fn validate_rate(field: &str, label: &str, rate: Decimal, errors: &mut Vec<ValidationError>) {
    if rate.is_sign_negative() || rate > Decimal::ONE_HUNDRED {
        errors.push(ValidationError::new(
            field,
            format!("{label} rate must be between 0 and 100"),
        ));
    }
}

fn validate_email(field: &str, email: &str, errors: &mut Vec<ValidationError>) {
    // An empty string means "not provided" — UIs submit blank inputs as "".
    if !email.is_empty() && !is_valid_email_shape(email) {
        errors.push(ValidationError::new(
            field,
            format!("'{email}' is not a valid email address"),
        ));
    }
}

fn validate_state_code(code: &str, errors: &mut Vec<ValidationError>) {
    if !code.is_empty() && !is_known_state_code(code) {
        errors.push(ValidationError::new(
            "state_code",
            format!("'{code}' is not a known GST state code"),
        ));
    }
}

/// Minimal `local@domain.tld` shape check — no whitespace, exactly one `@`,
/// and a dotted domain with non-empty parts.
fn is_valid_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_request() -> CreateInvoiceRequest {
        CreateInvoiceRequest {
            invoice_number: None,
            invoice_type: None,
            state: None,
            state_code: None,
            order_number: None,
            order_date: None,
            customer_name: "Sharma Medical Stores".into(),
            customer_email: None,
            customer_phone: None,
            customer_address: None,
            items: vec![LineItemInput {
                name: "Surgical Cotton Rolls".into(),
                description: None,
                quantity: dec!(2),
                unit_price: dec!(100),
            }],
            cgst_rate: None,
            sgst_rate: None,
            igst_rate: None,
            transaction_type: None,
            due_date: None,
        }
    }

    #[test]
    fn valid_request_has_no_errors() {
        assert!(validate_invoice_request(&valid_request()).is_empty());
    }

    #[test]
    fn all_problems_are_reported_at_once() {
        let request = CreateInvoiceRequest {
            customer_name: "   ".into(),
            items: vec![],
            cgst_rate: Some(dec!(150)),
            ..valid_request()
        };
        let errors = validate_invoice_request(&request);
        assert!(errors.len() >= 3, "expected >= 3 errors, got {errors:?}");
        assert!(errors.iter().any(|e| e.field == "customer_name"));
        assert!(errors.iter().any(|e| e.field == "items"));
        assert!(errors.iter().any(|e| e.field == "cgst_rate"));
    }

    #[test]
    fn item_errors_carry_their_index() {
        let request = CreateInvoiceRequest {
            items: vec![
                LineItemInput {
                    name: "Cotton Gauze".into(),
                    description: None,
                    quantity: dec!(1),
                    unit_price: dec!(30),
                },
                LineItemInput {
                    name: "".into(),
                    description: None,
                    quantity: dec!(0),
                    unit_price: dec!(-5),
                },
            ],
            ..valid_request()
        };
        let errors = validate_invoice_request(&request);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"items[1].name"));
        assert!(fields.contains(&"items[1].quantity"));
        assert!(fields.contains(&"items[1].unit_price"));
        assert!(!fields.iter().any(|f| f.starts_with("items[0]")));
    }

    #[test]
    fn rate_bounds_are_inclusive() {
        let request = CreateInvoiceRequest {
            cgst_rate: Some(dec!(0)),
            sgst_rate: Some(dec!(100)),
            igst_rate: Some(dec!(100.01)),
            ..valid_request()
        };
        let errors = validate_invoice_request(&request);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "igst_rate");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email_shape("accounts@sharma.co.in"));
        assert!(is_valid_email_shape("a@b.c"));
        assert!(!is_valid_email_shape("plainaddress"));
        assert!(!is_valid_email_shape("@missing-local.in"));
        assert!(!is_valid_email_shape("no-domain@"));
        assert!(!is_valid_email_shape("no-tld@domain"));
        assert!(!is_valid_email_shape("trailing-dot@domain."));
        assert!(!is_valid_email_shape("two@@signs.in"));
        assert!(!is_valid_email_shape("has space@domain.in"));
    }

    #[test]
    fn empty_email_string_means_not_provided() {
        let request = CreateInvoiceRequest {
            customer_email: Some("".into()),
            ..valid_request()
        };
        assert!(validate_invoice_request(&request).is_empty());
    }

    #[test]
    fn unknown_state_code_is_flagged() {
        let request = CreateInvoiceRequest {
            state_code: Some("99".into()),
            ..valid_request()
        };
        let errors = validate_invoice_request(&request);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "state_code");
    }

    #[test]
    fn quotation_quantity_zero_is_rejected() {
        let request = CreateQuotationRequest {
            quotation_number: None,
            reference_letter: None,
            quotation_date: None,
            to_name: "The Medical Officer".into(),
            to_designation: None,
            to_department: None,
            to_address: None,
            subject: None,
            items: vec![QuotationItemInput {
                name: "Cotton Wadding".into(),
                description: None,
                unit_packing: Some("1 Than".into()),
                quantity: 0,
                rate_including_gst: dec!(55),
                mrp: None,
            }],
            notes: None,
        };
        let errors = validate_quotation_request(&request);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "items[0].quantity");
    }
}
