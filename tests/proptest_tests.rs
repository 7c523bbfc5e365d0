//! Property-based tests for the calculation engine and numbering.

use bijak::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Price from 0.00 to 99,999.99.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0u64..10_000_000u64).prop_map(|paise| Decimal::new(paise as i64, 2))
}

/// Quantity from 0.01 to 1,000.00 (fractional quantities are allowed on
/// invoices).
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1u64..=100_000u64).prop_map(|hundredths| Decimal::new(hundredths as i64, 2))
}

/// GST rate from 0.00% to 100.00%.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0u64..=10_000u64).prop_map(|hundredths| Decimal::new(hundredths as i64, 2))
}

fn arb_transaction_type() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::Intrastate),
        Just(TransactionType::Interstate),
    ]
}

fn arb_gst_config() -> impl Strategy<Value = GstConfig> {
    (arb_transaction_type(), arb_rate(), arb_rate(), arb_rate()).prop_map(
        |(transaction_type, cgst_rate, sgst_rate, igst_rate)| GstConfig {
            transaction_type,
            cgst_rate,
            sgst_rate,
            igst_rate,
        },
    )
}

fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec((arb_quantity(), arb_price()), 1..=8).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (quantity, unit_price))| {
                LineItem::new(format!("Item {}", i + 1), quantity, unit_price)
            })
            .collect()
    })
}

fn build_invoice(items: Vec<LineItem>, gst: GstConfig) -> Invoice {
    let mut builder = InvoiceBuilder::new("PROP-000001")
        .customer(Customer::new("Property Traders"))
        .gst(gst);
    for item in items {
        builder = builder.add_item(item);
    }
    builder.build().unwrap()
}

proptest! {
    /// The grand total is always the exact sum of its parts — no hidden
    /// rounding step anywhere after line totals.
    #[test]
    fn total_reconciles_exactly(items in arb_items(), gst in arb_gst_config()) {
        let invoice = build_invoice(items, gst);
        let t = invoice.totals.unwrap();
        prop_assert_eq!(
            t.total_amount,
            t.subtotal + t.cgst_amount + t.sgst_amount + t.igst_amount
        );
        prop_assert_eq!(t.total_tax_amount, t.cgst_amount + t.sgst_amount + t.igst_amount);
    }

    /// Exactly one tax regime applies, whatever the unused rates say.
    #[test]
    fn tax_regimes_are_exclusive(items in arb_items(), gst in arb_gst_config()) {
        let transaction_type = gst.transaction_type;
        let invoice = build_invoice(items, gst);
        let t = invoice.totals.unwrap();
        match transaction_type {
            TransactionType::Intrastate => prop_assert_eq!(t.igst_amount, Decimal::ZERO),
            TransactionType::Interstate => {
                prop_assert_eq!(t.cgst_amount, Decimal::ZERO);
                prop_assert_eq!(t.sgst_amount, Decimal::ZERO);
            }
        }
    }

    /// The subtotal is the plain sum of the per-line computations.
    #[test]
    fn subtotal_is_additive(items in arb_items()) {
        let expected: Decimal = items
            .iter()
            .map(|i| line_total(i.quantity, i.unit_price).unwrap())
            .sum();
        let invoice = build_invoice(items, GstConfig::default());
        prop_assert_eq!(invoice.totals.unwrap().subtotal, expected);
    }

    /// Line totals are cent-precise and deterministic.
    #[test]
    fn line_totals_are_cent_precise(quantity in arb_quantity(), price in arb_price()) {
        let a = line_total(quantity, price).unwrap();
        let b = line_total(quantity, price).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.round_dp(2), a);
        prop_assert!(!a.is_sign_negative());
    }

    /// A freshly built invoice always passes its own cross-checks.
    #[test]
    fn built_invoices_validate_clean(items in arb_items(), gst in arb_gst_config()) {
        let invoice = build_invoice(items, gst);
        prop_assert!(validate_invoice_totals(&invoice).is_empty());
    }

    /// Serials are one-based, zero-padded to six digits, and parse back to
    /// the count they came from.
    #[test]
    fn serials_roundtrip(count in 0u64..10_000_000, tax in any::<bool>()) {
        let kind = if tax { InvoiceKind::Tax } else { InvoiceKind::Proforma };
        let serial = invoice_serial(kind, count);
        let (prefix, digits) = serial.split_once('-').unwrap();
        prop_assert_eq!(prefix, kind.serial_prefix());
        prop_assert!(digits.len() >= 6);
        prop_assert_eq!(digits.parse::<u64>().unwrap(), count + 1);
    }
}
