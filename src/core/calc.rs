//! Invoice and quotation arithmetic.
//!
//! One parameterized engine serves both document kinds: invoices get the
//! full GST breakdown, quotations (whose rates are GST-inclusive) only line
//! totals and a subtotal. All arithmetic is `Decimal` — totals reconcile
//! exactly, with no floating-point drift to paper over.

use rust_decimal::Decimal;

use super::error::BijakError;
use super::types::{GstBreakdown, GstConfig, Invoice, LineItem, Quotation, TransactionType};

/// Round a Decimal to 2 decimal places, half away from zero (commercial
/// rounding at the cent boundary).
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Compute one line's total: `quantity × unit_price`, rounded to the cent.
///
/// Deterministic and side-effect-free. Preconditions (`quantity > 0`,
/// `unit_price >= 0`) are the caller's responsibility and enforced by
/// [`validate_invoice_request`](super::validate_invoice_request); this
/// function accepts any pair of decimals. Overflow of the multiply is the
/// one failure mode and surfaces as [`BijakError::Arithmetic`] rather than
/// a silently wrong total.
pub fn line_total(quantity: Decimal, unit_price: Decimal) -> Result<Decimal, BijakError> {
    let raw = quantity.checked_mul(unit_price).ok_or_else(|| {
        BijakError::Arithmetic(format!(
            "line total {quantity} × {unit_price} overflows the decimal range"
        ))
    })?;
    Ok(round2(raw))
}

/// Sum the computed totals of a sequence of line items.
///
/// Each total is already cent-precise, so the sum is not re-rounded: it is
/// itself a 2-decimal value by construction. Items whose total has not been
/// computed yet contribute nothing. An empty sequence yields zero.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().filter_map(|item| item.total).sum()
}

fn tax_amount(subtotal: Decimal, rate: Decimal) -> Result<Decimal, BijakError> {
    subtotal
        .checked_mul(rate)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| {
            BijakError::Arithmetic(format!(
                "tax amount {subtotal} × {rate}% overflows the decimal range"
            ))
        })
}

/// Compute the GST breakdown for a subtotal under the given configuration.
///
/// Intrastate documents are taxed as CGST + SGST with IGST forced to zero;
/// interstate documents as IGST with CGST and SGST forced to zero. The
/// unused rates stay on the config for audit but contribute nothing. No
/// rounding happens in this step — tax amounts may carry more than two
/// decimal places, and `total_amount` is the exact sum
/// `subtotal + cgst + sgst + igst`.
pub fn compute_taxes(subtotal: Decimal, config: &GstConfig) -> Result<GstBreakdown, BijakError> {
    let (cgst_amount, sgst_amount, igst_amount) = match config.transaction_type {
        TransactionType::Intrastate => (
            tax_amount(subtotal, config.cgst_rate)?,
            tax_amount(subtotal, config.sgst_rate)?,
            Decimal::ZERO,
        ),
        TransactionType::Interstate => (
            Decimal::ZERO,
            Decimal::ZERO,
            tax_amount(subtotal, config.igst_rate)?,
        ),
    };

    let overflow = || BijakError::Arithmetic("document total overflows the decimal range".into());
    let total_tax_amount = cgst_amount
        .checked_add(sgst_amount)
        .and_then(|v| v.checked_add(igst_amount))
        .ok_or_else(overflow)?;
    let total_amount = subtotal.checked_add(total_tax_amount).ok_or_else(overflow)?;

    Ok(GstBreakdown {
        subtotal,
        cgst_amount,
        sgst_amount,
        igst_amount,
        total_tax_amount,
        total_amount,
    })
}

/// Compute line totals and the GST breakdown for an invoice (mutates in
/// place). Any caller-supplied line total is overwritten.
pub fn calculate_invoice_totals(invoice: &mut Invoice) -> Result<(), BijakError> {
    for item in &mut invoice.items {
        item.total = Some(line_total(item.quantity, item.unit_price)?);
    }
    let sub = subtotal(&invoice.items);
    invoice.totals = Some(compute_taxes(sub, &invoice.gst)?);
    Ok(())
}

/// Compute line totals and the subtotal for a quotation (mutates in place).
/// Quotation rates are GST-inclusive, so there is no tax step.
pub fn calculate_quotation_totals(quotation: &mut Quotation) -> Result<(), BijakError> {
    for item in &mut quotation.items {
        item.total = Some(line_total(
            Decimal::from(item.quantity),
            item.rate_including_gst,
        )?);
    }
    let sub: Decimal = quotation.items.iter().filter_map(|item| item.total).sum();
    quotation.subtotal = Some(sub);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn line_total_rounds_half_away_from_zero() {
        assert_eq!(line_total(dec!(1), dec!(10.005)).unwrap(), dec!(10.01));
        assert_eq!(line_total(dec!(3), dec!(33.333)).unwrap(), dec!(100.00));
        assert_eq!(line_total(dec!(2), dec!(12.345)).unwrap(), dec!(24.69));
    }

    #[test]
    fn line_total_is_deterministic() {
        let a = line_total(dec!(7.5), dec!(19.99)).unwrap();
        let b = line_total(dec!(7.5), dec!(19.99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn line_total_overflow_is_an_error() {
        let result = line_total(Decimal::MAX, dec!(2));
        assert!(matches!(result, Err(BijakError::Arithmetic(_))));
    }

    #[test]
    fn subtotal_of_empty_list_is_zero() {
        assert_eq!(subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn subtotal_skips_uncomputed_items() {
        let computed = LineItem {
            total: Some(dec!(10.00)),
            ..LineItem::new("a", dec!(1), dec!(10))
        };
        let uncomputed = LineItem::new("b", dec!(1), dec!(99));
        assert_eq!(subtotal(&[computed, uncomputed]), dec!(10.00));
    }

    #[test]
    fn intrastate_splits_into_cgst_and_sgst() {
        let breakdown = compute_taxes(dec!(250.00), &GstConfig::default()).unwrap();
        assert_eq!(breakdown.cgst_amount, dec!(15.00));
        assert_eq!(breakdown.sgst_amount, dec!(15.00));
        assert_eq!(breakdown.igst_amount, Decimal::ZERO);
        assert_eq!(breakdown.total_tax_amount, dec!(30.00));
        assert_eq!(breakdown.total_amount, dec!(280.00));
    }

    #[test]
    fn interstate_uses_igst_only() {
        let config = GstConfig {
            transaction_type: TransactionType::Interstate,
            ..GstConfig::default()
        };
        let breakdown = compute_taxes(dec!(250.00), &config).unwrap();
        assert_eq!(breakdown.cgst_amount, Decimal::ZERO);
        assert_eq!(breakdown.sgst_amount, Decimal::ZERO);
        assert_eq!(breakdown.igst_amount, dec!(30.00));
        assert_eq!(breakdown.total_amount, dec!(280.00));
    }

    #[test]
    fn unused_rates_never_contribute() {
        // An absurd IGST rate must not leak into an intrastate document.
        let config = GstConfig {
            igst_rate: dec!(99),
            ..GstConfig::default()
        };
        let breakdown = compute_taxes(dec!(1000), &config).unwrap();
        assert_eq!(breakdown.igst_amount, Decimal::ZERO);
        assert_eq!(breakdown.total_amount, dec!(1120.00));
    }

    #[test]
    fn tax_amounts_are_not_rounded() {
        // 33.33 * 6 / 100 = 1.9998 — kept exact, not forced to 2 decimals.
        let breakdown = compute_taxes(dec!(33.33), &GstConfig::default()).unwrap();
        assert_eq!(breakdown.cgst_amount, dec!(1.9998));
        assert_eq!(
            breakdown.total_amount,
            breakdown.subtotal + breakdown.total_tax_amount
        );
    }
}
