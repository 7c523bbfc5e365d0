//! Currency and date presentation formatting.
//!
//! Display formatting only: amounts are rounded to two decimals for
//! rendering, but the stored breakdown fields are never altered here.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calc::round2;

/// Format an amount as Indian rupees: rupee sign, two decimal places, and
/// Indian digit grouping (the last three digits, then groups of two), e.g.
/// `₹12,34,567.89`. Negative amounts carry a leading minus sign.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round2(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut frac = frac_part.to_string();
    while frac.len() < 2 {
        frac.push('0');
    }

    format!("{sign}₹{}.{frac}", group_indian(int_part))
}

/// Format a date the way the documents print it: `15 June 2024`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Indian (lakh/crore) digit grouping: the last three digits form one
/// group, everything before that splits into groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        groups.push(back);
        rest = front;
    }
    groups.push(rest);

    let mut out = String::with_capacity(digits.len() + groups.len() + 1);
    for group in groups.iter().rev() {
        out.push_str(group);
        out.push(',');
    }
    out.push_str(tail);
    out
}
