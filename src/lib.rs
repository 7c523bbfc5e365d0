//! # bijak
//!
//! GST-compliant invoicing and quotation engine: tax and proforma invoices,
//! quotations, serial numbering, request validation, and a catalog of
//! sellable items.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. Totals reconcile exactly: for every document,
//! `total_amount == subtotal + cgst_amount + sgst_amount + igst_amount`.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new(invoice_serial(InvoiceKind::Tax, 4))
//!     .kind(InvoiceKind::Tax)
//!     .customer(Customer::new("Sharma Medical Stores").email("accounts@sharma.co.in"))
//!     .add_item(LineItem::new("Surgical Cotton Rolls", dec!(2), dec!(100)))
//!     .add_item(LineItem::new("Cotton Gauze", dec!(1), dec!(50)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(invoice.number, "TAX-000005");
//! let totals = invoice.totals.unwrap();
//! assert_eq!(totals.subtotal, dec!(250.00));
//! assert_eq!(totals.cgst_amount, dec!(15.00));
//! assert_eq!(totals.sgst_amount, dec!(15.00));
//! assert_eq!(totals.total_amount, dec!(280.00));
//! assert_eq!(format_inr(totals.total_amount), "₹280.00");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, calculation engine, validation, numbering, formatting |
//! | `catalog` (default) | Predefined sellable-item catalog |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "catalog")]
pub mod catalog;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
