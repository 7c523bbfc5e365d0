use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Default place of supply when the caller does not name one.
pub const DEFAULT_STATE: &str = "Maharashtra";
/// GST state code matching [`DEFAULT_STATE`].
pub const DEFAULT_STATE_CODE: &str = "27";

/// Which GST regime applies to a transaction.
///
/// Intrastate supplies are taxed as CGST + SGST; interstate supplies as
/// IGST. Exactly one regime applies per document — the unused rates may be
/// stored for audit but never contribute to the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Supplier and recipient in the same state — CGST + SGST.
    #[default]
    Intrastate,
    /// Supply crosses state lines — IGST.
    Interstate,
}

impl TransactionType {
    /// Wire code used by the service layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Intrastate => "intrastate",
            Self::Interstate => "interstate",
        }
    }

    /// Parse from a wire code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "intrastate" => Some(Self::Intrastate),
            "interstate" => Some(Self::Interstate),
            _ => None,
        }
    }
}

/// Invoice subtype. Both kinds share the same calculation rules and differ
/// only in serial prefix and display title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceKind {
    /// Pre-sale invoice, numbered in the `INV` series.
    #[default]
    Proforma,
    /// Final GST invoice, numbered in the `TAX` series.
    Tax,
}

impl InvoiceKind {
    /// Wire code used by the service layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Proforma => "proforma",
            Self::Tax => "tax",
        }
    }

    /// Parse from a wire code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "proforma" => Some(Self::Proforma),
            "tax" => Some(Self::Tax),
            _ => None,
        }
    }

    /// Serial-number prefix for this kind (see [`crate::core::SerialSequence`]).
    pub fn serial_prefix(&self) -> &'static str {
        match self {
            Self::Proforma => "INV",
            Self::Tax => "TAX",
        }
    }

    /// Heading printed on the rendered document.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Proforma => "PROFORMA INVOICE",
            Self::Tax => "TAX INVOICE",
        }
    }
}

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    /// Wire code used by the service layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }

    /// Parse from a wire code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

/// GST rate configuration for one invoice.
///
/// Rates are percentages in `[0, 100]`. All three are always stored; the
/// transaction type decides which of them apply (see
/// [`compute_taxes`](crate::core::compute_taxes)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstConfig {
    pub transaction_type: TransactionType,
    pub cgst_rate: Decimal,
    pub sgst_rate: Decimal,
    pub igst_rate: Decimal,
}

impl Default for GstConfig {
    /// Standard rates: CGST 6%, SGST 6%, IGST 12%, intrastate.
    fn default() -> Self {
        Self {
            transaction_type: TransactionType::Intrastate,
            cgst_rate: dec!(6),
            sgst_rate: dec!(6),
            igst_rate: dec!(12),
        }
    }
}

impl GstConfig {
    /// Build a config from optional caller-supplied rates, applying the
    /// defaults for anything omitted.
    pub fn from_rates(
        transaction_type: Option<TransactionType>,
        cgst_rate: Option<Decimal>,
        sgst_rate: Option<Decimal>,
        igst_rate: Option<Decimal>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            transaction_type: transaction_type.unwrap_or(defaults.transaction_type),
            cgst_rate: cgst_rate.unwrap_or(defaults.cgst_rate),
            sgst_rate: sgst_rate.unwrap_or(defaults.sgst_rate),
            igst_rate: igst_rate.unwrap_or(defaults.igst_rate),
        }
    }
}

/// Fully-computed monetary breakdown of an invoice.
///
/// `total_amount` always equals `subtotal + cgst_amount + sgst_amount +
/// igst_amount` exactly — no independent rounding is applied after the tax
/// step, so the stored figures reconcile by construction. Tax amounts may
/// carry more than two decimal places; display rounding is a presentation
/// concern (see [`format_inr`](crate::core::format_inr)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstBreakdown {
    /// Sum of all line totals, not re-rounded after summation.
    pub subtotal: Decimal,
    /// Central GST amount — zero for interstate documents.
    pub cgst_amount: Decimal,
    /// State GST amount — zero for interstate documents.
    pub sgst_amount: Decimal,
    /// Integrated GST amount — zero for intrastate documents.
    pub igst_amount: Decimal,
    /// `cgst_amount + sgst_amount + igst_amount`.
    pub total_tax_amount: Decimal,
    /// `subtotal + total_tax_amount`.
    pub total_amount: Decimal,
}

/// One purchasable entry on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item name — must be non-blank.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Quantity — positive, minimum 0.01.
    pub quantity: Decimal,
    /// Price per unit — non-negative.
    pub unit_price: Decimal,
    /// Computed `quantity × unit_price`, rounded to the cent.
    /// Set by [`calculate_invoice_totals`](crate::core::calculate_invoice_totals);
    /// never taken from the caller.
    pub total: Option<Decimal>,
}

impl LineItem {
    /// Create a line item with no description and no computed total.
    pub fn new(name: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            quantity,
            unit_price,
            total: None,
        }
    }

    /// Attach a description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The billed party on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer name — must be non-blank.
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Customer {
    /// Create a customer with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            address: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// A GST invoice — proforma or tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Serial number, e.g. "TAX-000005".
    pub number: String,
    pub kind: InvoiceKind,
    pub status: InvoiceStatus,
    /// Place of supply — state name.
    pub state: String,
    /// Place of supply — GST state code, e.g. "27".
    pub state_code: String,
    /// Purchase-order reference, if the customer supplied one.
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub customer: Customer,
    pub items: Vec<LineItem>,
    pub gst: GstConfig,
    /// Computed totals. Set by
    /// [`calculate_invoice_totals`](crate::core::calculate_invoice_totals).
    pub totals: Option<GstBreakdown>,
    pub due_date: Option<NaiveDate>,
}

/// One row on a quotation.
///
/// Quotation rates are GST-inclusive, so quotations carry no tax breakdown —
/// only a subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationLineItem {
    /// Item name — must be non-blank.
    pub name: String,
    pub description: Option<String>,
    /// Packing unit the rate is quoted per, e.g. "1 Than", "1 Roll".
    pub unit_packing: Option<String>,
    /// Number of packings — whole units, minimum 1.
    pub quantity: u32,
    /// GST-inclusive rate per packing — non-negative.
    #[serde(rename = "rateIncludingGST")]
    pub rate_including_gst: Decimal,
    /// Optional maximum retail price, shown for comparison.
    pub mrp: Option<Decimal>,
    /// Computed `quantity × rate_including_gst`, rounded to the cent.
    /// Set by [`calculate_quotation_totals`](crate::core::calculate_quotation_totals).
    pub total: Option<Decimal>,
}

impl QuotationLineItem {
    /// Create a quotation row with no computed total.
    pub fn new(name: impl Into<String>, quantity: u32, rate_including_gst: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            unit_packing: None,
            quantity,
            rate_including_gst,
            mrp: None,
            total: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn unit_packing(mut self, unit_packing: impl Into<String>) -> Self {
        self.unit_packing = Some(unit_packing.into());
        self
    }

    pub fn mrp(mut self, mrp: Decimal) -> Self {
        self.mrp = Some(mrp);
        self
    }
}

/// The party a quotation is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// Recipient name — must be non-blank.
    pub name: String,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub address: Option<String>,
}

impl Recipient {
    /// Create a recipient with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            designation: None,
            department: None,
            address: None,
        }
    }

    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// A price quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// Serial number, e.g. "QTN-000012".
    pub number: String,
    /// Reference letter quoted in the header.
    pub reference: Option<String>,
    pub date: NaiveDate,
    pub recipient: Recipient,
    pub subject: Option<String>,
    pub items: Vec<QuotationLineItem>,
    /// Sum of item totals. Set by
    /// [`calculate_quotation_totals`](crate::core::calculate_quotation_totals).
    pub subtotal: Option<Decimal>,
    /// Closing notes.
    pub notes: Option<String>,
}

/// Line-item input as received from the caller.
///
/// Deliberately carries no `total` field: the engine always recomputes line
/// totals, so a total in the incoming JSON is dropped at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

/// Request payload for creating an invoice.
///
/// Statically typed counterpart of the service's JSON body; field names
/// follow the camelCase wire shape. Well-formedness is checked by
/// [`validate_invoice_request`](crate::core::validate_invoice_request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    /// Caller-supplied serial; when absent the service generates one.
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub invoice_type: Option<InvoiceKind>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub cgst_rate: Option<Decimal>,
    #[serde(default)]
    pub sgst_rate: Option<Decimal>,
    #[serde(default)]
    pub igst_rate: Option<Decimal>,
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl CreateInvoiceRequest {
    /// GST configuration for this request, with defaults applied.
    pub fn gst_config(&self) -> GstConfig {
        GstConfig::from_rates(
            self.transaction_type,
            self.cgst_rate,
            self.sgst_rate,
            self.igst_rate,
        )
    }
}

fn default_quantity() -> u32 {
    1
}

/// Quotation row input as received from the caller. Like [`LineItemInput`],
/// it has no `total` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationItemInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit_packing: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(rename = "rateIncludingGST")]
    pub rate_including_gst: Decimal,
    #[serde(default)]
    pub mrp: Option<Decimal>,
}

/// Request payload for creating a quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotationRequest {
    /// Caller-supplied serial; when absent the service generates one.
    #[serde(default)]
    pub quotation_number: Option<String>,
    #[serde(default)]
    pub reference_letter: Option<String>,
    #[serde(default)]
    pub quotation_date: Option<NaiveDate>,
    pub to_name: String,
    #[serde(default)]
    pub to_designation: Option<String>,
    #[serde(default)]
    pub to_department: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub items: Vec<QuotationItemInput>,
    #[serde(default)]
    pub notes: Option<String>,
}
