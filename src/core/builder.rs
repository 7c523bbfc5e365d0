use chrono::NaiveDate;

use super::calc;
use super::error::BijakError;
use super::types::*;
use super::validation;

/// Builder for constructing fully-calculated invoices.
///
/// ```
/// use bijak::core::*;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("TAX-000001")
///     .kind(InvoiceKind::Tax)
///     .customer(Customer::new("Sharma Medical Stores"))
///     .add_item(LineItem::new("Surgical Cotton Rolls", dec!(2), dec!(100)))
///     .add_item(LineItem::new("Cotton Gauze", dec!(1), dec!(50)))
///     .build()
///     .unwrap();
///
/// let totals = invoice.totals.unwrap();
/// assert_eq!(totals.subtotal, dec!(250.00));
/// assert_eq!(totals.total_amount, dec!(280.00));
/// ```
pub struct InvoiceBuilder {
    number: String,
    kind: InvoiceKind,
    status: InvoiceStatus,
    state: String,
    state_code: String,
    order_number: Option<String>,
    order_date: Option<NaiveDate>,
    customer: Option<Customer>,
    items: Vec<LineItem>,
    gst: GstConfig,
    due_date: Option<NaiveDate>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            kind: InvoiceKind::default(),
            status: InvoiceStatus::default(),
            state: DEFAULT_STATE.to_string(),
            state_code: DEFAULT_STATE_CODE.to_string(),
            order_number: None,
            order_date: None,
            customer: None,
            items: Vec::new(),
            gst: GstConfig::default(),
            due_date: None,
        }
    }

    /// Map a validated creation request onto a builder. Omitted fields get
    /// their defaults (proforma kind, Maharashtra place of supply, standard
    /// GST rates); any totals in the incoming items were already dropped at
    /// the type boundary.
    pub fn from_request(number: impl Into<String>, request: CreateInvoiceRequest) -> Self {
        let gst = request.gst_config();
        let mut builder = Self::new(number)
            .kind(request.invoice_type.unwrap_or_default())
            .gst(gst)
            .customer(Customer {
                name: request.customer_name,
                email: request.customer_email.filter(|e| !e.is_empty()),
                phone: request.customer_phone,
                address: request.customer_address,
            });

        if let Some(state) = request.state.filter(|s| !s.is_empty()) {
            builder.state = state;
        }
        if let Some(code) = request.state_code.filter(|c| !c.is_empty()) {
            builder.state_code = code;
        }
        builder.order_number = request.order_number;
        builder.order_date = request.order_date;
        builder.due_date = request.due_date;

        for item in request.items {
            builder.items.push(LineItem {
                name: item.name,
                description: item.description,
                quantity: item.quantity,
                unit_price: item.unit_price,
                total: None,
            });
        }

        builder
    }

    pub fn kind(mut self, kind: InvoiceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    /// Place of supply: state name and GST state code.
    pub fn place_of_supply(mut self, state: impl Into<String>, code: impl Into<String>) -> Self {
        self.state = state.into();
        self.state_code = code.into();
        self
    }

    pub fn order_reference(mut self, number: impl Into<String>, date: NaiveDate) -> Self {
        self.order_number = Some(number.into());
        self.order_date = Some(date);
        self
    }

    pub fn customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn gst(mut self, gst: GstConfig) -> Self {
        self.gst = gst;
        self
    }

    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.gst.transaction_type = transaction_type;
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Build the invoice: compute line totals and the GST breakdown, then
    /// run validation. Returns all validation errors (not just the first)
    /// joined into a [`BijakError::Validation`].
    pub fn build(self) -> Result<Invoice, BijakError> {
        let mut invoice = self.assemble()?;
        calc::calculate_invoice_totals(&mut invoice)?;

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BijakError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build and compute totals without validating — useful for tests or
    /// for importing records from an external system.
    pub fn build_unchecked(self) -> Result<Invoice, BijakError> {
        let mut invoice = self.assemble()?;
        calc::calculate_invoice_totals(&mut invoice)?;
        Ok(invoice)
    }

    fn assemble(self) -> Result<Invoice, BijakError> {
        let customer = self
            .customer
            .ok_or_else(|| BijakError::Builder("customer is required".into()))?;

        // Input limit to prevent abuse
        if self.items.len() > 10_000 {
            return Err(BijakError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }

        Ok(Invoice {
            number: self.number,
            kind: self.kind,
            status: self.status,
            state: self.state,
            state_code: self.state_code,
            order_number: self.order_number,
            order_date: self.order_date,
            customer,
            items: self.items,
            gst: self.gst,
            totals: None,
            due_date: self.due_date,
        })
    }
}

/// Builder for constructing fully-calculated quotations.
pub struct QuotationBuilder {
    number: String,
    reference: Option<String>,
    date: NaiveDate,
    recipient: Option<Recipient>,
    subject: Option<String>,
    items: Vec<QuotationLineItem>,
    notes: Option<String>,
}

impl QuotationBuilder {
    pub fn new(number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            reference: None,
            date,
            recipient: None,
            subject: None,
            items: Vec::new(),
            notes: None,
        }
    }

    /// Map a validated creation request onto a builder. `default_date` is
    /// used when the request carries no quotation date.
    pub fn from_request(
        number: impl Into<String>,
        request: CreateQuotationRequest,
        default_date: NaiveDate,
    ) -> Self {
        let mut builder = Self::new(number, request.quotation_date.unwrap_or(default_date));
        builder.reference = request.reference_letter;
        builder.subject = request.subject;
        builder.notes = request.notes;
        builder.recipient = Some(Recipient {
            name: request.to_name,
            designation: request.to_designation,
            department: request.to_department,
            address: request.to_address,
        });

        for item in request.items {
            builder.items.push(QuotationLineItem {
                name: item.name,
                description: item.description,
                unit_packing: item.unit_packing,
                quantity: item.quantity,
                rate_including_gst: item.rate_including_gst,
                mrp: item.mrp,
                total: None,
            });
        }

        builder
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn recipient(mut self, recipient: Recipient) -> Self {
        self.recipient = Some(recipient);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn add_item(mut self, item: QuotationLineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Build the quotation: compute line totals and the subtotal, then run
    /// validation. Returns all validation errors joined into a
    /// [`BijakError::Validation`].
    pub fn build(self) -> Result<Quotation, BijakError> {
        let mut quotation = self.assemble()?;
        calc::calculate_quotation_totals(&mut quotation)?;

        let errors = validation::validate_quotation(&quotation);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BijakError::Validation(msg));
        }

        Ok(quotation)
    }

    /// Build and compute totals without validating.
    pub fn build_unchecked(self) -> Result<Quotation, BijakError> {
        let mut quotation = self.assemble()?;
        calc::calculate_quotation_totals(&mut quotation)?;
        Ok(quotation)
    }

    fn assemble(self) -> Result<Quotation, BijakError> {
        let recipient = self
            .recipient
            .ok_or_else(|| BijakError::Builder("recipient is required".into()))?;

        if self.items.len() > 10_000 {
            return Err(BijakError::Builder(
                "quotation cannot have more than 10,000 line items".into(),
            ));
        }

        Ok(Quotation {
            number: self.number,
            reference: self.reference,
            date: self.date,
            recipient,
            subject: self.subject,
            items: self.items,
            subtotal: None,
            notes: self.notes,
        })
    }
}
