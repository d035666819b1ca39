use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::EntryError;
use super::format::{format_amount, round_half_up};
use super::ledger::{EntryId, Ledger};
use super::taxonomy::{LedgerKind, Taxonomy};
use super::types::{Scope, TaxCode, TaxEntry};

/// Working copy of one entry's fields, independent of the ledger until
/// committed.
///
/// Numeric fields hold the raw text the user typed; they are coerced at
/// derivation and commit time, and a value that does not parse degrades to
/// `None`/zero rather than failing — only the resolved amount gates
/// saving. Dropping the draft discards its state unconditionally.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tributo::{EntryDraft, TaxCode, Taxonomy};
///
/// let mut draft = EntryDraft::new(Taxonomy::withholding());
/// draft.set_tax_type(TaxCode::IngresosBrutos);
/// draft.set_province_code("902");
/// draft.set_base_amount("1000");
/// draft.set_percentage("3");
///
/// let entry = draft.entry().unwrap();
/// assert_eq!(entry.amount, dec!(30.00));
/// ```
#[derive(Debug, Clone)]
pub struct EntryDraft<'t> {
    taxonomy: &'t Taxonomy,
    tax_type: TaxCode,
    province_code: String,
    regimen: String,
    certificate_number: String,
    base_amount: String,
    percentage: String,
    amount: String,
    sales_invoice: String,
    scope: Scope,
}

impl<'t> EntryDraft<'t> {
    /// Empty draft with the taxonomy's first type preselected.
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            tax_type: taxonomy.default_type().clone(),
            province_code: String::new(),
            regimen: String::new(),
            certificate_number: String::new(),
            base_amount: String::new(),
            percentage: String::new(),
            amount: String::new(),
            sales_invoice: String::new(),
            scope: Scope::default(),
        }
    }

    /// Draft prefilled from an existing entry, for edit mode.
    pub fn editing(taxonomy: &'t Taxonomy, entry: &TaxEntry) -> Self {
        Self {
            taxonomy,
            tax_type: entry.tax_type.clone(),
            province_code: entry.province_code.clone().unwrap_or_default(),
            regimen: entry.regimen.clone().unwrap_or_default(),
            certificate_number: entry.certificate_number.clone().unwrap_or_default(),
            base_amount: entry.base_amount.map(|d| d.to_string()).unwrap_or_default(),
            percentage: entry.percentage.map(|d| d.to_string()).unwrap_or_default(),
            amount: entry.amount.to_string(),
            sales_invoice: entry.sales_invoice.clone().unwrap_or_default(),
            scope: entry.scope.unwrap_or_default(),
        }
    }

    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    pub fn tax_type(&self) -> &TaxCode {
        &self.tax_type
    }

    pub fn province_code(&self) -> &str {
        &self.province_code
    }

    pub fn regimen(&self) -> &str {
        &self.regimen
    }

    /// Raw working amount as shown in the form field.
    pub fn amount_input(&self) -> &str {
        &self.amount
    }

    /// The amount that validation and commit will use: the working amount
    /// coerced to a number, zero when it does not parse.
    pub fn resolved_amount(&self) -> Decimal {
        parse_decimal(&self.amount).unwrap_or(Decimal::ZERO)
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Select a tax type. Only members of the draft's taxonomy are
    /// accepted; returns whether the selection was applied.
    ///
    /// An actual change clears `regimen` (the catalog is type-scoped) and,
    /// when the new type takes no jurisdiction, clears `province_code`.
    pub fn set_tax_type(&mut self, code: TaxCode) -> bool {
        if !self.taxonomy.contains(&code) {
            return false;
        }
        if code == self.tax_type {
            return true;
        }
        if !self.taxonomy.requires_province(&code) {
            self.province_code.clear();
        }
        self.regimen.clear();
        self.tax_type = code;
        true
    }

    pub fn set_province_code(&mut self, code: impl Into<String>) {
        self.province_code = code.into();
    }

    pub fn set_regimen(&mut self, regimen: impl Into<String>) {
        self.regimen = regimen.into();
    }

    pub fn set_certificate_number(&mut self, number: impl Into<String>) {
        self.certificate_number = number.into();
    }

    pub fn set_sales_invoice(&mut self, reference: impl Into<String>) {
        self.sales_invoice = reference.into();
    }

    pub fn set_scope(&mut self, scope: Scope) {
        self.scope = scope;
    }

    /// Set the base amount and re-derive the working amount.
    pub fn set_base_amount(&mut self, raw: impl Into<String>) {
        self.base_amount = raw.into();
        self.derive_amount();
    }

    /// Set the percentage and re-derive the working amount.
    pub fn set_percentage(&mut self, raw: impl Into<String>) {
        self.percentage = raw.into();
        self.derive_amount();
    }

    /// Set the amount directly. The manual value stands until
    /// `base_amount` or `percentage` is edited again — derivation is
    /// one-directional and re-triggered only by its two inputs.
    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.amount = raw.into();
    }

    // Overwrites the working amount with round(base * pct / 100, 2) when
    // both inputs resolve to numbers greater than zero. A lone or
    // non-positive input never triggers, so a half-typed pair does not
    // zero the amount under the user.
    fn derive_amount(&mut self) {
        let base = parse_decimal(&self.base_amount);
        let pct = parse_decimal(&self.percentage);
        if let (Some(base), Some(pct)) = (base, pct) {
            if base > Decimal::ZERO && pct > Decimal::ZERO {
                self.amount = format_amount(round_half_up(base * pct / dec!(100), 2));
            }
        }
    }

    /// Check the draft, first failure wins:
    ///
    /// 1. the resolved amount must be positive where the taxonomy enforces
    ///    it (withholding ledger) — [`EntryError::InvalidAmount`];
    /// 2. a province-requiring type without a jurisdiction —
    ///    [`EntryError::MissingJurisdiction`];
    /// 3. a jurisdiction on a type that takes none —
    ///    [`EntryError::UnexpectedJurisdiction`].
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.taxonomy.enforces_positive_amount() && self.resolved_amount() <= Decimal::ZERO {
            return Err(EntryError::InvalidAmount);
        }
        let requires = self.taxonomy.requires_province(&self.tax_type);
        let has_province = !self.province_code.trim().is_empty();
        if requires && !has_province {
            return Err(EntryError::MissingJurisdiction);
        }
        if !requires && has_province {
            return Err(EntryError::UnexpectedJurisdiction);
        }
        Ok(())
    }

    /// Validate and build the immutable entry.
    ///
    /// Numeric strings are coerced to numbers and empty optional fields to
    /// `None`; a regimen outside the current type's catalog degrades to
    /// `None` as well. Ledger-specific fields of the other ledger are not
    /// emitted.
    pub fn entry(&self) -> Result<TaxEntry, EntryError> {
        self.validate()?;
        let withholding = self.taxonomy.kind() == LedgerKind::Withholding;
        let regimen = opt_text(&self.regimen)
            .filter(|r| self.taxonomy.is_valid_regimen(&self.tax_type, r));
        Ok(TaxEntry {
            tax_type: self.tax_type.clone(),
            province_code: opt_text(&self.province_code),
            regimen,
            certificate_number: if withholding {
                opt_text(&self.certificate_number)
            } else {
                None
            },
            base_amount: parse_decimal(&self.base_amount).filter(|d| !d.is_sign_negative()),
            percentage: parse_decimal(&self.percentage).filter(|d| !d.is_sign_negative()),
            amount: self.resolved_amount(),
            sales_invoice: if withholding {
                opt_text(&self.sales_invoice)
            } else {
                None
            },
            scope: if withholding { None } else { Some(self.scope) },
        })
    }

    /// Validate and write the entry into the ledger: append when `target`
    /// is `None`, replace the identified line in edit mode.
    ///
    /// # Panics
    ///
    /// Panics when `target` identifies a line no longer in the ledger —
    /// a programming error in the caller, not a user-facing failure.
    pub fn commit(&self, ledger: &mut Ledger, target: Option<EntryId>) -> Result<EntryId, EntryError> {
        let entry = self.entry()?;
        match target {
            None => Ok(ledger.append(entry)),
            Some(id) => {
                assert!(ledger.replace(id, entry), "edit target is not in the ledger");
                Ok(id)
            }
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn opt_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
