use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax type of an adjustment entry.
///
/// The known variants are the closed set used by the Argentine withholding
/// and perception ledgers. `Other` carries any unrecognized code arriving
/// from partially-migrated documents; it is never offered by a
/// [`Taxonomy`](super::Taxonomy) and aggregates under the `"OTROS"` bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaxCode {
    /// IIBB — gross-receipts tax, jurisdiction-dependent.
    IngresosBrutos,
    /// IVA — value-added tax.
    Iva,
    /// Ganancias — income tax.
    Ganancias,
    /// SUSS — social security withholding.
    Suss,
    /// Unrecognized legacy code, preserved verbatim.
    Other(String),
}

impl TaxCode {
    /// Canonical code string.
    pub fn code(&self) -> &str {
        match self {
            Self::IngresosBrutos => "IIBB",
            Self::Iva => "IVA",
            Self::Ganancias => "GANANCIAS",
            Self::Suss => "SUSS",
            Self::Other(code) => code,
        }
    }

    /// Parse from a code string. Unknown codes are preserved as `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "IIBB" => Self::IngresosBrutos,
            "IVA" => Self::Iva,
            "GANANCIAS" => Self::Ganancias,
            "SUSS" => Self::Suss,
            other => Self::Other(other.to_string()),
        }
    }

    /// Canonical code for known variants, `None` for `Other`.
    pub(crate) fn static_code(&self) -> Option<&'static str> {
        match self {
            Self::IngresosBrutos => Some("IIBB"),
            Self::Iva => Some("IVA"),
            Self::Ganancias => Some("GANANCIAS"),
            Self::Suss => Some("SUSS"),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for TaxCode {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<TaxCode> for String {
    fn from(code: TaxCode) -> Self {
        code.code().to_string()
    }
}

/// Scope of a perception entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scope {
    /// Domestic operation.
    #[default]
    Interna,
    /// Customs operation.
    Aduanera,
}

impl Scope {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Interna => "INTERNA",
            Self::Aduanera => "ADUANERA",
        }
    }
}

/// One tax adjustment line attached to an invoice draft — a withholding
/// (money credited back to the payer) or a perception (money added to a
/// payable).
///
/// Entries are built and validated by [`EntryDraft`](super::EntryDraft);
/// the ledger itself performs no validation. Fields are public because the
/// owning document supplies pre-existing entries (deserialized drafts,
/// migrated data) directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxEntry {
    /// Tax type; a taxonomy member for entries committed through the form.
    pub tax_type: TaxCode,
    /// Jurisdiction code. Present iff the tax type requires a province.
    pub province_code: Option<String>,
    /// Legal sub-regime code, scoped to `tax_type`.
    pub regimen: Option<String>,
    /// Withholding certificate number (withholding ledger only).
    pub certificate_number: Option<String>,
    /// Base amount the adjustment was computed from.
    pub base_amount: Option<Decimal>,
    /// Rate applied to the base, as a percentage.
    pub percentage: Option<Decimal>,
    /// Adjustment amount. Strictly positive for committed withholdings.
    pub amount: Decimal,
    /// Opaque reference to an external invoice record (withholding ledger
    /// only). Never existence-checked here.
    pub sales_invoice: Option<String>,
    /// Operation scope (perception ledger only).
    pub scope: Option<Scope>,
}
