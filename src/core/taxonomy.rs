//! Ledger taxonomies — the static configuration both engines run on.
//!
//! A [`Taxonomy`] describes one ledger's closed set of tax types, their
//! jurisdiction requirements and regimen catalogs, and the jurisdiction
//! encoding that ledger uses. It is injected into [`EntryDraft`] and the
//! aggregator rather than read from globals, so the withholding and
//! perception ledgers share one engine parameterized by configuration.
//!
//! [`EntryDraft`]: super::EntryDraft

use super::jurisdictions;
use super::types::TaxCode;

/// Which ledger a taxonomy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKind {
    /// Entries that reduce an amount receivable (retenciones).
    Withholding,
    /// Entries that increase an amount payable (percepciones).
    Perception,
}

/// A legal sub-regime of a tax type, governing rate or procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regimen {
    pub code: &'static str,
    pub label: &'static str,
}

/// One member of a ledger's tax type set.
#[derive(Debug)]
pub struct TaxTypeSpec {
    /// The type itself.
    pub code: TaxCode,
    /// Display label.
    pub label: &'static str,
    /// Whether entries of this type must carry a jurisdiction.
    pub requires_province: bool,
    /// Sub-regimes valid for this type, in display order.
    pub regimenes: &'static [Regimen],
}

/// Immutable configuration for one ledger: member types, regimen catalogs,
/// and jurisdiction encoding. Obtain the two standard instances via
/// [`Taxonomy::withholding`] and [`Taxonomy::perception`].
#[derive(Debug)]
pub struct Taxonomy {
    kind: LedgerKind,
    types: &'static [TaxTypeSpec],
    jurisdictions: &'static [(&'static str, &'static str)],
}

impl Taxonomy {
    /// The withholding ledger: IIBB, IVA, Ganancias, SUSS; AFIP
    /// jurisdiction codes; committed amounts must be positive.
    pub fn withholding() -> &'static Taxonomy {
        &WITHHOLDING
    }

    /// The perception ledger: IVA, IIBB, Ganancias; ISO 3166-2:AR
    /// jurisdiction codes; totals aggregate by absolute value.
    pub fn perception() -> &'static Taxonomy {
        &PERCEPTION
    }

    pub fn kind(&self) -> LedgerKind {
        self.kind
    }

    /// Member types in display order.
    pub fn types(&self) -> &'static [TaxTypeSpec] {
        self.types
    }

    /// The first member, used as the form's initial selection.
    pub fn default_type(&self) -> &'static TaxCode {
        &self.types[0].code
    }

    /// Spec of a member type, `None` when the code is not in this ledger's
    /// set.
    pub fn spec_of(&self, code: &TaxCode) -> Option<&'static TaxTypeSpec> {
        self.types.iter().find(|spec| spec.code == *code)
    }

    pub fn contains(&self, code: &TaxCode) -> bool {
        self.spec_of(code).is_some()
    }

    /// Whether entries of `code` must carry a jurisdiction. Non-members
    /// never require one.
    pub fn requires_province(&self, code: &TaxCode) -> bool {
        self.spec_of(code).is_some_and(|spec| spec.requires_province)
    }

    /// Regimen catalog of a member type (empty for non-members).
    pub fn regimenes(&self, code: &TaxCode) -> &'static [Regimen] {
        self.spec_of(code).map_or(&[], |spec| spec.regimenes)
    }

    /// Whether `regimen` belongs to `code`'s catalog.
    pub fn is_valid_regimen(&self, code: &TaxCode, regimen: &str) -> bool {
        self.regimenes(code).iter().any(|r| r.code == regimen)
    }

    /// Resolve a jurisdiction code in this ledger's encoding.
    pub fn province_name(&self, code: &str) -> Option<&'static str> {
        jurisdictions::lookup(self.jurisdictions, code)
    }

    /// The jurisdiction table of this ledger's encoding, in code order.
    pub fn jurisdictions(&self) -> &'static [(&'static str, &'static str)] {
        self.jurisdictions
    }

    /// Whether a committed entry's amount must be strictly positive.
    /// A hard invariant of the withholding ledger; perception totals may
    /// pass through zero while a document is being assembled.
    pub fn enforces_positive_amount(&self) -> bool {
        self.kind == LedgerKind::Withholding
    }

    /// Whether aggregation sums absolute values. The perception ledger
    /// tolerates sign conventions from upstream data; withholding amounts
    /// are positive by construction.
    pub fn aggregates_absolute(&self) -> bool {
        self.kind == LedgerKind::Perception
    }
}

static IVA_REGIMENES: &[Regimen] = &[
    Regimen { code: "RG2126", label: "RG 2126" },
    Regimen { code: "RG4815", label: "RG 4815" },
    Regimen { code: "RG830", label: "RG 830" },
];

static GANANCIAS_REGIMENES: &[Regimen] = &[Regimen { code: "RG830", label: "RG 830 — régimen general" }];

static IIBB_REGIMENES: &[Regimen] = &[
    Regimen { code: "LOCAL", label: "Régimen local" },
    Regimen { code: "CM", label: "Convenio Multilateral" },
    Regimen { code: "SIRCREB", label: "SIRCREB" },
];

static SUSS_REGIMENES: &[Regimen] = &[
    Regimen { code: "RG1784", label: "RG 1784 — régimen general" },
    Regimen { code: "RG1556", label: "RG 1556 — construcción" },
    Regimen { code: "RG2682", label: "RG 2682 — limpieza" },
];

static WITHHOLDING: Taxonomy = Taxonomy {
    kind: LedgerKind::Withholding,
    types: &[
        TaxTypeSpec {
            code: TaxCode::IngresosBrutos,
            label: "Ingresos Brutos",
            requires_province: true,
            regimenes: IIBB_REGIMENES,
        },
        TaxTypeSpec {
            code: TaxCode::Iva,
            label: "IVA",
            requires_province: false,
            regimenes: IVA_REGIMENES,
        },
        TaxTypeSpec {
            code: TaxCode::Ganancias,
            label: "Ganancias",
            requires_province: false,
            regimenes: GANANCIAS_REGIMENES,
        },
        TaxTypeSpec {
            code: TaxCode::Suss,
            label: "SUSS",
            requires_province: false,
            regimenes: SUSS_REGIMENES,
        },
    ],
    jurisdictions: jurisdictions::AFIP_JURISDICTIONS,
};

static PERCEPTION: Taxonomy = Taxonomy {
    kind: LedgerKind::Perception,
    types: &[
        TaxTypeSpec {
            code: TaxCode::Iva,
            label: "IVA",
            requires_province: false,
            regimenes: IVA_REGIMENES,
        },
        TaxTypeSpec {
            code: TaxCode::IngresosBrutos,
            label: "Ingresos Brutos",
            requires_province: true,
            regimenes: IIBB_REGIMENES,
        },
        TaxTypeSpec {
            code: TaxCode::Ganancias,
            label: "Ganancias",
            requires_province: false,
            regimenes: GANANCIAS_REGIMENES,
        },
    ],
    jurisdictions: jurisdictions::ISO_JURISDICTIONS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn withholding_member_set() {
        let t = Taxonomy::withholding();
        assert_eq!(t.kind(), LedgerKind::Withholding);
        assert_eq!(t.types().len(), 4);
        assert!(t.contains(&TaxCode::IngresosBrutos));
        assert!(t.contains(&TaxCode::Iva));
        assert!(t.contains(&TaxCode::Ganancias));
        assert!(t.contains(&TaxCode::Suss));
    }

    #[test]
    fn perception_member_set() {
        let t = Taxonomy::perception();
        assert_eq!(t.kind(), LedgerKind::Perception);
        assert_eq!(t.types().len(), 3);
        assert!(t.contains(&TaxCode::Iva));
        assert!(t.contains(&TaxCode::IngresosBrutos));
        assert!(t.contains(&TaxCode::Ganancias));
        assert!(!t.contains(&TaxCode::Suss));
    }

    #[test]
    fn only_iibb_requires_province() {
        for t in [Taxonomy::withholding(), Taxonomy::perception()] {
            for spec in t.types() {
                assert_eq!(
                    spec.requires_province,
                    spec.code == TaxCode::IngresosBrutos,
                    "unexpected province flag for {:?}",
                    spec.code
                );
            }
        }
    }

    #[test]
    fn non_members_require_nothing() {
        let t = Taxonomy::perception();
        assert!(!t.requires_province(&TaxCode::Suss));
        assert!(t.regimenes(&TaxCode::Suss).is_empty());
        assert!(!t.requires_province(&TaxCode::Other("SELLOS".into())));
    }

    #[test]
    fn iva_regimen_catalog() {
        let t = Taxonomy::withholding();
        let codes: Vec<&str> = t.regimenes(&TaxCode::Iva).iter().map(|r| r.code).collect();
        assert_eq!(codes, ["RG2126", "RG4815", "RG830"]);
        assert!(t.is_valid_regimen(&TaxCode::Iva, "RG4815"));
        assert!(!t.is_valid_regimen(&TaxCode::Ganancias, "RG4815"));
    }

    #[test]
    fn jurisdiction_encoding_per_ledger() {
        assert_eq!(Taxonomy::withholding().province_name("904"), Some("Córdoba"));
        assert_eq!(Taxonomy::withholding().province_name("AR-X"), None);
        assert_eq!(Taxonomy::perception().province_name("AR-X"), Some("Córdoba"));
        assert_eq!(Taxonomy::perception().province_name("904"), None);
    }

    #[test]
    fn default_type_is_first_member() {
        assert_eq!(*Taxonomy::withholding().default_type(), TaxCode::IngresosBrutos);
        assert_eq!(*Taxonomy::perception().default_type(), TaxCode::Iva);
    }
}
