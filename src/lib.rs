//! # tributo
//!
//! Argentine invoice tax adjustment engine: retenciones (withholdings
//! credited back to the payer) and percepciones (perceptions added to a
//! payable), with jurisdiction-aware validation and per-type summary
//! totals.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. The withholding and perception ledgers share one engine
//! parameterized by an injected [`Taxonomy`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use tributo::{EntryDraft, Ledger, TaxCode, Taxonomy, grand_total, totals_by_type};
//!
//! let taxonomy = Taxonomy::withholding();
//!
//! let mut draft = EntryDraft::new(taxonomy);
//! draft.set_tax_type(TaxCode::IngresosBrutos);
//! draft.set_province_code("902");
//! draft.set_base_amount("1000");
//! draft.set_percentage("3");
//!
//! let mut ledger = Ledger::new();
//! let id = draft.commit(&mut ledger, None).unwrap();
//!
//! assert_eq!(ledger.get(id).unwrap().amount, dec!(30.00));
//! assert_eq!(grand_total(taxonomy, ledger.entries()), dec!(30.00));
//! assert_eq!(totals_by_type(taxonomy, ledger.entries())["IIBB"], dec!(30.00));
//! ```

pub mod core;

// Re-export core types at crate root for convenience
pub use crate::core::*;
