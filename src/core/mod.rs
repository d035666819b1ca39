//! Core tax adjustment engine: taxonomies, entry capture and validation,
//! the id-addressed ledger, and summary aggregation.
//!
//! One engine serves both ledgers; the differences between retenciones
//! and percepciones live entirely in the injected [`Taxonomy`].

mod aggregate;
mod draft;
mod error;
mod format;
mod jurisdictions;
mod ledger;
mod taxonomy;
mod types;

pub use aggregate::*;
pub use draft::*;
pub use error::*;
pub use format::*;
pub use jurisdictions::{afip_province_name, iso_province_name};
pub use ledger::*;
pub use taxonomy::*;
pub use types::*;
