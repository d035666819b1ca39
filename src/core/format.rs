//! Display helpers for the summary panel.
//!
//! All of these are total functions: an unmapped jurisdiction or type
//! falls back to echoing the raw code, so the summary stays renderable
//! even over partially-migrated data.

use rust_decimal::Decimal;

use super::aggregate::{OTROS_BUCKET, totals_by_type};
use super::taxonomy::Taxonomy;
use super::types::{TaxCode, TaxEntry};

/// Jurisdiction code → province name, falling back to the raw code.
pub fn province_display<'a>(taxonomy: &Taxonomy, code: &'a str) -> &'a str {
    taxonomy.province_name(code).unwrap_or(code)
}

/// Tax type → display label, falling back to the raw code.
pub fn type_label<'a>(taxonomy: &Taxonomy, code: &'a TaxCode) -> &'a str {
    match taxonomy.spec_of(code) {
        Some(spec) => spec.label,
        None => code.code(),
    }
}

/// Label for one ledger line: the type label, suffixed with the
/// jurisdiction name when the entry carries one.
pub fn entry_label(taxonomy: &Taxonomy, entry: &TaxEntry) -> String {
    let label = type_label(taxonomy, &entry.tax_type);
    match &entry.province_code {
        Some(code) => format!("{} ({})", label, province_display(taxonomy, code)),
        None => label.to_string(),
    }
}

/// Fixed two-decimal rendering, half-up.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_half_up(amount, 2))
}

/// Per-type summary lines as `(label, formatted total)` pairs, in bucket
/// order. The grand total is rendered separately by the consumer.
pub fn summary_lines<'a, I>(taxonomy: &Taxonomy, entries: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = &'a TaxEntry>,
{
    totals_by_type(taxonomy, entries)
        .into_iter()
        .map(|(bucket, total)| (bucket_label(taxonomy, bucket).to_string(), format_amount(total)))
        .collect()
}

fn bucket_label(taxonomy: &Taxonomy, bucket: &'static str) -> &'static str {
    if bucket == OTROS_BUCKET {
        return "Otros";
    }
    taxonomy
        .types()
        .iter()
        .find(|spec| spec.code.static_code() == Some(bucket))
        .map_or(bucket, |spec| spec.label)
}

/// Round to `dp` decimal places, half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
