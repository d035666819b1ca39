//! Read-only summary figures over a ledger.
//!
//! Both functions are pure and recomputed on every call: same entries in,
//! same totals out, in any order. The owning document shows them in the
//! financial summary next to subtotal, discount, and tax lines.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::taxonomy::Taxonomy;
use super::types::{TaxCode, TaxEntry};

/// Catch-all bucket for entries whose type is not in the ledger's
/// taxonomy (partially-migrated data).
pub const OTROS_BUCKET: &str = "OTROS";

/// Sum amounts grouped by tax type.
///
/// Keys are canonical type codes; unrecognized types land in
/// [`OTROS_BUCKET`]. The key set is exactly the buckets present — no
/// zero-valued placeholders for absent types. The perception taxonomy
/// sums absolute values, tolerating sign conventions from upstream data.
pub fn totals_by_type<'a, I>(taxonomy: &Taxonomy, entries: I) -> BTreeMap<&'static str, Decimal>
where
    I: IntoIterator<Item = &'a TaxEntry>,
{
    let mut totals = BTreeMap::new();
    for entry in entries {
        *totals
            .entry(bucket_of(taxonomy, &entry.tax_type))
            .or_insert(Decimal::ZERO) += aggregate_amount(taxonomy, entry);
    }
    totals
}

/// Sum over all entries; always equal to the sum of
/// [`totals_by_type`]'s values for the same entries.
pub fn grand_total<'a, I>(taxonomy: &Taxonomy, entries: I) -> Decimal
where
    I: IntoIterator<Item = &'a TaxEntry>,
{
    entries
        .into_iter()
        .map(|entry| aggregate_amount(taxonomy, entry))
        .sum()
}

pub(crate) fn bucket_of(taxonomy: &Taxonomy, code: &TaxCode) -> &'static str {
    if taxonomy.contains(code) {
        code.static_code().unwrap_or(OTROS_BUCKET)
    } else {
        OTROS_BUCKET
    }
}

fn aggregate_amount(taxonomy: &Taxonomy, entry: &TaxEntry) -> Decimal {
    if taxonomy.aggregates_absolute() {
        entry.amount.abs()
    } else {
        entry.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(tax_type: TaxCode, amount: Decimal) -> TaxEntry {
        TaxEntry {
            tax_type,
            province_code: None,
            regimen: None,
            certificate_number: None,
            base_amount: None,
            percentage: None,
            amount,
            sales_invoice: None,
            scope: None,
        }
    }

    #[test]
    fn groups_by_type_without_placeholders() {
        let entries = [
            entry(TaxCode::Iva, dec!(100)),
            entry(TaxCode::Iva, dec!(50)),
            entry(TaxCode::Ganancias, dec!(25)),
        ];
        let totals = totals_by_type(Taxonomy::withholding(), &entries);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["IVA"], dec!(150));
        assert_eq!(totals["GANANCIAS"], dec!(25));
        assert!(!totals.contains_key("IIBB"));
        assert_eq!(grand_total(Taxonomy::withholding(), &entries), dec!(175));
    }

    #[test]
    fn unrecognized_types_fall_into_otros() {
        let entries = [
            entry(TaxCode::Other("SELLOS".into()), dec!(10)),
            // SUSS is not in the perception taxonomy
            entry(TaxCode::Suss, dec!(5)),
            entry(TaxCode::Iva, dec!(1)),
        ];
        let totals = totals_by_type(Taxonomy::perception(), &entries);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[OTROS_BUCKET], dec!(15));
        assert_eq!(totals["IVA"], dec!(1));
    }

    #[test]
    fn perception_sums_absolute_values() {
        let entries = [
            entry(TaxCode::Iva, dec!(-100)),
            entry(TaxCode::Iva, dec!(40)),
        ];
        let totals = totals_by_type(Taxonomy::perception(), &entries);
        assert_eq!(totals["IVA"], dec!(140));
        assert_eq!(grand_total(Taxonomy::perception(), &entries), dec!(140));
    }

    #[test]
    fn withholding_sums_as_is() {
        let entries = [entry(TaxCode::Iva, dec!(100)), entry(TaxCode::Iva, dec!(40))];
        assert_eq!(grand_total(Taxonomy::withholding(), &entries), dec!(140));
    }

    #[test]
    fn empty_ledger_aggregates_to_nothing() {
        let totals = totals_by_type(Taxonomy::withholding(), []);
        assert!(totals.is_empty());
        assert_eq!(grand_total(Taxonomy::withholding(), []), Decimal::ZERO);
    }

    #[test]
    fn order_independent() {
        let mut entries = vec![
            entry(TaxCode::Iva, dec!(100)),
            entry(TaxCode::Ganancias, dec!(25)),
            entry(TaxCode::Iva, dec!(50)),
        ];
        let forward = totals_by_type(Taxonomy::withholding(), &entries);
        entries.reverse();
        let backward = totals_by_type(Taxonomy::withholding(), &entries);
        assert_eq!(forward, backward);
    }
}
