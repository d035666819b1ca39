//! Argentine jurisdiction code tables.
//!
//! Exactly 24 jurisdictions exist system-wide (23 provinces plus the
//! capital district), under two encodings: AFIP/Convenio Multilateral
//! numeric codes (`"901"`–`"924"`, withholding ledger) and ISO 3166-2
//! codes (`"AR-A"`–`"AR-Z"`, perception ledger). Both tables are closed
//! and never user-editable.

/// Resolve an AFIP jurisdiction code to its province name.
pub fn afip_province_name(code: &str) -> Option<&'static str> {
    lookup(AFIP_JURISDICTIONS, code)
}

/// Resolve an ISO 3166-2:AR code to its province name.
pub fn iso_province_name(code: &str) -> Option<&'static str> {
    lookup(ISO_JURISDICTIONS, code)
}

pub(crate) fn lookup(
    table: &'static [(&'static str, &'static str)],
    code: &str,
) -> Option<&'static str> {
    table
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| table[i].1)
}

/// AFIP/Convenio Multilateral jurisdiction codes. Sorted for binary search.
pub(crate) static AFIP_JURISDICTIONS: &[(&str, &str)] = &[
    ("901", "Ciudad Autónoma de Buenos Aires"),
    ("902", "Buenos Aires"),
    ("903", "Catamarca"),
    ("904", "Córdoba"),
    ("905", "Corrientes"),
    ("906", "Chaco"),
    ("907", "Chubut"),
    ("908", "Entre Ríos"),
    ("909", "Formosa"),
    ("910", "Jujuy"),
    ("911", "La Pampa"),
    ("912", "La Rioja"),
    ("913", "Mendoza"),
    ("914", "Misiones"),
    ("915", "Neuquén"),
    ("916", "Río Negro"),
    ("917", "Salta"),
    ("918", "San Juan"),
    ("919", "San Luis"),
    ("920", "Santa Cruz"),
    ("921", "Santa Fe"),
    ("922", "Santiago del Estero"),
    ("923", "Tierra del Fuego"),
    ("924", "Tucumán"),
];

/// ISO 3166-2:AR subdivision codes. Sorted for binary search.
pub(crate) static ISO_JURISDICTIONS: &[(&str, &str)] = &[
    ("AR-A", "Salta"),
    ("AR-B", "Buenos Aires"),
    ("AR-C", "Ciudad Autónoma de Buenos Aires"),
    ("AR-D", "San Luis"),
    ("AR-E", "Entre Ríos"),
    ("AR-F", "La Rioja"),
    ("AR-G", "Santiago del Estero"),
    ("AR-H", "Chaco"),
    ("AR-J", "San Juan"),
    ("AR-K", "Catamarca"),
    ("AR-L", "La Pampa"),
    ("AR-M", "Mendoza"),
    ("AR-N", "Misiones"),
    ("AR-P", "Formosa"),
    ("AR-Q", "Neuquén"),
    ("AR-R", "Río Negro"),
    ("AR-S", "Santa Fe"),
    ("AR-T", "Tucumán"),
    ("AR-U", "Chubut"),
    ("AR-V", "Tierra del Fuego"),
    ("AR-W", "Corrientes"),
    ("AR-X", "Córdoba"),
    ("AR-Y", "Jujuy"),
    ("AR-Z", "Santa Cruz"),
];
