// crates/citygeo-core/src/regions.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Two-letter code → full name for US states, DC, and US territories.
static US_STATE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AL", "Alabama"),
        ("AK", "Alaska"),
        ("AZ", "Arizona"),
        ("AR", "Arkansas"),
        ("CA", "California"),
        ("CO", "Colorado"),
        ("CT", "Connecticut"),
        ("DE", "Delaware"),
        ("FL", "Florida"),
        ("GA", "Georgia"),
        ("HI", "Hawaii"),
        ("ID", "Idaho"),
        ("IL", "Illinois"),
        ("IN", "Indiana"),
        ("IA", "Iowa"),
        ("KS", "Kansas"),
        ("KY", "Kentucky"),
        ("LA", "Louisiana"),
        ("ME", "Maine"),
        ("MD", "Maryland"),
        ("MA", "Massachusetts"),
        ("MI", "Michigan"),
        ("MN", "Minnesota"),
        ("MS", "Mississippi"),
        ("MO", "Missouri"),
        ("MT", "Montana"),
        ("NE", "Nebraska"),
        ("NV", "Nevada"),
        ("NH", "New Hampshire"),
        ("NJ", "New Jersey"),
        ("NM", "New Mexico"),
        ("NY", "New York"),
        ("NC", "North Carolina"),
        ("ND", "North Dakota"),
        ("OH", "Ohio"),
        ("OK", "Oklahoma"),
        ("OR", "Oregon"),
        ("PA", "Pennsylvania"),
        ("RI", "Rhode Island"),
        ("SC", "South Carolina"),
        ("SD", "South Dakota"),
        ("TN", "Tennessee"),
        ("TX", "Texas"),
        ("UT", "Utah"),
        ("VT", "Vermont"),
        ("VA", "Virginia"),
        ("WA", "Washington"),
        ("WV", "West Virginia"),
        ("WI", "Wisconsin"),
        ("WY", "Wyoming"),
        ("DC", "District of Columbia"),
        ("PR", "Puerto Rico"),
        ("VI", "Virgin Islands"),
        ("GU", "Guam"),
        ("MP", "Northern Mariana Islands"),
        ("AS", "American Samoa"),
        ("FM", "Federated States of Micronesia"),
        ("MH", "Marshall Islands"),
        ("PW", "Palau"),
    ])
});

/// Resolves a two-letter state/territory code to its full name.
///
/// Unknown codes pass through unchanged. The lookup is case-sensitive
/// and performs no trimming; `"ca"` is not `"CA"`.
///
/// # Examples
///
/// ```rust
/// use citygeo_core::resolve_state_code;
///
/// assert_eq!(resolve_state_code("CA"), "California");
/// assert_eq!(resolve_state_code("ZZ"), "ZZ");
/// ```
pub fn resolve_state_code(code: &str) -> &str {
    US_STATE_NAMES.get(code).copied().unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_codes() {
        assert_eq!(resolve_state_code("CA"), "California");
        assert_eq!(resolve_state_code("DC"), "District of Columbia");
        assert_eq!(resolve_state_code("PW"), "Palau");
    }

    #[test]
    fn unknown_code_passes_through() {
        assert_eq!(resolve_state_code("ZZ"), "ZZ");
        assert_eq!(resolve_state_code(""), "");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(resolve_state_code("ca"), "ca");
        assert_eq!(resolve_state_code(" CA"), " CA");
    }

    #[test]
    fn table_covers_states_dc_and_territories() {
        assert_eq!(US_STATE_NAMES.len(), 59);
    }
}
