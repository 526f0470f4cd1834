use serde::{Deserialize, Serialize};

/// Simorgh adoption for one page type across the live environments.
///
/// `percent` is `round(on_simorgh / total * 100)`. The division is
/// deliberately unguarded: a page type absent from the catalogue yields
/// `NaN`, which serde_json serializes as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoptionEntry {
    /// Page-type code: `liveRadio` | `MAP` | `home` | `article`
    pub page_type: String,

    /// Distinct services (deduplicated by base id, first occurrence wins)
    /// offering this page type
    pub total: usize,

    /// Of those, services whose live environment is rendered by Simorgh
    pub on_simorgh: usize,

    pub percent: f64,
}
