use serde::{Deserialize, Serialize};

/// Narrowing filter for a board run.
///
/// Mirrors the query string of the hosting page: every present field must
/// match the catalogue entry exactly (case-sensitive) for the cell to be
/// traversed. Values are compared against codes: `pageType` is one of
/// `liveRadio` | `MAP` | `home` | `article`, `category` one of
/// `media` | `home` | `article`, `renderer` one of `Simorgh` | `PAL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(
        default,
        rename = "pageType",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,
}
