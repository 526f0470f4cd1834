use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dashboards::d100_simorgh_adoption::AdoptionEntry;

/// Pass/fail verdict for one probed cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CellVerdict {
    Pass,
    Fail,
}

/// Outcome of probing one eligible (service, page type, environment) triple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellReport {
    /// Service slug including any variant suffix (`serbian/cyr`)
    pub service: String,
    pub env: String,
    pub page_type: String,
    pub renderer: String,
    pub url: String,

    /// Non-empty statuses joined with `", "`; empty on a clean pass
    pub message: String,

    pub verdict: CellVerdict,
    pub checked_at: DateTime<Utc>,
}

/// Content of one board slot.
///
/// A status cell carries a glyph and, on failure, the joined message as
/// `title`; a renderer cell carries a short label and the probed URL as
/// `href`; a label cell carries text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Slot {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            href: None,
        }
    }

    pub fn with_title(text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: Some(title.into()),
            href: None,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            href: Some(href.into()),
        }
    }
}

/// Full board run response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    pub slots: BTreeMap<String, Slot>,
    pub cells: Vec<CellReport>,
    pub summary: Vec<AdoptionEntry>,
    pub checked_at: DateTime<Utc>,
}
