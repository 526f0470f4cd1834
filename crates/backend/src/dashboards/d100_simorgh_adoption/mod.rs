//! Dashboard d100: share of services whose live environment is rendered by
//! Simorgh, per page type.
//!
//! Deduplication policy: services are counted once per base id, first
//! occurrence wins: variant siblings (`serbian/lat` after `serbian/cyr`)
//! do not contribute. The division is unguarded: a page type nobody offers
//! yields a `NaN` percentage, rendered as `NaN%`.

use std::collections::HashSet;

use contracts::dashboards::d100_simorgh_adoption::AdoptionEntry;
use contracts::domain::a001_catalogue::Service;
use contracts::enums::{PageKind, Renderer};
use contracts::usecases::u101_probe_board::Slot;

use crate::usecases::u101_probe_board::sink::summary_id;
use crate::usecases::u101_probe_board::BoardSink;

pub fn compute(catalogue: &[Service]) -> Vec<AdoptionEntry> {
    let mut seen: HashSet<&str> = HashSet::new();
    let deduped: Vec<&Service> = catalogue
        .iter()
        .filter(|service| seen.insert(service.id.as_str()))
        .collect();

    PageKind::all()
        .into_iter()
        .map(|kind| {
            let offering: Vec<&&Service> = deduped
                .iter()
                .filter(|service| service.page_types.iter().any(|p| p.kind == kind))
                .collect();

            let total = offering.len();
            let on_simorgh = offering
                .iter()
                .filter(|service| {
                    service
                        .page_types
                        .iter()
                        .find(|p| p.kind == kind)
                        .map(|p| {
                            p.environments
                                .iter()
                                .any(|e| e.is_live() && e.renderer == Renderer::Simorgh)
                        })
                        .unwrap_or(false)
                })
                .count();

            let percent = (on_simorgh as f64 / total as f64 * 100.0).round();

            AdoptionEntry {
                page_type: kind.code().to_string(),
                total,
                on_simorgh,
                percent,
            }
        })
        .collect()
}

/// Project the adoption entries into their fixed summary slots
pub fn render(sink: &BoardSink, entries: &[AdoptionEntry]) {
    for entry in entries {
        if let Some(kind) = PageKind::from_code(&entry.page_type) {
            sink.write(&summary_id(kind), Slot::text(format!("{}%", entry.percent)));
        }
    }
}
