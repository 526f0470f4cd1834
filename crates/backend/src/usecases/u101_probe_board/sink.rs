//! Key-addressed output surface of the board.
//!
//! Slot identifiers are registered up front from the catalogue; a write to
//! an identifier that was never registered is a silent no-op, mirroring a
//! document with no node by that id.

use std::collections::BTreeMap;
use std::sync::Mutex;

use contracts::domain::a001_catalogue::Service;
use contracts::enums::PageKind;
use contracts::usecases::u101_probe_board::Slot;

/// `{slug}_{env}_{kind}_{suffix}`: status and renderer cells
pub fn element_id(slug: &str, env: &str, kind: PageKind, suffix: &str) -> String {
    format!("{}_{}_{}_{}", slug, env, kind.code(), suffix)
}

/// `{slug}_{kind}`: page-type label cell
pub fn label_id(slug: &str, kind: PageKind) -> String {
    format!("{}_{}", slug, kind.code())
}

/// `Simorgh_{kind}`: adoption summary bar
pub fn summary_id(kind: PageKind) -> String {
    format!("Simorgh_{}", kind.code())
}

pub struct BoardSink {
    slots: Mutex<BTreeMap<String, Option<Slot>>>,
}

impl BoardSink {
    /// Register every slot the catalogue can address, all initially empty
    pub fn for_catalogue(catalogue: &[Service]) -> Self {
        let mut slots = BTreeMap::new();
        for service in catalogue {
            let slug = service.slug();
            for page_type in &service.page_types {
                slots.insert(label_id(&slug, page_type.kind), None);
                for environment in &page_type.environments {
                    slots.insert(
                        element_id(&slug, &environment.env, page_type.kind, "status"),
                        None,
                    );
                    slots.insert(
                        element_id(&slug, &environment.env, page_type.kind, "renderer"),
                        None,
                    );
                }
            }
        }
        for kind in PageKind::all() {
            slots.insert(summary_id(kind), None);
        }
        Self {
            slots: Mutex::new(slots),
        }
    }

    /// Write a slot; unknown identifiers are silently skipped
    pub fn write(&self, id: &str, slot: Slot) {
        if let Ok(mut slots) = self.slots.lock() {
            if let Some(entry) = slots.get_mut(id) {
                *entry = Some(slot);
            }
        }
    }

    /// All slots written so far, ordered by identifier
    pub fn snapshot(&self) -> BTreeMap<String, Slot> {
        match self.slots.lock() {
            Ok(slots) => slots
                .iter()
                .filter_map(|(id, slot)| slot.clone().map(|s| (id.clone(), s)))
                .collect(),
            Err(_) => BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_catalogue::{Environment, PageType};
    use contracts::enums::Renderer;

    fn one_cell_catalogue() -> Vec<Service> {
        vec![Service {
            id: "serbian".to_string(),
            variant: Some("cyr".to_string()),
            page_types: vec![PageType {
                kind: PageKind::Map,
                environments: vec![Environment {
                    env: "live".to_string(),
                    renderer: Renderer::Simorgh,
                    path: "srbija-23202567".to_string(),
                }],
            }],
        }]
    }

    #[test]
    fn test_element_id_scheme() {
        assert_eq!(
            element_id("serbian/cyr", "live", PageKind::Map, "status"),
            "serbian/cyr_live_MAP_status"
        );
        assert_eq!(label_id("serbian/cyr", PageKind::Map), "serbian/cyr_MAP");
        assert_eq!(summary_id(PageKind::Home), "Simorgh_home");
    }

    #[test]
    fn test_write_to_registered_slot() {
        let sink = BoardSink::for_catalogue(&one_cell_catalogue());
        sink.write("serbian/cyr_live_MAP_status", Slot::text("✓"));

        let snapshot = sink.snapshot();
        assert_eq!(snapshot.get("serbian/cyr_live_MAP_status"), Some(&Slot::text("✓")));
    }

    #[test]
    fn test_unknown_identifier_is_a_no_op() {
        let sink = BoardSink::for_catalogue(&one_cell_catalogue());
        sink.write("mundo_live_home_status", Slot::text("✓"));
        assert!(sink.snapshot().is_empty());
    }

    #[test]
    fn test_unwritten_slots_are_not_reported() {
        let sink = BoardSink::for_catalogue(&one_cell_catalogue());
        assert!(sink.snapshot().is_empty());
        sink.write("serbian/cyr_MAP", Slot::text("Media Article (MAP)"));
        assert_eq!(sink.snapshot().len(), 1);
    }
}
