//! Static catalogue of World Service editions.
//!
//! Built once at startup and handed to the probe pipeline as a read-only
//! reference; nothing mutates it afterwards. Renderer labels `N/A` and the
//! empty string mark cells that exist on the board but must not be probed.

use contracts::domain::a001_catalogue::{Environment, PageType, Service};
use contracts::enums::{PageKind, Renderer};
use once_cell::sync::Lazy;

use Renderer::{None as Off, NotApplicable as Na, Pal, Simorgh};

fn environment(env: &str, renderer: Renderer, path: &str) -> Environment {
    Environment {
        env: env.to_string(),
        renderer,
        path: path.to_string(),
    }
}

/// Page type with the standard test/stage/live environment triple sharing
/// one relative path
fn pt(kind: PageKind, path: &str, test: Renderer, stage: Renderer, live: Renderer) -> PageType {
    PageType {
        kind,
        environments: vec![
            environment("test", test, path),
            environment("stage", stage, path),
            environment("live", live, path),
        ],
    }
}

fn service(id: &str, page_types: Vec<PageType>) -> Service {
    Service {
        id: id.to_string(),
        variant: None,
        page_types,
    }
}

fn variant(id: &str, variant: &str, page_types: Vec<PageType>) -> Service {
    Service {
        id: id.to_string(),
        variant: Some(variant.to_string()),
        page_types,
    }
}

fn radio(id: &str) -> PageType {
    pt(
        PageKind::LiveRadio,
        &format!("bbc_{}_radio/liveradio", id),
        Simorgh,
        Na,
        Simorgh,
    )
}

pub fn catalogue() -> &'static [Service] {
    &CATALOGUE
}

pub fn probeable_cell_count(catalogue: &[Service]) -> usize {
    catalogue
        .iter()
        .flat_map(|s| &s.page_types)
        .flat_map(|p| &p.environments)
        .filter(|e| e.renderer.is_probeable())
        .count()
}

static CATALOGUE: Lazy<Vec<Service>> = Lazy::new(build);

fn build() -> Vec<Service> {
    vec![
        service(
            "afaanoromoo",
            vec![
                radio("afaanoromoo"),
                pt(PageKind::Map, "media-23142225", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c3nkj4x5y0ro", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "afrique",
            vec![
                pt(PageKind::Map, "media-23202198", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c4vlgnprkgvo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "amharic",
            vec![
                radio("amharic"),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/czqverekrldo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "arabic",
            vec![
                radio("arabic"),
                pt(PageKind::Map, "media-23761207", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Pal, Pal),
                pt(PageKind::Article, "articles/c8j91j2ljppo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "azeri",
            vec![
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c5k08pqnzexo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "bengali",
            vec![
                radio("bangla"),
                pt(PageKind::Map, "media-23138906", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c6p3yp5zzmeo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "burmese",
            vec![
                radio("burmese"),
                pt(PageKind::Map, "media-23069771", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c41px3vd4nxo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "gahuza",
            vec![
                radio("gahuza"),
                pt(PageKind::Map, "media-23110128", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cey23zx8wx8o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "gujarati",
            vec![
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c2rnxj48elwo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "hausa",
            vec![
                radio("hausa"),
                pt(PageKind::Map, "media-23241899", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Simorgh, Na, Simorgh),
                pt(PageKind::Article, "articles/c41rj1z261zo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "hindi",
            vec![
                radio("hindi"),
                pt(PageKind::Map, "media-23099103", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Pal, Pal),
                pt(PageKind::Article, "articles/cv35rqe3n5wo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "igbo",
            vec![
                pt(PageKind::Home, "", Simorgh, Na, Simorgh),
                pt(PageKind::Article, "articles/ckjvlyd4qvxo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "indonesia",
            vec![
                pt(PageKind::Map, "media-23075845", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c0q2zq8pzvzo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "japanese",
            vec![
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c5jjedqgyl5o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "korean",
            vec![
                radio("korean"),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cpv9kv2yzkpo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "kyrgyz",
            vec![
                radio("kyrgyz"),
                pt(PageKind::Home, "", Simorgh, Na, Simorgh),
                pt(PageKind::Article, "articles/c414v42gy75o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "marathi",
            vec![
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cp47g4myxz7o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "mundo",
            vec![
                pt(PageKind::Map, "media-23572881", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Pal, Pal),
                pt(PageKind::Article, "articles/ce42wzqr2mko", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "nepali",
            vec![
                radio("nepali"),
                pt(PageKind::Map, "media-23153314", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cl90j9m3mn6o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "pashto",
            vec![
                radio("pashto"),
                pt(PageKind::Map, "media-23063923", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c70970g2251o", Simorgh, Na, Simorgh),
            ],
        ),
        // Persian carries the Dari sub-edition alongside the base
        // environments; the locale qualifier stays in the tag but the host
        // prefix strips it only for the live comparison.
        service(
            "persian",
            vec![
                PageType {
                    kind: PageKind::LiveRadio,
                    environments: vec![
                        environment("test", Simorgh, "bbc_persian_radio/liveradio"),
                        environment("live", Simorgh, "bbc_persian_radio/liveradio"),
                        environment("test_dari", Simorgh, "bbc_dari_radio/liveradio"),
                        environment("live_dari", Simorgh, "bbc_dari_radio/liveradio"),
                    ],
                },
                pt(PageKind::Map, "media-23231114", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cej3lzd5e0go", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "pidgin",
            vec![
                pt(PageKind::Home, "", Simorgh, Na, Simorgh),
                pt(PageKind::Article, "articles/cwl08rd38l6o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "portuguese",
            vec![
                pt(PageKind::Map, "media-23329262", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cpg5prg95lmo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "punjabi",
            vec![
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c0l79lr39qyo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "russian",
            vec![
                pt(PageKind::Map, "media-23227387", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Pal, Pal),
                pt(PageKind::Article, "articles/ck7pz7re3zgo", Simorgh, Na, Simorgh),
            ],
        ),
        variant(
            "serbian",
            "cyr",
            vec![
                pt(PageKind::Map, "srbija-23202567", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Simorgh, Na, Simorgh),
                pt(PageKind::Article, "articles/c805k05kr73o", Simorgh, Na, Simorgh),
            ],
        ),
        variant(
            "serbian",
            "lat",
            vec![
                pt(PageKind::Map, "srbija-23202567", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Simorgh, Na, Simorgh),
                pt(PageKind::Article, "articles/c805k05kr73o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "sinhala",
            vec![
                radio("sinhala"),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c45w255zlexo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "somali",
            vec![
                radio("somali"),
                pt(PageKind::Map, "media-23170864", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c8z79d4mzrlo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "swahili",
            vec![
                radio("swahili"),
                pt(PageKind::Map, "media-23268611", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/czjqge2jwn2o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "tamil",
            vec![
                radio("tamil"),
                pt(PageKind::Map, "media-23169464", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cvr4752gr12o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "telugu",
            vec![
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cq0y0lk44y8o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "thai",
            vec![
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c442rl3md0eo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "tigrinya",
            vec![
                radio("tigrinya"),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c3vq38ve33vo", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "turkce",
            vec![
                pt(PageKind::Map, "media-23076288", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cpgzpzjl3pdo", Simorgh, Na, Simorgh),
            ],
        ),
        variant(
            "ukchina",
            "simp",
            vec![
                pt(PageKind::Home, "", Off, Off, Pal),
                pt(PageKind::Article, "articles/c0e8weny66ko", Simorgh, Na, Simorgh),
            ],
        ),
        variant(
            "ukchina",
            "trad",
            vec![
                pt(PageKind::Home, "", Off, Off, Pal),
                pt(PageKind::Article, "articles/c0e8weny66ko", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "ukrainian",
            vec![
                pt(PageKind::Map, "media-23279018", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c8zv0eed9gko", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "urdu",
            vec![
                radio("urdu"),
                pt(PageKind::Map, "media-23268708", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cwgq7rzv172o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "uzbek",
            vec![
                radio("uzbek"),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/cxj3rjxm6r0o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "vietnamese",
            vec![
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c3y59g5zm19o", Simorgh, Na, Simorgh),
            ],
        ),
        service(
            "yoruba",
            vec![
                pt(PageKind::Home, "", Simorgh, Na, Simorgh),
                pt(PageKind::Article, "articles/clw06m0nj8qo", Simorgh, Na, Simorgh),
            ],
        ),
        variant(
            "zhongwen",
            "simp",
            vec![
                pt(PageKind::Map, "media-23283975", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c3xd4xg3rm9o", Simorgh, Na, Simorgh),
            ],
        ),
        variant(
            "zhongwen",
            "trad",
            vec![
                pt(PageKind::Map, "media-23283975", Simorgh, Na, Simorgh),
                pt(PageKind::Home, "", Pal, Na, Pal),
                pt(PageKind::Article, "articles/c3xd4xg3rm9o", Simorgh, Na, Simorgh),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let mut seen = HashSet::new();
        for service in catalogue() {
            assert!(seen.insert(service.slug()), "duplicate slug {}", service.slug());
        }
    }

    #[test]
    fn test_variant_siblings_share_base_id() {
        let serbian: Vec<_> = catalogue().iter().filter(|s| s.id == "serbian").collect();
        assert_eq!(serbian.len(), 2);
        assert_ne!(serbian[0].slug(), serbian[1].slug());
    }

    #[test]
    fn test_placeholder_renderers_are_not_probeable() {
        for service in catalogue() {
            for page_type in &service.page_types {
                for environment in &page_type.environments {
                    if matches!(environment.renderer, Renderer::NotApplicable | Renderer::None) {
                        assert!(!environment.renderer.is_probeable());
                    }
                }
            }
        }
    }

    #[test]
    fn test_has_probeable_cells() {
        assert!(probeable_cell_count(catalogue()) > 100);
    }
}
