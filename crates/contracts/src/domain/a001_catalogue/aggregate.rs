use serde::{Deserialize, Serialize};

use crate::enums::{PageKind, Renderer};

// ============================================================================
// Catalogue aggregate
// ============================================================================

/// One service edition of the publishing platform.
///
/// `(id, variant)` is the composite identity: two services may share a base
/// id and differ only by variant (script editions such as `serbian/cyr` and
/// `serbian/lat`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,

    /// Script/locale variant disambiguating sub-editions of one base id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    pub page_types: Vec<PageType>,
}

impl Service {
    /// URL path segment and element-id prefix: `serbian/cyr`, `hausa`, ...
    pub fn slug(&self) -> String {
        match &self.variant {
            Some(variant) => format!("{}/{}", self.id, variant),
            None => self.id.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageType {
    pub kind: PageKind,
    pub environments: Vec<Environment>,
}

/// One deployment environment of a page type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// Environment tag: `test` | `stage` | `live`, possibly locale-qualified
    /// (`test_dari`)
    pub env: String,

    pub renderer: Renderer,

    /// Relative path under the service root; may be empty
    pub path: String,
}

impl Environment {
    /// The portion of the tag preceding any locale qualifier
    pub fn base_env(&self) -> &str {
        self.env.split('_').next().unwrap_or(&self.env)
    }

    pub fn is_live(&self) -> bool {
        self.base_env() == "live"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str, variant: Option<&str>) -> Service {
        Service {
            id: id.to_string(),
            variant: variant.map(|v| v.to_string()),
            page_types: vec![],
        }
    }

    #[test]
    fn test_slug_composition() {
        assert_eq!(service("hausa", None).slug(), "hausa");
        assert_eq!(service("serbian", Some("cyr")).slug(), "serbian/cyr");
    }

    #[test]
    fn test_locale_qualified_env() {
        let env = Environment {
            env: "test_dari".to_string(),
            renderer: Renderer::Simorgh,
            path: String::new(),
        };
        assert_eq!(env.base_env(), "test");
        assert!(!env.is_live());

        let live = Environment {
            env: "live_dari".to_string(),
            renderer: Renderer::Simorgh,
            path: String::new(),
        };
        assert!(live.is_live());
    }
}
