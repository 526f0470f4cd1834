use serde::{Deserialize, Serialize};

use super::category::Category;

/// Page types a service can expose on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageKind {
    #[serde(rename = "liveRadio")]
    LiveRadio,
    #[serde(rename = "MAP")]
    Map,
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "article")]
    Article,
}

impl PageKind {
    /// Wire/element-id code for the page type
    pub fn code(&self) -> &'static str {
        match self {
            PageKind::LiveRadio => "liveRadio",
            PageKind::Map => "MAP",
            PageKind::Home => "home",
            PageKind::Article => "article",
        }
    }

    /// Human-readable label written into the page-type cell
    pub fn display_name(&self) -> &'static str {
        match self {
            PageKind::LiveRadio => "Live Radio",
            PageKind::Map => "Media Article (MAP)",
            PageKind::Home => "Home",
            PageKind::Article => "Article",
        }
    }

    /// Category deciding whether the media prober applies
    pub fn category(&self) -> Category {
        match self {
            PageKind::LiveRadio | PageKind::Map => Category::Media,
            PageKind::Home => Category::Home,
            PageKind::Article => Category::Article,
        }
    }

    pub fn all() -> Vec<PageKind> {
        vec![
            PageKind::LiveRadio,
            PageKind::Map,
            PageKind::Home,
            PageKind::Article,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "liveRadio" => Some(PageKind::LiveRadio),
            "MAP" => Some(PageKind::Map),
            "home" => Some(PageKind::Home),
            "article" => Some(PageKind::Article),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for kind in PageKind::all() {
            assert_eq!(PageKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(PageKind::from_code("liveradio"), None);
    }

    #[test]
    fn test_media_category() {
        assert_eq!(PageKind::LiveRadio.category(), Category::Media);
        assert_eq!(PageKind::Map.category(), Category::Media);
        assert_eq!(PageKind::Home.category(), Category::Home);
        assert_eq!(PageKind::Article.category(), Category::Article);
    }
}
