use serde::{Deserialize, Serialize};

/// Page-type categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Media,
    Home,
    Article,
}

impl Category {
    pub fn code(&self) -> &'static str {
        match self {
            Category::Media => "media",
            Category::Home => "home",
            Category::Article => "article",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "media" => Some(Category::Media),
            "home" => Some(Category::Home),
            "article" => Some(Category::Article),
            _ => None,
        }
    }
}
