use serde::{Deserialize, Serialize};

/// Rendering backends a catalogue cell may be served by.
///
/// `NotApplicable` and `None` are classification placeholders carried in
/// the catalogue so a cell can say "do not probe me"; only `Simorgh` and
/// `Pal` environments are ever fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Renderer {
    Simorgh,
    #[serde(rename = "PAL")]
    Pal,
    #[serde(rename = "N/A")]
    NotApplicable,
    #[serde(rename = "")]
    None,
}

impl Renderer {
    pub fn code(&self) -> &'static str {
        match self {
            Renderer::Simorgh => "Simorgh",
            Renderer::Pal => "PAL",
            Renderer::NotApplicable => "N/A",
            Renderer::None => "",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Simorgh" => Some(Renderer::Simorgh),
            "PAL" => Some(Renderer::Pal),
            "N/A" => Some(Renderer::NotApplicable),
            "" => Some(Renderer::None),
            _ => None,
        }
    }

    /// Whether a cell carrying this label is eligible for probing
    pub fn is_probeable(&self) -> bool {
        matches!(self, Renderer::Simorgh | Renderer::Pal)
    }

    /// Label used for the renderer-cell hyperlink: first three characters
    /// of the code, upper-cased
    pub fn link_label(&self) -> String {
        self.code().chars().take(3).collect::<String>().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probeable() {
        assert!(Renderer::Simorgh.is_probeable());
        assert!(Renderer::Pal.is_probeable());
        assert!(!Renderer::NotApplicable.is_probeable());
        assert!(!Renderer::None.is_probeable());
    }

    #[test]
    fn test_link_label() {
        assert_eq!(Renderer::Simorgh.link_label(), "SIM");
        assert_eq!(Renderer::Pal.link_label(), "PAL");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Renderer::from_code("Simorgh"), Some(Renderer::Simorgh));
        assert_eq!(Renderer::from_code("N/A"), Some(Renderer::NotApplicable));
        assert_eq!(Renderer::from_code(""), Some(Renderer::None));
        assert_eq!(Renderer::from_code("simorgh"), None);
    }
}
