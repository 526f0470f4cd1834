//! Backend classification of fetched markup.
//!
//! The two rendering backends are distinguished solely by the `id`
//! attribute of the document's root element: Simorgh leaves it empty, PAL
//! sets it to `responsive-news`. No other value is meaningful.

use contracts::enums::Renderer;
use scraper::Html;

/// Root-element identifier of the markup.
///
/// Absent markup yields `None`. Present markup always yields a marker:
/// a missing `id` attribute reads as the empty string, matching DOM
/// `documentElement.id` semantics.
pub fn root_marker(markup: Option<&str>) -> Option<String> {
    let markup = markup?;
    let document = Html::parse_document(markup);
    Some(
        document
            .root_element()
            .value()
            .attr("id")
            .unwrap_or("")
            .to_string(),
    )
}

fn expected_marker(renderer: Renderer) -> Option<&'static str> {
    match renderer {
        Renderer::Simorgh => Some(""),
        Renderer::Pal => Some("responsive-news"),
        Renderer::NotApplicable | Renderer::None => None,
    }
}

/// Page-status contribution for one fetch: empty string on a match,
/// otherwise an error message templated with the context label
/// (`Canonical` / `AMP`).
pub fn page_status(markup: Option<&str>, renderer: Renderer, context: &str) -> String {
    let Some(expected) = expected_marker(renderer) else {
        // Placeholder renderers are filtered out before classification
        return String::new();
    };

    match root_marker(markup) {
        Some(marker) if marker == expected => String::new(),
        _ => format!("Error - {} page not rendered by {}", context, renderer.code()),
    }
}
