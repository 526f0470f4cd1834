//! Embedded-player verification for media page types.
//!
//! Canonical pages embed the player in an `iframe`, AMP variants in an
//! `amp-iframe`. The first matching element's `src` is fetched through the
//! gateway; only a body-bearing response counts as reachable.

use scraper::{Html, Selector};

use super::fetch_gateway::Fetcher;

/// Why a media probe failed. Flattened to a single templated message at
/// the public surface; kept distinct so tests can assert the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("no embedded player found")]
    NoEmbed,

    #[error("embedded player has no source")]
    NoSource,

    #[error("embedded player source is unreachable")]
    Unreachable,
}

fn embed_src(markup: &str, amp: bool) -> Result<String, MediaError> {
    let selector = if amp { "amp-iframe" } else { "iframe" };
    let selector = Selector::parse(selector).expect("static selector");

    let document = Html::parse_document(markup);
    let embed = document.select(&selector).next().ok_or(MediaError::NoEmbed)?;
    let src = embed
        .value()
        .attr("src")
        .filter(|src| !src.is_empty())
        .ok_or(MediaError::NoSource)?;
    Ok(src.to_string())
}

/// Tagged probe outcome. Absent markup counts as a missing embed.
pub async fn media_reason(
    fetcher: &dyn Fetcher,
    markup: Option<&str>,
    amp: bool,
) -> Result<(), MediaError> {
    let markup = markup.ok_or(MediaError::NoEmbed)?;
    let src = embed_src(markup, amp)?;
    match fetcher.fetch(&src).await.into_body() {
        Some(_) => Ok(()),
        None => Err(MediaError::Unreachable),
    }
}

/// Public media-status contribution: empty string on success, otherwise
/// the templated failure message.
pub async fn media_status(fetcher: &dyn Fetcher, markup: Option<&str>, amp: bool) -> String {
    let context = if amp { "AMP" } else { "Canonical" };
    match media_reason(fetcher, markup, amp).await {
        Ok(()) => String::new(),
        Err(reason) => {
            tracing::debug!("{} media probe failed: {}", context, reason);
            format!("Error - {} media not available", context)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fetch_gateway::StubFetcher;
    use super::*;

    const PLAYER_PAGE: &str = r#"<html><body>
        <iframe src="https://emp.example.com/player/hausa"></iframe>
    </body></html>"#;

    const AMP_PLAYER_PAGE: &str = r#"<html><body>
        <amp-iframe src="https://emp.example.com/player/hausa.amp"></amp-iframe>
    </body></html>"#;

    #[tokio::test]
    async fn test_reachable_player_passes() {
        let stub = StubFetcher::new().with_body("https://emp.example.com/player/hausa", "ok");
        assert_eq!(media_status(&stub, Some(PLAYER_PAGE), false).await, "");
    }

    #[tokio::test]
    async fn test_missing_embed() {
        let stub = StubFetcher::new();
        assert_eq!(
            media_status(&stub, Some("<html><body></body></html>"), false).await,
            "Error - Canonical media not available"
        );
        assert_eq!(
            media_reason(&stub, Some("<html><body></body></html>"), false).await,
            Err(MediaError::NoEmbed)
        );
    }

    #[tokio::test]
    async fn test_absent_markup_counts_as_missing_embed() {
        let stub = StubFetcher::new();
        assert_eq!(
            media_reason(&stub, None, false).await,
            Err(MediaError::NoEmbed)
        );
    }

    #[tokio::test]
    async fn test_embed_without_source() {
        let stub = StubFetcher::new();
        let markup = "<html><body><iframe></iframe></body></html>";
        assert_eq!(
            media_reason(&stub, Some(markup), false).await,
            Err(MediaError::NoSource)
        );
    }

    #[tokio::test]
    async fn test_unreachable_source() {
        // No stubbed response for the player URL: transport failure
        let stub = StubFetcher::new();
        assert_eq!(
            media_reason(&stub, Some(PLAYER_PAGE), false).await,
            Err(MediaError::Unreachable)
        );
    }

    #[tokio::test]
    async fn test_amp_variant_searches_amp_iframe() {
        let stub =
            StubFetcher::new().with_body("https://emp.example.com/player/hausa.amp", "ok");
        assert_eq!(media_status(&stub, Some(AMP_PLAYER_PAGE), true).await, "");
        // A canonical iframe does not satisfy the AMP probe
        assert_eq!(
            media_status(&stub, Some(PLAYER_PAGE), true).await,
            "Error - AMP media not available"
        );
    }
}
