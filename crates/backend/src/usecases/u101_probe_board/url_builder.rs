//! URL composition for catalogue cells.
//!
//! No validation is performed; malformed inputs simply produce malformed
//! URLs, which the fetch gateway then reports as unreachable.

/// Absolute URL for a (service slug, environment tag, relative path) cell.
///
/// The environment prefix is empty when the tag, stripped of any locale
/// qualifier, is `live`; otherwise the full tag plus a dot is injected into
/// the host.
pub fn page_url(slug: &str, env: &str, path: &str) -> String {
    let base_env = env.split('_').next().unwrap_or(env);
    let prefix = if base_env == "live" {
        String::new()
    } else {
        format!("{}.", env)
    };

    let mut url = format!("https://www.{}bbc.com/{}", prefix, slug);
    if !path.is_empty() {
        url.push('/');
        url.push_str(path);
    }
    url
}

/// AMP variant of a canonical URL
pub fn amp_url(url: &str) -> String {
    format!("{}.amp", url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_prefix() {
        assert_eq!(page_url("mundo", "stage", ""), "https://www.stage.bbc.com/mundo");
    }

    #[test]
    fn test_live_has_no_prefix() {
        assert_eq!(page_url("mundo", "live", ""), "https://www.bbc.com/mundo");
    }

    #[test]
    fn test_locale_qualified_live_has_no_prefix() {
        assert_eq!(
            page_url("persian", "live_dari", "bbc_dari_radio/liveradio"),
            "https://www.bbc.com/persian/bbc_dari_radio/liveradio"
        );
    }

    #[test]
    fn test_locale_qualified_test_keeps_full_tag() {
        assert_eq!(
            page_url("persian", "test_dari", ""),
            "https://www.test_dari.bbc.com/persian"
        );
    }

    #[test]
    fn test_path_appended_only_when_non_empty() {
        assert_eq!(
            page_url("hausa", "test", "media-23241899"),
            "https://www.test.bbc.com/hausa/media-23241899"
        );
        assert_eq!(page_url("hausa", "test", ""), "https://www.test.bbc.com/hausa");
    }

    #[test]
    fn test_amp_url() {
        assert_eq!(amp_url("https://www.bbc.com/mundo"), "https://www.bbc.com/mundo.amp");
    }
}
