//! URL handling for templates: scheme filtering, video embeds, map links.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Link target for `href`/`action`; scriptable schemes and empty links become `#`
pub fn safe_href(url: &str) -> &str {
    let url = url.trim();
    let scheme = scheme_prefix(url);
    if scheme.is_empty() || BLOCKED_SCHEMES.iter().any(|s| has_scheme(&scheme, s)) {
        return "#";
    }
    url
}

/// Image source; like [`safe_href`] but inline `data:image/` URLs are kept
pub fn safe_src(url: &str) -> &str {
    if has_scheme(&scheme_prefix(url), "data:image/") {
        return url.trim();
    }
    safe_href(url)
}

/// Image URL quoted for a CSS `url(...)` inside an inline style
pub fn css_url(url: &str) -> String {
    let src = safe_src(url)
        .replace('\'', "%27")
        .replace('(', "%28")
        .replace(')', "%29");
    format!("url('{src}')")
}

/// Start of `url` as a browser reads its scheme: leading controls and
/// spaces dropped, tabs and newlines removed anywhere
fn scheme_prefix(url: &str) -> String {
    url.trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .take(16)
        .collect()
}

fn has_scheme(url: &str, scheme: &str) -> bool {
    url.len() >= scheme.len()
        && url.is_char_boundary(scheme.len())
        && url[..scheme.len()].eq_ignore_ascii_case(scheme)
}

// =============================================================================
// Video
// =============================================================================

/// Where a video URL points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource<'a> {
    YouTube(&'a str),
    Vimeo(&'a str),
    /// Anything else; played with a `<video>` tag
    File(&'a str),
}

impl<'a> VideoSource<'a> {
    pub fn parse(url: &'a str) -> Self {
        let url = url.trim();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        let rest = rest.strip_prefix("www.").unwrap_or(rest);
        let rest = rest.strip_prefix("m.").unwrap_or(rest);

        if let Some(query) = rest.strip_prefix("youtube.com/watch?") {
            let id = query
                .split('&')
                .find_map(|pair| pair.strip_prefix("v="))
                .map(video_id);
            if let Some(id) = id.filter(|id| !id.is_empty()) {
                return Self::YouTube(id);
            }
        }
        for prefix in ["youtu.be/", "youtube.com/embed/", "youtube.com/shorts/"] {
            if let Some(id) = rest.strip_prefix(prefix).map(video_id) {
                if !id.is_empty() {
                    return Self::YouTube(id);
                }
            }
        }
        for prefix in ["vimeo.com/", "player.vimeo.com/video/"] {
            if let Some(id) = rest.strip_prefix(prefix).map(video_id) {
                if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
                    return Self::Vimeo(id);
                }
            }
        }
        Self::File(url)
    }

    /// Player URL for an iframe; `None` for plain files
    pub fn embed_url(&self) -> Option<String> {
        match self {
            Self::YouTube(id) => Some(format!("https://www.youtube.com/embed/{id}")),
            Self::Vimeo(id) => Some(format!("https://player.vimeo.com/video/{id}")),
            Self::File(_) => None,
        }
    }

    /// Poster frame published by the host, if any
    pub fn thumbnail_url(&self) -> Option<String> {
        match self {
            Self::YouTube(id) => Some(format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")),
            Self::Vimeo(_) | Self::File(_) => None,
        }
    }
}

/// Id segment up to the first `?`, `&`, `#` or `/`
fn video_id(s: &str) -> &str {
    let end = s.find(['?', '&', '#', '/']).unwrap_or(s.len());
    &s[..end]
}

// =============================================================================
// Maps
// =============================================================================

fn encode(address: &str) -> String {
    utf8_percent_encode(address.trim(), NON_ALPHANUMERIC).to_string()
}

/// Google Maps embed URL for an iframe
pub fn map_embed_url(address: &str, zoom: u8) -> String {
    format!(
        "https://maps.google.com/maps?q={}&z={}&output=embed",
        encode(address),
        zoom
    )
}

/// Google Maps link for clients that cannot embed
pub fn map_link_url(address: &str) -> String {
    format!("https://maps.google.com/?q={}", encode(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("https://example.com"), "https://example.com");
        assert_eq!(safe_href("  /pricing "), "/pricing");
        assert_eq!(safe_href(""), "#");
        assert_eq!(safe_href("JavaScript:alert(1)"), "#");
        assert_eq!(safe_href("data:text/html,<b>x</b>"), "#");
        assert_eq!(safe_href("mailto:hi@example.com"), "mailto:hi@example.com");
    }

    #[test]
    fn test_safe_href_ignores_whitespace_in_scheme() {
        assert_eq!(safe_href("java\tscript:alert(1)"), "#");
        assert_eq!(safe_href("java\nscript:alert(1)"), "#");
        assert_eq!(safe_href("\u{1}javascript:alert(1)"), "#");
        assert_eq!(safe_href("vb\r\nscript:x"), "#");
        assert_eq!(safe_src("da\tta:text/html,x"), "#");
        assert_eq!(css_url("java\tscript:x"), "url('#')");
    }

    #[test]
    fn test_safe_src_keeps_inline_images() {
        assert_eq!(safe_src("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
        assert_eq!(safe_src("data:text/html,x"), "#");
    }

    #[test]
    fn test_css_url_quotes() {
        assert_eq!(css_url("https://x.test/a'b(c).png"), "url('https://x.test/a%27b%28c%29.png')");
    }

    #[test]
    fn test_video_sources() {
        assert_eq!(
            VideoSource::parse("https://www.youtube.com/watch?v=abc123&t=10"),
            VideoSource::YouTube("abc123")
        );
        assert_eq!(VideoSource::parse("https://youtu.be/xyz?si=1"), VideoSource::YouTube("xyz"));
        assert_eq!(VideoSource::parse("https://vimeo.com/76979871"), VideoSource::Vimeo("76979871"));
        assert_eq!(
            VideoSource::parse("https://cdn.test/intro.mp4"),
            VideoSource::File("https://cdn.test/intro.mp4")
        );
        assert_eq!(
            VideoSource::YouTube("abc").embed_url().as_deref(),
            Some("https://www.youtube.com/embed/abc")
        );
        assert!(VideoSource::File("x.mp4").embed_url().is_none());
    }

    #[test]
    fn test_map_urls_encode_address() {
        let url = map_embed_url("1 Main St, Springfield", 12);
        assert_eq!(url, "https://maps.google.com/maps?q=1%20Main%20St%2C%20Springfield&z=12&output=embed");
        assert_eq!(map_link_url("A&B"), "https://maps.google.com/?q=A%26B");
    }
}
