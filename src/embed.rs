//! Derive an embeddable player URL from a shared video link.

use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:[^/\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .unwrap()
});

static VIMEO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:https?://)?(?:www\.)?vimeo\.com/(\d+)").unwrap());

/// Returns the iframe URL for YouTube and Vimeo links, `None` for anything else.
pub fn embed_url(video_url: &str) -> Option<String> {
    if let Some(caps) = YOUTUBE_RE.captures(video_url) {
        return Some(format!("https://www.youtube.com/embed/{}", &caps[1]));
    }

    VIMEO_RE
        .captures(video_url)
        .map(|caps| format!("https://player.vimeo.com/video/{}", &caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_link() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn youtube_watch_link_with_extra_params() {
        assert_eq!(
            embed_url("https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn youtube_short_and_embed_links() {
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert_eq!(
            embed_url("youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert_eq!(
            embed_url("https://www.youtube.com/v/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn youtube_id_must_be_eleven_chars() {
        assert_eq!(embed_url("https://www.youtube.com/watch?v=example123"), None);
    }

    #[test]
    fn vimeo_link() {
        assert_eq!(
            embed_url("https://vimeo.com/123456789").as_deref(),
            Some("https://player.vimeo.com/video/123456789")
        );
    }

    #[test]
    fn unknown_hosts() {
        assert_eq!(embed_url("https://example.com/party.mp4"), None);
        assert_eq!(embed_url("https://vimeo.com/channels/staffpicks"), None);
    }
}
