//! Verification-video URL helpers: extract the YouTube id out of whatever
//! link shape a level file carries and derive embed and thumbnail URLs.

use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:youtube\.com/watch\?(?:[^#]*&)?v=|youtube\.com/embed/|youtu\.be/)([A-Za-z0-9_-]{6,})",
    )
    .expect("video id pattern should compile")
});

#[must_use]
pub fn youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str())
}

#[must_use]
pub fn embed_url(url: &str) -> Option<String> {
    youtube_id(url).map(|id| format!("https://www.youtube.com/embed/{id}"))
}

#[must_use]
pub fn thumbnail_url(url: &str) -> Option<String> {
    youtube_id(url).map(|id| format!("https://img.youtube.com/vi/{id}/mqdefault.jpg"))
}
