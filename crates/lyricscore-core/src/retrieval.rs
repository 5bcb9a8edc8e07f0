//! Lyric retrieval from a lyrics website.
//!
//! An artist page lists tracks as `a.nameMusic` links; a track page holds
//! the lyric as text nodes of `div#lyrics`. [`SiteClient`] fetches pages
//! over HTTP; [`fetch_artist`] drives any [`LyricsSource`] and fills a
//! [`Session`].

use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Url;
use reqwest::blocking::Client;
use schemars::JsonSchema;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::{FetchError, FetchResult};
use crate::session::Session;

/// Root of the lyrics site.
pub const DEFAULT_BASE_URL: &str = "https://www.vagalume.com.br";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

static TRACK_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.nameMusic").expect("valid selector"));

static LYRICS_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#lyrics").expect("valid selector"));

static UNSAFE_TITLE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/*?:"<>|]"#).expect("valid regex"));

/// A track discovered on an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Track {
    /// Link text, trimmed.
    pub title: String,
    /// Link target as found on the page (usually site-relative).
    pub href: String,
}

impl Track {
    /// Session key for this track's lyric.
    pub fn key(&self) -> String {
        lyric_key(&self.title)
    }
}

/// Something that can list an artist's tracks and return a track's lyric.
pub trait LyricsSource {
    /// Tracks listed on the artist page, in page order.
    fn tracks(&self, artist_url: &str) -> FetchResult<Vec<Track>>;

    /// Lyric text of a track page; empty when the page has none.
    fn lyrics(&self, track_url: &str) -> FetchResult<String>;
}

/// Blocking HTTP client for the lyrics site.
#[derive(Debug, Clone)]
pub struct SiteClient {
    client: Client,
}

impl SiteClient {
    /// Build a client whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("lyricscore/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    #[tracing::instrument(skip(self))]
    fn get_html(&self, url: &str) -> FetchResult<String> {
        let request_error = |source: reqwest::Error| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().map_err(request_error)?;
        tracing::debug!(bytes = body.len(), "page fetched");
        Ok(body)
    }
}

impl LyricsSource for SiteClient {
    fn tracks(&self, artist_url: &str) -> FetchResult<Vec<Track>> {
        Ok(parse_track_list(&self.get_html(artist_url)?))
    }

    fn lyrics(&self, track_url: &str) -> FetchResult<String> {
        Ok(parse_lyrics(&self.get_html(track_url)?))
    }
}

/// Extract the track list from an artist page.
///
/// Titles are the trimmed link texts with empty ones dropped; they are paired
/// by position with the `href` of every track link.
pub fn parse_track_list(html: &str) -> Vec<Track> {
    let document = Html::parse_document(html);
    let links: Vec<_> = document.select(&TRACK_LINK).collect();

    let titles = links
        .iter()
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());
    let hrefs = links.iter().filter_map(|a| a.value().attr("href"));

    titles
        .zip(hrefs)
        .map(|(title, href)| Track {
            title,
            href: href.to_string(),
        })
        .collect()
}

/// Extract the lyric from a track page.
///
/// Only text nodes directly inside the container count; each is trimmed,
/// empty ones are dropped and the rest joined with newlines. A page without
/// the container yields an empty string.
pub fn parse_lyrics(html: &str) -> String {
    let document = Html::parse_document(html);
    let Some(container) = document.select(&LYRICS_CONTAINER).next() else {
        return String::new();
    };

    container
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove characters that are not allowed in file names: `\ / * ? : " < > |`.
pub fn sanitize_title(title: &str) -> String {
    UNSAFE_TITLE_CHARS.replace_all(title, "").into_owned()
}

/// Session key for a track title: the sanitized title plus `.txt`.
pub fn lyric_key(title: &str) -> String {
    format!("{}.txt", sanitize_title(title))
}

/// Resolve a track link against the site root.
pub fn track_url(base_url: &str, href: &str) -> FetchResult<String> {
    fn invalid(url: &str, e: impl std::fmt::Display) -> FetchError {
        FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }

    let base = Url::parse(base_url).map_err(|e| invalid(base_url, e))?;
    let url = base.join(href).map_err(|e| invalid(href, e))?;
    Ok(url.into())
}

/// Retrieve every track of an artist into `session`.
///
/// Tracks are fetched in page order; `on_track` is called before each one.
/// The first failure aborts the batch and is returned; lyrics stored before
/// it stay in the session. Returns the number of distinct keys written, so
/// titles that sanitize to the same key count once.
#[tracing::instrument(skip(source, session, on_track))]
pub fn fetch_artist<S, F>(
    source: &S,
    artist_url: &str,
    base_url: &str,
    session: &mut Session,
    mut on_track: F,
) -> FetchResult<usize>
where
    S: LyricsSource + ?Sized,
    F: FnMut(usize, usize, &Track),
{
    let tracks = source.tracks(artist_url)?;
    tracing::info!(tracks = tracks.len(), "track list retrieved");

    let mut written = HashSet::new();
    for (index, track) in tracks.iter().enumerate() {
        on_track(index, tracks.len(), track);
        let url = track_url(base_url, &track.href)?;
        let lyric = source.lyrics(&url)?;
        tracing::debug!(title = %track.title, chars = lyric.len(), "lyric retrieved");
        let key = track.key();
        session.insert(key.clone(), lyric);
        written.insert(key);
    }

    tracing::info!(stored = written.len(), "artist retrieval complete");
    Ok(written.len())
}
