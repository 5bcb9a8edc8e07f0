//! MCP (Model Context Protocol) server implementation.
//!
//! The server holds one lyric [`Session`] for its whole lifetime and exposes
//! the same operations as the CLI: fetch an artist, add lyrics by hand, list
//! and export the classification, highlight a track and draw a word cloud.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! the CLI commands use; each `#[tool]` method delegates to core functions.
//! The session sits behind a mutex so only one tool writes at a time.
//! Blocking HTTP retrieval runs on tokio's blocking pool against a private
//! session that is merged in once the batch ends.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use lyricscore_core::retrieval::lyric_key;
use lyricscore_core::{
    CloudOptions, Config, Difficulty, FetchResult, LyricsSource, ReferenceDictionary, Session,
    SiteClient, WordCloud, classify, fetch_artist, highlight,
};

use crate::commands::{AWAITING_LYRICS, find_lyric};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `fetch_artist` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FetchArtistParams {
    /// Artist page URL, e.g. https://www.vagalume.com.br/legiao-urbana/
    pub artist_url: String,
}

/// Parameters for the `add_lyrics` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AddLyricsParams {
    /// Track title; becomes the track name once sanitized.
    pub title: String,
    /// Lyric text.
    pub text: String,
}

/// Filters shared by `list_results` and `export_csv`.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ResultsFilterParams {
    /// Case-insensitive substring of the track name.
    pub name: Option<String>,
    /// Only tracks with this label: "Easy", "Medium" or "Hard".
    pub difficulty: Option<Difficulty>,
}

/// Parameters for the `highlight_track` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HighlightTrackParams {
    /// Track name, with or without the `.txt` suffix.
    pub track: String,
    /// Output format: "html" or "json"
    #[serde(default = "default_highlight_format")]
    pub format: String,
}

fn default_highlight_format() -> String {
    "html".to_string()
}

/// Parameters for the `classify_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyTextParams {
    /// The lyric to classify.
    pub text: String,
}

/// Parameters for the `word_cloud` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct WordCloudParams {
    /// Canvas width in pixels.
    pub width: Option<u32>,
    /// Canvas height in pixels.
    pub height: Option<u32>,
    /// Maximum number of words.
    pub max_words: Option<usize>,
}

struct ServerState {
    session: Mutex<Session>,
    dictionary: ReferenceDictionary,
    config: Config,
    max_input_bytes: Option<usize>,
}

/// MCP server exposing lyric classification to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    state: Arc<ServerState>,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

fn lock(session: &Mutex<Session>) -> Result<MutexGuard<'_, Session>, McpError> {
    session
        .lock()
        .map_err(|_| McpError::internal_error("session lock poisoned", None))
}

impl ProjectServer {
    /// Scrape on the blocking pool into a private session, then merge it.
    ///
    /// The shared session is only locked for the merge, so other tools keep
    /// answering while pages download. Lyrics fetched before a failure are
    /// merged too.
    async fn fetch_into_session<S, F>(
        &self,
        make_source: F,
        artist_url: String,
    ) -> Result<CallToolResult, McpError>
    where
        S: LyricsSource + 'static,
        F: FnOnce() -> FetchResult<S> + Send + 'static,
    {
        let base_url = self.state.config.base_url.clone();
        let (fetched, outcome) = tokio::task::spawn_blocking(move || {
            let mut fetched = Session::new();
            let outcome = make_source().and_then(|source| {
                fetch_artist(&source, &artist_url, &base_url, &mut fetched, |_, _, _| {})
            });
            (fetched, outcome)
        })
        .await
        .map_err(|e| McpError::internal_error(format!("retrieval task failed: {e}"), None))?;

        let kept = fetched.len();
        let total = {
            let mut session = lock(&self.state.session)?;
            session.merge(fetched);
            session.len()
        };

        let stored = outcome.map_err(|e| {
            tracing::warn!(tool = "fetch_artist", error = %e, kept, "retrieval aborted");
            McpError::internal_error(
                format!("{e}; {kept} lyrics stored before the failure were kept"),
                None,
            )
        })?;

        tracing::info!(tool = "fetch_artist", stored, total, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Stored {stored} lyrics; {total} in session."
        ))]))
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with an empty session.
    pub fn new(
        config: Config,
        dictionary: ReferenceDictionary,
        max_input_bytes: Option<usize>,
    ) -> Self {
        Self {
            tool_router: Self::tool_router(),
            state: Arc::new(ServerState {
                session: Mutex::new(Session::new()),
                dictionary,
                config,
                max_input_bytes,
            }),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.state.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let lyrics = lock(&self.state.session)?.len();
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "lyrics": lyrics,
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}\nLyrics in session: {lyrics}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Scrape every lyric of an artist into the session.
    #[tool(
        description = "Scrape all lyrics of an artist page into the session. Lyrics stored before a failure are kept."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    async fn fetch_artist(
        &self,
        Parameters(params): Parameters<FetchArtistParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "fetch_artist", artist_url = %params.artist_url, "executing MCP tool");

        let timeout = Duration::from_secs(self.state.config.timeout_secs);
        self.fetch_into_session(move || SiteClient::new(timeout), params.artist_url)
            .await
    }

    /// Add a lyric to the session by hand.
    #[tool(description = "Add or replace a lyric in the session under the given title.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn add_lyrics(
        &self,
        Parameters(params): Parameters<AddLyricsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "add_lyrics", title = %params.title, "executing MCP tool");
        self.check_size(&params.text)?;

        let key = lyric_key(&params.title);
        let mut session = lock(&self.state.session)?;
        let replaced = session.insert(key.clone(), params.text).is_some();

        tracing::info!(tool = "add_lyrics", %key, replaced, "MCP tool completed");
        let verb = if replaced { "Replaced" } else { "Added" };
        Ok(CallToolResult::success(vec![Content::text(format!(
            "{verb} {key}; {} in session.",
            session.len()
        ))]))
    }

    /// Classify every lyric in the session.
    #[tool(
        description = "Classify every lyric in the session. Returns rows of track name, difficulty, rare-word ratio, words per sentence and Flesch readability."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn list_results(
        &self,
        Parameters(params): Parameters<ResultsFilterParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_results", name = ?params.name, difficulty = ?params.difficulty, "executing MCP tool");

        let session = lock(&self.state.session)?;
        if session.is_empty() {
            return Ok(CallToolResult::success(vec![Content::text(AWAITING_LYRICS)]));
        }
        let table = session
            .score_all(&self.state.dictionary, &self.state.config.thresholds)
            .filter(params.name.as_deref(), params.difficulty);

        tracing::info!(tool = "list_results", rows = table.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&table)?)]))
    }

    /// Export the classification as CSV.
    #[tool(description = "Export the (optionally filtered) classification of the session as CSV.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn export_csv(
        &self,
        Parameters(params): Parameters<ResultsFilterParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "export_csv", "executing MCP tool");

        let session = lock(&self.state.session)?;
        let table = session
            .score_all(&self.state.dictionary, &self.state.config.thresholds)
            .filter(params.name.as_deref(), params.difficulty);
        let csv = table
            .to_csv()
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        tracing::info!(tool = "export_csv", rows = table.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(csv)]))
    }

    /// Highlight one lyric of the session.
    #[tool(
        description = "Mark the most frequent words (green) and rare words (red) of a lyric in the session."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn highlight_track(
        &self,
        Parameters(params): Parameters<HighlightTrackParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "highlight_track", track = %params.track, "executing MCP tool");

        let session = lock(&self.state.session)?;
        let (_, text) = find_lyric(&session, &params.track).ok_or_else(|| {
            McpError::invalid_params(format!("no lyric named {:?}", params.track), None)
        })?;
        let marked = highlight(
            text,
            &self.state.dictionary,
            self.state.config.frequent_words,
        );

        let out = if params.format == "json" {
            to_json(&marked)?
        } else {
            marked.to_html()
        };
        tracing::info!(tool = "highlight_track", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(out)]))
    }

    /// Classify a single text without storing it.
    #[tool(description = "Classify a lyric without adding it to the session.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn classify_text(
        &self,
        Parameters(params): Parameters<ClassifyTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "classify_text", "executing MCP tool");
        self.check_size(&params.text)?;

        let card = classify(
            &params.text,
            &self.state.dictionary,
            &self.state.config.thresholds,
        );

        tracing::info!(tool = "classify_text", difficulty = %card.difficulty, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&card)?)]))
    }

    /// Render a word cloud of all session lyrics.
    #[tool(description = "Render an SVG word cloud of every lyric in the session.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn word_cloud(
        &self,
        Parameters(params): Parameters<WordCloudParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "word_cloud", "executing MCP tool");

        let base = &self.state.config.cloud;
        let options = CloudOptions {
            width: params.width.unwrap_or(base.width),
            height: params.height.unwrap_or(base.height),
            max_words: params.max_words.unwrap_or(base.max_words),
            ..base.clone()
        };

        let session = lock(&self.state.session)?;
        if session.is_empty() {
            return Err(McpError::invalid_params(AWAITING_LYRICS, None));
        }
        let cloud = WordCloud::generate(&session.concatenated_text(), &options);
        if cloud.is_empty() {
            return Err(McpError::invalid_params("no words to plot", None));
        }

        tracing::info!(tool = "word_cloud", words = cloud.words.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(cloud.to_svg())]))
    }

    /// Drop every lyric from the session.
    #[tool(description = "Remove every lyric from the session.")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn reset_session(&self) -> Result<CallToolResult, McpError> {
        let mut session = lock(&self.state.session)?;
        let removed = session.len();
        session.reset();

        tracing::info!(tool = "reset_session", removed, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Removed {removed} lyrics."
        ))]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Fill the session with fetch_artist or add_lyrics, \
                 then use list_results, export_csv, highlight_track or word_cloud.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyricscore_core::{FetchError, Track};
    use rmcp::model::RawContent;
    use std::sync::mpsc;

    fn server() -> ProjectServer {
        ProjectServer::new(Config::default(), ReferenceDictionary::builtin(), Some(1024))
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn add(server: &ProjectServer, title: &str, text: &str) {
        server
            .add_lyrics(Parameters(AddLyricsParams {
                title: title.to_string(),
                text: text.to_string(),
            }))
            .expect("add_lyrics should succeed");
    }

    fn all() -> Parameters<ResultsFilterParams> {
        Parameters(ResultsFilterParams::default())
    }

    fn session_size(server: &ProjectServer) -> u64 {
        let info = server
            .get_info(Parameters(GetInfoParams {
                format: "json".to_string(),
            }))
            .expect("get_info should succeed");
        let json: serde_json::Value =
            serde_json::from_str(extract_text(&info).unwrap()).expect("valid JSON");
        json["lyrics"].as_u64().unwrap()
    }

    fn track(title: &str, href: &str) -> Track {
        Track {
            title: title.to_string(),
            href: href.to_string(),
        }
    }

    /// Serves one track whose lyric is held back until `release` fires.
    struct GatedSource {
        started: mpsc::Sender<()>,
        release: mpsc::Receiver<()>,
    }

    impl LyricsSource for GatedSource {
        fn tracks(&self, _artist_url: &str) -> FetchResult<Vec<Track>> {
            Ok(vec![track("Slow", "/slow.html")])
        }

        fn lyrics(&self, _track_url: &str) -> FetchResult<String> {
            let _ = self.started.send(());
            let _ = self.release.recv();
            Ok("slow lyric".to_string())
        }
    }

    /// Serves `ok` tracks, then fails on the next one.
    struct BrokenSource {
        ok: usize,
    }

    impl LyricsSource for BrokenSource {
        fn tracks(&self, _artist_url: &str) -> FetchResult<Vec<Track>> {
            Ok((0..=self.ok)
                .map(|i| track(&format!("Track {i}"), &format!("/{i}.html")))
                .collect())
        }

        fn lyrics(&self, track_url: &str) -> FetchResult<String> {
            if track_url.ends_with(&format!("/{}.html", self.ok)) {
                Err(FetchError::Status {
                    url: track_url.to_string(),
                    status: 500,
                })
            } else {
                Ok("la la la".to_string())
            }
        }
    }

    #[test]
    fn server_info_has_correct_name() {
        let info = ServerHandler::get_info(&server());

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn get_info_tool_reports_session_size_as_json() {
        let server = server();
        add(&server, "One", "la la la");
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: "json".to_string(),
            }))
            .expect("get_info should succeed");

        let json: serde_json::Value =
            serde_json::from_str(extract_text(&result).unwrap()).expect("valid JSON");
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["lyrics"], 1);
    }

    #[test]
    fn empty_session_lists_awaiting_notice() {
        let result = server().list_results(all()).unwrap();
        assert_eq!(extract_text(&result), Some(AWAITING_LYRICS));
    }

    #[test]
    fn added_lyrics_are_listed_in_order_and_filtered() {
        let server = server();
        add(&server, "Sun: Song", "The sun is up. We go out and play.");
        add(&server, "Moon", "The moon is out tonight.");

        let result = server.list_results(all()).unwrap();
        let rows: serde_json::Value = serde_json::from_str(extract_text(&result).unwrap()).unwrap();
        assert_eq!(rows[0]["track_name"], "Sun Song.txt");
        assert_eq!(rows[1]["track_name"], "Moon.txt");

        let filtered = server
            .list_results(Parameters(ResultsFilterParams {
                name: Some("MOON".to_string()),
                difficulty: None,
            }))
            .unwrap();
        let rows: serde_json::Value =
            serde_json::from_str(extract_text(&filtered).unwrap()).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 1);
    }

    #[test]
    fn adding_same_title_replaces() {
        let server = server();
        add(&server, "One", "first");
        let result = server
            .add_lyrics(Parameters(AddLyricsParams {
                title: "One".to_string(),
                text: "second".to_string(),
            }))
            .unwrap();
        assert!(extract_text(&result).unwrap().starts_with("Replaced One.txt"));
    }

    #[test]
    fn oversized_text_is_rejected() {
        let result = server().classify_text(Parameters(ClassifyTextParams {
            text: "a".repeat(2048),
        }));
        assert!(result.is_err());
    }

    #[test]
    fn export_csv_has_header_row() {
        let server = server();
        add(&server, "One", "The cat sat on the mat.");
        let result = server.export_csv(all()).unwrap();
        let csv = extract_text(&result).unwrap();
        assert!(csv.starts_with("Track Name,Difficulty,"));
        assert!(csv.contains("One.txt,Easy"));
    }

    #[test]
    fn highlight_track_finds_by_title() {
        let server = server();
        add(&server, "One", "zyzzyva love");
        let result = server
            .highlight_track(Parameters(HighlightTrackParams {
                track: "One".to_string(),
                format: "html".to_string(),
            }))
            .unwrap();
        assert!(extract_text(&result).unwrap().contains("<span"));

        let missing = server.highlight_track(Parameters(HighlightTrackParams {
            track: "Two".to_string(),
            format: "html".to_string(),
        }));
        assert!(missing.is_err());
    }

    #[test]
    fn classify_text_does_not_store() {
        let server = server();
        let result = server
            .classify_text(Parameters(ClassifyTextParams {
                text: "The cat sat on the mat.".to_string(),
            }))
            .unwrap();
        let card: serde_json::Value = serde_json::from_str(extract_text(&result).unwrap()).unwrap();
        assert_eq!(card["difficulty"], "Easy");
        assert_eq!(
            extract_text(&server.list_results(all()).unwrap()),
            Some(AWAITING_LYRICS)
        );
    }

    #[test]
    fn word_cloud_needs_lyrics() {
        let server = server();
        assert!(server.word_cloud(Parameters(WordCloudParams::default())).is_err());

        add(&server, "One", "river mountain river ocean");
        let result = server
            .word_cloud(Parameters(WordCloudParams {
                width: Some(300),
                ..WordCloudParams::default()
            }))
            .unwrap();
        let svg = extract_text(&result).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"300\""));
    }

    #[test]
    fn reset_session_empties_it() {
        let server = server();
        add(&server, "One", "x");
        add(&server, "Two", "y");
        let result = server.reset_session().unwrap();
        assert_eq!(extract_text(&result), Some("Removed 2 lyrics."));
        assert_eq!(
            extract_text(&server.list_results(all()).unwrap()),
            Some(AWAITING_LYRICS)
        );
    }

    #[tokio::test]
    async fn fetch_with_malformed_url_fails_and_keeps_session() {
        let server = server();
        add(&server, "Kept", "still here");
        let result = server
            .fetch_artist(Parameters(FetchArtistParams {
                artist_url: "not a url".to_string(),
            }))
            .await;
        assert!(result.is_err());

        let info = server
            .get_info(Parameters(GetInfoParams {
                format: "json".to_string(),
            }))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(extract_text(&info).unwrap()).unwrap();
        assert_eq!(json["lyrics"], 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn session_stays_readable_during_fetch() {
        let server = server();
        add(&server, "Kept", "still here");

        let (started_tx, started_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let source = GatedSource {
            started: started_tx,
            release: release_rx,
        };
        let fetching = {
            let server = server.clone();
            tokio::spawn(async move {
                server
                    .fetch_into_session(
                        move || Ok(source),
                        "https://example.com/artist/".to_string(),
                    )
                    .await
            })
        };

        tokio::task::spawn_blocking(move || started_rx.recv())
            .await
            .unwrap()
            .expect("fetch should reach the track page");
        assert_eq!(session_size(&server), 1);
        assert_eq!(
            extract_text(&server.list_results(all()).unwrap())
                .unwrap()
                .matches("track_name")
                .count(),
            1
        );

        release_tx.send(()).unwrap();
        let result = fetching.await.unwrap().expect("fetch should succeed");
        assert_eq!(
            extract_text(&result),
            Some("Stored 1 lyrics; 2 in session.")
        );
        assert_eq!(session_size(&server), 2);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_lyrics_fetched_before_it() {
        let server = server();
        let result = server
            .fetch_into_session(
                || Ok(BrokenSource { ok: 2 }),
                "https://example.com/artist/".to_string(),
            )
            .await;

        let err = result.unwrap_err();
        assert!(err.message.contains("HTTP 500"));
        assert!(err.message.contains("2 lyrics stored before the failure were kept"));
        assert_eq!(session_size(&server), 2);

        let rows = server.list_results(all()).unwrap();
        let rows: serde_json::Value = serde_json::from_str(extract_text(&rows).unwrap()).unwrap();
        assert_eq!(rows[0]["track_name"], "Track 0.txt");
        assert_eq!(rows[1]["track_name"], "Track 1.txt");
    }
}
