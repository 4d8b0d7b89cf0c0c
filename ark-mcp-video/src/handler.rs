//! Video generation handler for the Ark video server.
//!
//! `VideoHandler` runs one generation end to end against the Seedance task
//! API: build the task payload, submit it, poll the task at a fixed interval,
//! download the finished video and write it to the requested path. Every
//! failure is folded into a [`ToolResult`] by [`VideoHandler::run`].

use ark_mcp_common::config::{API_KEY_VAR, Config};
use ark_mcp_common::error::{ConfigError, Error};
use ark_mcp_common::models::{
    GENERIC_MAX_DURATION, GENERIC_MIN_DURATION, GENERIC_RATIOS, GENERIC_RESOLUTIONS,
    ModelRegistry, SeedanceModel,
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Default model for video generation.
pub const DEFAULT_MODEL: &str = "doubao-seedance-1-5-pro-251215";

/// Default output resolution.
pub const DEFAULT_RESOLUTION: &str = "720p";

/// Default aspect ratio.
pub const DEFAULT_RATIO: &str = "16:9";

/// Default duration in seconds.
pub const DEFAULT_DURATION_SECONDS: u8 = 5;

/// Frame rate requested for every clip.
pub const FRAMES_PER_SECOND: u8 = 24;

/// Role tag marking the reference image as the first frame.
pub const FIRST_FRAME_ROLE: &str = "first_frame";

/// Task polling configuration
pub const POLL_INTERVAL_MS: u64 = 1000;
pub const MAX_POLL_ATTEMPTS: u32 = 120; // 2 minutes at 1s intervals
pub const SUBMIT_TIMEOUT_SECS: u64 = 60;
pub const POLL_TIMEOUT_SECS: u64 = 30;
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 60;

/// Video generation parameters.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoGenerateParams {
    /// Text description of the video content.
    pub prompt: String,

    /// Seedance model id, alias, or custom endpoint id.
    /// Defaults to "doubao-seedance-1-5-pro-251215".
    #[serde(default = "default_model")]
    pub model: String,

    /// Path to save the generated MP4 file (e.g., ./my-video.mp4).
    /// Relative paths resolve against the server's working directory.
    pub save_path: String,

    /// Local path to an image to use as the first frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_file_path: Option<String>,

    /// Video resolution: 480p, 720p, or 1080p.
    #[serde(default = "default_resolution")]
    pub resolution: String,

    /// Video aspect ratio, e.g. 16:9, 9:16, or 1:1.
    #[serde(default = "default_ratio")]
    pub ratio: String,

    /// Video duration in seconds.
    #[serde(default = "default_duration")]
    pub duration: u8,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_resolution() -> String {
    DEFAULT_RESOLUTION.to_string()
}

fn default_ratio() -> String {
    DEFAULT_RATIO.to_string()
}

fn default_duration() -> u8 {
    DEFAULT_DURATION_SECONDS
}

/// Validation error details for video generation parameters.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// Description of the validation failure.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl VideoGenerateParams {
    /// Validate the parameters against the model constraints.
    ///
    /// Models missing from the registry (custom endpoint ids) are checked
    /// against the generic limits instead of being rejected.
    ///
    /// # Returns
    /// - `Ok(())` if all parameters are valid
    /// - `Err(Vec<ValidationError>)` with all validation errors
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.prompt.trim().is_empty() {
            errors.push(ValidationError::new("prompt", "Prompt cannot be empty"));
        }

        if self.save_path.trim().is_empty() {
            errors.push(ValidationError::new("savePath", "Save path cannot be empty"));
        }

        if self.model.trim().is_empty() {
            errors.push(ValidationError::new("model", "Model cannot be empty"));
        }

        let (resolutions, ratios, min_duration, max_duration, scope) = match self.get_model() {
            Some(model) => (
                model.supported_resolutions,
                model.supported_ratios,
                model.min_duration,
                model.max_duration,
                format!(" for {}", model.id),
            ),
            None => (
                GENERIC_RESOLUTIONS,
                GENERIC_RATIOS,
                GENERIC_MIN_DURATION,
                GENERIC_MAX_DURATION,
                String::new(),
            ),
        };

        if !resolutions.contains(&self.resolution.as_str()) {
            errors.push(ValidationError::new(
                "resolution",
                format!(
                    "Invalid resolution '{}'. Valid options{}: {}",
                    self.resolution,
                    scope,
                    resolutions.join(", ")
                ),
            ));
        }

        if !ratios.contains(&self.ratio.as_str()) {
            errors.push(ValidationError::new(
                "ratio",
                format!(
                    "Invalid ratio '{}'. Valid options{}: {}",
                    self.ratio,
                    scope,
                    ratios.join(", ")
                ),
            ));
        }

        if !(min_duration..=max_duration).contains(&self.duration) {
            errors.push(ValidationError::new(
                "duration",
                format!(
                    "duration must be between {} and {} seconds{}, got {}",
                    min_duration, max_duration, scope, self.duration
                ),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Get the resolved model definition, if the model is a known Seedance model.
    pub fn get_model(&self) -> Option<&'static SeedanceModel> {
        ModelRegistry::resolve_seedance(&self.model)
    }
}

// =============================================================================
// Generation Request
// =============================================================================

/// A reference image loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceAsset {
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// Media type derived from the file extension
    pub mime_type: &'static str,
}

impl ReferenceAsset {
    /// Encode the asset as a `data:` URL.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.bytes))
    }
}

/// Media type for a reference file, from its extension. Unknown extensions
/// are sent as PNG.
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Everything needed to submit one task. Built once per invocation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Trimmed user prompt
    pub prompt: String,
    /// Canonical model id sent to the API
    pub model: String,
    /// Output resolution
    pub resolution: String,
    /// Aspect ratio
    pub ratio: String,
    /// Duration in seconds
    pub duration: u8,
    /// Optional first-frame image
    pub reference: Option<ReferenceAsset>,
}

impl GenerationRequest {
    /// Prompt text with the Seedance parameter flags appended.
    pub fn prompt_text(&self) -> String {
        format!(
            "{} --rs {} --rt {} --dur {} --fps {}",
            self.prompt.trim(),
            self.resolution,
            self.ratio,
            self.duration,
            FRAMES_PER_SECOND
        )
    }

    /// Build the task creation payload.
    pub fn to_task_request(&self) -> CreateTaskRequest {
        let mut content = vec![ContentItem::Text {
            text: self.prompt_text(),
        }];

        if let Some(reference) = &self.reference {
            content.push(ContentItem::ImageUrl {
                image_url: ImageUrl {
                    url: reference.data_url(),
                },
                role: FIRST_FRAME_ROLE.to_string(),
            });
        }

        CreateTaskRequest {
            model: self.model.clone(),
            content,
        }
    }
}

// =============================================================================
// Handler
// =============================================================================

/// Timing knobs for one workflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay before every status query
    pub interval: Duration,
    /// Status queries allowed before giving up
    pub max_attempts: u32,
    /// Timeout for the task creation call
    pub submit_timeout: Duration,
    /// Timeout for each status query
    pub poll_timeout: Duration,
    /// Timeout for the video download
    pub download_timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(POLL_INTERVAL_MS),
            max_attempts: MAX_POLL_ATTEMPTS,
            submit_timeout: Duration::from_secs(SUBMIT_TIMEOUT_SECS),
            poll_timeout: Duration::from_secs(POLL_TIMEOUT_SECS),
            download_timeout: Duration::from_secs(DOWNLOAD_TIMEOUT_SECS),
        }
    }
}

/// Video generation handler.
///
/// Holds no per-invocation state; concurrent calls are independent.
pub struct VideoHandler {
    /// Application configuration.
    pub config: Config,
    /// HTTP client for API requests.
    pub http: reqwest::Client,
    /// Polling and timeout settings.
    pub poll: PollConfig,
    /// Directory relative paths resolve against.
    pub base_dir: PathBuf,
}

impl VideoHandler {
    /// Create a new VideoHandler resolving paths against the current directory.
    pub fn new(config: Config) -> Self {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            config,
            http: reqwest::Client::new(),
            poll: PollConfig::default(),
            base_dir,
        }
    }

    /// Override polling and timeout settings.
    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Override the directory relative paths resolve against.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Run the workflow and convert the outcome into a caller-facing result.
    pub async fn run(&self, params: VideoGenerateParams) -> ToolResult {
        let model = ModelRegistry::canonical_id(&params.model);
        match self.generate_video(params).await {
            Ok(result) => ToolResult::success(&result),
            Err(err) => {
                error!(error = %err, "Video generation failed");
                ToolResult::failure(failure_message(&err, &model))
            }
        }
    }

    /// Generate a video and save it locally.
    ///
    /// # Returns
    /// * `Ok(VideoGenerateResult)` - Absolute saved path, model and task id
    /// * `Err(Error)` - Missing credential, invalid parameters, API failure,
    ///   task failure, poll exhaustion or file system error
    #[instrument(level = "info", name = "generate_video", skip(self, params), fields(model = %params.model, resolution = %params.resolution, ratio = %params.ratio))]
    pub async fn generate_video(&self, params: VideoGenerateParams) -> Result<VideoGenerateResult, Error> {
        let api_key = self.config.api_key()?;

        params.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            Error::validation(messages.join("; "))
        })?;

        let request = self.build_request(&params).await?;
        info!(
            model = %request.model,
            has_reference = request.reference.is_some(),
            "Requesting video generation task"
        );

        let task_id = self.submit_task(api_key, &request).await?;
        let task = self.poll_task(api_key, &task_id).await?;

        let video_url = task
            .video_url()
            .ok_or_else(|| Error::unexpected_response("No video URL in response"))?;
        info!(task_id = %task_id, video_url = %video_url, "Video ready, downloading");

        let bytes = self.download_video(video_url).await?;
        let saved_path = self.save_video(&params.save_path, &bytes).await?;
        info!(path = %saved_path.display(), bytes = bytes.len(), "Video saved");

        Ok(VideoGenerateResult {
            saved_path,
            model: request.model,
            task_id,
            size_bytes: bytes.len() as u64,
        })
    }

    /// Build the generation request, loading the reference image if one exists.
    pub async fn build_request(&self, params: &VideoGenerateParams) -> Result<GenerationRequest, Error> {
        let reference_path = params
            .reference_file_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty());

        let reference = match reference_path {
            Some(path) => self.load_reference(path).await?,
            None => None,
        };

        Ok(GenerationRequest {
            prompt: params.prompt.trim().to_string(),
            model: ModelRegistry::canonical_id(&params.model),
            resolution: params.resolution.clone(),
            ratio: params.ratio.clone(),
            duration: params.duration,
            reference,
        })
    }

    /// Read a reference image. A missing file is not an error: the request
    /// goes out text-only.
    async fn load_reference(&self, path: &str) -> Result<Option<ReferenceAsset>, Error> {
        let path = self.resolve_path(path);

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            warn!(path = %path.display(), "Reference file not found, continuing without it");
            return Ok(None);
        }

        let bytes = tokio::fs::read(&path).await?;
        let mime_type = mime_type_for(&path);
        info!(path = %path.display(), mime_type, size = bytes.len(), "Using reference image");

        Ok(Some(ReferenceAsset { bytes, mime_type }))
    }

    /// Submit a generation task and return its id.
    pub async fn submit_task(&self, api_key: &str, request: &GenerationRequest) -> Result<String, Error> {
        let endpoint = self.config.tasks_endpoint();
        debug!(endpoint = %endpoint, "Calling Ark task API");

        let response = self
            .http
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request.to_task_request())
            .timeout(self.poll.submit_timeout)
            .send()
            .await
            .map_err(|e| Error::api(&endpoint, 0, format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(&endpoint, response).await);
        }

        let created: CreateTaskResponse = response.json().await.map_err(|e| {
            Error::api(&endpoint, status.as_u16(), format!("Failed to parse task response: {}", e))
        })?;

        info!(task_id = %created.id, "Task created");
        Ok(created.id)
    }

    /// Poll a task until it settles.
    ///
    /// Sleeps `interval` before each query and gives up after `max_attempts`
    /// queries. Only in-progress statuses keep the loop going.
    pub async fn poll_task(&self, api_key: &str, task_id: &str) -> Result<Task, Error> {
        let max_attempts = self.poll.max_attempts;

        for attempt in 1..=max_attempts {
            tokio::time::sleep(self.poll.interval).await;

            let task = self.fetch_task(api_key, task_id).await?;
            info!(task_id, status = %task.status, attempt, max_attempts, "Task status");

            match task.status {
                TaskStatus::Processing => {}
                TaskStatus::Succeeded => return Ok(task),
                TaskStatus::Failed => {
                    let detail = task
                        .error_detail()
                        .unwrap_or_else(|| "Unknown error".to_string());
                    return Err(Error::task_failed(detail));
                }
                TaskStatus::Other(ref status) => {
                    return Err(Error::unexpected_status(status.clone()));
                }
            }
        }

        Err(Error::timeout(max_attempts))
    }

    /// Fetch the current state of a task.
    pub async fn fetch_task(&self, api_key: &str, task_id: &str) -> Result<Task, Error> {
        let endpoint = self.config.task_endpoint(task_id);

        let response = self
            .http
            .get(&endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .timeout(self.poll.poll_timeout)
            .send()
            .await
            .map_err(|e| Error::api(&endpoint, 0, format!("Poll request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(&endpoint, response).await);
        }

        response.json().await.map_err(|e| {
            Error::api(&endpoint, status.as_u16(), format!("Failed to parse task status: {}", e))
        })
    }

    /// Download the finished video. The URL is pre-signed, so no credential is sent.
    pub async fn download_video(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self
            .http
            .get(url)
            .timeout(self.poll.download_timeout)
            .send()
            .await
            .map_err(|e| Error::api(url, 0, format!("Download failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(url, response).await);
        }

        let bytes = response.bytes().await.map_err(|e| {
            Error::api(url, status.as_u16(), format!("Failed to read video body: {}", e))
        })?;

        Ok(bytes.to_vec())
    }

    /// Write the video bytes, creating parent directories and overwriting any
    /// existing file. Returns the absolute path written.
    pub async fn save_video(&self, save_path: &str, bytes: &[u8]) -> Result<PathBuf, Error> {
        let path = self.resolve_path(save_path.trim());

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        Ok(path)
    }

    /// Resolve a caller-supplied path against the base directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_against(&self.base_dir, Path::new(path))
    }
}

/// Join `path` onto `base` (absolute paths win) and fold `.` and `..`
/// lexically, without touching the file system.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Build an API error from a non-success response.
async fn api_error(endpoint: &str, response: reqwest::Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Error::api(endpoint, status.as_u16(), extract_error_message(&body, &status.to_string()))
}

/// Pull the most specific message out of an error body: `error.message`,
/// then a string `error`, then the raw body, then `fallback`.
pub fn extract_error_message(body: &str, fallback: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.error.as_ref().and_then(ErrorDetail::message) {
            return message.to_string();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        fallback.to_string()
    } else {
        body.to_string()
    }
}

/// Caller-facing message for a workflow error. `model` is the canonical id
/// the task was submitted with.
pub fn failure_message(err: &Error, model: &str) -> String {
    match err {
        Error::Config(ConfigError::MissingEnvVar(var)) => format!(
            "Error: `{}` not set. Please run `export {}='your_key'`.",
            var, var
        ),
        Error::Config(e) => format!("Configuration error: {}", e),
        Error::Api { status_code: 401, .. } => {
            format!("Invalid API Key. Please check your {}.", API_KEY_VAR)
        }
        Error::Api { status_code: 403, .. } => format!(
            "Access Denied. Ensure the endpoint for '{}' is active in Volcengine Ark.",
            model
        ),
        Error::Api { message, .. } => format!("Video Gen Failed: {}", message),
        other => format!("Video Gen Failed: {}", other),
    }
}

// =============================================================================
// API Request/Response Types
// =============================================================================

/// Ark content generation task request.
#[derive(Debug, Serialize)]
pub struct CreateTaskRequest {
    /// Model or endpoint id
    pub model: String,
    /// Prompt text followed by an optional first-frame image
    pub content: Vec<ContentItem>,
}

/// One entry of the task `content` array.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// Prompt text with parameter flags
    Text { text: String },
    /// Image given as a URL (here always a base64 data URL)
    ImageUrl { image_url: ImageUrl, role: String },
}

/// Image URL wrapper.
#[derive(Debug, Serialize)]
pub struct ImageUrl {
    /// `data:` URL or http(s) URL
    pub url: String,
}

/// Task creation response.
#[derive(Debug, Deserialize)]
pub struct CreateTaskResponse {
    /// Task id used for polling
    pub id: String,
}

/// Task status as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Still running (`processing`, `queued`, `running`)
    Processing,
    /// Finished with a video (`succeeded`, `succeed`)
    Succeeded,
    /// Finished with an error
    Failed,
    /// Any other value, kept verbatim
    Other(String),
}

impl TaskStatus {
    /// Map a raw status string onto the known vocabulary.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "processing" | "queued" | "running" => TaskStatus::Processing,
            "succeeded" | "succeed" => TaskStatus::Succeeded,
            "failed" => TaskStatus::Failed,
            _ => TaskStatus::Other(raw.to_string()),
        }
    }

    /// Whether polling should stop at this status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskStatus::Processing)
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(TaskStatus::parse(&raw))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Processing => write!(f, "processing"),
            TaskStatus::Succeeded => write!(f, "succeeded"),
            TaskStatus::Failed => write!(f, "failed"),
            TaskStatus::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Task status response.
#[derive(Debug, Deserialize)]
pub struct Task {
    /// Task id
    #[serde(default)]
    pub id: Option<String>,
    /// Current status
    pub status: TaskStatus,
    /// Output content once succeeded
    #[serde(default)]
    pub content: Option<TaskContent>,
    /// Legacy top-level video URL
    #[serde(default)]
    pub video_url: Option<String>,
    /// Error once failed
    #[serde(default)]
    pub error: Option<ErrorDetail>,
    /// Legacy error message field
    #[serde(default)]
    pub error_message: Option<String>,
}

impl Task {
    /// URL of the generated video, preferring `content.video_url`.
    pub fn video_url(&self) -> Option<&str> {
        self.content
            .as_ref()
            .and_then(|content| content.video_url.as_deref())
            .or(self.video_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    /// Remote-supplied failure detail, if any.
    pub fn error_detail(&self) -> Option<String> {
        self.error
            .as_ref()
            .and_then(ErrorDetail::message)
            .or_else(|| {
                self.error_message
                    .as_deref()
                    .filter(|message| !message.trim().is_empty())
            })
            .map(str::to_string)
    }
}

/// Output content of a succeeded task.
#[derive(Debug, Deserialize)]
pub struct TaskContent {
    /// Pre-signed URL of the generated video
    #[serde(default)]
    pub video_url: Option<String>,
    /// Pre-signed URL of the last frame, when requested
    #[serde(default)]
    pub last_frame_url: Option<String>,
}

/// Error detail, either a bare string or `{ "code": ..., "message": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Plain message
    Message(String),
    /// Structured error object
    Structured {
        /// Error message
        #[serde(default)]
        message: Option<String>,
    },
}

impl ErrorDetail {
    /// Non-blank message text.
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            ErrorDetail::Message(message) => Some(message.as_str()),
            ErrorDetail::Structured { message } => message.as_deref(),
        };
        message.filter(|m| !m.trim().is_empty())
    }
}

/// Error response body.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Error detail
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

// =============================================================================
// Result Types
// =============================================================================

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct VideoGenerateResult {
    /// Absolute path of the saved video
    pub saved_path: PathBuf,
    /// Model id the task ran on
    pub model: String,
    /// Remote task id
    pub task_id: String,
    /// Bytes written
    pub size_bytes: u64,
}

/// Outcome of one tool invocation, success or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Whether the video was generated and saved
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// Where the video was written, on success
    pub saved_path: Option<PathBuf>,
}

impl ToolResult {
    /// Successful outcome for a generated video.
    pub fn success(result: &VideoGenerateResult) -> Self {
        Self {
            success: true,
            message: format!(
                "Video success! Saved to: {}\nModel: {}\nTask ID: {}",
                result.saved_path.display(),
                result.model,
                result.task_id
            ),
            saved_path: Some(result.saved_path.clone()),
        }
    }

    /// Failed outcome with a caller-facing message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            saved_path: None,
        }
    }
}
