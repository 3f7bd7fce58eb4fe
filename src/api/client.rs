// Backend access: the trait the dashboard talks to and its HTTP implementation

use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::ApiError;
use super::types::{
    AccountsPayload, AnalyticsSnapshot, FilesPayload, GenerateRequest, GenerateResponse,
    LibraryFile, RecentPost, RecentPostsPayload, ViewPayload,
};

/// Everything the dashboard needs from the generator backend.
///
/// Calls block; the dispatcher runs them off the UI thread.
pub trait Backend: Send + Sync {
    fn accounts(&self) -> Result<AccountsPayload, ApiError>;
    fn analytics(&self) -> Result<AnalyticsSnapshot, ApiError>;
    fn recent_posts(&self) -> Result<Vec<RecentPost>, ApiError>;
    fn generate(&self, account_id: &str) -> Result<GenerateResponse, ApiError>;
    fn files(&self, account_id: &str) -> Result<Vec<LibraryFile>, ApiError>;
    fn view_file(&self, filename: &str) -> Result<Vec<String>, ApiError>;
    fn download(&self, filename: &str) -> Result<Vec<u8>, ApiError>;
    fn export(&self, format: &str) -> Result<(), ApiError>;
}

pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::Transport(format!("invalid backend URL {base_url}: {e}")))?;

        // No request timeout: a hung request leaves its UI affordance waiting
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("backend URL cannot be a base: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.json()?)
    }
}

/// Decode a body even when the status is not 2xx, the way the generate endpoint reports failures
fn json_any_status<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let path = response.url().path().to_string();
    let bytes = response.bytes()?;
    serde_json::from_slice(&bytes).map_err(|e| {
        if status.is_success() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Status {
                status: status.as_u16(),
                path,
            }
        }
    })
}

impl Backend for HttpBackend {
    fn accounts(&self) -> Result<AccountsPayload, ApiError> {
        self.get_json(&["api", "accounts"])
    }

    fn analytics(&self) -> Result<AnalyticsSnapshot, ApiError> {
        self.get_json(&["api", "analytics"])
    }

    fn recent_posts(&self) -> Result<Vec<RecentPost>, ApiError> {
        let payload: RecentPostsPayload = self.get_json(&["api", "recent-posts"])?;
        Ok(payload.posts)
    }

    fn generate(&self, account_id: &str) -> Result<GenerateResponse, ApiError> {
        let url = self.endpoint(&["api", "generate"])?;
        tracing::debug!(%url, account_id, "POST");
        let response = self
            .client
            .post(url)
            .json(&GenerateRequest { account_id })
            .send()?;
        json_any_status(response)
    }

    fn files(&self, account_id: &str) -> Result<Vec<LibraryFile>, ApiError> {
        let url = self.endpoint(&["api", "files"])?;
        tracing::debug!(%url, account_id, "GET");
        let payload: FilesPayload = self
            .client
            .get(url)
            .query(&[("account", account_id)])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(payload.files)
    }

    fn view_file(&self, filename: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(&["api", "view", filename])?;
        tracing::debug!(%url, "GET");
        let payload: ViewPayload = json_any_status(self.client.get(url).send()?)?;
        match (payload.posts, payload.error) {
            (Some(posts), _) => Ok(posts),
            (None, Some(error)) => Err(ApiError::Rejected(error)),
            (None, None) => Err(ApiError::Decode("missing posts".to_string())),
        }
    }

    fn download(&self, filename: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(&["api", "download", filename])?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }

    fn export(&self, format: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "export", format])?;
        tracing::debug!(%url, "GET");
        self.client.get(url).send()?.error_for_status()?;
        Ok(())
    }
}
