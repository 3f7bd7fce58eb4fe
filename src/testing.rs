// Fixtures for unit tests

use std::sync::{Arc, Mutex};

use anyhow::bail;

use crate::api::{
    AccountsPayload, AnalyticsSnapshot, ApiError, Backend, Dispatcher, GenerateResponse,
    LibraryFile, RecentPost,
};
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::prefs::PreferencesStore;
use crate::ui::state::AppState;

/// Backend whose every call fails at the transport level
pub(crate) struct OfflineBackend;

fn offline<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("connection refused".into()))
}

impl Backend for OfflineBackend {
    fn accounts(&self) -> Result<AccountsPayload, ApiError> {
        offline()
    }
    fn analytics(&self) -> Result<AnalyticsSnapshot, ApiError> {
        offline()
    }
    fn recent_posts(&self) -> Result<Vec<RecentPost>, ApiError> {
        offline()
    }
    fn generate(&self, _account_id: &str) -> Result<GenerateResponse, ApiError> {
        offline()
    }
    fn files(&self, _account_id: &str) -> Result<Vec<LibraryFile>, ApiError> {
        offline()
    }
    fn view_file(&self, _filename: &str) -> Result<Vec<String>, ApiError> {
        offline()
    }
    fn download(&self, _filename: &str) -> Result<Vec<u8>, ApiError> {
        offline()
    }
    fn export(&self, _format: &str) -> Result<(), ApiError> {
        offline()
    }
}

/// Clipboard that keeps copied text in memory, or refuses every copy
#[derive(Clone, Default)]
pub(crate) struct MemoryClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
    pub broken: bool,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> anyhow::Result<()> {
        if self.broken {
            bail!("clipboard unavailable");
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Fresh state over an offline backend with in-memory preferences
pub(crate) fn offline_state() -> AppState {
    AppState::new(
        Config::default(),
        Dispatcher::inline(Arc::new(OfflineBackend)),
        PreferencesStore::in_memory(),
    )
    .with_clipboard(Box::new(MemoryClipboard::default()))
}
