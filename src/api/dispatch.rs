// Request dispatcher: runs backend calls off the UI thread and reports back over a channel

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::Context;
use uuid::Uuid;

use super::client::Backend;
use super::error::ApiError;
use super::types::{AccountsPayload, AnalyticsSnapshot, GenerateResponse, LibraryFile, RecentPost};

/// Result of a backend call, delivered to the UI loop
#[derive(Debug, Clone)]
pub enum ApiMessage {
    AccountsLoaded(Result<AccountsPayload, ApiError>),

    AnalyticsLoaded(Result<AnalyticsSnapshot, ApiError>),

    RecentPostsLoaded {
        request_id: u64,
        result: Result<Vec<RecentPost>, ApiError>,
    },

    GenerationFinished(Result<GenerateResponse, ApiError>),

    /// One batch unit settled (success or failure)
    BatchProgress {
        run_id: Uuid,
        completed: usize,
        total: usize,
    },

    BatchFinished {
        run_id: Uuid,
        attempted: usize,
        succeeded: usize,
    },

    FilesLoaded {
        request_id: u64,
        account_id: String,
        result: Result<Vec<LibraryFile>, ApiError>,
    },

    FileOpened {
        filename: String,
        result: Result<Vec<String>, ApiError>,
    },

    DownloadFinished {
        filename: String,
        result: Result<PathBuf, String>,
    },

    ExportSettled {
        format: String,
        result: Result<(), ApiError>,
    },
}

/// A batch run: every account gets `count` sequential generation requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    pub run_id: Uuid,
    pub accounts: Vec<String>,
    pub count: usize,
}

impl BatchPlan {
    pub fn new(accounts: Vec<String>, count: usize) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            accounts,
            count,
        }
    }

    pub fn total(&self) -> usize {
        self.accounts.len() * self.count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchMode {
    /// One thread per request
    Threaded,
    /// Run on the caller's thread; messages are still queued on the channel
    Inline,
}

/// Hands backend calls to worker threads and collects their results
pub struct Dispatcher {
    backend: Arc<dyn Backend>,
    mode: DispatchMode,
    tx: Sender<ApiMessage>,
    rx: Receiver<ApiMessage>,
    in_flight: Arc<Mutex<usize>>,
    next_request_id: u64,
}

impl Dispatcher {
    /// Create a dispatcher that runs every request on its own thread
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self::with_mode(backend, DispatchMode::Threaded)
    }

    /// Create a dispatcher that completes requests before returning.
    ///
    /// Results still arrive through the channel, so callers drain it the same way.
    pub fn inline(backend: Arc<dyn Backend>) -> Self {
        Self::with_mode(backend, DispatchMode::Inline)
    }

    fn with_mode(backend: Arc<dyn Backend>, mode: DispatchMode) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            backend,
            mode,
            tx,
            rx,
            in_flight: Arc::new(Mutex::new(0)),
            next_request_id: 0,
        }
    }

    /// Get the receiver for completed requests
    pub fn receiver(&self) -> &Receiver<ApiMessage> {
        &self.rx
    }

    /// Number of requests (or batch runs) that have not settled yet
    pub fn in_flight(&self) -> usize {
        *self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Allocate a sequence number for a request whose response may go stale
    pub fn next_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    fn spawn<F>(&self, label: &'static str, job: F)
    where
        F: FnOnce(&dyn Backend, &Sender<ApiMessage>) + Send + 'static,
    {
        let backend = self.backend.clone();
        let tx = self.tx.clone();
        let in_flight = self.in_flight.clone();

        let run = move || {
            {
                let mut count = in_flight.lock().unwrap_or_else(|e| e.into_inner());
                *count += 1;
            }

            tracing::debug!(request = label, "dispatch");
            job(backend.as_ref(), &tx);

            {
                let mut count = in_flight.lock().unwrap_or_else(|e| e.into_inner());
                *count -= 1;
            }
        };

        match self.mode {
            DispatchMode::Inline => run(),
            DispatchMode::Threaded => {
                let spawned = thread::Builder::new()
                    .name(format!("api-{label}"))
                    .spawn(run);
                if let Err(e) = spawned {
                    tracing::error!(request = label, error = %e, "failed to spawn request thread");
                }
            }
        }
    }

    pub fn load_accounts(&self) {
        self.spawn("accounts", |backend, tx| {
            let _ = tx.send(ApiMessage::AccountsLoaded(backend.accounts()));
        });
    }

    pub fn load_analytics(&self) {
        self.spawn("analytics", |backend, tx| {
            let _ = tx.send(ApiMessage::AnalyticsLoaded(backend.analytics()));
        });
    }

    pub fn load_recent_posts(&self, request_id: u64) {
        self.spawn("recent-posts", move |backend, tx| {
            let _ = tx.send(ApiMessage::RecentPostsLoaded {
                request_id,
                result: backend.recent_posts(),
            });
        });
    }

    pub fn generate(&self, account_id: String) {
        self.spawn("generate", move |backend, tx| {
            let _ = tx.send(ApiMessage::GenerationFinished(backend.generate(&account_id)));
        });
    }

    /// Run a batch strictly sequentially on a single worker.
    ///
    /// Unit failures are logged and never stop the loop.
    pub fn run_batch(&self, plan: BatchPlan) {
        self.spawn("batch", move |backend, tx| {
            let total = plan.total();
            let mut completed = 0;
            let mut succeeded = 0;

            for account in &plan.accounts {
                for unit in 0..plan.count {
                    match backend.generate(account) {
                        Ok(response) if response.success => succeeded += 1,
                        Ok(response) => tracing::warn!(
                            run = %plan.run_id,
                            account = account.as_str(),
                            unit,
                            error = response.error.as_deref().unwrap_or("unknown"),
                            "batch unit rejected"
                        ),
                        Err(e) => tracing::warn!(
                            run = %plan.run_id,
                            account = account.as_str(),
                            unit,
                            error = %e,
                            "batch unit failed"
                        ),
                    }

                    completed += 1;
                    let _ = tx.send(ApiMessage::BatchProgress {
                        run_id: plan.run_id,
                        completed,
                        total,
                    });
                }
            }

            let _ = tx.send(ApiMessage::BatchFinished {
                run_id: plan.run_id,
                attempted: completed,
                succeeded,
            });
        });
    }

    pub fn load_files(&self, request_id: u64, account_id: String) {
        self.spawn("files", move |backend, tx| {
            let result = backend.files(&account_id);
            let _ = tx.send(ApiMessage::FilesLoaded {
                request_id,
                account_id,
                result,
            });
        });
    }

    pub fn open_file(&self, filename: String) {
        self.spawn("view", move |backend, tx| {
            let result = backend.view_file(&filename);
            let _ = tx.send(ApiMessage::FileOpened { filename, result });
        });
    }

    /// Fetch a file and write it into `dir`
    pub fn download(&self, filename: String, dir: PathBuf) {
        self.spawn("download", move |backend, tx| {
            let result = backend
                .download(&filename)
                .map_err(anyhow::Error::from)
                .and_then(|bytes| save_download(&dir, &filename, &bytes))
                .map_err(|e| format!("{:#}", e));
            let _ = tx.send(ApiMessage::DownloadFinished { filename, result });
        });
    }

    /// Fire-and-forget export request
    pub fn export(&self, format: String) {
        self.spawn("export", move |backend, tx| {
            let result = backend.export(&format);
            let _ = tx.send(ApiMessage::ExportSettled { format, result });
        });
    }
}

fn save_download(dir: &Path, filename: &str, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    // Only keep the final component; the backend name is not trusted as a path
    let name = Path::new(filename)
        .file_name()
        .with_context(|| format!("Invalid download name: {}", filename))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create download directory: {}", dir.display()))?;

    let path = dir.join(name);
    std::fs::write(&path, bytes)
        .with_context(|| format!("Failed to write download: {}", path.display()))?;

    Ok(path)
}
