use super::*;

use crate::api::{ApiError, ApiMessage, GenerateResponse};
use crate::ui::state::{GenerationPhase, Loadable, ScheduledAction};
use crate::ui::toast::ToastKind;

impl AppState {
    /// Apply every completed backend call waiting on the channel
    pub fn process_pending(&mut self) -> usize {
        self.drain_api_messages(usize::MAX)
    }

    /// Apply at most `max` completed backend calls
    pub fn drain_api_messages(&mut self, max: usize) -> usize {
        let mut handled = 0;
        while handled < max {
            match self.dispatcher.receiver().try_recv() {
                Ok(msg) => {
                    handle_api_message(msg, self);
                    handled += 1;
                }
                Err(_) => break,
            }
        }
        handled
    }
}

pub(crate) fn handle_api_message(msg: ApiMessage, state: &mut AppState) {
    match msg {
        ApiMessage::AccountsLoaded(result) => {
            match result {
                Ok(payload) => {
                    tracing::info!(
                        accounts = payload.accounts.len(),
                        personas = payload.personas.len(),
                        "registry loaded"
                    );
                    state.accounts = payload.accounts;
                    state.personas = payload.personas;
                    state.registry_loaded = true;

                    // The placeholder selection gives way to a real account
                    if !state.accounts.is_empty()
                        && !state.accounts.contains_key(&state.current_account)
                    {
                        if let Some(first) = state.accounts.keys().next().cloned() {
                            state.current_account = first;
                        }
                    }

                    state.load_analytics();
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to load accounts");
                    state.notify(ToastKind::Error, format!("Error loading data: {e}"));
                }
            }

            // The initial render waits for the registry either way
            state.navigate(state.current_view);
        }

        ApiMessage::AnalyticsLoaded(result) => match result {
            Ok(snapshot) => {
                tracing::debug!(total_posts = snapshot.total_posts(), "analytics updated");
                state.analytics = snapshot;
            }
            Err(e) => tracing::warn!(error = %e, "failed to load analytics"),
        },

        ApiMessage::RecentPostsLoaded { request_id, result } => {
            if state.dashboard.recent_request != Some(request_id) {
                tracing::debug!(request_id, "discarding stale recent posts");
                return;
            }
            state.dashboard.recent_request = None;
            state.dashboard.recent = match result {
                Ok(posts) => Loadable::Ready(posts),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load recent posts");
                    Loadable::Failed("Error loading recent posts".to_string())
                }
            };
        }

        ApiMessage::GenerationFinished(result) => {
            finish_generation(result, state);
        }

        ApiMessage::BatchProgress {
            run_id,
            completed,
            total,
        } => {
            let Some(run) = state.batch.run.as_mut().filter(|r| r.run_id == run_id) else {
                return;
            };
            run.completed = completed;
            run.total = total;
            state.batch.status = format!("Generated {completed} of {total} posts...");
        }

        ApiMessage::BatchFinished {
            run_id,
            attempted,
            succeeded,
        } => {
            tracing::info!(run = %run_id, attempted, succeeded, "batch finished");

            let Some(run) = state.batch.run.as_mut().filter(|r| r.run_id == run_id) else {
                return;
            };
            run.finished = true;
            state.batch.status = "Batch generation complete!".to_string();
            state.notify(
                ToastKind::Success,
                format!("Successfully generated {attempted} posts!"),
            );

            if let Some(task) = state.batch.dismiss_task.take() {
                state.scheduler.cancel(task);
            }
            state.batch.dismiss_task = Some(state.scheduler.schedule_once(
                Instant::now(),
                crate::ui::controller::BATCH_DISMISS_DELAY,
                ScheduledAction::DismissBatch,
            ));
        }

        ApiMessage::FilesLoaded {
            request_id,
            account_id,
            result,
        } => {
            if state.library.request != Some(request_id) {
                tracing::debug!(request_id, account = account_id.as_str(), "discarding stale library listing");
                return;
            }
            state.library.request = None;

            match result {
                Ok(files) => {
                    tracing::debug!(account = account_id.as_str(), files = files.len(), "library loaded");
                    state
                        .library
                        .table
                        .select(if files.is_empty() { None } else { Some(0) });
                    state.library.files = Loadable::Ready(files);
                }
                Err(e) => {
                    tracing::warn!(account = account_id.as_str(), error = %e, "failed to load library");
                    state.library.table.select(None);
                    state.library.files = Loadable::Failed("Error loading library".to_string());
                }
            }
        }

        ApiMessage::FileOpened { filename, result } => match result {
            Ok(posts) => state.open_posts_modal(filename, posts),
            Err(e) => {
                tracing::warn!(file = filename.as_str(), error = %e, "failed to open file");
                state.notify(ToastKind::Error, "Error loading file");
            }
        },

        ApiMessage::DownloadFinished { filename, result } => match result {
            Ok(path) => {
                tracing::info!(file = filename.as_str(), path = %path.display(), "download saved");
                state.notify(ToastKind::Success, format!("Saved to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!(file = filename.as_str(), error = e.as_str(), "download failed");
                state.notify(ToastKind::Error, format!("Download failed: {e}"));
            }
        },

        ApiMessage::ExportSettled { format, result } => match result {
            Ok(()) => tracing::debug!(format = format.as_str(), "export request settled"),
            Err(e) => tracing::warn!(format = format.as_str(), error = %e, "export request failed"),
        },
    }
}

fn finish_generation(result: Result<GenerateResponse, ApiError>, state: &mut AppState) {
    match result {
        Ok(response) if response.success => {
            let post = response.posts.into_iter().next();
            tracing::info!(
                account = state.current_account.as_str(),
                score = post.as_ref().map(|p| p.score()),
                "post generated"
            );
            state.generate.result = post;
            state.notify(ToastKind::Success, "Post generated successfully!");
            state.load_analytics();
        }
        Ok(response) => {
            let reason = response
                .error
                .unwrap_or_else(|| "unknown error".to_string());
            tracing::warn!(error = reason.as_str(), "generation rejected");
            state.notify(ToastKind::Error, format!("Generation failed: {reason}"));
        }
        Err(e) => {
            tracing::warn!(error = %e, "generation request failed");
            state.notify(ToastKind::Error, format!("Network error: {e}"));
        }
    }

    // Every settle path re-enables the trigger
    state.generate.phase = GenerationPhase::Idle;
}
