// User-facing operations on the application state

use std::time::{Duration, Instant};

use crate::api::BatchPlan;
use crate::prefs::Preferences;
use crate::ui::state::{
    AppState, BatchRun, GenerationPhase, Loadable, PostsModalState, QuickAction,
    ScheduledAction, UnknownView, View,
};
use crate::ui::toast::ToastKind;

/// Delay between navigating to the generate view and firing a quick generation
pub const QUICK_GENERATE_DELAY: Duration = Duration::from_millis(300);

/// How long the batch dialog lingers after the last unit settles
pub const BATCH_DISMISS_DELAY: Duration = Duration::from_secs(2);

/// Export success is announced optimistically after this delay
pub const EXPORT_NOTICE_DELAY: Duration = Duration::from_secs(1);

impl AppState {
    /// Kick off startup loads and the background refresh timer
    pub fn start(&mut self, now: Instant) {
        tracing::info!(
            backend = self.config.api.base_url.as_str(),
            theme = %self.theme,
            "dashboard starting"
        );

        self.load_initial_data();

        let interval = self.config.refresh.analytics_interval();
        self.refresh_task = Some(self.scheduler.schedule_every(
            now,
            interval,
            ScheduledAction::RefreshAnalytics,
        ));
    }

    /// Cancel every pending timer
    pub fn shutdown(&mut self) {
        self.scheduler.clear();
        self.refresh_task = None;
        self.batch.dismiss_task = None;
        tracing::info!("dashboard stopped");
    }

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(?kind, message = message.as_str(), "toast");
        self.toasts.push(kind, message, Instant::now());
    }

    // Navigation

    pub fn navigate(&mut self, view: View) {
        if self.current_view != view {
            tracing::debug!(from = %self.current_view, to = %view, "navigate");
        }
        self.current_view = view;
        self.render_view(view);
    }

    /// Navigate using a view identifier; unknown identifiers leave state untouched
    pub fn navigate_by_name(&mut self, name: &str) -> Result<(), UnknownView> {
        match name.parse::<View>() {
            Ok(view) => {
                self.navigate(view);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(view = name, "ignoring navigation to unknown view");
                Err(e)
            }
        }
    }

    /// Run the per-view refresh that accompanies showing a view
    fn render_view(&mut self, view: View) {
        match view {
            View::Dashboard => self.refresh_recent_posts(),
            View::Library => self.refresh_library(),
            View::Generate => self.sync_persona_selection(),
            View::Analytics | View::Calendar | View::Settings => {}
        }
    }

    fn sync_persona_selection(&mut self) {
        let persona = self.current_persona_id().to_string();
        let idx = self.personas.keys().position(|id| *id == persona);
        self.generate.persona_list.select(idx);
    }

    pub fn select_account(&mut self, account_id: &str) {
        if !self.accounts.is_empty() && !self.accounts.contains_key(account_id) {
            tracing::warn!(account = account_id, "selecting account missing from registry");
        }

        self.current_account = account_id.to_string();
        tracing::debug!(account = account_id, "account selected");

        // Other views do not show per-account data and refresh lazily
        if self.current_view.depends_on_account() {
            self.render_view(self.current_view);
        }
    }

    /// Step through the account chips
    pub fn cycle_account(&mut self, forward: bool) {
        let ids = self.account_ids();
        if ids.is_empty() {
            return;
        }

        let next = match ids.iter().position(|id| *id == self.current_account) {
            Some(i) if forward => (i + 1) % ids.len(),
            Some(i) => (i + ids.len() - 1) % ids.len(),
            None => 0,
        };
        let id = ids[next].clone();
        self.select_account(&id);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();

        if let Err(e) = self.prefs.save(&Preferences { theme: self.theme }) {
            tracing::warn!(error = %format!("{:#}", e), "could not persist theme");
        }

        self.notify(
            ToastKind::Success,
            format!("Theme changed to {} mode", self.theme),
        );
    }

    pub fn view_account_details(&mut self, account_id: &str) {
        self.select_account(account_id);
        self.navigate(View::Analytics);
    }

    // Data loading

    pub fn load_initial_data(&mut self) {
        self.dispatcher.load_accounts();
    }

    pub fn load_analytics(&mut self) {
        self.dispatcher.load_analytics();
    }

    pub fn refresh_recent_posts(&mut self) {
        let request_id = self.dispatcher.next_request_id();
        self.dashboard.recent_request = Some(request_id);
        self.dashboard.recent = Loadable::Loading;
        self.dispatcher.load_recent_posts(request_id);
    }

    pub fn refresh_library(&mut self) {
        let request_id = self.dispatcher.next_request_id();
        self.library.request = Some(request_id);
        self.library.files = Loadable::Loading;
        self.dispatcher
            .load_files(request_id, self.current_account.clone());
    }

    // Generation

    /// Start a generation for the current account. Returns false while one is running.
    pub fn generate(&mut self) -> bool {
        if !self.generate.trigger_enabled() {
            tracing::debug!("generate ignored, request already running");
            return false;
        }

        self.generate.phase = GenerationPhase::Generating;
        self.generate.result = None;

        tracing::info!(account = self.current_account.as_str(), "generating post");
        self.dispatcher.generate(self.current_account.clone());
        true
    }

    pub fn regenerate(&mut self) -> bool {
        self.generate()
    }

    pub fn quick_generate(&mut self) {
        self.navigate(View::Generate);
        self.scheduler.schedule_once(
            Instant::now(),
            QUICK_GENERATE_DELAY,
            ScheduledAction::StartGeneration,
        );
    }

    /// Copy the generated post; does nothing before a result exists
    pub fn copy_generated_post(&mut self) {
        let Some(text) = self.generate.result.as_ref().map(|p| p.content.clone()) else {
            return;
        };
        self.copy_text(&text);
    }

    pub fn save_to_library(&mut self) {
        self.notify(ToastKind::Success, "Post saved to library!");
    }

    pub fn run_quick_action(&mut self, action: QuickAction) {
        match action {
            QuickAction::QuickGenerate => self.quick_generate(),
            QuickAction::AdvancedGenerate => self.navigate(View::Generate),
            QuickAction::BatchGenerate => self.open_batch_dialog(),
            QuickAction::ViewAnalytics => self.navigate(View::Analytics),
        }
    }

    // Batch generation

    pub fn open_batch_dialog(&mut self) {
        self.batch.visible = true;
    }

    pub fn close_batch_dialog(&mut self) {
        self.batch.visible = false;
        if let Some(task) = self.batch.dismiss_task.take() {
            self.scheduler.cancel(task);
        }
        if !self.batch.is_running() {
            self.batch.run = None;
            self.batch.status.clear();
        }
    }

    /// Start a batch from the dialog selections. Returns false if one is already running.
    pub fn start_batch(&mut self) -> bool {
        if self.batch.is_running() {
            return false;
        }

        // A finished run's linger timer must not close the new run's dialog
        if let Some(task) = self.batch.dismiss_task.take() {
            self.scheduler.cancel(task);
        }

        let plan = BatchPlan::new(self.batch.selected_accounts(), self.batch.count as usize);

        tracing::info!(
            run = %plan.run_id,
            accounts = ?plan.accounts,
            count = plan.count,
            total = plan.total(),
            "batch started"
        );

        self.batch.run = Some(BatchRun {
            run_id: plan.run_id,
            completed: 0,
            total: plan.total(),
            finished: false,
        });
        self.batch.status = format!("Generated 0 of {} posts...", plan.total());
        self.dispatcher.run_batch(plan);
        true
    }

    // Library

    /// The `Generate Now` prompt shown for an empty library
    pub fn activate_library_cta(&mut self) -> bool {
        if self.library.is_empty_state() {
            self.navigate(View::Generate);
            true
        } else {
            false
        }
    }

    pub fn view_selected_file(&mut self) {
        let Some(file) = self.library.selected_file() else {
            return;
        };

        match file.txt_path.clone() {
            Some(txt) => self.dispatcher.open_file(txt),
            None => {
                let name = file.name.clone();
                self.notify(
                    ToastKind::Info,
                    format!("No text version available for {name}"),
                );
            }
        }
    }

    pub fn download_selected_file(&mut self) {
        let Some(file) = self.library.selected_file() else {
            return;
        };

        match file.pdf_path.clone() {
            Some(pdf) => {
                self.notify(ToastKind::Info, format!("Downloading {pdf}..."));
                let dir = self.config.library.resolved_download_dir();
                self.dispatcher.download(pdf, dir);
            }
            None => {
                let name = file.name.clone();
                self.notify(ToastKind::Info, format!("No PDF available for {name}"));
            }
        }
    }

    /// Fire the export request and announce completion on a timer
    pub fn export_library(&mut self) {
        self.notify(ToastKind::Info, "Exporting as CSV...");
        self.dispatcher.export("csv".to_string());
        self.scheduler.schedule_once(
            Instant::now(),
            EXPORT_NOTICE_DELAY,
            ScheduledAction::ExportComplete,
        );
    }

    pub fn open_posts_modal(&mut self, title: impl Into<String>, posts: Vec<String>) {
        self.posts_modal = Some(PostsModalState::new(title, posts));
    }

    /// Copy the highlighted post of the open library file
    pub fn copy_modal_post(&mut self) {
        let Some(text) = self
            .posts_modal
            .as_ref()
            .and_then(|m| m.selected_post())
            .map(str::to_string)
        else {
            return;
        };
        self.copy_text(&text);
    }

    pub fn close_posts_modal(&mut self) {
        self.posts_modal = None;
    }

    pub fn copy_text(&mut self, text: &str) {
        match self.clipboard.copy(text) {
            Ok(()) => {
                tracing::debug!(chars = text.chars().count(), "copied to clipboard");
                self.notify(ToastKind::Success, "Copied to clipboard!");
            }
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "clipboard copy failed");
                self.notify(ToastKind::Error, "Failed to copy");
            }
        }
    }

    // Calendar and settings

    pub fn view_day_content(&mut self, day: u32) {
        self.notify(ToastKind::Info, format!("Viewing content for day {day}"));
    }

    pub fn edit_account(&mut self, account_id: &str) {
        tracing::debug!(account = account_id, "edit account requested");
        self.notify(ToastKind::Info, "Edit account feature coming soon");
    }

    // Timers

    /// Run due scheduled work and expire old toasts
    pub fn tick(&mut self, now: Instant) {
        for action in self.scheduler.poll(now) {
            self.run_scheduled(action);
        }
        self.toasts.expire(now);
    }

    fn run_scheduled(&mut self, action: ScheduledAction) {
        match action {
            ScheduledAction::RefreshAnalytics => {
                if self.current_view.auto_refreshes_analytics() {
                    tracing::debug!(view = %self.current_view, "periodic analytics refresh");
                    self.load_analytics();
                }
            }
            ScheduledAction::StartGeneration => {
                self.generate();
            }
            ScheduledAction::DismissBatch => {
                self.batch.dismiss_task = None;
                self.close_batch_dialog();
            }
            ScheduledAction::ExportComplete => {
                self.notify(ToastKind::Success, "Export complete!");
            }
        }
    }
}
