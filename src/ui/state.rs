// Application state management

use crate::api::{
    Account, AnalyticsSnapshot, Dispatcher, GeneratedPost, LibraryFile, Persona, RecentPost,
};
use crate::clipboard::{Clipboard, TerminalClipboard};
use crate::config::Config;
use crate::prefs::PreferencesStore;
use crate::scheduler::{Scheduler, TaskId};
use crate::ui::theme::{Palette, Theme};
use crate::ui::toast::Toasts;
use ratatui::{
    layout::Rect,
    widgets::{ListState, TableState},
};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Account slots offered when the registry has not loaded, and in the batch dialog
pub const DEFAULT_ACCOUNTS: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Placeholder selection before the registry arrives
pub const PLACEHOLDER_ACCOUNT: &str = "A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Generate,
    Analytics,
    Calendar,
    Library,
    Settings,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::Generate,
        View::Analytics,
        View::Calendar,
        View::Library,
        View::Settings,
    ];

    /// Identifier used on the command line and in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Generate => "generate",
            Self::Analytics => "analytics",
            Self::Calendar => "calendar",
            Self::Library => "library",
            Self::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Generate => "Generate",
            Self::Analytics => "Analytics",
            Self::Calendar => "Calendar",
            Self::Library => "Library",
            Self::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Generate => 1,
            Self::Analytics => 2,
            Self::Calendar => 3,
            Self::Library => 4,
            Self::Settings => 5,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Views whose content changes with the selected account
    pub fn depends_on_account(self) -> bool {
        matches!(self, Self::Generate | Self::Library)
    }

    /// Views that keep analytics fresh in the background
    pub fn auto_refreshes_analytics(self) -> bool {
        matches!(self, Self::Dashboard | Self::Analytics)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Remote data a region is waiting for
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    NotRequested,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Work deferred through the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    RefreshAnalytics,
    StartGeneration,
    DismissBatch,
    ExportComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    QuickGenerate,
    AdvancedGenerate,
    BatchGenerate,
    ViewAnalytics,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::QuickGenerate,
        QuickAction::AdvancedGenerate,
        QuickAction::BatchGenerate,
        QuickAction::ViewAnalytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::QuickGenerate => "🚀 Quick Generate",
            Self::AdvancedGenerate => "⚙ Advanced Generate",
            Self::BatchGenerate => "📦 Batch Generate",
            Self::ViewAnalytics => "📊 View Analytics",
        }
    }
}

pub struct DashboardState {
    pub recent: Loadable<Vec<RecentPost>>,
    pub recent_request: Option<u64>,
    pub actions: ListState,
}

impl Default for DashboardState {
    fn default() -> Self {
        let mut actions = ListState::default();
        actions.select(Some(0));

        Self {
            recent: Loadable::NotRequested,
            recent_request: None,
            actions,
        }
    }
}

impl DashboardState {
    pub fn selected_action(&self) -> QuickAction {
        let idx = self.actions.selected().unwrap_or(0);
        QuickAction::ALL[idx.min(QuickAction::ALL.len() - 1)]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Generating,
}

#[derive(Default)]
pub struct GenerateState {
    pub phase: GenerationPhase,
    pub result: Option<GeneratedPost>,
    pub persona_list: ListState,
}

impl GenerateState {
    /// The generate control accepts presses
    pub fn trigger_enabled(&self) -> bool {
        self.phase == GenerationPhase::Idle
    }

    /// The loading indicator is shown
    pub fn loading(&self) -> bool {
        self.phase == GenerationPhase::Generating
    }
}

pub const BATCH_MIN_COUNT: u32 = 1;
pub const BATCH_MAX_COUNT: u32 = 50;
pub const BATCH_DEFAULT_COUNT: u32 = 10;

/// Progress of the batch currently shown in the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRun {
    pub run_id: Uuid,
    pub completed: usize,
    pub total: usize,
    pub finished: bool,
}

impl BatchRun {
    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            100
        } else {
            ((self.completed * 100) / self.total).min(100) as u16
        }
    }
}

/// Focusable rows of the batch dialog: the count slider, then one checkbox per account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFocus {
    Count,
    Account(usize),
}

impl BatchFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Count => Self::Account(0),
            Self::Account(i) if i + 1 < DEFAULT_ACCOUNTS.len() => Self::Account(i + 1),
            Self::Account(_) => Self::Count,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Count => Self::Account(DEFAULT_ACCOUNTS.len() - 1),
            Self::Account(0) => Self::Count,
            Self::Account(i) => Self::Account(i - 1),
        }
    }
}

pub struct BatchState {
    pub visible: bool,
    pub count: u32,
    pub selected: [bool; DEFAULT_ACCOUNTS.len()],
    pub focus: BatchFocus,
    pub run: Option<BatchRun>,
    pub status: String,
    pub dismiss_task: Option<TaskId>,
}

impl Default for BatchState {
    fn default() -> Self {
        Self {
            visible: false,
            count: BATCH_DEFAULT_COUNT,
            selected: [true, false, false, false, false],
            focus: BatchFocus::Count,
            run: None,
            status: String::new(),
            dismiss_task: None,
        }
    }
}

impl BatchState {
    pub fn selected_accounts(&self) -> Vec<String> {
        DEFAULT_ACCOUNTS
            .iter()
            .zip(self.selected.iter())
            .filter(|(_, on)| **on)
            .map(|(id, _)| id.to_string())
            .collect()
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count.clamp(BATCH_MIN_COUNT, BATCH_MAX_COUNT);
    }

    pub fn is_running(&self) -> bool {
        self.run.as_ref().is_some_and(|r| !r.finished)
    }
}

#[derive(Default)]
pub struct AnalyticsViewState {
    pub table: TableState,
}

pub struct CalendarState {
    pub selected_day: u32,
}

impl Default for CalendarState {
    fn default() -> Self {
        use chrono::Datelike;
        Self {
            selected_day: chrono::Local::now().day(),
        }
    }
}

#[derive(Default)]
pub struct LibraryState {
    pub files: Loadable<Vec<LibraryFile>>,
    pub request: Option<u64>,
    pub table: TableState,
}

impl LibraryState {
    pub fn selected_file(&self) -> Option<&LibraryFile> {
        let files = self.files.ready()?;
        files.get(self.table.selected()?)
    }

    /// Loaded and empty: the generate call-to-action is showing
    pub fn is_empty_state(&self) -> bool {
        self.files.ready().is_some_and(|f| f.is_empty())
    }
}

#[derive(Default)]
pub struct SettingsState {
    pub table: TableState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsModalState {
    pub title: String,
    pub posts: Vec<String>,
    pub scroll: u16,
    /// Post the copy key acts on
    pub selected: usize,
}

impl PostsModalState {
    pub fn new(title: impl Into<String>, posts: Vec<String>) -> Self {
        Self {
            title: title.into(),
            posts,
            scroll: 0,
            selected: 0,
        }
    }

    pub fn selected_post(&self) -> Option<&str> {
        self.posts.get(self.selected).map(String::as_str)
    }

    /// Move the selection and scroll its header to the top
    pub fn select(&mut self, idx: usize) {
        if self.posts.is_empty() {
            return;
        }
        self.selected = idx.min(self.posts.len() - 1);
        self.scroll = self.posts[..self.selected]
            .iter()
            .map(|post| post.lines().count() as u16 + 2)
            .sum();
    }
}

pub struct AppState {
    pub current_view: View,
    pub current_account: String,
    pub theme: Theme,
    pub accounts: BTreeMap<String, Account>,
    pub personas: BTreeMap<String, Persona>,
    pub registry_loaded: bool,
    pub analytics: AnalyticsSnapshot,
    pub dashboard: DashboardState,
    pub generate: GenerateState,
    pub batch: BatchState,
    pub analytics_view: AnalyticsViewState,
    pub calendar: CalendarState,
    pub library: LibraryState,
    pub settings: SettingsState,
    pub posts_modal: Option<PostsModalState>,
    pub toasts: Toasts,
    pub scheduler: Scheduler<ScheduledAction>,
    pub dispatcher: Dispatcher,
    pub prefs: PreferencesStore,
    pub clipboard: Box<dyn Clipboard>,
    pub config: Config,
    pub refresh_task: Option<TaskId>,
    pub viewport: Rect,
    pub nav_areas: Vec<(View, Rect)>, // Tab hit boxes from the last frame
    pub frame_count: u64,
    pub app_version: String,
}

impl AppState {
    pub fn new(config: Config, dispatcher: Dispatcher, prefs: PreferencesStore) -> Self {
        let theme = prefs.load().theme;

        Self {
            current_view: View::Dashboard,
            current_account: PLACEHOLDER_ACCOUNT.to_string(),
            theme,
            accounts: BTreeMap::new(),
            personas: BTreeMap::new(),
            registry_loaded: false,
            analytics: AnalyticsSnapshot::default(),
            dashboard: DashboardState::default(),
            generate: GenerateState::default(),
            batch: BatchState::default(),
            analytics_view: AnalyticsViewState::default(),
            calendar: CalendarState::default(),
            library: LibraryState::default(),
            settings: SettingsState::default(),
            posts_modal: None,
            toasts: Toasts::default(),
            scheduler: Scheduler::new(),
            dispatcher,
            prefs,
            clipboard: Box::new(TerminalClipboard),
            config,
            refresh_task: None,
            viewport: Rect::default(),
            nav_areas: Vec::new(),
            frame_count: 0,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Replace the clipboard sink
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Account ids for the selector: the registry once loaded, the fixed slots before
    pub fn account_ids(&self) -> Vec<String> {
        if self.accounts.is_empty() {
            DEFAULT_ACCOUNTS.iter().map(|s| s.to_string()).collect()
        } else {
            self.accounts.keys().cloned().collect()
        }
    }

    /// Persona id of the current account, falling back to the default persona
    pub fn current_persona_id(&self) -> &str {
        self.accounts
            .get(&self.current_account)
            .map(|a| a.persona.as_str())
            .unwrap_or(crate::api::DEFAULT_PERSONA)
    }

    pub fn current_persona(&self) -> Option<&Persona> {
        self.personas.get(self.current_persona_id())
    }

    /// A modal is capturing input
    pub fn modal_open(&self) -> bool {
        self.posts_modal.is_some() || self.batch.visible
    }
}
