// Terminal UI using Ratatui

pub mod analytics;
pub mod batch_modal;
pub mod calendar;
pub mod components;
pub mod controller;
pub mod dashboard;
pub mod events;
pub mod format;
pub mod generate;
pub mod library;
pub mod posts_modal;
pub mod settings;
pub mod shell;
pub mod state;
pub mod theme;
pub mod toast;
pub mod widgets;

pub use analytics::AnalyticsScreen;
pub use batch_modal::BatchModal;
pub use calendar::CalendarScreen;
pub use dashboard::Dashboard;
pub use events::{handle_key, handle_mouse, run_ui};
pub use generate::GenerateScreen;
pub use library::LibraryScreen;
pub use posts_modal::PostsModal;
pub use settings::SettingsScreen;
pub use shell::draw;
pub use state::{AppState, UnknownView, View};
pub use theme::Theme;
