// Generator backend: wire types, HTTP client and the request dispatcher

pub mod client;
pub mod dispatch;
pub mod error;
pub mod types;

pub use client::{Backend, HttpBackend};
pub use dispatch::{ApiMessage, BatchPlan, Dispatcher};
pub use error::ApiError;
pub use types::{
    Account, AccountStats, AccountsPayload, AnalyticsSnapshot, DailyPoint, GenerateResponse,
    GeneratedPost, LibraryFile, Persona, RecentPost, DEFAULT_PERSONA, DEFAULT_SCORE,
    score_or_default,
};
