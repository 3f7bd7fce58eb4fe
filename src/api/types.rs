// Wire types for the generator backend

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persona assumed when an account is missing from the registry
pub const DEFAULT_PERSONA: &str = "young_investor";

/// Score shown when the backend omits one
pub const DEFAULT_SCORE: f64 = 8.5;

/// A missing or zero score reads as the default
pub fn score_or_default(score: Option<f64>) -> f64 {
    match score {
        Some(score) if score != 0.0 => score,
        _ => DEFAULT_SCORE,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub persona: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// `GET /api/accounts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountsPayload {
    #[serde(default)]
    pub accounts: BTreeMap<String, Account>,
    #[serde(default)]
    pub personas: BTreeMap<String, Persona>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStats {
    #[serde(default)]
    pub total_posts: u64,
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub last_generated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    #[serde(default)]
    pub posts: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub engagement: u64,
}

/// `GET /api/analytics`. Every field is optional; unknown keys are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_posts: Option<u64>,
    pub month_posts: Option<u64>,
    pub week_posts: Option<u64>,
    pub today_posts: Option<u64>,
    pub avg_score: Option<f64>,
    pub total_views: Option<u64>,
    pub total_engagement: Option<u64>,
    #[serde(default)]
    pub account_stats: BTreeMap<String, AccountStats>,
    #[serde(default)]
    pub daily_data: Vec<DailyPoint>,
    pub last_updated: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AnalyticsSnapshot {
    pub fn total_posts(&self) -> u64 {
        self.total_posts.unwrap_or(0)
    }

    pub fn month_posts(&self) -> u64 {
        self.month_posts.unwrap_or(0)
    }

    /// Zero counts as absent, matching the backend's seeded default
    pub fn avg_score(&self) -> f64 {
        score_or_default(self.avg_score)
    }
}

/// A post as returned by `/api/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub id: Option<String>,
}

impl GeneratedPost {
    pub fn score(&self) -> f64 {
        score_or_default(self.score)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub account_id: &'a str,
}

/// `POST /api/generate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub posts: Vec<GeneratedPost>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentPost {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    pub content: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl RecentPost {
    pub fn score(&self) -> f64 {
        score_or_default(self.score)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RecentPostsPayload {
    #[serde(default)]
    pub posts: Vec<RecentPost>,
}

/// One saved artifact in the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryFile {
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub txt_path: Option<String>,
    #[serde(default)]
    pub pdf_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FilesPayload {
    #[serde(default)]
    pub files: Vec<LibraryFile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ViewPayload {
    #[serde(default)]
    pub posts: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}
