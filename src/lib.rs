// RedNote content dashboard

pub mod api;
pub mod clipboard;
pub mod config;
pub mod prefs;
pub mod scheduler;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;
