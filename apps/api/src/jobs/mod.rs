// Job listings: in-memory sample data behind a time-expiring cache.

pub mod cache;
pub mod data;
pub mod filter;
pub mod handlers;
pub mod models;
