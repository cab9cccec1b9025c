// CV builder: AI enhancement, inline writing suggestions, PDF export.

pub mod handlers;
pub mod models;
pub mod pdf;
pub mod prompts;
pub mod service;
