//! HTTP API for uploads, dashboards and measures.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
pub mod tenant;
