//! LookLab backend
//!
//! Catalog of wearable items and a queue of look generation jobs, persisted
//! as schema-less documents. Payloads are validated into typed records before
//! they reach the store, and store identifiers leave the service as plain
//! string ids.

pub mod app_state;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
