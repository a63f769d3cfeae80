//! `stockroom-api` — HTTP transport for the inventory engine.

pub mod app;
