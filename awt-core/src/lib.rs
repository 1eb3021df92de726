//! Core types and report API client for the AirWaveThess dashboard.
//!
//! The wire types mirror the report API one to one. The HTTP client is only
//! compiled with the `api` feature.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod location;
pub mod quality;
pub mod report;
