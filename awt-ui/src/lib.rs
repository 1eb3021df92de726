//! Shared Dioxus components and JS bridge for the AirWaveThess dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map and D3 chart globals via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals, plus the report request generation
//! - `components`: Reusable RSX components (filters, map, story stepper, tables, chat)

pub mod components;
pub mod js_bridge;
pub mod state;
