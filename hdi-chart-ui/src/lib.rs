//! Shared Dioxus components and browser bridge for the HDI dashboard.
//!
//! This crate provides:
//! - `js_bridge`: fetching the static data sources through the browser's `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: SVG views for the map, legend, line chart and scatter plot

pub mod js_bridge;
pub mod state;
pub mod components;
