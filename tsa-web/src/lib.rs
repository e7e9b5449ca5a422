//! Browser side of the thread sentiment dashboard.
//!
//! This crate provides:
//! - `page`: `web-sys` implementations of the `tsa_core::dom` traits
//! - `js_bridge`: Chart.js and DataTables renderers called through `js-sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (tables, charts, modal, form)

pub mod components;
pub mod js_bridge;
pub mod page;
pub mod state;
