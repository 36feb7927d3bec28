//! Site navigation bar for a static website, compiled to WebAssembly.
//!
//! On page load the navigation fragment is fetched and injected into the
//! mount element, the bar height is published as a CSS custom property, and
//! every dropdown found in the markup is wired up: one menu open at a time,
//! outside taps and Escape close, Enter/Space toggle a focused control,
//! resizes close everything.
//!
//! The decision logic lives in [`nav_core`] (state machine) and
//! [`nav_input`] (input routing with synthetic-event suppression). This crate
//! adds configuration, fragment resolution, the layout signal and, on
//! `wasm32`, the DOM bindings.
//!
//! ```text
//! fetch ──► inject ──► publish height ──► scan widgets ──► wire listeners
//!                                                              │
//!        DOM event ──► NavInput ──► NavController ──► Outcome ─┘
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod fragment;
pub mod layout;
pub mod markup;
pub mod protect;
pub mod wiring;

#[cfg(target_arch = "wasm32")]
mod web;

pub use config::{NavConfig, ProtectConfig};
pub use controller::{NavController, Outcome};
pub use error::SiteNavError;
pub use fragment::{fragment_url, FragmentMount};
pub use layout::{LayoutHost, LayoutPublisher};
pub use wiring::WiringGuard;

pub use nav_core::{Command, DropdownMachine, Transition, WidgetId, WidgetState};
pub use nav_input::{Disposition, HitTarget, InputRouter, Key, NavInput, Pathway, ViewportChange};

#[cfg(target_arch = "wasm32")]
pub use web::{init_with_config, install_copy_protection, start};
