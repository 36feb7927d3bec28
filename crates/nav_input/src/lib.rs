//! Unified input routing for the site navigation bar.
//!
//! Browsers report one physical tap through several event types: a
//! `pointerup` and a synthetic `click` a few hundred milliseconds later.
//! Handling both would open a menu and close it again in the same gesture.
//! `touchend` is left unwired since it also ends swipes and scrolls. This crate turns every modality into a
//! [`NavInput`], and the [`InputRouter`] emits exactly one
//! [`Command`](nav_core::Command) per gesture.
//!
//! # Architecture
//!
//! ```text
//! pointerup ─┐
//! click     ─┼──► NavInput ──► InputRouter ──► Routed { Command, Disposition }
//! keydown   ─┤                     │
//!            │                     ▼
//! resize    ─┘               RouterConfig (suppression window)
//! ```
//!
//! # Example
//!
//! ```
//! use nav_core::{Command, DropdownMachine};
//! use nav_input::{HitTarget, InputRouter, NavInput, Pathway};
//!
//! let mut machine = DropdownMachine::new();
//! let people = machine.register("People");
//! let mut router = InputRouter::new();
//!
//! // One tap: pointerup followed by the synthetic click.
//! let tap = router.process(NavInput::activate(Pathway::Pointer, HitTarget::Control(people), 1000.0));
//! machine.execute(tap.command).unwrap();
//! let ghost = router.process(NavInput::activate(Pathway::Click, HitTarget::Control(people), 1120.0));
//! assert_eq!(ghost.command, Command::Noop);
//! assert_eq!(machine.open_widget(), Some(people));
//! ```

mod config;
mod disposition;
mod error;
mod keyboard;
mod raw;
mod router;

pub use config::RouterConfig;
pub use disposition::Disposition;
pub use error::InputError;
pub use keyboard::Key;
pub use raw::{HitTarget, NavInput, Pathway, ViewportChange};
pub use router::{InputRouter, Routed};

/// Default window (milliseconds) in which a follow-up event from another
/// pathway is treated as a synthetic copy of an already handled gesture.
pub const DEFAULT_SUPPRESSION_MS: u64 = 400;

/// Smallest accepted suppression window (milliseconds).
pub const MIN_SUPPRESSION_MS: u64 = 50;

/// Largest accepted suppression window (milliseconds).
pub const MAX_SUPPRESSION_MS: u64 = 1000;
