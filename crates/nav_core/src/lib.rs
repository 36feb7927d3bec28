//! Dropdown state machine for the site navigation bar.
//!
//! Every dropdown widget discovered in the injected navigation markup gets a
//! [`WidgetId`]. The [`DropdownMachine`] owns the open/closed state of all of
//! them and executes [`Command`]s, reporting what changed as a
//! [`Transition`]. The DOM side applies the transition (class + ARIA flag)
//! in one synchronous turn.
//!
//! ```text
//! InputRouter ──► Command ──► DropdownMachine ──► Transition ──► DOM
//! ```
//!
//! At most one widget is open at any time. The machine stores the open
//! widget as a single `Option<WidgetId>`, so there is no state in which two
//! widgets are open.
//!
//! # Example
//!
//! ```
//! use nav_core::{Command, DropdownMachine};
//!
//! let mut machine = DropdownMachine::new();
//! let people = machine.register("People");
//! let news = machine.register("News");
//!
//! machine.execute(Command::Toggle(people)).unwrap();
//! let t = machine.execute(Command::Toggle(news)).unwrap();
//!
//! assert_eq!(t.closed, Some(people));
//! assert_eq!(t.opened, Some(news));
//! ```

mod command;
mod error;
mod machine;
mod widget;

pub use command::Command;
pub use error::NavError;
pub use machine::{DropdownMachine, Transition};
pub use widget::{WidgetId, WidgetInfo, WidgetState};
