//! # Views, Semantics, and Frames
//!
//! Tactile keeps no retained widget objects. A UI is a plain `View` tree
//! rebuilt from configuration on every render. There are three main pieces:
//!
//! - `View` / `ViewKind` — the tree produced by widget functions.
//! - `Semantics` / `Role` — what assistive technology is told about a view.
//! - `Frame` — the flattened output of one composition: hit regions,
//!   semantics nodes and the focus chain.
//!
//! ## Composition
//!
//! A host drives composition through a `Scheduler`, which stamps ids and
//! keeps track of focus between frames:
//!
//! ```rust
//! use tactile_core::*;
//!
//! let mut sched = Scheduler::new();
//! let frame = sched.compose(
//!     |_| View::new(0, ViewKind::Column),
//!     |_root, _focused| (vec![], vec![]),
//! );
//! assert!(frame.focus_chain.is_empty());
//! ```
//!
//! Widgets hold no state of their own; a behavior change (for example a
//! button becoming disabled) comes from building a new `View` and composing
//! again.

pub mod input;
pub mod runtime;
pub mod semantics;
pub mod tests;
pub mod view;

pub use input::*;
pub use runtime::*;
pub use semantics::*;
pub use view::*;
