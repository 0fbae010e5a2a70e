//! Headless host for exercising Tactile views in tests.
//!
//! ```rust
//! use tactile_core::Role;
//! use tactile_testing::{MockFn, Screen};
//! use tactile_ui::Button;
//!
//! let on_click = MockFn::new();
//! let mut screen = Screen::render(Button("Click me", on_click.handler()));
//!
//! let button = screen.get_by_role(Role::Button, "click me").unwrap();
//! screen.click(&button).unwrap();
//! assert_eq!(on_click.calls(), 1);
//! ```

pub mod a11y;
pub mod error;
pub mod mock;
pub mod query;
pub mod screen;

pub use a11y::{A11yBridge, LogA11y, RecordingA11y};
pub use error::{QueryError, QueryResult};
pub use mock::MockFn;
pub use query::{MatchOptions, NameMatcher, TextMatch, normalize};
pub use screen::{Element, Screen};

/// Installs `env_logger` for tests; `RUST_LOG` picks the level. Safe to call
/// from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
