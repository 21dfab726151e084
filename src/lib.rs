#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pagination/")]

//! # bubbletea-pagination
//!
//! A data-driven pagination component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! The paginator owns both the current page and the data shown on it. Give it
//! a data source and a display mode; it fetches or slices the page, hands the
//! items to your application, and renders the navigation controls.
//!
//! ## Display modes
//!
//! | Mode | Looks like | Behavior |
//! |------|------------|----------|
//! | `Numbered` | `« ‹ [3 ] of 10 pages › »` | first/prev/next/last plus a page-number field |
//! | `Dotted` | `○ ○ • ○` | one dot per page, digits jump to a dot |
//! | `LoadMore` | `Load more...` | pages accumulate instead of replacing each other |
//!
//! ## Data sources
//!
//! - [`paginator::Source::Slice`] loads the whole collection once and cuts
//!   pages locally.
//! - [`paginator::Source::Callback`] fetches one page at a time, e.g. from an
//!   HTTP API.
//!
//! Both accept async fetchers; `slice_fn`/`callback_fn` wrap synchronous ones.
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_pagination::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = Source::callback(4, |page| async move {
//!     Ok(vec![format!("row {}", page * 10), format!("row {}", page * 10 + 1)])
//! });
//! let mut paginator = Paginator::new(Config::new(DisplayMode::Numbered, source))
//!     .expect("valid config");
//!
//! let msg = paginator.init().await.unwrap();
//! paginator.update(msg);
//! assert_eq!(paginator.items(), ["row 10", "row 11"]);
//!
//! let cmd = paginator.next_page().unwrap();
//! paginator.update(cmd.await.unwrap());
//! assert_eq!(paginator.current_page(), 2);
//! # }
//! ```
//!
//! ## Key bindings
//!
//! Controls are driven by the type-safe bindings of the [`key`] module and
//! can be remapped through [`paginator::PaginatorKeyMap`]:
//!
//! ```rust
//! use bubbletea_pagination::key::{Binding, KeyMap};
//! use bubbletea_pagination::paginator::PaginatorKeyMap;
//! use crossterm::event::KeyCode;
//!
//! let mut keymap = PaginatorKeyMap::default();
//! keymap.next_page = Binding::new(vec![KeyCode::Char('n')]).with_help("n", "next page");
//! assert_eq!(keymap.short_help().len(), 2);
//! ```

pub mod error;
pub mod key;
pub mod paginator;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// The paginator's page-number field implements it: while focused it takes
/// digit keys, while blurred it mirrors the current page.
///
/// ## Examples
///
/// ```rust
/// use bubbletea_pagination::prelude::*;
///
/// let mut input = PageInput::new();
/// assert!(!input.focused());
///
/// input.focus();
/// assert!(input.focused());
///
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for initialization tasks like starting timers.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use error::{Error, FetchError, FetchResult};
pub use key::{new_binding, with_disabled, with_help, with_keys_str, Binding, KeyMap, KeyPress};
pub use paginator::Model as Paginator;
pub use paginator::{
    Config, DataMode, DisplayMode, FetchFailedMsg, Labels, NumberedControls, PageInput,
    PageLoadedMsg, PaginationHandle, PaginatorKeyMap, Settings, Source, Styles,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pagination::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, FetchError, FetchResult};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::paginator::Model as Paginator;
    pub use crate::paginator::{
        Config, DataMode, DisplayMode, FetchFailedMsg, Labels, NumberedControls, PageInput,
        PageLoadedMsg, PaginationHandle, PaginatorKeyMap, Settings, Source, Styles,
    };
    pub use crate::Component;
}
