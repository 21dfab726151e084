//! A data-driven paginator component for bubbletea-rs.
//!
//! Unlike a bare page counter, this paginator also owns the data of the
//! current page. It gets items from a [`Source`], cuts or fetches the page,
//! hands the items to the application, and renders one of three navigation
//! UIs:
//!
//! - **Numbered**: `« ‹ [3 ] of 10 pages › »`, with a page-number field
//! - **Dotted**: `○ ○ • ○ ○`, one dot per page
//! - **Load more**: a single button; pages accumulate instead of replacing
//!   each other
//!
//! Data comes either from one collection sliced locally ([`Source::Slice`])
//! or from a per-page fetcher ([`Source::Callback`]). Fetches run as
//! bubbletea commands, and their results come back as [`PageLoadedMsg`]s
//! that the application forwards to [`Model::update`].
//!
//! # Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_pagination::paginator::{Config, DisplayMode, FetchFailedMsg, Model as Paginator, Source};
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct Reviews {
//!     paginator: Paginator<String>,
//!     error: Option<String>,
//! }
//!
//! impl Model for Reviews {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let source = Source::callback(12, |page| async move {
//!             Ok((1..=5).map(|n| format!("review {}", (page - 1) * 5 + n)).collect())
//!         });
//!         let mut paginator = Paginator::new(Config::new(DisplayMode::Numbered, source))
//!             .expect("valid paginator config");
//!         let cmd = paginator.init();
//!         (Self { paginator, error: None }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(failed) = msg.downcast_ref::<FetchFailedMsg>() {
//!             self.error = Some(failed.error.to_string());
//!             return None;
//!         }
//!         self.paginator.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         let mut out = self.paginator.items().join("\n");
//!         out.push_str("\n\n");
//!         out.push_str(&self.paginator.view());
//!         out
//!     }
//! }
//! ```

mod config;
mod input;
mod keys;
mod model;
mod source;
mod style;
mod view;

#[cfg(test)]
mod tests;

pub use config::{Config, DisplayMode, Labels, PageChangedCallback, RenderCallback, Settings};
pub use input::PageInput;
pub use keys::PaginatorKeyMap;
pub use model::{FetchFailedMsg, Model, PageLoadedMsg, PaginationHandle};
pub use source::{DataMode, FetchAll, FetchFuture, FetchPage, Source};
pub use style::Styles;
pub use view::NumberedControls;
