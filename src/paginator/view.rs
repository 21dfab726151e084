//! Rendering of the three navigation UIs.

use super::config::DisplayMode;
use super::model::Model;
use crate::Component;

/// What the numbered navigation row currently offers.
///
/// Buttons are never removed, only disabled, so the row keeps its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedControls {
    /// Jump-to-first is usable.
    pub first: bool,
    /// Previous page is usable.
    pub prev: bool,
    /// Next page is usable.
    pub next: bool,
    /// Jump-to-last is usable.
    pub last: bool,
    /// The page-number field is shown; otherwise a static "1" is.
    pub input: bool,
    /// Pages available.
    pub total_pages: usize,
}

impl<T: Clone + Send + 'static> Model<T> {
    /// The enabled state of the numbered navigation controls.
    ///
    /// First/prev are disabled exactly on page 1, next/last exactly on the
    /// last page. With at most one page the field becomes a static "1".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagination::paginator::{Config, DisplayMode, Model, Source};
    ///
    /// let source = Source::callback_fn(5, |page| vec![page]);
    /// let config = Config::new(DisplayMode::Numbered, source).with_initial_page(5);
    /// let paginator = Model::new(config).unwrap();
    ///
    /// let controls = paginator.controls();
    /// assert!(controls.first && controls.prev);
    /// assert!(!controls.next && !controls.last);
    /// assert!(controls.input);
    /// assert_eq!(controls.total_pages, 5);
    /// ```
    pub fn controls(&self) -> NumberedControls {
        let total_pages = self.total_pages();
        NumberedControls {
            first: !self.on_first_page(),
            prev: !self.on_first_page(),
            next: !self.on_last_page(),
            last: !self.on_last_page(),
            input: total_pages > 1,
            total_pages,
        }
    }

    /// Renders the navigation UI for the configured display mode.
    pub fn view(&self) -> String {
        match self.display() {
            DisplayMode::Numbered => self.numbered_view(),
            DisplayMode::Dotted => self.dotted_view(),
            DisplayMode::LoadMore => self.load_more_view(),
        }
    }

    fn button(&self, label: &str, enabled: bool) -> String {
        if enabled {
            self.styles.button.render(label)
        } else {
            self.styles.disabled_button.render(label)
        }
    }

    fn numbered_view(&self) -> String {
        let controls = self.controls();
        let field = if controls.input {
            self.input.view(&self.styles)
        } else {
            self.styles.only_one.render("1")
        };
        let noun = if controls.total_pages > 1 {
            &self.labels.pages
        } else {
            &self.labels.page
        };
        let total = self
            .styles
            .total
            .render(&format!("{} {} {}", self.labels.of, controls.total_pages, noun));

        [
            self.button(&self.labels.first, controls.first),
            self.button(&self.labels.prev, controls.prev),
            field,
            total,
            self.button(&self.labels.next, controls.next),
            self.button(&self.labels.last, controls.last),
        ]
        .join(" ")
    }

    fn dotted_view(&self) -> String {
        let current = self.current_page();
        (1..=self.total_pages())
            .map(|page| {
                if page == current {
                    self.styles.active_dot.render(&self.active_dot)
                } else {
                    self.styles.inactive_dot.render(&self.inactive_dot)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn load_more_view(&self) -> String {
        if self.is_loading() {
            self.styles.loading.render(&self.labels.loading)
        } else {
            self.styles.load_more.render(&self.labels.load_more)
        }
    }

    /// Whether the page-number field is being edited.
    pub fn editing_page(&self) -> bool {
        self.input.focused()
    }
}
