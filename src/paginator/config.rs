//! Paginator configuration.
//!
//! [`Settings`] holds the plain, serializable options (display mode, labels,
//! dot characters, starting page) so applications can load them from their
//! own configuration files. [`Config`] adds what cannot be serialized: the
//! data [`Source`], the render callbacks, styles and key bindings.

use super::keys::PaginatorKeyMap;
use super::source::{DataMode, Source};
use super::style::Styles;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which navigation UI the paginator renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum DisplayMode {
    /// First/prev/page-input/next/last buttons with an "of N pages" label.
    #[default]
    Numbered,
    /// One dot per page; the current page's dot is highlighted.
    Dotted,
    /// A single "Load more" button; pages accumulate.
    LoadMore,
}

impl DisplayMode {
    /// The canonical lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Numbered => "numbered",
            DisplayMode::Dotted => "dotted",
            DisplayMode::LoadMore => "loadmore",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = Error;

    /// Parses a display mode name.
    ///
    /// ```rust
    /// use bubbletea_pagination::paginator::DisplayMode;
    ///
    /// assert_eq!("dotted".parse::<DisplayMode>().unwrap(), DisplayMode::Dotted);
    /// assert_eq!("load-more".parse::<DisplayMode>().unwrap(), DisplayMode::LoadMore);
    /// assert!("carousel".parse::<DisplayMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numbered" => Ok(DisplayMode::Numbered),
            "dotted" => Ok(DisplayMode::Dotted),
            "loadmore" | "load-more" | "load_more" => Ok(DisplayMode::LoadMore),
            _ => Err(Error::UnknownDisplayMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for DisplayMode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Text shown by the navigation controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Jump-to-first button.
    pub first: String,
    /// Previous page button.
    pub prev: String,
    /// Next page button.
    pub next: String,
    /// Jump-to-last button.
    pub last: String,
    /// Word joining the page input and the total ("of").
    pub of: String,
    /// Singular page noun.
    pub page: String,
    /// Plural page noun.
    pub pages: String,
    /// Load-more button text.
    pub load_more: String,
    /// Load-more button text while a page is in flight.
    pub loading: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first: "«".to_string(),
            prev: "‹".to_string(),
            next: "›".to_string(),
            last: "»".to_string(),
            of: "of".to_string(),
            page: "page".to_string(),
            pages: "pages".to_string(),
            load_more: "Load more...".to_string(),
            loading: "Loading...".to_string(),
        }
    }
}

/// Serializable paginator options.
///
/// Every field has a default, so partial documents are accepted:
///
/// ```rust
/// use bubbletea_pagination::paginator::{DisplayMode, Settings};
///
/// let settings: Settings = serde_json::from_str(r#"{ "display": "dotted" }"#).unwrap();
/// assert_eq!(settings.display, DisplayMode::Dotted);
/// assert_eq!(settings.initial_page, 1);
///
/// let err = serde_json::from_str::<Settings>(r#"{ "display": "grid" }"#).unwrap_err();
/// assert!(err.to_string().contains("unknown display mode"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Navigation UI to render.
    pub display: DisplayMode,
    /// Page shown after mount, counted from 1.
    pub initial_page: usize,
    /// Control labels.
    pub labels: Labels,
    /// Character for the current page in dotted mode.
    pub active_dot: String,
    /// Character for the other pages in dotted mode.
    pub inactive_dot: String,
    /// Width of the page-number field in numbered mode.
    pub input_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplayMode::default(),
            initial_page: 1,
            labels: Labels::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            input_width: 3,
        }
    }
}

/// Receives the items to render for the current page.
pub type RenderCallback<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Receives `(new_page, old_page)` whenever the displayed page changes.
pub type PageChangedCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Full paginator configuration.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagination::paginator::{Config, DisplayMode, Source};
///
/// let config = Config::new(DisplayMode::Numbered, Source::callback_fn(5, |page| vec![page * 10]))
///     .with_initial_page(2)
///     .on_page_rendered(|items: &[usize]| println!("{items:?}"));
/// assert!(config.validate().is_ok());
/// ```
pub struct Config<T> {
    /// Serializable options.
    pub settings: Settings,
    /// Where page data comes from.
    pub source: Source<T>,
    /// Rendering styles.
    pub styles: Styles,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
    pub(crate) on_page_rendered: Option<RenderCallback<T>>,
    pub(crate) on_page_changed: Option<PageChangedCallback>,
}

impl<T> Config<T> {
    /// Creates a configuration with default settings for the given mode.
    pub fn new(display: DisplayMode, source: Source<T>) -> Self {
        Self::from_settings(
            Settings {
                display,
                ..Settings::default()
            },
            source,
        )
    }

    /// Creates a configuration from previously loaded settings.
    pub fn from_settings(settings: Settings, source: Source<T>) -> Self {
        Self {
            settings,
            source,
            styles: Styles::default(),
            keymap: PaginatorKeyMap::default(),
            on_page_rendered: None,
            on_page_changed: None,
        }
    }

    /// Sets the page shown after mount.
    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.settings.initial_page = page;
        self
    }

    /// Replaces the control labels.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.settings.labels = labels;
        self
    }

    /// Replaces the rendering styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: PaginatorKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Registers the callback that receives each page's items.
    ///
    /// In load-more mode the callback receives every item loaded so far.
    pub fn on_page_rendered(mut self, f: impl Fn(&[T]) + Send + Sync + 'static) -> Self {
        self.on_page_rendered = Some(Arc::new(f));
        self
    }

    /// Registers the callback fired with `(new_page, old_page)` after the new
    /// page's items were delivered.
    pub fn on_page_changed(mut self, f: impl Fn(usize, usize) + Send + Sync + 'static) -> Self {
        self.on_page_changed = Some(Arc::new(f));
        self
    }

    /// Checks the mode-dependent requirements.
    pub fn validate(&self) -> Result<(), Error> {
        if self.settings.initial_page == 0 {
            return Err(Error::ZeroInitialPage);
        }
        match &self.source {
            Source::Slice { per_page, .. } if *per_page == 0 => Err(Error::ZeroPerPage),
            Source::Callback { total, .. }
                if *total == 0 && self.settings.display != DisplayMode::LoadMore =>
            {
                Err(Error::MissingTotal(self.settings.display))
            }
            _ => Ok(()),
        }
    }

    /// The data-sourcing strategy of this configuration.
    pub fn data_mode(&self) -> DataMode {
        self.source.data_mode()
    }
}
