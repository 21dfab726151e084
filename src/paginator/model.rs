//! Paginator state and update logic.

use super::config::{Config, DisplayMode, Labels, PageChangedCallback, RenderCallback};
use super::input::PageInput;
use super::keys::PaginatorKeyMap;
use super::source::{DataMode, Source};
use super::style::Styles;
use crate::error::{Error, FetchError, FetchResult};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use std::fmt;
use std::ops::Range;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, trace, warn};

// Internal ID management for paginator instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Carries a data source's answer back to the paginator that asked for it.
///
/// Produced by the commands returned from [`Model::init`], [`Model::refresh`]
/// and the navigation methods. Forward it to [`Model::update`]; the paginator
/// ignores messages that belong to another instance, that were overtaken by
/// a newer request, or that arrive after [`Model::unmount`].
pub struct PageLoadedMsg<T> {
    /// The id of the paginator that issued the request.
    pub id: i64,
    tag: u64,
    page: usize,
    result: FetchResult<T>,
}

impl<T> PageLoadedMsg<T> {
    /// The page the request was issued for.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Whether the data source succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl<T> fmt::Debug for PageLoadedMsg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLoadedMsg")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("page", &self.page)
            .field("ok", &self.result.is_ok())
            .finish()
    }
}

/// Sent to the application when a data source fails.
///
/// The paginator keeps its page and its previously rendered items; showing
/// an error or offering a retry is up to the application.
#[derive(Debug, Clone)]
pub struct FetchFailedMsg {
    /// The id of the paginator whose fetch failed.
    pub id: i64,
    /// The page that was being loaded.
    pub page: usize,
    /// What the data source reported.
    pub error: FetchError,
}

/// The control surface a parent uses to drive a paginator.
///
/// [`Model`] implements it; parents that only need to reload or inspect a
/// paginator can hold it behind this trait.
pub trait PaginationHandle {
    /// Reloads data. With `Some(page)` different from the current page the
    /// paginator moves there; otherwise the current page (or, for slice
    /// sources, the whole collection) is fetched again. Page 0, and under
    /// load-more navigation any earlier page except 1, count as a reload.
    fn refresh(&mut self, page: Option<usize>) -> Option<Cmd>;
    /// The current page, counted from 1.
    fn current_page(&self) -> usize;
    /// How many items were rendered for the current page.
    fn items_on_page(&self) -> usize;
    /// The number of pages.
    fn total_pages(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    tag: u64,
    page: usize,
    reset: bool,
}

/// A data-driven paginator.
///
/// The paginator owns the current page and the data fetched for it. It
/// either slices one collection into pages or asks a per-page source, then
/// hands the current page's items to the `on_page_rendered` callback (and
/// keeps them available through [`Model::items`]).
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagination::paginator::{Config, DisplayMode, Model, Source};
///
/// # #[tokio::main]
/// # async fn main() {
/// let films = vec!["Alien", "Brazil", "Casablanca", "Dune", "Eraserhead"];
/// let config = Config::new(DisplayMode::Dotted, Source::from_vec(2, films));
/// let mut paginator = Model::new(config).unwrap();
///
/// // Mounting fetches the collection.
/// let msg = paginator.init().await.unwrap();
/// paginator.update(msg);
/// assert_eq!(paginator.items(), ["Alien", "Brazil"]);
/// assert_eq!(paginator.total_pages(), 3);
///
/// // Slices are cut locally, no fetch needed.
/// assert!(paginator.go_to_page(3).is_none());
/// assert_eq!(paginator.items(), ["Eraserhead"]);
/// # }
/// ```
pub struct Model<T> {
    /// Rendering styles.
    pub styles: Styles,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
    /// Control labels.
    pub labels: Labels,
    /// Character for the current page in dotted mode.
    pub active_dot: String,
    /// Character for the other pages in dotted mode.
    pub inactive_dot: String,

    display: DisplayMode,
    source: Source<T>,
    on_page_rendered: Option<RenderCallback<T>>,
    on_page_changed: Option<PageChangedCallback>,

    current_page: usize,
    // Page whose items were last delivered; `on_page_changed` reports against it.
    delivered_page: usize,
    total: usize,
    collection: Option<Vec<T>>,
    loaded_pages: Vec<(usize, Vec<T>)>,
    rendered: Vec<T>,

    pub(crate) input: PageInput,
    pending: Option<Pending>,
    tag: u64,
    id: i64,
    mounted: bool,
    last_error: Option<FetchError>,
}

impl<T> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("display", &self.display)
            .field("source", &self.source)
            .field("current_page", &self.current_page)
            .field("rendered", &self.rendered.len())
            .field("pending", &self.pending)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + Send + 'static> Model<T> {
    /// Builds a mounted paginator from a validated configuration.
    ///
    /// Call [`Model::init`] afterwards and run the returned command to load
    /// the first page.
    pub fn new(config: Config<T>) -> Result<Self, Error> {
        config.validate()?;
        let Config {
            settings,
            source,
            styles,
            keymap,
            on_page_rendered,
            on_page_changed,
        } = config;

        let total = match &source {
            Source::Callback { total, .. } => *total,
            Source::Slice { .. } => 0,
        };
        let mut input = PageInput::new();
        input.width = settings.input_width;
        input.set_page(settings.initial_page);

        Ok(Self {
            styles,
            keymap,
            labels: settings.labels,
            active_dot: settings.active_dot,
            inactive_dot: settings.inactive_dot,
            display: settings.display,
            source,
            on_page_rendered,
            on_page_changed,
            current_page: settings.initial_page,
            delivered_page: settings.initial_page,
            total,
            collection: None,
            loaded_pages: Vec::new(),
            rendered: Vec::new(),
            input,
            pending: None,
            tag: 0,
            id: next_id(),
            mounted: true,
            last_error: None,
        })
    }

    /// Returns the command that loads the initial data.
    ///
    /// For slice sources this fetches the whole collection, for callback
    /// sources the initial page.
    pub fn init(&mut self) -> Cmd {
        self.request(self.current_page, false)
    }

    /// Unique id of this paginator instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The navigation UI this paginator renders.
    pub fn display(&self) -> DisplayMode {
        self.display
    }

    /// The data-sourcing strategy.
    pub fn data_mode(&self) -> DataMode {
        self.source.data_mode()
    }

    /// The current page, counted from 1.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages.
    ///
    /// Derived from the collection length for slice sources (zero until the
    /// collection has loaded), the configured total for callback sources.
    pub fn total_pages(&self) -> usize {
        match &self.source {
            Source::Slice { per_page, .. } => self
                .collection
                .as_ref()
                .map_or(0, |items| items.len().div_ceil(*per_page)),
            Source::Callback { .. } => self.total,
        }
    }

    /// Updates the page count of a callback source, for parents that fetch
    /// the total separately. Slice sources derive their count and ignore it.
    ///
    /// # Returns
    ///
    /// The fetch command for the last page when the current page lies past
    /// the new total under numbered or dotted navigation, otherwise `None`.
    pub fn set_total_pages(&mut self, total: usize) -> Option<Cmd> {
        if let Source::Callback { .. } = self.source {
            self.total = total;
            if self.clamp_current_page() {
                return Some(self.request(self.current_page, false));
            }
        }
        None
    }

    /// Items delivered for the current page. In load-more mode, every item
    /// loaded so far.
    pub fn items(&self) -> &[T] {
        &self.rendered
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self) -> usize {
        match (&self.source, &self.collection) {
            (Source::Slice { .. }, Some(collection)) => self.slice_range(collection.len()).len(),
            (Source::Slice { .. }, None) => 0,
            (Source::Callback { .. }, _) => self.rendered.len(),
        }
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The error of the most recent failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// The page-number field.
    pub fn input(&self) -> &PageInput {
        &self.input
    }

    /// Whether the paginator is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Detaches the paginator. Responses that arrive afterwards are dropped
    /// and no callback fires again.
    pub fn unmount(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(id = self.id, page = pending.page, "unmounted with a fetch in flight");
        }
        self.mounted = false;
    }

    /// Whether the current page is the first one.
    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Whether the current page is the last one (or there are no pages).
    pub fn on_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// Reloads data; see [`PaginationHandle::refresh`].
    ///
    /// Moving to another page re-slices the cached collection for slice
    /// sources and fetches exactly that page for callback sources. Under
    /// load-more navigation, refreshing to page 1 discards the accumulated
    /// pages once page 1 arrives. Without a page (or with the current one)
    /// the current page is fetched again; slice sources re-fetch and replace
    /// the whole collection.
    ///
    /// Load-more navigation only moves forward or back to page 1; any other
    /// earlier page, like page 0, reloads the current page instead.
    ///
    /// # Returns
    ///
    /// The fetch command, or `None` when the result was delivered
    /// synchronously or the paginator is unmounted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagination::paginator::{Config, DisplayMode, Model, Source};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let source = Source::callback_fn(4, |page| vec![page * 100]);
    /// let mut paginator = Model::new(Config::new(DisplayMode::Numbered, source)).unwrap();
    /// let msg = paginator.init().await.unwrap();
    /// paginator.update(msg);
    ///
    /// // Move to page 3.
    /// let cmd = paginator.refresh(Some(3)).unwrap();
    /// paginator.update(cmd.await.unwrap());
    /// assert_eq!(paginator.items(), [300]);
    ///
    /// // Fetch page 3 again.
    /// let cmd = paginator.refresh(None).unwrap();
    /// paginator.update(cmd.await.unwrap());
    /// assert_eq!(paginator.current_page(), 3);
    /// # }
    /// ```
    pub fn refresh(&mut self, page: Option<usize>) -> Option<Cmd> {
        if !self.mounted {
            return None;
        }

        let Some(page) = page.filter(|&p| self.moves_to(p)) else {
            return Some(self.request(self.current_page, false));
        };

        debug!(id = self.id, from = self.current_page, to = page, "changing page");
        self.current_page = page;
        if !self.input.focused() {
            self.input.set_page(page);
        }

        match self.source.data_mode() {
            DataMode::Slice if self.collection.is_some() => {
                self.deliver_slice();
                None
            }
            // The collection in flight is sliced at the new page on arrival.
            DataMode::Slice if self.pending.is_some() => None,
            DataMode::Slice => Some(self.request(page, false)),
            DataMode::Callback => {
                let reset = self.display == DisplayMode::LoadMore && page == 1;
                Some(self.request(page, reset))
            }
        }
    }

    /// Moves to `page`. Does nothing if it is already the current page, if
    /// it is 0, or if load-more navigation would have to step back to it.
    pub fn go_to_page(&mut self, page: usize) -> Option<Cmd> {
        if !self.moves_to(page) {
            return None;
        }
        self.refresh(Some(page))
    }

    // Load-more pages only grow, apart from the explicit reset to page 1.
    fn moves_to(&self, page: usize) -> bool {
        if page == 0 || page == self.current_page {
            return false;
        }
        self.display != DisplayMode::LoadMore || page == 1 || page > self.current_page
    }

    // Pulls the current page back inside `[1, max(total, 1)]` for numbered
    // and dotted navigation. Reports whether it moved.
    fn clamp_current_page(&mut self) -> bool {
        if self.display == DisplayMode::LoadMore {
            return false;
        }
        let last = self.total_pages().max(1);
        if self.current_page <= last {
            return false;
        }
        debug!(id = self.id, from = self.current_page, to = last, "clamping page to total");
        self.current_page = last;
        if !self.input.focused() {
            self.input.set_page(last);
        }
        true
    }

    /// Jumps to page 1.
    pub fn first_page(&mut self) -> Option<Cmd> {
        if self.display == DisplayMode::LoadMore || self.on_first_page() {
            return None;
        }
        self.go_to_page(1)
    }

    /// Moves one page back.
    pub fn prev_page(&mut self) -> Option<Cmd> {
        if self.display == DisplayMode::LoadMore || self.on_first_page() {
            return None;
        }
        self.go_to_page(self.current_page - 1)
    }

    /// Moves one page forward. Under load-more navigation this loads one
    /// more page.
    pub fn next_page(&mut self) -> Option<Cmd> {
        if self.display == DisplayMode::LoadMore {
            return self.load_more();
        }
        if self.on_last_page() {
            return None;
        }
        self.go_to_page(self.current_page + 1)
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self) -> Option<Cmd> {
        if self.display == DisplayMode::LoadMore || self.on_last_page() {
            return None;
        }
        self.go_to_page(self.total_pages())
    }

    /// Appends the next page. Only meaningful for load-more navigation.
    ///
    /// Ignored while a fetch is in flight so that no page is skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagination::paginator::{Config, DisplayMode, Model, Source};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let source = Source::callback_fn(0, |page| vec![format!("post {page}")]);
    /// let mut feed = Model::new(Config::new(DisplayMode::LoadMore, source)).unwrap();
    /// let msg = feed.init().await.unwrap();
    /// feed.update(msg);
    ///
    /// let cmd = feed.load_more().unwrap();
    /// assert!(feed.load_more().is_none()); // still loading page 2
    /// feed.update(cmd.await.unwrap());
    /// assert_eq!(feed.items(), ["post 1", "post 2"]);
    /// # }
    /// ```
    pub fn load_more(&mut self) -> Option<Cmd> {
        if self.display != DisplayMode::LoadMore {
            return None;
        }
        if self.pending.is_some() {
            debug!(id = self.id, page = self.current_page, "load more ignored while loading");
            return None;
        }
        self.go_to_page(self.current_page + 1)
    }

    /// Moves to the page typed into the page-number field.
    ///
    /// The number is clamped to the available pages. Text that is not a
    /// number is discarded and the field shows the current page again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagination::paginator::{Config, DisplayMode, Model, Source};
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let press = |key| Box::new(KeyMsg { key, modifiers: KeyModifiers::NONE }) as Msg;
    /// let source = Source::from_vec(1, vec!['a', 'b', 'c']);
    /// let mut paginator = Model::new(Config::new(DisplayMode::Numbered, source)).unwrap();
    /// let msg = paginator.init().await.unwrap();
    /// paginator.update(msg);
    ///
    /// // ":" opens the field, digits fill it, Enter submits.
    /// paginator.update(press(KeyCode::Char(':')));
    /// paginator.update(press(KeyCode::Char('9')));
    /// paginator.update(press(KeyCode::Enter));
    /// assert_eq!(paginator.current_page(), 3);
    /// assert_eq!(paginator.items(), ['c']);
    ///
    /// // An empty field is not a number; the current page stays.
    /// paginator.update(press(KeyCode::Char(':')));
    /// assert!(paginator.submit_input().is_none());
    /// assert_eq!(paginator.input().value(), "3");
    /// # }
    /// ```
    pub fn submit_input(&mut self) -> Option<Cmd> {
        self.input.blur();
        let parsed = self.input.value().trim().parse::<usize>();
        match parsed {
            Ok(page) => {
                let page = page.clamp(1, self.total_pages().max(1));
                self.input.set_page(page);
                self.go_to_page(page)
            }
            Err(err) => {
                debug!(id = self.id, input = self.input.value(), %err, "rejected page input");
                self.input.set_page(self.current_page);
                None
            }
        }
    }

    /// Processes a message.
    ///
    /// Handles [`PageLoadedMsg`]s addressed to this paginator and key presses
    /// matching [`PaginatorKeyMap`]. When a fetch fails, the returned command
    /// emits a [`FetchFailedMsg`].
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<PageLoadedMsg<T>>() {
            Ok(loaded) => return self.handle_loaded(*loaded),
            Err(msg) => msg,
        };
        if !self.mounted {
            return None;
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        None
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if self.input.focused() {
            if self.keymap.submit.matches(key) {
                return self.submit_input();
            }
            if self.keymap.cancel.matches(key) {
                self.input.blur();
                self.input.set_page(self.current_page);
                return None;
            }
            self.input.update(key);
            return None;
        }

        match self.display {
            DisplayMode::LoadMore => {
                if self.keymap.load_more.matches(key) {
                    return self.load_more();
                }
                None
            }
            DisplayMode::Numbered | DisplayMode::Dotted => {
                if self.display == DisplayMode::Numbered
                    && self.keymap.goto_page.matches(key)
                    && self.total_pages() > 1
                {
                    self.input.reset();
                    return self.input.focus();
                }
                if self.display == DisplayMode::Dotted {
                    if let KeyCode::Char(c @ '1'..='9') = key.key {
                        let page = c as usize - '0' as usize;
                        if page <= self.total_pages() {
                            return self.go_to_page(page);
                        }
                        return None;
                    }
                }
                if self.keymap.first_page.matches(key) {
                    self.first_page()
                } else if self.keymap.prev_page.matches(key) {
                    self.prev_page()
                } else if self.keymap.next_page.matches(key) {
                    self.next_page()
                } else if self.keymap.last_page.matches(key) {
                    self.last_page()
                } else {
                    None
                }
            }
        }
    }

    fn handle_loaded(&mut self, msg: PageLoadedMsg<T>) -> Option<Cmd> {
        if msg.id != self.id {
            return None;
        }
        if !self.mounted {
            trace!(id = self.id, page = msg.page, "dropping response after unmount");
            return None;
        }
        let pending = match self.pending {
            Some(pending) if pending.tag == msg.tag => pending,
            _ => {
                trace!(id = self.id, page = msg.page, tag = msg.tag, "dropping stale response");
                return None;
            }
        };
        self.pending = None;

        match msg.result {
            Ok(items) => {
                self.last_error = None;
                self.apply(pending, items);
                None
            }
            Err(error) => {
                warn!(id = self.id, page = pending.page, %error, "page fetch failed");
                self.last_error = Some(error.clone());
                let id = self.id;
                let page = pending.page;
                Some(Box::pin(async move {
                    Some(Box::new(FetchFailedMsg { id, page, error }) as Msg)
                }))
            }
        }
    }

    fn apply(&mut self, pending: Pending, items: Vec<T>) {
        match self.source.data_mode() {
            DataMode::Slice => {
                self.collection = Some(items);
                self.clamp_current_page();
                self.deliver_slice();
            }
            DataMode::Callback if self.display == DisplayMode::LoadMore => {
                if pending.reset {
                    self.loaded_pages.clear();
                }
                // Reloading a page replaces its earlier contents in place.
                match self.loaded_pages.iter_mut().find(|(p, _)| *p == pending.page) {
                    Some((_, existing)) => *existing = items,
                    None => self.loaded_pages.push((pending.page, items)),
                }
                let merged = self
                    .loaded_pages
                    .iter()
                    .flat_map(|(_, items)| items.iter().cloned())
                    .collect();
                self.deliver(merged);
            }
            DataMode::Callback => self.deliver(items),
        }
    }

    fn request(&mut self, page: usize, reset: bool) -> Cmd {
        // A reset still in flight carries over to the request replacing it.
        let reset = reset || self.pending.is_some_and(|p| p.reset);
        self.tag = self.tag.wrapping_add(1);
        let tag = self.tag;
        self.pending = Some(Pending { tag, page, reset });

        let id = self.id;
        debug!(id, page, tag, mode = ?self.source.data_mode(), "requesting data");
        let fetch = self.source.fetch(page);
        Box::pin(async move {
            let result = fetch.await;
            Some(Box::new(PageLoadedMsg {
                id,
                tag,
                page,
                result,
            }) as Msg)
        })
    }

    fn slice_range(&self, len: usize) -> Range<usize> {
        let per_page = match &self.source {
            Source::Slice { per_page, .. } => *per_page,
            Source::Callback { .. } => return 0..len,
        };
        let end = self.current_page.saturating_mul(per_page).min(len);
        let start = match self.display {
            DisplayMode::LoadMore => 0,
            DisplayMode::Numbered | DisplayMode::Dotted => {
                (self.current_page - 1).saturating_mul(per_page).min(end)
            }
        };
        start..end
    }

    fn deliver_slice(&mut self) {
        let Some(collection) = &self.collection else {
            return;
        };
        let items = collection[self.slice_range(collection.len())].to_vec();
        self.deliver(items);
    }

    fn deliver(&mut self, items: Vec<T>) {
        self.rendered = items;
        debug!(
            id = self.id,
            page = self.current_page,
            items = self.rendered.len(),
            "delivering page"
        );
        if let Some(render) = &self.on_page_rendered {
            render(&self.rendered);
        }
        if self.delivered_page != self.current_page {
            let old = std::mem::replace(&mut self.delivered_page, self.current_page);
            if let Some(changed) = &self.on_page_changed {
                changed(self.current_page, old);
            }
        }
        if !self.input.focused() {
            self.input.set_page(self.current_page);
        }
    }
}

impl<T: Clone + Send + 'static> PaginationHandle for Model<T> {
    fn refresh(&mut self, page: Option<usize>) -> Option<Cmd> {
        Model::refresh(self, page)
    }

    fn current_page(&self) -> usize {
        Model::current_page(self)
    }

    fn items_on_page(&self) -> usize {
        Model::items_on_page(self)
    }

    fn total_pages(&self) -> usize {
        Model::total_pages(self)
    }
}
