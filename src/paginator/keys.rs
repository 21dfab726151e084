//! Key bindings for the paginator.

use crate::key::{self, KeyMap as KeyMapTrait};

/// Key bindings for paginator navigation.
///
/// Which bindings are active depends on the display mode: numbered and
/// dotted navigation use first/prev/next/last, numbered navigation adds the
/// page-number field (`goto_page`, `submit`, `cancel`), and load-more
/// navigation listens only to `load_more`.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagination::paginator::PaginatorKeyMap;
/// use bubbletea_pagination::key;
///
/// let keymap = PaginatorKeyMap {
///     next_page: key::new_binding(vec![
///         key::with_keys_str(&["d", "right"]),
///         key::with_help("d/→", "next page"),
///     ]),
///     ..PaginatorKeyMap::default()
/// };
/// assert_eq!(keymap.next_page.help().key, "d/→");
/// ```
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Jump to page 1. Default keys: Home, 'g'
    pub first_page: key::Binding,
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// Jump to the last page. Default keys: End, 'G'
    pub last_page: key::Binding,
    /// Focus the page-number field. Default key: ':'
    pub goto_page: key::Binding,
    /// Submit the typed page number. Default key: Enter
    pub submit: key::Binding,
    /// Leave the page-number field unchanged. Default key: Esc
    pub cancel: key::Binding,
    /// Fetch one more page. Default keys: Enter, Space, 'm'
    pub load_more: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home", "g"]),
                key::with_help("g/home", "first page"),
            ]),
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end", "G"]),
                key::with_help("G/end", "last page"),
            ]),
            goto_page: key::new_binding(vec![
                key::with_keys_str(&[":"]),
                key::with_help(":", "go to page"),
            ]),
            submit: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "open page"),
            ]),
            cancel: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "cancel"),
            ]),
            load_more: key::new_binding(vec![
                key::with_keys_str(&["enter", "space", "m"]),
                key::with_help("enter/m", "load more"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.first_page, &self.prev_page, &self.next_page, &self.last_page],
            vec![&self.goto_page, &self.submit, &self.cancel],
            vec![&self.load_more],
        ]
    }
}
