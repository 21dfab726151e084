//! Styles for the paginator's navigation controls.

use lipgloss_extras::prelude::*;

/// Styles applied when rendering the paginator.
///
/// Disabled buttons stay in place and are only rendered faint, so the
/// control row keeps its width as the page changes.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Enabled first/prev/next/last buttons.
    pub button: Style,
    /// Disabled first/prev/next/last buttons.
    pub disabled_button: Style,
    /// The page-number field while not being edited.
    pub input: Style,
    /// The page-number field while being edited.
    pub focused_input: Style,
    /// The static "1" shown instead of the field for single-page results.
    pub only_one: Style,
    /// The "of N pages" label.
    pub total: Style,
    /// The current page's dot.
    pub active_dot: Style,
    /// Every other dot.
    pub inactive_dot: Style,
    /// The load-more button.
    pub load_more: Style,
    /// The load-more button while a page is in flight.
    pub loading: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        };
        let accent = AdaptiveColor {
            Light: "#874BFD",
            Dark: "#7D56F4",
        };

        Self {
            button: Style::new().bold(true),
            disabled_button: Style::new().faint(true),
            input: Style::new().underline(true),
            focused_input: Style::new().underline(true).foreground(accent.clone()),
            only_one: Style::new(),
            total: Style::new().foreground(subdued.clone()),
            active_dot: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            inactive_dot: Style::new().foreground(AdaptiveColor {
                Light: "#C2B8C2",
                Dark: "#4D4D4D",
            }),
            load_more: Style::new().bold(true).foreground(accent),
            loading: Style::new().faint(true).foreground(subdued),
        }
    }
}
