//! The page-number field shown by numbered navigation.
//!
//! A small single-line input that only accepts ASCII digits. While blurred it
//! mirrors the paginator's current page; while focused the user edits it and
//! the paginator reads it back on submit.

use super::style::Styles;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg};
use crossterm::event::KeyCode;
use unicode_width::UnicodeWidthStr;

const CURSOR: &str = "_";

/// Digit-only text field for direct page entry.
#[derive(Debug, Clone)]
pub struct PageInput {
    value: String,
    focus: bool,
    /// Minimum rendered width in terminal columns.
    pub width: usize,
    /// Maximum number of digits. Zero means unlimited.
    pub char_limit: usize,
}

impl Default for PageInput {
    fn default() -> Self {
        Self {
            value: "1".to_string(),
            focus: false,
            width: 3,
            char_limit: 6,
        }
    }
}

impl PageInput {
    /// Creates a blurred field showing page 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw text in the field.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the field's text.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Shows `page` in the field.
    pub fn set_page(&mut self, page: usize) {
        self.value = page.to_string();
    }

    /// Empties the field.
    pub fn reset(&mut self) {
        self.value.clear();
    }

    /// Handles a key press while focused. Non-digit characters are ignored.
    pub fn update(&mut self, key: &KeyMsg) {
        if !self.focus {
            return;
        }
        match key.key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.char_limit == 0 || self.value.len() < self.char_limit {
                    self.value.push(c);
                }
            }
            KeyCode::Backspace => {
                self.value.pop();
            }
            _ => {}
        }
    }

    /// Renders the field padded to its width.
    pub fn view(&self, styles: &Styles) -> String {
        let mut text = self.value.clone();
        if self.focus {
            text.push_str(CURSOR);
        }
        let pad = self.width.saturating_sub(UnicodeWidthStr::width(text.as_str()));
        text.push_str(&" ".repeat(pad));

        if self.focus {
            styles.focused_input.render(&text)
        } else {
            styles.input.render(&text)
        }
    }
}

impl Component for PageInput {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
