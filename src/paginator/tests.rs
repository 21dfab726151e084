//! Tests for the paginator component.

use super::*;
use crate::error::{Error, FetchError};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Captures everything the paginator hands to its parent.
struct Recorder<T> {
    renders: Arc<Mutex<Vec<Vec<T>>>>,
    changes: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
            changes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn attach(&self, config: Config<T>) -> Config<T> {
        let renders = Arc::clone(&self.renders);
        let changes = Arc::clone(&self.changes);
        config
            .on_page_rendered(move |items| renders.lock().unwrap().push(items.to_vec()))
            .on_page_changed(move |new, old| changes.lock().unwrap().push((new, old)))
    }

    fn renders(&self) -> Vec<Vec<T>> {
        self.renders.lock().unwrap().clone()
    }

    fn last(&self) -> Option<Vec<T>> {
        self.renders.lock().unwrap().last().cloned()
    }

    fn changes(&self) -> Vec<(usize, usize)> {
        self.changes.lock().unwrap().clone()
    }
}

/// Runs a command and feeds its message back into the paginator.
async fn settle<T: Clone + Send + 'static>(p: &mut Model<T>, cmd: Option<Cmd>) -> Option<Cmd> {
    let msg = cmd?.await?;
    p.update(msg)
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

/// A per-page source that logs which pages were requested.
fn logged_pages(
    total: usize,
    pages: Vec<Vec<char>>,
) -> (Source<char>, Arc<Mutex<Vec<usize>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let requests = Arc::clone(&log);
    let source = Source::callback_fn(total, move |page| {
        requests.lock().unwrap().push(page);
        pages.get(page - 1).cloned().unwrap_or_default()
    });
    (source, log)
}

fn letters(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[tokio::test]
async fn test_dotted_slice_scenario() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fetches);
    let source = Source::slice_fn(3, move || {
        counter.fetch_add(1, Ordering::SeqCst);
        letters("abcdefg")
    });
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::Dotted, source))).unwrap();

    let cmd = Some(p.init());
    assert!(settle(&mut p, cmd).await.is_none());
    assert_eq!(p.total_pages(), 3);
    assert_eq!(rec.last().unwrap(), letters("abc"));

    // Clicking dot 3 slices locally.
    assert!(p.go_to_page(3).is_none());
    assert_eq!(rec.last().unwrap(), letters("g"));
    assert_eq!(p.items_on_page(), 1);
    assert_eq!(rec.changes(), vec![(3, 1)]);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_load_more_accumulates_pages() {
    let (source, log) = logged_pages(0, vec![letters("xy"), letters("z")]);
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::LoadMore, source))).unwrap();

    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    assert_eq!(rec.last().unwrap(), letters("xy"));

    let cmd = p.load_more();
    settle(&mut p, cmd).await;
    assert_eq!(rec.renders(), vec![letters("xy"), letters("xyz")]);
    assert_eq!(p.current_page(), 2);
    assert_eq!(p.items_on_page(), 3);
    assert_eq!(*log.lock().unwrap(), vec![1, 2]);
    assert_eq!(rec.changes(), vec![(2, 1)]);
}

#[tokio::test]
async fn test_load_more_concatenates_in_fetch_order() {
    let pages: Vec<Vec<char>> = ["ab", "cd", "e", "fg"].iter().map(|s| letters(s)).collect();
    let (source, _) = logged_pages(0, pages);
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::LoadMore, source))).unwrap();

    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    for _ in 0..3 {
        let cmd = p.load_more();
        settle(&mut p, cmd).await;
    }

    assert_eq!(
        rec.renders(),
        vec![letters("ab"), letters("abcd"), letters("abcde"), letters("abcdefg")]
    );
    assert_eq!(p.current_page(), 4);
}

#[tokio::test]
async fn test_load_more_ignored_while_loading() {
    let (source, log) = logged_pages(0, vec![letters("a"), letters("b"), letters("c")]);
    let mut p = Model::new(Config::new(DisplayMode::LoadMore, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    let first = p.load_more();
    assert!(first.is_some());
    assert!(p.is_loading());
    assert!(p.load_more().is_none());
    assert_eq!(p.current_page(), 2);

    settle(&mut p, first).await;
    assert_eq!(p.items(), letters("ab").as_slice());
    assert_eq!(*log.lock().unwrap(), vec![1, 2]);
}

#[tokio::test]
async fn test_numbered_callback_fetches_exact_page() {
    let pages = vec![letters("ab"), letters("cd"), letters("mn"), letters("op"), letters("q")];
    let (source, log) = logged_pages(5, pages);
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::Numbered, source))).unwrap();

    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    let cmd = p.go_to_page(3);
    settle(&mut p, cmd).await;

    assert_eq!(rec.last().unwrap(), letters("mn"));
    assert_eq!(p.total_pages(), 5);
    assert_eq!(p.items_on_page(), 2);
    assert_eq!(*log.lock().unwrap(), vec![1, 3]);
    assert_eq!(rec.changes(), vec![(3, 1)]);
}

#[tokio::test]
async fn test_refresh_without_page_refetches_current_page() {
    let pages = vec![letters("a"), letters("b"), letters("c")];
    let (source, log) = logged_pages(3, pages);
    let rec = Recorder::new();
    let config = Config::new(DisplayMode::Numbered, source).with_initial_page(2);
    let mut p = Model::new(rec.attach(config)).unwrap();

    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    let cmd = p.refresh(None);
    settle(&mut p, cmd).await;

    assert_eq!(p.current_page(), 2);
    assert_eq!(*log.lock().unwrap(), vec![2, 2]);
    assert_eq!(rec.renders(), vec![letters("b"), letters("b")]);
    assert!(rec.changes().is_empty());
}

#[tokio::test]
async fn test_refresh_with_current_page_behaves_like_reload() {
    let (source, log) = logged_pages(3, vec![letters("a"), letters("b")]);
    let mut p = Model::new(Config::new(DisplayMode::Dotted, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    let cmd = p.refresh(Some(1));
    assert!(cmd.is_some());
    settle(&mut p, cmd).await;
    assert_eq!(*log.lock().unwrap(), vec![1, 1]);
}

#[tokio::test]
async fn test_refresh_to_first_page_resets_load_more() {
    let (source, _) = logged_pages(0, vec![letters("ab"), letters("cd"), letters("ef")]);
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::LoadMore, source))).unwrap();

    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    for _ in 0..2 {
        let cmd = p.load_more();
        settle(&mut p, cmd).await;
    }
    assert_eq!(p.items(), letters("abcdef").as_slice());

    let cmd = p.refresh(Some(1));
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 1);
    assert_eq!(rec.last().unwrap(), letters("ab"));
    assert_eq!(rec.changes().last(), Some(&(1, 3)));

    // Accumulation starts over from the fresh first page.
    let cmd = p.load_more();
    settle(&mut p, cmd).await;
    assert_eq!(p.items(), letters("abcd").as_slice());
}

#[tokio::test]
async fn test_reload_in_load_more_replaces_current_page() {
    let version = Arc::new(AtomicUsize::new(0));
    let v = Arc::clone(&version);
    let source = Source::callback_fn(0, move |page| {
        let n = v.load(Ordering::SeqCst);
        vec![format!("{page}.{n}")]
    });
    let mut p = Model::new(Config::new(DisplayMode::LoadMore, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    let cmd = p.load_more();
    settle(&mut p, cmd).await;

    version.store(1, Ordering::SeqCst);
    let cmd = p.refresh(None);
    settle(&mut p, cmd).await;
    assert_eq!(p.items(), ["1.0".to_string(), "2.1".to_string()]);
}

#[tokio::test]
async fn test_slice_refresh_replaces_collection() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    let source = Source::slice_fn(2, move || {
        if c.fetch_add(1, Ordering::SeqCst) == 0 {
            letters("abcd")
        } else {
            letters("wxyz!")
        }
    });
    let mut p = Model::new(Config::new(DisplayMode::Numbered, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    assert!(p.go_to_page(2).is_none());
    assert_eq!(p.items(), letters("cd").as_slice());
    assert_eq!(p.total_pages(), 2);

    let cmd = p.refresh(None);
    settle(&mut p, cmd).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(p.current_page(), 2);
    assert_eq!(p.items(), letters("yz").as_slice());
    assert_eq!(p.total_pages(), 3);
}

#[tokio::test]
async fn test_slice_page_change_before_collection_arrives() {
    let rec = Recorder::new();
    let source = Source::from_vec(2, letters("abcde"));
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::Numbered, source))).unwrap();

    let init = Some(p.init());
    assert!(p.refresh(Some(3)).is_none());
    settle(&mut p, init).await;

    assert_eq!(rec.renders(), vec![letters("e")]);
    assert_eq!(rec.changes(), vec![(3, 1)]);
}

#[tokio::test]
async fn test_slice_load_more_delivers_prefix() {
    let source = Source::from_vec(2, letters("abcde"));
    let mut p = Model::new(Config::new(DisplayMode::LoadMore, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    assert_eq!(p.items(), letters("ab").as_slice());

    assert!(p.load_more().is_none());
    assert_eq!(p.items(), letters("abcd").as_slice());
    assert!(p.load_more().is_none());
    assert_eq!(p.items(), letters("abcde").as_slice());
    assert_eq!(p.items_on_page(), 5);

    // The button stays enabled past the end.
    assert!(p.load_more().is_none());
    assert_eq!(p.current_page(), 4);
    assert_eq!(p.items(), letters("abcde").as_slice());
}

#[tokio::test]
async fn test_numbered_controls_bounds() {
    // Five pages from a callback source.
    let (source, _) = logged_pages(5, vec![vec!['x']; 5]);
    let mut p = Model::new(Config::new(DisplayMode::Numbered, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    for page in 1..=5 {
        let cmd = p.go_to_page(page);
        settle(&mut p, cmd).await;
        let c = p.controls();
        assert_eq!(c.first, page != 1, "first on page {page}");
        assert_eq!(c.prev, page != 1, "prev on page {page}");
        assert_eq!(c.next, page != 5, "next on page {page}");
        assert_eq!(c.last, page != 5, "last on page {page}");
        assert!(c.input);
    }

    // An empty collection has no pages at all.
    let mut empty = Model::new(Config::new(
        DisplayMode::Numbered,
        Source::from_vec(3, Vec::<char>::new()),
    ))
    .unwrap();
    let cmd = Some(empty.init());
    settle(&mut empty, cmd).await;
    let c = empty.controls();
    assert_eq!(c.total_pages, 0);
    assert!(!c.first && !c.prev && !c.next && !c.last && !c.input);
    assert!(empty.next_page().is_none());
}

#[tokio::test]
async fn test_single_page_shows_static_input() {
    let (source, _) = logged_pages(1, vec![letters("abc")]);
    let mut p = Model::new(Config::new(DisplayMode::Numbered, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    let c = p.controls();
    assert!(!c.input);
    assert!(!c.first && !c.prev && !c.next && !c.last);

    let view = lipgloss::strip_ansi(&p.view());
    assert!(view.contains(" 1 "));
    assert!(view.contains("of 1 page"));
    assert!(!view.contains("pages"));

    // The goto key does nothing without an editable field.
    p.update(key(KeyCode::Char(':')));
    assert!(!p.editing_page());
}

#[tokio::test]
async fn test_unmount_suppresses_pending_response() {
    let (source, _) = logged_pages(5, vec![vec!['q']; 5]);
    let rec = Recorder::new();
    let config = Config::new(DisplayMode::Numbered, source).with_initial_page(4);
    let mut p = Model::new(rec.attach(config)).unwrap();

    let cmd = Some(p.init());
    p.unmount();
    assert!(settle(&mut p, cmd).await.is_none());
    assert!(rec.renders().is_empty());
    assert!(p.items().is_empty());
    assert!(p.refresh(None).is_none());
}

#[tokio::test]
async fn test_stale_responses_are_dropped() {
    let pages = vec![letters("a"), letters("b"), letters("c")];
    let (source, _) = logged_pages(3, pages);
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::Numbered, source))).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    let to_two = p.go_to_page(2);
    let to_three = p.go_to_page(3);
    settle(&mut p, to_three).await;
    settle(&mut p, to_two).await;

    assert_eq!(p.current_page(), 3);
    assert_eq!(rec.renders(), vec![letters("a"), letters("c")]);
    assert_eq!(rec.changes(), vec![(3, 1)]);
}

#[tokio::test]
async fn test_messages_for_other_paginators_are_ignored() {
    let (a_source, _) = logged_pages(2, vec![letters("a"), letters("b")]);
    let (b_source, _) = logged_pages(2, vec![letters("y"), letters("z")]);
    let mut a = Model::new(Config::new(DisplayMode::Dotted, a_source)).unwrap();
    let mut b = Model::new(Config::new(DisplayMode::Dotted, b_source)).unwrap();
    assert_ne!(a.id(), b.id());

    let b_msg = b.init().await.unwrap();
    let _ = a.init();
    assert!(a.update(b_msg).is_none());
    assert!(a.items().is_empty());
    assert!(a.is_loading());
}

#[tokio::test]
async fn test_fetch_failure_keeps_state_and_notifies_parent() {
    let source: Source<char> = Source::callback(3, |page| async move {
        match page {
            2 => Err(FetchError::msg("503 Service Unavailable")),
            _ => Ok(vec![char::from(b'a' + page as u8)]),
        }
    });
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::Numbered, source))).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    assert_eq!(p.items(), ['b']);

    let cmd = p.go_to_page(2);
    let failed = settle(&mut p, cmd).await.expect("failure command");
    let msg = failed.await.unwrap();
    let failed = msg.downcast_ref::<FetchFailedMsg>().unwrap();
    assert_eq!(failed.id, p.id());
    assert_eq!(failed.page, 2);
    assert!(failed.error.to_string().contains("503"));

    // The page is not rolled back and the old items stay on screen.
    assert_eq!(p.current_page(), 2);
    assert_eq!(p.items(), ['b']);
    assert!(p.last_error().is_some());
    assert!(rec.changes().is_empty());
    assert!(!p.is_loading());

    let cmd = p.go_to_page(3);
    settle(&mut p, cmd).await;
    assert_eq!(p.items(), ['d']);
    assert!(p.last_error().is_none());
    assert_eq!(rec.changes(), vec![(3, 1)]);
}

#[tokio::test]
async fn test_failed_load_more_keeps_accumulated_items() {
    let source: Source<u32> = Source::callback(0, |page| async move {
        if page == 2 {
            Err(FetchError::msg("timeout"))
        } else {
            Ok(vec![page as u32])
        }
    });
    let mut p = Model::new(Config::new(DisplayMode::LoadMore, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    let cmd = p.load_more();
    assert!(settle(&mut p, cmd).await.is_some());
    assert_eq!(p.items(), [1]);
    assert_eq!(p.current_page(), 2);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let result = Model::new(Config::new(
        DisplayMode::Dotted,
        Source::callback_fn(0, |_| vec![1]),
    ));
    assert_eq!(result.unwrap_err(), Error::MissingTotal(DisplayMode::Dotted));

    let settings: Result<Settings, _> = serde_json::from_str(r#"{"display": "pager"}"#);
    assert!(settings.is_err());
}

#[tokio::test]
async fn test_page_input_navigation() {
    let (source, log) = logged_pages(5, vec![vec!['p']; 5]);
    let mut p = Model::new(Config::new(DisplayMode::Numbered, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    assert!(p.update(key(KeyCode::Char(':'))).is_none());
    assert!(p.editing_page());
    p.update(key(KeyCode::Char('4')));
    let cmd = p.update(key(KeyCode::Enter));
    settle(&mut p, cmd).await;
    assert!(!p.editing_page());
    assert_eq!(p.current_page(), 4);
    assert_eq!(p.input().value(), "4");

    // Out-of-range numbers are clamped.
    p.update(key(KeyCode::Char(':')));
    p.update(key(KeyCode::Char('9')));
    p.update(key(KeyCode::Char('9')));
    let cmd = p.update(key(KeyCode::Enter));
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 5);
    assert_eq!(*log.lock().unwrap(), vec![1, 4, 5]);
}

#[tokio::test]
async fn test_page_input_rejects_garbage_and_cancel() {
    let (source, log) = logged_pages(5, vec![vec!['p']; 5]);
    let mut p = Model::new(Config::new(DisplayMode::Numbered, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    p.update(key(KeyCode::Char(':')));
    p.input.set_value("two");
    assert!(p.submit_input().is_none());
    assert_eq!(p.input().value(), "1");

    p.update(key(KeyCode::Char(':')));
    p.update(key(KeyCode::Char('3')));
    assert!(p.update(key(KeyCode::Esc)).is_none());
    assert!(!p.editing_page());
    assert_eq!(p.input().value(), "1");
    assert_eq!(*log.lock().unwrap(), vec![1]);
}

#[tokio::test]
async fn test_keyboard_navigation() {
    let (source, log) = logged_pages(4, vec![vec!['k']; 4]);
    let mut p = Model::new(Config::new(DisplayMode::Numbered, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    assert!(p.update(key(KeyCode::Left)).is_none());
    let cmd = p.update(key(KeyCode::End));
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 4);
    assert!(p.update(key(KeyCode::Right)).is_none());

    let cmd = p.update(key(KeyCode::Char('h')));
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 3);
    let cmd = p.update(key(KeyCode::Home));
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 1);
    assert_eq!(*log.lock().unwrap(), vec![1, 4, 3, 1]);
}

#[tokio::test]
async fn test_dotted_digit_jumps_to_dot() {
    let source = Source::from_vec(1, letters("abc"));
    let mut p = Model::new(Config::new(DisplayMode::Dotted, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    assert!(p.update(key(KeyCode::Char('3'))).is_none());
    assert_eq!(p.items(), ['c']);
    p.update(key(KeyCode::Char('7')));
    assert_eq!(p.current_page(), 3);

    let view = lipgloss::strip_ansi(&p.view());
    assert_eq!(view, "○ ○ •");
}

#[tokio::test]
async fn test_load_more_view_and_key() {
    let (source, _) = logged_pages(0, vec![letters("a"), letters("b")]);
    let mut p = Model::new(Config::new(DisplayMode::LoadMore, source)).unwrap();
    let cmd = Some(p.init());
    assert_eq!(lipgloss::strip_ansi(&p.view()), "Loading...");
    settle(&mut p, cmd).await;
    assert_eq!(lipgloss::strip_ansi(&p.view()), "Load more...");

    let cmd = p.update(key(KeyCode::Char('m')));
    settle(&mut p, cmd).await;
    assert_eq!(p.items(), ['a', 'b']);
    assert!(p.first_page().is_none());
    assert!(p.last_page().is_none());
}

#[tokio::test]
async fn test_numbered_view_labels() {
    let (source, _) = logged_pages(5, vec![vec!['v']; 5]);
    let config = Config::new(DisplayMode::Numbered, source).with_initial_page(3);
    let mut p = Model::new(config).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    let view = lipgloss::strip_ansi(&p.view());
    assert!(view.starts_with("« ‹ 3"));
    assert!(view.contains("of 5 pages"));
    assert!(view.ends_with("› »"));
}

#[tokio::test]
async fn test_handle_trait_object() {
    let (source, _) = logged_pages(3, vec![letters("ab"), letters("c")]);
    let mut p = Model::new(Config::new(DisplayMode::Numbered, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;

    let handle: &mut dyn PaginationHandle = &mut p;
    assert_eq!(handle.current_page(), 1);
    assert_eq!(handle.items_on_page(), 2);
    assert_eq!(handle.total_pages(), 3);
    let cmd = handle.refresh(Some(2));
    settle(&mut p, cmd).await;
    assert_eq!(p.items_on_page(), 1);
}

#[tokio::test]
async fn test_set_total_pages_for_callback_source() {
    let (source, _) = logged_pages(0, vec![letters("a")]);
    let mut p = Model::new(Config::new(DisplayMode::LoadMore, source)).unwrap();
    assert_eq!(p.total_pages(), 0);
    assert!(p.set_total_pages(7).is_none());
    assert_eq!(p.total_pages(), 7);

    let mut sliced = Model::new(Config::new(
        DisplayMode::Dotted,
        Source::from_vec(2, letters("abc")),
    ))
    .unwrap();
    assert!(sliced.set_total_pages(9).is_none());
    let cmd = Some(sliced.init());
    settle(&mut sliced, cmd).await;
    assert_eq!(sliced.total_pages(), 2);
}

#[tokio::test]
async fn test_shorter_collection_clamps_current_page() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    let source = Source::slice_fn(1, move || {
        if c.fetch_add(1, Ordering::SeqCst) == 0 {
            letters("abcde")
        } else {
            letters("ab")
        }
    });
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::Numbered, source))).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    assert!(p.go_to_page(5).is_none());
    assert_eq!(p.items(), ['e']);

    let cmd = p.refresh(None);
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 2);
    assert_eq!(p.total_pages(), 2);
    assert_eq!(p.items(), ['b']);
    assert_eq!(p.input().value(), "2");
    assert_eq!(rec.changes(), vec![(5, 1), (2, 5)]);

    let c = p.controls();
    assert!(c.first && c.prev);
    assert!(!c.next && !c.last);
    assert!(lipgloss::strip_ansi(&p.view()).contains("of 2 pages"));
}

#[tokio::test]
async fn test_lowering_total_clamps_current_page() {
    let pages: Vec<Vec<char>> = "abcde".chars().map(|c| vec![c]).collect();
    let (source, log) = logged_pages(5, pages);
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::Dotted, source))).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    let cmd = p.last_page();
    settle(&mut p, cmd).await;
    assert_eq!(p.items(), ['e']);

    // Growing the total or shrinking it above the current page is free.
    assert!(p.set_total_pages(6).is_none());
    let cmd = p.set_total_pages(3);
    assert!(cmd.is_some());
    assert_eq!(p.current_page(), 3);
    assert!(p.on_last_page());
    settle(&mut p, cmd).await;

    assert_eq!(p.items(), ['c']);
    assert_eq!(*log.lock().unwrap(), vec![1, 5, 3]);
    assert_eq!(rec.changes(), vec![(5, 1), (3, 5)]);
}

#[tokio::test]
async fn test_load_more_never_steps_back() {
    let pages: Vec<Vec<char>> = "abcdef".chars().map(|c| vec![c]).collect();
    let (source, log) = logged_pages(0, pages);
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::LoadMore, source))).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    for _ in 0..3 {
        let cmd = p.load_more();
        settle(&mut p, cmd).await;
    }
    assert_eq!(p.current_page(), 4);

    // An earlier page other than 1 reloads the current one.
    let cmd = p.refresh(Some(2));
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 4);
    assert_eq!(p.items(), letters("abcd").as_slice());
    assert!(p.go_to_page(3).is_none());

    let cmd = p.load_more();
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 5);
    assert_eq!(p.items(), letters("abcde").as_slice());
    assert_eq!(*log.lock().unwrap(), vec![1, 2, 3, 4, 4, 5]);
    assert_eq!(rec.changes(), vec![(2, 1), (3, 2), (4, 3), (5, 4)]);
}

#[tokio::test]
async fn test_slice_load_more_keeps_its_prefix() {
    let source = Source::from_vec(2, letters("abcdefg"));
    let mut p = Model::new(Config::new(DisplayMode::LoadMore, source)).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    p.load_more();
    p.load_more();
    assert_eq!(p.items(), letters("abcdef").as_slice());

    assert!(p.go_to_page(2).is_none());
    let cmd = p.refresh(Some(2));
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 3);
    assert_eq!(p.items(), letters("abcdef").as_slice());
}

#[tokio::test]
async fn test_refresh_to_page_zero_reloads_current_page() {
    let (source, log) = logged_pages(3, vec![letters("a"), letters("b"), letters("c")]);
    let rec = Recorder::new();
    let mut p = Model::new(rec.attach(Config::new(DisplayMode::Numbered, source))).unwrap();
    let cmd = Some(p.init());
    settle(&mut p, cmd).await;
    let cmd = p.go_to_page(2);
    settle(&mut p, cmd).await;

    assert!(p.go_to_page(0).is_none());
    let cmd = p.refresh(Some(0));
    settle(&mut p, cmd).await;
    assert_eq!(p.current_page(), 2);
    assert_eq!(*log.lock().unwrap(), vec![1, 2, 2]);
    assert_eq!(rec.changes(), vec![(2, 1)]);

    let (source, log) = logged_pages(0, vec![letters("a")]);
    let mut feed = Model::new(Config::new(DisplayMode::LoadMore, source)).unwrap();
    let cmd = Some(feed.init());
    settle(&mut feed, cmd).await;
    let cmd = feed.refresh(Some(0));
    settle(&mut feed, cmd).await;
    assert_eq!(feed.current_page(), 1);
    assert_eq!(feed.items(), ['a']);
    assert_eq!(*log.lock().unwrap(), vec![1, 1]);
}

proptest! {
    #[test]
    fn prop_slice_pages_match_index_arithmetic(
        len in 0usize..60,
        per_page in 1usize..12,
        pick in 0usize..100,
    ) {
        let collection: Vec<usize> = (0..len).collect();
        let expected_pages = len.div_ceil(per_page);
        let mut p = Model::new(Config::new(
            DisplayMode::Numbered,
            Source::from_vec(per_page, collection.clone()),
        ))
        .unwrap();
        let msg = futures::executor::block_on(p.init()).unwrap();
        p.update(msg);
        prop_assert_eq!(p.total_pages(), expected_pages);

        if expected_pages > 0 {
            let page = pick % expected_pages + 1;
            p.go_to_page(page);
            let start = (page - 1) * per_page;
            let end = (page * per_page).min(len);
            prop_assert_eq!(p.items(), &collection[start..end]);
            prop_assert_eq!(p.items_on_page(), end - start);
        }
    }

    #[test]
    fn prop_controls_disabled_only_at_edges(total in 1usize..20, pick in 0usize..100) {
        let page = pick % total + 1;
        let source = Source::callback_fn(total, |_| vec![()]);
        let config = Config::new(DisplayMode::Numbered, source).with_initial_page(page);
        let p = Model::new(config).unwrap();
        let c = p.controls();
        prop_assert_eq!(c.first, page != 1);
        prop_assert_eq!(c.prev, page != 1);
        prop_assert_eq!(c.next, page != total);
        prop_assert_eq!(c.last, page != total);
        prop_assert_eq!(c.input, total > 1);
    }
}
