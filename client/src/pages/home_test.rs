use std::cell::RefCell;

use super::*;
use crate::state::theme::{THEME_STORAGE_KEY, Theme};
use crate::util::theme_store::MemoryStore;

/// Store whose reads always fail.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PageError> {
        Err(PageError::Storage("SecurityError".to_owned()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PageError> {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Theme(Theme),
    Loading,
}

#[test]
fn start_page_applies_stored_theme_then_starts_loading() {
    let steps = RefCell::new(Vec::new());

    let result = start_page(
        Ok(MemoryStore::with_entry(THEME_STORAGE_KEY, "light")),
        |c| steps.borrow_mut().push(Step::Theme(c.theme())),
        || steps.borrow_mut().push(Step::Loading),
    );

    assert!(result.is_ok());
    assert_eq!(steps.into_inner(), vec![Step::Theme(Theme::Light), Step::Loading]);
}

#[test]
fn start_page_defaults_to_dark_with_empty_store() {
    let mut applied = None;

    start_page(Ok(MemoryStore::new()), |c| applied = Some(c.theme()), || {}).unwrap();

    assert_eq!(applied, Some(Theme::Dark));
}

#[test]
fn unavailable_storage_stops_before_loading() {
    let steps = RefCell::new(Vec::new());

    let result = start_page(
        Err::<MemoryStore, _>(PageError::StorageUnavailable),
        |c| steps.borrow_mut().push(Step::Theme(c.theme())),
        || steps.borrow_mut().push(Step::Loading),
    );

    assert_eq!(result, Err(PageError::StorageUnavailable));
    assert!(steps.into_inner().is_empty());
}

#[test]
fn failed_theme_read_stops_before_loading() {
    let mut loading_started = false;

    let result = start_page(Ok(BrokenStore), |_| {}, || loading_started = true);

    assert!(matches!(result, Err(PageError::Storage(_))));
    assert!(!loading_started);
}
