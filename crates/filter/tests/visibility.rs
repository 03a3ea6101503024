use lesson_filter::{viewer_list, visible_only, Overrides, SliceRule, Visible};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: u32,
    visible: bool,
}

impl Visible for Entry {
    fn is_visible(&self) -> bool {
        self.visible
    }
}

fn entry(id: u32, visible: bool) -> Entry {
    Entry { id, visible }
}

#[test]
fn hidden_entries_are_dropped_in_order() {
    let items = vec![entry(1, true), entry(2, false), entry(3, true)];
    assert_eq!(visible_only(&items), vec![entry(1, true), entry(3, true)]);
}

#[test]
fn visibility_is_idempotent() {
    let items = vec![
        entry(1, true),
        entry(2, false),
        entry(3, true),
        entry(4, false),
    ];
    let once = visible_only(&items);
    assert_eq!(visible_only(&once), once);
}

#[test]
fn viewer_list_runs_both_stages() {
    // Default course: the slice stage is the identity, then hidden lessons
    // are removed.
    let items = vec![entry(1, true), entry(2, false), entry(3, true)];
    let got = viewer_list(&Overrides::new(), "any-course", &items);
    assert_eq!(got, vec![entry(1, true), entry(3, true)]);
}

#[test]
fn viewer_list_slices_before_visibility() {
    let mut overrides = Overrides::new();
    overrides.set("fixup", SliceRule::DropPrefix { count: 2 });

    // The hidden lesson inside the dropped prefix must not shift the slice.
    let items = vec![
        entry(1, false),
        entry(2, true),
        entry(3, true),
        entry(4, false),
        entry(5, true),
    ];
    let got = viewer_list(&overrides, "fixup", &items);
    assert_eq!(got, vec![entry(3, true), entry(5, true)]);
}

#[test]
fn viewer_list_of_all_hidden_is_empty() {
    let items = vec![entry(1, false), entry(2, false)];
    assert_eq!(viewer_list(&Overrides::new(), "c", &items), vec![]);
}
