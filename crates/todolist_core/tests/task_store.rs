use std::collections::HashSet;
use todolist_core::{TaskStore, TaskValidationError};
use uuid::Uuid;

fn snapshot(store: &TaskStore) -> Vec<(Uuid, String, bool)> {
    store
        .iter()
        .map(|task| (task.id, task.text().to_string(), task.completed))
        .collect()
}

#[test]
fn append_to_empty_store_creates_incomplete_task() {
    let mut store = TaskStore::new();

    let task = store.append("Buy milk").unwrap().clone();

    assert_eq!(store.len(), 1);
    assert_eq!(task.text(), "Buy milk");
    assert!(!task.completed);
    assert_eq!(store.tasks()[0], task);
}

#[test]
fn append_grows_store_by_exactly_one() {
    let mut store = TaskStore::new();
    for (index, text) in ["a", " b", "c ", "  multi word  ", "ü"].iter().enumerate() {
        store.append(*text).unwrap();
        assert_eq!(store.len(), index + 1);
        assert!(!store.tasks()[index].completed);
    }
}

#[test]
fn append_blank_text_leaves_store_unchanged() {
    let mut store = TaskStore::new();
    store.append("keep").unwrap();
    let before = snapshot(&store);

    for text in ["", " ", "  ", "\t\n", "\u{00a0}", "\u{feff}", " \u{feff} "] {
        let err = store.append(text).unwrap_err();
        assert_eq!(err, TaskValidationError::EmptyText);
    }

    assert_eq!(snapshot(&store), before);
}

#[test]
fn append_accepts_next_line_control_as_text() {
    let mut store = TaskStore::new();
    let text = store.append("\u{85}").unwrap().text().to_string();

    assert_eq!(text, "\u{85}");
    assert_eq!(store.len(), 1);
}

#[test]
fn append_keeps_untrimmed_text() {
    let mut store = TaskStore::new();
    let text = store.append("  padded  ").unwrap().text().to_string();
    assert_eq!(text, "  padded  ");
}

#[test]
fn duplicate_text_yields_distinct_ids() {
    let mut store = TaskStore::new();
    let first = store.append("X").unwrap().id;
    let second = store.append("X").unwrap().id;

    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
    assert!(store.iter().all(|task| task.text() == "X"));
}

#[test]
fn ids_are_unique_across_session() {
    let mut store = TaskStore::new();
    let mut seen = HashSet::new();
    for round in 0..200 {
        let id = store.append(format!("task {round}")).unwrap().id;
        assert!(seen.insert(id));
        if round % 3 == 0 {
            store.remove(id);
        }
    }
}

#[test]
fn toggle_flips_only_the_target() {
    let mut store = TaskStore::new();
    let a = store.append("A").unwrap().id;
    let b = store.append("B").unwrap().id;

    assert!(store.toggle(a));

    assert!(store.get(a).unwrap().completed);
    assert!(!store.get(b).unwrap().completed);
    assert_eq!(store.get(a).unwrap().text(), "A");
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut store = TaskStore::new();
    let a = store.append("A").unwrap().id;
    let before = snapshot(&store);

    store.toggle(a);
    store.toggle(a);

    assert_eq!(snapshot(&store), before);
}

#[test]
fn unknown_id_is_noop_for_toggle_and_remove() {
    let mut store = TaskStore::new();
    store.append("A").unwrap();
    store.append("B").unwrap();
    let before = snapshot(&store);
    let unknown = Uuid::new_v4();

    assert!(!store.toggle(unknown));
    assert!(store.remove(unknown).is_none());
    assert_eq!(snapshot(&store), before);
}

#[test]
fn remove_is_idempotent() {
    let mut store = TaskStore::new();
    let a = store.append("A").unwrap().id;
    store.append("B").unwrap();

    let removed = store.remove(a).expect("first remove should return task");
    assert_eq!(removed.text(), "A");
    let after_first = snapshot(&store);

    assert!(store.remove(a).is_none());
    assert_eq!(snapshot(&store), after_first);
}

#[test]
fn order_survives_toggle_and_remove() {
    let mut store = TaskStore::new();
    let ids = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|text| store.append(*text).unwrap().id)
        .collect::<Vec<_>>();

    store.toggle(ids[3]);
    store.toggle(ids[0]);
    store.remove(ids[2]);
    store.remove(ids[0]);

    let texts = store.iter().map(|task| task.text()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["two", "four", "five"]);
    assert_eq!(store.position(ids[4]), Some(2));
    assert!(store.get(ids[3]).unwrap().completed);
}

#[test]
fn toggle_then_remove_scenario() {
    let mut store = TaskStore::new();
    let a = store.append("A").unwrap().id;
    let b = store.append("B").unwrap().id;

    store.toggle(a);
    let state = snapshot(&store);
    assert_eq!(
        state,
        vec![(a, "A".to_string(), true), (b, "B".to_string(), false)]
    );

    store.remove(a);
    assert_eq!(snapshot(&store), vec![(b, "B".to_string(), false)]);
}
