//! Store Behaviour Tests
//!
//! End-to-end scenarios and property checks against the public API.

#[cfg(test)]
mod tests {
    use crate::{StoreConfig, Todo, TodoError, TodoKey, TodoStore};
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn texts(store: &TodoStore) -> Vec<String> {
        store.get_all().into_iter().map(|(_, todo)| todo.text).collect()
    }

    #[test]
    fn test_add_then_remove_single() {
        let store = TodoStore::new();

        let key = store.add("buy milk").expect("add failed");
        assert_eq!(store.get_all(), vec![(key, Todo::new("buy milk"))]);

        store.remove(key);
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn test_remove_keeps_insertion_order() {
        let store = TodoStore::new();

        let a = store.add("a").unwrap();
        store.add("b").unwrap();
        store.add("c").unwrap();
        store.remove(a);

        assert_eq!(texts(&store), vec!["b", "c"]);
    }

    #[test]
    fn test_permissive_store_keeps_whitespace_text() {
        let store = TodoStore::new();
        let key = store.add("task").unwrap();

        store.update_text(key, "  ").unwrap();
        assert_eq!(store.get(key).unwrap().text, "  ");
    }

    #[test]
    fn test_strict_store_rejects_whitespace_text() {
        let store = TodoStore::with_config(StoreConfig::strict());
        let key = store.add("task").unwrap();

        let err = store.update_text(key, "  ").unwrap_err();
        assert!(matches!(err, TodoError::InvalidInput(_)));
        assert_eq!(store.get(key).unwrap().text, "task");
    }

    #[test]
    fn test_permissive_store_accepts_empty_add() {
        let store = TodoStore::new();
        let key = store.add("").unwrap();
        assert!(store.get(key).unwrap().is_blank());
    }

    #[test]
    fn test_toggle_round_trip() {
        let store = TodoStore::new();
        let key = store.add("laundry").unwrap();

        store.toggle_complete(key, true).unwrap();
        assert!(store.get(key).unwrap().completed);
        store.toggle_complete(key, false).unwrap();
        assert!(!store.get(key).unwrap().completed);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = TodoStore::new();
        let key = store.add("original").unwrap();

        let mut snapshot = store.get_all();
        snapshot[0].1.text = "changed".to_string();
        snapshot.clear();

        assert_eq!(store.get(key).unwrap().text, "original");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_second_registration_drops_first() {
        let store = TodoStore::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let counter = first.clone();
        store.on_change(move || counter.set(counter.get() + 1));
        let counter = second.clone();
        store.on_change(move || counter.set(counter.get() + 1));

        store.add("x").unwrap();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_observer_sees_committed_state() {
        let store = Rc::new(TodoStore::new());
        let observed = Rc::new(Cell::new(None::<bool>));

        let weak = Rc::downgrade(&store);
        let sink = observed.clone();
        store.on_change(move || {
            if let Some(store) = weak.upgrade() {
                sink.set(store.get_all().last().map(|(_, todo)| todo.completed));
            }
        });

        let key = store.add("watch").unwrap();
        assert_eq!(observed.get(), Some(false));
        store.toggle_complete(key, true).unwrap();
        assert_eq!(observed.get(), Some(true));
    }

    #[test]
    fn test_state_survives_panicking_observer() {
        let store = TodoStore::new();
        store.on_change(|| panic!("render failed"));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| store.add("kept")));
        assert!(result.is_err());
        assert_eq!(texts(&store), vec!["kept"]);
    }

    // ========================
    // Properties
    // ========================

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Remove(usize),
        Update(usize, String),
        Toggle(usize, bool),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z ]{0,8}".prop_map(Op::Add),
            (0usize..16).prop_map(Op::Remove),
            (0usize..16, "[a-z ]{0,8}").prop_map(|(i, t)| Op::Update(i, t)),
            (0usize..16, any::<bool>()).prop_map(|(i, c)| Op::Toggle(i, c)),
        ]
    }

    /// Indices past the end address a key that was never issued
    fn key_at(keys: &[TodoKey], i: usize) -> TodoKey {
        keys.get(i).copied().unwrap_or_else(|| TodoKey::new(10_000 + i as u64))
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        #[test]
        fn len_is_adds_minus_removes(
            items in prop::collection::vec("[a-z]{1,6}", 0..20),
            remove_mask in prop::collection::vec(any::<bool>(), 20),
        ) {
            let store = TodoStore::new();
            let keys: Vec<TodoKey> = items.iter().map(|t| store.add(t.as_str()).unwrap()).collect();

            let mut removed = 0;
            for (key, remove) in keys.iter().zip(&remove_mask) {
                if *remove {
                    store.remove(*key);
                    removed += 1;
                }
            }
            prop_assert_eq!(store.get_all().len(), items.len() - removed);
        }

        #[test]
        fn keys_are_unique(count in 0usize..50) {
            let store = TodoStore::new();
            let keys: HashSet<TodoKey> = (0..count).map(|i| store.add(i.to_string()).unwrap()).collect();
            prop_assert_eq!(keys.len(), count);
        }

        #[test]
        fn added_text_round_trips(text in ".{0,24}") {
            let store = TodoStore::new();
            let key = store.add(text.clone()).unwrap();
            let all = store.get_all();
            let expected = (key, Todo { text, completed: false });
            prop_assert!(all.contains(&expected));
        }

        #[test]
        fn every_successful_mutation_notifies_once(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let store = TodoStore::new();
            let count = Rc::new(Cell::new(0usize));
            let counter = count.clone();
            store.on_change(move || counter.set(counter.get() + 1));

            let mut keys: Vec<TodoKey> = Vec::new();
            let mut expected = 0usize;
            for op in ops {
                match op {
                    Op::Add(text) => {
                        keys.push(store.add(text).unwrap());
                        expected += 1;
                    }
                    Op::Remove(i) => {
                        store.remove(key_at(&keys, i));
                        expected += 1;
                    }
                    Op::Update(i, text) => {
                        if store.update_text(key_at(&keys, i), text).is_ok() {
                            expected += 1;
                        }
                    }
                    Op::Toggle(i, completed) => {
                        if store.toggle_complete(key_at(&keys, i), completed).is_ok() {
                            expected += 1;
                        }
                    }
                }
                prop_assert_eq!(store.get_all(), store.get_all());
            }
            prop_assert_eq!(count.get(), expected);
        }
    }
}
