use fileops_store::{FileStore, Replacement, SilentReporter, UpdateMode};
use proptest::prelude::*;
use std::sync::Arc;

fn silent_store(base: &std::path::Path) -> FileStore {
    FileStore::new(base).with_reporter(Arc::new(SilentReporter))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn created_content_reads_back_exactly(content in "\\PC*") {
        let dir = tempfile::tempdir().unwrap();
        let store = silent_store(dir.path());

        prop_assert!(store.create("file.txt", &content).is_ok());
        prop_assert_eq!(store.read("file.txt").unwrap(), content);
    }

    #[test]
    fn append_is_concatenation(first in "\\PC*", second in "\\PC*") {
        let dir = tempfile::tempdir().unwrap();
        let store = silent_store(dir.path());

        store.create("file.txt", &first).unwrap();
        store.update("file.txt", &second, UpdateMode::Append).unwrap();

        prop_assert_eq!(store.read("file.txt").unwrap(), format!("{first}{second}"));
    }

    #[test]
    fn replace_matches_literal_substitution(
        content in "[ab\\n]{0,40}",
        old in "[ab]{1,3}",
        new in "[abc]{0,3}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = silent_store(dir.path());
        store.create("file.txt", &content).unwrap();

        let outcome = store.replace("file.txt", &old, &new).unwrap();
        let expected = content.replace(&old, &new);

        prop_assert_eq!(store.read("file.txt").unwrap(), expected.clone());
        if expected == content {
            prop_assert_eq!(outcome, Replacement::Unchanged);
        } else {
            prop_assert_eq!(outcome, Replacement::Replaced { occurrences: content.matches(old.as_str()).count() });
        }
    }
}
