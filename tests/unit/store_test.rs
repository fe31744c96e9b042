#[cfg(test)]
mod tests {
    use crate::store::{FileStore, KeyValueStore, MemoryStore, StoreError};

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("slot").unwrap().is_none());

        store.set("slot", "[1,2]").unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(store.len(), 1);

        store.remove("slot").unwrap();
        assert!(store.is_empty());
        // Removing twice is fine
        store.remove("slot").unwrap();
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested");

        FileStore::new(&path).set("spelldeck.review_queue", "[]").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get("spelldeck.review_queue").unwrap().as_deref(),
            Some("[]")
        );
        assert!(path.join("spelldeck.review_queue.json").exists());
        assert!(!path.join("spelldeck.review_queue.json.tmp").exists());
    }

    #[test]
    fn test_file_store_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("never-written").unwrap().is_none());
        store.remove("never-written").unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(store.set(key, "x"), Err(StoreError::InvalidKey(_))), "{key}");
        }
    }
}
