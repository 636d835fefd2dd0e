use std::fs;
use std::path::{Path, PathBuf};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::log::{info, warn};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::loans::domain::service::Library;

// JsonFileStore persists the whole library as four flat json documents, one
// per store, each rewritten in full on every save.
pub(crate) struct JsonFileStore {
    books_path: PathBuf,
    members_path: PathBuf,
    borrowed_path: PathBuf,
    transactions_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(config: &Configuration) -> Self {
        Self {
            books_path: config.books_file(),
            members_path: config.members_file(),
            borrowed_path: config.borrowed_file(),
            transactions_path: config.transactions_file(),
        }
    }

    // Loading never fails: a store whose file is missing or unreadable
    // starts out empty, and a session always comes up.
    pub fn load(&self) -> Library {
        let library = Library::new(
            load_or_default(self.books_path.as_path()),
            load_or_default(self.members_path.as_path()),
            load_or_default(self.borrowed_path.as_path()),
            load_or_default(self.transactions_path.as_path()),
        );
        info!("loaded {} books, {} members, {} active loans, {} transactions",
              library.catalog.len(), library.members.len(),
              library.ledger.len(), library.transactions.len());
        library
    }

    // Files are rewritten one after the other; a failure surfaces to the
    // caller but does not undo files already written.
    pub fn save(&self, library: &Library) -> LibraryResult<()> {
        save_document(self.books_path.as_path(), &library.catalog)?;
        save_document(self.members_path.as_path(), &library.members)?;
        save_document(self.borrowed_path.as_path(), &library.ledger)?;
        save_document(self.transactions_path.as_path(), &library.transactions)?;
        info!("all data saved");
        Ok(())
    }
}

fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return T::default(),
    };
    match serde_json::from_str(content.as_str()) {
        Ok(value) => value,
        Err(err) => {
            warn!("discarding corrupt data in {}: {}", path.display(), err);
            T::default()
        }
    }
}

fn save_document<T: Serialize>(path: &Path, document: &T) -> LibraryResult<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json).map_err(|err| LibraryError::io(
        format!("failed to write {}: {}", path.display(), err).as_str()))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::tempdir;
    use crate::catalog::domain::model::BookEntity;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::loans::domain::service::Library;
    use crate::members::domain::model::MemberEntity;
    use crate::persistence::json_store::JsonFileStore;

    fn store_in(dir: &std::path::Path) -> JsonFileStore {
        JsonFileStore::new(&Configuration::new(dir.to_string_lossy().as_ref()))
    }

    fn populated_library() -> Library {
        let mut library = Library::default();
        library.catalog.add_book(
            BookEntity::physical("paper title", "author", "111", 2, "1999", "a novel")
                .expect("should build book")).expect("should add book");
        library.catalog.add_book(
            BookEntity::ebook("digital title", "author", "222", 1, "2010", "", "EPUB", "http://x")
                .expect("should build ebook")).expect("should add book");
        library.members.add_member(
            MemberEntity::new("alice", "m1", 30, "Premium")
                .expect("should build member")).expect("should add member");
        library.members.add_member(
            MemberEntity::new("carol", "m2", 25, "Gold")
                .expect("should build member")).expect("should add member");
        library.issue_book("m1", "111").expect("should issue book");
        library.issue_book("m1", "222").expect("should issue book");
        library
    }

    #[test]
    fn test_should_round_trip_all_stores() {
        let dir = tempdir().expect("should create temp dir");
        let store = store_in(dir.path());
        let library = populated_library();

        store.save(&library).expect("should save");
        let reloaded = store.load();
        assert_eq!(library, reloaded);
        assert!(matches!(reloaded.catalog.find_by_isbn("222"),
                         Some(BookEntity::EBook { .. })));
    }

    #[test]
    fn test_should_load_empty_stores_when_files_missing() {
        let dir = tempdir().expect("should create temp dir");
        let library = store_in(dir.path()).load();
        assert!(library.catalog.is_empty());
        assert!(library.members.is_empty());
        assert!(library.ledger.is_empty());
        assert!(library.transactions.is_empty());
    }

    #[test]
    fn test_should_substitute_empty_store_for_corrupt_file() {
        let dir = tempdir().expect("should create temp dir");
        let store = store_in(dir.path());
        store.save(&populated_library()).expect("should save");
        fs::write(dir.path().join("books.json"), "{ not json").expect("should write");

        let reloaded = store.load();
        assert!(reloaded.catalog.is_empty());
        assert_eq!(2, reloaded.members.len());
        assert_eq!(1, reloaded.ledger.len());
        assert_eq!(2, reloaded.transactions.len());
    }

    #[test]
    fn test_should_load_documents_in_the_published_layout() {
        let dir = tempdir().expect("should create temp dir");
        fs::write(dir.path().join("books.json"), r#"[
            {"type": "Book", "title": "t", "author": "a", "isbn": "111",
             "total_copies": 2, "available_copies": 1,
             "publication_year": "1999", "description": ""},
            {"type": "EBook", "title": "e", "author": "a", "isbn": "222",
             "total_copies": 1, "available_copies": 1,
             "publication_year": "2010", "description": "",
             "format_type": "PDF", "download_link": "http://x"}
        ]"#).expect("should write");
        fs::write(dir.path().join("members.json"), r#"[
            {"name": "alice", "member_id": "m1", "age": 30,
             "membership_type": "Premium", "borrowing_limit": 5}
        ]"#).expect("should write");
        fs::write(dir.path().join("borrowed.json"), r#"{"m1": ["111"]}"#)
            .expect("should write");
        fs::write(dir.path().join("transactions.json"), r#"[
            {"type": "issue", "member": "m1", "book": "111", "date": "2024-03-01"}
        ]"#).expect("should write");

        let library = store_in(dir.path()).load();
        assert_eq!(2, library.catalog.len());
        assert!(matches!(library.catalog.find_by_isbn("222"),
                         Some(BookEntity::EBook { .. })));
        assert_eq!(5, library.members.find_by_id("m1").expect("should find member").borrowing_limit);
        assert!(library.ledger.holds("m1", "111"));
        assert_eq!(1, library.transactions.len());
    }

    #[test]
    fn test_should_surface_save_failure_and_keep_earlier_files() {
        let dir = tempdir().expect("should create temp dir");
        let store = store_in(dir.path());
        // A directory squatting on the borrowed file makes its write fail.
        fs::create_dir(dir.path().join("borrowed.json")).expect("should create dir");

        let res = store.save(&populated_library());
        assert!(matches!(res, Err(LibraryError::Io { message: _ })));
        assert!(dir.path().join("books.json").is_file());
        assert!(dir.path().join("members.json").is_file());
        assert!(!dir.path().join("transactions.json").exists());
    }
}
