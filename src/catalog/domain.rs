use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};

pub mod model;

// CatalogStore owns every book record known to the library, keyed by isbn.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct CatalogStore {
    books: Vec<BookEntity>,
}

impl CatalogStore {
    pub fn add_book(&mut self, book: BookEntity) -> LibraryResult<()> {
        if self.find_by_isbn(book.isbn()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", book.isbn()).as_str()));
        }
        self.books.push(book);
        Ok(())
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&BookEntity> {
        self.books.iter().find(|book| book.isbn() == isbn)
    }

    pub fn find_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut BookEntity> {
        self.books.iter_mut().find(|book| book.isbn() == isbn)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookEntity> {
        self.books.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, BookEntity> {
        self.books.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // Drops records whose isbn was already seen; the first occurrence wins.
    pub fn dedupe_by_isbn(&mut self) -> usize {
        let before = self.books.len();
        let mut seen = HashSet::new();
        self.books.retain(|book| seen.insert(book.isbn().to_string()));
        before - self.books.len()
    }

    pub fn sorted_by_title(&self) -> Vec<&BookEntity> {
        let mut sorted: Vec<&BookEntity> = self.books.iter().collect();
        sorted.sort_by_key(|book| book.title().to_lowercase());
        sorted
    }
}
