use serde::{Deserialize, Serialize};
use crate::catalog::domain::model::BookEntity;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::loans::domain::service::Library;

pub(crate) struct AddBookCommand<'a> {
    library: &'a mut Library,
}

impl<'a> AddBookCommand<'a> {
    pub(crate) fn new(library: &'a mut Library) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    pub(crate) copies: i64,
    pub(crate) publication_year: String,
    pub(crate) description: String,
    pub(crate) format_type: Option<String>,
    pub(crate) download_link: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, copies: i64,
               publication_year: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            copies,
            publication_year: publication_year.to_string(),
            description: description.to_string(),
            format_type: None,
            download_link: None,
        }
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, copies: i64,
                 publication_year: &str, description: &str,
                 format_type: &str, download_link: &str) -> Self {
        Self {
            format_type: Some(format_type.to_string()),
            download_link: Some(download_link.to_string()),
            ..Self::new(title, author, isbn, copies, publication_year, description)
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookEntity> {
        match (&self.format_type, &self.download_link) {
            (Some(format_type), Some(download_link)) => BookEntity::ebook(
                self.title.as_str(), self.author.as_str(), self.isbn.as_str(), self.copies,
                self.publication_year.as_str(), self.description.as_str(),
                format_type.as_str(), download_link.as_str()),
            _ => BookEntity::physical(
                self.title.as_str(), self.author.as_str(), self.isbn.as_str(), self.copies,
                self.publication_year.as_str(), self.description.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book().map_err(CommandError::from)?;
        self.library.catalog.add_book(book.clone()).map_err(CommandError::from)?;
        Ok(AddBookCommandResponse::new(book))
    }
}
