use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

fn default_publication_year() -> String {
    "N/A".to_string()
}

// BookDetails carries the fields every catalog record has, whatever the
// variant. available_copies stays within 0..=total_copies at all times.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookDetails {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: i64,
    pub available_copies: i64,
    #[serde(default = "default_publication_year")]
    pub publication_year: String,
    #[serde(default)]
    pub description: String,
}

impl BookDetails {
    pub fn new(title: &str, author: &str, isbn: &str, copies: i64,
               publication_year: &str, description: &str) -> LibraryResult<Self> {
        if title.is_empty() || author.is_empty() || isbn.is_empty() {
            return Err(LibraryError::validation("invalid book data: title, author and isbn are required"));
        }
        if copies < 0 {
            return Err(LibraryError::validation("invalid book data: copies cannot be negative"));
        }
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            total_copies: copies,
            available_copies: copies,
            publication_year: publication_year.to_string(),
            description: description.to_string(),
        })
    }
}

// BookEntity abstracts one title in the catalog. A printed book and an
// e-book share the same bookkeeping; the e-book carries delivery fields on
// top. The discriminator is persisted alongside the record.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub(crate) enum BookEntity {
    Book {
        #[serde(flatten)]
        details: BookDetails,
    },
    EBook {
        #[serde(flatten)]
        details: BookDetails,
        format_type: String,
        download_link: String,
    },
}

impl BookEntity {
    pub fn physical(title: &str, author: &str, isbn: &str, copies: i64,
                    publication_year: &str, description: &str) -> LibraryResult<Self> {
        Ok(BookEntity::Book {
            details: BookDetails::new(title, author, isbn, copies, publication_year, description)?,
        })
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, copies: i64,
                 publication_year: &str, description: &str,
                 format_type: &str, download_link: &str) -> LibraryResult<Self> {
        Ok(BookEntity::EBook {
            details: BookDetails::new(title, author, isbn, copies, publication_year, description)?,
            format_type: format_type.to_string(),
            download_link: download_link.to_string(),
        })
    }

    pub fn details(&self) -> &BookDetails {
        match self {
            BookEntity::Book { details } => details,
            BookEntity::EBook { details, .. } => details,
        }
    }

    pub fn details_mut(&mut self) -> &mut BookDetails {
        match self {
            BookEntity::Book { details } => details,
            BookEntity::EBook { details, .. } => details,
        }
    }

    pub fn title(&self) -> &str {
        self.details().title.as_str()
    }

    pub fn author(&self) -> &str {
        self.details().author.as_str()
    }

    pub fn isbn(&self) -> &str {
        self.details().isbn.as_str()
    }

    // Takes one copy off the shelf.
    pub fn issue_copy(&mut self) -> LibraryResult<()> {
        let details = self.details_mut();
        if details.available_copies < 1 {
            return Err(LibraryError::unavailable(
                format!("no copies of {} available", details.isbn).as_str()));
        }
        details.available_copies -= 1;
        Ok(())
    }

    // Puts one copy back. Refuses to go past total_copies, which can only
    // happen when the borrowed file disagrees with the catalog.
    pub fn return_copy(&mut self) -> LibraryResult<()> {
        let details = self.details_mut();
        if details.available_copies >= details.total_copies {
            return Err(LibraryError::runtime(
                format!("all copies of {} are already in the library", details.isbn).as_str()));
        }
        details.available_copies += 1;
        Ok(())
    }

    pub fn detailed_info(&self) -> String {
        let details = self.details();
        let mut info = format!(
            "Title: {}, Author: {}, ISBN: {}\nCopies (Available/Total): {}/{}\nYear: {}, Desc: {}",
            details.title, details.author, details.isbn,
            details.available_copies, details.total_copies,
            details.publication_year, details.description);
        if let BookEntity::EBook { format_type, download_link, .. } = self {
            info.push_str(format!("\nFormat: {}, Link: {}", format_type, download_link).as_str());
        }
        info
    }
}
