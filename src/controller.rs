use std::io;
use std::io::Write;

use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::core::command::{Command, CommandError};
use crate::loans::command::borrowing_summary_cmd::{BorrowingSummaryCommand, BorrowingSummaryCommandRequest};
use crate::loans::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::loans::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::loans::domain::service::Library;
use crate::members::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
use crate::persistence::json_store::JsonFileStore;
use crate::utils::{math, text};

const MENU: &[(&str, &str)] = &[
    ("1", "Add Book"),
    ("2", "Add Member"),
    ("3", "Issue Book"),
    ("4", "Return Book"),
    ("5", "Show Borrowing Summary"),
    ("6", "List & Dictionary Ops"),
    ("7", "String Ops"),
    ("8", "Other Ops (Sorting/Recursion)"),
    ("9", "Save All Data"),
    ("0", "Exit"),
];

// The loop never dies on a failed operation: every error is reported as a
// plain line and the next command is read.
pub(crate) fn run(library: &mut Library, store: &JsonFileStore) {
    loop {
        println!("\n--- Library Management System ---");
        for (key, label) in MENU {
            println!("{}. {}", key, label);
        }
        let choice = match prompt("Enter your choice: ") {
            Ok(choice) => choice,
            // stdin is gone; leave the same way the exit command does.
            Err(_) => {
                save_data(library, store);
                println!("Exiting.");
                break;
            }
        };
        match choice.as_str() {
            "0" => {
                save_data(library, store);
                println!("Exiting.");
                break;
            }
            "1" => report(add_book(library)),
            "2" => report(add_member(library)),
            "3" => report(issue_book(library)),
            "4" => report(return_book(library)),
            "5" => report(show_borrowing_summary(library)),
            "6" => report(list_and_dict_operations(library)),
            "7" => report(string_operations(library)),
            "8" => report(other_operations(library)),
            "9" => save_data(library, store),
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn report(res: Result<(), CommandError>) {
    if let Err(err) = res {
        println!("Error: {}", err);
    }
}

fn save_data(library: &Library, store: &JsonFileStore) {
    match store.save(library) {
        Ok(()) => println!("All data saved successfully."),
        Err(err) => println!("Error saving data: {}", err),
    }
}

fn prompt(label: &str) -> Result<String, CommandError> {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => Err(CommandError::Other { message: "input stream closed".to_string() }),
        Ok(_) => Ok(line.trim().to_string()),
    }
}

fn prompt_i64(label: &str) -> Result<i64, CommandError> {
    let raw = prompt(label)?;
    raw.parse::<i64>().map_err(|_| CommandError::Validation {
        message: format!("not a valid number: {}", raw),
    })
}

fn add_book(library: &mut Library) -> Result<(), CommandError> {
    let isbn = prompt("Enter ISBN: ")?;
    if library.catalog.find_by_isbn(isbn.as_str()).is_some() {
        println!("Book with this ISBN already exists.");
        return Ok(());
    }
    let title = prompt("Enter title: ")?;
    let author = prompt("Enter author: ")?;
    let copies = prompt_i64("Enter number of copies: ")?;
    let is_ebook = prompt("Is this an E-book? (y/n): ")?.to_lowercase() == "y";
    let req = if is_ebook {
        AddBookCommandRequest::ebook(
            title.as_str(), author.as_str(), isbn.as_str(), copies,
            prompt("Pub Year: ")?.as_str(), prompt("Desc: ")?.as_str(),
            prompt("Format: ")?.as_str(), prompt("Link: ")?.as_str())
    } else {
        AddBookCommandRequest::new(
            title.as_str(), author.as_str(), isbn.as_str(), copies,
            prompt("Pub Year: ")?.as_str(), prompt("Desc: ")?.as_str())
    };
    let res = AddBookCommand::new(library).execute(req)?;
    println!("Book '{}' added.", res.book.title());
    Ok(())
}

fn add_member(library: &mut Library) -> Result<(), CommandError> {
    let member_id = prompt("Enter member ID: ")?;
    if library.members.find_by_id(member_id.as_str()).is_some() {
        println!("Member with this ID already exists.");
        return Ok(());
    }
    let name = prompt("Enter name: ")?;
    let age = prompt_i64("Enter age: ")?;
    let membership_type = text::capitalize(prompt("Membership Type (Standard/Premium): ")?.as_str());
    let res = AddMemberCommand::new(library).execute(
        AddMemberCommandRequest::new(name.as_str(), member_id.as_str(), age, membership_type.as_str()))?;
    println!("Member '{}' added.", res.member.name);
    Ok(())
}

fn issue_book(library: &mut Library) -> Result<(), CommandError> {
    let member_id = prompt("Enter member ID: ")?;
    let isbn = prompt("Enter book ISBN: ")?;
    let res = IssueBookCommand::new(library).execute(
        IssueBookCommandRequest::new(member_id.as_str(), isbn.as_str()))?;
    println!("'{}' issued to '{}'.", res.loan.title, res.loan.member_name);
    Ok(())
}

fn return_book(library: &mut Library) -> Result<(), CommandError> {
    let member_id = prompt("Enter member ID: ")?;
    let isbn = prompt("Enter book ISBN: ")?;
    let res = ReturnBookCommand::new(library).execute(
        ReturnBookCommandRequest::new(member_id.as_str(), isbn.as_str()))?;
    println!("'{}' returned by '{}'.", res.loan.title, res.loan.member_name);
    Ok(())
}

fn show_borrowing_summary(library: &mut Library) -> Result<(), CommandError> {
    if library.ledger.is_empty() {
        println!("No books are currently borrowed.");
        return Ok(());
    }
    let res = BorrowingSummaryCommand::new(library).execute(BorrowingSummaryCommandRequest::new())?;
    for entry in res.summary {
        println!("\nMember: {} (ID: {})", entry.member_name, entry.member_id);
        for book in entry.books {
            println!("  - {} (ISBN: {})", book.title, book.isbn);
        }
    }
    Ok(())
}

fn list_and_dict_operations(library: &mut Library) -> Result<(), CommandError> {
    println!("\n1. List All Books\n2. List All Members\n3. Remove Duplicate Books (by ISBN)\n4. Find Second Most Issued Book\n5. Sort Books by Title");
    let choice = prompt("Choose an option: ")?;
    match choice.as_str() {
        "1" => {
            for book in library.catalog.iter() {
                println!("\n{}", book.detailed_info());
            }
        }
        "2" => {
            for member in library.members.iter() {
                println!("\nName: {}, ID: {}, Age: {}", member.name, member.member_id, member.age);
            }
        }
        "3" => {
            let removed = library.catalog.dedupe_by_isbn();
            if removed > 0 {
                println!("Removed {} duplicates.", removed);
            } else {
                println!("No duplicates found.");
            }
        }
        "4" => {
            match library.second_most_issued() {
                Some((isbn, _count)) => {
                    let title = library.catalog.find_by_isbn(isbn.as_str())
                        .map(|book| book.title().to_string())
                        .unwrap_or_else(|| "Unknown Book".to_string());
                    println!("Second most issued book: '{}'", title);
                }
                None => println!("Not enough books issued."),
            }
        }
        "5" => {
            for book in library.catalog.sorted_by_title() {
                println!("- {} by {}", book.title(), book.author());
            }
        }
        _ => {}
    }
    Ok(())
}

fn string_operations(library: &mut Library) -> Result<(), CommandError> {
    println!("\n--- String Operations ---");
    println!("1. Reverse Book Titles");
    println!("2. Remove Vowels from Author Names");
    println!("3. Count Char Frequency in Titles");
    println!("4. Check Title Palindrome");
    println!("5. Search Substring in Titles");
    println!("6. Format Member Names");
    println!("7. Compare Two Author Names");
    println!("8. Convert Book Titles to Uppercase");
    let choice = prompt("Choose an option: ")?;
    match choice.as_str() {
        "1" => {
            for book in library.catalog.iter() {
                println!("'{}' -> '{}'", book.title(), text::reverse(book.title()));
            }
        }
        "2" => {
            for book in library.catalog.iter() {
                println!("'{}' -> '{}'", book.author(), text::strip_vowels(book.author()));
            }
        }
        "3" => {
            let needle = prompt("Enter char: ")?;
            let count: usize = library.catalog.iter()
                .map(|book| text::count_occurrences(book.title(), needle.as_str()))
                .sum();
            println!("Count: {}", count);
        }
        "4" => {
            for book in library.catalog.iter() {
                let verdict = if text::is_palindrome(book.title()) {
                    "a palindrome"
                } else {
                    "not a palindrome"
                };
                println!("'{}' is {}", book.title(), verdict);
            }
        }
        "5" => {
            let needle = prompt("Enter substring: ")?.to_lowercase();
            for book in library.catalog.iter() {
                if book.title().to_lowercase().contains(needle.as_str()) {
                    println!("{}", book.detailed_info());
                }
            }
        }
        "6" => {
            for member in library.members.iter_mut() {
                member.name = text::title_case(member.name.as_str());
            }
            println!("Names formatted.");
        }
        "7" => {
            let first = prompt("Author 1: ")?;
            let second = prompt("Author 2: ")?;
            if first.to_lowercase() == second.to_lowercase() {
                println!("Same");
            } else {
                println!("Different");
            }
        }
        "8" => {
            for book in library.catalog.iter_mut() {
                let upper = book.title().to_uppercase();
                book.details_mut().title = upper;
            }
            println!("Titles converted to uppercase.");
        }
        _ => {}
    }
    Ok(())
}

fn other_operations(library: &mut Library) -> Result<(), CommandError> {
    println!("\n1. Sort Members by Name\n2. Recursive Factorial Example");
    let choice = prompt("Choose an option: ")?;
    match choice.as_str() {
        "1" => {
            for member in library.members.sorted_by_name() {
                println!("- {} (ID: {})", member.name, member.member_id);
            }
        }
        "2" => {
            let n = prompt_i64("Enter number for factorial: ")?;
            println!("Factorial of {} is {}", n, math::factorial(n));
        }
        _ => {}
    }
    Ok(())
}
