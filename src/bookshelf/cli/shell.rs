//! The interactive menu.
//!
//! Generic over its input and output so sessions can be scripted in tests.
//! End of input at any prompt is treated like choosing Exit.

use super::input::{parse_read_status, parse_year};
use super::render::{write_books, write_message, write_statistics, MessageLevel};
use bookshelf::api::Catalog;
use bookshelf::store::BookStore;
use chrono::Datelike;
use std::io::{self, BufRead, Write};
use tracing::debug;

const MENU: &[&str] = &[
    "1. Add a book",
    "2. Remove a book",
    "3. Search for a book",
    "4. Display all books",
    "5. Display statistics",
    "6. Exit",
];

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SessionEnd {
    Saved,
    SaveFailed,
}

enum Flow {
    Continue,
    Exit,
}

pub(super) struct Shell<'a, S: BookStore, R: BufRead, W: Write> {
    catalog: &'a mut Catalog<S>,
    input: R,
    out: W,
    current_year: i32,
}

impl<'a, S: BookStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub(super) fn new(catalog: &'a mut Catalog<S>, input: R, out: W) -> Self {
        Self {
            catalog,
            input,
            out,
            current_year: bookshelf::model::today().year(),
        }
    }

    /// Run menu iterations until Exit (or end of input), then save.
    pub(super) fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            let flow = match self.menu()? {
                None => Flow::Exit,
                Some(choice) => match choice.trim() {
                    "1" => self.add_book()?,
                    "2" => self.remove_book()?,
                    "3" => self.search_books()?,
                    "4" => self.display_all()?,
                    "5" => self.display_statistics()?,
                    "6" => Flow::Exit,
                    other => {
                        debug!(choice = other, "invalid menu choice");
                        self.message(MessageLevel::Warning, "Invalid choice! Please try again.")?;
                        Flow::Continue
                    }
                },
            };

            if let Flow::Exit = flow {
                return self.exit();
            }
        }
    }

    fn menu(&mut self) -> io::Result<Option<String>> {
        writeln!(self.out)?;
        writeln!(self.out, "Welcome to your Personal Library Manager!")?;
        for line in MENU {
            writeln!(self.out, "{}", line)?;
        }
        self.prompt("Enter your choice: ")
    }

    fn add_book(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        let Some(title) = self.prompt("Enter the book title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter the author: ")? else {
            return Ok(Flow::Exit);
        };

        let year = loop {
            let Some(raw) = self.prompt("Enter the publication year: ")? else {
                return Ok(Flow::Exit);
            };
            match parse_year(&raw, self.current_year) {
                Some(year) => break year,
                None => self.message(MessageLevel::Warning, "Please enter a valid year!")?,
            }
        };

        let Some(genre) = self.prompt("Enter the genre: ")? else {
            return Ok(Flow::Exit);
        };

        let read = loop {
            let Some(raw) = self.prompt("Have you read this book? (yes/no): ")? else {
                return Ok(Flow::Exit);
            };
            match parse_read_status(&raw) {
                Some(read) => break read,
                None => self.message(MessageLevel::Warning, "Please enter 'yes' or 'no'!")?,
            }
        };

        self.catalog.add(title, author, year, genre, read);
        self.message(MessageLevel::Success, "Book added successfully!")?;
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        let Some(title) = self.prompt("Enter the title of the book to remove: ")? else {
            return Ok(Flow::Exit);
        };

        if self.catalog.remove(&title) {
            self.message(MessageLevel::Success, "Book removed successfully!")?;
        } else {
            self.message(MessageLevel::Warning, "Book not found!")?;
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        writeln!(self.out, "Search by:")?;
        writeln!(self.out, "1. Title")?;
        writeln!(self.out, "2. Author")?;
        let Some(choice) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        let results = match choice.trim() {
            "1" => {
                let Some(query) = self.prompt("Enter the title: ")? else {
                    return Ok(Flow::Exit);
                };
                self.catalog.search_by_title(&query)
            }
            "2" => {
                let Some(query) = self.prompt("Enter the author: ")? else {
                    return Ok(Flow::Exit);
                };
                self.catalog.search_by_author(&query)
            }
            _ => {
                self.message(MessageLevel::Warning, "Invalid choice!")?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.out)?;
        write_books(&mut self.out, "Matching Books:", &results)?;
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        write_books(&mut self.out, "Your Library:", self.catalog.books())?;
        Ok(Flow::Continue)
    }

    fn display_statistics(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        let stats = self.catalog.statistics();
        write_statistics(&mut self.out, &stats)?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> io::Result<SessionEnd> {
        writeln!(self.out)?;
        match self.catalog.save() {
            Ok(()) => {
                let location = self.catalog.store().location();
                self.message(
                    MessageLevel::Success,
                    &format!("Library saved to {}.", location.display()),
                )?;
                self.message(MessageLevel::Info, "Goodbye!")?;
                Ok(SessionEnd::Saved)
            }
            Err(e) => {
                self.message(MessageLevel::Error, &format!("Error saving library: {}", e))?;
                Ok(SessionEnd::SaveFailed)
            }
        }
    }

    /// Print `text` and read one line. None on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn message(&mut self, level: MessageLevel, text: &str) -> io::Result<()> {
        write_message(&mut self.out, level, text)
    }
}
