use bookshelf::api::Statistics;
use bookshelf::model::Book;
use colored::Colorize;
use std::io::{self, Write};

const EMPTY_LIST: &str = "No books found!";

#[derive(Debug, Clone, Copy)]
pub(super) enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

pub(super) fn write_message<W: Write>(
    out: &mut W,
    level: MessageLevel,
    text: &str,
) -> io::Result<()> {
    match level {
        MessageLevel::Info => writeln!(out, "{}", text),
        MessageLevel::Success => writeln!(out, "{}", text.green()),
        MessageLevel::Warning => writeln!(out, "{}", text.yellow()),
        MessageLevel::Error => writeln!(out, "{}", text.red()),
    }
}

/// `<index>. <title> by <author> (<year>) - <genre> - <Read|Unread>`
pub(super) fn format_book(index: usize, book: &Book) -> String {
    format!(
        "{}. {} by {} ({}) - {} - {}",
        index,
        book.title,
        book.author,
        book.year,
        book.genre,
        book.status_label()
    )
}

/// One line per book, numbered from 1.
pub(super) fn book_lines(books: &[Book]) -> Vec<String> {
    books
        .iter()
        .enumerate()
        .map(|(i, book)| format_book(i + 1, book))
        .collect()
}

pub(super) fn write_books<W: Write>(out: &mut W, heading: &str, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return write_message(out, MessageLevel::Warning, EMPTY_LIST);
    }
    writeln!(out, "{}", heading.bold())?;
    for line in book_lines(books) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(super) fn statistics_lines(stats: &Statistics) -> Vec<String> {
    vec![
        format!("Total books: {}", stats.total),
        format!("Books read: {}", stats.read),
        format!("Percentage read: {:.1}%", stats.percent_read),
    ]
}

pub(super) fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    for line in statistics_lines(stats) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
