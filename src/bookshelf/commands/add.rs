use crate::model::Book;

/// Append a new book stamped with today's date and return a copy of it.
///
/// Callers validate `year` and normalize `read` beforehand.
pub fn run(
    books: &mut Vec<Book>,
    title: String,
    author: String,
    year: i32,
    genre: String,
    read: bool,
) -> Book {
    let book = Book::new(title, author, year, genre, read);
    books.push(book.clone());
    book
}
