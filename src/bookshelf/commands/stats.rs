use crate::model::Book;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub read: usize,
    /// Not rounded; presentation decides the precision.
    pub percent_read: f64,
}

pub fn run(books: &[Book]) -> Statistics {
    let total = books.len();
    let read = books.iter().filter(|b| b.read).count();
    let percent_read = if total == 0 {
        0.0
    } else {
        (read as f64 / total as f64) * 100.0
    };

    Statistics {
        total,
        read,
        percent_read,
    }
}
