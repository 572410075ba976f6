use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
    // chrono's serde impl writes NaiveDate as "YYYY-MM-DD"
    pub date_added: NaiveDate,
}

impl Book {
    pub fn new(title: String, author: String, year: i32, genre: String, read: bool) -> Self {
        Self {
            title,
            author,
            year,
            genre,
            read,
            date_added: today(),
        }
    }

    pub fn with_date_added(mut self, date: NaiveDate) -> Self {
        self.date_added = date;
        self
    }

    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new(
            "Dune".into(),
            "Frank Herbert".into(),
            1965,
            "Sci-Fi".into(),
            true,
        )
        .with_date_added(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
    }

    #[test]
    fn new_book_is_stamped_with_today() {
        let book = Book::new("A".into(), "B".into(), 2000, "C".into(), false);
        assert_eq!(book.date_added, today());
    }

    #[test]
    fn serializes_fields_in_declared_order() {
        let json = serde_json::to_string(&dune()).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Dune","author":"Frank Herbert","year":1965,"genre":"Sci-Fi","read":true,"date_added":"2024-03-09"}"#
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let json = r#"{"title":"Dune","author":"Frank Herbert","year":1965,"genre":"Sci-Fi","read":true,"date_added":"2024-03-09","rating":5}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn rejects_missing_fields_and_bad_dates() {
        let missing = r#"{"title":"Dune","author":"Frank Herbert","year":1965,"genre":"Sci-Fi","read":true}"#;
        assert!(serde_json::from_str::<Book>(missing).is_err());

        let bad_date = r#"{"title":"Dune","author":"Frank Herbert","year":1965,"genre":"Sci-Fi","read":true,"date_added":"09/03/2024"}"#;
        assert!(serde_json::from_str::<Book>(bad_date).is_err());
    }

    #[test]
    fn status_label() {
        let mut book = dune();
        assert_eq!(book.status_label(), "Read");
        book.read = false;
        assert_eq!(book.status_label(), "Unread");
    }
}
