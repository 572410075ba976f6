use super::fold;
use crate::model::Book;

/// Remove every book whose title equals `title`, ignoring case.
///
/// Returns how many were removed. Survivors keep their relative order.
pub fn run(books: &mut Vec<Book>, title: &str) -> usize {
    let wanted = fold(title);
    let before = books.len();
    books.retain(|b| fold(&b.title) != wanted);
    before - books.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::book;

    #[test]
    fn removes_case_insensitive_exact_match() {
        let mut books = vec![book("Dune", "Frank Herbert", true)];
        assert_eq!(run(&mut books, "dUNE"), 1);
        assert!(books.is_empty());
    }

    #[test]
    fn does_not_match_substrings() {
        let mut books = vec![book("Dune Messiah", "Frank Herbert", false)];
        assert_eq!(run(&mut books, "dune"), 0);
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn removes_all_duplicates_and_keeps_order() {
        let mut books = vec![
            book("A", "1", false),
            book("Dune", "2", false),
            book("B", "3", false),
            book("DUNE", "4", true),
            book("C", "5", false),
        ];

        assert_eq!(run(&mut books, "dune"), 2);

        let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn second_removal_finds_nothing() {
        let mut books = vec![book("Dune", "Frank Herbert", true)];
        assert_eq!(run(&mut books, "dune"), 1);
        assert_eq!(run(&mut books, "dune"), 0);
    }

    #[test]
    fn whitespace_is_significant() {
        let mut books = vec![book("Dune", "Frank Herbert", true)];
        assert_eq!(run(&mut books, " Dune"), 0);
        assert_eq!(books.len(), 1);
    }
}
