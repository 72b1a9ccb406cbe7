//! Id assignment

use crate::book::{Book, BookId};

/// Id given to the first record of an empty collection
pub const SEED_ID: BookId = BookId(1);

/// Next id for a record appended to `books`
///
/// Max existing id + 1, or [`SEED_ID`] when the collection is empty. The
/// result is strictly greater than every id in `books`, whatever their order.
/// Returns `None` when a stored id is already `u64::MAX`.
#[must_use]
pub fn next_id(books: &[Book]) -> Option<BookId> {
    match books.iter().map(|book| book.id).max() {
        Some(max) => max.successor(),
        None => Some(SEED_ID),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_seeds() {
        assert_eq!(next_id(&[]), Some(BookId(1)));
    }

    #[test]
    fn uses_max_not_last() {
        let books = vec![
            Book::new(BookId(5), "a"),
            Book::new(BookId(9), "b"),
            Book::new(BookId(2), "c"),
        ];
        assert_eq!(next_id(&books), Some(BookId(10)));
    }

    #[test]
    fn survives_gaps() {
        let books = vec![Book::new(BookId(1), "a"), Book::new(BookId(4), "b")];
        assert_eq!(next_id(&books), Some(BookId(5)));
    }

    #[test]
    fn exhausted_id_space_yields_none() {
        let books = vec![
            Book::new(BookId(3), "a"),
            Book::new(BookId(u64::MAX), "stored"),
        ];
        assert_eq!(next_id(&books), None);
    }

    #[test]
    fn one_below_max_still_assigns() {
        let books = vec![Book::new(BookId(u64::MAX - 1), "a")];
        assert_eq!(next_id(&books), Some(BookId(u64::MAX)));
    }
}
