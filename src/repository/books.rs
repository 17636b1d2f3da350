//! In-memory book store
//!
//! Records live in a `Vec` in insertion order. Lookups resolve an id to an
//! index, and mutations go through that index so changes land on the stored
//! record itself.

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records, in order
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// All books in insertion order
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Index of the first book with this id
    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Get a book by ID (first match wins on duplicate ids)
    pub fn find_by_id(&self, id: &str) -> AppResult<&Book> {
        let idx = self.position(id).ok_or_else(AppError::book_not_found)?;
        Ok(&self.books[idx])
    }

    /// Append a book as given; ids are not checked for uniqueness
    pub fn create(&mut self, book: Book) -> &Book {
        self.books.push(book);
        &self.books[self.books.len() - 1]
    }

    /// Take one copy out of inventory
    pub fn checkout(&mut self, id: &str) -> AppResult<&Book> {
        let idx = self.position(id).ok_or_else(AppError::unknown_book)?;
        let book = &mut self.books[idx];
        if book.quantity <= 0 {
            return Err(AppError::no_books_left());
        }
        book.quantity -= 1;
        Ok(&*book)
    }

    /// Put one copy back; there is no upper bound
    pub fn return_book(&mut self, id: &str) -> AppResult<&Book> {
        let idx = self.position(id).ok_or_else(AppError::unknown_book)?;
        let book = &mut self.books[idx];
        book.quantity = book.quantity.saturating_add(1);
        Ok(&*book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> BookStore {
        BookStore::with_books(Book::demo_shelf())
    }

    #[test]
    fn test_list_all_keeps_seed_order() {
        let store = seeded();
        let ids: Vec<&str> = store.list_all().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut store = seeded();
        assert_eq!(store.find_by_id("99").unwrap_err(), AppError::book_not_found());
        assert_eq!(store.checkout("99").unwrap_err(), AppError::unknown_book());
        assert_eq!(store.return_book("99").unwrap_err(), AppError::unknown_book());
    }

    #[test]
    fn test_empty_store() {
        let store = BookStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
        assert!(!seeded().is_empty());
    }

    #[test]
    fn test_checkout_until_empty() {
        let mut store = seeded();
        assert_eq!(store.checkout("1").unwrap().quantity, 1);
        assert_eq!(store.checkout("1").unwrap().quantity, 0);
        assert_eq!(store.checkout("1").unwrap_err(), AppError::no_books_left());
        assert_eq!(store.find_by_id("1").unwrap().quantity, 0);
    }

    #[test]
    fn test_checkout_refuses_negative_quantity() {
        let mut store = BookStore::new();
        store.create(Book::new("x", "", "", -2));
        assert_eq!(store.checkout("x").unwrap_err(), AppError::no_books_left());
        assert_eq!(store.find_by_id("x").unwrap().quantity, -2);
    }

    #[test]
    fn test_checkout_then_return_restores_quantity() {
        let mut store = seeded();
        let before = store.find_by_id("2").unwrap().quantity;
        store.checkout("2").unwrap();
        assert_eq!(store.return_book("2").unwrap().quantity, before);
    }

    #[test]
    fn test_return_is_unbounded() {
        let mut store = seeded();
        for _ in 0..3 {
            store.return_book("3").unwrap();
        }
        assert_eq!(store.find_by_id("3").unwrap().quantity, 9);

        store.create(Book::new("max", "", "", i64::MAX));
        assert_eq!(store.return_book("max").unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_create_then_find() {
        let mut store = seeded();
        let hamlet = Book::new("4", "Hamlet", "William Shakespeare", 2);
        assert_eq!(store.create(hamlet.clone()), &hamlet);
        assert_eq!(store.find_by_id("4").unwrap(), &hamlet);
    }

    #[test]
    fn test_create_appends_and_keeps_prefix() {
        let mut store = seeded();
        let before = store.list_all().to_vec();
        store.create(Book::new("5", "Ulysses", "James Joyce", 1));
        let after = store.list_all();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], before.as_slice());
        assert_eq!(after.last().unwrap().id, "5");
    }

    #[test]
    fn test_duplicate_id_first_match_wins() {
        let mut store = seeded();
        store.create(Book::new("1", "Other", "Someone", 9));
        assert_eq!(store.len(), 4);
        assert_eq!(store.find_by_id("1").unwrap().title, "In Search of Lost Time");

        store.checkout("1").unwrap();
        assert_eq!(store.list_all()[0].quantity, 1);
        assert_eq!(store.list_all()[3].quantity, 9);
    }
}
