//! Book inventory service
//!
//! Owns the [`BookStore`] behind a single lock. Every lookup-and-mutate step
//! runs under the write guard, so concurrent checkouts cannot lose updates.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct InventoryService {
    store: Arc<RwLock<BookStore>>,
}

impl InventoryService {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// List all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.store.read().await.list_all().to_vec()
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        tracing::debug!("Looking up book id={}", id);
        let store = self.store.read().await;
        store.find_by_id(id).cloned()
    }

    /// Add a book to the inventory
    pub async fn create(&self, data: CreateBook) -> Book {
        let mut store = self.store.write().await;
        let book = store.create(data.into()).clone();
        tracing::info!(book_id = %book.id, quantity = book.quantity, "Book created");
        book
    }

    /// Check out one copy of a book
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        let mut store = self.store.write().await;
        match store.checkout(id) {
            Ok(book) => {
                tracing::info!(book_id = %book.id, quantity = book.quantity, "Book checked out");
                Ok(book.clone())
            }
            Err(e) => {
                tracing::warn!(book_id = %id, "Checkout refused: {}", e);
                Err(e)
            }
        }
    }

    /// Return one copy of a book
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let mut store = self.store.write().await;
        let book = store.return_book(id)?.clone();
        tracing::info!(book_id = %book.id, quantity = book.quantity, "Book returned");
        Ok(book)
    }

    /// Count books on the shelf (for health)
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}
