//! Business logic services

pub mod inventory;

use crate::{config::InventoryConfig, models::Book, repository::BookStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
}

impl Services {
    /// Create all services, seeding the shelf if configured to
    pub fn new(inventory_config: &InventoryConfig) -> Self {
        let store = if inventory_config.seed_demo_books {
            BookStore::with_books(Book::demo_shelf())
        } else {
            BookStore::new()
        };

        Self {
            inventory: inventory::InventoryService::new(store),
        }
    }
}
