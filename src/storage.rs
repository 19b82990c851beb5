use crate::error::{ItemsError, Result};
use crate::model::{Item, ItemInput};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Item>>;
    async fn get(&self, id: Uuid) -> Result<Item>;
    async fn create(&self, input: ItemInput) -> Result<Item>;
    async fn update(&self, id: Uuid, input: ItemInput) -> Result<()>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Insertion-ordered item list held in memory.
///
/// A single lock guards the list, so each operation is one atomic step
/// even when requests are served concurrently.
#[derive(Default, Clone)]
pub struct MemoryStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Item> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(ItemsError::NotFound(id))
    }

    async fn create(&self, input: ItemInput) -> Result<Item> {
        let item = Item::from_input(input);
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: Uuid, input: ItemInput) -> Result<()> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ItemsError::NotFound(id))?;
        item.apply(input);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut items = self.items.write().await;
        let pos = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ItemsError::NotFound(id))?;
        items.remove(pos);
        Ok(())
    }
}

pub async fn create_storage(seed: &[ItemInput]) -> Result<Arc<dyn ItemStore>> {
    let store = MemoryStore::new();
    for input in seed {
        store.create(input.clone()).await?;
    }
    Ok(Arc::new(store))
}
