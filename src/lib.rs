pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod storage;

pub use config::ItemsConfig;
pub use error::{ItemsError, Result};
pub use model::{Item, ItemInput};
pub use server::ItemsServer;
pub use storage::{ItemStore, MemoryStore};
