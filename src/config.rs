use crate::model::ItemInput;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct ItemsConfig {
    pub port: Option<u16>,
    pub host: String,
    /// Prefix the `/items` routes are nested under, e.g. `/api`. Empty by default.
    pub base_path: String,
    pub seed_items: Vec<ItemInput>,
}

impl ItemsConfig {
    pub fn new() -> Self {
        Self {
            port: None,
            host: "127.0.0.1".to_string(),
            base_path: String::new(),
            seed_items: Vec::new(),
        }
    }

    /// Starts with the two stock items, `Apple` and `Banana`.
    pub fn seeded() -> Self {
        Self::new().with_seed_items(vec![
            ItemInput::new(Some("Apple"), Decimal::new(99, 2)),
            ItemInput::new(Some("Banana"), Decimal::new(120, 2)),
        ])
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        self.base_path = base_path.trim_end_matches('/').to_string();
        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            self.base_path.insert(0, '/');
        }
        self
    }

    pub fn with_seed_items(mut self, items: Vec<ItemInput>) -> Self {
        self.seed_items = items;
        self
    }
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self::new()
    }
}
