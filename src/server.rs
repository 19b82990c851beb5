//! HTTP surface of the item registry.

use crate::config::ItemsConfig;
use crate::error::{ItemsError, Result};
use crate::model::{Item, ItemInput};
use crate::storage::{create_storage, ItemStore};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use uuid::Uuid;

type SharedStore = Arc<dyn ItemStore>;

#[derive(Clone)]
struct AppState {
    store: SharedStore,
    base_path: Arc<str>,
}

/// The item registry server.
///
/// Serves list/get/create/update/delete for items under `/items`, backed by
/// an in-memory store that lives as long as the server task.
pub struct ItemsServer {
    addr: SocketAddr,
    _handle: tokio::task::JoinHandle<()>,
}

impl ItemsServer {
    /// Creates and starts a new server with a fresh in-memory store.
    ///
    /// The configured seed items are created before the listener accepts
    /// requests.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use item_registry::{ItemsConfig, ItemsServer};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let server = ItemsServer::new(ItemsConfig::seeded()).await?;
    /// println!("Items at {}/items", server.url());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(config: ItemsConfig) -> Result<Self> {
        let store = create_storage(&config.seed_items).await?;
        Self::with_store(config, store).await
    }

    /// Starts a server over an existing store. Seed items in `config` are
    /// not applied.
    pub async fn with_store(config: ItemsConfig, store: Arc<dyn ItemStore>) -> Result<Self> {
        let app = router(store, &config.base_path);

        let bind_addr = if let Some(port) = config.port {
            format!("{}:{}", config.host, port)
        } else {
            format!("{}:0", config.host)
        };

        let listener = TcpListener::bind(&bind_addr).await?;
        let addr = listener.local_addr()?;

        info!("Item registry listening on {}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    /// Returns the socket address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the base URL of the server, without the route prefix.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Returns the port number the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

fn router(store: SharedStore, base_path: &str) -> Router {
    let state = AppState {
        store,
        base_path: Arc::from(base_path),
    };

    let items = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state);

    let app = if base_path.is_empty() {
        items
    } else {
        Router::new().nest(base_path, items)
    };

    app.layer(TraceLayer::new_for_http())
}

impl IntoResponse for ItemsError {
    fn into_response(self) -> Response {
        match self {
            ItemsError::NotFound(id) => {
                warn!("Item not found: {}", id);
                StatusCode::NOT_FOUND.into_response()
            }
            ItemsError::MalformedRequest(msg) => {
                warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            ItemsError::Io(e) => {
                warn!("IO failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<PathRejection> for ItemsError {
    fn from(rejection: PathRejection) -> Self {
        ItemsError::MalformedRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ItemsError {
    fn from(rejection: JsonRejection) -> Self {
        ItemsError::MalformedRequest(rejection.body_text())
    }
}

async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>> {
    let items = state.store.list().await?;
    debug!("Listing {} items", items.len());
    Ok(Json(items))
}

async fn get_item(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Item>> {
    let Path(id) = id?;
    debug!("Getting item: {}", id);
    Ok(Json(state.store.get(id).await?))
}

async fn create_item(
    State(state): State<AppState>,
    body: std::result::Result<Json<ItemInput>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(input) = body?;
    let item = state.store.create(input).await?;
    info!("Created item: {}", item.id);

    let location = format!("{}/items/{}", state.base_path, item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

async fn update_item(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
    body: std::result::Result<Json<ItemInput>, JsonRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    let Json(input) = body?;
    state.store.update(id, input).await?;
    info!("Updated item: {}", id);
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_item(
    State(state): State<AppState>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    state.store.delete(id).await?;
    info!("Deleted item: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
