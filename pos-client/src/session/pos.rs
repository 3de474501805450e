// pos-client/src/session/pos.rs
// Order-taking session: cart + catalog + API

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use shared::cart::QuantityChange;
use shared::models::{OrderFilter, OrderSummary, SalesStatistics, SaveOrderResponse};
use shared::{AppError, ErrorCode};

use super::{CartStore, Catalog};
use crate::api::PosApi;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientError, ClientResult};

/// Clears the in-flight flag when the save finishes, however it finishes
struct SaveGuard<'a>(&'a AtomicBool);

impl<'a> SaveGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One terminal's order-taking session
///
/// All methods take `&self`; share it behind an `Arc` between UI tasks.
pub struct PosSession<C> {
    api: PosApi<C>,
    cart: CartStore,
    catalog: RwLock<Catalog>,
    saving: AtomicBool,
}

impl PosSession<NetworkHttpClient> {
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }
}

impl<C: HttpClient> PosSession<C> {
    pub fn new(http: C) -> Self {
        Self {
            api: PosApi::new(http),
            cart: CartStore::new(),
            catalog: RwLock::new(Catalog::default()),
            saving: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &PosApi<C> {
        &self.api
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog.read().clone()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    // ========== Catalog ==========

    /// Reload tables, categories and articles
    ///
    /// Selects the first table when none is selected yet.
    pub async fn refresh_catalog(&self) -> ClientResult<()> {
        let (tables, categories, articles) = futures::try_join!(
            self.api.list_tables(),
            self.api.list_categories(),
            self.api.list_articles(None),
        )?;
        tracing::debug!(
            tables = tables.len(),
            categories = categories.len(),
            articles = articles.len(),
            "Catalog refreshed"
        );

        let catalog = Catalog::new(tables, categories, articles);
        let first_table = catalog.first_table().map(|t| (t.id, t.name.clone()));
        *self.catalog.write() = catalog;

        if let Some((table_id, name)) = first_table
            && self.cart.select_table_if_none(table_id, name)
        {
            tracing::debug!(table_id, "Defaulted to the first table");
        }
        Ok(())
    }

    /// Reload articles only, for fresh stock counts
    pub async fn refresh_articles(&self) -> ClientResult<()> {
        let articles = self.api.list_articles(None).await?;
        self.catalog.write().articles = articles;
        Ok(())
    }

    // ========== Cart ==========

    /// The caller passes the table as shown to the user; it is not checked
    /// against the catalog
    pub fn select_table(&self, table_id: i64, name: impl Into<String>) {
        self.cart.select_table(table_id, name);
    }

    /// Add one unit of a catalog article, checked against its live stock
    pub fn add_article(&self, article_id: i64) -> ClientResult<u32> {
        let article = self
            .catalog
            .read()
            .article(article_id)
            .cloned()
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::ArticleNotFound,
                    format!("Article {} is not in the catalog", article_id),
                )
                .with_detail("article_id", article_id)
            })?;
        Ok(self.cart.add_article(&article)?)
    }

    pub fn change_quantity(&self, article_id: i64, delta: i64) -> ClientResult<QuantityChange> {
        Ok(self.cart.change_quantity(article_id, delta)?)
    }

    pub fn remove_item(&self, article_id: i64) {
        self.cart.remove_item(article_id);
    }

    /// Abandon the draft
    pub fn cancel(&self) {
        self.cart.reset();
    }

    // ========== Orders ==========

    /// Submit the cart
    ///
    /// Refused with [`ClientError::SaveInProgress`] while another save is
    /// outstanding. On failure the cart is left exactly as it was.
    pub async fn save_order(&self) -> ClientResult<SaveOrderResponse> {
        let _guard = SaveGuard::acquire(&self.saving).ok_or_else(|| {
            tracing::warn!("Save refused, previous save still running");
            ClientError::SaveInProgress
        })?;

        let payload = self.cart.prepare_save_payload().map_err(|e| {
            self.cart.notify(e.to_string());
            ClientError::from(e)
        })?;

        match self.api.save_order(&payload).await {
            Ok(response) => {
                self.cart.on_save_succeeded();
                self.cart.notify(response.message.clone());
                if let Err(e) = self.refresh_articles().await {
                    tracing::warn!(error = %e, "Failed to refresh stock after save");
                }
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(error = %e, table_id = payload.table_id, "Order save failed");
                self.cart.notify(e.user_message());
                Err(e)
            }
        }
    }

    /// Replace the cart with a persisted order for amendment
    pub async fn load_order_for_editing(&self, order_id: i64) -> ClientResult<()> {
        let order = self.api.order_detail(order_id).await?;
        let articles = self.catalog.read().articles.clone();
        self.cart.load_for_editing(&order, &articles);
        tracing::info!(order_id, lines = order.items.len(), "Order loaded for editing");
        Ok(())
    }

    /// Delete a persisted order; a cart amending it is abandoned
    pub async fn delete_order(&self, order_id: i64) -> ClientResult<String> {
        let message = self.api.delete_order(order_id).await?;
        if self.cart.editing_order_id() == Some(order_id) {
            self.cart.reset();
        }
        Ok(message)
    }

    pub async fn order_history(&self, filter: &OrderFilter) -> ClientResult<Vec<OrderSummary>> {
        self.api.list_orders(filter).await
    }

    pub async fn statistics(&self) -> ClientResult<SalesStatistics> {
        self.api.statistics().await
    }

    pub async fn export_orders_csv(&self, filter: &OrderFilter) -> ClientResult<Option<String>> {
        self.api.export_orders_csv(filter).await
    }
}
