//! Typed endpoints of the restaurant API
//!
//! Thin layer over [`HttpClient`]: builds paths, unwraps the server's
//! envelopes and logs each write. No state is kept here.

use shared::models::{
    Article, ArticleCreate, Category, CategoryCreate, DiningTable, DiningTableCreate, OrderDetail,
    OrderDetailResponse, OrderFilter, OrderPayload, OrderSummary, SalesStatistics,
    SaveOrderResponse,
};
use shared::response::ActionResponse;
use shared::{ApiResponse, AppError, ErrorCode};

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

const TABLES: &str = "api/proveedores";
const CATEGORIES: &str = "api/categorias";
const ARTICLES: &str = "api/articulos";
const ORDERS: &str = "api/pedidos";
const STATISTICS: &str = "api/estadisticas";
const EXPORT_ORDERS: &str = "api/exportar/pedidos";

/// Restaurant API bound to one transport
#[derive(Debug, Clone)]
pub struct PosApi<C> {
    http: C,
}

impl<C: HttpClient> PosApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Send a write and fold the `{success, message}` answer into a result
    ///
    /// A bodiless `204` counts as success.
    async fn action(
        &self,
        fut: impl Future<Output = ClientResult<Option<ActionResponse>>>,
    ) -> ClientResult<String> {
        let response = fut.await?.unwrap_or_else(ActionResponse::no_content);
        Ok(response.into_result()?)
    }

    // ========== Tables ==========

    pub async fn list_tables(&self) -> ClientResult<Vec<DiningTable>> {
        self.http.get(TABLES).await
    }

    pub async fn create_table(&self, table: &DiningTableCreate) -> ClientResult<String> {
        if table.name.trim().is_empty() {
            return Err(ClientError::Validation("Table name is required".into()));
        }
        let message = self
            .action(self.http.post::<Option<ActionResponse>, _>(TABLES, table))
            .await?;
        tracing::info!(name = %table.name, "Table created");
        Ok(message)
    }

    pub async fn delete_table(&self, id: i64) -> ClientResult<String> {
        let message = self
            .action(self.http.delete::<Option<ActionResponse>>(&format!("{}/{}", TABLES, id)))
            .await?;
        tracing::info!(table_id = id, "Table deleted");
        Ok(message)
    }

    // ========== Categories ==========

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.http.get(CATEGORIES).await
    }

    pub async fn create_category(&self, category: &CategoryCreate) -> ClientResult<String> {
        if category.name.trim().is_empty() {
            return Err(ClientError::Validation("Category name is required".into()));
        }
        let message = self
            .action(self.http.post::<Option<ActionResponse>, _>(CATEGORIES, category))
            .await?;
        tracing::info!(name = %category.name, "Category created");
        Ok(message)
    }

    /// Refused by the server while the category still has articles
    pub async fn delete_category(&self, id: i64) -> ClientResult<String> {
        let message = self
            .action(self.http.delete::<Option<ActionResponse>>(&format!("{}/{}", CATEGORIES, id)))
            .await?;
        tracing::info!(category_id = id, "Category deleted");
        Ok(message)
    }

    // ========== Articles ==========

    /// All articles, or only those of one category
    pub async fn list_articles(&self, category_id: Option<i64>) -> ClientResult<Vec<Article>> {
        match category_id {
            Some(id) => {
                self.http
                    .get(&format!("{}?categoria_id={}", ARTICLES, id))
                    .await
            }
            None => self.http.get(ARTICLES).await,
        }
    }

    pub async fn create_article(&self, article: &ArticleCreate) -> ClientResult<String> {
        validate_article(article)?;
        let message = self
            .action(self.http.post::<Option<ActionResponse>, _>(ARTICLES, article))
            .await?;
        tracing::info!(name = %article.name, "Article created");
        Ok(message)
    }

    pub async fn update_article(&self, id: i64, article: &ArticleCreate) -> ClientResult<String> {
        validate_article(article)?;
        let message = self
            .action(self.http.put::<Option<ActionResponse>, _>(&format!("{}/{}", ARTICLES, id), article))
            .await?;
        tracing::info!(article_id = id, "Article updated");
        Ok(message)
    }

    pub async fn delete_article(&self, id: i64) -> ClientResult<String> {
        let message = self
            .action(self.http.delete::<Option<ActionResponse>>(&format!("{}/{}", ARTICLES, id)))
            .await?;
        tracing::info!(article_id = id, "Article deleted");
        Ok(message)
    }

    // ========== Orders ==========

    /// Create an order, or amend one when `payload.order_id` is set
    pub async fn save_order(&self, payload: &OrderPayload) -> ClientResult<SaveOrderResponse> {
        let response: SaveOrderResponse = self.http.post(ORDERS, payload).await?;
        if !response.success {
            return Err(AppError::with_message(ErrorCode::Unknown, response.message).into());
        }
        tracing::info!(
            order_id = ?response.order_id,
            table_id = payload.table_id,
            total = %payload.total,
            amended = payload.order_id.is_some(),
            "Order saved"
        );
        Ok(response)
    }

    /// Order history, newest first
    pub async fn list_orders(&self, filter: &OrderFilter) -> ClientResult<Vec<OrderSummary>> {
        self.http
            .get(&format!("{}{}", ORDERS, filter.to_query_string()))
            .await
    }

    pub async fn order_detail(&self, id: i64) -> ClientResult<OrderDetail> {
        let response: OrderDetailResponse =
            self.http.get(&format!("{}/{}", ORDERS, id)).await?;
        Ok(response.into_result()?)
    }

    pub async fn delete_order(&self, id: i64) -> ClientResult<String> {
        let message = self
            .action(self.http.delete::<Option<ActionResponse>>(&format!("{}/{}", ORDERS, id)))
            .await?;
        tracing::info!(order_id = id, "Order deleted");
        Ok(message)
    }

    // ========== Reports ==========

    pub async fn statistics(&self) -> ClientResult<SalesStatistics> {
        let response: ApiResponse<SalesStatistics> = self.http.get(STATISTICS).await?;
        Ok(response.into_result()?)
    }

    /// Orders as CSV, one row per order line
    ///
    /// `None` when no order matches the filter.
    pub async fn export_orders_csv(&self, filter: &OrderFilter) -> ClientResult<Option<String>> {
        let path = format!("{}{}", EXPORT_ORDERS, filter.to_query_string());
        match self.http.get_text(&path).await {
            Ok(csv) => Ok(Some(csv)),
            Err(ClientError::NotFound(message)) => {
                tracing::info!(reason = %message, "Nothing to export");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Download link for the CSV export, for handing to a browser
    pub fn export_url(&self, filter: &OrderFilter) -> String {
        format!(
            "{}/{}{}",
            self.http.base_url(),
            EXPORT_ORDERS,
            filter.to_query_string()
        )
    }
}

fn validate_article(article: &ArticleCreate) -> ClientResult<()> {
    if article.name.trim().is_empty() {
        return Err(ClientError::Validation("Article name is required".into()));
    }
    if article.price.is_sign_negative() {
        return Err(ClientError::Validation("Price cannot be negative".into()));
    }
    if article.stock < 0 {
        return Err(ClientError::Validation("Stock cannot be negative".into()));
    }
    Ok(())
}
