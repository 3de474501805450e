// pos-client/tests/common/mod.rs
// In-process stand-in for the restaurant API

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use pos_client::{ClientConfig, NetworkHttpClient, PosSession};
use serde_json::{Value, json};

#[derive(Debug, Default)]
pub struct FakeState {
    /// Bodies received on `POST /api/pedidos`
    pub saved_orders: Vec<Value>,
    /// Answer the next saves with a 500 and this message
    pub fail_save_with: Option<String>,
    pub save_delay: Option<Duration>,
    pub deleted_orders: Vec<i64>,
    pub next_order_id: i64,
}

pub type Shared = Arc<Mutex<FakeState>>;

pub struct FakeServer {
    pub state: Shared,
    pub base_url: String,
}

impl FakeServer {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(FakeState {
            next_order_id: 41,
            ..Default::default()
        }));

        let app = Router::new()
            .route("/api/proveedores", get(tables))
            .route("/api/categorias", get(categories))
            .route("/api/categorias/{id}", axum::routing::delete(delete_category))
            .route("/api/articulos", get(articles).post(create_article))
            .route("/api/pedidos", get(orders).post(save_order))
            .route("/api/pedidos/{id}", get(order_detail).delete(delete_order))
            .route("/api/estadisticas", get(statistics))
            .route("/api/exportar/pedidos", get(export_orders))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            state,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url).with_timeout(5)
    }

    pub fn session(&self) -> PosSession<NetworkHttpClient> {
        PosSession::connect(&self.config()).unwrap()
    }

    pub fn saved_orders(&self) -> Vec<Value> {
        self.state.lock().unwrap().saved_orders.clone()
    }
}

fn article_rows() -> Vec<Value> {
    vec![
        json!({"id": 1, "nombre": "1/4 Pollo", "precio": 15.0, "stock": 3, "categoria_id": 1, "categoria_nombre": "Pollos"}),
        json!({"id": 2, "nombre": "Pollo entero", "precio": 52.5, "stock": 10, "categoria_id": 1, "categoria_nombre": "Pollos"}),
        json!({"id": 3, "nombre": "Inka Kola 500ml", "precio": 3.5, "stock": 0, "categoria_id": 2, "categoria_nombre": "Bebidas"}),
        json!({"id": 4, "nombre": "Chicha morada 1L", "precio": 8.0, "stock": 20, "categoria_id": 2, "categoria_nombre": "Bebidas"}),
    ]
}

async fn tables() -> Json<Value> {
    Json(json!([
        {"id": 1, "nombre": "Mesa 1", "descripcion": "Terraza"},
        {"id": 2, "nombre": "Mesa 2", "descripcion": null},
    ]))
}

async fn categories() -> Json<Value> {
    Json(json!([
        {"id": 1, "nombre": "Pollos"},
        {"id": 2, "nombre": "Bebidas"},
    ]))
}

async fn delete_category(Path(id): Path<i64>) -> Response {
    if id == 1 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "No se puede eliminar la categoría. Aún tiene 2 artículos asociados."})),
        )
            .into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn articles(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let rows = article_rows();
    let rows = match params.get("categoria_id").and_then(|v| v.parse::<i64>().ok()) {
        Some(cat) => rows
            .into_iter()
            .filter(|r| r["categoria_id"] == cat)
            .collect(),
        None => rows,
    };
    Json(Value::Array(rows))
}

async fn create_article(Json(body): Json<Value>) -> Json<Value> {
    assert!(body["nombre"].is_string());
    Json(json!({"success": true, "message": "Artículo agregado correctamente."}))
}

async fn save_order(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let (delay, failure) = {
        let s = state.lock().unwrap();
        (s.save_delay, s.fail_save_with.clone())
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    if let Some(message) = failure {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "message": message})),
        )
            .into_response();
    }

    let mut s = state.lock().unwrap();
    let (order_id, message) = match body["pedido_id"].as_i64() {
        Some(id) => (id, "Pedido actualizado correctamente."),
        None => {
            let id = s.next_order_id;
            s.next_order_id += 1;
            (id, "Pedido guardado correctamente.")
        }
    };
    s.saved_orders.push(body);
    Json(json!({"success": true, "message": message, "pedido_id": order_id})).into_response()
}

async fn orders() -> Json<Value> {
    Json(json!([
        {"id": 12, "fecha": "2025-03-02 13:45:10", "mesa_nombre": "Mesa 2", "total": 33.5, "estado": "PENDIENTE"},
        {"id": 11, "fecha": "2025-03-01 20:10:00", "mesa_nombre": "Mesa 1", "total": 15.0, "estado": "COMPLETADO"},
    ]))
}

async fn order_detail(Path(id): Path<i64>) -> Response {
    if id != 12 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Pedido no encontrado."})),
        )
            .into_response();
    }
    Json(json!({
        "success": true,
        "pedido": {
            "id": 12,
            "fecha": "2025-03-02 13:45:10",
            "proveedor_id": 2,
            "total": 33.5,
            "estado": "PENDIENTE",
            "mesa_nombre": "Mesa 2",
            "items": [
                {"id": 1, "id_pedido": 12, "articulo_id": 1, "nombre": "1/4 Pollo", "cantidad": 2, "precio": 15.0},
                {"id": 2, "id_pedido": 12, "articulo_id": 99, "nombre": "Plato retirado", "cantidad": 1, "precio": 3.5}
            ]
        }
    }))
    .into_response()
}

async fn delete_order(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    state.lock().unwrap().deleted_orders.push(id);
    StatusCode::NO_CONTENT.into_response()
}

async fn statistics() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "ventasDiarias": [{"dia": "2025-03-01", "total_ventas": 120.5}],
            "ventasMensuales": [{"mes": "2025-03", "total_ventas": 120.5}],
            "topProductos": [{"producto": "Pollo entero", "cantidad_vendida": 4, "ingresos_totales": 210.0}],
            "menosVendidos": [{"producto": "Inka Kola 500ml", "cantidad_vendida": 1, "ingresos_totales": 3.5}],
            "ventasPorCategoria": [{"categoria": "Pollos", "total_vendido": 210.0}],
            "comparativaMes": {"mesActual": 150.0, "mesAnterior": 100.0}
        }
    }))
}

async fn export_orders(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("mesa_id").map(String::as_str) == Some("99") {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "No hay datos para exportar con los filtros seleccionados."})),
        )
            .into_response();
    }
    (
        [(header::CONTENT_TYPE, "text/csv")],
        "ID_Pedido,Fecha,Mesa_Asignada\r\n12,2025-03-02 13:45:10,Mesa 2\r\n",
    )
        .into_response()
}
