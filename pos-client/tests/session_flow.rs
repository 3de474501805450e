// pos-client/tests/session_flow.rs
// Order-taking flows against the fake API

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::FakeServer;
use pos_client::{CartError, CartEvent, ClientError, ErrorCode, QuantityChange};
use rust_decimal::Decimal;

#[tokio::test]
async fn test_refresh_catalog_selects_first_table() {
    let server = FakeServer::start().await;
    let session = server.session();

    session.refresh_catalog().await.unwrap();

    let catalog = session.catalog();
    assert_eq!(catalog.tables.len(), 2);
    assert_eq!(catalog.articles_in_category(2).count(), 2);

    let table = session.cart().selected_table().unwrap();
    assert_eq!(table.id, 1);
    assert_eq!(table.name, "Mesa 1");

    // an explicit choice survives a refresh
    session.select_table(2, "Mesa 2");
    session.refresh_catalog().await.unwrap();
    assert_eq!(session.cart().selected_table().unwrap().id, 2);
}

#[tokio::test]
async fn test_select_table_outside_catalog() {
    let server = FakeServer::start().await;
    let session = server.session();
    session.refresh_catalog().await.unwrap();

    // tables created on another terminal are accepted before the next refresh
    session.select_table(7, "Terraza");
    let table = session.cart().selected_table().unwrap();
    assert_eq!(table.id, 7);
    assert_eq!(table.name, "Terraza");

    session.refresh_catalog().await.unwrap();
    assert_eq!(session.cart().selected_table().unwrap().id, 7);
}

#[tokio::test]
async fn test_refresh_keeps_table_of_loaded_order() {
    let server = FakeServer::start().await;
    let session = server.session();

    session.load_order_for_editing(12).await.unwrap();
    session.refresh_catalog().await.unwrap();

    let view = session.cart().view();
    assert_eq!(view.editing_order_id, Some(12));
    assert_eq!(view.selected_table.unwrap().id, 2);
}

#[tokio::test]
async fn test_add_article_respects_live_stock() {
    let server = FakeServer::start().await;
    let session = server.session();
    session.refresh_catalog().await.unwrap();

    for expected in 1..=3 {
        assert_eq!(session.add_article(1).unwrap(), expected);
    }
    let err = session.add_article(1).unwrap_err();
    assert!(matches!(
        err,
        ClientError::Cart(CartError::StockLimit { available: 3, .. })
    ));

    let err = session.add_article(3).unwrap_err();
    assert!(matches!(err, ClientError::Cart(CartError::OutOfStock { .. })));

    let err = session.add_article(404).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.code(), ErrorCode::ArticleNotFound);
    assert_eq!(session.cart().view().total, Decimal::new(4500, 2));
}

#[tokio::test]
async fn test_save_order_posts_payload_and_resets_cart() {
    let server = FakeServer::start().await;
    let session = server.session();
    session.refresh_catalog().await.unwrap();

    session.add_article(1).unwrap();
    session.add_article(1).unwrap();
    session.add_article(4).unwrap();

    let response = session.save_order().await.unwrap();
    assert_eq!(response.order_id, Some(41));
    assert_eq!(response.message, "Pedido guardado correctamente.");

    let saved = server.saved_orders();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["mesa_id"], 1);
    assert_eq!(saved[0]["total"], "38.00");
    assert!(saved[0]["pedido_id"].is_null());
    assert_eq!(saved[0]["items"][0]["id"], 1);
    assert_eq!(saved[0]["items"][0]["cantidad"], 2);
    assert_eq!(saved[0]["items"][1]["nombre"], "Chicha morada 1L");

    let view = session.cart().view();
    assert!(view.lines.is_empty());
    assert!(view.selected_table.is_none());
    assert!(view.editing_order_id.is_none());
    assert!(!session.is_saving());
}

#[tokio::test]
async fn test_save_without_table_is_refused_locally() {
    let server = FakeServer::start().await;
    let session = server.session();

    let err = session.save_order().await.unwrap_err();
    assert!(matches!(err, ClientError::Cart(CartError::NoTableSelected)));
    assert!(server.saved_orders().is_empty());
}

#[tokio::test]
async fn test_failed_save_keeps_cart_and_reports_server_message() {
    let server = FakeServer::start().await;
    server.state.lock().unwrap().fail_save_with = Some("Stock insuficiente para 1/4 Pollo".into());

    let session = server.session();
    session.refresh_catalog().await.unwrap();
    session.add_article(1).unwrap();
    session.add_article(2).unwrap();
    let before = session.cart().snapshot();

    let mut rx = session.cart().subscribe();
    let err = session.save_order().await.unwrap_err();
    assert_eq!(err.user_message(), "Stock insuficiente para 1/4 Pollo");
    assert!(matches!(err, ClientError::Api { status: 500, .. }));

    assert_eq!(session.cart().snapshot(), before);
    assert_eq!(
        rx.try_recv().unwrap(),
        CartEvent::Notice("Stock insuficiente para 1/4 Pollo".into())
    );
    assert!(!session.is_saving());
}

#[tokio::test]
async fn test_concurrent_save_is_refused() {
    let server = FakeServer::start().await;
    server.state.lock().unwrap().save_delay = Some(Duration::from_millis(300));

    let session = Arc::new(server.session());
    session.refresh_catalog().await.unwrap();
    session.add_article(2).unwrap();

    let first = tokio::spawn({
        let session = session.clone();
        async move { session.save_order().await }
    });
    // let the first save reach the server
    while !session.is_saving() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let err = session.save_order().await.unwrap_err();
    assert!(matches!(err, ClientError::SaveInProgress));

    first.await.unwrap().unwrap();
    assert_eq!(server.saved_orders().len(), 1);
}

#[tokio::test]
async fn test_edit_existing_order_round_trip() {
    let server = FakeServer::start().await;
    let session = server.session();
    session.refresh_catalog().await.unwrap();

    session.load_order_for_editing(12).await.unwrap();

    let view = session.cart().view();
    assert_eq!(view.editing_order_id, Some(12));
    assert_eq!(view.selected_table.as_ref().unwrap().id, 2);
    assert_eq!(view.lines.len(), 2);
    // live stock of 1/4 Pollo is 3
    assert_eq!(view.lines[0].stock_ceiling, 3);
    // article 99 is gone from the catalog
    assert_eq!(view.lines[1].stock_ceiling, 999);

    assert_eq!(
        session.change_quantity(99, -1).unwrap(),
        QuantityChange::Removed
    );
    assert_eq!(
        session.change_quantity(1, 1).unwrap(),
        QuantityChange::Updated(3)
    );

    let response = session.save_order().await.unwrap();
    assert_eq!(response.order_id, Some(12));
    assert_eq!(response.message, "Pedido actualizado correctamente.");

    let saved = server.saved_orders();
    assert_eq!(saved[0]["pedido_id"], 12);
    assert_eq!(saved[0]["mesa_id"], 2);
    assert_eq!(saved[0]["total"], "45.00");
    assert_eq!(saved[0]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_load_missing_order_leaves_cart_alone() {
    let server = FakeServer::start().await;
    let session = server.session();
    session.refresh_catalog().await.unwrap();
    session.add_article(2).unwrap();

    let err = session.load_order_for_editing(500).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref m) if m == "Pedido no encontrado."));
    assert_eq!(session.cart().view().item_count, 1);
}

#[tokio::test]
async fn test_delete_order_being_edited_resets_cart() {
    let server = FakeServer::start().await;
    let session = server.session();
    session.refresh_catalog().await.unwrap();
    session.load_order_for_editing(12).await.unwrap();

    let message = session.delete_order(12).await.unwrap();
    assert_eq!(message, "Operación exitosa.");
    assert_eq!(server.state.lock().unwrap().deleted_orders, vec![12]);
    assert!(session.cart().snapshot().is_empty());
    assert!(session.cart().editing_order_id().is_none());
}

#[tokio::test]
async fn test_cancel_publishes_empty_view() {
    let server = FakeServer::start().await;
    let session = server.session();
    session.refresh_catalog().await.unwrap();
    session.add_article(4).unwrap();

    let mut rx = session.cart().subscribe();
    session.cancel();

    match rx.recv().await.unwrap() {
        CartEvent::Changed(view) => {
            assert!(view.lines.is_empty());
            assert!(!view.can_save);
            assert_eq!(view.total_label(), "S/ 0.00");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
