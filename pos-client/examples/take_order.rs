//! Take an order from the command line
//!
//! ```text
//! POS_API_URL=http://localhost:5000 cargo run -p pos-client --example take_order -- 3 3 7
//! ```
//! Each argument is an article id added once to the first table's order.

use pos_client::{CartEvent, ClientConfig, PosSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pos_client::logger::init_from_env()?;

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting");
    let session = PosSession::connect(&config)?;

    let mut events = session.cart().subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                CartEvent::Changed(view) => {
                    println!("  {} items, total {}", view.item_count, view.total_label())
                }
                CartEvent::Notice(message) => println!("! {}", message),
            }
        }
    });

    session.refresh_catalog().await?;
    let Some(table) = session.cart().selected_table() else {
        anyhow::bail!("No tables configured");
    };
    println!("Order for {}", table.name);

    for arg in std::env::args().skip(1) {
        let article_id: i64 = arg.parse()?;
        // rejections are already printed by the listener
        let _ = session.add_article(article_id);
    }

    match session.save_order().await {
        Ok(saved) => println!("{} (#{})", saved.message, saved.order_id.unwrap_or_default()),
        Err(e) => println!("Save failed: {}", e.user_message()),
    }
    Ok(())
}
