//! Order Example
//!
//! This example walks the counter flow: fetch the menu, fill the cart,
//! print the receipt, submit the order, and show the history.
//!
//! Use `-c` to set the customer name on the submitted order
//! Use `-i` to choose the items as comma-separated ids (e.g. `burger,fries`)
//! Use `-l` to override the menu fetch latency in milliseconds

use std::{io, time::Duration};

use anyhow::Result;
use clap::Parser;
use griddle::{
    cart::Cart,
    catalog::CatalogService,
    orders::OrderBook,
    pricing::summarize,
    receipt,
    records::{CartRecord, OrderRecord},
    session::{CART_KEY, ORDERS_KEY, SessionStore},
    utils::{DemoOrderArgs, parse_item_id},
};
use tracing_subscriber::EnvFilter;

/// Order Example
#[expect(clippy::print_stdout, reason = "Example code")]
#[tokio::main]
pub async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = DemoOrderArgs::parse();

    let service = match args.latency {
        Some(ms) => CatalogService::with_latency(Duration::from_millis(ms)),
        None => CatalogService::new(),
    };

    let catalog = service.fetch().await?;

    let mut cart = Cart::new();

    for raw in args.items.split(',') {
        let id = parse_item_id(raw).map_err(anyhow::Error::msg)?;
        let item = catalog
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("item {id} is not on the menu"))?;

        if let Err(err) = cart.add(item.clone()) {
            println!("{err}");
        }
    }

    let store = SessionStore::new();
    store.set(CART_KEY, &CartRecord::from(&cart))?;

    let summary = summarize(&cart);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt::write_summary(&mut handle, &cart, &summary)?;

    // The summary borrows the cart; let go of it before clearing below.
    drop(summary);

    let mut book = OrderBook::new();
    let order = book.submit(&args.customer, &cart)?;

    println!(
        "\nOrder {} placed for {}.\n",
        order.id(),
        order.customer_name()
    );

    cart.clear();
    store.set(CART_KEY, &CartRecord::from(&cart))?;

    let records: Vec<OrderRecord> = book.iter().map(OrderRecord::from).collect();
    store.set(ORDERS_KEY, &records)?;

    receipt::write_orders(&mut handle, &book)?;

    Ok(())
}
