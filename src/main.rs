use anyhow::Result;
use std::io::Write;
use tokio::io::AsyncBufReadExt;

use order_lookup::{
    client::{OrderApi, OrderClient},
    config::Config,
    render::render,
    view::OrderLookupView,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let client = OrderClient::new(config.clone())?;
    let mut view = OrderLookupView::new();

    println!("📦 Order Service");
    println!("API URL: {}", config.api_url);
    println!("================================");
    println!("{}", render(view.state()));

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("order id> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        // An empty line is suppressed: no request, no message.
        let generation = match view.begin_lookup(&line) {
            Some(generation) => generation,
            None => continue,
        };
        println!("{}", render(view.state()));

        let result = client.fetch_order(line.trim()).await;
        view.finish_lookup(generation, result);

        println!("{}", render(view.state()));
        println!("================================");
    }

    Ok(())
}
