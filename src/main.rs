//! Bargain CLI binary

use bargain::cli::{Cli, Commands, StorefrontApp};
use bargain::Decision;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let app = StorefrontApp::new();

    match cli.command {
        Commands::Browse => {
            println!("{:<18} {:<24} {:>10}", "ID", "NAME", "PRICE");
            for product in app.browse() {
                println!(
                    "{:<18} {:<24} {:>10}",
                    product.id, product.name, product.price
                );
            }
        }

        Commands::Negotiate {
            product_id,
            offer,
            accept_counter,
        } => {
            let session = app.begin_negotiation(&product_id).await?;
            println!(
                "Negotiating {} (listed at {})",
                session.product().name,
                session.listed_price()
            );

            let decision = app.submit_offer(&offer).await?;
            if let Some(message) = decision.message() {
                println!("{message}");
            }

            if accept_counter && matches!(decision, Decision::Countered { .. }) {
                let decision = app.accept_counter().await?;
                if let Some(message) = decision.message() {
                    println!("{message}");
                }
            }

            if let Some(json) = app.session_json().await? {
                println!("{json}");
            }
            println!(
                "Cart: {} item(s), total {}",
                app.cart_count(),
                app.cart_total()
            );
        }

        Commands::Login { mobile, otp } => {
            let phone = app.login(&mobile, &otp)?;
            println!("Logged in as {phone}");
        }

        Commands::Demo => {
            run_demo(&app).await?;
        }
    }

    Ok(())
}

/// Compact negotiation walkthrough over the demo catalog.
async fn run_demo(app: &StorefrontApp) -> anyhow::Result<()> {
    let rounds = [
        ("prod_headphones", "100.00", false),
        ("prod_keyboard", "85", false),
        ("prod_espresso", "190", true),
        ("prod_satchel", "60", false),
    ];

    for (product_id, offer, accept_counter) in rounds {
        let session = app.begin_negotiation(product_id).await?;
        println!(
            "\n> {} listed at {}, offering ${offer}",
            session.product().name,
            session.listed_price()
        );

        let decision = app.submit_offer(offer).await?;
        if let Some(message) = decision.message() {
            println!("  {message}");
        }

        if accept_counter && matches!(decision, Decision::Countered { .. }) {
            let decision = app.accept_counter().await?;
            if let Some(message) = decision.message() {
                println!("  {message}");
            }
        }
    }

    println!(
        "\nCart: {} item(s), total {}",
        app.cart_count(),
        app.cart_total()
    );
    Ok(())
}
