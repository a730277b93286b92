//! Storefront demo: Full browse, negotiate, and login workflow
//!
//! This example demonstrates the complete interaction surface:
//! 1. Browse the catalog
//! 2. Full-price and near-full offers (instant acceptance)
//! 3. A mid-band offer drawing a counter, then accepting the counter
//! 4. A lowball offer rejected, followed by a successful retry
//! 5. Malformed offers and the stale-resolution guard
//! 6. The mock phone/OTP login gate
//!
//! Run with: cargo run --example storefront_demo

use bargain::catalog::Catalog;
use bargain::cli::StorefrontApp;
use bargain::{Decision, NegotiationPolicy};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,bargain=debug")
        .init();

    println!("\n╔══════════════════════════════════════════════╗");
    println!("║   Bargain Storefront Demo                   ║");
    println!("║   Negotiable Prices Walkthrough             ║");
    println!("╚══════════════════════════════════════════════╝\n");

    // Short think-time so the demo moves along.
    let policy = NegotiationPolicy::default().with_decision_delay(Duration::from_millis(400));
    let app = StorefrontApp::with_catalog_and_policy(Catalog::with_demo_products(), policy);

    // =========================================================================
    // Scenario 1: Browse the catalog
    // =========================================================================
    println!("┌─────────────────────────────────────────────┐");
    println!("│ Scenario 1: Browse the Catalog             │");
    println!("└─────────────────────────────────────────────┘");

    for product in app.browse() {
        println!("   📋 {:<20} {:>10}  ({})", product.name, product.price.to_string(), product.id);
    }
    println!();

    // =========================================================================
    // Scenario 2: Full-price offer
    // =========================================================================
    println!("┌─────────────────────────────────────────────┐");
    println!("│ Scenario 2: Full-Price Offer               │");
    println!("└─────────────────────────────────────────────┘");

    let session = app.begin_negotiation("prod_headphones").await?;
    println!("💰 Offering $100.00 on {} (listed {})", session.product().name, session.listed_price());

    let decision = app.submit_offer("100.00").await?;
    println!("   ✅ {}\n", decision.message().unwrap_or_default());

    // =========================================================================
    // Scenario 3: Near-full offer (≥ 90% of list)
    // =========================================================================
    println!("┌─────────────────────────────────────────────┐");
    println!("│ Scenario 3: Near-Full Offer                │");
    println!("└─────────────────────────────────────────────┘");

    let session = app.begin_negotiation("prod_keyboard").await?;
    println!("💰 Offering $85.00 on {} (listed {})", session.product().name, session.listed_price());

    let decision = app.submit_offer("85").await?;
    println!("   ✅ {}\n", decision.message().unwrap_or_default());

    // =========================================================================
    // Scenario 4: Counter-offer round
    // =========================================================================
    println!("┌─────────────────────────────────────────────┐");
    println!("│ Scenario 4: Counter-Offer Round            │");
    println!("└─────────────────────────────────────────────┘");

    let session = app.begin_negotiation("prod_espresso").await?;
    println!("💰 Offering $190.00 on {} (listed {})", session.product().name, session.listed_price());

    let decision = app.submit_offer("190").await?;
    println!("   ↩️  {}", decision.message().unwrap_or_default());

    if matches!(decision, Decision::Countered { .. }) {
        let decision = app.accept_counter().await?;
        println!("   ✅ {}\n", decision.message().unwrap_or_default());
    }

    // =========================================================================
    // Scenario 5: Rejection and retry
    // =========================================================================
    println!("┌─────────────────────────────────────────────┐");
    println!("│ Scenario 5: Rejection and Retry            │");
    println!("└─────────────────────────────────────────────┘");

    let session = app.begin_negotiation("prod_satchel").await?;
    println!("💰 Offering $60.00 on {} (listed {})", session.product().name, session.listed_price());

    let decision = app.submit_offer("60").await?;
    println!("   ❌ {}", decision.message().unwrap_or_default());

    println!("💰 Trying again at $120.00");
    let decision = app.submit_offer("120").await?;
    println!("   ✅ {}\n", decision.message().unwrap_or_default());

    // =========================================================================
    // Scenario 6: Malformed offers and stale resolutions
    // =========================================================================
    println!("┌─────────────────────────────────────────────┐");
    println!("│ Scenario 6: Guard Rails                    │");
    println!("└─────────────────────────────────────────────┘");

    app.begin_negotiation("prod_headphones").await?;
    let decision = app.submit_offer("abc").await?;
    println!("   🚫 \"abc\" -> {}", decision.message().unwrap_or_default());

    // Submit, then switch products before the seller answers. The late
    // resolution is discarded instead of writing into the new session.
    let racer = app.clone();
    let in_flight = tokio::spawn(async move { racer.submit_offer("99").await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    app.begin_negotiation("prod_espresso").await?;

    match in_flight.await?? {
        Decision::Superseded => println!("   🗑️  Stale resolution discarded after product switch\n"),
        other => println!("   ⚠️  Unexpected decision: {other:?}\n"),
    }

    // =========================================================================
    // Scenario 7: Phone/OTP login
    // =========================================================================
    println!("┌─────────────────────────────────────────────┐");
    println!("│ Scenario 7: Phone/OTP Login                │");
    println!("└─────────────────────────────────────────────┘");

    if let Err(err) = app.login("98765", "1234") {
        println!("   🚫 Short number rejected: {err}");
    }

    let phone = app.login("9876543210", "4242")?;
    println!("   ✅ Logged in as {phone}\n");

    // =========================================================================
    // Summary
    // =========================================================================
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║   Demo Complete - Summary                   ║");
    println!("╚══════════════════════════════════════════════╝\n");

    println!("✅ Catalog browsed");
    println!("✅ Full-price and near-full offers accepted");
    println!("✅ Counter-offer issued and accepted");
    println!("✅ Lowball rejected, retry accepted");
    println!("✅ Malformed offer and stale resolution handled");
    println!("✅ Mock login completed\n");

    println!(
        "🛒 Cart: {} item(s), total {}\n",
        app.cart_count(),
        app.cart_total()
    );

    Ok(())
}
