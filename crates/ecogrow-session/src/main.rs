//! # ecogrow-cart
//!
//! Replays a recorded list of cart actions through a `SessionCart` and
//! prints the resulting cart as JSON. Handy for reproducing a user's cart
//! from a bug report.
//!
//! ```text
//! $ ecogrow-cart actions.json --checkout
//! actions.json ──► Vec<CartAction> ──► SessionCart::dispatch (one by one)
//!                                            │
//!                                            ▼
//!                        stdout: { items, totals, formattedTotal, order }
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;

use ecogrow_session::{init_tracing, CartAction, CartTotals, SessionCart, SessionConfig};

#[derive(Parser)]
#[command(name = "ecogrow-cart")]
#[command(about = "Replay EcoGrow cart actions and print the resulting cart.")]
struct CommandLine {
    /// JSON file holding an array of cart actions
    actions: PathBuf,

    /// Currency prefix for the formatted total (overrides ECOGROW_CURRENCY_SYMBOL)
    #[arg(long)]
    symbol: Option<String>,

    /// Also build the order draft "Pay Now" would submit
    #[arg(long)]
    checkout: bool,
}

fn main() -> Result<()> {
    let args = CommandLine::parse();

    let mut config = SessionConfig::load()?;
    if let Some(symbol) = args.symbol {
        config.currency_symbol = symbol;
    }
    init_tracing(&config);

    let raw = fs::read_to_string(&args.actions)
        .with_context(|| format!("reading {}", args.actions.display()))?;
    let actions: Vec<CartAction> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing cart actions in {}", args.actions.display()))?;
    info!(count = actions.len(), path = %args.actions.display(), "Replaying cart actions");

    let session = SessionCart::new();
    for (step, action) in actions.iter().enumerate() {
        session
            .dispatch(action)
            .with_context(|| format!("action #{} ({}) rejected", step + 1, action.kind()))?;
    }

    let snapshot = session.snapshot();
    let totals = CartTotals::from(snapshot.as_ref());
    info!(
        items = totals.item_count,
        quantity = totals.total_quantity,
        total = %totals.total_price.format_with_symbol(&config.currency_symbol),
        "Replay complete"
    );

    let order = if args.checkout {
        Some(session.checkout()?)
    } else {
        None
    };

    let output = json!({
        "items": snapshot.items(),
        "totals": totals,
        "formattedTotal": totals.total_price.format_with_symbol(&config.currency_symbol),
        "order": order,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
