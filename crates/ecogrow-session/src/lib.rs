//! # ecogrow-session
//!
//! Everything the app shell needs around the pure cart in `ecogrow-core`.
//!
//! ## Module Organization
//! ```text
//! ecogrow_session/
//! ├── lib.rs      ◄─── You are here (tracing setup & exports)
//! ├── action.rs   ◄─── ADD_TO_CART / REMOVE_FROM_CART / UPDATE_ITEM_AMOUNT
//! ├── store.rs    ◄─── SessionCart: the serialized "current cart" holder
//! ├── order.rs    ◄─── OrderDraft built on "Pay Now"
//! ├── config.rs   ◄─── ECOGROW_* environment configuration
//! └── error.rs    ◄─── ApiError returned to the screens
//! ```
//!
//! ## Typical Session
//! ```rust
//! use ecogrow_core::{CartCandidate, Money};
//! use ecogrow_session::{CartAction, SessionCart};
//!
//! let session = SessionCart::new();
//! let rose = CartCandidate::new("p1", "Rose", "flower", Money::from_cents(1000));
//!
//! session.dispatch(&CartAction::add_to_cart(rose.clone())).unwrap();
//! session.dispatch(&CartAction::add_to_cart(rose)).unwrap();
//! session.dispatch(&CartAction::update_item_amount("p1", 5)).unwrap();
//!
//! let order = session.checkout().unwrap();
//! assert_eq!(order.total_price, Money::from_cents(5000));
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod order;
pub mod store;

pub use action::CartAction;
pub use config::{ConfigError, SessionConfig};
pub use error::{ApiError, ErrorCode};
pub use order::OrderDraft;
pub use store::{CartTotals, SessionCart};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Every cart operation with its fields
/// - `RUST_LOG=ecogrow_session=trace` - Session crate only
/// - Otherwise `config.log_filter` (`ECOGROW_LOG`, default `info`)
///
/// Logs go to stderr so stdout stays free for command output. Calling this
/// twice is harmless; the first subscriber stays installed.
pub fn init_tracing(config: &SessionConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.log_targets)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
