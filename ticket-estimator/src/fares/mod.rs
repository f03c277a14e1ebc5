//! Base fare pricing service client.
//!
//! The pricing service answers one question: what is the unadjusted fare
//! from `from` to `to` on `date`? It returns a JSON body with a numeric
//! `price`. Everything else about the ticket price is computed locally by
//! the `pricing` module.

mod client;
mod error;
mod mock;
mod types;

pub use client::{FareClient, FareClientConfig};
pub use error::FareApiError;
pub use mock::{FareQuery, MockFareClient};
pub use types::PriceResponse;
