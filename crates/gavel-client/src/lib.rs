//! Client layer: scoped cookie session against the court-auction portal.

pub mod http;

pub use http::{AuctionClient, FetchError, PORTAL_BASE_URL};
