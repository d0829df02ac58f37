//! Card search: query composition and the host-supplied capabilities.

pub mod client;
pub mod query;

pub use client::{exact_name_query, CardResolver, CardSearch, SearchOutcome, SearchResolver};
pub use query::{compose_query, CmcFilter, Rarity, SearchFilters};
