pub mod fields;
pub mod filter;
pub mod pagination;
pub mod params;
pub mod pipeline;
pub mod sort;

pub use params::{OfferQuery, RawOfferQuery};
pub use pipeline::{filter_options, run_query};
