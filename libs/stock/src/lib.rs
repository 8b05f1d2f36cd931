mod quote_client;
mod record;
mod registry;
mod report;

pub mod catalog;

pub use quote_client::{DEFAULT_BASE_API, FetchError, QuoteClient, QuoteSource};
pub use record::{Added, Rejection, Removed, StockRecord};
pub use registry::{Selection, StockRegistry};
pub use report::{Report, ReportError};
