pub mod catalog;
pub mod config;
pub mod errors;
pub mod filter;
pub mod history;
pub mod suggestions;

pub use catalog::{
    Category, CatalogError, Chip, DistributorOffer, KeyParameter, Lifecycle, OrderDetails,
    PriceBreak, StaticCatalog,
};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use filter::{FilterOp, FilterState};
pub use history::{FileSearchHistory, HistoryError, InMemorySearchHistory, SearchHistory};
pub use suggestions::{
    rank_suggestions, recent_suggestions, record_query, SearchHistoryEntry, SuggestionEntry,
    SuggestionKind, SuggestionRanker,
};
