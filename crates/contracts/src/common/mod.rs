pub mod list_query;
pub mod paged;

pub use list_query::{FilterClause, FilterOperator, FilterValue, ListQuery, SortEntry};
pub use paged::Paged;
