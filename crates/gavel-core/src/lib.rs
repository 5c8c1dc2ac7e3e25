pub mod case;
pub mod court;
pub mod error;
pub mod query;
pub mod tab;

pub use case::case_identifier;
pub use court::{court_code, court_names};
pub use error::QueryError;
pub use query::{CaseQuery, QueryRequest};
pub use tab::Tab;
