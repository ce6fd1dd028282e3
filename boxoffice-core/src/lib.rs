pub mod errors;
pub mod repository;

pub use errors::{CatalogError, QueryError, ReservationError};
pub use repository::CatalogRepository;
