//! Record identity, the store that owns a page's records, and the traits
//! every record and draft type implements.

pub mod ids;
pub mod store;
pub mod traits;

pub use ids::{BuildId, RecordId, VehicleId};
pub use store::RecordStore;
pub use traits::{Draft, FieldValue, Record, SortKey};
