//! One view model per page. Each owns its own store; nothing is shared
//! between pages or between visits to the same page.

pub mod maintenance;
pub mod parts;

pub use maintenance::{MaintenanceCard, MaintenanceLog, MaintenanceSummary};
pub use parts::{PartCard, PartsCatalog, PartsSummary};
