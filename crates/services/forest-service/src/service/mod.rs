//! Service layer - business rules over the repositories.

mod catalog_service;
mod container;
mod report_service;
mod user_service;

pub use catalog_service::{CatalogManager, CatalogService};
pub use container::{Repositories, Services};
pub use report_service::{ReportManager, ReportService};
pub use user_service::{UserManager, UserService};
