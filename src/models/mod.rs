pub mod job;
pub mod meal_type;
pub mod report;
pub mod row;
pub mod session;
pub mod venue;

pub use job::{JobKey, JobRecord};
pub use meal_type::MealType;
pub use report::{CellValue, ReportRow};
pub use row::Row;
pub use session::SessionRecord;
pub use venue::{IdentityScheme, VenueAddress, VenueKey, VenueRecord};
