pub mod category;
pub mod query;
pub mod response;
pub mod status;

pub use category::QueryCategory;
pub use query::{NewQuery, Query};
pub use response::Response;
pub use status::{QueryStatus, StatusFilter};
