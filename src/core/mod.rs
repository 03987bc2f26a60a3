pub mod application;
pub mod display;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod group;
pub mod session;
pub mod source;

pub use application::{Application, ApplicationStatus, StatusValue};
pub use error::GigError;
pub use filter::StatusFilter;
pub use group::{Bucket, Grouped};
