pub mod extract;
pub mod probe;

pub use crate::domain::model::{Field, FieldReading, Reading, Report};
pub use crate::domain::ports::{ConfigProvider, StatusSource};
pub use crate::utils::error::Result;
