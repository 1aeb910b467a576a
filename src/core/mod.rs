pub mod engine;
pub mod pipeline;
pub mod selector;

pub use crate::domain::model::{ProjectVersion, SelectionResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
