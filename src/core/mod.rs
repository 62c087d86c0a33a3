pub mod client;
pub mod normalize;
pub mod request;

pub use crate::domain::model::{Organism, OrthologRecord, OrthologResult, TargetRecord};
pub use crate::domain::ports::{ConfigProvider, GeneDataSource};
pub use crate::utils::error::Result;
