pub mod stage;

pub use stage::{EngineStage, StageId};
