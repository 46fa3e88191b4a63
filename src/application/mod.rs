pub mod prediction_service;
pub mod sequencer;

pub use prediction_service::*;
pub use sequencer::*;
