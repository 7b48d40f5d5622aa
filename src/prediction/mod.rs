pub mod api;
pub mod state;
pub mod types;

pub use state::PredictionState;
pub use types::{
    PredictionRequest,
    PredictionResult,
};
