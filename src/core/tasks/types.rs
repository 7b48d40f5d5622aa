use crate::prediction::PredictionResult;

#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Outcome of a predict call, tagged with the generation it was issued
    /// under so superseded responses can be recognized.
    Prediction { generation: u64, result: Result<PredictionResult, String> },

    /// Latest answer from the service liveness poll.
    ServiceStatus(bool),
}
