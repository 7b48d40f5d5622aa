use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::types::TaskResult;
use crate::prediction::{
    api,
    PredictionRequest,
};

/// Runs network work off the UI thread. Workers block on the shared tokio
/// runtime and report back over the channel; the GUI drains it every frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Issue one predict call. No cancellation: a superseded request runs to
    /// completion and its response is discarded by generation on arrival.
    pub fn submit_prediction(&self, endpoint: String, generation: u64, request: PredictionRequest) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::predict(&endpoint, &request).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::Prediction { generation, result });
        });
    }

    pub fn check_service_status(&self, endpoint: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let online = runtime.block_on(async { api::ping(&endpoint).await.is_ok() });

            let _ = sender.send(TaskResult::ServiceStatus(online));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
