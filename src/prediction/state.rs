use chrono::{
    DateTime,
    Local,
};

use super::types::{
    PredictionRequest,
    PredictionResult,
};
use crate::core::models::{
    FormState,
    TelemetryField,
};

/// Shown for any request that made it to the wire and failed, regardless of
/// cause. The underlying error only goes to the console.
pub const REQUEST_FAILED_MESSAGE: &str =
    "Failed to get prediction. Please check your input values and try again.";

/// Owns the form, the last prediction, and the error line, and mediates the
/// request/response cycle. Every submit claims a fresh generation; responses
/// that come back under an older generation are dropped, so overlapping
/// submits always resolve to the newest request.
pub struct PredictionState {
    pub form: FormState,
    result: Option<PredictionResult>,
    result_time: Option<DateTime<Local>>,
    error: Option<String>,
    submitted_generation: u64,
    settled_generation: u64,
}

impl PredictionState {
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            result: None,
            result_time: None,
            error: None,
            submitted_generation: 0,
            settled_generation: 0,
        }
    }

    /// Start a submit: clear the error line, validate the form, and claim the
    /// next generation. Returns what the task layer needs to issue the
    /// request, or `None` when validation stopped the submit (the error line
    /// then names the offending fields).
    pub fn begin_submit(&mut self) -> Option<(u64, PredictionRequest)> {
        self.error = None;

        match PredictionRequest::from_form(&self.form) {
            Ok(request) => {
                self.submitted_generation += 1;
                Some((self.submitted_generation, request))
            }
            Err(invalid) => {
                self.error = Some(invalid_fields_message(&invalid));
                None
            }
        }
    }

    /// Fold a finished request back into the state. Results from superseded
    /// generations are discarded; a failure keeps the previous prediction
    /// visible under the error line.
    pub fn apply_result(&mut self, generation: u64, result: Result<PredictionResult, String>) {
        if generation != self.submitted_generation {
            println!("Ignoring prediction response from superseded request #{}", generation);
            return;
        }

        self.settled_generation = generation;

        match result {
            Ok(prediction) => {
                self.result = Some(prediction);
                self.result_time = Some(Local::now());
                self.error = None;
            }
            Err(details) => {
                eprintln!("Prediction request #{} failed: {}", generation, details);
                self.error = Some(REQUEST_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn in_flight(&self) -> bool {
        self.settled_generation < self.submitted_generation
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn result_time(&self) -> Option<DateTime<Local>> {
        self.result_time
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for PredictionState {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_fields_message(invalid: &[TelemetryField]) -> String {
    let labels: Vec<&str> = invalid.iter().map(|field| field.label()).collect();
    format!("Not a number: {}", labels.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_state() -> PredictionState {
        let mut state = PredictionState::new();
        for field in TelemetryField::ALL {
            state.form.set(field, "10");
        }
        state
    }

    fn sample_result(usage: f64) -> PredictionResult {
        serde_json::from_value(serde_json::json!({
            "Predicted Battery Usage (kWh)": usage,
            "Predicted Battery Lifespan (%)": 91.2,
            "Predicted Battery Degradation (km)": 10411.0,
            "Optimal Charging Recommendation": 1
        }))
        .unwrap()
    }

    #[test]
    fn begin_submit_clears_previous_error() {
        let mut state = valid_state();
        let (generation, _) = state.begin_submit().unwrap();
        state.apply_result(generation, Err("connection refused".to_string()));
        assert!(state.error().is_some());

        let _ = state.begin_submit().unwrap();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn begin_submit_clears_error_even_when_validation_replaces_it() {
        let mut state = valid_state();
        let (generation, _) = state.begin_submit().unwrap();
        state.apply_result(generation, Err("boom".to_string()));

        state.form.set(TelemetryField::Voltage, "abc");
        assert!(state.begin_submit().is_none());
        // The stale request error is gone; only the validation message remains.
        assert_eq!(state.error(), Some("Not a number: Voltage"));
    }

    #[test]
    fn invalid_field_blocks_the_request_entirely() {
        let mut state = valid_state();
        state.form.set(TelemetryField::BrakingPattern, "hard");

        assert!(state.begin_submit().is_none());
        assert!(!state.in_flight());
        assert_eq!(state.error(), Some("Not a number: Braking Pattern"));
    }

    #[test]
    fn success_replaces_result_wholesale_and_clears_error() {
        let mut state = valid_state();

        let (generation, _) = state.begin_submit().unwrap();
        state.apply_result(generation, Ok(sample_result(4.2)));

        assert_eq!(state.error(), None);
        assert!(!state.in_flight());
        assert_eq!(state.result().unwrap().rows()[0].1, "4.2");
        assert!(state.result_time().is_some());
    }

    #[test]
    fn failure_sets_fixed_message_and_keeps_stale_result() {
        let mut state = valid_state();

        let (first, _) = state.begin_submit().unwrap();
        state.apply_result(first, Ok(sample_result(4.2)));

        let (second, _) = state.begin_submit().unwrap();
        state.apply_result(second, Err("500 Internal Server Error".to_string()));

        assert_eq!(state.error(), Some(REQUEST_FAILED_MESSAGE));
        // Previous prediction stays visible alongside the error.
        assert_eq!(state.result().unwrap().rows()[0].1, "4.2");
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut state = valid_state();

        let (first, _) = state.begin_submit().unwrap();
        let (second, _) = state.begin_submit().unwrap();
        assert!(state.in_flight());

        // Newest response lands first and settles the state.
        state.apply_result(second, Ok(sample_result(9.9)));
        assert!(!state.in_flight());

        // The older request resolving later must not clobber anything,
        // whether it succeeded or failed.
        state.apply_result(first, Ok(sample_result(1.1)));
        assert_eq!(state.result().unwrap().rows()[0].1, "9.9");

        state.apply_result(first, Err("timed out".to_string()));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn in_flight_tracks_unsettled_generations() {
        let mut state = valid_state();
        assert!(!state.in_flight());

        let (generation, _) = state.begin_submit().unwrap();
        assert!(state.in_flight());

        state.apply_result(generation, Err("refused".to_string()));
        assert!(!state.in_flight());
    }
}
