use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::core::models::{
    FormState,
    TelemetryField,
};

/// Payload for `POST /predict`: the seventeen telemetry fields coerced to
/// numbers. Built transiently at submit time, never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct PredictionRequest {
    fields: BTreeMap<&'static str, f64>,
}

impl PredictionRequest {
    /// Coerce every form value to a number. Fields that don't parse are
    /// collected and reported together so the user can fix them in one pass;
    /// no request is built unless all seventeen are clean.
    pub fn from_form(form: &FormState) -> Result<Self, Vec<TelemetryField>> {
        let mut fields = BTreeMap::new();
        let mut invalid = Vec::new();

        for field in TelemetryField::ALL {
            match field.parse(form.value(field)) {
                Ok(value) => {
                    fields.insert(field.wire_key(), value);
                }
                Err(_) => invalid.push(field),
            }
        }

        if invalid.is_empty() {
            Ok(Self { fields })
        } else {
            Err(invalid)
        }
    }

    pub fn get(&self, field: TelemetryField) -> Option<f64> {
        self.fields.get(field.wire_key()).copied()
    }
}

/// The four outputs of the prediction service. Values stay raw JSON: the
/// service returns numbers for the first three and has been seen returning
/// both ints and strings for the recommendation, so nothing is enforced.
/// Missing keys deserialize to `None` and render as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "Predicted Battery Usage (kWh)", default)]
    pub battery_usage_kwh: Option<Value>,

    #[serde(rename = "Predicted Battery Lifespan (%)", default)]
    pub battery_lifespan_percent: Option<Value>,

    #[serde(rename = "Predicted Battery Degradation (km)", default)]
    pub battery_degradation_km: Option<Value>,

    #[serde(rename = "Optimal Charging Recommendation", default)]
    pub charging_recommendation: Option<Value>,
}

impl PredictionResult {
    /// Label/value pairs in display order for the result block.
    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Battery Usage (kWh)", display_value(&self.battery_usage_kwh)),
            ("Battery Lifespan (%)", display_value(&self.battery_lifespan_percent)),
            ("Battery Degradation (km)", display_value(&self.battery_degradation_km)),
            ("Charging Recommendation", display_value(&self.charging_recommendation)),
        ]
    }
}

fn display_value(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::FormState;

    fn filled_form(raw: &str) -> FormState {
        let mut form = FormState::new();
        for field in TelemetryField::ALL {
            form.set(field, raw);
        }
        form
    }

    #[test]
    fn request_carries_all_seventeen_fields() {
        let request = PredictionRequest::from_form(&filled_form("12.5")).unwrap();

        let body = serde_json::to_value(&request).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 17);
        for field in TelemetryField::ALL {
            assert_eq!(object[field.wire_key()], serde_json::json!(12.5));
        }
    }

    #[test]
    fn request_parses_each_field_independently() {
        let mut form = filled_form("1");
        form.set(TelemetryField::Voltage, " 396.8 ");
        form.set(TelemetryField::ChargeCycles, "250");

        let request = PredictionRequest::from_form(&form).unwrap();
        assert_eq!(request.get(TelemetryField::Voltage), Some(396.8));
        assert_eq!(request.get(TelemetryField::ChargeCycles), Some(250.0));
        assert_eq!(request.get(TelemetryField::TripDistance), Some(1.0));
    }

    #[test]
    fn request_reports_every_invalid_field() {
        let mut form = filled_form("3.3");
        form.set(TelemetryField::Current, "abc");
        form.set(TelemetryField::Temperature, "");

        let invalid = PredictionRequest::from_form(&form).unwrap_err();
        assert_eq!(invalid, vec![TelemetryField::Current, TelemetryField::Temperature]);
    }

    #[test]
    fn result_deserializes_full_shape() {
        let result: PredictionResult = serde_json::from_str(
            r#"{
                "Predicted Battery Usage (kWh)": 4.3219,
                "Predicted Battery Lifespan (%)": 87.12,
                "Predicted Battery Degradation (km)": 15230.55,
                "Optimal Charging Recommendation": 2
            }"#,
        )
        .unwrap();

        let rows = result.rows();
        assert_eq!(rows[0], ("Battery Usage (kWh)", "4.3219".to_string()));
        assert_eq!(rows[1], ("Battery Lifespan (%)", "87.12".to_string()));
        assert_eq!(rows[2], ("Battery Degradation (km)", "15230.55".to_string()));
        assert_eq!(rows[3], ("Charging Recommendation", "2".to_string()));
    }

    #[test]
    fn result_tolerates_missing_and_unknown_keys() {
        let result: PredictionResult = serde_json::from_str(
            r#"{
                "Predicted Battery Usage (kWh)": 4.0,
                "Something Else Entirely": true
            }"#,
        )
        .unwrap();

        assert_eq!(result.battery_usage_kwh, Some(serde_json::json!(4.0)));
        assert_eq!(result.battery_lifespan_percent, None);
        // Missing outputs render as empty, not as an error.
        assert_eq!(result.rows()[1].1, "");
    }

    #[test]
    fn string_recommendation_renders_verbatim() {
        let result: PredictionResult = serde_json::from_str(
            r#"{ "Optimal Charging Recommendation": "Slow charge overnight" }"#,
        )
        .unwrap();

        assert_eq!(result.rows()[3].1, "Slow charge overnight");
    }
}
