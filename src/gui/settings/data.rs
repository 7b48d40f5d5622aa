/// Where the original deployment serves the model API.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SettingsData {
    /// Base URL of the prediction service; `/predict` and `/` hang off it.
    pub endpoint: String,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_targets_loopback() {
        assert_eq!(SettingsData::default().endpoint, "http://127.0.0.1:5000");
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = SettingsData { endpoint: "http://10.0.0.4:8080".to_string() };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: SettingsData = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let loaded: SettingsData = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded, SettingsData::default());
    }
}
