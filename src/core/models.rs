use std::collections::HashMap;

use thiserror::Error;

/// The seventeen telemetry inputs the prediction service was trained on,
/// in the order they appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelemetryField {
    TripDistance,
    TripDuration,
    AverageSpeed,
    AccelerationPattern,
    BrakingPattern,
    EnergyConsumption,
    IdleTime,
    Voltage,
    Current,
    ChargeCycles,
    DepthOfDischarge,
    Temperature,
    ChargingPower,
    ChargingDuration,
    ChargingType,
    ChargingStationLocation,
    BatteryChargeEfficiency,
}

impl TelemetryField {
    pub const ALL: [TelemetryField; 17] = [
        TelemetryField::TripDistance,
        TelemetryField::TripDuration,
        TelemetryField::AverageSpeed,
        TelemetryField::AccelerationPattern,
        TelemetryField::BrakingPattern,
        TelemetryField::EnergyConsumption,
        TelemetryField::IdleTime,
        TelemetryField::Voltage,
        TelemetryField::Current,
        TelemetryField::ChargeCycles,
        TelemetryField::DepthOfDischarge,
        TelemetryField::Temperature,
        TelemetryField::ChargingPower,
        TelemetryField::ChargingDuration,
        TelemetryField::ChargingType,
        TelemetryField::ChargingStationLocation,
        TelemetryField::BatteryChargeEfficiency,
    ];

    /// Key used in the JSON request body. Must match the service's feature
    /// columns exactly.
    pub fn wire_key(self) -> &'static str {
        match self {
            TelemetryField::TripDistance => "Trip_Distance_km",
            TelemetryField::TripDuration => "Trip_Duration_min",
            TelemetryField::AverageSpeed => "Average_Speed_kmph",
            TelemetryField::AccelerationPattern => "Acceleration_Pattern",
            TelemetryField::BrakingPattern => "Braking_Pattern",
            TelemetryField::EnergyConsumption => "Energy_Consumption_kWh_per_km",
            TelemetryField::IdleTime => "Idle_Time_min",
            TelemetryField::Voltage => "Voltage_V",
            TelemetryField::Current => "Current_A",
            TelemetryField::ChargeCycles => "Charge_Cycles",
            TelemetryField::DepthOfDischarge => "Depth_of_Discharge_percent",
            TelemetryField::Temperature => "Temperature_C",
            TelemetryField::ChargingPower => "Charging_Power_kW",
            TelemetryField::ChargingDuration => "Charging_Duration_min",
            TelemetryField::ChargingType => "Charging_Type",
            TelemetryField::ChargingStationLocation => "Charging_Station_Location",
            TelemetryField::BatteryChargeEfficiency => "Battery_Charge_Efficiency_percent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TelemetryField::TripDistance => "Trip Distance",
            TelemetryField::TripDuration => "Trip Duration",
            TelemetryField::AverageSpeed => "Average Speed",
            TelemetryField::AccelerationPattern => "Acceleration Pattern",
            TelemetryField::BrakingPattern => "Braking Pattern",
            TelemetryField::EnergyConsumption => "Energy Consumption",
            TelemetryField::IdleTime => "Idle Time",
            TelemetryField::Voltage => "Voltage",
            TelemetryField::Current => "Current",
            TelemetryField::ChargeCycles => "Charge Cycles",
            TelemetryField::DepthOfDischarge => "Depth of Discharge",
            TelemetryField::Temperature => "Temperature",
            TelemetryField::ChargingPower => "Charging Power",
            TelemetryField::ChargingDuration => "Charging Duration",
            TelemetryField::ChargingType => "Charging Type",
            TelemetryField::ChargingStationLocation => "Charging Station Location",
            TelemetryField::BatteryChargeEfficiency => "Battery Charge Efficiency",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            TelemetryField::TripDistance => Some("km"),
            TelemetryField::TripDuration => Some("min"),
            TelemetryField::AverageSpeed => Some("km/h"),
            TelemetryField::EnergyConsumption => Some("kWh/km"),
            TelemetryField::IdleTime => Some("min"),
            TelemetryField::Voltage => Some("V"),
            TelemetryField::Current => Some("A"),
            TelemetryField::DepthOfDischarge => Some("%"),
            TelemetryField::Temperature => Some("°C"),
            TelemetryField::ChargingPower => Some("kW"),
            TelemetryField::ChargingDuration => Some("min"),
            TelemetryField::BatteryChargeEfficiency => Some("%"),
            _ => None,
        }
    }

    /// The categorical inputs were label-encoded before training, so the
    /// service expects their class codes rather than free text.
    pub fn is_encoded_category(self) -> bool {
        matches!(
            self,
            TelemetryField::AccelerationPattern
                | TelemetryField::BrakingPattern
                | TelemetryField::ChargingType
                | TelemetryField::ChargingStationLocation
        )
    }

    /// Parse raw form input into a payload value. Leading/trailing whitespace
    /// is fine; anything that doesn't read as a finite number is rejected so
    /// it can be surfaced to the user instead of reaching the wire.
    pub fn parse(self, raw: &str) -> Result<f64, FieldParseError> {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(FieldParseError { field: self, input: raw.to_string() }),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}: not a finite number: {input:?}", .field.label())]
pub struct FieldParseError {
    pub field: TelemetryField,
    pub input: String,
}

/// Raw user input for every telemetry field. Every field is present from
/// construction on; values hold keystrokes verbatim, numeric or not.
#[derive(Debug, Clone)]
pub struct FormState {
    values: HashMap<TelemetryField, String>,
}

impl Default for FormState {
    fn default() -> Self {
        let values = TelemetryField::ALL.iter().map(|&field| (field, String::new())).collect();
        Self { values }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: TelemetryField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Mutable handle for the text edit bound to `field`.
    pub fn value_mut(&mut self, field: TelemetryField) -> &mut String {
        self.values.entry(field).or_default()
    }

    pub fn set(&mut self, field: TelemetryField, raw: impl Into<String>) {
        self.values.insert(field, raw.into());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn all_fields_have_distinct_wire_keys() {
        let keys: HashSet<&str> = TelemetryField::ALL.iter().map(|f| f.wire_key()).collect();
        assert_eq!(keys.len(), 17);
    }

    #[test]
    fn form_state_starts_with_every_field_empty() {
        let form = FormState::new();
        for field in TelemetryField::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn set_then_read_round_trips_any_string() {
        let mut form = FormState::new();
        for field in TelemetryField::ALL {
            for raw in ["", "12.5", " 3 ", "abc", "12.5abc", "-.", "1e999"] {
                form.set(field, raw);
                assert_eq!(form.value(field), raw);
            }
        }
    }

    #[test]
    fn parse_accepts_trimmed_decimals() {
        assert_eq!(TelemetryField::Voltage.parse("48.5"), Ok(48.5));
        assert_eq!(TelemetryField::Voltage.parse("  -3.25 "), Ok(-3.25));
        assert_eq!(TelemetryField::ChargeCycles.parse("120"), Ok(120.0));
        assert_eq!(TelemetryField::Temperature.parse("1e2"), Ok(100.0));
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        for raw in ["", "abc", "12.5abc", "12,5", "--3"] {
            let err = TelemetryField::TripDistance.parse(raw).unwrap_err();
            assert_eq!(err.input, raw);
            assert_eq!(err.field, TelemetryField::TripDistance);
        }
    }

    #[test]
    fn parse_rejects_non_finite_values() {
        // "NaN" and "inf" parse as f64 but must never reach the payload.
        assert!(TelemetryField::Current.parse("NaN").is_err());
        assert!(TelemetryField::Current.parse("inf").is_err());
        assert!(TelemetryField::Current.parse("-infinity").is_err());
    }

    #[test]
    fn parse_error_names_the_field() {
        let err = TelemetryField::AverageSpeed.parse("fast").unwrap_err();
        assert!(err.to_string().contains("Average Speed"));
    }
}
