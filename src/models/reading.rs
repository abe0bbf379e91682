use crate::models::sensor::Sensor;
use serde::Serialize;

/// One temperature sample as reported by the binary.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub sensor: Sensor,
    pub label: String,
    pub celsius: f64,
    pub time: i64,
    pub time_display: String,
}

impl Reading {
    pub fn new(sensor: Sensor, label: String, celsius: f64) -> Self {
        let now = chrono::Local::now();
        Self {
            sensor,
            label,
            celsius,
            time: now.timestamp(),
            time_display: now.format("%H:%M:%S").to_string(),
        }
    }

    pub fn display(&self) -> String {
        format!(
            "{} {} {} {:.3} °C",
            self.time_display, self.sensor, self.label, self.celsius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut reading = Reading::new(Sensor::new("28-000000000001"), "Kitchen".into(), -5.32);
        reading.time_display = "12:00:00".to_string();
        assert_eq!(reading.display(), "12:00:00 28-000000000001 Kitchen -5.320 °C");
    }

    #[test]
    fn test_json_fields() {
        let reading = Reading::new(Sensor::new("28-000000000001"), "Kitchen".into(), 25.625);
        let value = serde_json::to_value(&reading).unwrap();
        assert_eq!(value["sensor"]["name"], "28-000000000001");
        assert_eq!(value["label"], "Kitchen");
        assert_eq!(value["celsius"], 25.625);
    }
}
