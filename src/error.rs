use std::io;
use thiserror::Error;

/// Failures while reading a single sensor.
///
/// Listing the bus returns a bare [`io::Error`] instead, so the caller sees
/// the file-system error exactly as the OS reported it.
#[derive(Debug, Error)]
pub enum Ds18b20Error {
    #[error("failed to read sensor \"{name}\": {source}")]
    SensorRead {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("can not parse temperature, wrong file format")]
    MalformedFile,

    #[error("could not verify crc, regex did not match")]
    CrcValidation,

    #[error("could not extract temperature, regex did not match")]
    TemperatureExtraction,

    #[error("could not extract temperature, parse to float failed")]
    TemperatureParse(#[source] std::num::ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_read_message_embeds_name_and_cause() {
        let err = Ds18b20Error::SensorRead {
            name: "28-000000000000".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read sensor \"28-000000000000\": gone");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_message_hides_int_error() {
        let cause = "x".parse::<i64>().unwrap_err();
        let err = Ds18b20Error::TemperatureParse(cause);
        assert_eq!(err.to_string(), "could not extract temperature, parse to float failed");
    }
}
