use serde::Serialize;
use std::fmt;

/// A thermometer on the one-wire bus, identified by its slave address
/// (e.g. `28-000000000001`).
///
/// The name is an opaque token: it is used as a directory name under the bus
/// root and never validated, so an unknown name fails on read rather than on
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Sensor {
    pub name: String,
}

impl Sensor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_kept_verbatim() {
        let sensor = Sensor::new(" 28-00 ");
        assert_eq!(sensor.name, " 28-00 ");
        assert_eq!(sensor.to_string(), " 28-00 ");
    }
}
