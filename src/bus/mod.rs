//! Access to DS18B20 thermometers through the Linux `w1` sysfs tree.
//!
//! Kernel w1 documentation: https://docs.kernel.org/w1/w1-generic.html
//! DS18B20 slave driver: https://docs.kernel.org/w1/slaves/w1_therm.html

use crate::error::Ds18b20Error;
use crate::models::Sensor;
use crate::utils::file;
use log::debug;
use std::io;

pub mod parser;
pub mod paths;

pub use paths::BusPaths;

/// A one-wire bus master as seen through sysfs.
///
/// Holds no state besides its paths; every call goes to the file system, so
/// one instance may be shared across threads and read from in parallel.
#[derive(Debug, Clone, Default)]
pub struct W1Bus {
    paths: BusPaths,
}

impl W1Bus {
    pub fn new(paths: BusPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &BusPaths {
        &self.paths
    }

    /// List the sensors registered on the bus master, in listing order.
    ///
    /// An unreadable listing returns the OS error untouched. An empty listing
    /// is not an error.
    pub fn list_sensors(&self) -> io::Result<Vec<Sensor>> {
        let listing = self.paths.master_listing();
        let contents = file::read_to_string(&listing)?;

        let sensors: Vec<Sensor> = file::non_empty_lines(&contents).map(Sensor::new).collect();
        debug!("{} sensors listed in {}", sensors.len(), listing.display());
        Ok(sensors)
    }

    /// Read one sensor's `w1_slave` file and return degrees Celsius.
    pub fn read_temperature(&self, sensor: &Sensor) -> Result<f64, Ds18b20Error> {
        let path = self.paths.sensor_data(&sensor.name);
        let contents = file::read_to_string(&path).map_err(|source| Ds18b20Error::SensorRead {
            name: sensor.name.clone(),
            source,
        })?;

        parser::parse_w1_slave(&contents)
    }
}

impl Sensor {
    pub fn read_temperature(&self, bus: &W1Bus) -> Result<f64, Ds18b20Error> {
        bus.read_temperature(self)
    }
}
