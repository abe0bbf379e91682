use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT: &str = "/sys/bus/w1/devices/";
pub const DEFAULT_MASTER_DIR: &str = "w1_bus_master1";
pub const DEFAULT_MASTER_FILE: &str = "w1_master_slaves";
pub const DEFAULT_SENSOR_FILE: &str = "w1_slave";

/// Where the `w1` driver exposes the bus in sysfs.
///
/// Held by value in each [`W1Bus`](super::W1Bus), so tests and alternate
/// deployments can point at another root without touching global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusPaths {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_master_dir")]
    pub master_dir: String,
    #[serde(default = "default_master_file")]
    pub master_file: String,
    #[serde(default = "default_sensor_file")]
    pub sensor_file: String,
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_master_dir() -> String {
    DEFAULT_MASTER_DIR.to_string()
}

fn default_master_file() -> String {
    DEFAULT_MASTER_FILE.to_string()
}

fn default_sensor_file() -> String {
    DEFAULT_SENSOR_FILE.to_string()
}

impl Default for BusPaths {
    fn default() -> Self {
        Self {
            root: default_root(),
            master_dir: default_master_dir(),
            master_file: default_master_file(),
            sensor_file: default_sensor_file(),
        }
    }
}

impl BusPaths {
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// `<root>/w1_bus_master1/w1_master_slaves`
    pub fn master_listing(&self) -> PathBuf {
        self.root.join(&self.master_dir).join(&self.master_file)
    }

    /// `<root>/<name>/w1_slave`
    pub fn sensor_data(&self, name: &str) -> PathBuf {
        self.root.join(name).join(&self.sensor_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = BusPaths::default();
        assert_eq!(
            paths.master_listing(),
            PathBuf::from("/sys/bus/w1/devices/w1_bus_master1/w1_master_slaves")
        );
        assert_eq!(
            paths.sensor_data("28-000000000001"),
            PathBuf::from("/sys/bus/w1/devices/28-000000000001/w1_slave")
        );
    }

    #[test]
    fn test_with_root_keeps_file_names() {
        let paths = BusPaths::with_root("testdata");
        assert_eq!(paths.master_dir, "w1_bus_master1");
        assert_eq!(paths.sensor_file, "w1_slave");
        assert_eq!(
            paths.master_listing(),
            PathBuf::from("testdata/w1_bus_master1/w1_master_slaves")
        );
    }
}
