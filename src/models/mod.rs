pub mod reading;
pub mod sensor;

pub use reading::Reading;
pub use sensor::Sensor;
