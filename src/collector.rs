use crate::bus::W1Bus;
use crate::config::AppConfig;
use crate::models::{Reading, Sensor};
use log::{debug, error};
use std::time::Instant;
use tokio::task::JoinSet;

/// Read every sensor on its own blocking task and return the successful
/// readings in the order the sensors were given.
///
/// A sensor that fails is logged and left out; the others are unaffected.
pub(crate) async fn collect_readings(
    bus: &W1Bus,
    sensors: Vec<Sensor>,
    config: &AppConfig,
) -> Vec<Reading> {
    let start = Instant::now();
    let mut tasks = JoinSet::new();

    for (index, sensor) in sensors.into_iter().enumerate() {
        let bus = bus.clone();
        tasks.spawn_blocking(move || {
            let result = bus.read_temperature(&sensor);
            (index, sensor, result)
        });
    }

    let mut readings = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, sensor, Ok(celsius))) => {
                let label = config.label_for(&sensor.name);
                readings.push((index, Reading::new(sensor, label, celsius)));
            }
            Ok((_, sensor, Err(e))) => error!("Skipping sensor {}: {}", sensor, e),
            Err(e) => error!("Sensor task failed: {}", e),
        }
    }
    readings.sort_by_key(|(index, _)| *index);

    debug!("collect_readings took: {} ms", start.elapsed().as_millis());
    readings.into_iter().map(|(_, reading)| reading).collect()
}
