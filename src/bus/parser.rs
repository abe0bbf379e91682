use crate::error::Ds18b20Error;
use regex::Regex;
use std::sync::LazyLock;

// 49 01 4b 46 7f ff 07 10 f6 : crc=f6 YES
static CRC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[0-9a-f]{2} ){9}: crc=[0-9a-f]{2} YES").expect("crc line pattern")
});

// 33 00 4b 46 ff ff 02 10 f4 t=25625
static TEMPERATURE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[0-9a-f]{2} ){9}t=(?P<temperature>[-0-9]+)").expect("temperature line pattern")
});

/// Parse the contents of a DS18B20 `w1_slave` file into degrees Celsius.
///
/// The driver writes two lines, the scratchpad with its CRC verdict and the
/// scratchpad again with the reading in millidegrees:
///
/// ```text
/// 33 00 4b 46 ff ff 02 10 f4 : crc=f4 YES
/// 33 00 4b 46 ff ff 02 10 f4 t=25625
/// ```
///
/// Only the driver's `YES` verdict is checked, the CRC-8 is not recomputed.
pub fn parse_w1_slave(contents: &str) -> Result<f64, Ds18b20Error> {
    let lines: Vec<&str> = contents.split('\n').collect();
    // Two lines plus the empty tail after the final newline.
    if lines.len() != 3 {
        return Err(Ds18b20Error::MalformedFile);
    }

    if !CRC_LINE.is_match(lines[0]) {
        return Err(Ds18b20Error::CrcValidation);
    }

    let captures = TEMPERATURE_LINE
        .captures(lines[1])
        .ok_or(Ds18b20Error::TemperatureExtraction)?;
    let millidegrees = captures["temperature"]
        .parse::<i64>()
        .map_err(Ds18b20Error::TemperatureParse)?;

    Ok(millidegrees as f64 / 1000.0)
}
