use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Read a whole sysfs text file.
///
/// `w1_slave` reads block while the driver runs a conversion (up to ~750 ms
/// at 12-bit resolution), so the elapsed time is logged.
pub fn read_to_string(path: &Path) -> io::Result<String> {
    let start = Instant::now();
    let contents = fs::read_to_string(path)?;
    debug!(
        "read {} took: {} ms",
        path.display(),
        start.elapsed().as_millis()
    );
    Ok(contents)
}

/// Split on `\n` and drop empty lines. No trimming: every kept line is
/// returned byte-for-byte.
pub fn non_empty_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.split('\n').filter(|line| !line.is_empty())
}
