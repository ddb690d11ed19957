//! Human-readable counters.
//!
//! ```
//! use iptopo::output::formatting::format_bytes;
//!
//! assert_eq!(format_bytes(1024), "1.00 KiB");
//! ```

/// Format a byte count in human-readable format (KiB, MiB, GiB).
///
/// Uses binary units (1 KiB = 1024 bytes).
///
/// # Example
///
/// ```
/// use iptopo::output::formatting::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 B");
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1_048_576), "1.00 MiB");
/// assert_eq!(format_bytes(1_099_511_627_776), "1.00 TiB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [(&str, f64); 4] = [
        ("TiB", 1024.0 * 1024.0 * 1024.0 * 1024.0),
        ("GiB", 1024.0 * 1024.0 * 1024.0),
        ("MiB", 1024.0 * 1024.0),
        ("KiB", 1024.0),
    ];

    let bytes_f = bytes as f64;
    UNITS
        .iter()
        .find(|(_, size)| bytes_f >= *size)
        .map(|(unit, size)| format!("{:.2} {}", bytes_f / size, unit))
        .unwrap_or_else(|| format!("{} B", bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_boundaries() {
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(1_073_741_824), "1.00 GiB");
    }
}
