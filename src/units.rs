//! Byte count conversions used by every renderer

pub const MEGABYTE: u64 = 1024 * 1024;
pub const GIGABYTE: u64 = MEGABYTE * 1024;

/// Whole megabytes, truncated
#[must_use]
pub const fn megabytes(bytes: u64) -> u64 {
    bytes / MEGABYTE
}

/// Whole gigabytes, truncated
#[must_use]
pub const fn gigabytes(bytes: u64) -> u64 {
    bytes / GIGABYTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn megabytes_truncate() {
        assert_eq!(megabytes(0), 0);
        assert_eq!(megabytes(1_048_575), 0);
        assert_eq!(megabytes(1_048_576), 1);
        assert_eq!(megabytes(2_097_152), 2);
        assert_eq!(megabytes(8_589_934_592), 8192);
    }

    #[test]
    fn gigabytes_truncate() {
        assert_eq!(gigabytes(1_073_741_823), 0);
        assert_eq!(gigabytes(1_073_741_824), 1);
        assert_eq!(gigabytes(107_374_182_400), 100);
        assert_eq!(gigabytes(u64::MAX), u64::MAX / GIGABYTE);
    }
}
