/// Rows to show: `--limit` when given, else the configured default.
/// `--limit 0` shows every row.
#[must_use]
pub fn row_limit(flag: Option<u32>, configured: u32) -> usize {
    match flag.unwrap_or(configured) {
        0 => usize::MAX,
        n => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::row_limit;

    #[test]
    fn flag_overrides_config() {
        assert_eq!(row_limit(Some(3), 20), 3);
    }

    #[test]
    fn config_applies_without_flag() {
        assert_eq!(row_limit(None, 20), 20);
    }

    #[test]
    fn zero_flag_means_unlimited() {
        assert_eq!(row_limit(Some(0), 20), usize::MAX);
    }
}
