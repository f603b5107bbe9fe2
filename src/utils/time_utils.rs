use chrono::DateTime;

const DATE_FORMAT: &str = "%Y-%m-%d";

// Time Helper functions

pub fn epoch_sec_to_date_string(epoch_sec: i64) -> String {
    // Display only; an unrepresentable timestamp renders blank rather than panicking
    DateTime::from_timestamp(epoch_sec, 0)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_seconds_as_utc_date() {
        assert_eq!(epoch_sec_to_date_string(0), "1970-01-01");
        assert_eq!(epoch_sec_to_date_string(1_700_000_000), "2023-11-14");
    }
}
