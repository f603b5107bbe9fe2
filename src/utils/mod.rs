mod time_utils;

pub use time_utils::epoch_sec_to_date_string;
