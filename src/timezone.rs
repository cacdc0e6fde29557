use time_tz::Tz;

use crate::Error;

/// Look up `canonical_timezone`, e.g. "America/Sao_Paulo", in the timezone database.
///
/// The returned [Tz] knows the full offset history of the zone, so dates from
/// any point in time can be converted with the offset that applied back then.
///
/// # Errors
/// Returns [Error::InvalidTimezone] if the name is not a known canonical timezone.
pub fn get_timezone(canonical_timezone: &str) -> Result<&'static Tz, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))
}

#[cfg(test)]
mod tests {
    use time_tz::TimeZone;

    use crate::Error;

    use super::get_timezone;

    #[test]
    fn finds_canonical_timezone() {
        let timezone = get_timezone("America/Sao_Paulo").unwrap();

        assert_eq!(timezone.name(), "America/Sao_Paulo");
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        assert_eq!(
            get_timezone("Middle/Nowhere").err(),
            Some(Error::InvalidTimezone("Middle/Nowhere".to_owned()))
        );
    }
}
