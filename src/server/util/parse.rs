use chrono::NaiveTime;

use crate::server::error::AppError;

/// Parses a comma separated id list such as `1, 2,,3`.
///
/// Blank entries are skipped and a missing parameter yields an empty list.
///
/// # Arguments
/// - `name` - Query parameter name, used in the error message
/// - `value` - Raw parameter value if present
///
/// # Returns
/// - `Ok(Vec<i32>)` - Parsed ids in input order
/// - `Err(AppError::BadRequest)` - An entry is not an integer
pub fn parse_id_list(name: &str, value: Option<&str>) -> Result<Vec<i32>, AppError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<i32>().map_err(|_| {
                AppError::BadRequest(format!("Invalid id '{}' in {}", entry, name))
            })
        })
        .collect()
}

/// Parses a time of day written `HH:MM` or `HH:MM:SS`.
pub fn parse_time(name: &str, value: &str) -> Result<NaiveTime, AppError> {
    let value = value.trim();

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| AppError::BadRequest(format!("Invalid time '{}' for {}", value, name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_skipping_blanks() {
        assert_eq!(parse_id_list("groupIds", Some(" 1, 2,,3 ,")).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn missing_or_empty_list_is_empty() {
        assert!(parse_id_list("groupIds", None).unwrap().is_empty());
        assert!(parse_id_list("groupIds", Some("")).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_numeric_entries() {
        assert!(matches!(
            parse_id_list("roomIds", Some("1,abc")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn parses_times_with_or_without_seconds() {
        assert_eq!(
            parse_time("startingTime", "09:00").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("startingTime", "17:30:15").unwrap(),
            NaiveTime::from_hms_opt(17, 30, 15).unwrap()
        );
        assert!(parse_time("startingTime", "25:00").is_err());
    }
}
