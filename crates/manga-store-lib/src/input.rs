//! Rules applied to raw form input before it is sent to the store API.

use crate::error::Error;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 5.0;
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Coerce a rating into `[MIN_SCORE, MAX_SCORE]`. Out of range values are
/// pulled to the nearest bound, `NaN` becomes `MIN_SCORE`.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        MIN_SCORE
    } else {
        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Parse the rating widget value, anything that is not a number counts as
/// `MIN_SCORE`.
pub fn parse_score(value: &str) -> f64 {
    clamp_score(value.trim().parse::<f64>().unwrap_or(MIN_SCORE))
}

/// Split the comma separated genres field. Labels are kept verbatim, so
/// whitespace and empty labels survive.
pub fn parse_genres(value: &str) -> Vec<String> {
    if value.is_empty() {
        vec![]
    } else {
        value.split(',').map(|genre| genre.to_string()).collect()
    }
}

pub fn join_genres(genres: &[String]) -> String {
    genres.join(",")
}

/// Parse the search limit field the way a browser `parseInt` would: leading
/// whitespace is skipped, an optional sign and the leading digits are read,
/// the rest is ignored. No digits, or a zero, falls back to
/// `DEFAULT_SEARCH_LIMIT`.
pub fn parse_limit(value: &str) -> i64 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(0) | Err(_) => DEFAULT_SEARCH_LIMIT,
        Ok(limit) if negative => -limit,
        Ok(limit) => limit,
    }
}

pub fn validate_email(email: &str) -> Result<(), Error> {
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(Error::InvalidInput(
            "Please enter a valid email address".to_string(),
        )),
    }
}

pub fn validate_password(password: &str) -> Result<(), Error> {
    if password.is_empty() {
        Err(Error::InvalidInput("Please enter a password".to_string()))
    } else {
        Ok(())
    }
}
