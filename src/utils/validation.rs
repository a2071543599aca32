//! Field validators for console input.
//!
//! Each validator takes the trimmed input and returns the accepted value or
//! the message to show before prompting again.

use once_cell::sync::Lazy;
use regex::Regex;

/// Earliest accepted release year
pub const MIN_YEAR: i32 = 1950;
/// Latest accepted release year
pub const MAX_YEAR: i32 = 2024;

#[allow(clippy::expect_used)]
static PERSON_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L} '\-]+$").expect("person name pattern compiles"));

#[allow(clippy::expect_used)]
static CREATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N} '\-]+$").expect("creator pattern compiles"));

#[allow(clippy::expect_used)]
static STREET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N} .\-]+$").expect("street pattern compiles"));

#[allow(clippy::expect_used)]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

#[allow(clippy::expect_used)]
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d[\d -]{6,14}\d$").expect("phone pattern compiles"));

fn non_empty<'a>(input: &'a str, field: &str) -> Result<&'a str, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(format!("Invalid input. {field} cannot be empty."))
    } else {
        Ok(trimmed)
    }
}

/// Free text that only has to be present (videogame name)
pub fn required(input: &str, field: &str) -> Result<String, String> {
    non_empty(input, field).map(str::to_string)
}

/// Person name: letters, spaces, hyphens and apostrophes, no digits
pub fn person_name(input: &str) -> Result<String, String> {
    let name = non_empty(input, "Name")?;
    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err("Invalid input. Name cannot contain numbers.".to_string());
    }
    if !PERSON_NAME.is_match(name) {
        return Err(
            "Invalid input. Name can only contain letters, spaces, hyphens, and apostrophes."
                .to_string(),
        );
    }
    Ok(name.to_string())
}

/// Place-like words (city, country, color): letters, spaces, hyphens, apostrophes
pub fn place(input: &str, field: &str) -> Result<String, String> {
    let value = non_empty(input, field)?;
    if !PERSON_NAME.is_match(value) {
        return Err(format!(
            "Invalid input. {field} can only contain letters, spaces, hyphens, and apostrophes."
        ));
    }
    Ok(value.to_string())
}

/// Storytelling or graphics creator: also allows digits
pub fn creator(input: &str, field: &str) -> Result<String, String> {
    let value = non_empty(input, field)?;
    if !CREATOR.is_match(value) {
        return Err(format!(
            "Invalid input. {field} can only contain letters, numbers, spaces, hyphens, and apostrophes."
        ));
    }
    Ok(value.to_string())
}

pub fn street(input: &str) -> Result<String, String> {
    let value = non_empty(input, "Street")?;
    if !STREET.is_match(value) {
        return Err(
            "Invalid input. Street can only contain letters, numbers, spaces, hyphens, and periods."
                .to_string(),
        );
    }
    Ok(value.to_string())
}

pub fn email(input: &str) -> Result<String, String> {
    let value = non_empty(input, "Email")?;
    if !EMAIL.is_match(value) {
        return Err("Invalid input. Please enter a valid email address.".to_string());
    }
    Ok(value.to_string())
}

pub fn phone(input: &str) -> Result<String, String> {
    let value = non_empty(input, "Phone number")?;
    if !PHONE.is_match(value) {
        return Err(
            "Invalid input. Please enter a valid phone number (e.g., +1234567890, 123-456-7890)."
                .to_string(),
        );
    }
    Ok(value.to_string())
}

/// Non-negative integer such as a user id, zip code or videogame code
pub fn non_negative(input: &str, field: &str) -> Result<u32, String> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid input. Please enter a valid integer for the {field}."))?;
    if value < 0 {
        return Err(format!("Invalid input. {field} cannot be negative."));
    }
    u32::try_from(value).map_err(|_| format!("Invalid input. {field} is too large."))
}

pub fn price(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter a valid number for the price.".to_string())?;
    if !value.is_finite() {
        return Err("Invalid input. Please enter a valid number for the price.".to_string());
    }
    if value < 0.0 {
        return Err("Invalid input. Price cannot be negative.".to_string());
    }
    Ok(value)
}

pub fn year(input: &str) -> Result<i32, String> {
    let value: i32 = input
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter a valid integer for the year.".to_string())?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
        return Err(format!(
            "Invalid input. Year must be between {MIN_YEAR} and {MAX_YEAR}."
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name() {
        assert_eq!(person_name("  María O'Neil-Ruiz "), Ok("María O'Neil-Ruiz".to_string()));
        assert_eq!(
            person_name("R2D2"),
            Err("Invalid input. Name cannot contain numbers.".to_string())
        );
        assert!(person_name("bob!").is_err());
        assert!(person_name("   ").is_err());
    }

    #[test]
    fn test_creator_allows_digits() {
        assert!(creator("Studio 4", "Graphics creator").is_ok());
        assert!(creator("Studio_4", "Graphics creator").is_err());
    }

    #[test]
    fn test_street() {
        assert!(street("Cra. 7 - 40").is_ok());
        assert!(street("Cra #7").is_err());
    }

    #[test]
    fn test_email() {
        assert!(email("ana@example.com").is_ok());
        assert!(email("ana@example").is_err());
        assert!(email("ana.example.com").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(phone("+1234567890").is_ok());
        assert!(phone("123-456-7890").is_ok());
        assert!(phone("12345").is_err());
        assert!(phone("phone").is_err());
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("42", "ID"), Ok(42));
        assert!(non_negative("-1", "ID").is_err());
        assert!(non_negative("abc", "ID").is_err());
    }

    #[test]
    fn test_price() {
        assert_eq!(price("19.99"), Ok(19.99));
        assert!(price("-1").is_err());
        assert!(price("NaN").is_err());
        assert!(price("free").is_err());
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(year("1950"), Ok(1950));
        assert_eq!(year("2024"), Ok(2024));
        assert!(year("1949").is_err());
        assert!(year("2025").is_err());
    }
}
