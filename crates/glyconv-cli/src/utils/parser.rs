use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid assignment '{0}'. Expected 'NAME=VALUE' (e.g., 't2=203.5').")]
    MissingEquals(String),

    #[error("Parameter name cannot be empty in assignment '{0}'.")]
    EmptyName(String),

    #[error("Value '{value}' for parameter '{name}' is not a finite number.")]
    InvalidNumber { name: String, value: String },
}

/// Splits `KEY=VALUE` at the first `=`, trimming both sides.
pub fn split_assignment(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingEquals(input.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyName(input.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_parameter_assignment(input: &str) -> Result<(String, f64), ParseError> {
    let (name, value) = split_assignment(input)?;
    let parsed = parse_finite(name, value)?;
    Ok((name.to_string(), parsed))
}

pub fn parse_finite(name: &str, value: &str) -> Result<f64, ParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            name: name.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_assignment() {
        assert_eq!(
            parse_parameter_assignment("t2=203.5"),
            Ok(("t2".to_string(), 203.5))
        );
    }

    #[test]
    fn trims_whitespace_around_name_and_value() {
        assert_eq!(
            parse_parameter_assignment("  feed_ph =  6.8 "),
            Ok(("feed_ph".to_string(), 6.8))
        );
    }

    #[test]
    fn accepts_negative_and_exponent_values() {
        assert_eq!(
            parse_parameter_assignment("x=-1.5e2"),
            Ok(("x".to_string(), -150.0))
        );
    }

    #[test]
    fn rejects_missing_equals() {
        assert_eq!(
            parse_parameter_assignment("t2"),
            Err(ParseError::MissingEquals("t2".to_string()))
        );
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            parse_parameter_assignment("=5"),
            Err(ParseError::EmptyName("=5".to_string()))
        );
    }

    #[test]
    fn rejects_non_numeric_and_non_finite_values() {
        assert!(matches!(
            parse_parameter_assignment("t2=hot"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_parameter_assignment("t2=NaN"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_parameter_assignment("t2=inf"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_parameter_assignment("t2="),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn split_keeps_later_equals_in_value() {
        assert_eq!(split_assignment("a=b=c"), Ok(("a", "b=c")));
    }
}
