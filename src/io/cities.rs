//! City file parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{TourError, TourResult};
use crate::models::City;

/// Parses a city list held in memory.
///
/// # Errors
///
/// Returns [`TourError::Parse`] naming the first malformed line.
///
/// # Examples
///
/// ```
/// use u_range_tour::io::parse_cities;
///
/// let cities = parse_cities("1, 0.0, 0.0\n2 3.5 4\n\n3.0,10,10\n").unwrap();
/// assert_eq!(cities.len(), 3);
/// assert_eq!(cities[2].id(), 3);
/// assert_eq!(cities[1].x(), 3.5);
/// ```
pub fn parse_cities(input: &str) -> TourResult<Vec<City>> {
    read_cities(input.as_bytes())
}

/// Parses a city list from any buffered reader.
///
/// # Errors
///
/// Returns [`TourError::Io`] if reading fails and [`TourError::Parse`] for
/// a malformed line.
pub fn read_cities<R: BufRead>(reader: R) -> TourResult<Vec<City>> {
    let mut cities = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        cities.push(parse_line(&line, index + 1)?);
    }
    Ok(cities)
}

/// Reads a city file from disk.
///
/// # Errors
///
/// See [`read_cities`].
pub fn load_cities<P: AsRef<Path>>(path: P) -> TourResult<Vec<City>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let cities = read_cities(BufReader::new(file))?;
    debug!(path = %path.display(), count = cities.len(), "cities loaded");
    Ok(cities)
}

fn parse_line(line: &str, line_no: usize) -> TourResult<City> {
    let normalized = line.replace(',', " ");
    let fields: Vec<&str> = normalized.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(TourError::Parse {
            line: line_no,
            message: format!("expected 3 fields (id, x, y), found {}", fields.len()),
        });
    }

    let id = parse_id(fields[0]).ok_or_else(|| TourError::Parse {
        line: line_no,
        message: format!("invalid city id '{}'", fields[0]),
    })?;
    let x = parse_coordinate(fields[1], line_no)?;
    let y = parse_coordinate(fields[2], line_no)?;
    Ok(City::new(id, x, y))
}

fn parse_id(field: &str) -> Option<usize> {
    if let Ok(id) = field.parse::<usize>() {
        return Some(id);
    }
    let value: f64 = field.parse().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
        Some(value as usize)
    } else {
        None
    }
}

fn parse_coordinate(field: &str, line_no: usize) -> TourResult<f64> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TourError::Parse {
            line: line_no,
            message: format!("invalid coordinate '{field}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        let cities = parse_cities("1,2,3\n2 4 5\n3 ,\t6, 7\n").expect("valid");
        assert_eq!(
            cities,
            vec![
                City::new(1, 2.0, 3.0),
                City::new(2, 4.0, 5.0),
                City::new(3, 6.0, 7.0),
            ]
        );
    }

    #[test]
    fn test_float_ids() {
        let cities = parse_cities("1.0 0 0\n2.0 1 1\n").expect("valid");
        assert_eq!(cities[0].id(), 1);
        assert_eq!(cities[1].id(), 2);
        assert!(parse_cities("1.5 0 0").is_err());
        assert!(parse_cities("-1 0 0").is_err());
    }

    #[test]
    fn test_reports_line_number() {
        let err = parse_cities("1 0 0\n\n2 zero 0\n").unwrap_err();
        match err {
            TourError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("zero"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            parse_cities("1 2"),
            Err(TourError::Parse { line: 1, .. })
        ));
        assert!(parse_cities("1 2 3 4").is_err());
        assert!(parse_cities("1 nan 0").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_cities("").expect("valid").is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_cities("/nonexistent/cities.csv").unwrap_err();
        assert!(matches!(err, TourError::Io(_)));
    }
}
