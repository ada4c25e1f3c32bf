// core/src/numbers.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ParseErrorKind, WozError, WozResult};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Hver sifferrekke i linjen som (startindeks, verdi), venstre → høyre.
/// Tall som ikke får plass i u64 gir `NumberTooLarge`.
pub fn number_runs(line: &str) -> WozResult<Vec<(usize, u64)>> {
    DIGITS
        .find_iter(line)
        .map(|m| {
            m.as_str()
                .parse::<u64>()
                .map(|n| (m.start(), n))
                .map_err(|_| {
                    WozError::parse(line, ParseErrorKind::NumberTooLarge(m.as_str().to_string()))
                })
        })
        .collect()
}

/// Alle heltall i linjen, venstre → høyre.
/// Prosenttegn, enheter og tegnsetting ignoreres.
pub fn extract_numbers(line: &str) -> WozResult<Vec<u64>> {
    Ok(number_runs(line)?.into_iter().map(|(_, n)| n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_with_cadence() {
        assert_eq!(
            extract_numbers("9min @ 85rpm, from 88 to 95% FTP").unwrap(),
            vec![9, 85, 88, 95]
        );
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(
            extract_numbers("8min 10sec from 50 to 80% FTP").unwrap(),
            vec![8, 10, 50, 80]
        );
    }

    #[test]
    fn no_numbers() {
        assert!(extract_numbers("free ride").unwrap().is_empty());
        assert!(extract_numbers("").unwrap().is_empty());
    }

    #[test]
    fn runs_carry_start_index() {
        assert_eq!(number_runs("x12 3").unwrap(), vec![(1, 12), (4, 3)]);
    }

    #[test]
    fn overflowing_number_is_rejected() {
        let err = extract_numbers("99999999999999999999999min @ 55% FTP").unwrap_err();
        assert_eq!(
            err.parse_kind(),
            Some(&ParseErrorKind::NumberTooLarge("99999999999999999999999".to_string()))
        );
    }
}
