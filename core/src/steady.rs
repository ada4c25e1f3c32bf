// core/src/steady.rs
use log::{debug, warn};

use crate::classify::{detect_type, LineKind};
use crate::error::{ParseErrorKind, TokenClass, WozError, WozResult};
use crate::models::Segment;
use crate::ramp::convert_ramp_to_mrc;
use crate::tokens::{repeat_prefix, tokenize};

/// Én linje → segmenter. Klassifiserer og velger ekspander; brukes både
/// for toppnivå-linjer og for klausulene i en repeat-blokk.
pub fn expand_line(line: &str, step_min: f64) -> WozResult<Vec<Segment>> {
    // "Nx 3min from 50 to 80% FTP, ..." er en repeat selv om den inneholder "from"
    let is_repeat = repeat_prefix(line)?.is_some();
    match detect_type(line) {
        LineKind::Ramp if !is_repeat => convert_ramp_to_mrc(line, step_min),
        _ => convert_steady_to_mrc(line, step_min),
    }
}

/// Steady-linje: repeat, free ride eller vanlig konstant effekt (i den prioriteten).
/// `step_min` brukes kun når en repeat-klausul selv er en rampe.
pub fn convert_steady_to_mrc(line: &str, step_min: f64) -> WozResult<Vec<Segment>> {
    if let Some((count, body)) = repeat_prefix(line)? {
        return expand_repeat(line, count, body, step_min);
    }

    let t = tokenize(line, LineKind::Steady)?;
    let duration = t
        .duration_min()
        .ok_or_else(|| WozError::missing(line, TokenClass::Duration))?;

    if t.free_ride {
        if let Some(p) = t.power {
            warn!("free ride {:?}: ignoring power {}%", line, p);
        }
        return Ok(vec![Segment::new(duration, 0.0)]);
    }

    let power = t
        .power
        .ok_or_else(|| WozError::missing(line, TokenClass::Power))?;

    Ok(vec![Segment::new(duration, power as f64)])
}

fn expand_repeat(line: &str, count: u64, body: &str, step_min: f64) -> WozResult<Vec<Segment>> {
    let clauses: Vec<&str> = body.split(',').map(str::trim).collect();
    if clauses.len() != 2 || clauses.iter().any(|c| c.is_empty()) {
        return Err(WozError::parse(
            line,
            ParseErrorKind::RepeatClauses { found: clauses.len() },
        ));
    }

    // Ekspander hver klausul én gang, kopier deretter N ganger
    let first = expand_line(clauses[0], step_min)?;
    let second = expand_line(clauses[1], step_min)?;

    let mut out = Vec::new();
    for _ in 0..count {
        out.extend_from_slice(&first);
        out.extend_from_slice(&second);
    }

    debug!(
        "repeat {:?}: {}x ({} + {} segments)",
        line,
        count,
        first.len(),
        second.len()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_steady() {
        let segs = convert_steady_to_mrc("2min @ 55% FTP", 0.5).unwrap();
        assert_eq!(segs, vec![Segment::new(2.0, 55.0)]);
    }

    #[test]
    fn steady_with_cadence_discards_rpm() {
        let segs = convert_steady_to_mrc("1min @ 85rpm, 55% FTP", 0.5).unwrap();
        assert_eq!(segs, vec![Segment::new(1.0, 55.0)]);
    }

    #[test]
    fn repeat_block() {
        let segs = convert_steady_to_mrc("2x 1min @ 55% FTP, 2min @ 100% FTP", 0.5).unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::new(1.0, 55.0),
                Segment::new(2.0, 100.0),
                Segment::new(1.0, 55.0),
                Segment::new(2.0, 100.0),
            ]
        );
    }

    #[test]
    fn free_ride_is_zero_power() {
        let segs = convert_steady_to_mrc("10min free ride", 0.5).unwrap();
        assert_eq!(segs, vec![Segment::new(10.0, 0.0)]);
    }

    #[test]
    fn repeat_with_three_clauses_is_rejected() {
        let err = convert_steady_to_mrc("2x 1min @ 55% FTP, 2min @ 100% FTP, 1min @ 50% FTP", 0.5)
            .unwrap_err();
        assert_eq!(
            err.parse_kind(),
            Some(&ParseErrorKind::RepeatClauses { found: 3 })
        );
    }

    #[test]
    fn missing_power_is_parse_error() {
        let err = convert_steady_to_mrc("2min @ FTP", 0.5).unwrap_err();
        assert_eq!(
            err.parse_kind(),
            Some(&ParseErrorKind::Missing(TokenClass::Power))
        );
    }
}
