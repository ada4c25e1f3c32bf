// core/src/ramp.rs
use log::debug;

use crate::classify::LineKind;
use crate::error::{TokenClass, WozError, WozResult};
use crate::models::Segment;
use crate::tokens::tokenize;

/// Standard diskretiseringssteg (minutter).
pub const DEFAULT_STEP_MIN: f64 = 0.5;

/// Steget må være endelig og > 0.
pub fn validate_step(step_min: f64) -> WozResult<()> {
    if step_min.is_finite() && step_min > 0.0 {
        Ok(())
    } else {
        Err(WozError::config(format!(
            "discretization step must be a positive number of minutes, got {step_min}"
        )))
    }
}

/// Rampe-linje → flate mikrosegmenter med lineært økende/synkende effekt.
///
/// Siste segment lander alltid eksakt på sluttidspunkt og slutteffekt,
/// uansett akkumulert flyttallsfeil i mellomstegene.
pub fn convert_ramp_to_mrc(line: &str, step_min: f64) -> WozResult<Vec<Segment>> {
    validate_step(step_min)?;

    let t = tokenize(line, LineKind::Ramp)?;
    let duration = t
        .duration_min()
        .ok_or_else(|| WozError::missing(line, TokenClass::Duration))?;
    let (start, end) = t
        .ramp
        .ok_or_else(|| WozError::missing(line, TokenClass::RampRange))?;

    let segs = ramp_segments(duration, start as f64, end as f64, step_min);
    debug!(
        "ramp {:?}: {:.3} min {}→{} in {} segments",
        line,
        duration,
        start,
        end,
        segs.len()
    );
    Ok(segs)
}

/// Kjernen i rampe-ekspansjonen, uten parsing.
pub fn ramp_segments(duration_min: f64, start: f64, end: f64, step_min: f64) -> Vec<Segment> {
    // enheter rundes ties-to-even (16.5 → 16)
    let units = (duration_min / step_min).round_ties_even().max(0.0) as u64;
    let mut out = Vec::new();

    let mut time = 0.0;
    let mut power = start;

    if units > 0 {
        let per_unit = (end - start) / units as f64;
        for _ in 0..units {
            let next = power + per_unit;
            let advancing = (per_unit > 0.0 && next < end) || (per_unit < 0.0 && next > end);
            // Ikke la et helt steg passere total varighet (round() kan runde opp)
            if !advancing || time + step_min > duration_min + 1e-9 {
                break;
            }
            out.push(Segment::new(step_min, power));
            power = next;
            time += step_min;
        }
    }

    // Restsegment: kan bli 0 min når stegene går opp i varigheten
    out.push(Segment::new((duration_min - time).max(0.0), end));
    out
}
