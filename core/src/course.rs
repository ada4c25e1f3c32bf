// core/src/course.rs
use log::debug;

use crate::config::ConvertConfig;
use crate::error::{WozError, WozResult};
use crate::models::{Breakpoint, Segment};
use crate::steady::expand_line;

pub const COURSE_DATA_START: &str = "[COURSE DATA]";
pub const COURSE_DATA_END: &str = "[END COURSE DATA]";

// --- RoundTo trait (avrunding half-away-from-zero til dp desimaler) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Fast to-desimalers format, uten "-0.00".
pub fn fmt2(x: f64) -> String {
    let v = x.round_to(2);
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{:.2}", v)
}

/// `tid<TAB>effekt`
pub fn format_breakpoint(bp: &Breakpoint) -> String {
    format!("{}\t{}", fmt2(bp.time_min), fmt2(bp.power_pct))
}

pub fn course_header(name: &str) -> Vec<String> {
    vec![
        "[COURSE HEADER]".to_string(),
        "VERSION = 2".to_string(),
        "UNITS = ENGLISH".to_string(),
        format!("FILE NAME = {name}.mrc"),
        "MINUTES PERCENT".to_string(),
        "[END COURSE HEADER]".to_string(),
    ]
}

/// Alle linjer → én flat segmentliste, i linje- og intern rekkefølge.
pub fn collect_segments<S: AsRef<str>>(lines: &[S], step_min: f64) -> WozResult<Vec<Segment>> {
    let mut data = Vec::new();
    for line in lines {
        data.extend(expand_line(line.as_ref(), step_min)?);
    }
    Ok(data)
}

/// Relative segmenter → absolutte breakpoints.
///
/// Hver intern segmentgrense får to punkter på samme tid (gammel og ny
/// effekt), slik MRC-formatet tegner momentane steg.
pub fn assemble(segments: &[Segment]) -> WozResult<Vec<Breakpoint>> {
    let first = segments.first().ok_or(WozError::EmptyWorkout)?;

    let mut out = Vec::with_capacity(segments.len() * 2);
    out.push(Breakpoint { time_min: 0.0, power_pct: first.power_pct });

    let mut clock = 0.0;
    for (i, seg) in segments.iter().enumerate() {
        let end = clock + seg.duration_min;
        if i > 0 {
            out.push(Breakpoint { time_min: clock, power_pct: seg.power_pct });
        }
        out.push(Breakpoint { time_min: end, power_pct: seg.power_pct });
        clock = end;
    }

    Ok(out)
}

/// Linjer → breakpoints etter config (inkl. evt. fjerning av siste punkt).
pub fn build_breakpoints<S: AsRef<str>>(lines: &[S], cfg: &ConvertConfig) -> WozResult<Vec<Breakpoint>> {
    cfg.validate()?;
    let segments = collect_segments(lines, cfg.step_min)?;
    let mut points = assemble(&segments)?;
    if cfg.drop_final_breakpoint {
        points.pop();
    }
    debug!(
        "{} linjer → {} segmenter → {} breakpoints",
        lines.len(),
        segments.len(),
        points.len()
    );
    Ok(points)
}

/// Full MRC-fil som linjer, med eksplisitt config.
pub fn construct_with<S: AsRef<str>>(name: &str, lines: &[S], cfg: &ConvertConfig) -> WozResult<Vec<String>> {
    let points = build_breakpoints(lines, cfg)?;

    let mut out = course_header(name);
    out.reserve(points.len() + 2);
    out.push(COURSE_DATA_START.to_string());
    out.extend(points.iter().map(format_breakpoint));
    out.push(COURSE_DATA_END.to_string());
    Ok(out)
}

/// Hoved-inngangen: navn (kun til FILE NAME), linjer og diskretiseringssteg.
pub fn construct<S: AsRef<str>>(name: &str, lines: &[S], step_min: f64) -> WozResult<Vec<String>> {
    construct_with(name, lines, &ConvertConfig::with_step(step_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_is_half_away_from_zero() {
        assert_eq!(fmt2(91.49999999999997), "91.50");
        assert_eq!(fmt2(88.38888888888889), "88.39");
        assert_eq!(fmt2(0.125), "0.13");
        assert_eq!(fmt2(-0.001), "0.00");
    }

    #[test]
    fn assemble_inserts_duplicate_boundaries() {
        let segs = [Segment::new(1.0, 55.0), Segment::new(2.0, 100.0)];
        let pts = assemble(&segs).unwrap();
        let lines: Vec<String> = pts.iter().map(format_breakpoint).collect();
        assert_eq!(
            lines,
            vec!["0.00\t55.00", "1.00\t55.00", "1.00\t100.00", "3.00\t100.00"]
        );
    }

    #[test]
    fn empty_segment_list_fails() {
        assert!(matches!(assemble(&[]), Err(WozError::EmptyWorkout)));
    }

    #[test]
    fn header_uses_name() {
        assert_eq!(course_header("hi")[3], "FILE NAME = hi.mrc");
    }
}
