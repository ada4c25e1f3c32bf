// core/src/tokens.rs
//
// Nøkkelord/tall-parser: hvert tall må høre til et kjent nøkkelord.
// Tall som ingen token krever gir ParseError i stedet for stille forskyvning.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::classify::LineKind;
use crate::error::{ParseErrorKind, TokenClass, WozError, WozResult};
use crate::numbers::number_runs;

static MINUTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*min").unwrap());
static SECONDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*sec").unwrap());
static CADENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*rpm").unwrap());
static POWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*%").unwrap());
static RAMP_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from\s+([0-9]+)\s*%?\s*to\s+([0-9]+)\s*%?").unwrap());
static REPEAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([0-9]+)\s*x\s*(.*)$").unwrap());
static FREE_RIDE: Lazy<Regex> = Lazy::new(|| Regex::new(r"free\s+ride").unwrap());

/// Tokens funnet i én (ikke-repeat) linje.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineTokens {
    pub minutes: Option<u64>,
    pub seconds: Option<u64>,
    pub cadence: Option<u64>,
    pub power: Option<u64>,
    pub ramp: Option<(u64, u64)>,
    pub free_ride: bool,
}

impl LineTokens {
    /// Minutter + sekunder/60, eller None når linjen mangler varighet helt.
    pub fn duration_min(&self) -> Option<f64> {
        if self.minutes.is_none() && self.seconds.is_none() {
            return None;
        }
        let mut d = self.minutes.unwrap_or(0) as f64;
        if let Some(s) = self.seconds {
            d += s as f64 / 60.0;
        }
        Some(d)
    }
}

/// `Nx <klausul>, <klausul>` → (N, resten av linjen). `None` når linjen ikke er en repeat.
pub fn repeat_prefix(line: &str) -> WozResult<Option<(u64, &str)>> {
    let Some(caps) = REPEAT.captures(line) else {
        return Ok(None);
    };
    let (Some(count), Some(body)) = (caps.get(1), caps.get(2)) else {
        return Ok(None);
    };
    let n = count.as_str().parse::<u64>().map_err(|_| {
        WozError::parse(line, ParseErrorKind::NumberTooLarge(count.as_str().to_string()))
    })?;
    Ok(Some((n, body.as_str())))
}

/// Holder styr på hvilke sifferrekker i linjen som er tatt av en token.
struct Claims<'a> {
    line: &'a str,
    // (startindeks, verdi, tatt?)
    runs: Vec<(usize, u64, bool)>,
}

impl<'a> Claims<'a> {
    fn new(line: &'a str) -> WozResult<Self> {
        let runs = number_runs(line)?
            .into_iter()
            .map(|(start, n)| (start, n, false))
            .collect();
        Ok(Self { line, runs })
    }

    fn claim(&mut self, caps: &Captures<'_>, group: usize) -> Option<u64> {
        let start = caps.get(group)?.start();
        let run = self.runs.iter_mut().find(|r| r.0 == start)?;
        run.2 = true;
        Some(run.1)
    }

    /// Høyst én forekomst per token-klasse.
    fn single(&self, re: &Regex, class: TokenClass) -> WozResult<Option<Captures<'a>>> {
        let mut it = re.captures_iter(self.line);
        let first = it.next();
        if it.next().is_some() {
            return Err(WozError::parse(self.line, ParseErrorKind::Duplicate(class)));
        }
        Ok(first)
    }

    fn take(&mut self, re: &Regex, class: TokenClass) -> WozResult<Option<u64>> {
        match self.single(re, class)? {
            Some(caps) => Ok(self.claim(&caps, 1)),
            None => Ok(None),
        }
    }

    fn finish(self) -> WozResult<()> {
        let unclaimed: Vec<u64> = self
            .runs
            .iter()
            .filter(|r| !r.2)
            .map(|r| r.1)
            .collect();
        if unclaimed.is_empty() {
            Ok(())
        } else {
            Err(WozError::parse(self.line, ParseErrorKind::Unclaimed(unclaimed)))
        }
    }
}

/// Leser ut alle tokens for en rampe- eller steady-linje.
/// Repeat-linjer håndteres av steady-ekspanderen via [`repeat_prefix`].
pub fn tokenize(line: &str, kind: LineKind) -> WozResult<LineTokens> {
    if line.trim().is_empty() {
        return Err(WozError::parse(line, ParseErrorKind::Empty));
    }

    let mut claims = Claims::new(line)?;
    let mut t = LineTokens {
        minutes: claims.take(&MINUTES, TokenClass::Minutes)?,
        seconds: claims.take(&SECONDS, TokenClass::Seconds)?,
        cadence: claims.take(&CADENCE, TokenClass::Cadence)?,
        ..LineTokens::default()
    };

    match kind {
        LineKind::Ramp => {
            if let Some(caps) = claims.single(&RAMP_RANGE, TokenClass::RampRange)? {
                let start = claims.claim(&caps, 1);
                let end = claims.claim(&caps, 2);
                t.ramp = start.zip(end);
            }
        }
        LineKind::Steady => {
            t.power = claims.take(&POWER, TokenClass::Power)?;
            t.free_ride = FREE_RIDE.is_match(line);
        }
    }

    // Manglende påkrevd token rapporteres før løse tall
    if t.duration_min().is_none() {
        return Err(WozError::missing(line, TokenClass::Duration));
    }
    match kind {
        LineKind::Ramp if t.ramp.is_none() => {
            return Err(WozError::missing(line, TokenClass::RampRange));
        }
        LineKind::Steady if !t.free_ride && t.power.is_none() => {
            return Err(WozError::missing(line, TokenClass::Power));
        }
        _ => {}
    }

    claims.finish()?;
    Ok(t)
}
