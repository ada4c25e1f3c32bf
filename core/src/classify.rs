// core/src/classify.rs
use std::fmt;

/// Nøkkelordet som markerer en rampe.
pub const RAMP_KEYWORD: &str = "from";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Ramp,
    Steady,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Ramp => "ramp",
            LineKind::Steady => "steady",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rampe hvis linjen inneholder "from", ellers steady (inkl. repeat og free ride).
pub fn detect_type(line: &str) -> LineKind {
    if line.contains(RAMP_KEYWORD) {
        LineKind::Ramp
    } else {
        LineKind::Steady
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ramp_and_steady() {
        assert_eq!(detect_type("9min @ 85rpm, from 88 to 95% FTP"), LineKind::Ramp);
        assert_eq!(detect_type("2min @ 55% FTP"), LineKind::Steady);
        assert_eq!(detect_type("10min free ride"), LineKind::Steady);
        assert_eq!(detect_type("2x 1min @ 55% FTP, 2min @ 100% FTP"), LineKind::Steady);
    }

    #[test]
    fn display_matches_labels() {
        assert_eq!(LineKind::Ramp.to_string(), "ramp");
        assert_eq!(LineKind::Steady.to_string(), "steady");
    }
}
