// core/src/error.rs
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Token-klassene en linje kan inneholde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Duration,
    Minutes,
    Seconds,
    Cadence,
    Power,
    RampRange,
    Repeat,
    FreeRide,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenClass::Duration => "duration (<n>min and/or <n>sec)",
            TokenClass::Minutes => "minutes (<n>min)",
            TokenClass::Seconds => "seconds (<n>sec)",
            TokenClass::Cadence => "cadence (<n>rpm)",
            TokenClass::Power => "power (<n>%)",
            TokenClass::RampRange => "ramp range (from <a> to <b>%)",
            TokenClass::Repeat => "repeat count (<n>x)",
            TokenClass::FreeRide => "free ride",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("missing {0}")]
    Missing(TokenClass),
    #[error("{0} given more than once")]
    Duplicate(TokenClass),
    #[error("numbers not attached to any keyword: {0:?}")]
    Unclaimed(Vec<u64>),
    #[error("repeat needs exactly two comma-separated clauses, found {found}")]
    RepeatClauses { found: usize },
    #[error("number {0} does not fit in 64 bits")]
    NumberTooLarge(String),
    #[error("empty line")]
    Empty,
}

#[derive(Debug, Error)]
pub enum WozError {
    #[error("parse error in {line:?}: {kind}")]
    Parse { line: String, kind: ParseErrorKind },

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("workout expands to no segments")]
    EmptyWorkout,

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WozError {
    pub fn parse(line: &str, kind: ParseErrorKind) -> Self {
        WozError::Parse { line: line.to_string(), kind }
    }

    pub fn missing(line: &str, class: TokenClass) -> Self {
        Self::parse(line, ParseErrorKind::Missing(class))
    }

    pub fn config(reason: impl Into<String>) -> Self {
        WozError::Config { reason: reason.into() }
    }

    /// Hjelper for tester og kallere som vil matche på feilklassen.
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            WozError::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

pub type WozResult<T> = Result<T, WozError>;
