use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How aggressively the cluster-wide dedupe domain is assumed to find
/// cross-host duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainMode {
    Aggressive,
    Typical,
    Conservative,
}

impl DomainMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aggressive => "aggressive",
            Self::Typical => "typical",
            Self::Conservative => "conservative",
        }
    }

    /// `(cap, k)` of the saturation curve for this mode.
    pub const fn curve(self) -> (f64, f64) {
        match self {
            Self::Aggressive => (1.0, 0.25),
            Self::Typical => (0.85, 0.20),
            Self::Conservative => (0.7, 0.15),
        }
    }
}

impl fmt::Display for DomainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DomainMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aggressive" => Ok(Self::Aggressive),
            "typical" => Ok(Self::Typical),
            "conservative" => Ok(Self::Conservative),
            _ => Err(format!("invalid domain mode: {s}")),
        }
    }
}

/// Effectiveness of a cluster-wide dedupe domain spanning `hosts` hosts.
///
/// `cap * (1 - exp(-k * max(0, hosts - 2)))`: zero up to two hosts, then
/// rising monotonically towards the mode's cap.
pub fn domain_scaling_factor(hosts: u32, mode: DomainMode) -> f64 {
    let (cap, k) = mode.curve();
    let x = f64::from(hosts.saturating_sub(2));
    cap * (1.0 - (-k * x).exp())
}

/// Clamp without panicking on inverted bounds or NaN input.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Division that yields 0 instead of inf/NaN when the divisor is zero.
pub fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}
