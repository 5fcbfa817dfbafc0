//! What a lookup returns when the schedule has no answer.
//!
//! Two deployments of the lookup page disagree here: one reports the miss,
//! the other invents an anesthesiologist from a fixed roster. Inventing a
//! name hands a patient an assignment nobody made, so [`MissPolicy::Strict`]
//! is the default and the random fallback must be chosen explicitly.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};

/// Names drawn by the random fallback when nothing is scheduled.
pub const CLINIC_FALLBACK_ROSTER: [&str; 10] = [
    "Dr. Martin",
    "Dr. Dubois",
    "Dr. Bernard",
    "Dr. Thomas",
    "Dr. Robert",
    "Dr. Richard",
    "Dr. Petit",
    "Dr. Durand",
    "Dr. Leroy",
    "Dr. Moreau",
];

/// Non-empty list of fallback names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FallbackRoster {
    names: Vec<String>,
}

impl FallbackRoster {
    /// Blank names are dropped; an empty result is rejected.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Err(LookupError::EmptyRoster);
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    /// Uniform draw.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> &str {
        &self.names[rng.gen_range(0..self.names.len())]
    }
}

impl Default for FallbackRoster {
    fn default() -> Self {
        Self {
            names: CLINIC_FALLBACK_ROSTER.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for FallbackRoster {
    type Error = LookupError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<FallbackRoster> for Vec<String> {
    fn from(roster: FallbackRoster) -> Self {
        roster.names
    }
}

/// Configuration-level choice between the two miss behaviors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Report misses as `NotFound`.
    #[default]
    Strict,
    /// Answer misses with a random roster name, flagged as random.
    RandomFallback,
}

impl PolicyKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::RandomFallback => "random-fallback",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Miss behavior injected into the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MissPolicy {
    #[default]
    Strict,
    RandomFallback(FallbackRoster),
}

impl MissPolicy {
    /// Builds the policy for `kind`, using `roster` for the fallback.
    pub fn from_kind(kind: PolicyKind, roster: FallbackRoster) -> Self {
        match kind {
            PolicyKind::Strict => Self::Strict,
            PolicyKind::RandomFallback => Self::RandomFallback(roster),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Strict => PolicyKind::Strict,
            Self::RandomFallback(_) => PolicyKind::RandomFallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_roster_rejects_empty() {
        assert_eq!(
            FallbackRoster::new(Vec::<String>::new()),
            Err(LookupError::EmptyRoster)
        );
        assert_eq!(FallbackRoster::new(["", "  "]), Err(LookupError::EmptyRoster));
    }

    #[test]
    fn test_roster_trims_names() {
        let roster = FallbackRoster::new([" Dr. A ", "", "Dr. B"]).unwrap();
        assert_eq!(roster.names(), ["Dr. A", "Dr. B"]);
    }

    #[test]
    fn test_default_roster_is_clinic_roster() {
        let roster = FallbackRoster::default();
        assert_eq!(roster.names().len(), 10);
        assert!(roster.contains("Dr. Moreau"));
    }

    #[test]
    fn test_draw_stays_in_roster() {
        let roster = FallbackRoster::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(roster.contains(roster.draw(&mut rng)));
        }
    }

    #[test]
    fn test_policy_from_kind() {
        assert_eq!(
            MissPolicy::from_kind(PolicyKind::Strict, FallbackRoster::default()),
            MissPolicy::Strict
        );
        let policy = MissPolicy::from_kind(PolicyKind::RandomFallback, FallbackRoster::default());
        assert_eq!(policy.kind(), PolicyKind::RandomFallback);
        assert_eq!(MissPolicy::default().kind(), PolicyKind::Strict);
    }
}
