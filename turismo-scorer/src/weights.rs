//! Signal weights and keyword boosts applied by the preference scorer.
#![forbid(unsafe_code)]

use crate::WeightsError;

/// Additive weight contributed by each matching preference signal.
///
/// The interest weight applies once per shared tag; every other weight
/// applies once when the profile value is accepted by the template.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MatchWeights {
    /// Added for each profile interest present in the template tags.
    pub interest: f64,
    /// Added when the travel style is accepted.
    pub travel_style: f64,
    /// Added when the activity level is accepted.
    pub activity_level: f64,
    /// Added when the companions are accepted.
    pub companions: f64,
    /// Added when the budget level is accepted.
    pub budget: f64,
    /// Added when the preferred time of day is accepted.
    pub time_of_day: f64,
}

impl MatchWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeight`] naming the first weight that
    /// is negative or not finite.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let signals = [
            ("interest", self.interest),
            ("travel_style", self.travel_style),
            ("activity_level", self.activity_level),
            ("companions", self.companions),
            ("budget", self.budget),
            ("time_of_day", self.time_of_day),
        ];
        match signals.into_iter().find(|&(_, value)| !is_usable(value)) {
            Some((signal, value)) => Err(WeightsError::InvalidWeight { signal, value }),
            None => Ok(self),
        }
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            interest: 1.5,
            travel_style: 1.2,
            activity_level: 1.0,
            companions: 0.8,
            budget: 0.6,
            time_of_day: 0.4,
        }
    }
}

/// A note keyword and the score it adds.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordBoost {
    token: String,
    boost: f64,
}

impl KeywordBoost {
    /// Pair a lower-case `token` with its `boost`.
    #[must_use]
    pub fn new(token: impl Into<String>, boost: f64) -> Self {
        Self {
            token: token.into(),
            boost,
        }
    }

    /// The substring searched for in the notes.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The score added on a match.
    #[must_use]
    pub const fn boost(&self) -> f64 {
        self.boost
    }
}

/// Ordered keyword table scanned against free-text notes.
///
/// Matching is a case-insensitive substring search. The first keyword in
/// declaration order that occurs in the notes wins and the scan stops, so a
/// note never collects more than one boost.
///
/// # Examples
/// ```
/// use turismo_scorer::KeywordBoosts;
///
/// let boosts = KeywordBoosts::default();
/// assert_eq!(boosts.boost_for("Me encanta la fotografia y la aventura"), Some(0.3));
/// assert_eq!(boosts.boost_for("sin comentarios"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordBoosts {
    entries: Vec<KeywordBoost>,
}

impl KeywordBoosts {
    /// Build a table from entries in priority order.
    ///
    /// Tokens are lower-cased so they compare against lower-cased notes.
    ///
    /// # Errors
    /// Returns [`WeightsError::EmptyToken`] for blank tokens and
    /// [`WeightsError::InvalidBoost`] for negative or non-finite boosts.
    pub fn new(entries: impl IntoIterator<Item = KeywordBoost>) -> Result<Self, WeightsError> {
        let mut normalised = Vec::new();
        for entry in entries {
            if entry.token.trim().is_empty() {
                return Err(WeightsError::EmptyToken);
            }
            if !is_usable(entry.boost) {
                return Err(WeightsError::InvalidBoost {
                    token: entry.token,
                    value: entry.boost,
                });
            }
            normalised.push(KeywordBoost::new(entry.token.to_lowercase(), entry.boost));
        }
        Ok(Self {
            entries: normalised,
        })
    }

    /// Return the boost of the first keyword found in `notes`.
    #[must_use]
    pub fn boost_for(&self, notes: &str) -> Option<f64> {
        let lowered = notes.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(entry.token.as_str()))
            .map(KeywordBoost::boost)
    }

    /// Iterate over the keywords in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &KeywordBoost> {
        self.entries.iter()
    }
}

impl Default for KeywordBoosts {
    fn default() -> Self {
        let entries = [
            ("veg", 0.3),
            ("fot", 0.3),
            ("niñ", 0.4),
            ("adult", 0.2),
            ("avent", 0.4),
        ]
        .into_iter()
        .map(|(token, boost)| KeywordBoost::new(token, boost))
        .collect();
        Self { entries }
    }
}

const fn is_usable(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
