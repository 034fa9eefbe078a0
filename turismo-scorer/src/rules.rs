//! Substring rule tables used to synthesise generic templates.
//!
//! Each rule pairs a set of needles with the attribute values it implies.
//! Rules read one of two lower-cased haystacks built from the raw activity:
//! the description (route description followed by the activity name) or
//! the route difficulty. The tables are ordered; order matters only where a
//! caller asks for the first match.
#![forbid(unsafe_code)]

use turismo_core::{AvailableActivity, OrderedSet};

/// Which part of the activity a rule inspects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Haystack {
    /// Route description and activity name.
    Description,
    /// Route difficulty rating.
    Difficulty,
}

/// Lower-cased texts the rules are matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haystacks {
    description: String,
    difficulty: String,
}

impl Haystacks {
    /// Prepare the haystacks for `activity`.
    #[must_use]
    pub fn from_activity(activity: &AvailableActivity) -> Self {
        Self {
            description: format!("{} {}", activity.route_description, activity.name)
                .to_lowercase(),
            difficulty: activity.route_difficulty.to_lowercase(),
        }
    }

    fn get(&self, haystack: Haystack) -> &str {
        match haystack {
            Haystack::Description => &self.description,
            Haystack::Difficulty => &self.difficulty,
        }
    }
}

/// Adds `values` when any needle occurs in the selected haystack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubstringRule {
    haystack: Haystack,
    needles: &'static [&'static str],
    values: &'static [&'static str],
}

impl SubstringRule {
    /// Declare a rule.
    #[must_use]
    pub const fn new(
        haystack: Haystack,
        needles: &'static [&'static str],
        values: &'static [&'static str],
    ) -> Self {
        Self {
            haystack,
            needles,
            values,
        }
    }

    /// Report whether any needle occurs in the rule's haystack.
    #[must_use]
    pub fn matches(&self, haystacks: &Haystacks) -> bool {
        let text = haystacks.get(self.haystack);
        self.needles.iter().any(|needle| text.contains(needle))
    }

    /// Values implied by the rule.
    #[must_use]
    pub const fn values(&self) -> &'static [&'static str] {
        self.values
    }
}

/// Apply every matching rule, appending its values to `target`.
pub fn apply_all(rules: &[SubstringRule], haystacks: &Haystacks, target: &mut OrderedSet) {
    for rule in rules.iter().filter(|rule| rule.matches(haystacks)) {
        target.extend(rule.values().iter().copied());
    }
}

/// Values of the first matching rule, if any.
#[must_use]
pub fn first_match(
    rules: &[SubstringRule],
    haystacks: &Haystacks,
) -> Option<&'static [&'static str]> {
    rules
        .iter()
        .find(|rule| rule.matches(haystacks))
        .map(SubstringRule::values)
}

/// Tag inference. Every matching rule contributes.
pub const TAG_RULES: [SubstringRule; 5] = [
    SubstringRule::new(
        Haystack::Description,
        &["parapente", "avent"],
        &["aventura", "naturaleza"],
    ),
    SubstringRule::new(
        Haystack::Description,
        &["mirador", "vista"],
        &["naturaleza", "panorama", "fotografia"],
    ),
    SubstringRule::new(
        Haystack::Description,
        &["caminata", "sender"],
        &["naturaleza", "bienestar"],
    ),
    SubstringRule::new(
        Haystack::Description,
        &["relaj", "bienestar"],
        &["bienestar", "relajacion"],
    ),
    SubstringRule::new(Haystack::Description, &["cultura", "hist"], &["cultura"]),
];

/// Tag used when neither the caller nor the rules supplied any.
pub const FALLBACK_TAG: &str = "naturaleza";

/// Activity level inference. Only the first matching rule applies.
pub const ACTIVITY_LEVEL_RULES: [SubstringRule; 2] = [
    SubstringRule::new(Haystack::Difficulty, &["alta"], &["alta"]),
    SubstringRule::new(Haystack::Difficulty, &["media", "moder"], &["media"]),
];

/// Activity levels used when no difficulty rule matches.
pub const DEFAULT_ACTIVITY_LEVELS: &[&str] = &["baja", "media"];

/// Travel styles every generic template accepts.
pub const BASE_TRAVEL_STYLES: &[&str] = &["equilibrado"];

/// Additional travel styles. Every matching rule contributes.
pub const TRAVEL_STYLE_RULES: [SubstringRule; 3] = [
    SubstringRule::new(Haystack::Description, &["relaj", "bienestar"], &["relajado"]),
    SubstringRule::new(
        Haystack::Description,
        &["avent", "parapente"],
        &["aventurero"],
    ),
    SubstringRule::new(Haystack::Difficulty, &["alta"], &["aventurero"]),
];

/// Companions accepted by every generic template.
pub const ALL_COMPANIONS: &[&str] = &["familia", "pareja", "amigos", "solo"];

/// Budgets every generic template accepts.
pub const BASE_BUDGETS: &[&str] = &["economico", "moderado"];

/// Additional budgets.
pub const BUDGET_RULES: [SubstringRule; 1] = [SubstringRule::new(
    Haystack::Description,
    &["premium", "lujo"],
    &["premium"],
)];

/// Times of day every generic template accepts.
pub const BASE_TIMES_OF_DAY: &[&str] = &["manana", "tarde"];

/// Additional times of day.
pub const TIME_OF_DAY_RULES: [SubstringRule; 1] = [SubstringRule::new(
    Haystack::Description,
    &["noche", "atardecer", "noct"],
    &["noche"],
)];
