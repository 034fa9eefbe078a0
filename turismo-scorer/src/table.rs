//! Compile-time template tables shared by curated profiles and the
//! built-in catalog.
#![forbid(unsafe_code)]

use turismo_core::{ActivityTemplate, OrderedSet};

/// A template declared with static strings.
///
/// Curated profiles use `summary` and `location` as text templates with
/// `{route_name}`, `{route_description}` and `{activity_name}` slots; the
/// built-in catalog uses them verbatim.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StaticTemplate {
    /// Activity name.
    pub name: &'static str,
    /// Summary text.
    pub summary: &'static str,
    /// Location text.
    pub location: &'static str,
    /// Tags in declaration order.
    pub tags: &'static [&'static str],
    /// Accepted travel styles.
    pub travel_styles: &'static [&'static str],
    /// Accepted activity levels.
    pub activity_levels: &'static [&'static str],
    /// Accepted companions.
    pub companions: &'static [&'static str],
    /// Accepted budgets.
    pub budgets: &'static [&'static str],
    /// Accepted times of day.
    pub times_of_day: &'static [&'static str],
}

impl StaticTemplate {
    /// Materialise the table entry as written.
    #[must_use]
    pub fn to_template(&self) -> ActivityTemplate {
        self.materialise(
            self.name.to_owned(),
            self.summary.to_owned(),
            self.location.to_owned(),
            &[],
        )
    }

    /// Materialise with caller-provided text, appending `extra_tags` that
    /// are not already declared.
    pub(crate) fn materialise(
        &self,
        name: String,
        summary: String,
        location: String,
        extra_tags: &[String],
    ) -> ActivityTemplate {
        let mut tags = collect(self.tags);
        tags.extend(extra_tags.iter().cloned());
        ActivityTemplate {
            name,
            summary,
            location,
            tags,
            travel_styles: collect(self.travel_styles),
            activity_levels: collect(self.activity_levels),
            companions: collect(self.companions),
            budgets: collect(self.budgets),
            times_of_day: collect(self.times_of_day),
        }
    }
}

fn collect(values: &[&str]) -> OrderedSet {
    values.iter().copied().collect()
}
