//! Hand-authored profiles for well-known activities.
//!
//! A raw activity whose trimmed, lower-cased name equals a profile key is
//! scored with the profile's attribute lists instead of heuristics.
#![forbid(unsafe_code)]

use turismo_core::{ActivityTemplate, AvailableActivity};

use crate::table::StaticTemplate;

/// A curated profile keyed by normalised activity name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CuratedProfile {
    /// Lower-case activity name this profile applies to.
    pub key: &'static str,
    /// Attribute lists and text templates.
    pub template: StaticTemplate,
}

impl CuratedProfile {
    /// Instantiate the profile for `activity`.
    ///
    /// Text slots are filled from the activity, curated tags come first and
    /// caller tags not already present follow in their given order.
    #[must_use]
    pub fn instantiate(&self, activity: &AvailableActivity) -> ActivityTemplate {
        self.template.materialise(
            activity.name.clone(),
            fill_slots(self.template.summary, activity),
            fill_slots(self.template.location, activity),
            &activity.tags,
        )
    }
}

/// Normalise an activity name for profile lookup.
///
/// Trims surrounding whitespace and applies Unicode lower-casing. This is
/// not full case folding: `ß` stays `ß` rather than folding to `ss`. The
/// curated keys contain no characters where the two differ.
#[must_use]
pub fn normalise_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Find the profile for `name` in `profiles`.
#[must_use]
pub fn lookup<'a>(profiles: &'a [CuratedProfile], name: &str) -> Option<&'a CuratedProfile> {
    let key = normalise_name(name);
    profiles.iter().find(|profile| profile.key == key)
}

/// Replace `{route_name}`, `{route_description}` and `{activity_name}` in a
/// single left-to-right pass. Unknown slots are kept verbatim and
/// substituted text is never rescanned.
fn fill_slots(text: &str, activity: &AvailableActivity) -> String {
    let mut rendered = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        let (before, tail) = rest.split_at(open);
        rendered.push_str(before);
        let Some(close) = tail.find('}') else {
            rendered.push_str(tail);
            return rendered;
        };
        let (slot, after) = tail.split_at(close + 1);
        match slot_value(slot, activity) {
            Some(value) => rendered.push_str(value),
            None => rendered.push_str(slot),
        }
        rest = after;
    }
    rendered.push_str(rest);
    rendered
}

fn slot_value<'a>(slot: &str, activity: &'a AvailableActivity) -> Option<&'a str> {
    match slot {
        "{route_name}" => Some(&activity.route_name),
        "{route_description}" => Some(&activity.route_description),
        "{activity_name}" => Some(&activity.name),
        _ => None,
    }
}

/// Profiles for the activities offered around Villavicencio.
pub const CURATED_PROFILES: [CuratedProfile; 3] = [
    CuratedProfile {
        key: "miradores",
        template: StaticTemplate {
            name: "Miradores",
            summary: "Recorrido por los miradores de {route_name} para admirar los Llanos \
                      Orientales y capturar fotografías panorámicas.",
            location: "{route_name} - Miradores",
            tags: &["naturaleza", "panorama", "fotografia"],
            travel_styles: &["relajado", "equilibrado"],
            activity_levels: &["baja", "media"],
            companions: &["familia", "pareja", "amigos", "solo"],
            budgets: &["economico", "moderado"],
            times_of_day: &["manana", "tarde"],
        },
    },
    CuratedProfile {
        key: "parapente",
        template: StaticTemplate {
            name: "Parapente",
            summary: "Vuelo en parapente sobre {route_name} con instructores certificados \
                      y vistas amplias de Villavicencio.",
            location: "Zona de parapente en {route_name}",
            tags: &["aventura", "adrenalina", "naturaleza"],
            travel_styles: &["aventurero", "equilibrado"],
            activity_levels: &["media", "alta"],
            companions: &["amigos", "pareja"],
            budgets: &["moderado", "premium"],
            times_of_day: &["manana", "tarde"],
        },
    },
    CuratedProfile {
        key: "caminata ecológica",
        template: StaticTemplate {
            name: "Caminata ecológica",
            summary: "Sendero interpretativo por {route_name} para conocer la flora, la fauna \
                      y las historias locales.",
            location: "{route_name}",
            tags: &["naturaleza", "bienestar", "cultura"],
            travel_styles: &["equilibrado", "relajado"],
            activity_levels: &["media"],
            companions: &["familia", "amigos", "pareja", "solo"],
            budgets: &["economico", "moderado"],
            times_of_day: &["manana", "tarde"],
        },
    },
];
