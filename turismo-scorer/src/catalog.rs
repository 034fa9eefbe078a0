//! Template catalogs: the built-in Villavicencio set or a JSON file.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use log::debug;
use turismo_core::ActivityTemplate;

use crate::CatalogError;
use crate::table::StaticTemplate;

/// An ordered collection of ready-to-score templates.
///
/// # Examples
/// ```
/// use turismo_scorer::Catalog;
///
/// let catalog = Catalog::villavicencio();
/// assert_eq!(catalog.len(), 9);
/// assert_eq!(catalog.templates()[0].name, "Miradores de Cristo Rey");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    templates: Vec<ActivityTemplate>,
}

impl Catalog {
    /// Wrap an existing list of templates.
    #[must_use]
    pub const fn new(templates: Vec<ActivityTemplate>) -> Self {
        Self { templates }
    }

    /// The curated catalog of activities around Villavicencio.
    #[must_use]
    pub fn villavicencio() -> Self {
        Self::new(
            VILLAVICENCIO
                .iter()
                .map(StaticTemplate::to_template)
                .collect(),
        )
    }

    /// Load a catalog from a JSON array of templates.
    ///
    /// # Errors
    /// Returns [`CatalogError::Read`] when the file cannot be read,
    /// [`CatalogError::Parse`] when it is not a JSON array of templates and
    /// [`CatalogError::Empty`] when the array has no entries.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let contents = turismo_fs::read_utf8_file(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let templates: Vec<ActivityTemplate> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if templates.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_path_buf(),
            });
        }
        debug!("loaded {} templates from {path}", templates.len());
        Ok(Self::new(templates))
    }

    /// Templates in catalog order.
    #[must_use]
    pub fn templates(&self) -> &[ActivityTemplate] {
        &self.templates
    }

    /// Number of templates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.templates.len()
    }

    /// Report whether the catalog has no templates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl From<Vec<ActivityTemplate>> for Catalog {
    fn from(templates: Vec<ActivityTemplate>) -> Self {
        Self::new(templates)
    }
}

const VILLAVICENCIO: [StaticTemplate; 9] = [
    StaticTemplate {
        name: "Miradores de Cristo Rey",
        summary: "Recorrido por los miradores del cerro de Cristo Rey con vistas \
                  panorámicas de los Llanos Orientales.",
        location: "Cerro Cristo Rey",
        tags: &["naturaleza", "panorama", "fotografia"],
        travel_styles: &["relajado", "equilibrado"],
        activity_levels: &["baja", "media"],
        companions: &["familia", "pareja", "amigos", "solo"],
        budgets: &["economico", "moderado"],
        times_of_day: &["manana", "tarde"],
    },
    StaticTemplate {
        name: "Parapente en Buenavista",
        summary: "Vuelo en parapente sobre la vereda Buenavista con instructores \
                  certificados.",
        location: "Vereda Buenavista",
        tags: &["aventura", "adrenalina", "naturaleza"],
        travel_styles: &["aventurero", "equilibrado"],
        activity_levels: &["media", "alta"],
        companions: &["amigos", "pareja"],
        budgets: &["moderado", "premium"],
        times_of_day: &["manana", "tarde"],
    },
    StaticTemplate {
        name: "Caminata ecológica",
        summary: "Sendero interpretativo por el piedemonte para conocer la flora, la \
                  fauna y las historias locales.",
        location: "Piedemonte llanero",
        tags: &["naturaleza", "bienestar", "cultura"],
        travel_styles: &["equilibrado", "relajado"],
        activity_levels: &["media"],
        companions: &["familia", "amigos", "pareja", "solo"],
        budgets: &["economico", "moderado"],
        times_of_day: &["manana", "tarde"],
    },
    StaticTemplate {
        name: "Bioparque Los Ocarros",
        summary: "Visita guiada al bioparque con fauna nativa de la Orinoquía.",
        location: "Bioparque Los Ocarros",
        tags: &["naturaleza", "fauna", "educacion"],
        travel_styles: &["relajado", "equilibrado"],
        activity_levels: &["baja"],
        companions: &["familia", "pareja", "solo"],
        budgets: &["economico", "moderado"],
        times_of_day: &["manana", "tarde"],
    },
    StaticTemplate {
        name: "Parque Las Malocas",
        summary: "Parque temático de la cultura llanera con muestras de trabajo de \
                  llano y gastronomía típica.",
        location: "Parque Las Malocas",
        tags: &["cultura", "gastronomia", "tradicion"],
        travel_styles: &["relajado", "equilibrado"],
        activity_levels: &["baja", "media"],
        companions: &["familia", "pareja", "amigos"],
        budgets: &["economico", "moderado"],
        times_of_day: &["manana", "tarde"],
    },
    StaticTemplate {
        name: "Ruta gastronómica llanera",
        summary: "Degustación de mamona, cachama y pan de arroz en restaurantes \
                  tradicionales del centro.",
        location: "Centro de Villavicencio",
        tags: &["gastronomia", "cultura"],
        travel_styles: &["relajado", "equilibrado"],
        activity_levels: &["baja"],
        companions: &["familia", "pareja", "amigos", "solo"],
        budgets: &["moderado", "premium"],
        times_of_day: &["tarde", "noche"],
    },
    StaticTemplate {
        name: "Noche de joropo",
        summary: "Espectáculo de música llanera y baile de joropo con cena típica.",
        location: "Centro de Villavicencio",
        tags: &["cultura", "musica", "tradicion"],
        travel_styles: &["equilibrado", "relajado"],
        activity_levels: &["baja", "media"],
        companions: &["pareja", "amigos"],
        budgets: &["moderado", "premium"],
        times_of_day: &["noche"],
    },
    StaticTemplate {
        name: "Rafting río Guayuriba",
        summary: "Descenso en balsa por los rápidos del río Guayuriba con guías \
                  expertos.",
        location: "Río Guayuriba",
        tags: &["aventura", "adrenalina", "agua"],
        travel_styles: &["aventurero"],
        activity_levels: &["alta"],
        companions: &["amigos", "pareja", "solo"],
        budgets: &["moderado", "premium"],
        times_of_day: &["manana"],
    },
    StaticTemplate {
        name: "Avistamiento de aves",
        summary: "Salida al amanecer para observar aves endémicas en los humedales \
                  cercanos.",
        location: "Humedales de Villavicencio",
        tags: &["naturaleza", "fauna", "fotografia"],
        travel_styles: &["relajado", "equilibrado"],
        activity_levels: &["baja", "media"],
        companions: &["pareja", "amigos", "solo"],
        budgets: &["economico", "moderado"],
        times_of_day: &["manana"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    fn write_catalog(dir: &TempDir, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join("catalog.json"))
            .expect("utf-8 temp path");
        std::fs::write(&path, contents).expect("write catalog");
        path
    }

    #[rstest]
    fn builtin_catalog_has_unique_names_and_non_empty_lists() {
        let catalog = Catalog::villavicencio();
        let mut names: Vec<_> = catalog.templates().iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
        for template in catalog.templates() {
            assert!(!template.tags.is_empty(), "{} has no tags", template.name);
            assert!(!template.travel_styles.is_empty());
            assert!(!template.activity_levels.is_empty());
            assert!(!template.companions.is_empty());
            assert!(!template.budgets.is_empty());
            assert!(!template.times_of_day.is_empty());
        }
    }

    #[rstest]
    fn loads_templates_from_json(temp_dir: TempDir) {
        let path = write_catalog(
            &temp_dir,
            r#"[{"name":"Kayak","summary":"Remo","location":"Río Ocoa","tags":["agua"],
                "travelStyles":["aventurero"],"activityLevels":["media"],
                "companions":["amigos"],"budgets":["moderado"],"timesOfDay":["manana"]}]"#,
        );
        let catalog = Catalog::from_path(&path).expect("catalog loads");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.templates()[0].tags.as_slice(), ["agua"]);
    }

    #[rstest]
    fn empty_array_is_rejected(temp_dir: TempDir) {
        let path = write_catalog(&temp_dir, "[]");
        let err = Catalog::from_path(&path).expect_err("empty catalog");
        assert!(matches!(err, CatalogError::Empty { .. }));
    }

    #[rstest]
    fn malformed_json_is_a_parse_error(temp_dir: TempDir) {
        let path = write_catalog(&temp_dir, "{not json");
        let err = Catalog::from_path(&path).expect_err("invalid catalog");
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[rstest]
    fn missing_file_is_a_read_error(temp_dir: TempDir) {
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("absent.json"))
            .expect("utf-8 temp path");
        let err = Catalog::from_path(&path).expect_err("missing catalog");
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
