//! Test helpers for writing request and catalog fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use turismo_core::{AvailableActivity, PreferenceProfile, RecommendationRequest};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary directory exposing UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn adventurous_request() -> RecommendationRequest {
    RecommendationRequest {
        user_id: "visitante-1".to_owned(),
        survey: PreferenceProfile {
            travel_style: "aventurero".to_owned(),
            interests: ["aventura", "naturaleza"].into_iter().collect(),
            activity_level: "alta".to_owned(),
            companions: "amigos".to_owned(),
            budget_level: "premium".to_owned(),
            preferred_time_of_day: "manana".to_owned(),
            notes: None,
        },
        available_activities: vec![
            AvailableActivity::new("Miradores", "Cristo Rey", "Vista de la ciudad", "Baja"),
            AvailableActivity::new("Parapente", "Buenavista", "Vuelo en el llano", "Alta"),
        ],
    }
}

pub(super) fn write_request(path: &Utf8Path, request: &RecommendationRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
