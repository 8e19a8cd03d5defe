//! Fixtures shared by the integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use choromap_common::model::status::StatusLevel;
use choromap_core::ports::{CancelToken, Launcher, NavigationBoundary, StatusChannel};

/// Builds a GeoJSON feature collection of unit squares laid out left to right,
/// one per `(key property, region id)` pair.
pub fn squares(key_property: &str, ids: &[&str]) -> String {
    let features: Vec<String> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let (x0, x1) = (i as f64, i as f64 + 1.0);
            format!(
                r#"{{ "type": "Feature", "properties": {{ "{key_property}": "{id}" }},
                     "geometry": {{ "type": "Polygon",
                                    "coordinates": [[[{x0},0],[{x1},0],[{x1},1],[{x0},1],[{x0},0]]] }} }}"#
            )
        })
        .collect();

    format!(
        r#"{{ "type": "FeatureCollection", "features": [{}] }}"#,
        features.join(",")
    )
}

/// Status channel that keeps every message.
#[derive(Clone, Default)]
pub struct RecordedStatus(pub Arc<Mutex<Vec<(String, StatusLevel)>>>);

impl RecordedStatus {
    pub fn messages(&self) -> Vec<(String, StatusLevel)> {
        self.0.lock().unwrap().clone()
    }
}

impl StatusChannel for RecordedStatus {
    fn show_message(&self, text: &str, level: StatusLevel) {
        self.0.lock().unwrap().push((text.to_string(), level));
    }
}

/// Launcher that only remembers which URLs it was asked to open.
#[derive(Clone, Default)]
pub struct RecordedLauncher(pub Arc<Mutex<Vec<String>>>);

impl RecordedLauncher {
    pub fn opened(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Launcher for RecordedLauncher {
    fn launch(&self, url: &str) -> anyhow::Result<()> {
        self.0.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Navigation boundary that never fires on its own; tests fire tokens by hand.
#[derive(Default)]
pub struct ManualNavigation {
    next: u64,
    pub scheduled: Vec<(CancelToken, String, Duration)>,
    pub cancelled: Vec<CancelToken>,
}

impl NavigationBoundary for ManualNavigation {
    fn navigate_after(&mut self, url: &str, delay: Duration) -> CancelToken {
        self.next += 1;
        let token = CancelToken(self.next);
        self.scheduled.push((token, url.to_string(), delay));
        token
    }

    fn cancel(&mut self, token: CancelToken) {
        self.cancelled.push(token);
    }
}
