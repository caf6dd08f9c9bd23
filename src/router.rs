//! Navigation Router
//!
//! Maps a navigation path to a topic and dispatches to its page
//! composer. Unrecognized paths (including unknown deep links) fall back
//! to the overview page by policy - navigation never errors.

use crate::dataset::Dataset;
use crate::document::Document;
use crate::pages::{self, RegionInfo};
use serde::{Deserialize, Serialize};

/// A dashboard topic, one per page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Overview,
    Labor,
    Demographics,
    Economy,
}

impl Topic {
    /// Resolve a navigation path, falling back to [`Topic::Overview`]
    /// for anything unrecognized
    pub fn from_path(path: &str) -> Topic {
        match path {
            "/labor" => Topic::Labor,
            "/demographics" => Topic::Demographics,
            "/economy" => Topic::Economy,
            _ => Topic::Overview,
        }
    }

    /// The canonical path for this topic
    pub fn path(&self) -> &'static str {
        match self {
            Topic::Overview => "/",
            Topic::Labor => "/labor",
            Topic::Demographics => "/demographics",
            Topic::Economy => "/economy",
        }
    }

    /// Get all topics for iteration, in navigation order
    pub fn all() -> &'static [Topic] {
        &[
            Topic::Overview,
            Topic::Labor,
            Topic::Demographics,
            Topic::Economy,
        ]
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topic::Overview => write!(f, "overview"),
            Topic::Labor => write!(f, "labor"),
            Topic::Demographics => write!(f, "demographics"),
            Topic::Economy => write!(f, "economy"),
        }
    }
}

/// Render the page document for a topic
pub fn render(topic: Topic, dataset: &Dataset, region: &RegionInfo) -> Document {
    match topic {
        Topic::Overview => pages::overview::compose(dataset, region),
        Topic::Labor => pages::labor::compose(region),
        Topic::Demographics => pages::demographics::compose(region),
        Topic::Economy => pages::economy::compose(region),
    }
}

/// Resolve a path and render its page in one step
pub fn render_path(path: &str, dataset: &Dataset, region: &RegionInfo) -> Document {
    let topic = Topic::from_path(path);
    tracing::debug!(%path, %topic, "routing navigation request");
    render(topic, dataset, region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample;

    #[test]
    fn test_recognized_paths() {
        assert_eq!(Topic::from_path("/"), Topic::Overview);
        assert_eq!(Topic::from_path("/labor"), Topic::Labor);
        assert_eq!(Topic::from_path("/demographics"), Topic::Demographics);
        assert_eq!(Topic::from_path("/economy"), Topic::Economy);
    }

    #[test]
    fn test_unrecognized_paths_fall_back_to_overview() {
        for path in ["", "/unknown", "/labor/", "/economy/2024", "labor", "//"] {
            assert_eq!(Topic::from_path(path), Topic::Overview, "path {path:?}");
        }
    }

    #[test]
    fn test_unknown_path_renders_same_document_as_root() {
        let dataset = sample::dataset();
        let region = RegionInfo::default();

        let root = render_path("/", &dataset, &region);
        let unknown = render_path("/no-such-page", &dataset, &region);
        assert_eq!(root, unknown);
    }

    #[test]
    fn test_each_topic_renders_its_own_page() {
        let dataset = sample::dataset();
        let region = RegionInfo::default();

        assert_eq!(
            render(Topic::Labor, &dataset, &region).title,
            "Labor Market"
        );
        assert_eq!(
            render(Topic::Demographics, &dataset, &region).title,
            "Demographics"
        );
        assert_eq!(render(Topic::Economy, &dataset, &region).title, "Economy");
        assert_eq!(
            render(Topic::Overview, &dataset, &region).title,
            "Socio-Economic Overview"
        );
    }

    #[test]
    fn test_topic_paths_round_trip() {
        for &topic in Topic::all() {
            assert_eq!(Topic::from_path(topic.path()), topic);
        }
    }
}
