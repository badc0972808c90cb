// SPDX-License-Identifier: MIT OR Apache-2.0
//! RON assets for stage configuration.

use crate::component::Component;
use crate::stage::Stage;
use std::path::Path;

/// Error loading or saving a stage asset
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Filesystem error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed asset text
    #[error("malformed stage asset: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Serialization failure
    #[error("stage serialization failed: {0}")]
    Serialize(#[from] ron::Error),
}

impl Stage {
    /// Serialize to RON format
    pub fn to_ron(&self) -> Result<String, AssetError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Deserialize from RON format, sanitizing the configuration
    pub fn from_ron(s: &str) -> Result<Self, AssetError> {
        let mut stage: Self = ron::from_str(s)?;
        stage.sanitize();
        Ok(stage)
    }

    /// Save the stage to a file
    pub fn save(&self, path: &Path) -> Result<(), AssetError> {
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Load a stage from a file
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        Self::from_ron(&std::fs::read_to_string(path)?)
    }

    /// Clamp out-of-range configuration values.
    ///
    /// This is the configuration boundary: delays and durations are
    /// non-negative from here on, so accessors never re-check.
    fn sanitize(&mut self) {
        for timeline in self.timelines_mut() {
            let timeline_name = timeline.name.clone();
            for component in timeline.components_mut() {
                match component {
                    Component::Tween(tween) => {
                        if tween.delay < 0.0 {
                            tracing::warn!(
                                timeline = %timeline_name,
                                component = %tween.id.0,
                                "negative tween delay clamped to 0"
                            );
                            tween.delay = 0.0;
                        }
                        if tween.duration < 0.0 {
                            tracing::warn!(
                                timeline = %timeline_name,
                                component = %tween.id.0,
                                "negative tween duration clamped to 0"
                            );
                            tween.duration = 0.0;
                        }
                    }
                    Component::Link(link) => {
                        if link.delay < 0.0 {
                            tracing::warn!(
                                timeline = %timeline_name,
                                component = %link.id.0,
                                "negative link delay clamped to 0"
                            );
                            link.delay = 0.0;
                        }
                    }
                    Component::Marker(_) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::component::{Component, MarkerComponent, TweenComponent};
    use crate::link::TimelineLink;
    use crate::stage::{Stage, TargetRef, Timeline};

    fn sample_stage() -> Stage {
        let mut stage = Stage::new();
        let mut inner = Timeline::new("Inner");
        inner.attach(Component::Tween(
            TweenComponent::new(2.0)
                .with_name("fade")
                .with_target(TargetRef::new())
                .with_loops(2),
        ));
        let inner_id = stage.add_timeline(inner);

        let mut outer = Timeline::new("Outer");
        outer.attach(Component::Link(
            TimelineLink::new(inner_id).with_name("intro").with_delay(0.5),
        ));
        outer.attach(Component::Marker(MarkerComponent::new(1.0, "cue")));
        stage.add_timeline(outer);
        stage
    }

    #[test]
    fn test_stage_round_trip() {
        let stage = sample_stage();
        let ron = stage.to_ron().unwrap();
        let loaded = Stage::from_ron(&ron).unwrap();

        assert_eq!(loaded.timeline_count(), stage.timeline_count());
        for (original, restored) in stage.timelines().zip(loaded.timelines()) {
            assert_eq!(original.id, restored.id);
            assert_eq!(original.name, restored.name);
            assert_eq!(original.components().len(), restored.components().len());
        }
    }

    #[test]
    fn test_round_trip_preserves_link_configuration() {
        let stage = sample_stage();
        let loaded = Stage::from_ron(&stage.to_ron().unwrap()).unwrap();

        let outer = loaded
            .timelines()
            .find(|timeline| timeline.name == "Outer")
            .unwrap();
        let Some(Component::Link(link)) = outer.components().first() else {
            panic!("outer timeline should start with a link");
        };
        assert_eq!(link.name, "intro");
        assert_eq!(link.delay, 0.5);
        assert!(link.timeline.is_some());
    }

    #[test]
    fn test_load_clamps_negative_delay() {
        let mut stage = sample_stage();
        for timeline in stage.timelines_mut() {
            for component in timeline.components_mut() {
                if let Component::Link(link) = component {
                    link.delay = -0.5;
                }
            }
        }

        let loaded = Stage::from_ron(&stage.to_ron().unwrap()).unwrap();
        let outer = loaded
            .timelines()
            .find(|timeline| timeline.name == "Outer")
            .unwrap();
        let Some(Component::Link(link)) = outer.components().first() else {
            panic!("outer timeline should start with a link");
        };
        assert_eq!(link.delay, 0.0);
        // The rest of the asset is untouched.
        assert_eq!(link.name, "intro");
    }

    #[test]
    fn test_malformed_asset_is_an_error() {
        assert!(Stage::from_ron("not a stage").is_err());
    }
}
