// SPDX-License-Identifier: MIT OR Apache-2.0
//! Components attachable to a timeline.

use crate::animatable::{Animatable, TweenOptions};
use crate::link::TimelineLink;
use crate::stage::{Stage, TargetRef};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use weft_tween::{Playable, TweenHandle};

/// Unique identifier for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub Uuid);

impl ComponentId {
    /// Create a new random component ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

/// All component types that can be attached to a timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    /// Leaf tween descriptor
    Tween(TweenComponent),
    /// Link to another timeline
    Link(TimelineLink),
    /// Annotation marker (not an animation)
    Marker(MarkerComponent),
}

impl Component {
    /// Get this component's ID
    pub fn id(&self) -> ComponentId {
        match self {
            Self::Tween(tween) => tween.id,
            Self::Link(link) => link.id,
            Self::Marker(marker) => marker.id,
        }
    }

    /// Display name for this component type
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tween(_) => "Tween",
            Self::Link(_) => "Linked Timeline",
            Self::Marker(_) => "Marker",
        }
    }

    /// View this component through the animatable capability, if it has one
    pub fn as_animatable(&self) -> Option<&dyn Animatable> {
        match self {
            Self::Tween(tween) => Some(tween),
            Self::Link(link) => Some(link),
            Self::Marker(_) => None,
        }
    }
}

/// Leaf tween descriptor.
///
/// Describes a single tween over one target. Interpolation itself is owned
/// by the host runtime; this component only carries the timing shape and
/// target binding the inspection surface needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweenComponent {
    /// Unique component ID
    pub id: ComponentId,
    /// Display name (may be empty)
    pub name: String,
    /// The object this tween animates
    pub target: Option<TargetRef>,
    /// Duration of one iteration
    pub duration: f32,
    /// Lead-in delay
    pub delay: f32,
    /// Loop count (0 and 1 both mean a single pass)
    pub loops: u32,
    /// Whether the tween runs from its end value toward the current one
    pub from: bool,
    /// Whether the component is enabled
    pub enabled: bool,
}

impl TweenComponent {
    /// Create an enabled tween with the given iteration duration
    pub fn new(duration: f32) -> Self {
        Self {
            id: ComponentId::new(),
            name: String::new(),
            target: None,
            duration: duration.max(0.0),
            delay: 0.0,
            loops: 0,
            from: false,
            enabled: true,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Assign the target
    pub fn with_target(mut self, target: TargetRef) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the lead-in delay
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Set the loop count
    pub fn with_loops(mut self, loops: u32) -> Self {
        self.loops = loops;
        self
    }

    fn handle(&self) -> TweenHandle {
        TweenHandle::new(self.duration)
            .with_delay(self.delay)
            .with_loops(self.loops)
    }
}

impl Animatable for TweenComponent {
    fn create_tween(&self, _stage: &Stage, options: TweenOptions) -> Option<Playable> {
        if self.target.is_none() || !self.enabled {
            return None;
        }
        let mut handle = self.handle();
        handle.auto_play = options.and_play;
        Some(Playable::Tween(handle))
    }

    fn create_editor_preview(&self, _stage: &Stage) -> Option<Playable> {
        self.target?;
        Some(Playable::Tween(self.handle()))
    }

    fn delay(&self) -> f32 {
        self.delay
    }

    fn set_delay(&mut self, delay: f32) {
        self.delay = delay;
    }

    fn duration(&self, _stage: &Stage) -> f32 {
        self.duration
    }

    fn loops(&self) -> u32 {
        self.loops
    }

    fn is_valid(&self, _stage: &Stage) -> bool {
        self.target.is_some()
    }

    fn is_active(&self, stage: &Stage) -> bool {
        self.is_valid(stage) && self.enabled
    }

    fn is_from(&self) -> bool {
        self.from
    }

    fn label(&self, _stage: &Stage) -> String {
        if self.name.is_empty() {
            "Tween".to_string()
        } else {
            self.name.clone()
        }
    }

    fn targets(&self, _stage: &Stage) -> Vec<TargetRef> {
        self.target.into_iter().collect()
    }
}

/// Annotation marker on a timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerComponent {
    /// Unique component ID
    pub id: ComponentId,
    /// Time position
    pub time: f32,
    /// Marker name
    pub name: String,
    /// Marker color
    pub color: [u8; 3],
}

impl MarkerComponent {
    /// Create a marker at the given time
    pub fn new(time: f32, name: impl Into<String>) -> Self {
        Self {
            id: ComponentId::new(),
            time: time.max(0.0),
            name: name.into(),
            color: [255, 200, 100],
        }
    }
}

/// Ephemeral aggregation wrapper over a timeline's recognized children.
///
/// Exactly one tag applies per component: the leaf shape takes priority,
/// anything else animatable falls into the capability tag. Produced
/// transiently while iterating; never persisted.
#[derive(Clone, Copy)]
pub enum Child<'a> {
    /// Leaf tween descriptor, read through its raw fields
    Tween(&'a TweenComponent),
    /// Any other animatable component, read through the capability
    Animatable(&'a dyn Animatable),
}

impl<'a> Child<'a> {
    /// Classify a component into the union, or `None` if it is not an
    /// animation
    pub fn classify(component: &'a Component) -> Option<Self> {
        match component {
            Component::Tween(tween) => Some(Self::Tween(tween)),
            other => other.as_animatable().map(Self::Animatable),
        }
    }

    fn duration(&self, stage: &Stage) -> f32 {
        match self {
            Self::Tween(tween) => tween.duration,
            Self::Animatable(child) => child.duration(stage),
        }
    }

    fn loops(&self) -> u32 {
        match self {
            Self::Tween(tween) => tween.loops,
            Self::Animatable(child) => child.loops(),
        }
    }

    /// Duration of a full pass: `duration * max(1, loops)`, delay excluded
    pub fn full_duration(&self, stage: &Stage) -> f32 {
        self.duration(stage) * self.loops().max(1) as f32
    }

    /// Build this child's runtime tween
    pub fn create_tween(&self, stage: &Stage, options: TweenOptions) -> Option<Playable> {
        match self {
            Self::Tween(tween) => tween.create_tween(stage, options),
            Self::Animatable(child) => child.create_tween(stage, options),
        }
    }

    /// Build this child's editor preview
    pub fn editor_preview(&self, stage: &Stage) -> Option<Playable> {
        match self {
            Self::Tween(tween) => tween.create_editor_preview(stage),
            Self::Animatable(child) => child.create_editor_preview(stage),
        }
    }

    /// This child's leaf targets
    pub fn targets(&self, stage: &Stage) -> Vec<TargetRef> {
        match self {
            Self::Tween(tween) => tween.target.into_iter().collect(),
            Self::Animatable(child) => child.targets(stage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_leaf_takes_priority() {
        let component = Component::Tween(TweenComponent::new(1.0));
        assert!(matches!(Child::classify(&component), Some(Child::Tween(_))));
    }

    #[test]
    fn test_classify_link_as_animatable() {
        let component = Component::Link(TimelineLink::unlinked());
        assert!(matches!(
            Child::classify(&component),
            Some(Child::Animatable(_))
        ));
    }

    #[test]
    fn test_classify_marker_is_ignored() {
        let component = Component::Marker(MarkerComponent::new(1.0, "cue"));
        assert!(Child::classify(&component).is_none());
    }

    #[test]
    fn test_tween_without_target_is_invalid() {
        let stage = Stage::new();
        let tween = TweenComponent::new(1.0);
        assert!(!tween.is_valid(&stage));
        assert!(tween.create_tween(&stage, TweenOptions::default()).is_none());
        assert!(tween.create_editor_preview(&stage).is_none());
        assert!(tween.targets(&stage).is_empty());
    }

    #[test]
    fn test_disabled_tween_produces_no_runtime_tween() {
        let stage = Stage::new();
        let mut tween = TweenComponent::new(1.0).with_target(TargetRef::new());
        tween.enabled = false;
        assert!(tween.create_tween(&stage, TweenOptions::default()).is_none());
        // Previews ignore the enabled flag.
        assert!(tween.create_editor_preview(&stage).is_some());
        assert!(!tween.is_active(&stage));
        assert!(tween.is_valid(&stage));
    }

    #[test]
    fn test_tween_targets_single_entry() {
        let stage = Stage::new();
        let target = TargetRef::new();
        let tween = TweenComponent::new(1.0).with_target(target);
        assert_eq!(tween.targets(&stage), vec![target]);
    }

    #[test]
    fn test_child_full_duration_counts_loops_once_at_zero() {
        let stage = Stage::new();
        let tween = TweenComponent::new(2.0).with_loops(3);
        let component = Component::Tween(tween);
        let child = Child::classify(&component).unwrap();
        assert_eq!(child.full_duration(&stage), 6.0);

        let single = Component::Tween(TweenComponent::new(2.0));
        let child = Child::classify(&single).unwrap();
        assert_eq!(child.full_duration(&stage), 2.0);
    }

    #[test]
    fn test_tween_label_falls_back_to_type_name() {
        let stage = Stage::new();
        assert_eq!(TweenComponent::new(1.0).label(&stage), "Tween");
        assert_eq!(
            TweenComponent::new(1.0).with_name("fade").label(&stage),
            "fade"
        );
    }

    #[test]
    fn test_created_tween_carries_descriptor_timing() {
        let stage = Stage::new();
        let tween = TweenComponent::new(2.0)
            .with_target(TargetRef::new())
            .with_delay(0.5)
            .with_loops(2);
        let playable = tween
            .create_tween(&stage, TweenOptions::playing())
            .unwrap();
        assert!(playable.auto_play());
        assert_eq!(playable.span(), 4.5);
    }
}
