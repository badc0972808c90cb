// SPDX-License-Identifier: MIT OR Apache-2.0
//! Stage: the component world timelines live in.

use crate::animatable::TweenOptions;
use crate::component::{Child, Component, ComponentId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use weft_tween::{Playable, Sequence};

/// Unique identifier for a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimelineId(pub Uuid);

impl TimelineId {
    /// Create a new random timeline ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimelineId {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque reference to an object a tween animates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetRef(pub Uuid);

impl TargetRef {
    /// Create a new random target reference
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TargetRef {
    fn default() -> Self {
        Self::new()
    }
}

/// A timeline: an attachment-ordered list of components.
///
/// Components keep the order they were attached in. Order has no semantic
/// priority; it only drives first-declared iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    /// Unique timeline ID
    pub id: TimelineId,
    /// Display name
    pub name: String,
    /// Whether the timeline is currently enabled
    pub enabled: bool,
    /// Attached components, in attachment order
    components: Vec<Component>,
}

impl Timeline {
    /// Create a new enabled timeline
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TimelineId::new(),
            name: name.into(),
            enabled: true,
            components: Vec::new(),
        }
    }

    /// Attach a component, returning its ID
    pub fn attach(&mut self, component: Component) -> ComponentId {
        let id = component.id();
        self.components.push(component);
        id
    }

    /// Detach a component by ID
    pub fn detach(&mut self, id: ComponentId) -> Option<Component> {
        let index = self.components.iter().position(|c| c.id() == id)?;
        Some(self.components.remove(index))
    }

    /// Get a component by ID
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// All attached components, in attachment order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Mutable access to attached components
    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    /// Recognized animation children, in attachment order.
    ///
    /// Components matching neither recognized shape are skipped.
    pub fn animations(&self) -> impl Iterator<Item = Child<'_>> {
        self.components.iter().filter_map(Child::classify)
    }

    /// Build this timeline's runtime playable.
    ///
    /// Every recognized child's tween is inserted at offset 0; each child's
    /// playable already carries its own delay. Children that cannot produce
    /// a tween are skipped.
    pub fn play(&self, stage: &Stage) -> Playable {
        let mut sequence = Sequence::new();
        sequence.auto_play = true;
        for child in self.animations() {
            if let Some(tween) = child.create_tween(stage, TweenOptions::playing()) {
                sequence.insert(0.0, tween);
            }
        }
        Playable::Sequence(sequence)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new("Untitled Timeline")
    }
}

/// The component world: every timeline, keyed by ID.
///
/// Link components hold a [`TimelineId`], never a reference; each query
/// re-resolves through the stage and tolerates an absent or disabled
/// referent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stage {
    timelines: IndexMap<TimelineId, Timeline>,
}

impl Stage {
    /// Create an empty stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a timeline, returning its ID
    pub fn add_timeline(&mut self, timeline: Timeline) -> TimelineId {
        let id = timeline.id;
        self.timelines.insert(id, timeline);
        id
    }

    /// Remove a timeline
    pub fn remove_timeline(&mut self, id: TimelineId) -> Option<Timeline> {
        self.timelines.swap_remove(&id)
    }

    /// Get a timeline by ID
    pub fn timeline(&self, id: TimelineId) -> Option<&Timeline> {
        self.timelines.get(&id)
    }

    /// Get a mutable timeline by ID
    pub fn timeline_mut(&mut self, id: TimelineId) -> Option<&mut Timeline> {
        self.timelines.get_mut(&id)
    }

    /// All timelines
    pub fn timelines(&self) -> impl Iterator<Item = &Timeline> {
        self.timelines.values()
    }

    /// Mutable access to all timelines
    pub fn timelines_mut(&mut self) -> impl Iterator<Item = &mut Timeline> {
        self.timelines.values_mut()
    }

    /// Number of timelines
    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }
}
