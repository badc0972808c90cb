// SPDX-License-Identifier: MIT OR Apache-2.0
//! Linked timeline: one component standing in for a whole timeline.

use crate::animatable::{Animatable, TweenOptions};
use crate::component::ComponentId;
use crate::stage::{Stage, TargetRef, Timeline, TimelineId};
use serde::{Deserialize, Serialize};
use weft_tween::{Playable, Sequence};

/// A component that presents another timeline as a single animation unit.
///
/// The link holds a non-owning [`TimelineId`]; the referent may be absent or
/// disabled at any query. Inspection queries aggregate over the referenced
/// timeline's direct children only; nested links recurse through their own
/// capability surface, never by flattening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineLink {
    /// Unique component ID
    pub id: ComponentId,
    /// Optional identifier shown in inspection UIs (may be empty)
    pub name: String,
    /// The referenced timeline, if any
    pub timeline: Option<TimelineId>,
    /// Lead-in delay before the linked timeline's content starts
    pub delay: f32,
}

impl TimelineLink {
    /// Create a link to the given timeline
    pub fn new(timeline: TimelineId) -> Self {
        Self {
            id: ComponentId::new(),
            name: String::new(),
            timeline: Some(timeline),
            delay: 0.0,
        }
    }

    /// Create a link with no timeline reference
    pub fn unlinked() -> Self {
        Self {
            id: ComponentId::new(),
            name: String::new(),
            timeline: None,
            delay: 0.0,
        }
    }

    /// Set the identifier
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the lead-in delay
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    fn resolve<'a>(&self, stage: &'a Stage) -> Option<&'a Timeline> {
        self.timeline.and_then(|id| stage.timeline(id))
    }
}

impl Animatable for TimelineLink {
    /// Build the linked timeline's runtime playable.
    ///
    /// Requires the referent to exist and be enabled; the link's delay is
    /// applied as a prepended interval on the timeline's own playable, so the
    /// result stays a group construct and its span grows by exactly the
    /// delay. The options flags are accepted for capability uniformity; the
    /// timeline's own playback composition does not consult them.
    fn create_tween(&self, stage: &Stage, _options: TweenOptions) -> Option<Playable> {
        match self.resolve(stage) {
            Some(timeline) if timeline.enabled => {
                let mut playable = timeline.play(stage);
                playable.prepend_interval(self.delay);
                Some(playable)
            }
            _ => {
                tracing::debug!(link = %self.id.0, "tween requested for absent or disabled timeline");
                None
            }
        }
    }

    /// Build a preview with every direct child at offset 0.
    ///
    /// All children preview simultaneously, whatever their own delay
    /// configuration; children without a preview are skipped. Unlike
    /// [`Self::create_tween`], this always returns a sequence: an absent or
    /// disabled referent yields an empty, delay-only group.
    fn create_editor_preview(&self, stage: &Stage) -> Option<Playable> {
        let mut sequence = Sequence::new();
        if let Some(timeline) = self.resolve(stage) {
            for child in timeline.animations() {
                if let Some(preview) = child.editor_preview(stage) {
                    sequence.insert(0.0, preview);
                }
            }
        }
        let mut playable = Playable::Sequence(sequence);
        playable.prepend_interval(self.delay);
        Some(playable)
    }

    fn delay(&self) -> f32 {
        self.delay
    }

    fn set_delay(&mut self, delay: f32) {
        self.delay = delay;
    }

    /// Max full pass over direct children: `max(duration * max(1, loops))`.
    ///
    /// 1.0 when the reference does not resolve; 0.0 for a resolvable
    /// timeline with no recognized children. The two sentinels are distinct
    /// on purpose.
    fn duration(&self, stage: &Stage) -> f32 {
        match self.resolve(stage) {
            None => 1.0,
            Some(timeline) => timeline
                .animations()
                .map(|child| child.full_duration(stage))
                .fold(0.0, f32::max),
        }
    }

    /// A linked timeline never repeats at this level
    fn loops(&self) -> u32 {
        0
    }

    fn is_valid(&self, stage: &Stage) -> bool {
        self.resolve(stage).is_some()
    }

    fn is_active(&self, stage: &Stage) -> bool {
        self.resolve(stage).is_some_and(|timeline| timeline.enabled)
    }

    fn is_from(&self) -> bool {
        false
    }

    fn label(&self, stage: &Stage) -> String {
        match self.resolve(stage) {
            None => "Invalid timeline".to_string(),
            Some(timeline) => {
                if self.name.is_empty() {
                    format!("↪ {}", timeline.name)
                } else {
                    format!("↪ {}", self.name)
                }
            }
        }
    }

    fn targets(&self, stage: &Stage) -> Vec<TargetRef> {
        match self.resolve(stage) {
            None => Vec::new(),
            Some(timeline) => timeline
                .animations()
                .flat_map(|child| child.targets(stage))
                .collect(),
        }
    }
}
