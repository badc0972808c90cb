// SPDX-License-Identifier: MIT OR Apache-2.0
//! The animatable capability surface.

use crate::stage::{Stage, TargetRef};
use weft_tween::Playable;

/// Options for runtime tween creation
#[derive(Debug, Clone, Copy, Default)]
pub struct TweenOptions {
    /// Rebuild the tween even if the host has one cached for this component
    pub regenerate_if_exists: bool,
    /// Start playback immediately after creation
    pub and_play: bool,
}

impl TweenOptions {
    /// Options for create-and-play requests
    pub fn playing() -> Self {
        Self {
            regenerate_if_exists: false,
            and_play: true,
        }
    }
}

/// Uniform animation-inspection capability.
///
/// Every animation unit, leaf tween or linked timeline, exposes the same
/// surface to the host: playable builders, timing queries and display
/// metadata. Queries that depend on other components take the [`Stage`] and
/// re-resolve through it on every call; implementations hold no derived
/// state.
pub trait Animatable {
    /// Build the runtime playable for this unit, or `None` if it cannot play
    fn create_tween(&self, stage: &Stage, options: TweenOptions) -> Option<Playable>;

    /// Build a preview-only playable for editor scrubbing
    fn create_editor_preview(&self, stage: &Stage) -> Option<Playable>;

    /// Lead-in delay before this unit's content starts
    fn delay(&self) -> f32;

    /// Set the lead-in delay.
    ///
    /// Pass-through accessor: clamping to non-negative values happens at the
    /// configuration boundary (constructors and asset loading), not here.
    fn set_delay(&mut self, delay: f32);

    /// Duration of one iteration, excluding the delay
    fn duration(&self, stage: &Stage) -> f32;

    /// Loop count (0 and 1 both mean a single pass)
    fn loops(&self) -> u32;

    /// Whether this unit's configuration resolves to something playable
    fn is_valid(&self, stage: &Stage) -> bool;

    /// Whether this unit is valid and currently enabled
    fn is_active(&self, stage: &Stage) -> bool;

    /// Whether this unit animates from its end value toward the current one
    fn is_from(&self) -> bool;

    /// Human-readable label for inspection UIs
    fn label(&self, stage: &Stage) -> String;

    /// Every leaf target this unit animates
    fn targets(&self, stage: &Stage) -> Vec<TargetRef>;
}
