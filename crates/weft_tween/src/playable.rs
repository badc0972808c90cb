// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playable handles and their span arithmetic.

/// A leaf tween handle.
///
/// Carries the timing shape of a single tween: lead-in delay, per-iteration
/// duration and loop count. `loops == 0` counts as a single pass for span
/// purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenHandle {
    /// Lead-in delay before the tween starts
    pub delay: f32,
    /// Duration of one iteration
    pub duration: f32,
    /// Loop count (0 and 1 both mean a single pass)
    pub loops: u32,
    /// Whether the host runtime should start this handle immediately
    pub auto_play: bool,
}

impl TweenHandle {
    /// Create a handle with the given iteration duration
    pub fn new(duration: f32) -> Self {
        Self {
            delay: 0.0,
            duration: duration.max(0.0),
            loops: 0,
            auto_play: false,
        }
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

    /// Total span including delay: `delay + duration * max(1, loops)`
    pub fn span(&self) -> f32 {
        self.delay + self.duration * self.loops.max(1) as f32
    }
}

/// A playable placed at an absolute offset within a sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceEntry {
    /// Offset from the sequence's content start
    pub at: f32,
    /// The nested playable
    pub playable: Playable,
}

/// A group of playables, each at an absolute offset.
///
/// The `lead_in` is dead time prepended before the content: it shifts every
/// entry and grows the span, which keeps duration math consistent when a
/// delay is applied after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    lead_in: f32,
    entries: Vec<SequenceEntry>,
    /// Whether the host runtime should start this group immediately
    pub auto_play: bool,
}

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a playable at an absolute offset within the content
    pub fn insert(&mut self, at: f32, playable: Playable) {
        self.entries.push(SequenceEntry {
            at: at.max(0.0),
            playable,
        });
    }

    /// Prepend dead time before the content
    pub fn prepend_interval(&mut self, delay: f32) {
        self.lead_in += delay.max(0.0);
    }

    /// Dead time before the content starts
    pub fn lead_in(&self) -> f32 {
        self.lead_in
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[SequenceEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sequence has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Span of the content, excluding the lead-in
    pub fn content_span(&self) -> f32 {
        self.entries
            .iter()
            .map(|entry| entry.at + entry.playable.span())
            .fold(0.0, f32::max)
    }

    /// Total span: `lead_in + content_span`
    pub fn span(&self) -> f32 {
        self.lead_in + self.content_span()
    }
}

/// A runtime playable: a leaf tween or a sequence group
#[derive(Debug, Clone, PartialEq)]
pub enum Playable {
    /// Leaf tween handle
    Tween(TweenHandle),
    /// Sequence group
    Sequence(Sequence),
}

impl Playable {
    /// Total span of this playable, including any delay or lead-in
    pub fn span(&self) -> f32 {
        match self {
            Self::Tween(tween) => tween.span(),
            Self::Sequence(sequence) => sequence.span(),
        }
    }

    /// Apply a delay as a prepended interval.
    ///
    /// Sequences gain lead-in dead time; leaf tweens fold the delay into
    /// their own delay field. Either way the span grows by exactly `delay`.
    pub fn prepend_interval(&mut self, delay: f32) {
        match self {
            Self::Tween(tween) => tween.delay += delay.max(0.0),
            Self::Sequence(sequence) => sequence.prepend_interval(delay),
        }
    }

    /// Whether the host runtime should start this playable immediately
    pub fn auto_play(&self) -> bool {
        match self {
            Self::Tween(tween) => tween.auto_play,
            Self::Sequence(sequence) => sequence.auto_play,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_span_single_pass() {
        let tween = TweenHandle::new(2.0);
        assert_eq!(tween.span(), 2.0);
    }

    #[test]
    fn test_tween_span_zero_loops_counts_once() {
        let looped = TweenHandle::new(2.0).with_loops(0);
        let once = TweenHandle::new(2.0).with_loops(1);
        assert_eq!(looped.span(), once.span());
    }

    #[test]
    fn test_tween_span_with_loops_and_delay() {
        let tween = TweenHandle::new(2.0).with_loops(3).with_delay(0.5);
        assert_eq!(tween.span(), 6.5);
    }

    #[test]
    fn test_empty_sequence_span_is_lead_in() {
        let mut sequence = Sequence::new();
        assert_eq!(sequence.span(), 0.0);
        sequence.prepend_interval(1.5);
        assert_eq!(sequence.span(), 1.5);
    }

    #[test]
    fn test_parallel_entries_span_is_max() {
        let mut sequence = Sequence::new();
        sequence.insert(0.0, Playable::Tween(TweenHandle::new(1.0)));
        sequence.insert(0.0, Playable::Tween(TweenHandle::new(3.0)));
        assert_eq!(sequence.span(), 3.0);
    }

    #[test]
    fn test_offset_entry_extends_span() {
        let mut sequence = Sequence::new();
        sequence.insert(2.0, Playable::Tween(TweenHandle::new(1.0)));
        assert_eq!(sequence.span(), 3.0);
    }

    #[test]
    fn test_prepend_interval_adds_exactly_delay() {
        let mut playable = Playable::Tween(TweenHandle::new(2.0));
        let before = playable.span();
        playable.prepend_interval(0.75);
        assert_eq!(playable.span(), before + 0.75);

        let mut group = Sequence::new();
        group.insert(0.0, Playable::Tween(TweenHandle::new(2.0)));
        let mut playable = Playable::Sequence(group);
        let before = playable.span();
        playable.prepend_interval(0.75);
        assert_eq!(playable.span(), before + 0.75);
    }

    #[test]
    fn test_prepend_interval_is_additive() {
        let mut sequence = Sequence::new();
        sequence.prepend_interval(1.0);
        sequence.prepend_interval(0.5);
        assert_eq!(sequence.lead_in(), 1.5);
    }

    #[test]
    fn test_negative_delay_is_ignored() {
        let mut playable = Playable::Tween(TweenHandle::new(1.0));
        playable.prepend_interval(-2.0);
        assert_eq!(playable.span(), 1.0);
    }

    #[test]
    fn test_nested_sequence_span() {
        let mut inner = Sequence::new();
        inner.insert(0.0, Playable::Tween(TweenHandle::new(4.0)));
        inner.prepend_interval(1.0);

        let mut outer = Sequence::new();
        outer.insert(0.0, Playable::Sequence(inner));
        outer.insert(0.0, Playable::Tween(TweenHandle::new(2.0)));
        assert_eq!(outer.span(), 5.0);
    }
}
