// SPDX-License-Identifier: MIT OR Apache-2.0
//! Structural tween playables for Weft.
//!
//! This crate models runtime playable handles to the depth the inspection
//! surface needs:
//! - Leaf tween handles with delay/duration/loop spans
//! - Sequence groups with absolute-offset insertion
//! - Delay composition as a prepended interval
//!
//! Interpolation, easing and playback scheduling are owned by the host
//! runtime and are deliberately absent here.

pub mod playable;

pub use playable::{Playable, Sequence, SequenceEntry, TweenHandle};
