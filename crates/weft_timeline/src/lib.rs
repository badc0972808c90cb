// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline component model for Weft.
//!
//! This crate lets a single link component stand in for an entire timeline of
//! child animations, exposing it through a uniform inspection surface:
//! - `Animatable` capability (tween/preview builders, timing queries, labels,
//!   targets)
//! - `Stage` component world with non-owning timeline references
//! - `TimelineLink` aggregation over a timeline's direct children
//! - RON assets for stage configuration
//!
//! ## Architecture
//!
//! Timelines own an attachment-ordered list of components. Recognized
//! animation components are classified into a closed `Child` union (leaf
//! tween or nested animatable) at query time; everything else is skipped.
//! All inspection state is derived per query against the stage, so there is
//! never cached state to invalidate.

pub mod animatable;
pub mod asset;
pub mod component;
pub mod link;
pub mod stage;

pub use animatable::{Animatable, TweenOptions};
pub use asset::AssetError;
pub use component::{Child, Component, ComponentId, MarkerComponent, TweenComponent};
pub use link::TimelineLink;
pub use stage::{Stage, TargetRef, Timeline, TimelineId};
