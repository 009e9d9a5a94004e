// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![deny(missing_docs)]

//! Sweep-line detection of intersecting line segments.
//!
//! Given `n` line segments with integer coordinates, [`find_intersection`]
//! reports one intersecting pair (or `None`) in `O(n log n)`: the `2n`
//! endpoint events are sorted once and swept from left to right while the
//! currently active segments are kept in a comparator-keyed AVL tree, the
//! sweep status structure. Only tree neighbors are tested against each
//! other, with an exact integer/rational intersection predicate.

mod avl_tree;
mod compare_segments;
mod geometry;
mod intersection;
mod sweep_event;

// API exports.
pub use avl_tree::{AvlTree, Iter};
pub use compare_segments::compare_segments;
pub use geometry::{Coordinate, InputOrder, Point, Segment, SegmentRole};
pub use intersection::find_intersection;
pub use sweep_event::{create_events, SweepEvent};
