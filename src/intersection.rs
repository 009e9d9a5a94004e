// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The sweep engine: iterate the sorted endpoint events while keeping the
//! active segments in the sweep status structure, and test only tree
//! neighbors for intersection.
//!
//! Two segments can only start to intersect while they are adjacent in
//! the active order, which is what reduces the detection to `O(n log n)`:
//! a `Begin` event checks the inserted segment against its two tree
//! neighbors, and an `End` event checks the two neighbors that become
//! adjacent once the segment leaves. The guarantee is only as good as the
//! active order itself; see [`compare_segments`] for the caveat about the
//! static comparator.

use crate::avl_tree::AvlTree;
use crate::compare_segments::compare_segments;
use crate::geometry::{Coordinate, Segment};
use crate::sweep_event::create_events;

/// Find one pair of intersecting segments, if any exists.
///
/// Builds the `2n` endpoint events, stable-sorts them and sweeps once
/// from left to right. The first detected intersection terminates the
/// sweep; exhausting all events without a hit returns `None`. The pass is
/// deterministic and performs no I/O.
pub fn find_intersection<T: Coordinate>(
    segments: &[Segment<T>],
) -> Option<(Segment<T>, Segment<T>)> {
    let mut events = create_events(segments);
    events.sort();
    debug_assert!(
        events.windows(2).all(|w| w[0] <= w[1]),
        "events are not sorted"
    );

    let mut scan_line = AvlTree::new(compare_segments);

    for event in &events {
        let segment = event.segment;

        if event.is_begin() {
            if !scan_line.insert(segment) {
                // An active segment shares the ordering key, so both span
                // the same bounding box: they are either identical or the
                // two crossing diagonals. Test the resident directly
                // instead of navigating from the rejected insertion.
                let resident = scan_line
                    .get(&segment)
                    .expect("rejected insert implies a resident equal key");
                if segment.intersects_with(resident) {
                    return Some((segment, *resident));
                }
                continue;
            }

            if let Some(&previous) = scan_line.prev(&segment) {
                if segment.intersects_with(&previous) {
                    return Some((segment, previous));
                }
            }
            if let Some(&following) = scan_line.next(&segment) {
                if segment.intersects_with(&following) {
                    return Some((segment, following));
                }
            }
        } else {
            // Removing the segment makes its neighbors adjacent; check
            // them against each other before the segment leaves.
            let previous = scan_line.prev(&segment).copied();
            let following = scan_line.next(&segment).copied();

            if let (Some(previous), Some(following)) = (previous, following) {
                if previous.intersects_with(&following) {
                    return Some((previous, following));
                }
            }

            let removed = scan_line.remove(&segment);
            debug_assert!(removed, "end event for a segment that is not active");
        }
    }

    debug_assert!(
        scan_line.is_empty(),
        "scan line still contains segments after all events"
    );
    None
}
