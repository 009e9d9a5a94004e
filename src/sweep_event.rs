// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Endpoint events driving the sweep.
//!
//! Every input segment contributes exactly two events, one per endpoint.
//! The events are created once, sorted once with the standard stable sort
//! and then consumed in order; they are never mutated or re-sorted.

use std::cmp::Ordering;

use crate::geometry::{Coordinate, Point, Segment};

/// One endpoint of one segment, tagged through the point's role for sweep
/// ordering.
#[derive(Clone, Copy, Debug)]
pub struct SweepEvent<T> {
    /// The endpoint at which the event fires.
    pub p: Point<T>,
    /// The segment the endpoint belongs to.
    pub segment: Segment<T>,
}

impl<T: Coordinate> SweepEvent<T> {
    /// The two endpoint events of a segment.
    pub fn pair(segment: &Segment<T>) -> [SweepEvent<T>; 2] {
        [
            SweepEvent {
                p: segment.begin,
                segment: *segment,
            },
            SweepEvent {
                p: segment.end,
                segment: *segment,
            },
        ]
    }

    /// Does this event activate its segment?
    pub fn is_begin(&self) -> bool {
        self.p.is_begin()
    }
}

/// Build the `2n` endpoint events for `n` input segments.
pub fn create_events<T: Coordinate>(segments: &[Segment<T>]) -> Vec<SweepEvent<T>> {
    segments.iter().flat_map(SweepEvent::pair).collect()
}

impl<T: Coordinate> Ord for SweepEvent<T> {
    /// Events are ordered by `x`, then `y`. On a full coordinate tie the
    /// `Begin` event sorts first, so a segment appears in the scan line
    /// before any segment disappears at a shared point.
    fn cmp(&self, other: &Self) -> Ordering {
        self.p
            .x
            .cmp(&other.p.x)
            .then_with(|| self.p.y.cmp(&other.p.y))
            .then_with(|| self.p.segment_role.cmp(&other.p.segment_role))
    }
}

impl<T: Coordinate> PartialOrd for SweepEvent<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coordinate> PartialEq for SweepEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Coordinate> Eq for SweepEvent<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_of(first: (i64, i64), second: (i64, i64)) -> [SweepEvent<i64>; 2] {
        SweepEvent::pair(&Segment::new(first, second))
    }

    #[test]
    fn two_events_per_segment() {
        let segments = [Segment::new((0, 0), (4, 4)), Segment::new((1, 1), (2, 2))];
        let events = create_events(&segments);
        assert_eq!(events.len(), 4);
        assert_eq!(events.iter().filter(|e| e.is_begin()).count(), 2);
    }

    #[test]
    fn events_sort_by_x_then_y() {
        let [begin, end] = events_of((3, 1), (0, 2));
        assert!(begin < end);
        assert_eq!((begin.p.x, begin.p.y), (0, 2));

        let [low, _] = events_of((1, 0), (5, 0));
        let [high, _] = events_of((1, 3), (5, 3));
        assert!(low < high);
    }

    #[test]
    fn begin_sorts_before_end_on_coordinate_tie() {
        // One segment ends at (1, 1) exactly where the other starts.
        let [_, ending] = events_of((0, 0), (1, 1));
        let [starting, _] = events_of((1, 1), (2, 0));

        assert_eq!((ending.p.x, ending.p.y), (1, 1));
        assert_eq!((starting.p.x, starting.p.y), (1, 1));
        assert!(starting < ending);

        let mut events = vec![ending, starting];
        events.sort();
        assert!(events[0].is_begin());
        assert!(!events[1].is_begin());
    }

    #[test]
    fn sorted_events_are_monotonic() {
        let segments = [
            Segment::new((5, 5), (-1, 2)),
            Segment::new((3, -4), (3, 9)),
            Segment::new((0, 0), (0, 0)),
        ];
        let mut events = create_events(&segments);
        events.sort();
        assert!(events.windows(2).all(|w| w[0] <= w[1]));
    }
}
