// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The total order over active segments in the sweep status structure.

use std::cmp::Ordering;

use crate::geometry::{Coordinate, Segment};

/// Compare two active segments by the fixed endpoint key
/// `(max y, min y, max x, min x)`, lexicographically.
///
/// This is a *static* order: it never consults the current sweep
/// position. A true Bentley–Ottmann status order would sort by the
/// y-value at the sweep x-coordinate and swap segments as they cross, so
/// two segments that exchange vertical order while both are active keep
/// their tree positions here, and the neighbor-only intersection check
/// can in principle miss a crossing.
pub fn compare_segments<T: Coordinate>(lhs: &Segment<T>, rhs: &Segment<T>) -> Ordering {
    segment_key(lhs).cmp(&segment_key(rhs))
}

fn segment_key<T: Coordinate>(segment: &Segment<T>) -> (T, T, T, T) {
    let (begin, end) = (&segment.begin, &segment.end);
    (
        begin.y.max(end.y),
        begin.y.min(end.y),
        begin.x.max(end.x),
        begin.x.min(end.x),
    )
}
