// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Planar geometry primitives: points, segments and the exact
//! segment-intersection predicate.
//!
//! All arithmetic happens in integer or rational coordinates, so the
//! predicate is exact. Floating point is not used anywhere.

use std::fmt;
use std::fmt::Debug;

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{PrimInt, Signed, Zero};

/// Trait bound for coordinate types.
///
/// Intersection points are represented as `Ratio<T>`, which keeps every
/// computation exact, so only signed primitive integers qualify.
pub trait Coordinate: PrimInt + Signed + Integer + Debug + fmt::Display {}

impl<T: PrimInt + Signed + Integer + Debug + fmt::Display> Coordinate for T {}

/// Whether a point is the lexicographically earlier (`Begin`) or later
/// (`End`) endpoint of its segment, ordered by `x` and then by `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SegmentRole {
    /// The endpoint at which the segment enters the sweep.
    Begin,
    /// The endpoint at which the segment leaves the sweep.
    End,
}

/// The position of an endpoint within its input record. Kept only to
/// reproduce the original endpoint order in the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOrder {
    /// The endpoint that was read first.
    First,
    /// The endpoint that was read second.
    Second,
}

/// A point in the plane, tagged with its role inside a segment.
///
/// Points are immutable once their segment has been constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point<T> {
    /// The x coordinate.
    pub x: T,
    /// The y coordinate.
    pub y: T,
    /// Position of this endpoint along the x axis within its segment.
    pub segment_role: SegmentRole,
    /// Position of this endpoint in the input record.
    pub input_order: InputOrder,
}

impl<T: Coordinate> Point<T> {
    /// Is this the lexicographically earlier endpoint of its segment?
    pub fn is_begin(&self) -> bool {
        self.segment_role == SegmentRole::Begin
    }

    /// Was this endpoint read first from the input?
    pub fn is_first(&self) -> bool {
        self.input_order == InputOrder::First
    }

    /// Does the point satisfy the line `y = kx + b`?
    fn is_on_line(&self, k: Ratio<T>, b: Ratio<T>) -> bool {
        Ratio::from_integer(self.y) == k * Ratio::from_integer(self.x) + b
    }
}

/// A line segment between two points.
///
/// Invariant: `begin` is the endpoint with the smaller `x` coordinate
/// (ties broken by the smaller `y`). Segments are plain values; the sweep
/// status structure compares them by their coordinates, not by identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<T> {
    /// The lexicographically earlier endpoint.
    pub begin: Point<T>,
    /// The lexicographically later endpoint.
    pub end: Point<T>,
}

impl<T: Coordinate> Segment<T> {
    /// Create a segment from its two endpoints in input order.
    ///
    /// The endpoints are tagged `First`/`Second` and then canonicalized
    /// into `begin`/`end` by `(x, y)`.
    pub fn new(first: (T, T), second: (T, T)) -> Segment<T> {
        let first = Point {
            x: first.0,
            y: first.1,
            segment_role: SegmentRole::Begin,
            input_order: InputOrder::First,
        };
        let second = Point {
            x: second.0,
            y: second.1,
            segment_role: SegmentRole::End,
            input_order: InputOrder::Second,
        };

        let (mut begin, mut end) = if (first.x, first.y) < (second.x, second.y) {
            (first, second)
        } else {
            (second, first)
        };
        begin.segment_role = SegmentRole::Begin;
        end.segment_role = SegmentRole::End;

        Segment { begin, end }
    }

    fn min_x(&self) -> T {
        self.begin.x.min(self.end.x)
    }

    fn max_x(&self) -> T {
        self.begin.x.max(self.end.x)
    }

    fn min_y(&self) -> T {
        self.begin.y.min(self.end.y)
    }

    fn max_y(&self) -> T {
        self.begin.y.max(self.end.y)
    }

    /// Bounding-box membership test: does `(x, y)` lie inside the axis
    /// aligned rectangle spanned by the two endpoints?
    pub fn is_inside_area(&self, x: T, y: T) -> bool {
        x >= self.min_x() && x <= self.max_x() && y >= self.min_y() && y <= self.max_y()
    }

    /// Bounding-box membership for an exact rational point.
    fn bounding_box_contains(&self, x: Ratio<T>, y: Ratio<T>) -> bool {
        x >= Ratio::from_integer(self.min_x())
            && x <= Ratio::from_integer(self.max_x())
            && y >= Ratio::from_integer(self.min_y())
            && y <= Ratio::from_integer(self.max_y())
    }

    /// Denominator of the two-line intersection system. Zero means the
    /// carrier lines are parallel or coincident.
    fn intersection_denominator(&self, other: &Segment<T>) -> T {
        let (a, b) = (&self.begin, &self.end);
        let (c, d) = (&other.begin, &other.end);
        (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x)
    }

    /// Exact intersection point of the two carrier lines.
    ///
    /// Must only be called when [`Self::intersection_denominator`] is
    /// non-zero.
    fn line_intersection(&self, other: &Segment<T>) -> (Ratio<T>, Ratio<T>) {
        let (a, b) = (&self.begin, &self.end);
        let (c, d) = (&other.begin, &other.end);

        let det_ab = a.x * b.y - a.y * b.x;
        let det_cd = c.x * d.y - c.y * d.x;
        let denominator = self.intersection_denominator(other);

        let x = Ratio::new(det_ab * (c.x - d.x) - (a.x - b.x) * det_cd, denominator);
        let y = Ratio::new(det_ab * (c.y - d.y) - (a.y - b.y) * det_cd, denominator);
        (x, y)
    }

    /// Do both endpoints of `other` lie on the carrier line of `self`?
    ///
    /// For a non-vertical segment the line is derived as `y = kx + b` in
    /// rational coordinates. A vertical (or degenerate) segment has no
    /// such form; its carrier line coincides with a parallel line exactly
    /// when the x coordinates agree.
    fn on_same_line_with(&self, other: &Segment<T>) -> bool {
        if self.begin.x == self.end.x {
            return other.begin.x == self.begin.x && other.end.x == self.begin.x;
        }

        let k = Ratio::new(self.end.y - self.begin.y, self.end.x - self.begin.x);
        let b = Ratio::from_integer(self.begin.y) - k * Ratio::from_integer(self.begin.x);
        other.begin.is_on_line(k, b) && other.end.is_on_line(k, b)
    }

    /// Do the coordinate ranges of the two segments overlap on both axes?
    fn ranges_overlap(&self, other: &Segment<T>) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// Exact intersection test between two segments.
    ///
    /// A zero denominator means the carrier lines are parallel or
    /// coincident; two collinear segments intersect exactly when their
    /// coordinate ranges overlap. Otherwise the intersection point of the
    /// carrier lines is computed exactly and tested against both bounding
    /// boxes.
    ///
    /// Degenerate (zero-length) segments are not rejected; they flow
    /// through the same tests.
    pub fn intersects_with(&self, other: &Segment<T>) -> bool {
        if self.intersection_denominator(other).is_zero() {
            return self.on_same_line_with(other) && self.ranges_overlap(other);
        }

        let (x, y) = self.line_intersection(other);
        self.bounding_box_contains(x, y) && other.bounding_box_contains(x, y)
    }

    /// The endpoint that was read first from the input.
    fn first(&self) -> &Point<T> {
        if self.begin.is_first() {
            &self.begin
        } else {
            &self.end
        }
    }

    /// The endpoint that was read second from the input.
    fn second(&self) -> &Point<T> {
        if self.begin.is_first() {
            &self.end
        } else {
            &self.begin
        }
    }
}

/// Prints the segment as `x1 y1 x2 y2` in original input endpoint order,
/// independent of the internal `begin`/`end` canonicalization.
impl<T: Coordinate> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = (self.first(), self.second());
        write!(f, "{} {} {} {}", first.x, first.y, second.x, second.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(first: (i64, i64), second: (i64, i64)) -> Segment<i64> {
        Segment::new(first, second)
    }

    #[test]
    fn canonicalization_sorts_by_x_then_y() {
        let s = segment((4, 0), (0, 4));
        assert_eq!((s.begin.x, s.begin.y), (0, 4));
        assert_eq!((s.end.x, s.end.y), (4, 0));
        assert_eq!(s.begin.segment_role, SegmentRole::Begin);
        assert_eq!(s.end.segment_role, SegmentRole::End);

        // Vertical segment: tie on x is broken by y.
        let v = segment((1, 5), (1, 2));
        assert_eq!((v.begin.x, v.begin.y), (1, 2));
        assert_eq!((v.end.x, v.end.y), (1, 5));
    }

    #[test]
    fn display_preserves_input_order() {
        let s = segment((4, 4), (0, 0));
        assert_eq!(s.to_string(), "4 4 0 0");

        let t = segment((0, 0), (4, 4));
        assert_eq!(t.to_string(), "0 0 4 4");
    }

    #[test]
    fn crossing_segments_intersect() {
        let a = segment((0, 0), (4, 4));
        let b = segment((0, 4), (4, 0));
        assert!(a.intersects_with(&b));
        assert!(b.intersects_with(&a));
    }

    #[test]
    fn crossing_point_off_grid() {
        // The carrier lines cross at (1/2, 1/2), which is not an integer
        // point. The exact rational test must still detect it.
        let a = segment((0, 0), (1, 1));
        let b = segment((0, 1), (1, 0));
        assert!(a.intersects_with(&b));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let a = segment((0, 0), (1, 0));
        let b = segment((0, 1), (1, 1));
        assert!(!a.intersects_with(&b));
        assert!(!b.intersects_with(&a));
    }

    #[test]
    fn lines_cross_outside_of_both_segments() {
        let a = segment((0, 0), (1, 1));
        let b = segment((3, 0), (4, 5));
        assert!(!a.intersects_with(&b));
    }

    #[test]
    fn collinear_overlap_intersects() {
        let a = segment((0, 0), (4, 0));
        let b = segment((2, 0), (6, 0));
        assert!(a.intersects_with(&b));
        assert!(b.intersects_with(&a));
    }

    #[test]
    fn collinear_disjoint_does_not_intersect() {
        let a = segment((0, 0), (1, 0));
        let b = segment((2, 0), (3, 0));
        assert!(!a.intersects_with(&b));
    }

    #[test]
    fn collinear_containment_intersects() {
        let outer = segment((0, 0), (6, 0));
        let inner = segment((2, 0), (4, 0));
        assert!(inner.intersects_with(&outer));
        assert!(outer.intersects_with(&inner));
    }

    #[test]
    fn vertical_collinear_segments() {
        let a = segment((0, 0), (0, 2));
        let b = segment((0, 1), (0, 5));
        assert!(a.intersects_with(&b));

        let c = segment((0, 5), (0, 9));
        assert!(!a.intersects_with(&c));

        // Parallel verticals at different x never touch.
        let d = segment((1, 0), (1, 2));
        assert!(!a.intersects_with(&d));
    }

    #[test]
    fn shared_endpoint_intersects() {
        let a = segment((0, 0), (1, 1));
        let b = segment((1, 1), (2, 0));
        assert!(a.intersects_with(&b));
        assert!(b.intersects_with(&a));
    }

    #[test]
    fn degenerate_segment_on_vertical_carrier() {
        let point = segment((0, 1), (0, 1));
        let vertical = segment((0, 0), (0, 2));
        assert!(point.intersects_with(&vertical));

        let far = segment((0, 5), (0, 6));
        assert!(!point.intersects_with(&far));
    }

    #[test]
    fn is_inside_area_checks_bounding_box() {
        let s = segment((0, 0), (4, 2));
        assert!(s.is_inside_area(0, 0));
        assert!(s.is_inside_area(4, 2));
        assert!(s.is_inside_area(2, 1));
        assert!(!s.is_inside_area(5, 1));
        assert!(!s.is_inside_area(2, 3));
        assert!(!s.is_inside_area(-1, 0));
    }
}
