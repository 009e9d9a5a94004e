// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Command-line segment-intersection detector.
//!
//! Reads from stdin: the segment count `n` on the first line, then `n`
//! lines of `x1 y1 x2 y2`. Prints `INTERSECTION` followed by one
//! intersecting pair (each segment in original input endpoint order), or
//! `NO INTERSECTIONS`. Malformed input aborts with a diagnostic.

use std::io::Read;

use anyhow::{bail, Context, Result};
use itertools::Itertools;

use scanline_intersect::{find_intersection, Segment};

fn main() -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let segments = parse_segments(&input)?;

    match find_intersection(&segments) {
        Some((first, second)) => {
            println!("INTERSECTION");
            println!("{}", first);
            println!("{}", second);
        }
        None => println!("NO INTERSECTIONS"),
    }
    Ok(())
}

/// Parse the segment count followed by `4 * n` coordinates. Whitespace of
/// any kind separates tokens; the count must match exactly.
fn parse_segments(input: &str) -> Result<Vec<Segment<i64>>> {
    let mut tokens = input.split_whitespace();

    let count: usize = tokens
        .next()
        .context("missing segment count")?
        .parse()
        .context("invalid segment count")?;

    let coordinates: Vec<i64> = tokens
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid coordinate {:?}", token))
        })
        .collect::<Result<_>>()?;

    if coordinates.len() != 4 * count {
        bail!(
            "expected {} coordinates for {} segments, got {}",
            4 * count,
            count,
            coordinates.len()
        );
    }

    let segments = coordinates
        .into_iter()
        .tuples()
        .map(|(x1, y1, x2, y2)| Segment::new((x1, y1), (x2, y2)))
        .collect();
    Ok(segments)
}
