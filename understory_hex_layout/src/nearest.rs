// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Returns the position of the candidate closest to `reference`, along with
/// its distance, or `None` if there are no candidates.
///
/// Ties resolve to the first candidate in iteration order.
pub fn nearest<I>(reference: Point, candidates: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = Point>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in candidates.into_iter().enumerate() {
        let distance = candidate.distance(reference);
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((i, distance)),
        }
    }
    best
}

/// Returns the position of the candidate closest to `reference`, or
/// `fallback` unchanged when there are no candidates.
///
/// The fallback is not checked against anything; callers that index with the
/// result must bounds-check it themselves.
pub fn nearest_index<I>(reference: Point, candidates: I, fallback: usize) -> usize
where
    I: IntoIterator<Item = Point>,
{
    nearest(reference, candidates).map_or(fallback, |(i, _)| i)
}
