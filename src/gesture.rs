/*
 * The $1 Unistroke Recognizer (rust version)
 *
 * Original authors:
 *
 *	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 *	    Andrew D. Wilson, Ph.D.
 *	    Microsoft Research
 *	    One Microsoft Way
 *	    Redmond, WA 98052
 *	    awilson@microsoft.com
 *
 *	    Yang Li, Ph.D.
 *	    Department of Computer Science and Engineering
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    yangli@cs.washington.edu
 *
 * The academic publication for the $1 recognizer, and what should be
 * used to cite it, is:
 *
 *	Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *	  libraries, toolkits or training: A $1 recognizer for user interface
 *	  prototypes. Proceedings of the ACM Symposium on User Interface
 *	  Software and Technology (UIST '07). Newport, Rhode Island (October
 *	  7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2007-2012, Jacob O. Wobbrock, Andrew D. Wilson and Yang Li.
 * All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University of Washington nor Microsoft,
 *      nor the names of its contributors may be used to endorse or promote
 *      products derived from this software without specific prior written
 *      permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D. Wilson
 * OR Yang Li OR Ferran Pujol Camins BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
 * SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO,
 * PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
 * BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
 * CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING
 * IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY
 * OF SUCH DAMAGE.
**/

use crate::{
    error::{Degeneracy, Result},
    geometry,
    point::Point,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Number of points on a normalized gesture path
pub const RESAMPLE_SIZE: usize = 64;
/// Side of the square normalized gestures are scaled to
pub const SQUARE_SIZE: f64 = 350.0;
/// Normalized gestures are centered here
pub const ORIGIN: Point = Point::new(0.0, 0.0);
/// A bounding box side no larger than this fraction of the other side counts as zero
pub const DEGENERATE_TOLERANCE: f64 = 1e-9;

/// Options of the normalization pipeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizeOptions {
    /// When positive, strokes whose aligned bounding box has a side ratio
    /// `min(w, h) / max(w, h)` below this value are scaled uniformly by their
    /// longest side instead of stretched to a square. Zero keeps the plain
    /// anisotropic scaling for every stroke.
    pub one_dimensional_threshold: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            one_dimensional_threshold: 0.0,
        }
    }
}

/// A named gesture whose path has been normalized with respect to
/// resolution, rotation, scale and position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gesture {
    name: String,
    points: Vec<Point>,
}

impl Gesture {
    /// Normalizes a raw stroke and names it.
    pub fn new(points: &[Point], name: &str, options: &NormalizeOptions) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            points: normalize(points, options)?,
        })
    }

    /// Gesture class
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gesture points (normalized)
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Runs the full pipeline: resample, rotate to the indicative angle,
/// scale to [`SQUARE_SIZE`] and move the centroid to [`ORIGIN`].
pub fn normalize(points: &[Point], options: &NormalizeOptions) -> Result<Vec<Point>> {
    let points = resample(points, RESAMPLE_SIZE)?;
    let angle = indicative_angle(&points)?;
    let points = geometry::rotate_by(&points, -angle)?;
    let points = scale_to(&points, SQUARE_SIZE, options)?;
    translate_to(&points, &ORIGIN)
}

/// Resamples the array of points into n equally-distanced points
pub fn resample(points: &[Point], n: usize) -> Result<Vec<Point>> {
    if points.len() < 2 {
        return Err(Degeneracy::TooFewPoints {
            count: points.len(),
        }
        .into());
    }
    if points.iter().any(|p| !p.is_finite()) {
        return Err(Degeneracy::NonFinite.into());
    }
    let length = geometry::path_length(points);
    if !length.is_finite() {
        return Err(Degeneracy::NonFinite.into());
    }
    if length <= 0.0 {
        return Err(Degeneracy::ZeroLength.into());
    }

    let interval = length / (n.max(2) as f64 - 1.0);
    let mut new_points = Vec::with_capacity(n);
    new_points.push(points[0]);
    let mut d = 0.0;

    for segment in points.windows(2) {
        let current = segment[1];
        // the walk restarts from every point it emits
        let mut previous = segment[0];
        let mut dist = geometry::distance(&previous, &current);
        while d + dist >= interval && new_points.len() < n {
            let t = ((interval - d) / dist).clamp(0.0, 1.0);
            let q = Point::new(
                previous.x + t * (current.x - previous.x),
                previous.y + t * (current.y - previous.y),
            );
            new_points.push(q);
            previous = q;
            dist = geometry::distance(&previous, &current);
            d = 0.0;
        }
        d += dist;
    }

    // sometimes we fall a rounding-error short of adding the last point, so add it if so
    if let Some(&last) = new_points.last() {
        new_points.resize(n, last);
    }
    Ok(new_points)
}

/// Angle formed by the first point, the centroid and the horizon
pub fn indicative_angle(points: &[Point]) -> Result<f64> {
    let c = geometry::centroid(points)?;
    let first = points[0];
    Ok((c.y - first.y).atan2(c.x - first.x))
}

/// Scales the bounding box of the points to `size` x `size`, each axis on its own.
pub fn scale_to(points: &[Point], size: f64, options: &NormalizeOptions) -> Result<Vec<Point>> {
    let (width, height) = geometry::bounding_box(points)?;
    let longest = width.max(height);

    let threshold = options.one_dimensional_threshold;
    if threshold > 0.0 && longest > 0.0 && width.min(height) / longest < threshold {
        let scale = size / longest;
        return Ok(points
            .iter()
            .map(|p| Point::new(p.x * scale, p.y * scale))
            .collect());
    }

    let tolerance = DEGENERATE_TOLERANCE * longest;
    if !(width > tolerance && height > tolerance) {
        return Err(Degeneracy::FlatBoundingBox { width, height }.into());
    }
    Ok(points
        .iter()
        .map(|p| Point::new(p.x * size / width, p.y * size / height))
        .collect())
}

/// Translates the array of points so that its centroid lands on `target`
pub fn translate_to(points: &[Point], target: &Point) -> Result<Vec<Point>> {
    let c = geometry::centroid(points)?;
    Ok(points
        .iter()
        .map(|p| Point::new(p.x + target.x - c.x, p.y + target.y - c.y))
        .collect())
}
