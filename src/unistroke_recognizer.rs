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
    geometry,
    gesture::Gesture,
    point::Point,
    template_store::TemplateStore,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Golden ratio conjugate used to place the search probes
pub const PHI: f64 = 0.618_033_988_749_894_9;
/// Default half-width of the rotation search window (2 degrees)
pub const ANGLE_RANGE: f64 = 2.0 * (std::f64::consts::PI / 180.0);
/// Default width at which the rotation search stops narrowing (2 degrees)
pub const ANGLE_PRECISION: f64 = 2.0 * (std::f64::consts::PI / 180.0);
/// Precisions below this are raised to it so the search always terminates
const MIN_ANGLE_PRECISION: f64 = 1e-9;

/// Bounds of the golden-section search over candidate rotations, in radians.
/// The window is `[-angle_range, angle_range]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParameters {
    pub angle_range: f64,
    pub angle_precision: f64,
}

impl Default for SearchParameters {
    fn default() -> Self {
        SearchParameters {
            angle_range: ANGLE_RANGE,
            angle_precision: ANGLE_PRECISION,
        }
    }
}

impl SearchParameters {
    /// Builds search parameters from angles given in degrees.
    pub fn from_degrees(angle_range: f64, angle_precision: f64) -> Self {
        SearchParameters {
            angle_range: angle_range.to_radians(),
            angle_precision: angle_precision.to_radians(),
        }
    }
}

/// Best rotation found by [`golden_section_search`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Rotation applied to the candidate, in radians
    pub angle: f64,
    /// Path distance at that rotation
    pub distance: f64,
}

/// Mean distance between points of equal index.
/// Paths of different (or zero) length never match and yield infinity.
pub fn path_distance(points1: &[Point], points2: &[Point]) -> f64 {
    if points1.len() != points2.len() || points1.is_empty() {
        return f64::INFINITY;
    }
    let n = points1.len() as f64;
    points1
        .iter()
        .zip(points2)
        .map(|(p, q)| geometry::distance(p, q))
        .sum::<f64>()
        / n
}

/// Path distance after rotating a copy of `candidate` by `angle` around its centroid.
pub fn distance_at_angle(candidate: &[Point], template: &[Point], angle: f64) -> f64 {
    match geometry::rotate_by(candidate, angle) {
        Ok(rotated) => path_distance(&rotated, template),
        Err(_) => f64::INFINITY,
    }
}

/// Smallest path distance between `candidate` and `template` over the
/// rotations allowed by `params`.
pub fn distance_at_best_angle(
    candidate: &[Point],
    template: &[Point],
    params: &SearchParameters,
) -> f64 {
    golden_section_search(candidate, template, params).distance
}

/// Golden-section search for the rotation of `candidate` that minimizes its
/// path distance to `template`. Assumes the distance is unimodal over the window.
pub fn golden_section_search(
    candidate: &[Point],
    template: &[Point],
    params: &SearchParameters,
) -> SearchOutcome {
    let Ok(c) = geometry::centroid(candidate) else {
        return SearchOutcome {
            angle: 0.0,
            distance: f64::INFINITY,
        };
    };
    let distance_at =
        |angle: f64| path_distance(&geometry::rotate_around(candidate, angle, &c), template);
    let precision = params.angle_precision.max(MIN_ANGLE_PRECISION);

    let mut a = -params.angle_range;
    let mut b = params.angle_range;
    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = distance_at(x1);
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = distance_at(x2);

    while (b - a).abs() > precision {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = distance_at(x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = distance_at(x2);
        }
    }

    if f1 <= f2 {
        SearchOutcome { angle: x1, distance: f1 }
    } else {
        SearchOutcome { angle: x2, distance: f2 }
    }
}

/// The template closest to a candidate.
#[derive(Clone, Copy, Debug)]
pub struct Match<'s> {
    pub template: &'s Gesture,
    pub distance: f64,
}

/// Strategy that picks the template closest to a normalized candidate.
///
/// Implementations must keep the per-pair distance of
/// [`distance_at_best_angle`] and never return a template from outside `store`.
pub trait TemplateMatcher {
    fn best_match<'s>(
        &self,
        candidate: &[Point],
        store: &'s TemplateStore,
        params: &SearchParameters,
    ) -> Match<'s>;
}

/// Scans every template in catalog order. The first of several equally
/// distant templates wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearScan;

impl TemplateMatcher for LinearScan {
    fn best_match<'s>(
        &self,
        candidate: &[Point],
        store: &'s TemplateStore,
        params: &SearchParameters,
    ) -> Match<'s> {
        let first = store.first();
        let mut best = Match {
            template: first,
            distance: distance_at_best_angle(candidate, first.points(), params),
        };
        log::trace!("distance to {:?}: {}", first.name(), best.distance);

        for template in store.iter().skip(1) {
            let distance = distance_at_best_angle(candidate, template.points(), params);
            log::trace!("distance to {:?}: {}", template.name(), distance);
            // a NaN distance only survives if every template yields one
            if distance < best.distance || best.distance.is_nan() {
                best = Match { template, distance };
            }
        }
        best
    }
}

/// Main function of the $1 recognizer.
/// Classifies a normalized candidate against a set of templates.
/// Returns the class of the closest neighbor in the template set.
pub fn classify<'s>(
    candidate: &[Point],
    store: &'s TemplateStore,
    params: &SearchParameters,
) -> &'s str {
    LinearScan.best_match(candidate, store, params).template.name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{normalize, NormalizeOptions};
    use approx::assert_abs_diff_eq;

    fn normalized(points: &[Point]) -> Vec<Point> {
        normalize(points, &NormalizeOptions::default()).unwrap()
    }

    fn check() -> Vec<Point> {
        vec![
            Point::new(10.0, 50.0),
            Point::new(40.0, 90.0),
            Point::new(100.0, 0.0),
        ]
    }

    #[test]
    fn path_distance_is_the_mean_of_index_pairs() {
        let a = [Point::new(0.0, 0.0), Point::new(0.0, 0.0)];
        let b = [Point::new(3.0, 4.0), Point::new(0.0, 1.0)];
        assert_eq!(path_distance(&a, &b), 3.0);
        assert_eq!(path_distance(&a, &b[..1]), f64::INFINITY);
        assert_eq!(path_distance(&[], &[]), f64::INFINITY);
    }

    #[test]
    fn distance_to_itself_is_zero() {
        let points = normalized(&check());
        let d = distance_at_best_angle(&points, &points, &SearchParameters::default());
        assert_abs_diff_eq!(d, 0.0, epsilon = 1.0);

        let precise = SearchParameters::from_degrees(2.0, 0.01);
        let d = distance_at_best_angle(&points, &points, &precise);
        assert_abs_diff_eq!(d, 0.0, epsilon = 0.05);
    }

    #[test]
    fn search_recovers_a_small_rotation() {
        let template = normalized(&check());
        let rotated = geometry::rotate_by(&template, 1.5_f64.to_radians()).unwrap();
        let params = SearchParameters::from_degrees(2.0, 0.01);

        let outcome = golden_section_search(&rotated, &template, &params);
        assert_abs_diff_eq!(
            outcome.angle,
            (-1.5_f64).to_radians(),
            epsilon = 0.02_f64.to_radians()
        );
        assert!(outcome.distance < 0.05);
        assert!(outcome.distance < distance_at_angle(&rotated, &template, 0.0));
    }

    #[test]
    fn finer_precision_never_does_worse() {
        let template = normalized(&check());
        let rotated = geometry::rotate_by(&template, 1.0_f64.to_radians()).unwrap();

        let coarse = distance_at_best_angle(&rotated, &template, &SearchParameters::default());
        let fine_params = SearchParameters::from_degrees(2.0, 0.001);
        let fine = distance_at_best_angle(&rotated, &template, &fine_params);
        assert!(fine <= coarse);
    }

    #[test]
    fn search_leaves_the_candidate_untouched() {
        let candidate = normalized(&check());
        let copy = candidate.clone();
        let template = geometry::rotate_by(&candidate, 0.5).unwrap();
        golden_section_search(&candidate, &template, &SearchParameters::from_degrees(2.0, 0.01));
        assert_eq!(candidate, copy);
    }

    #[test]
    fn non_positive_precision_still_terminates() {
        let points = normalized(&check());
        let params = SearchParameters {
            angle_range: ANGLE_RANGE,
            angle_precision: 0.0,
        };
        assert!(distance_at_best_angle(&points, &points, &params) < 1e-3);
    }

    #[test]
    fn classify_picks_the_closest_template() {
        let caret = vec![Point::new(10.0, 90.0), Point::new(50.0, 10.0), Point::new(90.0, 90.0)];
        let store = TemplateStore::new(
            [("caret", caret.clone()), ("check", check())],
            NormalizeOptions::default(),
        )
        .unwrap();
        let params = SearchParameters::default();

        assert_eq!(classify(&normalized(&check()), &store, &params), "check");
        assert_eq!(classify(&normalized(&caret), &store, &params), "caret");
    }

    #[test]
    fn empty_candidate_never_matches() {
        let template = normalized(&check());
        let outcome = golden_section_search(&[], &template, &SearchParameters::default());
        assert_eq!(outcome.distance, f64::INFINITY);
    }
}
