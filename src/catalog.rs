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

//! A ready-made catalog of common unistroke gestures, in screen coordinates
//! (y grows downwards). Shapes are generated rather than recorded, so they are
//! idealized versions of what people draw.

use std::f64::consts::{PI, TAU};

use crate::{point::Point, template_store::CatalogEntry};

/// Gesture classes of [`standard`] and the shapes drawn for them, in catalog order.
const STANDARD: [(&str, fn() -> Vec<Point>); 14] = [
    ("triangle", triangle),
    ("x", x),
    ("rectangle", rectangle),
    ("circle", circle),
    ("check", check),
    ("caret", caret),
    ("zig-zag", zig_zag),
    ("arrow", arrow),
    ("left square bracket", left_square_bracket),
    ("right square bracket", right_square_bracket),
    ("v", v),
    ("delete", delete),
    ("star", star),
    ("pigtail", pigtail),
];

/// Names of the gestures in [`standard`], in catalog order.
pub fn standard_names() -> impl Iterator<Item = &'static str> {
    STANDARD.iter().map(|&(name, _)| name)
}

/// The standard catalog.
pub fn standard() -> Vec<CatalogEntry> {
    STANDARD
        .iter()
        .map(|&(name, shape)| CatalogEntry::new(name, shape()))
        .collect()
}

fn triangle() -> Vec<Point> {
    polyline(&[(50.0, 10.0), (10.0, 90.0), (90.0, 90.0), (50.0, 10.0)])
}

fn x() -> Vec<Point> {
    polyline(&[(10.0, 10.0), (90.0, 90.0), (90.0, 10.0), (10.0, 90.0)])
}

fn rectangle() -> Vec<Point> {
    polyline(&[
        (10.0, 10.0),
        (10.0, 70.0),
        (110.0, 70.0),
        (110.0, 10.0),
        (10.0, 10.0),
    ])
}

fn circle() -> Vec<Point> {
    arc(Point::new(50.0, 50.0), 50.0, -PI / 2.0, -PI / 2.0 - TAU, 64)
}

fn check() -> Vec<Point> {
    polyline(&[(10.0, 50.0), (40.0, 90.0), (100.0, 0.0)])
}

fn caret() -> Vec<Point> {
    polyline(&[(10.0, 90.0), (50.0, 10.0), (90.0, 90.0)])
}

fn zig_zag() -> Vec<Point> {
    polyline(&[
        (0.0, 0.0),
        (20.0, 60.0),
        (40.0, 0.0),
        (60.0, 60.0),
        (80.0, 0.0),
        (100.0, 60.0),
    ])
}

fn arrow() -> Vec<Point> {
    polyline(&[
        (0.0, 60.0),
        (100.0, 30.0),
        (70.0, 0.0),
        (100.0, 30.0),
        (80.0, 70.0),
    ])
}

fn left_square_bracket() -> Vec<Point> {
    polyline(&[(60.0, 0.0), (10.0, 0.0), (10.0, 100.0), (60.0, 100.0)])
}

fn right_square_bracket() -> Vec<Point> {
    polyline(&[(10.0, 0.0), (60.0, 0.0), (60.0, 100.0), (10.0, 100.0)])
}

fn v() -> Vec<Point> {
    polyline(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)])
}

fn delete() -> Vec<Point> {
    polyline(&[(10.0, 10.0), (90.0, 90.0), (10.0, 90.0), (90.0, 10.0)])
}

/// Points every 2 units along the segments between `vertices`.
fn polyline(vertices: &[(f64, f64)]) -> Vec<Point> {
    let mut points = Vec::new();
    for pair in vertices.windows(2) {
        let (a, b) = (Point::from(pair[0]), Point::from(pair[1]));
        let steps = ((b.x - a.x).hypot(b.y - a.y) / 2.0).ceil().max(1.0) as usize;
        for i in 0..steps {
            let t = i as f64 / steps as f64;
            points.push(Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y)));
        }
    }
    if let Some(&last) = vertices.last() {
        points.push(last.into());
    }
    points
}

fn arc(center: Point, radius: f64, from: f64, to: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = from + (to - from) * i as f64 / n as f64;
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// Five-pointed star drawn in one stroke, starting at the bottom left tip.
fn star() -> Vec<Point> {
    let (center, radius) = (Point::new(50.0, 50.0), 50.0);
    let tip = |k: usize| {
        let a = PI / 2.0 + 2.0 * TAU * k as f64 / 5.0 + TAU / 5.0;
        (center.x + radius * a.cos(), center.y - radius * a.sin())
    };
    let vertices: Vec<(f64, f64)> = (0..=5).map(tip).collect();
    polyline(&vertices)
}

fn pigtail() -> Vec<Point> {
    // a rising stroke that curls into a loop and leaves to the right
    (0..=80)
        .map(|i| {
            let t = i as f64 / 80.0 * 1.8 * PI;
            Point::new(30.0 * t - 40.0 * t.sin(), 80.0 - 40.0 * (1.0 - t.cos()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gesture::NormalizeOptions, template_store::TemplateStore};

    #[test]
    fn every_standard_gesture_is_generated() {
        let catalog = standard();
        assert_eq!(catalog.len(), STANDARD.len());
        for entry in &catalog {
            assert!(entry.points.len() >= 10, "{} is too sparse", entry.name);
        }
    }

    #[test]
    fn names_and_shapes_stay_paired() {
        let catalog = standard();
        assert!(catalog.iter().map(|e| e.name.as_str()).eq(standard_names()));
        assert_eq!(catalog[3].name, "circle");
        assert_eq!(catalog[3].points, circle());
        assert_eq!(catalog[13].name, "pigtail");
        assert_eq!(catalog[13].points, pigtail());
    }

    #[test]
    fn standard_catalog_normalizes() {
        let store = TemplateStore::new(standard(), NormalizeOptions::default()).unwrap();
        assert!(store.names().eq(standard_names()));
    }
}
