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

//! The $1 unistroke gesture recognizer.
//!
//! A stroke is resampled to [`RESAMPLE_SIZE`] points, rotated so that its
//! first point lies on a canonical direction from its centroid, stretched to a
//! [`SQUARE_SIZE`] square and centered on the origin. It is then compared to
//! every template of a [`TemplateStore`], searching a small window of
//! rotations, and the class of the closest template wins.
//!
//! ```
//! use dollar_recognizer::{Point, Recognizer};
//!
//! let recognizer = Recognizer::with_standard_catalog()?;
//! let stroke: Vec<Point> = (0..=40)
//!     .map(|i| {
//!         let a = -std::f64::consts::FRAC_PI_2 - std::f64::consts::TAU * i as f64 / 40.0;
//!         Point::new(200.0 + 80.0 * a.cos(), 150.0 + 75.0 * a.sin())
//!     })
//!     .collect();
//! assert_eq!(recognizer.recognize(&stroke)?, "circle");
//! # Ok::<(), dollar_recognizer::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod point;
pub mod recognizer;
pub mod template_store;
pub mod unistroke_recognizer;

pub use config::RecognizerConfig;
pub use error::{Degeneracy, Error, Result};
pub use gesture::{Gesture, NormalizeOptions, RESAMPLE_SIZE, SQUARE_SIZE};
pub use point::Point;
pub use recognizer::Recognizer;
pub use template_store::{CatalogEntry, TemplateStore};
pub use unistroke_recognizer::{LinearScan, SearchParameters, TemplateMatcher};
