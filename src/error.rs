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

/// Result type alias for the recognizer
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while normalizing strokes or building a template store
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("degenerate stroke: {0}")]
    DegenerateStroke(#[from] Degeneracy),

    #[error("template store requires at least one template")]
    NoTemplates,

    #[error("template {name:?} is degenerate: {reason}")]
    InvalidTemplate { name: String, reason: Degeneracy },
}

/// Why a stroke cannot be normalized
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Degeneracy {
    /// Resampling needs at least two points.
    #[error("stroke must have at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    /// All points coincide.
    #[error("stroke has zero path length")]
    ZeroLength,

    #[error("stroke contains a non-finite coordinate")]
    NonFinite,

    /// Scaling would divide by a zero bounding box dimension.
    #[error("stroke bounding box is flat ({width} x {height})")]
    FlatBoundingBox { width: f64, height: f64 },
}

impl Error {
    /// The degeneracy behind this error, if the error is about a stroke.
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        match self {
            Error::DegenerateStroke(reason) | Error::InvalidTemplate { reason, .. } => {
                Some(*reason)
            }
            Error::NoTemplates => None,
        }
    }
}
