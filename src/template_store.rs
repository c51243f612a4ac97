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
    error::{Error, Result},
    gesture::{self, Gesture, NormalizeOptions},
    point::Point,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A raw catalog entry: a gesture class and the stroke that illustrates it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogEntry {
    pub name: String,
    pub points: Vec<Point>,
}

impl CatalogEntry {
    pub fn new(
        name: impl Into<String>,
        points: impl IntoIterator<Item = impl Into<Point>>,
    ) -> Self {
        Self {
            name: name.into(),
            points: points.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> From<(S, Vec<Point>)> for CatalogEntry {
    fn from((name, points): (S, Vec<Point>)) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Immutable, ordered and non-empty set of normalized templates.
///
/// Every template and every query matched against the store goes through the
/// same [`NormalizeOptions`].
#[derive(Clone, Debug)]
pub struct TemplateStore {
    templates: Vec<Gesture>,
    options: NormalizeOptions,
}

impl TemplateStore {
    /// Normalizes every catalog entry, in order.
    ///
    /// Fails with [`Error::NoTemplates`] for an empty catalog and with
    /// [`Error::InvalidTemplate`] for the first entry that cannot be normalized.
    pub fn new<I>(catalog: I, options: NormalizeOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<CatalogEntry>,
    {
        let mut templates = Vec::new();
        for entry in catalog {
            let entry = entry.into();
            let gesture = Gesture::new(&entry.points, &entry.name, &options).map_err(|err| {
                log::warn!("rejecting template {:?}: {}", entry.name, err);
                match err.degeneracy() {
                    Some(reason) => Error::InvalidTemplate {
                        name: entry.name.clone(),
                        reason,
                    },
                    None => err,
                }
            })?;
            templates.push(gesture);
        }
        if templates.is_empty() {
            return Err(Error::NoTemplates);
        }
        log::debug!("built template store with {} templates", templates.len());
        Ok(Self { templates, options })
    }

    /// Normalizes a query stroke the same way the templates were.
    pub fn normalize(&self, points: &[Point]) -> Result<Vec<Point>> {
        gesture::normalize(points, &self.options)
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false: an empty store cannot be built.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gesture> {
        self.templates.iter()
    }

    /// First template with the given class.
    pub fn get(&self, name: &str) -> Option<&Gesture> {
        self.templates.iter().find(|g| g.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(Gesture::name)
    }

    pub(crate) fn first(&self) -> &Gesture {
        &self.templates[0]
    }
}

impl<'a> IntoIterator for &'a TemplateStore {
    type Item = &'a Gesture;
    type IntoIter = std::slice::Iter<'a, Gesture>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
