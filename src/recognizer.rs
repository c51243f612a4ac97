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

use std::sync::Arc;

use crate::{
    catalog,
    config::RecognizerConfig,
    error::Result,
    point::Point,
    template_store::{CatalogEntry, TemplateStore},
    unistroke_recognizer::{LinearScan, SearchParameters, TemplateMatcher},
};

/// Fewest points a front end should collect before asking for a recognition.
/// The recognizer itself accepts any stroke it can normalize.
pub const MIN_STROKE_POINTS: usize = 15;

/// A $1 recognizer over a shared, immutable template store.
///
/// Cloning is cheap: clones share the store, so one recognizer can serve
/// several threads at once.
#[derive(Clone, Debug)]
pub struct Recognizer<M = LinearScan> {
    store: Arc<TemplateStore>,
    search: SearchParameters,
    matcher: M,
}

impl Recognizer {
    /// Builds the template store from `catalog` and scans it linearly.
    pub fn new<I>(catalog: I, config: RecognizerConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<CatalogEntry>,
    {
        let store = TemplateStore::new(catalog, config.normalize)?;
        Ok(Self::from_store(Arc::new(store), config.search))
    }

    /// Recognizer over [`catalog::standard`] with default settings.
    pub fn with_standard_catalog() -> Result<Self> {
        Self::new(catalog::standard(), RecognizerConfig::default())
    }

    pub fn from_store(store: Arc<TemplateStore>, search: SearchParameters) -> Self {
        Self {
            store,
            search,
            matcher: LinearScan,
        }
    }
}

impl<M: TemplateMatcher> Recognizer<M> {
    /// Replaces the matching strategy, keeping the store and search parameters.
    pub fn with_matcher<N: TemplateMatcher>(self, matcher: N) -> Recognizer<N> {
        Recognizer {
            store: self.store,
            search: self.search,
            matcher,
        }
    }

    /// Returns the class of the template closest to the raw stroke `points`.
    pub fn recognize(&self, points: &[Point]) -> Result<String> {
        let candidate = self.store.normalize(points)?;
        let best = self.matcher.best_match(&candidate, &self.store, &self.search);
        log::debug!(
            "recognized {:?} at distance {:.3} among {} templates",
            best.template.name(),
            best.distance,
            self.store.len()
        );
        Ok(best.template.name().to_owned())
    }

    pub fn store(&self) -> &Arc<TemplateStore> {
        &self.store
    }

    pub fn search_parameters(&self) -> &SearchParameters {
        &self.search
    }
}
