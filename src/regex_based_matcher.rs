// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use crate::{
    interfaces::PatternMatcher,
    regex_util::{anchored_at_start, anchored_fully},
    regexp_cache::{InvalidRegexError, RegexCache},
};

/// [`PatternMatcher`] backed by the `regex` crate and a shared [`RegexCache`].
///
/// Anchored variants of a pattern are cached under their own keys, so each
/// flavour is compiled only once.
pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(128) }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { cache: RegexCache::with_capacity(capacity) }
    }

    /// Compiles every flavour of `pattern` the formatter may ask for.
    pub fn validate(&self, pattern: &str) -> Result<(), InvalidRegexError> {
        self.cache.get_regex(pattern)?;
        self.cache.get_regex(&anchored_at_start(pattern))?;
        self.cache.get_regex(&anchored_fully(pattern))?;
        Ok(())
    }
}

impl Default for RegexBasedMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for RegexBasedMatcher {
    fn full_match(&self, pattern: &str, text: &str) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(&anchored_fully(pattern))?;
        Ok(regexp.is_match(text))
    }

    fn consume_prefix(&self, pattern: &str, text: &str) -> Result<Option<usize>, InvalidRegexError> {
        let regexp = self.cache.get_regex(&anchored_at_start(pattern))?;
        Ok(regexp.find(text).map(|found| found.end()))
    }

    fn partial_match<'t>(
        &self,
        pattern: &str,
        text: &'t str,
    ) -> Result<Option<&'t str>, InvalidRegexError> {
        let regexp = self.cache.get_regex(pattern)?;
        Ok(regexp.find(text).map(|found| found.as_str()))
    }

    fn global_replace<'t>(
        &self,
        pattern: &str,
        text: &'t str,
        replacement: &str,
    ) -> Result<Cow<'t, str>, InvalidRegexError> {
        let regexp = self.cache.get_regex(pattern)?;
        Ok(regexp.replace_all(text, replacement))
    }
}
