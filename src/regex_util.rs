// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use regex::Regex;

pub trait RegexFullMatch {
    /// Eq of C fullMatch
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

/// Wraps `pattern` so that it only matches at the start of the input.
pub(crate) fn anchored_at_start(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")")
}

/// Wraps `pattern` so that it only matches the whole input.
pub(crate) fn anchored_fully(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{anchored_at_start, anchored_fully, RegexFullMatch};

    #[test]
    fn full_match_requires_whole_input() {
        let digits = Regex::new("[0-9]*").unwrap();
        assert!(digits.full_match(""));
        assert!(digits.full_match("650"));
        assert!(!digits.full_match("65a"));
    }

    #[test]
    fn anchoring_keeps_alternations_grouped() {
        let regex = Regex::new(&anchored_fully("\\d{3}|\\d{4}")).unwrap();
        assert!(regex.is_match("1234"));
        let regex = Regex::new(&anchored_at_start("\\+|011")).unwrap();
        assert!(!regex.is_match("1011"));
        assert_eq!(Some(3), regex.find("0114").map(|m| m.end()));
    }
}
