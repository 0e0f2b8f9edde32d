//! Text search and replace for runedit.
//!
//! Matches are reported as char offsets into the whole text, the same
//! addressing the gap buffer uses.

use regex::Regex;

/// Search direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// A match location in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Char offset of the first matched char.
    pub start: usize,
    /// Match length in characters.
    pub len: usize,
}

impl Match {
    /// Char offset just past the match.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Search options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Case-sensitive search.
    pub case_sensitive: bool,
    /// Use regex pattern.
    pub regex: bool,
    /// Whole word only.
    pub whole_word: bool,
}

impl SearchOptions {
    /// Plain, case-sensitive substring search.
    pub fn literal() -> Self {
        Self {
            case_sensitive: true,
            ..Default::default()
        }
    }
}

/// Compile `pattern` under `options`, or `None` if it is empty or invalid.
fn build_regex(pattern: &str, options: &SearchOptions) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }

    let search_pattern = if options.regex {
        pattern.to_string()
    } else {
        regex::escape(pattern)
    };

    let search_pattern = if options.whole_word {
        format!(r"\b(?:{})\b", search_pattern)
    } else {
        search_pattern
    };

    let regex = if options.case_sensitive {
        Regex::new(&search_pattern)
    } else {
        Regex::new(&format!("(?i){}", search_pattern))
    };
    regex.ok()
}

/// Search in text and return all matches, in order and non-overlapping.
///
/// Empty matches are skipped.
pub fn find_all(text: &str, pattern: &str, options: &SearchOptions) -> Vec<Match> {
    let Some(regex) = build_regex(pattern, options) else {
        return vec![];
    };

    let mut matches = Vec::new();
    // Running byte -> char conversion
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for mat in regex.find_iter(text) {
        if mat.as_str().is_empty() {
            continue;
        }
        char_pos += text[byte_pos..mat.start()].chars().count();
        byte_pos = mat.start();
        let len = mat.as_str().chars().count();

        matches.push(Match {
            start: char_pos,
            len,
        });
    }

    matches
}

/// Find closest match to char offset `pos`.
///
/// Forward picks the first match starting at or after `pos`, backward the
/// last one starting at or before it. Both wrap around.
pub fn find_closest(matches: &[Match], pos: usize, direction: SearchDirection) -> Option<usize> {
    if matches.is_empty() {
        return None;
    }

    match direction {
        SearchDirection::Forward => matches
            .iter()
            .position(|m| m.start >= pos)
            .or(Some(0)), // Wrap to first match
        SearchDirection::Backward => matches
            .iter()
            .rposition(|m| m.start <= pos)
            .or(Some(matches.len() - 1)), // Wrap to last match
    }
}

/// Replace every match of `pattern` with `replacement`, taken literally.
///
/// Returns the new text and the number of replacements.
pub fn replace_all(
    text: &str,
    pattern: &str,
    replacement: &str,
    options: &SearchOptions,
) -> (String, usize) {
    let Some(regex) = build_regex(pattern, options) else {
        return (text.to_string(), 0);
    };

    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;
    for mat in regex.find_iter(text).filter(|m| !m.as_str().is_empty()) {
        result.push_str(&text[last..mat.start()]);
        result.push_str(replacement);
        last = mat.end();
        count += 1;
    }
    result.push_str(&text[last..]);
    (result, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_simple() {
        let text = "hello world\nhello there";
        let matches = find_all(text, "hello", &SearchOptions::default());
        assert_eq!(matches, vec![Match { start: 0, len: 5 }, Match { start: 12, len: 5 }]);
    }

    #[test]
    fn test_find_all_char_offsets() {
        let text = "ğüş ab ğab";
        let matches = find_all(text, "ab", &SearchOptions::literal());
        assert_eq!(matches, vec![Match { start: 4, len: 2 }, Match { start: 8, len: 2 }]);
        assert_eq!(matches[1].end(), 10);
    }

    #[test]
    fn test_find_all_case_insensitive() {
        let text = "Hello HELLO hello";
        let matches = find_all(text, "hello", &SearchOptions::default());
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_find_all_case_sensitive() {
        let text = "Hello HELLO hello";
        let matches = find_all(text, "hello", &SearchOptions::literal());
        assert_eq!(matches, vec![Match { start: 12, len: 5 }]);
    }

    #[test]
    fn test_literal_pattern_is_escaped() {
        let matches = find_all("a.b axb", "a.b", &SearchOptions::literal());
        assert_eq!(matches.len(), 1);

        let opts = SearchOptions {
            regex: true,
            ..SearchOptions::literal()
        };
        assert_eq!(find_all("a.b axb", "a.b", &opts).len(), 2);
    }

    #[test]
    fn test_whole_word() {
        let opts = SearchOptions {
            whole_word: true,
            ..SearchOptions::literal()
        };
        let matches = find_all("cat concat cat_x cat", "cat", &opts);
        assert_eq!(matches, vec![Match { start: 0, len: 3 }, Match { start: 17, len: 3 }]);
    }

    #[test]
    fn test_empty_and_invalid_patterns() {
        assert!(find_all("abc", "", &SearchOptions::default()).is_empty());
        let opts = SearchOptions {
            regex: true,
            ..Default::default()
        };
        assert!(find_all("abc", "(", &opts).is_empty());
        assert!(find_all("abc", "x*", &opts).is_empty());
    }

    #[test]
    fn test_find_closest() {
        let matches = vec![
            Match { start: 5, len: 3 },
            Match { start: 20, len: 3 },
            Match { start: 40, len: 3 },
        ];

        assert_eq!(find_closest(&matches, 6, SearchDirection::Forward), Some(1));
        assert_eq!(find_closest(&matches, 20, SearchDirection::Forward), Some(1));
        assert_eq!(find_closest(&matches, 41, SearchDirection::Forward), Some(0));

        assert_eq!(find_closest(&matches, 39, SearchDirection::Backward), Some(1));
        assert_eq!(find_closest(&matches, 4, SearchDirection::Backward), Some(2));
        assert_eq!(find_closest(&[], 0, SearchDirection::Forward), None);
    }

    #[test]
    fn test_replace_all() {
        let (text, count) = replace_all("foo bar foo", "foo", "$1", &SearchOptions::literal());
        assert_eq!(text, "$1 bar $1");
        assert_eq!(count, 2);

        let (text, count) = replace_all("abc", "x", "y", &SearchOptions::literal());
        assert_eq!(text, "abc");
        assert_eq!(count, 0);
    }
}
