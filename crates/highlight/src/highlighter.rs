use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{Language, Token, TokenKind};

/// Maximum highlight cache size (lines)
pub const MAX_CACHE_SIZE: usize = 1000;

/// Snapshot of cache occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lines with valid cached tokens
    pub cached_lines: usize,
    /// Capacity before eviction kicks in
    pub capacity: usize,
}

/// Line tokenizer with a per-line cache.
///
/// A missing cache entry means the line is invalid; invalidation simply
/// drops entries.
#[derive(Debug, Clone)]
pub struct Highlighter {
    /// Active language (None = passthrough)
    language: Option<Arc<Language>>,
    /// Highlighting on/off
    enabled: bool,
    /// Line index -> (tokens, last access time)
    lines: HashMap<usize, (Vec<Token>, u64)>,
    /// Access counter for LRU
    access_counter: u64,
}

impl Highlighter {
    /// Create a highlighter for `language`.
    pub fn new(language: Option<Arc<Language>>) -> Self {
        Self {
            language,
            enabled: true,
            lines: HashMap::new(),
            access_counter: 0,
        }
    }

    /// Current language.
    pub fn language(&self) -> Option<&Arc<Language>> {
        self.language.as_ref()
    }

    /// Switch language; drops every cached line.
    pub fn set_language(&mut self, language: Option<Arc<Language>>) {
        self.language = language;
        self.clear_cache();
    }

    /// Enable or disable highlighting.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Tokenize one line without touching the cache.
    ///
    /// Rules run in list order and an earlier rule's match claims its
    /// positions; a later match touching any claimed position is dropped.
    /// Unclaimed stretches become `Normal` tokens, so the token texts always
    /// concatenate back to `line`.
    pub fn highlight_line(&self, line: &str) -> Vec<Token> {
        let language = match &self.language {
            Some(language) if self.enabled && !language.rules.is_empty() => language,
            _ => return vec![Token::whole_line(TokenKind::Normal, line)],
        };

        // Claims are tracked per byte, spans as byte ranges
        let mut claimed = vec![false; line.len()];
        let mut spans: Vec<(usize, usize, TokenKind)> = Vec::new();

        for rule in &language.rules {
            for m in rule.pattern.find_iter(line) {
                let range = m.range();
                if range.is_empty() || claimed[range.clone()].iter().any(|&c| c) {
                    continue;
                }
                claimed[range.clone()].fill(true);
                spans.push((range.start, range.end, rule.kind));
            }
        }

        spans.sort_by_key(|&(start, _, _)| start);

        let mut tokens = Vec::with_capacity(spans.len() * 2 + 1);
        let mut byte_pos = 0;
        let mut char_pos = 0;

        for (start, end, kind) in spans {
            if start > byte_pos {
                push_token(&mut tokens, TokenKind::Normal, &line[byte_pos..start], &mut char_pos);
            }
            push_token(&mut tokens, kind, &line[start..end], &mut char_pos);
            byte_pos = end;
        }
        if byte_pos < line.len() {
            push_token(&mut tokens, TokenKind::Normal, &line[byte_pos..], &mut char_pos);
        }

        tokens
    }

    /// Tokenize line `line_idx`, reusing the cached result when present.
    ///
    /// When highlighting is disabled the cache is bypassed and a single
    /// `Normal` token is returned.
    pub fn highlight_line_cached(&mut self, line_idx: usize, line: &str) -> Cow<'_, [Token]> {
        if !self.enabled {
            return Cow::Owned(vec![Token::whole_line(TokenKind::Normal, line)]);
        }

        self.access_counter += 1;
        let now = self.access_counter;

        if let Some((_, access_time)) = self.lines.get_mut(&line_idx) {
            *access_time = now;
        } else {
            let tokens = self.highlight_line(line);
            if self.lines.len() >= MAX_CACHE_SIZE {
                self.evict_lru();
            }
            self.lines.insert(line_idx, (tokens, now));
        }

        match self.lines.get(&line_idx) {
            Some((tokens, _)) => Cow::Borrowed(tokens.as_slice()),
            None => Cow::Owned(self.highlight_line(line)),
        }
    }

    /// Cached tokens for a line, if still valid.
    pub fn cached_tokens(&self, line_idx: usize) -> Option<&[Token]> {
        self.lines.get(&line_idx).map(|(tokens, _)| tokens.as_slice())
    }

    /// Invalidate line (when editing).
    pub fn invalidate_line(&mut self, line_idx: usize) {
        self.lines.remove(&line_idx);
    }

    /// Invalidate lines `start_line..=end_line`.
    pub fn invalidate_range(&mut self, start_line: usize, end_line: usize) {
        if end_line < start_line {
            return;
        }
        if end_line - start_line >= self.lines.len() {
            self.lines
                .retain(|&idx, _| idx < start_line || idx > end_line);
        } else {
            for idx in start_line..=end_line {
                self.lines.remove(&idx);
            }
        }
    }

    /// Invalidate every cached line at or after `line` (line indices shifted).
    pub fn invalidate_from_line(&mut self, line: usize) {
        self.lines.retain(|&idx, _| idx < line);
    }

    /// Invalidate entire cache.
    pub fn clear_cache(&mut self) {
        self.lines.clear();
    }

    /// Cache occupancy.
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            cached_lines: self.lines.len(),
            capacity: MAX_CACHE_SIZE,
        }
    }

    /// Remove oldest entries from cache (LRU).
    fn evict_lru(&mut self) {
        let evict_count = MAX_CACHE_SIZE / 5;

        let mut entries: Vec<(usize, u64)> = self
            .lines
            .iter()
            .map(|(line_idx, (_, access_time))| (*line_idx, *access_time))
            .collect();

        entries.sort_by_key(|(_, access_time)| *access_time);

        for (line_idx, _) in entries.iter().take(evict_count) {
            self.lines.remove(line_idx);
        }
    }
}

/// Append a token for `text`, advancing the running char offset.
fn push_token(tokens: &mut Vec<Token>, kind: TokenKind, text: &str, char_pos: &mut usize) {
    let len = text.chars().count();
    tokens.push(Token {
        kind,
        start: *char_pos,
        end: *char_pos + len,
        text: text.to_string(),
    });
    *char_pos += len;
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(None)
    }
}
