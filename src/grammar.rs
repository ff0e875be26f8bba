//! Production rules and the string-rewriting engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A set of context-free production rules keyed by a single symbol.
///
/// Symbols without a rule are rewritten to themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: HashMap<char, String>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a flat rule string such as `"X=F[+X]F[-X]+X;F=FF"`.
    ///
    /// Rules are separated by `;`. Each rule is split on its first `=` only, so the
    /// replacement may itself contain `=`. Entries without `=`, or whose left side is
    /// not exactly one character, are silently dropped. A later rule for the same
    /// symbol replaces an earlier one.
    pub fn parse(spec: &str) -> Self {
        let mut set = Self::new();
        for entry in spec.split(';') {
            let Some((lhs, rhs)) = entry.split_once('=') else {
                continue;
            };
            let mut chars = lhs.chars();
            if let (Some(symbol), None) = (chars.next(), chars.next()) {
                set.insert(symbol, rhs);
            }
        }
        set
    }

    /// Adds (or replaces) the production for `symbol`.
    pub fn insert(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    /// Returns the replacement registered for `symbol`, if any.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Byte length of `sequence` after one rewriting pass.
    fn next_len(&self, sequence: &str) -> usize {
        sequence
            .chars()
            .map(|ch| self.get(ch).map_or(ch.len_utf8(), str::len))
            .sum()
    }

    /// Performs a single rewriting pass over `sequence`.
    ///
    /// Every symbol is substituted simultaneously; replacements written during this
    /// pass are never rescanned.
    pub fn rewrite(&self, sequence: &str) -> String {
        let mut next = String::with_capacity(self.next_len(sequence));
        for ch in sequence.chars() {
            match self.get(ch) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(ch),
            }
        }
        next
    }

    /// Rewrites `axiom` `iterations` times and returns the final generation.
    ///
    /// Zero iterations return the axiom unchanged. Output length can grow
    /// exponentially with `iterations`; the caller owns that budget.
    pub fn expand(&self, axiom: &str, iterations: usize) -> String {
        let mut sequence = axiom.to_owned();
        for iteration in 0..iterations {
            sequence = self.rewrite(&sequence);
            debug!(iteration = iteration + 1, len = sequence.len(), "expanded generation");
        }
        sequence
    }
}

/// Parses `rules` and expands `axiom` in one call.
///
/// Equivalent to `RuleSet::parse(rules).expand(axiom, iterations)`.
pub fn expand(rules: &str, axiom: &str, iterations: usize) -> String {
    RuleSet::parse(rules).expand(axiom, iterations)
}
