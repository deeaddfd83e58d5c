//! Fuzzy reconciliation of model output against controlled vocabularies
//!
//! Model output for categorical fields is free text; reconciliation maps each
//! candidate onto the closest canonical label or drops it. Similarity is the
//! sequence ratio 2*M/T over matching blocks (M = matched characters, T =
//! total characters), computed case-insensitively. Labels carrying a trailing
//! parenthetical annotation, e.g. "No poverty (SDG 1)", are additionally
//! compared with the annotation stripped, taking the better score, so that
//! "ending poverty" lands on the right goal without the "(SDG 1)" tail
//! dragging the ratio down.

use pitchroom_domain::Vocabulary;

/// Matches free-text candidates against one vocabulary
#[derive(Debug, Clone, Copy)]
pub struct VocabMatcher {
    vocabulary: Vocabulary,
    threshold: f64,
    max_matches: usize,
}

impl VocabMatcher {
    /// Create a matcher over a vocabulary with an acceptance threshold and a
    /// result cap
    pub fn new(vocabulary: Vocabulary, threshold: f64, max_matches: usize) -> Self {
        Self {
            vocabulary,
            threshold,
            max_matches,
        }
    }

    /// Map candidates onto canonical labels, in candidate order
    ///
    /// Each candidate contributes at most one label; labels already selected
    /// are skipped; output stops at the result cap. Deterministic and total.
    pub fn match_candidates(&self, candidates: &[String]) -> Vec<String> {
        let mut selected = Vec::new();
        for candidate in candidates {
            if selected.len() >= self.max_matches {
                break;
            }
            if let Some(label) = self.best_label(candidate) {
                if !selected.contains(&label) {
                    selected.push(label);
                }
            }
        }
        selected
    }

    /// Map a single candidate onto its canonical label, if any is close
    /// enough
    pub fn match_one(&self, candidate: &str) -> Option<String> {
        self.best_label(candidate)
    }

    fn best_label(&self, candidate: &str) -> Option<String> {
        let candidate = candidate.trim().to_lowercase();
        if candidate.is_empty() {
            return None;
        }

        let mut best: Option<(f64, &str)> = None;
        for label in self.vocabulary.labels() {
            let lowered = label.to_lowercase();
            let mut score = sequence_ratio(&candidate, &lowered);
            if let Some(stripped) = strip_parenthetical(&lowered) {
                score = score.max(sequence_ratio(&candidate, stripped));
            }
            // Strict comparison keeps the earlier label on ties, so canonical
            // order breaks them
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, label));
            }
        }

        best.filter(|(score, _)| *score >= self.threshold)
            .map(|(_, label)| label.to_string())
    }
}

/// The label text without its trailing parenthetical annotation, if it has
/// one
fn strip_parenthetical(label: &str) -> Option<&str> {
    if !label.trim_end().ends_with(')') {
        return None;
    }
    let open = label.rfind('(')?;
    let head = label[..open].trim_end();
    if head.is_empty() {
        None
    } else {
        Some(head)
    }
}

/// Similarity of two strings as 2*M/T over matching character blocks
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Total characters covered by the matching blocks: take the longest common
/// contiguous block, then recurse on the pieces to its left and right
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block; the earliest one wins ties
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                current[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = current;
    }
    best
}
