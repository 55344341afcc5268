//! Transcript Chunking
//!
//! Speech recognition delivers a stream of final phrases. This module groups
//! them into teaching utterances: a chunk is released as soon as a phrase
//! ends a sentence or the chunk grows long, and otherwise after a pause.

use std::time::Duration;

/// Pause after which a pending chunk is treated as a finished thought.
pub const DEFAULT_SILENCE: Duration = Duration::from_millis(1200);
/// A pending chunk longer than this is released without waiting.
pub const EAGER_FLUSH_CHARS: usize = 100;
/// Leftover speech at the end of a recording must be longer than this.
pub const MIN_LEFTOVER_CHARS: usize = 10;

/// When the pending chunk should be handed to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushHint {
    Immediate,
    AfterSilence,
}

#[derive(Debug, Default, Clone)]
pub struct TranscriptChunker {
    pending: String,
}

impl TranscriptChunker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a final phrase and reports when the chunk should be flushed.
    pub fn push_final(&mut self, phrase: &str) -> FlushHint {
        let phrase = phrase.trim();
        if !phrase.is_empty() {
            if !self.pending.is_empty() {
                self.pending.push(' ');
            }
            self.pending.push_str(phrase);
        }

        let ends_sentence = phrase.ends_with(['.', '!', '?', ')']);
        if ends_sentence || self.pending.chars().count() > EAGER_FLUSH_CHARS {
            FlushHint::Immediate
        } else {
            FlushHint::AfterSilence
        }
    }

    /// Takes the pending chunk, if there is one.
    pub fn take(&mut self) -> Option<String> {
        let chunk = std::mem::take(&mut self.pending);
        let chunk = chunk.trim();
        (!chunk.is_empty()).then(|| chunk.to_string())
    }

    /// The live transcript: pending text followed by the interim phrase.
    pub fn display(&self, interim: &str) -> String {
        [self.pending.as_str(), interim.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Drains the chunk when recording stops; short leftovers are dropped.
    pub fn finish(&mut self) -> Option<String> {
        self.take()
            .filter(|chunk| chunk.chars().count() > MIN_LEFTOVER_CHARS)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_end_flushes_immediately() {
        let mut chunker = TranscriptChunker::new();
        assert_eq!(chunker.push_final("Torque is a turning force."), FlushHint::Immediate);
        assert_eq!(chunker.push_final("Is that clear?"), FlushHint::Immediate);
        assert_eq!(chunker.push_final("see the figure (page 4)"), FlushHint::Immediate);
    }

    #[test]
    fn test_open_phrase_waits_for_silence() {
        let mut chunker = TranscriptChunker::new();
        assert_eq!(chunker.push_final("so the moment of inertia"), FlushHint::AfterSilence);
        assert_eq!(chunker.push_final("  depends on mass  "), FlushHint::AfterSilence);
        assert_eq!(
            chunker.take().as_deref(),
            Some("so the moment of inertia depends on mass")
        );
        assert!(chunker.take().is_none());
    }

    #[test]
    fn test_long_chunk_flushes_immediately() {
        let mut chunker = TranscriptChunker::new();
        let phrase = "and this keeps going without any punctuation at all";
        assert_eq!(chunker.push_final(phrase), FlushHint::AfterSilence);
        assert_eq!(chunker.push_final(phrase), FlushHint::Immediate);
    }

    #[test]
    fn test_display_joins_pending_and_interim() {
        let mut chunker = TranscriptChunker::new();
        assert_eq!(chunker.display("  hello "), "hello");
        chunker.push_final("angular momentum");
        assert_eq!(chunker.display("is conserved"), "angular momentum is conserved");
        assert_eq!(chunker.display(""), "angular momentum");
    }

    #[test]
    fn test_finish_drops_short_leftovers() {
        let mut chunker = TranscriptChunker::new();
        chunker.push_final("and so");
        assert!(chunker.finish().is_none());
        assert!(chunker.is_empty());

        chunker.push_final("and so the wave travels");
        assert_eq!(chunker.finish().as_deref(), Some("and so the wave travels"));
    }
}
