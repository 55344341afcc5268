//! Response Selection
//!
//! Decides whether a teacher utterance deserves a reaction and, if so, which
//! students speak and what they ask. The selector is a pure function of its
//! inputs and the injected `RandomSource`: no I/O, no logging, no failure
//! modes. Unknown subjects simply contribute no subject data.

use crate::{
    curriculum::{CurriculumService, StaticCurriculum},
    persona::{PERSONAS, Persona, VoiceType},
    random::RandomSource,
    subject::Subject,
};
use serde::Serialize;

/// Filler phrases that never warrant a question on their own.
pub const GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "good morning",
    "good afternoon",
    "good evening",
    "welcome",
    "let me",
    "las",
    "okay",
    "ok",
    "yes",
    "no",
    "right",
    "correct",
];

/// Utterances shorter than this (in characters) are ignored.
pub const MIN_UTTERANCE_CHARS: usize = 10;
/// Below this length, containing a greeting is enough to be ignored.
pub const GREETING_WINDOW_CHARS: usize = 20;
/// Utterances without any curriculum match must be at least this long.
pub const TOPICLESS_MIN_CHARS: usize = 30;
/// A student outside the lesson's subject joins when a draw exceeds this.
pub const CROSS_SUBJECT_THRESHOLD: f64 = 0.7;

/// Tunables for [`ResponseSelector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    pub min_utterance_chars: usize,
    pub greeting_window_chars: usize,
    pub topicless_min_chars: usize,
    pub cross_subject_threshold: f64,
    /// Smallest batch drawn before capping at the pool size.
    pub min_responses: usize,
    pub max_responses: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_utterance_chars: MIN_UTTERANCE_CHARS,
            greeting_window_chars: GREETING_WINDOW_CHARS,
            topicless_min_chars: TOPICLESS_MIN_CHARS,
            cross_subject_threshold: CROSS_SUBJECT_THRESHOLD,
            min_responses: 2,
            max_responses: 3,
        }
    }
}

impl SelectorConfig {
    /// A quieter classroom: one or two students per utterance.
    pub fn compact() -> Self {
        Self {
            min_responses: 1,
            max_responses: 2,
            ..Self::default()
        }
    }
}

/// One student's reaction to an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub content: String,
    pub student_name: &'static str,
    pub avatar: &'static str,
    pub voice_type: VoiceType,
}

/// Every template `persona` may answer with.
///
/// When a topic was matched, the subject's question frames come first with
/// the topic filled in, followed by the persona's own questions and finally
/// its subject specialization.
pub fn candidate_templates(
    persona: &Persona,
    subject: Option<Subject>,
    topic: Option<&str>,
) -> Vec<String> {
    let mut templates = Vec::new();
    if let (Some(subject), Some(topic)) = (subject, topic) {
        templates.extend(
            subject
                .topic_frames()
                .iter()
                .map(|frame| frame.replace("{topic}", topic)),
        );
    }
    templates.extend(persona.questions.iter().map(|q| q.to_string()));
    templates.extend(
        persona
            .specialized_questions(subject)
            .iter()
            .map(|q| q.to_string()),
    );
    templates
}

/// Picks which students react to an utterance and what they say.
pub struct ResponseSelector<R, C = StaticCurriculum> {
    config: SelectorConfig,
    curriculum: C,
    personas: &'static [Persona],
    rng: R,
}

impl<R: RandomSource> ResponseSelector<R> {
    /// A selector over the built-in curriculum and roster.
    pub fn new(rng: R) -> Self {
        Self::with_parts(SelectorConfig::default(), StaticCurriculum, PERSONAS, rng)
    }
}

impl<R: RandomSource, C: CurriculumService> ResponseSelector<R, C> {
    pub fn with_parts(
        config: SelectorConfig,
        curriculum: C,
        personas: &'static [Persona],
        rng: R,
    ) -> Self {
        Self {
            config,
            curriculum,
            personas,
            rng,
        }
    }

    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn curriculum(&self) -> &C {
        &self.curriculum
    }

    /// Produces the batch of student responses for one utterance.
    ///
    /// Returns an empty batch for filler speech, very short input, and short
    /// input that mentions nothing from the curriculum.
    pub fn generate_responses(&mut self, utterance: &str, subject: &str) -> Vec<StudentResponse> {
        let subject = Subject::from_key(subject);
        let normalized = utterance.trim().to_lowercase();
        let length = normalized.chars().count();

        if self.is_filler(&normalized, length) {
            return Vec::new();
        }

        let topics = self.curriculum.find_relevant_topics(utterance, subject);
        if topics.is_empty() && length < self.config.topicless_min_chars {
            return Vec::new();
        }

        let students = self.select_students(subject);
        let first_topic = topics.first().copied();

        let mut responses = Vec::with_capacity(students.len());
        for persona in students {
            let mut templates = candidate_templates(persona, subject, first_topic);
            if templates.is_empty() {
                continue;
            }
            let pick = self.rng.next_index(templates.len());
            responses.push(StudentResponse {
                content: templates.swap_remove(pick),
                student_name: persona.name,
                avatar: persona.avatar,
                voice_type: persona.voice,
            });
        }
        responses
    }

    fn is_filler(&self, normalized: &str, length: usize) -> bool {
        let greeting = GREETINGS.iter().any(|greeting| {
            normalized == *greeting
                || (normalized.contains(greeting) && length < self.config.greeting_window_chars)
        });
        greeting || length < self.config.min_utterance_chars
    }

    /// Students of the lesson's subject come first, followed by any others
    /// whose independent draw exceeded the threshold. The batch is the first
    /// `count` of that pool.
    fn select_students(&mut self, subject: Option<Subject>) -> Vec<&'static Persona> {
        let personas = self.personas;
        let mut pool: Vec<&'static Persona> = Vec::with_capacity(personas.len());
        let mut drawn = Vec::new();
        for persona in personas {
            if Some(persona.preferred_subject) == subject {
                pool.push(persona);
            } else if self.rng.next_unit() > self.config.cross_subject_threshold {
                drawn.push(persona);
            }
        }
        pool.extend(drawn);

        let min = self.config.min_responses;
        let span = self.config.max_responses.saturating_sub(min) + 1;
        let count = (min + self.rng.next_index(span)).min(pool.len());
        pool.truncate(count);
        pool
    }
}
