use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The subjects taught in the classroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Physics,
    Chemistry,
    Mathematics,
}

/// Returned when a subject key does not name a known subject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown subject: '{0}'")]
pub struct UnknownSubject(pub String);

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Mathematics];

    /// The lowercase key used by callers to select a subject.
    pub fn key(self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Mathematics => "mathematics",
        }
    }

    /// Looks up a subject by key, ignoring case and surrounding whitespace.
    ///
    /// Unknown keys yield `None`; the selector treats that as "no subject data".
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|subject| subject.key().eq_ignore_ascii_case(key))
    }

    /// Question frames used when a curriculum topic was matched. `{topic}` is
    /// replaced with the first matched topic.
    pub fn topic_frames(self) -> &'static [&'static str] {
        match self {
            Subject::Physics => &[
                "Sir, in JEE questions on {topic}, what are the most common mistakes students make?",
                "Can you explain the relationship between {topic} and the other physics concepts we've studied?",
                "Sir, how do we approach problems where {topic} is combined with other topics?",
                "What are the typical numerical ranges for {topic} in JEE Advanced questions?",
            ],
            Subject::Chemistry => &[
                "Sir, what are the exceptions to the rule in {topic} that often appear in JEE?",
                "How does {topic} connect to organic reactions we studied earlier?",
                "Sir, can you give us a mechanism-based question on {topic}?",
                "What industrial applications of {topic} are frequently asked in JEE?",
            ],
            Subject::Mathematics => &[
                "Sir, what's the most elegant way to solve {topic} problems in JEE?",
                "Can {topic} be solved using multiple methods? Which is fastest?",
                "Sir, how do we identify when to use {topic} in coordinate geometry problems?",
                "What are the common integration tricks for {topic}?",
            ],
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownSubject(s.to_string()))
    }
}
