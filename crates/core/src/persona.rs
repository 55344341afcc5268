//! Simulated Students
//!
//! Every persona is plain data: identity, voice, subject affinity and the
//! question templates it draws from. Adding a student is a table change.

use crate::subject::Subject;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Voice tag handed to the text-to-speech layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoiceType {
    FemaleHigh,
    MaleDeep,
    FemaleMedium,
    MaleMedium,
    FemaleSoft,
    MaleEnergetic,
    FemaleCalm,
    MaleQuick,
}

/// Speech synthesis parameters suggested for a voice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prosody {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl VoiceType {
    pub fn as_str(self) -> &'static str {
        match self {
            VoiceType::FemaleHigh => "female-high",
            VoiceType::MaleDeep => "male-deep",
            VoiceType::FemaleMedium => "female-medium",
            VoiceType::MaleMedium => "male-medium",
            VoiceType::FemaleSoft => "female-soft",
            VoiceType::MaleEnergetic => "male-energetic",
            VoiceType::FemaleCalm => "female-calm",
            VoiceType::MaleQuick => "male-quick",
        }
    }

    /// Rate and volume are shared by every student; only the two extreme
    /// voices shift pitch.
    pub fn prosody(self) -> Prosody {
        let pitch = match self {
            VoiceType::FemaleHigh => 1.2,
            VoiceType::MaleDeep => 0.8,
            _ => 1.0,
        };
        Prosody {
            rate: 0.9,
            pitch,
            volume: 0.8,
        }
    }
}

impl fmt::Display for VoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra templates a persona uses when the lesson is in a particular subject.
#[derive(Debug, Clone, Copy)]
pub struct Specialization {
    pub subject: Subject,
    pub questions: &'static [&'static str],
}

/// A simulated student.
#[derive(Debug, Clone, Copy)]
pub struct Persona {
    pub name: &'static str,
    pub personality: &'static str,
    pub learning_style: &'static str,
    pub avatar: &'static str,
    pub voice: VoiceType,
    pub preferred_subject: Subject,
    /// Questions this student may ask in any lesson.
    pub questions: &'static [&'static str],
    pub specialization: Option<Specialization>,
}

impl Persona {
    /// Templates specific to `subject`, if this persona specializes in it.
    pub fn specialized_questions(&self, subject: Option<Subject>) -> &'static [&'static str] {
        match (self.specialization, subject) {
            (Some(spec), Some(subject)) if spec.subject == subject => spec.questions,
            _ => &[],
        }
    }
}

/// The classroom roster, in seating order.
pub static PERSONAS: &[Persona] = &[
    Persona {
        name: "Priya",
        personality: "curious and detail-oriented",
        learning_style: "asks for examples and real-world applications",
        avatar: "👩‍🎓",
        voice: VoiceType::FemaleHigh,
        preferred_subject: Subject::Mathematics,
        questions: &[
            "Sir, can you show us the JEE-level application of this concept?",
            "How does this appear in JEE Main vs JEE Advanced questions?",
            "Sir, what's the step-by-step approach for solving such problems in exams?",
            "Can you give us a previous year JEE question on this topic?",
        ],
        specialization: Some(Specialization {
            subject: Subject::Physics,
            questions: &[
                "Sir, what are the dimensional analysis tricks for this concept?",
                "How do we handle approximations in numerical problems?",
                "What graph-based questions can come from this topic?",
            ],
        }),
    },
    Persona {
        name: "Arjun",
        personality: "analytical and sometimes skeptical",
        learning_style: "questions concepts and asks for proofs",
        avatar: "👨‍🎓",
        voice: VoiceType::MaleDeep,
        preferred_subject: Subject::Physics,
        questions: &[
            "Sir, I want to understand the deeper physics/mathematics behind this.",
            "Can you prove why this formula works?",
            "What are the assumptions we're making here?",
            "Sir, what happens at the boundary conditions?",
        ],
        specialization: Some(Specialization {
            subject: Subject::Mathematics,
            questions: &[
                "Can this be generalized to higher dimensions?",
                "What's the geometric interpretation of this result?",
                "Sir, how does this connect to advanced topics?",
            ],
        }),
    },
    Persona {
        name: "Sneha",
        personality: "enthusiastic and collaborative",
        learning_style: "relates concepts to daily life",
        avatar: "👩‍💻",
        voice: VoiceType::FemaleMedium,
        preferred_subject: Subject::Chemistry,
        questions: &[
            "Sir, where do we see this concept in real life?",
            "Can we design an experiment to verify this?",
            "How is this used in modern technology?",
            "Sir, which industries use this principle the most?",
        ],
        specialization: Some(Specialization {
            subject: Subject::Chemistry,
            questions: &[
                "What happens if we change the reaction conditions?",
                "Sir, can you show us the molecular-level picture?",
                "How does this reaction compare to similar ones?",
            ],
        }),
    },
    Persona {
        name: "Rohit",
        personality: "methodical and precise",
        learning_style: "focuses on problem-solving techniques",
        avatar: "👨‍💻",
        voice: VoiceType::MaleMedium,
        preferred_subject: Subject::Mathematics,
        questions: &[
            "Sir, what's the fastest method to solve this in JEE?",
            "Are there any shortcut formulas for this topic?",
            "How do we recognize this pattern in complex problems?",
            "Sir, what's the time management strategy for such questions?",
        ],
        specialization: Some(Specialization {
            subject: Subject::Physics,
            questions: &[
                "Can we use energy methods instead of force analysis?",
                "Sir, what's the dimensional reasoning approach here?",
                "Which approximations save time in calculations?",
            ],
        }),
    },
    Persona {
        name: "Ananya",
        personality: "creative and imaginative",
        learning_style: "visualizes concepts through diagrams",
        avatar: "👩‍🔬",
        voice: VoiceType::FemaleSoft,
        preferred_subject: Subject::Physics,
        questions: &[
            "Sir, can you draw the physical situation?",
            "How do we visualize this mathematically?",
            "Can you show us the graphical representation?",
            "Sir, what does this look like in 3D space?",
        ],
        specialization: Some(Specialization {
            subject: Subject::Mathematics,
            questions: &[
                "Can we plot this function to understand better?",
                "Sir, what's the geometric meaning of this equation?",
                "How does this transformation affect the graph?",
            ],
        }),
    },
    Persona {
        name: "Karthik",
        personality: "competitive and goal-oriented",
        learning_style: "compares with previous year questions",
        avatar: "👨‍🔬",
        voice: VoiceType::MaleEnergetic,
        preferred_subject: Subject::Chemistry,
        questions: &[
            "Sir, how frequently does this topic appear in JEE Advanced?",
            "What's the difficulty level of questions from this chapter?",
            "Can you give us the toughest possible question on this?",
            "Sir, what makes a good student excel in this topic?",
        ],
        specialization: Some(Specialization {
            subject: Subject::Chemistry,
            questions: &[
                "Which coaching centers emphasize this topic the most?",
                "Sir, what are the common misconceptions here?",
                "How do top rankers approach such problems?",
            ],
        }),
    },
    Persona {
        name: "Divya",
        personality: "patient and thorough",
        learning_style: "breaks down complex problems step by step",
        avatar: "👩‍🏫",
        voice: VoiceType::FemaleCalm,
        preferred_subject: Subject::Mathematics,
        questions: &[
            "Sir, can you break this into smaller logical steps?",
            "Let me make sure I understand each part correctly.",
            "What should be our systematic approach to such problems?",
            "Sir, can you give us a checklist for solving these questions?",
        ],
        specialization: Some(Specialization {
            subject: Subject::Mathematics,
            questions: &[
                "What are the prerequisites for understanding this?",
                "Sir, how do we avoid calculation errors here?",
                "Can you explain the logic behind each step?",
            ],
        }),
    },
    Persona {
        name: "Varun",
        personality: "quick learner but sometimes overconfident",
        learning_style: "jumps to conclusions, needs corrections",
        avatar: "👨‍🎯",
        voice: VoiceType::MaleQuick,
        preferred_subject: Subject::Physics,
        questions: &[
            "Sir, I think I know this but I'm getting confused with the details.",
            "Wait, this looks similar to what we did last week, right?",
            "I remember solving something like this, but my method was different.",
            "Sir, can you check if this alternative approach works?",
            "This concept seems straightforward, but the problems are tricky!",
        ],
        specialization: Some(Specialization {
            subject: Subject::Physics,
            questions: &[
                "Sir, I used conservation of energy, but got a different answer.",
                "Can we solve this using Newton's laws instead?",
                "I think there's a sign error in my calculation.",
            ],
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roster_names_are_unique() {
        let names: HashSet<_> = PERSONAS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), PERSONAS.len());
        assert_eq!(PERSONAS.len(), 8);
    }

    #[test]
    fn test_every_persona_has_questions() {
        for persona in PERSONAS {
            assert!(
                (3..=5).contains(&persona.questions.len()),
                "{} has {} questions",
                persona.name,
                persona.questions.len()
            );
        }
    }

    #[test]
    fn test_every_subject_has_a_preferring_persona() {
        for subject in Subject::ALL {
            assert!(PERSONAS.iter().any(|p| p.preferred_subject == subject));
        }
    }

    #[test]
    fn test_specialized_questions_only_for_matching_subject() {
        let priya = &PERSONAS[0];
        assert_eq!(priya.specialized_questions(Some(Subject::Physics)).len(), 3);
        assert!(priya.specialized_questions(Some(Subject::Chemistry)).is_empty());
        assert!(priya.specialized_questions(None).is_empty());
    }

    #[test]
    fn test_voice_type_serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&VoiceType::MaleEnergetic).unwrap(),
            "\"male-energetic\""
        );
        for persona in PERSONAS {
            let json = serde_json::to_string(&persona.voice).unwrap();
            assert_eq!(json, format!("\"{}\"", persona.voice));
        }
    }

    #[test]
    fn test_prosody_pitch_per_voice() {
        assert_eq!(VoiceType::FemaleHigh.prosody().pitch, 1.2);
        assert_eq!(VoiceType::MaleDeep.prosody().pitch, 0.8);
        let calm = VoiceType::FemaleCalm.prosody();
        assert_eq!(calm.pitch, 1.0);
        assert_eq!(calm.rate, 0.9);
        assert_eq!(calm.volume, 0.8);
    }
}
