//! Curriculum Tables
//!
//! This module holds the static JEE curriculum used to recognise what the
//! teacher is talking about. Each subject is broken into ordered chapters,
//! and each chapter carries two ordered lists: the topic titles shown in the
//! lesson plan and the shorter concept keywords that students react to.

use crate::subject::Subject;
use serde::Serialize;

/// How demanding a chapter is considered to be in the lesson plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single chapter of a subject.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Chapter {
    /// Stable lookup key (e.g. `"mechanics"`).
    pub key: &'static str,
    /// Display name (e.g. `"Mechanics"`).
    pub name: &'static str,
    pub difficulty: Difficulty,
    /// Approximate share of the exam, in percent.
    pub exam_weight: u8,
    /// Topic titles, in lesson-plan order.
    pub topics: &'static [&'static str],
    /// Concept keywords matched against the teacher's speech.
    pub concepts: &'static [&'static str],
}

/// Returned when a chapter key is not part of a subject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown chapter '{chapter}' for subject '{subject}'")]
pub struct UnknownChapter {
    pub subject: Subject,
    pub chapter: String,
}

/// Defines the contract for any source of curriculum data.
///
/// The selector only needs ordered chapters per subject; the matching logic
/// is shared through the provided methods.
pub trait CurriculumService: Send + Sync {
    /// Returns the chapters of a subject, in curriculum order.
    fn chapters(&self, subject: Subject) -> &[Chapter];

    /// Looks up a chapter by key.
    fn chapter(&self, subject: Subject, key: &str) -> Result<&Chapter, UnknownChapter> {
        self.chapters(subject)
            .iter()
            .find(|chapter| chapter.key == key)
            .ok_or_else(|| UnknownChapter {
                subject,
                chapter: key.to_string(),
            })
    }

    /// Collects every concept keyword and topic title occurring in `utterance`.
    ///
    /// Matching is a case-insensitive substring test. For each chapter the
    /// concepts are scanned before the topics. Order is preserved and repeats
    /// are kept. A missing subject yields no matches.
    fn find_relevant_topics(&self, utterance: &str, subject: Option<Subject>) -> Vec<&'static str> {
        let Some(subject) = subject else {
            return Vec::new();
        };
        let utterance = utterance.to_lowercase();

        let mut matched = Vec::new();
        for chapter in self.chapters(subject) {
            for candidate in chapter.concepts.iter().chain(chapter.topics) {
                if utterance.contains(&candidate.to_lowercase()) {
                    matched.push(*candidate);
                }
            }
        }
        matched
    }
}

/// The built-in JEE curriculum.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCurriculum;

impl CurriculumService for StaticCurriculum {
    fn chapters(&self, subject: Subject) -> &[Chapter] {
        match subject {
            Subject::Physics => PHYSICS,
            Subject::Chemistry => CHEMISTRY,
            Subject::Mathematics => MATHEMATICS,
        }
    }
}

static PHYSICS: &[Chapter] = &[
    Chapter {
        key: "general",
        name: "General Physics",
        difficulty: Difficulty::Easy,
        exam_weight: 5,
        topics: &[
            "Units and Dimensions",
            "Physical Quantities",
            "SI Units",
            "Measurement of error",
            "Significant figures",
            "Error analysis",
            "Experiments",
        ],
        concepts: &[
            "unit",
            "dimension",
            "error",
            "significant figures",
            "measurement",
            "precision",
            "accuracy",
        ],
    },
    Chapter {
        key: "mechanics",
        name: "Mechanics",
        difficulty: Difficulty::Medium,
        exam_weight: 25,
        topics: &[
            "Kinematics (1D and 2D motion, projectiles)",
            "Laws of Motion (Newton's laws, friction, circular motion)",
            "Work, Energy and Power",
            "System of Particles and Rotational Motion",
            "Centre of mass, motion of COM",
            "Torque, Angular momentum",
            "Rigid body dynamics, Moment of inertia, Rolling motion",
            "Gravitation (Newton's law, satellites, escape velocity, orbital velocity, Kepler's laws)",
        ],
        concepts: &[
            "displacement",
            "velocity",
            "acceleration",
            "force",
            "momentum",
            "energy",
            "angular velocity",
            "torque",
            "gravity",
            "friction",
            "projectile",
            "circular motion",
            "work",
            "power",
            "moment of inertia",
            "centre of mass",
            "escape velocity",
            "orbital velocity",
        ],
    },
    Chapter {
        key: "properties_matter_thermodynamics",
        name: "Properties of Matter and Thermodynamics",
        difficulty: Difficulty::Hard,
        exam_weight: 20,
        topics: &[
            "Mechanical Properties of Solids (stress, strain, elastic modulus, Hooke's law)",
            "Mechanical Properties of Fluids (pressure, Pascal's law, Archimedes' principle, viscosity, surface tension)",
            "Thermal Properties of Matter (heat transfer, calorimetry, expansion of solids/liquids/gases)",
            "Thermodynamics (first law, second law, entropy, heat engines)",
            "Kinetic Theory of Gases (equipartition, RMS velocity, mean free path)",
        ],
        concepts: &[
            "stress",
            "strain",
            "elasticity",
            "pressure",
            "buoyancy",
            "viscosity",
            "surface tension",
            "heat",
            "temperature",
            "thermal expansion",
            "entropy",
            "heat engine",
            "kinetic theory",
            "ideal gas",
            "PV diagram",
        ],
    },
    Chapter {
        key: "oscillations_waves",
        name: "Oscillations and Waves",
        difficulty: Difficulty::Medium,
        exam_weight: 15,
        topics: &[
            "Simple Harmonic Motion (equations, energy, superposition)",
            "Damped and Forced oscillations, Resonance",
            "Waves (sound waves, Doppler effect, beats, standing waves, organ pipes)",
        ],
        concepts: &[
            "oscillation",
            "frequency",
            "amplitude",
            "phase",
            "resonance",
            "wave",
            "wavelength",
            "doppler effect",
            "interference",
            "beats",
            "standing wave",
        ],
    },
    Chapter {
        key: "electrostatics_current",
        name: "Electrostatics & Current Electricity",
        difficulty: Difficulty::Hard,
        exam_weight: 20,
        topics: &[
            "Electrostatics (Coulomb's law, electric field, potential, Gauss law, capacitors)",
            "Current Electricity (Ohm's law, Kirchhoff's laws, cells, resistivity, Wheatstone bridge, potentiometer)",
        ],
        concepts: &[
            "electric charge",
            "electric field",
            "electric potential",
            "capacitance",
            "current",
            "resistance",
            "voltage",
            "power",
            "circuit",
            "ohm law",
            "kirchhoff law",
        ],
    },
    Chapter {
        key: "magnetism_induction",
        name: "Magnetism & Electromagnetic Induction",
        difficulty: Difficulty::Hard,
        exam_weight: 25,
        topics: &[
            "Magnetic Effects of Current (Biot–Savart law, Ampere's law)",
            "Earth's magnetism, Magnetic materials",
            "Moving charges in magnetic fields (Lorentz force, cyclotron)",
            "Electromagnetic Induction (Faraday's law, Lenz's law, self and mutual inductance)",
            "Alternating Current (LCR circuits, resonance, transformers)",
        ],
        concepts: &[
            "magnetic field",
            "magnetic force",
            "electromagnetic induction",
            "flux",
            "inductance",
            "AC",
            "transformer",
            "resonance",
            "impedance",
            "lorentz force",
        ],
    },
    Chapter {
        key: "electromagnetic_waves",
        name: "Electromagnetic Waves",
        difficulty: Difficulty::Medium,
        exam_weight: 5,
        topics: &[
            "Displacement current, Maxwell's equations (qualitative)",
            "EM spectrum",
        ],
        concepts: &[
            "electromagnetic wave",
            "maxwell equations",
            "electromagnetic spectrum",
            "radio waves",
            "microwaves",
            "infrared",
            "visible light",
            "ultraviolet",
            "x-rays",
            "gamma rays",
        ],
    },
    Chapter {
        key: "optics",
        name: "Optics",
        difficulty: Difficulty::Medium,
        exam_weight: 15,
        topics: &[
            "Ray Optics (reflection, refraction, lenses, mirrors, optical instruments, total internal reflection)",
            "Wave Optics (interference, diffraction, polarisation, Young's double-slit experiment)",
        ],
        concepts: &[
            "reflection",
            "refraction",
            "lens",
            "mirror",
            "focal length",
            "magnification",
            "interference",
            "diffraction",
            "polarization",
            "coherence",
        ],
    },
    Chapter {
        key: "modern_physics",
        name: "Modern Physics",
        difficulty: Difficulty::Hard,
        exam_weight: 10,
        topics: &[
            "Dual Nature of Matter and Radiation (photoelectric effect, de Broglie wavelength)",
            "Atoms (Bohr model, hydrogen spectrum)",
            "Nuclei (radioactivity, nuclear reactions, mass defect, binding energy)",
            "Semiconductor Electronics (diodes, transistors, logic gates)",
            "Communication Systems (JEE Main only, not in Advanced)",
        ],
        concepts: &[
            "photon",
            "electron",
            "photoelectric effect",
            "de broglie wavelength",
            "bohr model",
            "hydrogen spectrum",
            "nucleus",
            "radioactivity",
            "nuclear reaction",
            "semiconductor",
            "diode",
            "transistor",
        ],
    },
];

static CHEMISTRY: &[Chapter] = &[
    Chapter {
        key: "physical_chemistry",
        name: "Physical Chemistry",
        difficulty: Difficulty::Hard,
        exam_weight: 35,
        topics: &[
            "Some Basic Concepts of Chemistry (mole concept, stoichiometry, empirical formula)",
            "Atomic Structure (Bohr model, quantum numbers, electronic configuration)",
            "Chemical Bonding and Molecular Structure (VSEPR, hybridisation, MOT, bond energy)",
            "States of Matter (ideal gas, real gas, liquefaction, kinetic theory of gases)",
            "Chemical Thermodynamics (first, second laws, Gibbs free energy, spontaneity)",
            "Solutions (Raoult's law, colligative properties, Henry's law)",
            "Equilibrium (chemical equilibrium, ionic equilibrium, solubility product, buffer)",
            "Redox Reactions and Electrochemistry (Nernst equation, galvanic cells, electrolytic cells)",
            "Chemical Kinetics (order, molecularity, Arrhenius equation, rate laws)",
            "Surface Chemistry (adsorption, catalysis, colloids)",
        ],
        concepts: &[
            "mole",
            "stoichiometry",
            "atomic structure",
            "quantum numbers",
            "orbital",
            "bond",
            "hybridization",
            "gas laws",
            "enthalpy",
            "entropy",
            "gibbs energy",
            "equilibrium",
            "pH",
            "buffer",
            "redox",
            "electrochemistry",
            "kinetics",
            "catalyst",
            "adsorption",
        ],
    },
    Chapter {
        key: "inorganic_chemistry",
        name: "Inorganic Chemistry",
        difficulty: Difficulty::Medium,
        exam_weight: 25,
        topics: &[
            "Periodic Table & Periodicity in Properties",
            "Hydrogen and its Compounds",
            "s-Block Element (alkali and alkaline earth metals)",
            "p-Block Elements (Groups 13–18, including oxides, halides, allotropes)",
            "d-Block Elements (transition metals, their compounds, color, catalytic properties)",
            "f-Block Elements (lanthanides, actinides)",
            "Coordination Compounds (VBT, CFT, isomerism, stability)",
            "Environmental Chemistry",
            "General Principles & Processes of Isolation of Metals",
        ],
        concepts: &[
            "periodic table",
            "periodicity",
            "alkali metals",
            "alkaline earth metals",
            "halogens",
            "noble gases",
            "transition metals",
            "lanthanides",
            "actinides",
            "coordination compound",
            "ligand",
            "crystal field theory",
            "metallurgy",
        ],
    },
    Chapter {
        key: "organic_chemistry",
        name: "Organic Chemistry",
        difficulty: Difficulty::Medium,
        exam_weight: 40,
        topics: &[
            "General Organic Chemistry (GOC) — nomenclature, hybridisation, resonance, inductive effect, mesomeric effect, hyperconjugation",
            "Isomerism (structural, geometrical, optical, conformational)",
            "Hydrocarbons: Alkanes, Alkenes, Alkynes (preparation, properties, reactions)",
            "Aromatic Compounds (benzene, electrophilic substitution, Huckel's rule)",
            "Organic Compounds with Functional Groups: Alcohols, Phenols, Ethers",
            "Aldehydes, Ketones, Carboxylic Acids and Derivatives",
            "Amines and Diazonium salts",
            "Haloalkanes and Haloarenes",
            "Polymers (addition, condensation, copolymers, natural & synthetic polymers)",
            "Biomolecules (proteins, carbohydrates, nucleic acids, vitamins)",
            "Chemistry in Everyday Life (drugs, soaps, detergents, dyes)",
        ],
        concepts: &[
            "organic chemistry",
            "nomenclature",
            "isomerism",
            "alkane",
            "alkene",
            "alkyne",
            "aromatic",
            "benzene",
            "functional group",
            "alcohol",
            "aldehyde",
            "ketone",
            "carboxylic acid",
            "amine",
            "polymer",
            "protein",
            "carbohydrate",
            "DNA",
            "RNA",
        ],
    },
];

static MATHEMATICS: &[Chapter] = &[
    Chapter {
        key: "algebra",
        name: "Algebra",
        difficulty: Difficulty::Medium,
        exam_weight: 25,
        topics: &[
            "Sets, Relations, Functions",
            "Complex Numbers (properties, De Moivre's theorem, quadratic equations)",
            "Matrices and Determinants",
            "Permutations and Combinations",
            "Binomial Theorem and Applications",
            "Sequences and Series (AP, GP, HP, special series, sums of squares/cubes)",
            "Mathematical Induction",
            "Logarithms",
        ],
        concepts: &[
            "set",
            "relation",
            "function",
            "complex number",
            "matrix",
            "determinant",
            "permutation",
            "combination",
            "binomial theorem",
            "sequence",
            "series",
            "arithmetic progression",
            "geometric progression",
            "induction",
            "logarithm",
        ],
    },
    Chapter {
        key: "trigonometry",
        name: "Trigonometry",
        difficulty: Difficulty::Easy,
        exam_weight: 10,
        topics: &[
            "Trigonometric Ratios and Identities",
            "Trigonometric Equations",
            "Inverse Trigonometric Functions",
            "Properties of Triangles",
            "Heights and Distances",
        ],
        concepts: &[
            "sine",
            "cosine",
            "tangent",
            "trigonometric identity",
            "trigonometric equation",
            "inverse trigonometric function",
            "triangle",
            "height",
            "distance",
            "angle of elevation",
            "angle of depression",
        ],
    },
    Chapter {
        key: "calculus",
        name: "Calculus",
        difficulty: Difficulty::Hard,
        exam_weight: 35,
        topics: &[
            "Limits, Continuity, Differentiability",
            "Differentiation and Applications (tangents, normals, maxima/minima, monotonicity, Rolle's theorem, Mean Value Theorem)",
            "Indefinite Integrals (methods of integration)",
            "Definite Integrals (properties, applications, area under curves)",
            "Differential Equations (formation, first order and first degree, linear DE, separation of variables)",
        ],
        concepts: &[
            "limit",
            "continuity",
            "derivative",
            "differentiation",
            "integration",
            "maxima",
            "minima",
            "tangent",
            "normal",
            "area under curve",
            "differential equation",
        ],
    },
    Chapter {
        key: "coordinate_geometry",
        name: "Coordinate Geometry",
        difficulty: Difficulty::Medium,
        exam_weight: 25,
        topics: &[
            "Straight Lines, Circles, Parabola, Ellipse, Hyperbola",
            "Conic Sections in general",
            "3D Geometry: direction cosines, equations of line and plane, distance formula, angle between lines/planes",
        ],
        concepts: &[
            "coordinate",
            "straight line",
            "circle",
            "parabola",
            "ellipse",
            "hyperbola",
            "conic section",
            "distance formula",
            "direction cosine",
            "equation of plane",
        ],
    },
    Chapter {
        key: "vector_algebra",
        name: "Vector Algebra",
        difficulty: Difficulty::Medium,
        exam_weight: 5,
        topics: &["Addition, scalar product, vector product, scalar triple product"],
        concepts: &[
            "vector",
            "scalar product",
            "dot product",
            "vector product",
            "cross product",
            "scalar triple product",
        ],
    },
    Chapter {
        key: "probability_statistics",
        name: "Probability & Statistics",
        difficulty: Difficulty::Medium,
        exam_weight: 8,
        topics: &[
            "Probability (conditional probability, Bayes' theorem, binomial distribution)",
            "Statistics (mean, median, mode, variance, standard deviation)",
        ],
        concepts: &[
            "probability",
            "conditional probability",
            "bayes theorem",
            "binomial distribution",
            "mean",
            "median",
            "mode",
            "variance",
            "standard deviation",
        ],
    },
    Chapter {
        key: "mathematical_reasoning",
        name: "Mathematical Reasoning",
        difficulty: Difficulty::Easy,
        exam_weight: 2,
        topics: &["Statements, logical connectives, truth tables, implications, validity"],
        concepts: &[
            "statement",
            "logical connective",
            "truth table",
            "implication",
            "validity",
            "negation",
            "conjunction",
            "disjunction",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subject_has_chapters() {
        let curriculum = StaticCurriculum;
        assert_eq!(curriculum.chapters(Subject::Physics).len(), 9);
        assert_eq!(curriculum.chapters(Subject::Chemistry).len(), 3);
        assert_eq!(curriculum.chapters(Subject::Mathematics).len(), 7);
    }

    #[test]
    fn test_chapter_lookup() {
        let curriculum = StaticCurriculum;
        let mechanics = curriculum.chapter(Subject::Physics, "mechanics").unwrap();
        assert_eq!(mechanics.name, "Mechanics");
        assert!(mechanics.concepts.contains(&"torque"));

        let err = curriculum.chapter(Subject::Chemistry, "mechanics").unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Unknown chapter 'mechanics' for subject 'chemistry'"
        );
    }

    #[test]
    fn test_matches_concept_case_insensitively() {
        let topics = StaticCurriculum.find_relevant_topics(
            "Today we study TORQUE about a fixed axis",
            Some(Subject::Physics),
        );
        assert!(topics.contains(&"torque"));
    }

    #[test]
    fn test_matches_mixed_case_keywords() {
        // "pH" and "PV diagram" are stored with capitals.
        let chemistry = StaticCurriculum.find_relevant_topics(
            "the ph of a buffer solution",
            Some(Subject::Chemistry),
        );
        assert!(chemistry.contains(&"pH"));
        assert!(chemistry.contains(&"buffer"));

        let physics = StaticCurriculum
            .find_relevant_topics("draw the pv diagram first", Some(Subject::Physics));
        assert!(physics.contains(&"PV diagram"));
    }

    #[test]
    fn test_match_order_and_repeats_are_preserved() {
        // "power" appears in both mechanics and electrostatics; both are kept,
        // and within mechanics concepts come before topics.
        let topics = StaticCurriculum.find_relevant_topics(
            "work, energy and power are linked",
            Some(Subject::Physics),
        );
        assert_eq!(
            topics,
            vec!["energy", "work", "power", "Work, Energy and Power", "power"]
        );
    }

    #[test]
    fn test_missing_subject_matches_nothing() {
        let topics = StaticCurriculum.find_relevant_topics("torque and momentum", None);
        assert!(topics.is_empty());
    }

    #[test]
    fn test_unrelated_utterance_matches_nothing() {
        let topics = StaticCurriculum.find_relevant_topics(
            "let us take a short break before lunch",
            Some(Subject::Mathematics),
        );
        assert!(topics.is_empty());
    }
}
