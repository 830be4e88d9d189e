//! Symptom and condition vocabularies shared by training and inference.

pub mod encoder;
pub mod suggest;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed ordered set of symptom identifiers defining the feature schema.
///
/// Index position is the feature-vector slot. Order carries no meaning
/// beyond stable indexing, but it must survive persistence unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomVocabulary {
    entries: Vec<String>,
}

impl SymptomVocabulary {
    /// Build the schema from dataset column headers, in their given order.
    pub fn from_columns(columns: Vec<String>) -> Self {
        Self { entries: columns }
    }

    /// Static fallback used when no trained artifact is available.
    pub fn fallback() -> Self {
        Self {
            entries: FALLBACK_SYMPTOMS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First `n` entries, in vocabulary order, for caller diagnostics.
    pub fn sample(&self, n: usize) -> Vec<String> {
        self.entries.iter().take(n).cloned().collect()
    }
}

/// Sorted unique condition labels; the code of a label is its index.
///
/// Enumeration is alphabetical so persisted codes stay valid across
/// reloads of the same dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseVocabulary {
    names: Vec<String>,
}

impl DiseaseVocabulary {
    /// Label-encode the observed labels: deterministic alphabetical codes
    /// plus the per-row code sequence.
    pub fn fit_transform(labels: &[String]) -> (Self, Vec<usize>) {
        let mut names = labels.to_vec();
        names.sort();
        names.dedup();
        let codes = labels
            .iter()
            .map(|label| names.binary_search(label).unwrap_or(0))
            .collect();
        (Self { names }, codes)
    }

    pub fn code_of(&self, name: &str) -> Option<usize> {
        self.names.binary_search_by(|entry| entry.as_str().cmp(name)).ok()
    }

    pub fn name_of(&self, code: usize) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Canonical form used for matching: trimmed, lowercased, internal
/// whitespace collapsed to underscores.
pub fn normalize(token: &str) -> String {
    static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
    WHITESPACE.replace_all(token.trim(), "_").to_lowercase()
}

/// Baseline vocabulary offered to callers while no model is loaded.
pub const FALLBACK_SYMPTOMS: &[&str] = &[
    "itching",
    "skin_rash",
    "nodal_skin_eruptions",
    "continuous_sneezing",
    "shivering",
    "chills",
    "joint_pain",
    "stomach_pain",
    "acidity",
    "ulcers_on_tongue",
    "muscle_wasting",
    "vomiting",
    "burning_micturition",
    "spotting_urination",
    "fatigue",
    "weight_gain",
    "anxiety",
    "cold_hands_and_feets",
    "mood_swings",
    "weight_loss",
    "restlessness",
    "lethargy",
    "patches_in_throat",
    "irregular_sugar_level",
    "cough",
    "high_fever",
    "sunken_eyes",
    "breathlessness",
    "sweating",
    "dehydration",
    "indigestion",
    "headache",
    "yellowish_skin",
    "dark_urine",
    "nausea",
    "loss_of_appetite",
    "pain_behind_the_eyes",
    "back_pain",
    "constipation",
    "abdominal_pain",
    "diarrhoea",
    "mild_fever",
    "yellow_urine",
    "yellowing_of_eyes",
    "acute_liver_failure",
    "fluid_overload",
    "swelling_of_stomach",
    "swelled_lymph_nodes",
    "malaise",
    "blurred_and_distorted_vision",
    "phlegm",
    "throat_irritation",
    "redness_of_eyes",
    "sinus_pressure",
    "runny_nose",
    "congestion",
    "chest_pain",
    "weakness_in_limbs",
    "fast_heart_rate",
    "pain_during_bowel_movements",
    "pain_in_anal_region",
    "bloody_stool",
    "irritation_in_anus",
    "neck_pain",
    "dizziness",
    "cramps",
    "bruising",
    "obesity",
    "swollen_legs",
    "swollen_blood_vessels",
    "puffy_face_and_eyes",
    "enlarged_thyroid",
    "brittle_nails",
    "swollen_extremeties",
    "excessive_hunger",
    "extra_marital_contacts",
    "drying_and_tingling_lips",
    "slurred_speech",
    "knee_pain",
    "hip_joint_pain",
    "muscle_weakness",
    "stiff_neck",
    "swelling_joints",
    "movement_stiffness",
    "spinning_movements",
    "loss_of_balance",
    "unsteadiness",
    "weakness_of_one_body_side",
    "loss_of_smell",
    "bladder_discomfort",
    "foul_smell_of_urine",
    "continuous_feel_of_urine",
    "passage_of_gases",
    "internal_itching",
    "toxic_look_(typhos)",
    "depression",
    "irritability",
    "muscle_pain",
    "altered_sensorium",
    "red_spots_over_body",
    "belly_pain",
    "abnormal_menstruation",
    "dischromic_patches",
    "watering_from_eyes",
    "increased_appetite",
    "polyuria",
    "family_history",
    "mucoid_sputum",
    "rusty_sputum",
    "lack_of_concentration",
    "visual_disturbances",
    "receiving_blood_transfusion",
    "receiving_unsterile_injections",
    "coma",
    "stomach_bleeding",
    "distention_of_abdomen",
    "history_of_alcohol_consumption",
    "blood_in_sputum",
    "prominent_veins_on_calf",
    "palpitations",
    "painful_walking",
    "pus_filled_pimples",
    "blackheads",
    "scurring",
    "skin_peeling",
    "silver_like_dusting",
    "small_dents_in_nails",
    "inflammatory_nails",
    "blister",
    "red_sore_around_nose",
    "yellow_crust_ooze",
];
