use crate::models::{FeatureGlossary, FeatureInfo};

const TITLE: &str = "Parkinson's Disease Data Explorer";

const SUMMARY: &str = "Explore biomedical voice measurements used in Parkinson's disease \
screening: frequency measurements, amplitude variations, voice perturbation metrics and \
harmonic-to-noise ratios.";

const FEATURES: &[(&str, &str)] = &[
    ("MDVP:Fo(Hz)", "Average vocal fundamental frequency"),
    ("MDVP:Fhi(Hz)", "Maximum vocal fundamental frequency"),
    ("MDVP:Flo(Hz)", "Minimum vocal fundamental frequency"),
    ("MDVP:Jitter(%)", "Variation in fundamental frequency"),
    ("MDVP:Shimmer(%)", "Variation in amplitude"),
    ("NHR", "Noise-to-harmonics ratio"),
    ("HNR", "Harmonics-to-noise ratio"),
];

pub fn glossary() -> FeatureGlossary {
    FeatureGlossary {
        title: TITLE,
        summary: SUMMARY,
        features: FEATURES
            .iter()
            .map(|&(name, description)| FeatureInfo { name, description })
            .collect(),
    }
}
