pub const DEFINITION_NOT_AVAILABLE: &str = "Definition not available locally.";

/// Process-wide term table, keyed by the normalized (uppercase) term.
static LOCAL_GLOSSARY: &[(&str, &str)] = &[
    ("BP", "Blood pressure — pressure of circulating blood."),
    ("MRI", "Magnetic Resonance Imaging — creates internal body images."),
    ("CT", "Computed Tomography — cross-sectional X-ray imaging."),
    ("ECG", "Electrocardiogram — records the electrical activity of the heart."),
    ("HR", "Heart rate — number of heartbeats per minute."),
    ("BMI", "Body Mass Index — weight relative to height."),
    ("CBC", "Complete Blood Count — measures the cells in a blood sample."),
    ("SPO2", "Blood oxygen saturation — percentage of oxygen carried by the blood."),
];

/// A token from the input paired with its definition or the fallback message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub token: String,
    pub definition: &'static str,
}

pub fn definition_for(term: &str) -> Option<&'static str> {
    LOCAL_GLOSSARY
        .iter()
        .find(|(key, _)| *key == term)
        .map(|(_, definition)| *definition)
}
