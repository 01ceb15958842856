/// Phrases that mark a question as a request for personal medical advice rather
/// than a factual question about the document ("what dose was given?" passes).
const ADVICE_TRIGGERS: &[&str] = &[
    "should i",
    "should we",
    "what should",
    "i should",
    "we should",
    "diagnose",
    "diagnosis",
    "treat",
    "treatment",
    "prescribe",
    "is it safe for me",
    "can i take",
    "can i start",
    "can i stop",
    "urgent",
    "emergency",
    "call 911",
    "call your doctor",
    "seek medical",
];

pub fn looks_like_medical_advice(question: &str) -> bool {
    let question = question.to_lowercase();
    ADVICE_TRIGGERS
        .iter()
        .any(|trigger| question.contains(trigger))
}
