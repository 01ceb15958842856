use medease::application::services::looks_like_medical_advice;

#[test]
fn given_personal_advice_question_when_checking_then_flags_it() {
    assert!(looks_like_medical_advice("Should I stop taking metformin?"));
    assert!(looks_like_medical_advice("CAN I TAKE ibuprofen with this?"));
}

#[test]
fn given_factual_question_when_checking_then_passes_it() {
    assert!(!looks_like_medical_advice("What dose was given?"));
    assert!(!looks_like_medical_advice("What was the blood pressure?"));
}
