use medease::application::ports::TextSplitter;
use medease::infrastructure::text_processing::{
    SentencePackingSplitter, chunk_text, split_sentences,
};

#[test]
fn given_mixed_terminators_when_splitting_sentences_then_keeps_punctuation() {
    let sentences = split_sentences("Hi there. How are you? Fine!");

    assert_eq!(sentences, vec!["Hi there.", "How are you?", "Fine!"]);
}

#[test]
fn given_decimal_number_when_splitting_sentences_then_does_not_break_inside_it() {
    let sentences = split_sentences("Dose 2.5 mg daily. Next visit.");

    assert_eq!(sentences, vec!["Dose 2.5 mg daily.", "Next visit."]);
}

#[test]
fn given_blank_text_when_chunking_then_returns_no_chunks() {
    assert!(chunk_text("   ", 100).is_empty());
}

#[test]
fn given_sentences_exactly_at_budget_when_chunking_then_packs_them_together() {
    assert_eq!(chunk_text("Aaaa. Bbbb.", 11), vec!["Aaaa. Bbbb."]);
}

#[test]
fn given_sentences_one_over_budget_when_chunking_then_splits_them() {
    assert_eq!(chunk_text("Aaaa. Bbbb.", 10), vec!["Aaaa.", "Bbbb."]);
}

#[test]
fn given_sentence_longer_than_budget_when_chunking_then_it_becomes_its_own_chunk() {
    let chunks = chunk_text("Short. This sentence is far too long for the budget. End.", 10);

    assert_eq!(
        chunks,
        vec![
            "Short.",
            "This sentence is far too long for the budget.",
            "End."
        ]
    );
}

#[test]
fn given_splitter_when_splitting_then_chunks_are_indexed_in_order() {
    let splitter = SentencePackingSplitter::new(10);

    let chunks = splitter.split("Aaaa. Bbbb. Cccc.");

    let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(chunks[2].text, "Cccc.");
}

#[test]
fn given_default_splitter_when_splitting_short_text_then_returns_single_chunk() {
    let chunks = SentencePackingSplitter::default().split("One. Two. Three.");

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "One. Two. Three.");
}

#[test]
fn given_tiny_budget_when_chunking_then_each_sentence_is_a_chunk() {
    assert_eq!(chunk_text("A. B. C.", 3), vec!["A.", "B.", "C."]);
}

#[test]
fn given_paragraph_when_chunking_then_chunks_reconstruct_sentences_within_budget() {
    let text = "Patient admitted with chest pain. ECG was normal. Troponin negative. \
                Discharged home with follow-up in two weeks. Continue aspirin.";

    let chunks = chunk_text(text, 50);

    assert!(chunks.iter().all(|c| c.chars().count() <= 50));
    assert_eq!(chunks.join(" "), split_sentences(text).join(" "));
}
