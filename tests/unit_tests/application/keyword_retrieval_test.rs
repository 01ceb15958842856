use medease::application::services::{retrieve_top_k, score_chunk};
use medease::domain::Chunk;

fn chunks() -> Vec<Chunk> {
    vec![
        Chunk::new(0, "The patient has diabetes.".to_string()),
        Chunk::new(1, "Blood pressure was high.".to_string()),
        Chunk::new(2, "Diabetes requires insulin therapy.".to_string()),
    ]
}

#[test]
fn given_repeated_words_when_scoring_then_counts_distinct_overlap() {
    assert_eq!(score_chunk("insulin insulin INSULIN", "Insulin, insulin."), 1);
}

#[test]
fn given_query_when_retrieving_then_orders_by_overlap_and_drops_zero_scores() {
    let result = retrieve_top_k("diabetes insulin", &chunks(), 3);

    let indices: Vec<usize> = result.iter().map(|r| r.chunk.index).collect();
    assert_eq!(indices, vec![2, 0]);
    assert_eq!(result[0].score, 2);
    assert_eq!(result[1].score, 1);
}

#[test]
fn given_tied_scores_when_retrieving_then_keeps_document_order() {
    let result = retrieve_top_k("diabetes", &chunks(), 3);

    let indices: Vec<usize> = result.iter().map(|r| r.chunk.index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn given_no_overlap_when_retrieving_then_returns_first_k_with_zero_score() {
    let result = retrieve_top_k("zebra", &chunks(), 2);

    let indices: Vec<usize> = result.iter().map(|r| r.chunk.index).collect();
    assert_eq!(indices, vec![0, 1]);
    assert!(result.iter().all(|r| r.score == 0));
}

#[test]
fn given_no_chunks_when_retrieving_then_returns_empty() {
    assert!(retrieve_top_k("diabetes", &[], 3).is_empty());
}

#[test]
fn given_k_smaller_than_matches_when_retrieving_then_returns_at_most_k_sorted() {
    let result = retrieve_top_k("diabetes insulin blood", &chunks(), 2);

    assert_eq!(result.len(), 2);
    assert!(result.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(result.iter().all(|r| r.score > 0));
}
