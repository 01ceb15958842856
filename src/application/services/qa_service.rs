use std::sync::Arc;

use crate::application::ports::{LlmClient, TextSplitter};
use crate::domain::{AnswerMethod, QaAnswer, QaAudit, QaMode, ScoredChunk, SourceRef};

use super::keyword_retrieval::retrieve_top_k;
use super::safety_gate::looks_like_medical_advice;

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_SNIPPET_CHARS: usize = 500;

const REFUSAL_ANSWER: &str = "I can't provide medical advice. I can explain what the document says or provide general educational information.";
const NO_MATCH_ANSWER: &str = "I couldn't find relevant information in the uploaded document.";
const SNIPPETS_HEADER: &str = "Relevant information from the document:\n\n";

const RELATED_ERROR_PREFIX: &str = "Model unavailable — showing document snippets:\n\n";
const RELATED_OFFLINE_PREFIX: &str = "Offline mode — here are document snippets:\n\n";
const HYBRID_ERROR_PREFIX: &str = "Could not expand — showing document snippets:\n\n";
const HYBRID_OFFLINE_PREFIX: &str =
    "Document match is weak and no model available — showing snippets:\n\n";

const GROUNDED_CONFIDENCE: f32 = 0.9;
const RELATED_MODEL_CONFIDENCE: f32 = 0.7;
const RELATED_FALLBACK_CONFIDENCE: f32 = 0.4;
const HYBRID_MODEL_CONFIDENCE: f32 = 0.6;
const HYBRID_ERROR_CONFIDENCE: f32 = 0.3;
const HYBRID_OFFLINE_CONFIDENCE: f32 = 0.2;

/// Question answering over a single document's text.
///
/// The language-model client is optional. Without it, every mode still answers
/// from local snippets and the audit records that no model was available.
pub struct QaService<L>
where
    L: LlmClient,
{
    llm_client: Option<Arc<L>>,
    splitter: Arc<dyn TextSplitter>,
    top_k: usize,
    snippet_chars: usize,
}

impl<L> QaService<L>
where
    L: LlmClient,
{
    pub fn new(
        llm_client: Option<Arc<L>>,
        splitter: Arc<dyn TextSplitter>,
        top_k: usize,
        snippet_chars: usize,
    ) -> Self {
        Self {
            llm_client,
            splitter,
            top_k,
            snippet_chars,
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(mode = %mode, document_chars = document_text.chars().count())
    )]
    pub async fn answer_question(
        &self,
        document_text: &str,
        question: &str,
        mode: QaMode,
    ) -> QaAnswer {
        if looks_like_medical_advice(question) {
            tracing::info!("Question blocked by medical advice gate");
            return QaAnswer {
                answer: REFUSAL_ANSWER.to_string(),
                sources: Vec::new(),
                method: AnswerMethod::Refusal,
                confidence: 0.0,
                audit: QaAudit::blocked("medical_advice_blocked"),
            };
        }

        let chunks = self.splitter.split(document_text);
        let retrieved = retrieve_top_k(question, &chunks, self.top_k);

        tracing::debug!(
            chunk_count = chunks.len(),
            retrieved_count = retrieved.len(),
            best_score = retrieved.first().map(|r| r.score).unwrap_or(0),
            "Retrieved document chunks"
        );

        let answer = match mode {
            QaMode::Grounded => self.answer_grounded(&retrieved),
            QaMode::Related => self.answer_related(question, &retrieved).await,
            QaMode::Hybrid => self.answer_hybrid(question, &retrieved).await,
        };

        tracing::info!(
            method = answer.method.as_str(),
            confidence = answer.confidence,
            sources_count = answer.sources.len(),
            "Question answered"
        );

        answer
    }

    fn answer_grounded(&self, retrieved: &[ScoredChunk]) -> QaAnswer {
        QaAnswer {
            answer: local_answer_from_snippets(retrieved),
            sources: self.sources(retrieved),
            method: AnswerMethod::Local,
            confidence: GROUNDED_CONFIDENCE,
            audit: QaAudit::for_mode(QaMode::Grounded),
        }
    }

    async fn answer_related(&self, question: &str, retrieved: &[ScoredChunk]) -> QaAnswer {
        let audit = QaAudit::for_mode(QaMode::Related);

        let Some(client) = &self.llm_client else {
            return QaAnswer {
                answer: format!(
                    "{RELATED_OFFLINE_PREFIX}{}",
                    local_answer_from_snippets(retrieved)
                ),
                sources: self.sources(retrieved),
                method: AnswerMethod::LocalOnly,
                confidence: RELATED_FALLBACK_CONFIDENCE,
                audit: audit.without_openai(),
            };
        };

        match client.complete_general(question).await {
            Ok(answer) => QaAnswer {
                answer,
                sources: Vec::new(),
                method: AnswerMethod::OpenAi,
                confidence: RELATED_MODEL_CONFIDENCE,
                audit: audit.with_openai_used(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "General completion failed, falling back to snippets");
                QaAnswer {
                    answer: format!(
                        "{RELATED_ERROR_PREFIX}{}",
                        local_answer_from_snippets(retrieved)
                    ),
                    sources: self.sources(retrieved),
                    method: AnswerMethod::LocalFallback,
                    confidence: RELATED_FALLBACK_CONFIDENCE,
                    audit: audit.with_error(e.to_string()),
                }
            }
        }
    }

    async fn answer_hybrid(&self, question: &str, retrieved: &[ScoredChunk]) -> QaAnswer {
        let audit = QaAudit::for_mode(QaMode::Hybrid);

        if retrieved.iter().any(|r| r.score > 0) {
            return QaAnswer {
                answer: local_answer_from_snippets(retrieved),
                sources: self.sources(retrieved),
                method: AnswerMethod::Local,
                confidence: GROUNDED_CONFIDENCE,
                audit: audit.with_reason("good_document_match"),
            };
        }

        let Some(client) = &self.llm_client else {
            return QaAnswer {
                answer: format!(
                    "{HYBRID_OFFLINE_PREFIX}{}",
                    local_answer_from_snippets(retrieved)
                ),
                sources: self.sources(retrieved),
                method: AnswerMethod::LocalOnly,
                confidence: HYBRID_OFFLINE_CONFIDENCE,
                audit: audit.without_openai(),
            };
        };

        let context = retrieved
            .iter()
            .map(|r| r.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        match client.complete(question, &context).await {
            Ok(answer) => QaAnswer {
                answer,
                sources: self.sources(retrieved),
                method: AnswerMethod::HybridOpenAi,
                confidence: HYBRID_MODEL_CONFIDENCE,
                audit: audit.with_openai_used(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Context completion failed, falling back to snippets");
                QaAnswer {
                    answer: format!(
                        "{HYBRID_ERROR_PREFIX}{}",
                        local_answer_from_snippets(retrieved)
                    ),
                    sources: self.sources(retrieved),
                    method: AnswerMethod::LocalFallback,
                    confidence: HYBRID_ERROR_CONFIDENCE,
                    audit: audit.with_error(e.to_string()),
                }
            }
        }
    }

    fn sources(&self, retrieved: &[ScoredChunk]) -> Vec<SourceRef> {
        retrieved
            .iter()
            .map(|r| SourceRef {
                index: r.chunk.index,
                snippet: r.chunk.text.chars().take(self.snippet_chars).collect(),
            })
            .collect()
    }
}

fn local_answer_from_snippets(retrieved: &[ScoredChunk]) -> String {
    if retrieved.is_empty() {
        return NO_MATCH_ANSWER.to_string();
    }

    let parts = retrieved
        .iter()
        .map(|r| format!("[source {}] {}", r.chunk.index, r.chunk.text))
        .collect::<Vec<_>>();

    format!("{SNIPPETS_HEADER}{}", parts.join("\n\n"))
}
