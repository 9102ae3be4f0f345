use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::constants::DEFAULT_EMBEDDING_DIM;
use crate::document::CandidateDocument;
use crate::embedding::{Embedder, EmbeddingError, MockEmbedder};
use crate::extract::{FullTextExtractor, SectionExtractor};

const DATA_ENGINEER: &str = "Jane SMITH\n\
    Data engineer building streaming platforms.\n\
    \n\
    Skills\n\
    Python, SQL, Kafka, Spark and Airflow for batch and streaming pipelines\n\
    \n\
    Education\n\
    MSc Computer Science";

const DESIGNER: &str = "Tom Baker\n\
    Graphic designer focused on brand identity.\n\
    \n\
    Skills\n\
    Illustrator, Photoshop, typography, branding and print layout\n\
    \n\
    Education\n\
    BA Visual Arts";

fn lexical_scorer() -> (Arc<MockEmbedder>, RelevanceScorer) {
    let mock = Arc::new(MockEmbedder::lexical(DEFAULT_EMBEDDING_DIM));
    let scorer = RelevanceScorer::new(mock.clone());
    (mock, scorer)
}

fn docs(items: &[(&str, &str)]) -> Vec<CandidateDocument> {
    items
        .iter()
        .map(|(id, text)| CandidateDocument::new(*id, *text))
        .collect()
}

fn identifiers(ranked: &[RankedCandidate]) -> Vec<&str> {
    ranked.iter().map(|c| c.identifier.as_str()).collect()
}

mod rank_tests {
    use super::*;

    #[test]
    fn test_relevant_document_ranks_first() {
        let (_, scorer) = lexical_scorer();
        let documents = docs(&[("b", DESIGNER), ("a", DATA_ENGINEER)]);

        let ranked = scorer
            .rank("Python SQL Kafka engineer", &documents, 2)
            .unwrap();

        assert_eq!(identifiers(&ranked), vec!["a", "b"]);
        assert!(ranked[0].score > ranked[1].score);
        assert_eq!(ranked[0].input_index, 1);
        assert_eq!(ranked[0].display_name, "Jane Smith");
    }

    #[test]
    fn test_empty_documents_is_empty_ranking() {
        let (mock, scorer) = lexical_scorer();
        let ranked = scorer.rank("Python engineer", &[], 5).unwrap();
        assert!(ranked.is_empty());
        assert_eq!(mock.calls(), 0);
    }

    #[test]
    fn test_empty_query_fails() {
        let (_, scorer) = lexical_scorer();
        let documents = docs(&[("a", DATA_ENGINEER)]);

        assert!(matches!(
            scorer.rank("", &documents, 5),
            Err(ScoringError::EmptyInput { what: "query" })
        ));
        assert!(matches!(
            scorer.rank("  \n", &documents, 5),
            Err(ScoringError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_empty_query_checked_before_empty_documents() {
        let (_, scorer) = lexical_scorer();
        assert!(matches!(
            scorer.rank("", &[], 5),
            Err(ScoringError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_zero_top_n_fails() {
        let (_, scorer) = lexical_scorer();
        let documents = docs(&[("a", DATA_ENGINEER)]);
        assert!(matches!(
            scorer.rank("kafka", &documents, 0),
            Err(ScoringError::InvalidTopN)
        ));
    }

    #[test]
    fn test_output_bounded_by_top_n_and_input() {
        let (_, scorer) = lexical_scorer();
        let documents = docs(&[
            ("a", DATA_ENGINEER),
            ("b", DESIGNER),
            ("c", "Kafka operator running clusters for payment systems at scale"),
        ]);

        assert_eq!(scorer.rank("kafka", &documents, 1).unwrap().len(), 1);
        assert_eq!(scorer.rank("kafka", &documents, 2).unwrap().len(), 2);
        assert_eq!(scorer.rank("kafka", &documents, 10).unwrap().len(), 3);
    }

    #[test]
    fn test_scores_sorted_descending() {
        let (_, scorer) = lexical_scorer();
        let documents = docs(&[
            ("a", DESIGNER),
            ("b", "Python developer with some SQL reporting experience in finance teams"),
            ("c", DATA_ENGINEER),
        ]);

        let ranked = scorer.rank("Python SQL Kafka", &documents, 3).unwrap();
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mock = Arc::new(MockEmbedder::constant(vec![1.0, 0.0, 0.0]));
        let scorer = RelevanceScorer::new(mock);
        let documents = docs(&[
            ("first", "alpha text"),
            ("second", "beta text"),
            ("third", "gamma text"),
        ]);

        let ranked = scorer.rank("query", &documents, 3).unwrap();
        assert_eq!(identifiers(&ranked), vec!["first", "second", "third"]);
        assert!(ranked.iter().all(|c| c.score == ranked[0].score));
    }

    #[test]
    fn test_rank_is_idempotent() {
        let (_, scorer) = lexical_scorer();
        let documents = docs(&[("a", DATA_ENGINEER), ("b", DESIGNER)]);

        let first = scorer.rank("streaming data platform", &documents, 2).unwrap();
        let second = scorer.rank("streaming data platform", &documents, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_each_text_embedded_once() {
        let (mock, scorer) = lexical_scorer();
        let documents = docs(&[("a", DATA_ENGINEER), ("b", DESIGNER), ("c", "kafka")]);

        scorer.rank("kafka", &documents, 1).unwrap();
        assert_eq!(mock.calls(), documents.len() + 1);
    }

    #[test]
    fn test_shortlist_uses_configured_top_n() {
        let (_, scorer) = lexical_scorer();
        let scorer = scorer.with_config(ScorerConfig { top_n: 1 });
        let documents = docs(&[("a", DATA_ENGINEER), ("b", DESIGNER)]);

        let ranked = scorer.shortlist("kafka", &documents).unwrap();
        assert_eq!(identifiers(&ranked), vec!["a"]);
    }
}

mod failure_tests {
    use super::*;

    #[test]
    fn test_backend_failure_aborts_batch() {
        let mock = Arc::new(MockEmbedder::lexical(32).failing_after(2));
        let scorer = RelevanceScorer::new(mock);
        let documents = docs(&[("a", DATA_ENGINEER), ("b", DESIGNER), ("c", "kafka")]);

        let err = scorer.rank("kafka", &documents, 3).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::EmbeddingUnavailable(EmbeddingError::InferenceFailed { .. })
        ));
    }

    #[test]
    fn test_empty_document_is_invalid_vector() {
        let (_, scorer) = lexical_scorer();
        let documents = docs(&[("a", DATA_ENGINEER), ("empty", "")]);

        assert!(matches!(
            scorer.rank("kafka", &documents, 2),
            Err(ScoringError::InvalidVector { .. })
        ));
    }

    #[test]
    fn test_query_without_content_tokens_is_invalid_vector() {
        let (_, scorer) = lexical_scorer();
        let documents = docs(&[("a", DATA_ENGINEER)]);

        assert!(matches!(
            scorer.rank("the and of", &documents, 1),
            Err(ScoringError::InvalidVector { .. })
        ));
    }

    #[test]
    fn test_dimension_mismatch_is_invalid_vector() {
        let mock = MockEmbedder::constant(vec![1.0, 0.0, 0.0]).with_vector("short", vec![1.0, 0.0]);
        let scorer = RelevanceScorer::new(Arc::new(mock));

        assert!(matches!(
            scorer.embed("short"),
            Err(ScoringError::InvalidVector { .. })
        ));
    }
}

mod similarity_tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_maximal() {
        let (_, scorer) = lexical_scorer();
        let x = scorer.embed("Rust systems engineer with tokio experience").unwrap();
        let y = scorer.embed("Graphic designer").unwrap();

        let self_sim = scorer.similarity(&x, &x).unwrap();
        assert!((self_sim - 1.0).abs() < 1e-5);
        assert!(scorer.similarity(&x, &y).unwrap() <= self_sim);
    }
}

mod extractor_tests {
    use super::*;

    struct FixedExtractor;

    impl SectionExtractor for FixedExtractor {
        fn extract_relevant<'a>(&self, _text: &'a str) -> Cow<'a, str> {
            Cow::Borrowed("kafka")
        }
    }

    #[test]
    fn test_scorer_embeds_extracted_span() {
        let mock = Arc::new(MockEmbedder::lexical(64));
        let scorer = RelevanceScorer::new(mock).with_extractor(Arc::new(FixedExtractor));
        let documents = docs(&[("a", DESIGNER), ("b", DATA_ENGINEER)]);

        let ranked = scorer.rank("kafka", &documents, 2).unwrap();
        assert!(ranked.iter().all(|c| (c.score - 1.0).abs() < 1e-5));
        assert_eq!(identifiers(&ranked), vec!["a", "b"]);
    }

    #[test]
    fn test_section_extraction_changes_scores() {
        let text = "Hobbies\nGardening, gardening and more gardening every weekend\n\n\
                    Skills\nKafka streaming pipelines and Kafka connect for data teams";
        let documents = docs(&[("a", text)]);
        let mock = Arc::new(MockEmbedder::lexical(DEFAULT_EMBEDDING_DIM));

        let sectioned = RelevanceScorer::new(mock.clone());
        let full = RelevanceScorer::new(mock).with_extractor(Arc::new(FullTextExtractor));

        let with_sections = sectioned.rank("kafka", &documents, 1).unwrap()[0].score;
        let with_full_text = full.rank("kafka", &documents, 1).unwrap()[0].score;
        assert!(with_sections > with_full_text);
    }
}

#[cfg(not(feature = "parallel"))]
mod batch_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::embedding::EmbeddingVector;

    /// Counts `embed_batch` calls separately from single embeds.
    struct BatchCounting {
        inner: MockEmbedder,
        batches: AtomicUsize,
        batch_sizes: parking_lot::Mutex<Vec<usize>>,
    }

    impl BatchCounting {
        fn new(inner: MockEmbedder) -> Self {
            Self {
                inner,
                batches: AtomicUsize::new(0),
                batch_sizes: parking_lot::Mutex::new(Vec::new()),
            }
        }
    }

    impl Embedder for BatchCounting {
        fn model_id(&self) -> &str {
            self.inner.model_id()
        }

        fn dimension(&self) -> usize {
            self.inner.dimension()
        }

        fn normalizes(&self) -> bool {
            self.inner.normalizes()
        }

        fn embed(&self, text: &str) -> Result<EmbeddingVector, EmbeddingError> {
            self.inner.embed(text)
        }

        fn embed_batch(&self, texts: &[&str]) -> Result<Vec<EmbeddingVector>, EmbeddingError> {
            self.batches.fetch_add(1, Ordering::SeqCst);
            self.batch_sizes.lock().push(texts.len());
            texts.iter().map(|text| self.inner.embed(text)).collect()
        }
    }

    #[test]
    fn test_documents_embedded_in_one_batch() {
        let embedder = Arc::new(BatchCounting::new(MockEmbedder::lexical(64)));
        let scorer = RelevanceScorer::new(embedder.clone());
        let documents = docs(&[("a", DATA_ENGINEER), ("b", DESIGNER), ("c", "kafka")]);

        let ranked = scorer.rank("kafka", &documents, 3).unwrap();

        assert_eq!(ranked.len(), 3);
        assert_eq!(embedder.batches.load(Ordering::SeqCst), 1);
        assert_eq!(*embedder.batch_sizes.lock(), vec![3]);
        assert_eq!(embedder.inner.calls(), documents.len() + 1);
    }

    #[test]
    fn test_batch_results_checked_for_dimension() {
        let inner = MockEmbedder::constant(vec![1.0, 0.0, 0.0]).with_vector("short", vec![1.0]);
        let scorer = RelevanceScorer::new(Arc::new(BatchCounting::new(inner)))
            .with_extractor(Arc::new(FullTextExtractor));
        let documents = docs(&[("a", "fine"), ("b", "short")]);

        assert!(matches!(
            scorer.rank("query", &documents, 2),
            Err(ScoringError::InvalidVector { .. })
        ));
    }
}

mod deadline_tests {
    use super::*;

    #[tokio::test]
    async fn test_rank_within_deadline_succeeds() {
        let (_, scorer) = lexical_scorer();
        let documents = docs(&[("a", DATA_ENGINEER), ("b", DESIGNER)]);

        let ranked = rank_within(&scorer, "kafka", &documents, 2, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].identifier, "a");
    }

    #[tokio::test]
    async fn test_rank_within_deadline_exceeded() {
        let mock = Arc::new(MockEmbedder::lexical(16).with_delay(Duration::from_millis(200)));
        let scorer = RelevanceScorer::new(mock);
        let documents = docs(&[("a", DATA_ENGINEER)]);

        let err = rank_within(&scorer, "kafka", &documents, 1, Duration::from_millis(20))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ScoringError::EmbeddingUnavailable(EmbeddingError::DeadlineExceeded { .. })
        ));
    }

    #[tokio::test]
    async fn test_rank_within_propagates_errors() {
        let (_, scorer) = lexical_scorer();
        let err = rank_within(&scorer, "", &[], 1, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ScoringError::EmptyInput { .. }));
    }

    #[test]
    fn test_mock_reports_dimension() {
        let (mock, scorer) = lexical_scorer();
        assert_eq!(scorer.embedder().dimension(), mock.dimension());
    }
}
