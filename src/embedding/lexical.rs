use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
        "can", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as", "into",
        "through", "during", "before", "after", "between", "under", "then", "here", "there",
        "when", "where", "why", "how", "all", "each", "more", "most", "other", "some", "such",
        "no", "nor", "not", "only", "so", "than", "too", "very", "just", "and", "but", "if",
        "or", "because", "while", "what", "which", "who", "whom", "this", "that", "these",
        "those", "am", "it", "its", "i", "we", "you", "my", "our", "your",
        // French
        "le", "la", "les", "un", "une", "des", "du", "de", "et", "ou", "en", "au", "aux",
        "pour", "par", "sur", "avec", "dans", "est", "sont", "je", "nous", "vous", "mon", "ma",
        "mes", "ce", "cette", "ces", "qui", "que",
    ]
    .into_iter()
    .collect()
});

/// Lower-cased alphanumeric tokens of `text`, stop words removed.
pub fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty() && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}

/// Hashed bag-of-words vector of length `dim`.
///
/// Each token adds `1.0` to the bucket its hash selects. The result is not
/// normalized; texts without content tokens map to the zero vector.
pub fn lexical_embedding(text: &str, dim: usize) -> Vec<f32> {
    let mut embedding = vec![0.0f32; dim];
    if dim == 0 {
        return embedding;
    }

    for token in tokens(text) {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        let bucket = (hasher.finish() % dim as u64) as usize;
        embedding[bucket] += 1.0;
    }

    embedding
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_drop_stop_words_and_punctuation() {
        assert_eq!(
            tokens("The Python, and SQL engineer!"),
            vec!["python", "sql", "engineer"]
        );
    }

    #[test]
    fn test_tokens_drop_french_stop_words() {
        assert_eq!(
            tokens("Ingénieur de données et Kafka"),
            vec!["ingénieur", "données", "kafka"]
        );
    }

    #[test]
    fn test_lexical_embedding_deterministic() {
        let a = lexical_embedding("rust tokio candle", 64);
        let b = lexical_embedding("rust tokio candle", 64);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_eq!(a.iter().sum::<f32>(), 3.0);
    }

    #[test]
    fn test_lexical_embedding_case_insensitive() {
        assert_eq!(
            lexical_embedding("Kafka SQL", 32),
            lexical_embedding("kafka sql", 32)
        );
    }

    #[test]
    fn test_lexical_embedding_stop_words_only_is_zero() {
        assert!(lexical_embedding("the and of", 16).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_lexical_embedding_zero_dimension() {
        assert!(lexical_embedding("anything", 0).is_empty());
    }
}
