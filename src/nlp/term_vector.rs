//! Term-frequency vectors for sentences
//!
//! Builds sparse L2-normalized term-frequency vectors so that pairwise
//! sentence similarity reduces to a dot product. Terms are lowercased word
//! tokens with stopwords removed.

use crate::nlp::stopwords::StopwordFilter;
use rustc_hash::FxHashMap;

/// A sparse L2-normalized term vector
#[derive(Debug, Clone, Default)]
pub struct TermVector {
    /// Non-zero dimensions: term -> normalized weight
    pub dimensions: FxHashMap<String, f64>,
    /// L2 norm of the raw counts before normalization
    pub norm: f64,
}

impl TermVector {
    /// Create an empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw term weights, normalizing to unit length
    pub fn from_counts(mut dimensions: FxHashMap<String, f64>) -> Self {
        let norm = dimensions.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    /// Cosine similarity with another vector.
    ///
    /// Both vectors are unit length, so this is the dot product over the
    /// smaller vector's dimensions. Symmetric by construction; two empty
    /// vectors have similarity 0.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut dot = 0.0;
        for (term, weight) in &small.dimensions {
            if let Some(other_weight) = large.dimensions.get(term) {
                dot += weight * other_weight;
            }
        }
        dot
    }

    /// Whether the vector has no dimensions
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

/// Builds term vectors for sentences with a shared stopword filter
#[derive(Debug)]
pub struct TermVectorBuilder<'a> {
    stopwords: &'a StopwordFilter,
}

impl<'a> TermVectorBuilder<'a> {
    /// Create a builder using the given stopword filter
    pub fn new(stopwords: &'a StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Build a term vector for one sentence
    pub fn build(&self, text: &str) -> TermVector {
        let mut counts: FxHashMap<String, f64> = FxHashMap::default();

        for token in tokenize(text) {
            if self.stopwords.is_stopword(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0.0) += 1.0;
        }

        TermVector::from_counts(counts)
    }

    /// Build vectors for a batch of sentences, in order
    pub fn build_all<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<TermVector> {
        sentences.iter().map(|s| self.build(s.as_ref())).collect()
    }
}

/// Lowercased word tokens: maximal alphanumeric runs.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_with(filter: &StopwordFilter) -> TermVectorBuilder<'_> {
        TermVectorBuilder::new(filter)
    }

    #[test]
    fn test_identical_sentences_have_similarity_one() {
        let filter = StopwordFilter::new("en");
        let builder = builder_with(&filter);

        let a = builder.build("Cats are mammals.");
        let b = builder.build("Cats are mammals.");

        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_vocabulary_has_similarity_zero() {
        let filter = StopwordFilter::new("en");
        let builder = builder_with(&filter);

        let a = builder.build("Cats purr loudly.");
        let b = builder.build("Stars emit light.");

        assert_eq!(a.cosine_similarity(&b), 0.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let filter = StopwordFilter::new("en");
        let builder = builder_with(&filter);

        let a = builder.build("Cats are mammals and cats purr.");
        let b = builder.build("Dogs are mammals that bark.");

        assert_eq!(a.cosine_similarity(&b), b.cosine_similarity(&a));
    }

    #[test]
    fn test_stopwords_are_excluded() {
        let filter = StopwordFilter::new("en");
        let builder = builder_with(&filter);

        let v = builder.build("The cat is on the mat.");

        assert!(!v.dimensions.contains_key("the"));
        assert!(!v.dimensions.contains_key("is"));
        assert!(v.dimensions.contains_key("cat"));
        assert!(v.dimensions.contains_key("mat"));
    }

    #[test]
    fn test_unit_normalization() {
        let filter = StopwordFilter::empty();
        let builder = builder_with(&filter);

        let v = builder.build("alpha alpha beta");
        let norm: f64 = v.dimensions.values().map(|w| w * w).sum::<f64>().sqrt();

        assert!((norm - 1.0).abs() < 1e-9);
        // "alpha" appears twice, so it carries more weight than "beta"
        assert!(v.dimensions["alpha"] > v.dimensions["beta"]);
    }

    #[test]
    fn test_all_stopword_sentence_is_empty_vector() {
        let filter = StopwordFilter::new("en");
        let builder = builder_with(&filter);

        let v = builder.build("It is what it is.");

        assert!(v.is_empty());
        assert_eq!(v.cosine_similarity(&builder.build("Cats purr.")), 0.0);
    }

    #[test]
    fn test_tokenization_strips_punctuation_and_case() {
        let filter = StopwordFilter::empty();
        let builder = builder_with(&filter);

        let a = builder.build("Hello, World!");
        let b = builder.build("hello world");

        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_all_preserves_order() {
        let filter = StopwordFilter::empty();
        let builder = builder_with(&filter);

        let vectors = builder.build_all(&["alpha", "beta"]);

        assert_eq!(vectors.len(), 2);
        assert!(vectors[0].dimensions.contains_key("alpha"));
        assert!(vectors[1].dimensions.contains_key("beta"));
    }
}
