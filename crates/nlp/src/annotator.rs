//! Linguistic annotation: tokens, entity spans and key phrases.
//!
//! The [`Tagger`] does the tokenizing and tagging. Entity and key-phrase
//! extraction are the same fold over the tagged sequence: consecutive tokens
//! whose tag matches a [`TagScheme`] category accumulate into a span, and the
//! span is flushed on the first non-matching tag and at the end.

use parley_core::error::AnnotationError;
use parley_core::{Entity, TaggedToken, Tagger};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Label attached to every extracted entity span.
pub const ENTITY_LABEL: &str = "ENTITY";

/// Which tags count as proper nouns and which as content words.
///
/// Matching is by prefix, so the Penn `NN` prefix also covers `NNS`, `NNP`
/// and `NNPS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagScheme {
    proper_noun: Vec<String>,
    content: Vec<String>,
}

impl TagScheme {
    pub fn new<P, C>(proper_noun: P, content: C) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            proper_noun: proper_noun.into_iter().map(Into::into).collect(),
            content: content.into_iter().map(Into::into).collect(),
        }
    }

    /// Penn Treebank: `NNP*` proper nouns; `NN*`, `JJ*`, `VB*` content words.
    pub fn penn() -> Self {
        Self::new(["NNP", "NNPS"], ["NN", "JJ", "VB"])
    }

    pub fn is_proper_noun(&self, tag: &str) -> bool {
        self.proper_noun.iter().any(|p| tag.starts_with(p.as_str()))
    }

    pub fn is_content(&self, tag: &str) -> bool {
        self.content.iter().any(|p| tag.starts_with(p.as_str()))
    }
}

impl Default for TagScheme {
    fn default() -> Self {
        Self::penn()
    }
}

/// Maximal runs of tokens whose tag satisfies `in_span`, each joined by spaces.
fn spans(tagged: &[TaggedToken], in_span: impl Fn(&str) -> bool) -> Vec<String> {
    let (mut closed, open) = tagged.iter().fold(
        (Vec::new(), Vec::<&str>::new()),
        |(mut closed, mut open), t| {
            if in_span(t.tag.as_str()) {
                open.push(t.token.as_str());
            } else if !open.is_empty() {
                closed.push(open.join(" "));
                open.clear();
            }
            (closed, open)
        },
    );
    if !open.is_empty() {
        closed.push(open.join(" "));
    }
    closed
}

/// Proper-noun spans in order of appearance. Duplicates are kept.
pub fn extract_entities(tagged: &[TaggedToken], scheme: &TagScheme) -> Vec<Entity> {
    spans(tagged, |tag| scheme.is_proper_noun(tag))
        .into_iter()
        .map(|text| Entity::new(text, ENTITY_LABEL))
        .collect()
}

/// Noun/adjective/verb spans, deduplicated.
pub fn extract_key_phrases(tagged: &[TaggedToken], scheme: &TagScheme) -> BTreeSet<String> {
    spans(tagged, |tag| scheme.is_content(tag)).into_iter().collect()
}

/// Everything the annotator derives from one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub tokens: Vec<String>,
    pub entities: Vec<Entity>,
    pub key_phrases: BTreeSet<String>,
}

/// Runs a [`Tagger`] and derives entities and key phrases from its output.
#[derive(Clone)]
pub struct Annotator {
    tagger: Arc<dyn Tagger>,
    scheme: TagScheme,
}

impl Annotator {
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self {
            tagger,
            scheme: TagScheme::default(),
        }
    }

    /// Use a non-Penn tag convention.
    pub fn with_scheme(mut self, scheme: TagScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn tagger_name(&self) -> &str {
        self.tagger.name()
    }

    /// Tag `text` and fold the tags. Tagger failures propagate unchanged.
    pub fn annotate(&self, text: &str) -> Result<Annotation, AnnotationError> {
        let tagged = self.tagger.annotate(text)?;
        Ok(Annotation {
            entities: extract_entities(&tagged, &self.scheme),
            key_phrases: extract_key_phrases(&tagged, &self.scheme),
            tokens: tagged.into_iter().map(|t| t.token).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs.iter().map(|(w, t)| TaggedToken::new(*w, *t)).collect()
    }

    fn universal() -> TagScheme {
        TagScheme::new(["PROPER"], ["NOUN", "ADJ", "VERB"])
    }

    #[test]
    fn proper_noun_run_becomes_one_entity() {
        let tokens = tagged(&[("New", "PROPER"), ("York", "PROPER"), ("is", "VERB"), ("big", "ADJ")]);
        let entities = extract_entities(&tokens, &universal());
        assert_eq!(entities, vec![Entity::new("New York", ENTITY_LABEL)]);

        let phrases = extract_key_phrases(&tokens, &universal());
        assert_eq!(phrases, BTreeSet::from(["is big".to_string()]));
        assert!(phrases.iter().any(|p| p.contains("is") && p.contains("big")));
    }

    #[test]
    fn trailing_span_is_flushed() {
        let tokens = tagged(&[("i", "PRP"), ("love", "VBP"), ("San", "NNP"), ("Francisco", "NNP")]);
        let entities = extract_entities(&tokens, &TagScheme::penn());
        assert_eq!(entities, vec![Entity::new("San Francisco", ENTITY_LABEL)]);
    }

    #[test]
    fn duplicate_entities_are_kept_in_order() {
        let tokens = tagged(&[
            ("Paris", "NNP"),
            ("and", "CC"),
            ("Rome", "NNP"),
            ("and", "CC"),
            ("Paris", "NNP"),
        ]);
        let texts: Vec<_> = extract_entities(&tokens, &TagScheme::penn())
            .into_iter()
            .map(|e| e.text)
            .collect();
        assert_eq!(texts, vec!["Paris", "Rome", "Paris"]);
    }

    #[test]
    fn key_phrases_are_deduplicated() {
        let tokens = tagged(&[
            ("rust", "NN"),
            ("and", "CC"),
            ("rust", "NN"),
            (",", ","),
            ("fast", "JJ"),
            ("code", "NN"),
        ]);
        let phrases = extract_key_phrases(&tokens, &TagScheme::penn());
        assert_eq!(phrases.len(), 2);
        assert!(phrases.contains("rust"));
        assert!(phrases.contains("fast code"));
    }

    #[test]
    fn penn_prefixes_cover_inflected_tags() {
        let scheme = TagScheme::penn();
        assert!(scheme.is_proper_noun("NNPS"));
        assert!(scheme.is_content("NNS"));
        assert!(scheme.is_content("VBZ"));
        assert!(scheme.is_content("JJR"));
        assert!(!scheme.is_content("DT"));
        assert!(!scheme.is_proper_noun("NN"));
    }

    #[test]
    fn empty_sequence_yields_nothing() {
        assert!(extract_entities(&[], &TagScheme::penn()).is_empty());
        assert!(extract_key_phrases(&[], &TagScheme::penn()).is_empty());
    }

    struct BrokenTagger;

    impl Tagger for BrokenTagger {
        fn name(&self) -> &str {
            "broken"
        }

        fn annotate(&self, _text: &str) -> Result<Vec<TaggedToken>, AnnotationError> {
            Err(AnnotationError::Unavailable("model not loaded".into()))
        }
    }

    #[test]
    fn tagger_failure_propagates() {
        let annotator = Annotator::new(Arc::new(BrokenTagger));
        let err = annotator.annotate("anything").unwrap_err();
        assert!(matches!(err, AnnotationError::Unavailable(_)));
    }

    #[test]
    fn annotator_uses_tagger_tokens() {
        let annotator = Annotator::new(Arc::new(crate::LexiconTagger));
        let annotation = annotator.annotate("i visited New York").unwrap();
        assert_eq!(annotation.tokens, vec!["i", "visited", "New", "York"]);
        assert_eq!(annotation.entities, vec![Entity::new("New York", ENTITY_LABEL)]);
        assert!(annotation.key_phrases.contains("visited New York"));
    }
}
