//! Built-in lexicon tagger: a small, dependency-free [`Tagger`].
//!
//! Emits Penn Treebank tags (`NN`, `NNP`, `VBZ`, `JJ`, ...) from three
//! sources, in priority order:
//!
//! 1. a closed-class lexicon (determiners, pronouns, auxiliaries, common verbs/adjectives)
//! 2. surface form (punctuation, digits, capitalization)
//! 3. suffix heuristics (`-ly` → `RB`, `-ing` → `VBG`, `-ous` → `JJ`, ...)
//!
//! Anything left over is a noun. It is not a statistical tagger and makes no
//! attempt to be one; swap in another [`Tagger`] for better accuracy.
//!
//! Capitalization only matters when the tagger is called directly.
//! [`MessageProcessor`](crate::MessageProcessor) tags the normalized,
//! lowercased text, so this tagger never emits `NNP` there and the pipeline
//! reports no entities. A tagger that recognizes names in lowercase text
//! lifts that limit.

use parley_core::error::AnnotationError;
use parley_core::{TaggedToken, Tagger};

/// Clitics split off the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'m", "'d"];

/// Punctuation that is peeled off word edges into its own token.
fn is_edge_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | '!' | '?' | ';' | ':' | '"' | '(' | ')' | '[' | ']' | '{' | '}' | '\''
    )
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    /// Split text into word, clitic and punctuation tokens.
    pub fn tokenize(text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in text.split_whitespace() {
            let mut leading = Vec::new();
            let mut core = word;
            while let Some(c) = core.chars().next().filter(|c| is_edge_punctuation(*c)) {
                leading.push(c.to_string());
                core = &core[c.len_utf8()..];
            }

            let mut trailing = Vec::new();
            while let Some(c) = core.chars().last().filter(|c| is_edge_punctuation(*c)) {
                trailing.push(c.to_string());
                core = &core[..core.len() - c.len_utf8()];
            }
            trailing.reverse();

            tokens.extend(leading);
            if !core.is_empty() {
                tokens.extend(split_clitic(core));
            }
            tokens.extend(trailing);
        }

        tokens
    }

    /// Tag one token. `first` marks the first word of the text.
    fn tag(token: &str, first: bool) -> &'static str {
        if let Some(tag) = punctuation_tag(token) {
            return tag;
        }
        if is_number(token) {
            return "CD";
        }

        let lower = token.to_lowercase();
        let capitalized = token.chars().next().is_some_and(char::is_uppercase);

        // Mid-sentence capitals are names; sentence-initial ones only when
        // nothing else claims the word.
        if capitalized && !first && lower != "i" {
            return "NNP";
        }
        if let Some(tag) = lexicon(&lower) {
            return tag;
        }

        let suffix = suffix_tag(&lower);
        if capitalized && matches!(suffix, None | Some("NNS")) {
            return "NNP";
        }
        suffix.unwrap_or("NN")
    }
}

impl Tagger for LexiconTagger {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn annotate(&self, text: &str) -> Result<Vec<TaggedToken>, AnnotationError> {
        let tagged = Self::tokenize(text)
            .into_iter()
            .enumerate()
            .map(|(i, token)| {
                let tag = Self::tag(&token, i == 0);
                TaggedToken::new(token, tag)
            })
            .collect();
        Ok(tagged)
    }
}

fn split_clitic(word: &str) -> Vec<String> {
    let lower = word.to_lowercase();
    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let cut = word.len() - clitic.len();
            if word.is_char_boundary(cut) {
                return vec![word[..cut].to_string(), word[cut..].to_string()];
            }
        }
    }
    vec![word.to_string()]
}

fn punctuation_tag(token: &str) -> Option<&'static str> {
    let tag = match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ";" | ":" => ":",
        "(" | "[" | "{" => "(",
        ")" | "]" | "}" => ")",
        "\"" | "'" => "''",
        _ => return None,
    };
    Some(tag)
}

fn is_number(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '%'))
}

fn lexicon(word: &str) -> Option<&'static str> {
    let tag = match word {
        // Determiners
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "every" | "each" | "some"
        | "any" | "no" | "all" | "both" | "another" => "DT",
        // Prepositions / subordinators
        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "from" | "about" | "into" | "over"
        | "under" | "after" | "before" | "between" | "through" | "during" | "without"
        | "than" | "as" | "like" | "near" | "since" | "until" | "because" | "if" | "while"
        | "around" | "against" | "across" => "IN",
        "to" => "TO",
        // Coordinators
        "and" | "or" | "but" | "nor" | "so" | "yet" => "CC",
        // Pronouns
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them"
        | "myself" | "yourself" | "itself" | "themselves" => "PRP",
        "my" | "your" | "his" | "her" | "its" | "our" | "their" => "PRP$",
        // Wh-words
        "what" | "who" | "whom" => "WP",
        "whose" => "WP$",
        "which" => "WDT",
        "where" | "when" | "why" | "how" => "WRB",
        // Modals
        "can" | "could" | "will" | "would" | "shall" | "should" | "may" | "might" | "must"
        | "wo" | "ca" => "MD",
        // Auxiliaries and common verbs
        "is" | "has" | "does" | "'s" => "VBZ",
        "are" | "am" | "have" | "do" | "'re" | "'m" | "'ve" => "VBP",
        "was" | "were" | "had" | "did" | "'d" | "said" | "made" | "went" | "got" | "told"
        | "found" | "saw" | "knew" | "thought" | "took" | "came" | "gave" => "VBD",
        "be" | "find" | "search" | "look" | "get" | "tell" | "go" | "make" | "know" | "think"
        | "see" | "want" | "need" | "give" | "take" | "help" | "show" | "explain" | "please"
        | "let" | "say" | "use" | "try" | "come" => "VB",
        "been" | "done" | "gone" | "known" | "seen" | "given" | "taken" => "VBN",
        "being" => "VBG",
        // Adverbs
        "not" | "n't" | "very" | "too" | "also" | "just" | "now" | "then" | "here" | "there"
        | "really" | "always" | "never" | "often" | "again" | "still" | "already" | "soon"
        | "only" | "even" | "up" | "out" | "down" | "away" => "RB",
        // Common adjectives the suffix rules miss
        "big" | "small" | "good" | "bad" | "new" | "old" | "great" | "little" | "long"
        | "short" | "high" | "low" | "large" | "young" | "hot" | "cold" | "blue" | "red"
        | "green" | "black" | "white" | "best" | "worst" | "fast" | "slow" | "easy" | "hard"
        | "real" | "true" | "false" | "free" | "open" | "full" | "many" | "much" | "few"
        | "other" | "same" | "next" | "last" | "first" => "JJ",
        // Interjections
        "hello" | "hi" | "hey" | "bye" | "goodbye" | "oh" | "ok" | "okay" | "yes" | "yeah"
        | "thanks" | "wow" => "UH",
        _ => return None,
    };
    Some(tag)
}

fn suffix_tag(word: &str) -> Option<&'static str> {
    const ADJECTIVE_SUFFIXES: &[&str] = &[
        "ous", "ful", "able", "ible", "less", "ive", "ical", "ish", "ary", "ic", "al",
    ];

    if word.len() > 4 && word.ends_with("ly") {
        Some("RB")
    } else if word.len() > 4 && word.ends_with("ing") {
        Some("VBG")
    } else if word.len() > 3 && word.ends_with("ed") {
        Some("VBD")
    } else if word.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        Some("JJ")
    } else if word.len() > 3 && word.ends_with("est") {
        Some("JJS")
    } else if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        Some("NNS")
    } else {
        None
    }
}
