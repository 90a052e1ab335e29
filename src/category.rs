//! Lexical, phrasal, and document categories.

use serde::{Deserialize, Serialize};

/// Part-of-speech category of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexicalCategory {
    /// Category not yet determined; behaves as a plain token.
    Any,
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Modal,
    Complementiser,
    Particle,
}

/// Category of a phrase node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhraseCategory {
    Clause,
    NounPhrase,
    VerbPhrase,
    AdjectivePhrase,
    AdverbPhrase,
    PrepositionalPhrase,
}

impl PhraseCategory {
    /// Lexical category expected of this phrase's head word.
    pub fn head_category(self) -> LexicalCategory {
        match self {
            PhraseCategory::Clause | PhraseCategory::VerbPhrase => LexicalCategory::Verb,
            PhraseCategory::NounPhrase => LexicalCategory::Noun,
            PhraseCategory::AdjectivePhrase => LexicalCategory::Adjective,
            PhraseCategory::AdverbPhrase => LexicalCategory::Adverb,
            PhraseCategory::PrepositionalPhrase => LexicalCategory::Preposition,
        }
    }
}

/// Level of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentCategory {
    Document,
    Paragraph,
    Sentence,
}

impl DocumentCategory {
    /// Whether `child` may sit directly under a node of this category
    /// without promotion.
    pub fn accepts(self, child: DocumentCategory) -> bool {
        match self {
            DocumentCategory::Document => matches!(child, DocumentCategory::Paragraph),
            DocumentCategory::Paragraph => matches!(child, DocumentCategory::Sentence),
            DocumentCategory::Sentence => false,
        }
    }
}
