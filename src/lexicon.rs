//! Word lookup seam.
//!
//! The realiser asks a [`Lexicon`] for the words it needs to conjure out
//! of thin air ("be", "do", "not", the WH words). The default
//! [`SimpleLexicon`] builds plain words on demand; a richer
//! implementation can attach irregular-inflection features that the
//! morphology pass will prefer over the regular rules.

use crate::category::LexicalCategory;
use crate::element::WordElement;
use crate::features::{Feature, NumberAgr};

pub trait Lexicon {
    /// Look up `base` as a word of the given category. Always succeeds;
    /// an unknown word is returned as-is with no extra features.
    fn lookup(&self, base: &str, category: LexicalCategory) -> WordElement;
}

/// A lexicon with no backing store. Closed-class words the syntax pass
/// requests are given their category and agreement features; everything
/// else comes back as a plain word.
#[derive(Debug, Default, Clone)]
pub struct SimpleLexicon;

impl SimpleLexicon {
    pub fn new() -> Self {
        SimpleLexicon
    }
}

impl Lexicon for SimpleLexicon {
    fn lookup(&self, base: &str, category: LexicalCategory) -> WordElement {
        let mut word = WordElement::new(base, category);
        match base {
            "there" => {
                word.features.set(Feature::Expletive, true);
                word.features.set(Feature::Number, NumberAgr::Both);
            }
            "do" => {
                word.features.set(Feature::Present3sForm, "does");
                word.features.set(Feature::PastForm, "did");
                word.features.set(Feature::PastParticipleForm, "done");
            }
            "have" => {
                word.features.set(Feature::Present3sForm, "has");
                word.features.set(Feature::PastForm, "had");
                word.features.set(Feature::PastParticipleForm, "had");
            }
            "will" | "would" | "can" | "could" | "may" | "might" | "shall" | "should"
            | "must" => {
                if category == LexicalCategory::Any {
                    word.category = LexicalCategory::Modal;
                }
            }
            _ => {}
        }
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auxiliary_verbs_carry_irregular_forms() {
        let lexicon = SimpleLexicon::new();
        let word = lexicon.lookup("do", LexicalCategory::Verb);
        assert_eq!(word.features.text(Feature::Present3sForm), Some("does"));
        assert_eq!(word.features.text(Feature::PastForm), Some("did"));
        assert_eq!(word.features.text(Feature::PastParticipleForm), Some("done"));

        let word = lexicon.lookup("have", LexicalCategory::Verb);
        assert_eq!(word.features.text(Feature::Present3sForm), Some("has"));
        assert_eq!(word.features.text(Feature::PastForm), Some("had"));
        assert_eq!(word.features.text(Feature::PastParticipleForm), Some("had"));
    }

    #[test]
    fn modal_resolves_from_any_category() {
        let lexicon = SimpleLexicon::new();
        let word = lexicon.lookup("should", LexicalCategory::Any);
        assert_eq!(word.category, LexicalCategory::Modal);
    }
}
