//! The syntax pass: turns a phrase tree into an ordered list of
//! inflection-ready words.
//!
//! Dispatch is by element variant and phrase category. Each helper
//! module returns a fresh `ListElement` of realised parts; nothing in
//! the input tree is mutated, so the same spec can be realised twice
//! with the same result.

mod clause;
mod coordinated;
mod noun_phrase;
mod phrase;
mod verb_phrase;

pub(crate) use verb_phrase::is_copular;

use crate::category::PhraseCategory;
use crate::element::{Element, InflectedWordElement, ListElement};
use crate::features::{DiscourseFunction, Feature};
use crate::lexicon::Lexicon;

/// One syntax traversal. Holds the lexicon used to conjure auxiliary
/// words ("do", "not", "be", the WH pronouns).
pub(crate) struct Syntax<'a> {
    pub(crate) lexicon: &'a dyn Lexicon,
}

impl Syntax<'_> {
    /// Realise a single element. `None` means the element contributes
    /// nothing to the output (elided, or an empty phrase).
    pub(crate) fn realise(&self, element: &Element) -> Option<Element> {
        if element.bool_feature(Feature::Elided) {
            return None;
        }

        let realised = match element {
            Element::Document(doc) => {
                let mut out = doc.clone();
                out.children = doc
                    .children
                    .iter()
                    .filter_map(|child| self.realise(child))
                    .collect();
                Some(Element::Document(out))
            }
            Element::Phrase(phrase) => match phrase.category {
                PhraseCategory::Clause => clause::realise(self, phrase),
                PhraseCategory::NounPhrase => noun_phrase::realise(self, phrase),
                PhraseCategory::VerbPhrase => verb_phrase::realise(self, phrase, None),
                _ => phrase::realise(self, phrase),
            },
            Element::Coordinated(coord) => coordinated::realise(self, coord),
            Element::List(list) => {
                let mut out = ListElement::new();
                out.features = list.features.clone();
                for child in &list.children {
                    if let Some(realised) = self.realise(child) {
                        out.push(realised);
                    }
                }
                Some(Element::List(out))
            }
            Element::Word(word) => Some(Element::Inflected(InflectedWordElement::from_word(word))),
            Element::Inflected(_) | Element::Str(_) => Some(element.clone()),
        };

        // A list holding exactly one element collapses to that element.
        match realised {
            Some(Element::List(list)) if list.children.len() == 1 => {
                list.children.into_iter().next()
            }
            other => other,
        }
    }

    /// Realise `elements` as a nested list carrying `function`, keeping
    /// the sub-list structure for the later passes.
    pub(crate) fn realise_into(
        &self,
        out: &mut ListElement,
        elements: &[Element],
        function: DiscourseFunction,
    ) {
        let mut realised_list = ListElement::new();
        for each in elements {
            if let Some(mut current) = self.realise(each) {
                current.set_feature(Feature::Function, function);
                if each.bool_feature(Feature::Appositive) {
                    current.set_feature(Feature::Appositive, true);
                }
                realised_list.push(current);
            }
        }
        if !realised_list.children.is_empty() {
            out.push(Element::List(realised_list));
        }
    }
}
