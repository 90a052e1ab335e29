//! Coordination: realises each coordinate with the shared features
//! pushed down onto it, interleaving the conjunction word.

use crate::category::LexicalCategory;
use crate::element::{CoordinatedElement, Element, InflectedWordElement, ListElement};
use crate::features::{DiscourseFunction, Feature, NumberAgr};

use super::Syntax;

/// Features a coordination pushes down onto every coordinate.
const SHARED_FEATURES: &[Feature] = &[
    Feature::Progressive,
    Feature::Perfect,
    Feature::Specifier,
    Feature::Gender,
    Feature::Number,
    Feature::Tense,
    Feature::Person,
    Feature::Negated,
    Feature::Modal,
    Feature::Function,
    Feature::Form,
    Feature::ClauseStatus,
];

pub(crate) fn realise(syntax: &Syntax, phrase: &CoordinatedElement) -> Option<Element> {
    let mut out = ListElement::new();
    syntax.realise_into(
        &mut out,
        phrase.features.elements(Feature::PreModifiers),
        DiscourseFunction::PreModifier,
    );

    let mut children: Vec<Element> = phrase.children.clone();
    let conjunction = phrase.conjunction().to_string();

    if !children.is_empty() {
        if phrase.features.bool(Feature::RaiseSpecifier) {
            raise_specifier(&mut children);
        }

        // The last coordinate carries the coordination's possessive
        // marker ("the dog and the woman's house").
        if let Some(last) = children.last_mut() {
            match phrase.features.get(Feature::Possessive) {
                Some(value) => last.set_feature(Feature::Possessive, value.clone()),
                None => {
                    last.features_mut().remove(Feature::Possessive);
                }
            }
        }

        let mut coordinated = ListElement::new();
        for (index, child) in children.iter_mut().enumerate() {
            set_child_features(phrase, child);
            if index > 0 {
                if phrase.features.bool(Feature::AggregateAuxiliary) {
                    child.set_feature(Feature::RealiseAuxiliary, false);
                }
                if child.is_clause() {
                    if let Some(value) = phrase.features.get(Feature::SuppressedComplementiser) {
                        child.set_feature(Feature::SuppressedComplementiser, value.clone());
                    }
                }
                if !conjunction.is_empty() {
                    let mut word =
                        InflectedWordElement::new(conjunction.clone(), LexicalCategory::Conjunction);
                    word.features
                        .set(Feature::Function, DiscourseFunction::Conjunction);
                    coordinated.push(Element::Inflected(word));
                }
            }
            if let Some(current) = syntax.realise(child) {
                coordinated.push(current);
            }
        }
        out.push(Element::List(coordinated));
    }

    syntax.realise_into(
        &mut out,
        phrase.features.elements(Feature::PostModifiers),
        DiscourseFunction::PostModifier,
    );
    syntax.realise_into(
        &mut out,
        phrase.features.elements(Feature::Complements),
        DiscourseFunction::Complement,
    );
    Some(Element::List(out))
}

fn set_child_features(phrase: &CoordinatedElement, child: &mut Element) {
    for &feature in SHARED_FEATURES {
        if let Some(value) = phrase.features.get(feature) {
            child.set_feature(feature, value.clone());
        }
    }
    // A coordinated verb group in a question keeps a single fronted
    // modal rather than one per coordinate.
    if phrase.features.is_set(Feature::Interrogative) {
        child.set_feature(Feature::IgnoreModal, true);
    }
}

/// When every coordinate has the same specifier, keep only the first
/// one: "the apple and the orange" becomes "the apple and orange".
fn raise_specifier(children: &mut [Element]) {
    let Some(test) = children
        .first()
        .and_then(|child| specifier_base_form(child))
        .map(str::to_string)
    else {
        return;
    };

    let all_match = children[1..]
        .iter()
        .all(|child| specifier_base_form(child) == Some(test.as_str()));

    if all_match {
        for child in &mut children[1..] {
            child.set_feature(Feature::Raised, true);
        }
    }
}

fn specifier_base_form(child: &Element) -> Option<&str> {
    child
        .as_phrase()
        .and_then(|phrase| phrase.specifier())
        .and_then(|specifier| specifier.base_form())
}

/// A single coordinate is plural only if marked so; otherwise the
/// coordination as a whole is plural exactly when joined with "and".
pub(crate) fn check_if_plural(phrase: &CoordinatedElement) -> bool {
    match phrase.children.as_slice() {
        [only] => only.features().number(Feature::Number) == Some(NumberAgr::Plural),
        _ => phrase.conjunction() == "and",
    }
}
