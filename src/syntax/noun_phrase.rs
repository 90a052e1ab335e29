//! Noun-phrase realisation: specifier, ordered premodifiers, head
//! noun, complements, postmodifiers. A pronominal phrase collapses to
//! a single personal pronoun instead.

use crate::category::{LexicalCategory, PhraseCategory};
use crate::element::{Element, InflectedWordElement, ListElement, PhraseElement, WordElement};
use crate::factory::set_pronoun_features;
use crate::features::{DiscourseFunction, Feature, Gender, Person};

use super::Syntax;

// Premodifier slots: qualitative adjectives, then colour, then
// classifying, then nouns.
const QUALITATIVE_POSITION: u8 = 1;
const COLOUR_POSITION: u8 = 2;
const CLASSIFYING_POSITION: u8 = 3;
const NOUN_POSITION: u8 = 4;

pub(crate) fn realise(syntax: &Syntax, phrase: &PhraseElement) -> Option<Element> {
    let mut out = ListElement::new();

    if phrase.features.bool(Feature::Pronominal) {
        out.push(create_pronoun(phrase));
    } else {
        realise_specifier(syntax, phrase, &mut out);
        realise_pre_modifiers(syntax, phrase, &mut out);
        realise_head_noun(syntax, phrase, &mut out);
        syntax.realise_into(&mut out, phrase.complements(), DiscourseFunction::Complement);
        syntax.realise_into(
            &mut out,
            phrase.post_modifiers(),
            DiscourseFunction::PostModifier,
        );
    }

    Some(Element::List(out))
}

fn realise_specifier(syntax: &Syntax, phrase: &PhraseElement, out: &mut ListElement) {
    let Some(specifier) = phrase.specifier() else { return };
    if phrase.features.bool(Feature::Raised) || phrase.features.bool(Feature::Elided) {
        return;
    }

    let mut specifier = specifier.clone();
    if !specifier.is_pronoun() && !specifier.is_noun_phrase() {
        match phrase.features.get(Feature::Number) {
            Some(number) => specifier.set_feature(Feature::Number, number.clone()),
            None => {
                specifier.features_mut().remove(Feature::Number);
            }
        }
    }
    if let Some(mut current) = syntax.realise(&specifier) {
        current.set_feature(Feature::Function, DiscourseFunction::Specifier);
        out.push(current);
    }
}

fn realise_pre_modifiers(syntax: &Syntax, phrase: &PhraseElement, out: &mut ListElement) {
    let mut pre_modifiers = phrase.pre_modifiers().to_vec();
    if phrase.features.bool(Feature::AdjectiveOrdering) {
        sort_np_pre_modifiers(&mut pre_modifiers);
    }
    syntax.realise_into(out, &pre_modifiers, DiscourseFunction::PreModifier);
}

/// The head inherits the phrase-level features that bear on its
/// inflection before being realised.
fn realise_head_noun(syntax: &Syntax, phrase: &PhraseElement, out: &mut ListElement) {
    let Some(head) = phrase.head() else { return };
    let mut head = head.clone();
    for feature in [
        Feature::Elided,
        Feature::Gender,
        Feature::Acronym,
        Feature::Number,
        Feature::Person,
        Feature::Possessive,
        Feature::Passive,
    ] {
        match phrase.features.get(feature) {
            Some(value) => head.set_feature(feature, value.clone()),
            None => {
                head.features_mut().remove(feature);
            }
        }
    }
    if let Some(mut current) = syntax.realise(&head) {
        current.set_feature(Feature::Function, DiscourseFunction::Subject);
        out.push(current);
    }
}

// ==================================================
// Adjective ordering
// ==================================================

/// Bubble sort on slot positions; adjectives whose slots overlap keep
/// their given order.
fn sort_np_pre_modifiers(modifiers: &mut [Element]) {
    if modifiers.len() <= 1 {
        return;
    }
    let mut changes_made = true;
    while changes_made {
        changes_made = false;
        for i in 0..modifiers.len() - 1 {
            if min_pos(&modifiers[i]) > max_pos(&modifiers[i + 1]) {
                modifiers.swap(i, i + 1);
                changes_made = true;
            }
        }
    }
}

fn is_adjective_like(modifier: &Element) -> bool {
    modifier.lexical_category() == Some(LexicalCategory::Adjective)
        || modifier.phrase_category() == Some(PhraseCategory::AdjectivePhrase)
}

fn min_pos(modifier: &Element) -> u8 {
    if modifier.lexical_category() == Some(LexicalCategory::Noun) || modifier.is_noun_phrase() {
        NOUN_POSITION
    } else if is_adjective_like(modifier) {
        match head_features(modifier) {
            Some(features) if features.bool(Feature::Qualitative) => QUALITATIVE_POSITION,
            Some(features) if features.bool(Feature::Colour) => COLOUR_POSITION,
            Some(features) if features.bool(Feature::Classifying) => CLASSIFYING_POSITION,
            _ => QUALITATIVE_POSITION,
        }
    } else {
        QUALITATIVE_POSITION
    }
}

fn max_pos(modifier: &Element) -> u8 {
    if is_adjective_like(modifier) {
        match head_features(modifier) {
            Some(features) if features.bool(Feature::Classifying) => CLASSIFYING_POSITION,
            Some(features) if features.bool(Feature::Colour) => COLOUR_POSITION,
            Some(features) if features.bool(Feature::Qualitative) => QUALITATIVE_POSITION,
            _ => CLASSIFYING_POSITION,
        }
    } else {
        NOUN_POSITION
    }
}

/// Features of the word at the bottom of a modifier, recursing through
/// phrase heads.
fn head_features(element: &Element) -> Option<&crate::features::FeatureMap> {
    match element {
        Element::Word(word) => Some(&word.features),
        Element::Inflected(word) => Some(&word.features),
        Element::Phrase(phrase) => phrase.head().and_then(head_features),
        _ => None,
    }
}

// ==================================================
// Pronominalisation
// ==================================================

/// Replace the whole phrase with a personal pronoun chosen from its
/// person, gender, and number.
fn create_pronoun(phrase: &PhraseElement) -> Element {
    let base = match phrase.features.person(Feature::Person) {
        Some(Person::First) => "I",
        Some(Person::Second) => "you",
        _ => match phrase.features.gender(Feature::Gender) {
            Some(Gender::Feminine) => "she",
            Some(Gender::Masculine) => "he",
            _ => "it",
        },
    };

    let mut word = WordElement::new(base, LexicalCategory::Pronoun);
    set_pronoun_features(&mut word, base);
    let mut pronoun = InflectedWordElement::from_word(&word);

    pronoun
        .features
        .set(Feature::Function, DiscourseFunction::Specifier);
    if let Some(possessive) = phrase.features.get(Feature::Possessive) {
        pronoun.features.set(Feature::Possessive, possessive.clone());
    }
    if let Some(number) = phrase.features.get(Feature::Number) {
        pronoun.features.set(Feature::Number, number.clone());
    }
    if let Some(function) = phrase.features.get(Feature::Function) {
        pronoun.features.set(Feature::Function, function.clone());
    }
    Element::Inflected(pronoun)
}
