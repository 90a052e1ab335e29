//! Generic phrase realisation: premodifiers, head, complements,
//! postmodifiers. Noun phrases, verb phrases, and clauses have their
//! own modules; everything else (adjective, adverb, and prepositional
//! phrases) comes through here.

use crate::category::{LexicalCategory, PhraseCategory};
use crate::element::{Element, InflectedWordElement, ListElement, PhraseElement};
use crate::features::{DiscourseFunction, Feature};

use super::Syntax;

pub(crate) fn realise(syntax: &Syntax, phrase: &PhraseElement) -> Option<Element> {
    let mut out = ListElement::new();

    syntax.realise_into(&mut out, phrase.pre_modifiers(), DiscourseFunction::PreModifier);
    realise_head(syntax, phrase, &mut out);
    realise_complements(syntax, phrase, &mut out);
    syntax.realise_into(&mut out, phrase.post_modifiers(), DiscourseFunction::PostModifier);

    Some(Element::List(out))
}

fn realise_head(syntax: &Syntax, phrase: &PhraseElement, out: &mut ListElement) {
    if let Some(head) = phrase.head() {
        let mut head = head.clone();
        if let Some(value) = phrase.features.get(Feature::Comparative) {
            head.set_feature(Feature::Comparative, value.clone());
        } else if let Some(value) = phrase.features.get(Feature::Superlative) {
            head.set_feature(Feature::Superlative, value.clone());
        }
        if let Some(mut realised) = syntax.realise(&head) {
            realised.set_feature(Feature::Function, DiscourseFunction::Head);
            out.push(realised);
        }
    }
}

/// Complements joined by "and" when there is more than one.
fn realise_complements(syntax: &Syntax, phrase: &PhraseElement, out: &mut ListElement) {
    let mut first_processed = false;
    for complement in phrase.complements() {
        if let Some(mut current) = syntax.realise(complement) {
            current.set_feature(Feature::Function, DiscourseFunction::Complement);
            if first_processed {
                out.push(Element::Inflected(InflectedWordElement::new(
                    "and",
                    LexicalCategory::Conjunction,
                )));
            } else {
                first_processed = true;
            }
            out.push(current);
        }
    }
}

/// True when the clause's only subject is an expletive ("there is...").
pub(crate) fn is_expletive_subject(clause: &PhraseElement) -> bool {
    let subjects = clause.features.elements(Feature::Subjects);
    if subjects.len() != 1 {
        return false;
    }
    match &subjects[0] {
        Element::Phrase(np) if np.category == PhraseCategory::NounPhrase => {
            np.features.bool(Feature::Expletive)
                || np
                    .head()
                    .map(|head| head.bool_feature(Feature::Expletive))
                    .unwrap_or(false)
        }
        Element::Str(text) => text.text.eq_ignore_ascii_case("there"),
        other => other.bool_feature(Feature::Expletive),
    }
}
