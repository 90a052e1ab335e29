//! Clause realisation: the top-level pipeline that orders
//! complementiser, cue phrase, front modifiers, subjects, verb group,
//! and the passive "by" phrase, and rearranges all of it for questions.

use crate::category::LexicalCategory;
use crate::element::{Element, InflectedWordElement, ListElement, PhraseElement};
use crate::features::{
    ClauseStatus, DiscourseFunction, Feature, FeatureValue, Form, InterrogativeType, NumberAgr,
    Person, Tense,
};

use super::{is_copular, verb_phrase, Syntax};

pub(crate) fn realise(syntax: &Syntax, phrase: &PhraseElement) -> Option<Element> {
    // The clause and its verb element are mutated along the way, so the
    // pipeline works on clones and leaves the input untouched.
    let mut clause = phrase.clone();
    let mut verb_element = clause
        .features
        .element(Feature::VerbPhrase)
        .or_else(|| clause.head())
        .cloned();

    check_subject_number_person(&clause, verb_element.as_mut());
    check_discourse_function(&mut clause, verb_element.as_mut());
    copy_front_modifiers(&mut clause, verb_element.as_mut());

    let mut out = ListElement::new();
    add_complementiser(syntax, &clause, &mut out);
    add_cue_phrase(syntax, &clause, &mut out);

    let mut split_verb = None;
    let mut wh_object = false;
    if let Some(kind) = clause.features.interrogative(Feature::Interrogative) {
        wh_object = matches!(
            kind,
            InterrogativeType::WhatObject
                | InterrogativeType::WhoObject
                | InterrogativeType::HowPredicate
                | InterrogativeType::How
                | InterrogativeType::Why
                | InterrogativeType::Where
        );
        split_verb = realise_interrogative(syntax, &mut clause, &mut out, kind);
    } else {
        syntax.realise_into(
            &mut out,
            clause.front_modifiers(),
            DiscourseFunction::FrontModifier,
        );
    }

    add_subjects_to_front(syntax, &clause, &mut out, split_verb.is_some());

    if let Some(passive_split) =
        add_passive_complements_number_person(syntax, &clause, &mut out, verb_element.as_mut())
    {
        split_verb = Some(passive_split);
    }

    if let Some(verb_element) = verb_element {
        realise_verb(syntax, &clause, &mut out, split_verb, verb_element, wh_object);
    }

    add_passive_subjects(syntax, &clause, &mut out);
    add_interrogative_front_modifiers(syntax, &clause, &mut out);
    add_ending_to(syntax, &clause, &mut out);

    Some(Element::List(out))
}

// ==================================================
// Pre-pipeline feature adjustments
// ==================================================

/// Works out number and person agreement from the subjects and writes
/// them onto the verb element. A clause used as a subject stays
/// singular even if it is plural internally.
fn check_subject_number_person(clause: &PhraseElement, verb_element: Option<&mut Element>) {
    let subjects = clause.features.elements(Feature::Subjects);
    let mut plural_subjects = false;
    let mut person = None;

    match subjects {
        [] => {}
        [subject] => match subject {
            Element::Coordinated(coord) => {
                plural_subjects = super::coordinated::check_if_plural(coord);
            }
            _ if subject.is_plural() && !subject.is_clause() => {
                plural_subjects = true;
            }
            Element::Phrase(np) if np.category == crate::category::PhraseCategory::NounPhrase => {
                person = np.features.person(Feature::Person);
                match np.head() {
                    None => {}
                    Some(head) if head.is_plural() => plural_subjects = true,
                    Some(Element::List(_)) => plural_subjects = true,
                    _ => {}
                }
            }
            _ => {}
        },
        _ => plural_subjects = true,
    }

    if let Some(verb_element) = verb_element {
        if plural_subjects {
            verb_element.set_feature(Feature::Number, NumberAgr::Plural);
        } else if let Some(number) = clause.features.get(Feature::Number) {
            verb_element.set_feature(Feature::Number, number.clone());
        } else {
            verb_element.features_mut().remove(Feature::Number);
        }
        if let Some(person) = person {
            verb_element.set_feature(Feature::Person, person);
        }
    }
}

/// A clause filling an object or subject slot changes form: imperatives
/// become infinitives, subject clauses become gerunds, and the
/// complementiser is suppressed.
fn check_discourse_function(clause: &mut PhraseElement, verb_element: Option<&mut Element>) {
    let has_subjects = !clause.features.elements(Feature::Subjects).is_empty();
    let form = clause.features.form(Feature::Form);
    let mut new_form = None;

    match clause.features.function(Feature::Function) {
        Some(DiscourseFunction::Object) | Some(DiscourseFunction::IndirectObject) => {
            if form == Some(Form::Imperative) {
                clause.features.set(Feature::SuppressedComplementiser, true);
                new_form = Some(Form::Infinitive);
            } else if form == Some(Form::Gerund) && !has_subjects {
                clause.features.set(Feature::SuppressedComplementiser, true);
            }
        }
        Some(DiscourseFunction::Subject) => {
            clause.features.set(Feature::SuppressedComplementiser, true);
            new_form = Some(Form::Gerund);
        }
        _ => {}
    }

    // The clause and its verb phrase were split apart above, so the
    // form change has to land on both.
    if let Some(new_form) = new_form {
        clause.features.set(Feature::Form, new_form);
        if let Some(verb_element) = verb_element {
            verb_element.set_feature(Feature::Form, new_form);
        }
    }
}

/// Clause postmodifiers move down onto the verb phrase; an infinitive
/// clause also moves its front modifiers there ("to run quickly").
fn copy_front_modifiers(clause: &mut PhraseElement, verb_element: Option<&mut Element>) {
    let infinitive = clause.features.form(Feature::Form) == Some(Form::Infinitive);

    if let Some(verb_element) = verb_element {
        if let Some(vp) = verb_element.as_phrase_mut() {
            let post_modifiers: Vec<Element> = clause.post_modifiers().to_vec();
            for modifier in post_modifiers {
                if !vp.post_modifiers().contains(&modifier) {
                    vp.add_post_modifier(modifier);
                }
            }
            if infinitive {
                for modifier in clause.front_modifiers().to_vec() {
                    vp.add_post_modifier(modifier);
                }
            }
        }
        if infinitive {
            verb_element.set_feature(Feature::NonMorph, true);
        }
    }

    if infinitive {
        clause.features.set(Feature::SuppressedComplementiser, true);
        clause.features.remove(Feature::FrontModifiers);
    }
}

// ==================================================
// Pipeline steps
// ==================================================

fn add_complementiser(syntax: &Syntax, clause: &PhraseElement, out: &mut ListElement) {
    if clause.features.clause_status(Feature::ClauseStatus) == Some(ClauseStatus::Subordinate)
        && !clause.features.bool(Feature::SuppressedComplementiser)
    {
        let complementiser = match clause.features.get(Feature::Complementiser) {
            Some(FeatureValue::Element(element)) => Some((**element).clone()),
            Some(FeatureValue::Text(text)) => Some(Element::Inflected(
                InflectedWordElement::new(text.clone(), LexicalCategory::Complementiser),
            )),
            _ => None,
        };
        if let Some(complementiser) = complementiser {
            if let Some(current) = syntax.realise(&complementiser) {
                out.push(current);
            }
        }
    }
}

fn add_cue_phrase(syntax: &Syntax, clause: &PhraseElement, out: &mut ListElement) {
    if let Some(cue) = clause.features.element(Feature::CuePhrase) {
        if let Some(mut current) = syntax.realise(cue) {
            current.set_feature(Feature::Function, DiscourseFunction::CuePhrase);
            out.push(current);
        }
    }
}

fn add_subjects_to_front(
    syntax: &Syntax,
    clause: &PhraseElement,
    out: &mut ListElement,
    split_verb: bool,
) {
    let form = clause.features.form(Feature::Form);
    if form != Some(Form::Infinitive)
        && form != Some(Form::Imperative)
        && !clause.features.bool(Feature::Passive)
        && !split_verb
    {
        out.children.extend(realise_subjects(syntax, clause).children);
    }
}

/// Subjects in realisation order. A gerund clause makes its subjects
/// possessive ("his kissing the woman").
fn realise_subjects(syntax: &Syntax, clause: &PhraseElement) -> ListElement {
    let gerund = clause.features.form(Feature::Form) == Some(Form::Gerund);
    let mut out = ListElement::new();
    for subject in clause.features.elements(Feature::Subjects) {
        let mut subject = subject.clone();
        subject.set_feature(Feature::Function, DiscourseFunction::Subject);
        if gerund {
            subject.set_feature(Feature::Possessive, true);
        }
        if let Some(current) = syntax.realise(&subject) {
            out.push(current);
        }
    }
    out
}

/// Raises the objects of a passive clause into subject position and
/// works out the agreement they impose on the verb. In a question the
/// raised object splits the verb group rather than being appended.
fn add_passive_complements_number_person(
    syntax: &Syntax,
    clause: &PhraseElement,
    out: &mut ListElement,
    verb_element: Option<&mut Element>,
) -> Option<Element> {
    let mut split_verb = None;
    let mut passive_number: Option<Option<FeatureValue>> = None;
    let mut passive_person = None;
    let mut num_comps = 0;
    let mut coord_subj = false;

    let interrogative = clause.features.interrogative(Feature::Interrogative);
    let gerund = clause.features.form(Feature::Form) == Some(Form::Gerund);

    if clause.features.bool(Feature::Passive)
        && interrogative != Some(InterrogativeType::WhatObject)
    {
        if let Some(vp) = clause.features.element(Feature::VerbPhrase) {
            for complement in vp.features().elements(Feature::Complements) {
                if complement.features().function(Feature::Function)
                    != Some(DiscourseFunction::Object)
                {
                    continue;
                }
                let mut complement = complement.clone();
                complement.set_feature(Feature::Passive, true);
                if gerund {
                    complement.set_feature(Feature::Possessive, true);
                }
                num_comps += 1;

                if let Some(mut current) = syntax.realise(&complement) {
                    current.set_feature(Feature::Function, DiscourseFunction::Object);
                    if interrogative.is_some() {
                        split_verb = Some(current);
                    } else {
                        out.push(current);
                    }
                }

                if let Element::Coordinated(coord) = &complement {
                    if !coord_subj && coord.conjunction() == "and" {
                        coord_subj = true;
                    }
                }

                passive_number = match passive_number {
                    None => Some(complement.features().get(Feature::Number).cloned()),
                    Some(_) => Some(Some(NumberAgr::Plural.into())),
                };

                match complement.features().person(Feature::Person) {
                    Some(Person::First) => passive_person = Some(Person::First),
                    Some(Person::Second) if passive_person != Some(Person::First) => {
                        passive_person = Some(Person::Second);
                    }
                    _ => {
                        if passive_person.is_none() {
                            passive_person = Some(Person::Third);
                        }
                    }
                }
            }
        }
    }

    if let Some(verb_element) = verb_element {
        if let Some(person) = passive_person {
            verb_element.set_feature(Feature::Person, person);
        }
        if num_comps > 1 || coord_subj {
            verb_element.set_feature(Feature::Number, NumberAgr::Plural);
        } else if let Some(Some(number)) = passive_number {
            verb_element.set_feature(Feature::Number, number);
        }
    }

    split_verb
}

fn realise_verb(
    syntax: &Syntax,
    clause: &PhraseElement,
    out: &mut ListElement,
    split_verb: Option<Element>,
    verb_element: Element,
    wh_object: bool,
) {
    if verb_element.bool_feature(Feature::Elided) {
        return;
    }
    let realised = match &verb_element {
        Element::Phrase(vp) if verb_element.is_verb_phrase() => {
            verb_phrase::realise(syntax, vp, Some(clause))
        }
        other => syntax.realise(other),
    };
    // Mirror the generic traversal: a one-element list collapses.
    let realised = match realised {
        Some(Element::List(list)) if list.children.len() == 1 => list.children.into_iter().next(),
        other => other,
    };
    let Some(mut current) = realised else { return };

    match split_verb {
        None => {
            current.set_feature(Feature::Function, DiscourseFunction::VerbPhrase);
            out.push(current);
        }
        Some(split_verb) => match current {
            Element::List(list) => {
                let mut children = list.children.into_iter();
                if let Some(mut first) = children.next() {
                    first.set_feature(Feature::Function, DiscourseFunction::VerbPhrase);
                    out.push(first);
                }
                out.push(split_verb);
                for mut child in children {
                    child.set_feature(Feature::Function, DiscourseFunction::VerbPhrase);
                    out.push(child);
                }
            }
            mut single => {
                single.set_feature(Feature::Function, DiscourseFunction::VerbPhrase);
                if wh_object {
                    out.push(single);
                    out.push(split_verb);
                } else {
                    out.push(split_verb);
                    out.push(single);
                }
            }
        },
    }
}

/// The agent of a passive clause comes last, inside a "by" phrase.
fn add_passive_subjects(syntax: &Syntax, clause: &PhraseElement, out: &mut ListElement) {
    if !clause.features.bool(Feature::Passive) {
        return;
    }
    let subjects = clause.features.elements(Feature::Subjects);
    // Agentless yes/no passives skip the trailing "by".
    let asks_for_agent = matches!(
        clause.features.interrogative(Feature::Interrogative),
        Some(InterrogativeType::WhoSubject) | Some(InterrogativeType::WhatSubject)
    );
    if !subjects.is_empty() || asks_for_agent {
        let by = syntax.lexicon.lookup("by", LexicalCategory::Preposition);
        if let Some(current) = syntax.realise(&Element::Word(by)) {
            out.push(current);
        }
    }
    for subject in subjects {
        if !(subject.is_noun_phrase() || matches!(subject, Element::Coordinated(_))) {
            continue;
        }
        let mut subject = subject.clone();
        subject.set_feature(Feature::Passive, true);
        if let Some(mut current) = syntax.realise(&subject) {
            current.set_feature(Feature::Function, DiscourseFunction::Subject);
            out.push(current);
        }
    }
}

fn add_interrogative_front_modifiers(syntax: &Syntax, clause: &PhraseElement, out: &mut ListElement) {
    if clause.features.is_set(Feature::Interrogative) {
        for modifier in clause.front_modifiers() {
            if let Some(mut current) = syntax.realise(modifier) {
                current.set_feature(Feature::Function, DiscourseFunction::FrontModifier);
                out.push(current);
            }
        }
    }
}

/// "who did John give the flower to": interrogatives about the indirect
/// object end in "to".
fn add_ending_to(syntax: &Syntax, clause: &PhraseElement, out: &mut ListElement) {
    if clause.features.interrogative(Feature::Interrogative)
        == Some(InterrogativeType::WhoIndirectObject)
    {
        let to = syntax.lexicon.lookup("to", LexicalCategory::Preposition);
        if let Some(current) = syntax.realise(&Element::Word(to)) {
            out.push(current);
        }
    }
}

// ==================================================
// Interrogatives
// ==================================================

/// Fronts the question word and decides whether the subjects split the
/// verb group ("should the man give ..."). Returns the subject list
/// that does the splitting, if any.
fn realise_interrogative(
    syntax: &Syntax,
    clause: &mut PhraseElement,
    out: &mut ListElement,
    kind: InterrogativeType,
) -> Option<Element> {
    match kind {
        InterrogativeType::YesNo => realise_yes_no(syntax, clause, out),
        InterrogativeType::WhoSubject | InterrogativeType::WhatSubject => {
            realise_keyword(syntax, out, kind.keyword(), LexicalCategory::Pronoun);
            clause.features.remove(Feature::Subjects);
            None
        }
        InterrogativeType::HowMany => {
            realise_keyword(syntax, out, Some("how"), LexicalCategory::Pronoun);
            realise_keyword(syntax, out, Some("many"), LexicalCategory::Adverb);
            None
        }
        InterrogativeType::How
        | InterrogativeType::Why
        | InterrogativeType::Where
        | InterrogativeType::WhoObject
        | InterrogativeType::WhoIndirectObject
        | InterrogativeType::WhatObject => {
            realise_object_wh(syntax, clause, out, kind.keyword())
        }
        InterrogativeType::HowPredicate => realise_object_wh(syntax, clause, out, Some("how")),
    }
}

fn realise_keyword(
    syntax: &Syntax,
    out: &mut ListElement,
    keyword: Option<&str>,
    category: LexicalCategory,
) {
    if let Some(keyword) = keyword {
        let word = syntax.lexicon.lookup(keyword, category);
        if let Some(current) = syntax.realise(&Element::Word(word)) {
            out.push(current);
        }
    }
}

fn has_auxiliary(clause: &PhraseElement) -> bool {
    clause.features.is_set(Feature::Modal)
        || clause.features.bool(Feature::Perfect)
        || clause.features.bool(Feature::Progressive)
        || clause.features.tense(Feature::Tense) == Some(Tense::Future)
}

fn realise_object_wh(
    syntax: &Syntax,
    clause: &PhraseElement,
    out: &mut ListElement,
    keyword: Option<&str>,
) -> Option<Element> {
    realise_keyword(syntax, out, keyword, LexicalCategory::Pronoun);

    if !has_auxiliary(clause) && !is_copular(clause.features.element(Feature::VerbPhrase)) {
        add_do_auxiliary(syntax, clause, out);
        None
    } else if !clause.features.bool(Feature::Passive) {
        Some(Element::List(realise_subjects(syntax, clause)))
    } else {
        None
    }
}

fn realise_yes_no(
    syntax: &Syntax,
    clause: &PhraseElement,
    out: &mut ListElement,
) -> Option<Element> {
    let verb_element = clause.features.element(Feature::VerbPhrase);
    let copular = verb_element
        .map(|verb| verb.is_verb_phrase() && is_copular(Some(verb)))
        .unwrap_or(false);

    if !copular
        && !clause.features.bool(Feature::Progressive)
        && !clause.features.is_set(Feature::Modal)
        && clause.features.tense(Feature::Tense) != Some(Tense::Future)
        && !clause.features.bool(Feature::Negated)
        && !clause.features.bool(Feature::Passive)
    {
        add_do_auxiliary(syntax, clause, out);
        None
    } else {
        Some(Element::List(realise_subjects(syntax, clause)))
    }
}

/// Do-support for questions: "does the woman kiss the man".
fn add_do_auxiliary(syntax: &Syntax, clause: &PhraseElement, out: &mut ListElement) {
    let mut do_phrase = PhraseElement::new(crate::category::PhraseCategory::VerbPhrase);
    let word = syntax.lexicon.lookup("do", LexicalCategory::Verb);
    do_phrase.set_head(Element::Word(word));
    if let Some(tense) = clause.features.tense(Feature::Tense) {
        do_phrase.features.set(Feature::Tense, tense);
    }
    if let Some(person) = clause.features.person(Feature::Person) {
        do_phrase.features.set(Feature::Person, person);
    }
    if let Some(number) = clause.features.number(Feature::Number) {
        do_phrase.features.set(Feature::Number, number);
    }
    if let Some(current) = syntax.realise(&Element::Phrase(do_phrase)) {
        out.push(current);
    }
}
