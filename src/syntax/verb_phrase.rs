//! Verb-group construction and verb-phrase realisation.
//!
//! The verb group is built as a stack: the main verb goes on first and
//! auxiliaries pile on top of it in the order passive "be", progressive
//! "be", perfect "have", negation, do-support, and finally the modal.
//! The stack is then split into the auxiliary group and the main group
//! so that a clause can interleave its subject between them
//! ("should the man give ...").

use crate::category::{LexicalCategory, PhraseCategory};
use crate::element::{Element, InflectedWordElement, ListElement, PhraseElement, StringElement};
use crate::features::{
    DiscourseFunction, Feature, Form, InterrogativeType, NumberAgr, Tense,
};

use super::{phrase, Syntax};

pub(crate) fn realise(
    syntax: &Syntax,
    vp: &PhraseElement,
    clause: Option<&PhraseElement>,
) -> Option<Element> {
    let stack = create_verb_group(syntax, vp, clause);
    let (main_group, auxiliary_group) = split_verb_group(stack);

    let mut out = ListElement::new();

    let realise_auxiliary = !vp.features.is_set(Feature::RealiseAuxiliary)
        || vp.features.bool(Feature::RealiseAuxiliary);

    if realise_auxiliary {
        realise_auxiliaries(syntax, &mut out, auxiliary_group);
        syntax.realise_into(&mut out, vp.pre_modifiers(), DiscourseFunction::PreModifier);
        realise_main_verb(syntax, vp, main_group, &mut out);
    } else if is_copular(vp.head()) {
        realise_main_verb(syntax, vp, main_group, &mut out);
        syntax.realise_into(&mut out, vp.pre_modifiers(), DiscourseFunction::PreModifier);
    } else {
        syntax.realise_into(&mut out, vp.pre_modifiers(), DiscourseFunction::PreModifier);
        realise_main_verb(syntax, vp, main_group, &mut out);
    }

    realise_complements(syntax, vp, &mut out);
    syntax.realise_into(&mut out, vp.post_modifiers(), DiscourseFunction::PostModifier);

    Some(Element::List(out))
}

// ==================================================
// Verb-group stack
// ==================================================

fn create_verb_group(
    syntax: &Syntax,
    vp: &PhraseElement,
    clause: Option<&PhraseElement>,
) -> Vec<Element> {
    let form = vp.features.form(Feature::Form);
    let modal = vp.features.text(Feature::Modal).map(str::to_string);
    let interrogative = vp.features.is_set(Feature::Interrogative);

    let mut tense = vp.features.tense(Feature::Tense).unwrap_or(Tense::Present);
    if matches!(form, Some(Form::Gerund) | Some(Form::Infinitive)) {
        tense = Tense::Present;
    }

    let mut modal_past = false;
    let actual_modal: Option<String> = if form == Some(Form::Infinitive) {
        Some("to".to_string())
    } else if form.is_none() || form == Some(Form::Normal) {
        if tense == Tense::Future
            && modal.is_none()
            && (!head_is_coordinated(vp) || interrogative)
        {
            Some("will".to_string())
        } else if let Some(modal) = &modal {
            if tense == Tense::Past {
                modal_past = true;
            }
            Some(modal.clone())
        } else {
            None
        }
    } else {
        None
    };

    let mut stack: Vec<Element> = Vec::new();
    push_particle(syntax, vp, &mut stack);

    let mut front = grab_head_verb(vp, tense, modal.is_some());
    check_imperative_infinitive(form, front.as_mut());

    if vp.features.bool(Feature::Passive) {
        front = add_be(front, &mut stack, Form::PastParticiple);
    }
    if vp.features.bool(Feature::Progressive) {
        front = add_be(front, &mut stack, Form::PresentParticiple);
    }
    if vp.features.bool(Feature::Perfect) || modal_past {
        front = add_have(syntax, front, &mut stack, modal.as_deref(), tense);
    }

    front = push_if_modal(actual_modal.is_some(), vp, front, &mut stack);
    front = create_not(syntax, vp, &mut stack, front, modal.is_some());

    if let Some(front) = front {
        push_front_verb(vp, clause, &mut stack, front, form, interrogative);
    }

    push_modal(actual_modal, vp, &mut stack);
    stack
}

/// The main group runs from the bottom of the stack up to and including
/// the first word that is not "not"; the rest is the auxiliary group.
/// Both come back ordered front-of-group first.
fn split_verb_group(stack: Vec<Element>) -> (Vec<Element>, Vec<Element>) {
    let mut main_group = Vec::new();
    let mut auxiliary_group = Vec::new();
    let mut main_verb_seen = false;

    for word in stack {
        if !main_verb_seen {
            let is_not = word.base_form() == Some("not");
            main_group.push(word);
            if !is_not {
                main_verb_seen = true;
            }
        } else {
            auxiliary_group.push(word);
        }
    }

    main_group.reverse();
    auxiliary_group.reverse();
    (main_group, auxiliary_group)
}

fn realise_auxiliaries(syntax: &Syntax, out: &mut ListElement, auxiliary_group: Vec<Element>) {
    for auxiliary in auxiliary_group {
        if let Some(mut current) = syntax.realise(&auxiliary) {
            current.set_feature(Feature::Function, DiscourseFunction::Auxiliary);
            out.push(current);
        }
    }
}

fn realise_main_verb(
    syntax: &Syntax,
    vp: &PhraseElement,
    main_group: Vec<Element>,
    out: &mut ListElement,
) {
    for mut main in main_group {
        if let Some(value) = vp.features.get(Feature::Interrogative) {
            main.set_feature(Feature::Interrogative, value.clone());
        }
        if let Some(current) = syntax.realise(&main) {
            out.push(current);
        }
    }
}

fn push_particle(syntax: &Syntax, vp: &PhraseElement, stack: &mut Vec<Element>) {
    match vp.features.get(Feature::Particle) {
        Some(crate::features::FeatureValue::Text(particle)) => {
            stack.push(Element::Str(StringElement::new(particle.clone())));
        }
        Some(crate::features::FeatureValue::Element(particle)) => {
            if let Some(realised) = syntax.realise(particle) {
                stack.push(realised);
            }
        }
        _ => {}
    }
}

/// The head verb becomes the initial front of the group, carrying the
/// group's tense. A modal turns off negation on the verb itself since
/// "not" attaches to the modal instead.
fn grab_head_verb(vp: &PhraseElement, tense: Tense, has_modal: bool) -> Option<Element> {
    let head = vp.head()?;
    let mut front = match head {
        Element::Word(word) => Element::Inflected(InflectedWordElement::from_word(word)),
        other => other.clone(),
    };
    front.set_feature(Feature::Tense, tense);
    if has_modal {
        front.set_feature(Feature::Negated, false);
    }
    Some(front)
}

fn check_imperative_infinitive(form: Option<Form>, front: Option<&mut Element>) {
    if matches!(
        form,
        Some(Form::Imperative) | Some(Form::Infinitive) | Some(Form::BareInfinitive)
    ) {
        if let Some(front) = front {
            front.set_feature(Feature::NonMorph, true);
        }
    }
}

fn add_be(front: Option<Element>, stack: &mut Vec<Element>, front_form: Form) -> Option<Element> {
    if let Some(mut front) = front {
        front.set_feature(Feature::Form, front_form);
        stack.push(front);
    }
    Some(Element::Inflected(InflectedWordElement::new(
        "be",
        LexicalCategory::Verb,
    )))
}

fn add_have(
    syntax: &Syntax,
    front: Option<Element>,
    stack: &mut Vec<Element>,
    modal: Option<&str>,
    tense: Tense,
) -> Option<Element> {
    if let Some(mut front) = front {
        front.set_feature(Feature::Form, Form::PastParticiple);
        stack.push(front);
    }
    let word = syntax.lexicon.lookup("have", LexicalCategory::Verb);
    let mut have = InflectedWordElement::from_word(&word);
    have.features.set(Feature::Tense, tense);
    if modal.is_some() {
        have.features.set(Feature::NonMorph, true);
    }
    Some(Element::Inflected(have))
}

fn push_if_modal(
    has_modal: bool,
    vp: &PhraseElement,
    front: Option<Element>,
    stack: &mut Vec<Element>,
) -> Option<Element> {
    if has_modal && !vp.features.bool(Feature::IgnoreModal) {
        if let Some(mut front) = front {
            front.set_feature(Feature::NonMorph, true);
            stack.push(front);
        }
        None
    } else {
        front
    }
}

/// Inserts "not", adding do-support when there is nothing else to hang
/// the negation on. Object WH questions skip the "do": the clause has
/// already fronted one.
fn create_not(
    syntax: &Syntax,
    vp: &PhraseElement,
    stack: &mut Vec<Element>,
    front: Option<Element>,
    has_modal: bool,
) -> Option<Element> {
    if !vp.features.bool(Feature::Negated) {
        return front;
    }

    let interrogative = vp.features.interrogative(Feature::Interrogative);
    let add_do = !matches!(
        interrogative,
        Some(InterrogativeType::WhatObject) | Some(InterrogativeType::WhoObject)
    );

    let not_word = || {
        Element::Inflected(InflectedWordElement::new("not", LexicalCategory::Adverb))
    };

    if !stack.is_empty() || is_copular(front.as_ref()) {
        stack.push(not_word());
        front
    } else {
        let mut new_front = front;
        if let Some(mut front) = new_front.take() {
            if !has_modal {
                front.set_feature(Feature::Negated, true);
                stack.push(front);
            } else {
                new_front = Some(front);
            }
        }
        stack.push(not_word());
        if add_do {
            let word = syntax.lexicon.lookup("do", LexicalCategory::Verb);
            new_front = Some(Element::Inflected(InflectedWordElement::from_word(&word)));
        }
        new_front
    }
}

fn push_front_verb(
    vp: &PhraseElement,
    clause: Option<&PhraseElement>,
    stack: &mut Vec<Element>,
    mut front: Element,
    form: Option<Form>,
    interrogative: bool,
) {
    let interrogative_type = vp.features.interrogative(Feature::Interrogative);

    match form {
        Some(Form::Gerund) | Some(Form::PresentParticiple) => {
            front.set_feature(Feature::Form, Form::PresentParticiple);
            stack.push(front);
        }
        Some(Form::PastParticiple) => {
            front.set_feature(Feature::Form, Form::PastParticiple);
            stack.push(front);
        }
        _ => {
            let non_normal_form = !matches!(form, None | Some(Form::Normal));
            if (non_normal_form || interrogative) && !is_copular(vp.head()) && stack.is_empty() {
                // WH subject questions keep normal agreement on the verb.
                if !matches!(
                    interrogative_type,
                    Some(InterrogativeType::WhoSubject) | Some(InterrogativeType::WhatSubject)
                ) {
                    front.set_feature(Feature::NonMorph, true);
                }
                stack.push(front);
            } else {
                let number = determine_number(clause, vp);
                if let Some(tense) = vp.features.tense(Feature::Tense) {
                    front.set_feature(Feature::Tense, tense);
                }
                if let Some(person) = vp.features.person(Feature::Person) {
                    front.set_feature(Feature::Person, person);
                }
                front.set_feature(Feature::Number, number);

                // A negated WH object question already carries "do not";
                // the main verb stays out of the group here.
                let negated_wh_object = vp.features.bool(Feature::Negated)
                    && matches!(
                        interrogative_type,
                        Some(InterrogativeType::WhoObject) | Some(InterrogativeType::WhatObject)
                    );
                if !negated_wh_object {
                    stack.push(front);
                }
            }
        }
    }
}

fn push_modal(actual_modal: Option<String>, vp: &PhraseElement, stack: &mut Vec<Element>) {
    if let Some(modal) = actual_modal {
        if !vp.features.bool(Feature::IgnoreModal) {
            stack.push(Element::Inflected(InflectedWordElement::new(
                modal,
                LexicalCategory::Modal,
            )));
        }
    }
}

// ==================================================
// Agreement and complements
// ==================================================

/// Number agreement for the front verb. For copular clauses with an
/// expletive or WH subject the number comes from the complements
/// instead ("there are two dogs").
fn determine_number(clause: Option<&PhraseElement>, vp: &PhraseElement) -> NumberAgr {
    let mut number = vp.features.number(Feature::Number).unwrap_or(NumberAgr::Singular);

    if let Some(clause) = clause {
        let wh_subject = matches!(
            clause.features.interrogative(Feature::Interrogative),
            Some(InterrogativeType::WhoSubject) | Some(InterrogativeType::WhatSubject)
        );
        if (phrase::is_expletive_subject(clause) || wh_subject) && is_copular(vp.head()) {
            number = if has_plural_complement(vp.complements()) {
                NumberAgr::Plural
            } else {
                NumberAgr::Singular
            };
        }
    }
    number
}

fn has_plural_complement(complements: &[Element]) -> bool {
    complements
        .iter()
        .any(|complement| complement.is_noun_phrase() && complement.is_plural())
}

/// Complements realise indirect objects first, then direct objects,
/// then the rest. Passive phrases suppress their objects (the clause
/// raises them to subject position), and WH object questions suppress
/// the object being asked about.
fn realise_complements(syntax: &Syntax, vp: &PhraseElement, out: &mut ListElement) {
    let mut indirects = Vec::new();
    let mut directs = Vec::new();
    let mut unknowns = Vec::new();

    for complement in vp.complements() {
        let function = complement.features().function(Feature::Function);
        if let Some(mut current) = syntax.realise(complement) {
            current.set_feature(Feature::Function, DiscourseFunction::Complement);
            match function {
                Some(DiscourseFunction::IndirectObject) => indirects.push(current),
                Some(DiscourseFunction::Object) => directs.push(current),
                _ => unknowns.push(current),
            }
        }
    }

    let interrogative = vp.features.interrogative(Feature::Interrogative);
    if !interrogative.map(InterrogativeType::is_indirect_object).unwrap_or(false) {
        out.children.extend(indirects);
    }
    if !vp.features.bool(Feature::Passive) {
        if !interrogative.map(InterrogativeType::is_object).unwrap_or(false) {
            out.children.extend(directs);
        }
        out.children.extend(unknowns);
    }
}

fn head_is_coordinated(vp: &PhraseElement) -> bool {
    matches!(vp.head(), Some(Element::Coordinated(_)))
}

/// Whether the element is (or is headed by) the copula "be".
pub(crate) fn is_copular(element: Option<&Element>) -> bool {
    match element {
        Some(Element::Word(word)) => word.base.eq_ignore_ascii_case("be"),
        Some(Element::Inflected(word)) => word.base.eq_ignore_ascii_case("be"),
        Some(Element::Phrase(phrase)) => match phrase.category {
            PhraseCategory::Clause => {
                is_copular(phrase.features.element(Feature::VerbPhrase))
            }
            _ => is_copular(phrase.head()),
        },
        _ => false,
    }
}
