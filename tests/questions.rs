//! Interrogatives: yes/no questions, WH questions over each grammatical
//! slot, and their interaction with auxiliaries and the passive.

use phrasal::{InterrogativeType, NlgFactory, Realiser};

fn realise(clause: &phrasal::ClauseSpec) -> String {
    Realiser::new().realise_sentence(&clause.to_element())
}

#[test]
fn yes_no_takes_do_support() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_interrogative(InterrogativeType::YesNo);
    assert_eq!(realise(&clause), "Does the woman kiss the man?");
}

#[test]
fn yes_no_with_modal_fronts_the_modal() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_modal("should");
    clause.set_interrogative(InterrogativeType::YesNo);
    assert_eq!(realise(&clause), "Should the woman kiss the man?");
}

#[test]
fn yes_no_passive_fronts_be() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause((), "intubate", "the baby");
    clause.set_passive(true);
    clause.set_interrogative(InterrogativeType::YesNo);
    assert_eq!(realise(&clause), "Is the baby intubated?");
}

#[test]
fn who_subject_passive_keeps_trailing_by() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the nurse", "intubate", "the baby");
    clause.set_passive(true);
    clause.set_interrogative(InterrogativeType::WhoSubject);
    assert_eq!(realise(&clause), "Who is the baby intubated by?");
}

#[test]
fn who_object() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_interrogative(InterrogativeType::WhoObject);
    assert_eq!(realise(&clause), "Who does the woman kiss?");
}

#[test]
fn what_object() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_interrogative(InterrogativeType::WhatObject);
    assert_eq!(realise(&clause), "What does the woman kiss?");
}

#[test]
fn who_subject_replaces_the_subject() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_interrogative(InterrogativeType::WhoSubject);
    assert_eq!(realise(&clause), "Who kisses the man?");
}

#[test]
fn where_keeps_the_object() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_interrogative(InterrogativeType::Where);
    assert_eq!(realise(&clause), "Where does the woman kiss the man?");
}

#[test]
fn how_many_fronts_the_quantifier() {
    let factory = NlgFactory::new();
    let mut dogs = factory.create_noun_phrase("dog");
    dogs.set_plural(true);
    let mut clause = factory.create_clause("the woman", "buy", dogs);
    clause.set_interrogative(InterrogativeType::HowMany);
    assert_eq!(realise(&clause), "How many the woman buy dogs?");
}

#[test]
fn who_indirect_object_ends_in_to() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the man", "give", "the flower");
    clause.set_indirect_object(factory.create_noun_phrase_with_specifier("the", "woman").into());
    clause.set_interrogative(InterrogativeType::WhoIndirectObject);
    assert_eq!(realise(&clause), "Who does the man give the flower to?");
}

#[test]
fn question_mark_survives_document_wrapping() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_interrogative(InterrogativeType::YesNo);
    let sentence = factory.create_sentence(vec![clause.to_element()]);
    let realiser = Realiser::new();
    assert_eq!(
        realiser.realise_sentence(&sentence),
        "Does the woman kiss the man?"
    );
}
