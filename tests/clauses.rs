//! Declarative sentences: tense, aspect, negation, modals, passives,
//! and non-finite clause forms.

use phrasal::{ClauseStatus, Feature, Form, NlgFactory, Realiser, Tense};

fn realise(clause: &phrasal::ClauseSpec) -> String {
    Realiser::new().realise_sentence(&clause.to_element())
}

#[test]
fn simple_present() {
    let factory = NlgFactory::new();
    let clause = factory.create_clause("the woman", "kiss", "the man");
    assert_eq!(realise(&clause), "The woman kisses the man.");
}

#[test]
fn simple_past() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_tense(Tense::Past);
    assert_eq!(realise(&clause), "The woman kissed the man.");
}

#[test]
fn future_takes_will() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_tense(Tense::Future);
    assert_eq!(realise(&clause), "The woman will kiss the man.");
}

#[test]
fn perfect() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_perfect(true);
    assert_eq!(realise(&clause), "The woman has kissed the man.");
}

#[test]
fn progressive() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_progressive(true);
    assert_eq!(realise(&clause), "The woman is kissing the man.");
}

#[test]
fn past_progressive_perfect() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_tense(Tense::Past);
    clause.set_perfect(true);
    clause.set_progressive(true);
    assert_eq!(realise(&clause), "The woman had been kissing the man.");
}

#[test]
fn negation_gets_do_support() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_tense(Tense::Past);
    clause.set_negated(true);
    assert_eq!(realise(&clause), "The woman did not kiss the man.");
}

#[test]
fn negated_copular_skips_do() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "be", "nice");
    clause.set_negated(true);
    assert_eq!(realise(&clause), "The woman is not nice.");
}

#[test]
fn modal() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_modal("should");
    assert_eq!(realise(&clause), "The woman should kiss the man.");
}

#[test]
fn past_modal_takes_have() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_modal("should");
    clause.set_tense(Tense::Past);
    assert_eq!(realise(&clause), "The woman should have kissed the man.");
}

#[test]
fn negated_modal() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_modal("should");
    clause.set_negated(true);
    assert_eq!(realise(&clause), "The woman should not kiss the man.");
}

#[test]
fn passive_without_agent() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause((), "intubate", "the baby");
    clause.set_passive(true);
    assert_eq!(realise(&clause), "The baby is intubated.");
}

#[test]
fn passive_with_by_phrase() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the nurse", "intubate", "the baby");
    clause.set_passive(true);
    assert_eq!(realise(&clause), "The baby is intubated by the nurse.");
}

#[test]
fn imperative() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause((), "run", ());
    clause.set_form(Form::Imperative);
    assert_eq!(realise(&clause), "Run.");
}

#[test]
fn infinitive_drops_subject() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_form(Form::Infinitive);
    assert_eq!(realise(&clause), "To kiss the man.");
}

#[test]
fn verb_particle_stays_with_verb() {
    let factory = NlgFactory::new();
    let clause = factory.create_clause("the man", "pick up", "the ball");
    assert_eq!(realise(&clause), "The man picks up the ball.");
}

#[test]
fn subordinate_clause_takes_that() {
    let factory = NlgFactory::new();
    let mut inner = factory.create_clause("the woman", "kiss", "the man");
    inner.set_clause_status(ClauseStatus::Subordinate);
    let mut outer = factory.create_clause("the man", "say", ());
    outer.add_complement(inner.to_element());
    assert_eq!(realise(&outer), "The man says that the woman kisses the man.");
}

#[test]
fn subject_clause_becomes_possessive_gerund() {
    let factory = NlgFactory::new();
    let subject = factory.create_noun_phrase_with_specifier("the", "woman");
    let inner = factory.create_clause(subject, "kiss", "the man");
    let outer = factory.create_clause(inner.to_element(), "upset", "the man");
    assert_eq!(
        realise(&outer),
        "The woman's kissing the man upsets the man."
    );
}

#[test]
fn elided_complement_leaves_no_trace() {
    let factory = NlgFactory::new();
    let mut man = factory.create_noun_phrase_with_specifier("the", "man").to_element();
    man.set_feature(Feature::Elided, true);
    let clause = factory.create_clause("the woman", "kiss", man);
    assert_eq!(realise(&clause), "The woman kisses.");
}

#[test]
fn expletive_subject_agrees_with_complement() {
    let factory = NlgFactory::new();
    let mut dogs = factory.create_noun_phrase_with_specifier("the", "dog");
    dogs.set_plural(true);
    let clause = factory.create_clause("there", "be", dogs);
    assert_eq!(realise(&clause), "There are the dogs.");

    let dog = factory.create_noun_phrase_with_specifier("the", "dog");
    let clause = factory.create_clause("there", "be", dog);
    assert_eq!(realise(&clause), "There is the dog.");
}

#[test]
fn front_modifier_comes_first() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.add_front_modifier(factory.create_adverb_phrase("quickly"));
    assert_eq!(realise(&clause), "Quickly the woman kisses the man.");
}

#[test]
fn realisation_is_repeatable() {
    let factory = NlgFactory::new();
    let mut clause = factory.create_clause("the woman", "kiss", "the man");
    clause.set_tense(Tense::Past);
    clause.set_negated(true);
    let first = realise(&clause);
    let second = realise(&clause);
    assert_eq!(first, second);
    assert!(clause.feature(Feature::Tense).is_some());
}
