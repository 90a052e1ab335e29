//! Noun phrases: determiner agreement, pluralisation, premodifier
//! ordering, possessives, pronominalisation, and coordination.

use phrasal::{
    Feature, Gender, LexicalCategory, NlgFactory, NounPhraseSpec, Realiser,
};

fn realise_np(np: &NounPhraseSpec) -> String {
    Realiser::new().realise_sentence(&np.to_element())
}

fn realise(clause: &phrasal::ClauseSpec) -> String {
    Realiser::new().realise_sentence(&clause.to_element())
}

#[test]
fn indefinite_article_agreement() {
    let factory = NlgFactory::new();
    assert_eq!(
        realise_np(&factory.create_noun_phrase_with_specifier("a", "owl")),
        "An owl."
    );
    assert_eq!(
        realise_np(&factory.create_noun_phrase_with_specifier("a", "dog")),
        "A dog."
    );
    assert_eq!(
        realise_np(&factory.create_noun_phrase_with_specifier("a", "elephant")),
        "An elephant."
    );
}

#[test]
fn plural_indefinite_becomes_some() {
    let factory = NlgFactory::new();
    let mut np = factory.create_noun_phrase_with_specifier("a", "dog");
    np.set_plural(true);
    assert_eq!(realise_np(&np), "Some dogs.");
}

#[test]
fn demonstratives_agree_in_number() {
    let factory = NlgFactory::new();
    let mut np = factory.create_noun_phrase_with_specifier("this", "dog");
    np.set_plural(true);
    assert_eq!(realise_np(&np), "These dogs.");

    let np = factory.create_noun_phrase_with_specifier("this", "dog");
    assert_eq!(realise_np(&np), "This dog.");
}

#[test]
fn article_agrees_with_premodifier_not_head() {
    let factory = NlgFactory::new();
    let mut np = factory.create_noun_phrase_with_specifier("a", "owl");
    np.add_pre_modifier(factory.create_word("grey", LexicalCategory::Adjective));
    assert_eq!(realise_np(&np), "A grey owl.");

    let mut np = factory.create_noun_phrase_with_specifier("a", "dog");
    np.add_pre_modifier(factory.create_word("ugly", LexicalCategory::Adjective));
    assert_eq!(realise_np(&np), "An ugly dog.");
}

#[test]
fn adjectives_reorder_by_slot() {
    let factory = NlgFactory::new();
    let mut np = factory.create_noun_phrase_with_specifier("the", "dog");
    let mut black = factory.create_word("black", LexicalCategory::Adjective);
    black.set_feature(Feature::Colour, true);
    let mut small = factory.create_word("small", LexicalCategory::Adjective);
    small.set_feature(Feature::Qualitative, true);
    np.add_pre_modifier(black);
    np.add_pre_modifier(small);
    assert_eq!(realise_np(&np), "The small, black dog.");
}

#[test]
fn possessive_noun_phrase_as_specifier() {
    let factory = NlgFactory::new();
    let mut dog = factory.create_noun_phrase_with_specifier("the", "dog");
    dog.set_feature(Feature::Possessive, true);
    let mut np = factory.create_noun_phrase("bone");
    np.set_specifier(dog.into());
    assert_eq!(realise_np(&np), "The dog's bone.");
}

#[test]
fn pronominal_subject_and_object() {
    let factory = NlgFactory::new();
    let mut woman = factory.create_noun_phrase_with_specifier("the", "woman");
    woman.set_pronominal(true);
    woman.set_feature(Feature::Gender, Gender::Feminine);
    let mut man = factory.create_noun_phrase_with_specifier("the", "man");
    man.set_pronominal(true);
    man.set_feature(Feature::Gender, Gender::Masculine);
    let clause = factory.create_clause(woman, "kiss", man);
    assert_eq!(realise(&clause), "She kisses him.");
}

#[test]
fn coordination_joins_with_and() {
    let factory = NlgFactory::new();
    let coordinated = factory.create_coordinated_phrase(
        factory.create_noun_phrase_with_specifier("the", "dog"),
        factory.create_noun_phrase_with_specifier("the", "woman"),
    );
    let clause = factory.create_clause(coordinated, "run", ());
    assert_eq!(realise(&clause), "The dog and the woman run.");
}

#[test]
fn or_coordination_stays_singular() {
    let factory = NlgFactory::new();
    let mut coordinated = factory.create_coordinated_phrase(
        factory.create_noun_phrase_with_specifier("the", "dog"),
        factory.create_noun_phrase_with_specifier("the", "woman"),
    );
    coordinated.features.set(Feature::Conjunction, "or");
    let clause = factory.create_clause(coordinated, "run", ());
    assert_eq!(realise(&clause), "The dog or the woman runs.");
}

#[test]
fn raised_specifier_is_shared() {
    let factory = NlgFactory::new();
    let mut coordinated = factory.create_coordinated_phrase(
        factory.create_noun_phrase_with_specifier("the", "apple"),
        factory.create_noun_phrase_with_specifier("the", "orange"),
    );
    coordinated.features.set(Feature::RaiseSpecifier, true);
    let realiser = Realiser::new();
    assert_eq!(
        realiser.realise_sentence(&coordinated.into()),
        "The apple and orange."
    );
}

#[test]
fn appositive_postmodifier_is_comma_marked() {
    let factory = NlgFactory::new();
    let mut dog = factory.create_noun_phrase_with_specifier("the", "dog");
    let mut terrier = factory.create_noun_phrase_with_specifier("a", "terrier").to_element();
    terrier.set_feature(Feature::Appositive, true);
    dog.add_post_modifier(terrier);
    let clause = factory.create_clause(dog, "run", ());
    assert_eq!(realise(&clause), "The dog, a terrier runs.");
}
