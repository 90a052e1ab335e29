//! Document structure: promotion of bare content into sentences and
//! paragraphs, and text assembly across levels.

use phrasal::{NlgFactory, Realiser};

#[test]
fn paragraph_joins_sentences() {
    let factory = NlgFactory::new();
    let realiser = Realiser::new();

    let first = factory.create_clause("the woman", "kiss", "the man");
    let second = factory.create_clause("the dog", "run", ());
    let paragraph = factory.create_paragraph(vec![first.to_element(), second.to_element()]);

    assert_eq!(
        realiser.realise_sentence(&paragraph),
        "The woman kisses the man. The dog runs."
    );
}

#[test]
fn document_separates_paragraphs() {
    let factory = NlgFactory::new();
    let realiser = Realiser::new();

    let first = factory.create_clause("the woman", "kiss", "the man");
    let second = factory.create_clause("the dog", "run", ());
    let document = factory.create_document(vec![first.to_element(), second.to_element()]);

    insta::assert_snapshot!(realiser.realise_sentence(&document), @r###"
    The woman kisses the man.

    The dog runs.
    "###);
}

#[test]
fn sentence_holds_multiple_components() {
    let factory = NlgFactory::new();
    let realiser = Realiser::new();

    let np = factory.create_noun_phrase_with_specifier("the", "dog");
    let sentence = factory.create_sentence(vec![np.to_element()]);
    assert_eq!(realiser.realise_sentence(&sentence), "The dog.");
}

#[test]
fn canned_text_passes_through() {
    let factory = NlgFactory::new();
    let realiser = Realiser::new();

    let sentence = factory.create_sentence(vec![factory.create_string_element("and now for something completely different")]);
    assert_eq!(
        realiser.realise_sentence(&sentence),
        "And now for something completely different."
    );
}
