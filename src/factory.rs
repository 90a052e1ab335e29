//! Element construction: turning strings and fragments into phrase
//! specs, words, and document structure.
//!
//! The factory is the front door for building trees. It coerces loose
//! input (a `&str`, a word, a finished phrase) into the slot a method
//! needs, classifies pronouns by lookup table, and splits multi-word
//! verbs into verb plus particle.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::{DocumentCategory, LexicalCategory, PhraseCategory};
use crate::element::{CoordinatedElement, DocumentElement, Element, PhraseElement, WordElement};
use crate::error::RealiseError;
use crate::features::{Feature, Gender, NumberAgr, Person};
use crate::lexicon::{Lexicon, SimpleLexicon};
use crate::spec::{ClauseSpec, NounPhraseSpec, VerbPhraseSpec};

static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w*$").unwrap());

// ==================================================
// Pronoun classification tables
// ==================================================

static PRONOUNS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "I", "you", "he", "she", "it", "me", "him", "her", "myself", "yourself", "himself",
        "herself", "itself", "mine", "yours", "his", "hers", "its", "my", "your", "we", "they",
        "us", "them", "ourselves", "yourselves", "themselves", "ours", "our", "theirs", "their",
        "there",
    ]
});

const FIRST_PRONOUNS: &[&str] = &[
    "I", "me", "myself", "we", "us", "ourselves", "mine", "my", "ours", "our",
];

const SECOND_PRONOUNS: &[&str] = &["you", "yourself", "yourselves", "yours", "your"];

const REFLEXIVE_PRONOUNS: &[&str] = &[
    "myself",
    "yourself",
    "himself",
    "herself",
    "itself",
    "ourselves",
    "yourselves",
    "themselves",
];

const MASCULINE_PRONOUNS: &[&str] = &["he", "him", "himself", "his"];

const FEMININE_PRONOUNS: &[&str] = &["she", "her", "herself", "hers"];

const POSSESSIVE_PRONOUNS: &[&str] = &[
    "mine", "ours", "yours", "his", "hers", "its", "theirs", "my", "our", "your", "her", "their",
];

const PLURAL_PRONOUNS: &[&str] = &[
    "we", "us", "ourselves", "ours", "our", "they", "them", "theirs", "their",
];

const EITHER_NUMBER_PRONOUNS: &[&str] = &["there"];

const EXPLETIVE_PRONOUNS: &[&str] = &["there"];

/// Loose input the factory coerces into a phrase slot.
#[derive(Debug, Clone)]
pub enum SpecItem {
    None,
    Text(String),
    Elem(Element),
}

impl From<&str> for SpecItem {
    fn from(text: &str) -> Self {
        SpecItem::Text(text.to_string())
    }
}

impl From<String> for SpecItem {
    fn from(text: String) -> Self {
        SpecItem::Text(text)
    }
}

impl From<Element> for SpecItem {
    fn from(element: Element) -> Self {
        SpecItem::Elem(element)
    }
}

impl From<CoordinatedElement> for SpecItem {
    fn from(coordinated: CoordinatedElement) -> Self {
        SpecItem::Elem(Element::Coordinated(coordinated))
    }
}

impl From<NounPhraseSpec> for SpecItem {
    fn from(spec: NounPhraseSpec) -> Self {
        SpecItem::Elem(spec.into())
    }
}

impl From<VerbPhraseSpec> for SpecItem {
    fn from(spec: VerbPhraseSpec) -> Self {
        SpecItem::Elem(spec.into())
    }
}

impl From<ClauseSpec> for SpecItem {
    fn from(spec: ClauseSpec) -> Self {
        SpecItem::Elem(spec.into())
    }
}

impl From<()> for SpecItem {
    fn from(_: ()) -> Self {
        SpecItem::None
    }
}

impl<T: Into<SpecItem>> From<Option<T>> for SpecItem {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => SpecItem::None,
        }
    }
}

/// Builds elements and phrase specs.
#[derive(Debug, Default)]
pub struct NlgFactory<L: Lexicon = SimpleLexicon> {
    lexicon: L,
}

impl NlgFactory<SimpleLexicon> {
    pub fn new() -> Self {
        NlgFactory {
            lexicon: SimpleLexicon::new(),
        }
    }
}

impl<L: Lexicon> NlgFactory<L> {
    pub fn with_lexicon(lexicon: L) -> Self {
        NlgFactory { lexicon }
    }

    // ==================================================
    // Words
    // ==================================================

    /// Create a word of the given category. A string with spaces or
    /// non-word characters comes back as canned text instead. Pronouns
    /// are recognised and given person, number, gender, possessive,
    /// and reflexive features.
    pub fn create_word(&self, word: &str, category: LexicalCategory) -> Element {
        if word.contains(' ') || !WORD_REGEX.is_match(word) {
            return Element::text(word);
        }
        let mut element = self.lexicon.lookup(word, category);
        if PRONOUNS.contains(&word) {
            set_pronoun_features(&mut element, word);
        }
        Element::Word(element)
    }

    /// Create an element of the category named by `category`. This is
    /// the one factory operation that can fail: an unrecognised
    /// category name is an error rather than a guess.
    pub fn create_element(&self, category: &str, word: &str) -> Result<Element, RealiseError> {
        let lexical = match category {
            "noun" => LexicalCategory::Noun,
            "verb" => LexicalCategory::Verb,
            "adjective" => LexicalCategory::Adjective,
            "adverb" => LexicalCategory::Adverb,
            "pronoun" => LexicalCategory::Pronoun,
            "determiner" => LexicalCategory::Determiner,
            "preposition" => LexicalCategory::Preposition,
            "conjunction" => LexicalCategory::Conjunction,
            "modal" => LexicalCategory::Modal,
            "complementiser" => LexicalCategory::Complementiser,
            "noun_phrase" => return Ok(self.create_noun_phrase(word).into()),
            "verb_phrase" => return Ok(self.create_verb_phrase(word).into()),
            "clause" => return Ok(self.create_clause((), word, ()).into()),
            _ => {
                return Err(RealiseError::InvalidElement {
                    category: category.to_string(),
                    input: word.to_string(),
                })
            }
        };
        Ok(self.create_word(word, lexical))
    }

    pub fn create_string_element(&self, text: &str) -> Element {
        Element::text(text)
    }

    // ==================================================
    // Phrases
    // ==================================================

    /// Noun phrase with no specifier.
    pub fn create_noun_phrase(&self, noun: impl Into<SpecItem>) -> NounPhraseSpec {
        let mut spec = NounPhraseSpec::new();
        if let Some(head) = self.coerce_word(noun.into(), LexicalCategory::Noun) {
            spec.set_head(head);
        }
        spec
    }

    /// Noun phrase with a specifier, e.g. `("the", "dog")`.
    pub fn create_noun_phrase_with_specifier(
        &self,
        specifier: impl Into<SpecItem>,
        noun: impl Into<SpecItem>,
    ) -> NounPhraseSpec {
        let mut spec = self.create_noun_phrase(noun);
        if let Some(specifier) = self.coerce_word(specifier.into(), LexicalCategory::Determiner) {
            spec.set_specifier(specifier);
        }
        spec
    }

    /// Verb phrase. A multi-word verb is split at the first space into
    /// the verb proper and its particle: "pick up" heads as "pick"
    /// carrying particle "up".
    pub fn create_verb_phrase(&self, verb: impl Into<SpecItem>) -> VerbPhraseSpec {
        let mut spec = VerbPhraseSpec::new();
        match verb.into() {
            SpecItem::None => {}
            SpecItem::Text(text) => {
                let (base, particle) = match text.split_once(' ') {
                    Some((base, rest)) => (base.to_string(), Some(rest.to_string())),
                    None => (text, None),
                };
                let head = Element::Word(self.lexicon.lookup(&base, LexicalCategory::Verb));
                spec.set_verb_word(head, particle);
            }
            SpecItem::Elem(element) => spec.set_head(element),
        }
        spec
    }

    pub fn create_adjective_phrase(&self, adjective: impl Into<SpecItem>) -> Element {
        self.create_simple_phrase(adjective.into(), PhraseCategory::AdjectivePhrase)
    }

    pub fn create_adverb_phrase(&self, adverb: impl Into<SpecItem>) -> Element {
        self.create_simple_phrase(adverb.into(), PhraseCategory::AdverbPhrase)
    }

    /// Prepositional phrase: `("in", object)` heads with "in" and takes
    /// the object as complement.
    pub fn create_prepositional_phrase(
        &self,
        preposition: impl Into<SpecItem>,
        complement: impl Into<SpecItem>,
    ) -> Element {
        let mut phrase = PhraseElement::new(PhraseCategory::PrepositionalPhrase);
        if let Some(head) = self.coerce_word(preposition.into(), LexicalCategory::Preposition) {
            phrase.set_head(head);
        }
        if let Some(complement) = self.coerce_noun_phrase(complement.into()) {
            phrase.add_complement(complement);
        }
        Element::Phrase(phrase)
    }

    /// Coordination of two elements with "and". Further coordinates go
    /// in through [`CoordinatedElement::add_coordinate`].
    pub fn create_coordinated_phrase(
        &self,
        first: impl Into<SpecItem>,
        second: impl Into<SpecItem>,
    ) -> CoordinatedElement {
        let mut coordinated = CoordinatedElement::new("and");
        if let Some(first) = self.coerce_noun_phrase(first.into()) {
            coordinated.add_coordinate(first);
        }
        if let Some(second) = self.coerce_noun_phrase(second.into()) {
            coordinated.add_coordinate(second);
        }
        coordinated
    }

    fn create_simple_phrase(&self, head: SpecItem, category: PhraseCategory) -> Element {
        let mut phrase = PhraseElement::new(category);
        if let Some(head) = self.coerce_word(head, category.head_category()) {
            phrase.set_head(head);
        }
        Element::Phrase(phrase)
    }

    /// Clause from subject, verb, and object slots. Any slot may be
    /// `()` to leave it empty.
    pub fn create_clause(
        &self,
        subject: impl Into<SpecItem>,
        verb: impl Into<SpecItem>,
        object: impl Into<SpecItem>,
    ) -> ClauseSpec {
        let mut clause = ClauseSpec::new();

        let verb_phrase = match verb.into() {
            SpecItem::None => None,
            SpecItem::Elem(element) if element.is_verb_phrase() || element.is_clause() => {
                Some(element)
            }
            SpecItem::Elem(Element::Coordinated(coord)) => Some(Element::Coordinated(coord)),
            other => Some(self.create_verb_phrase(other).into()),
        };
        if let Some(verb_phrase) = verb_phrase {
            clause.set_verb_phrase(verb_phrase);
        }

        if let Some(subject) = self.coerce_noun_phrase(subject.into()) {
            clause.set_subject(subject);
        }
        if let Some(object) = self.coerce_noun_phrase(object.into()) {
            clause.set_object(object);
        }
        clause
    }

    /// Coerce a loose item into something that can fill a noun-phrase
    /// slot: phrases and coordinations pass through, words become the
    /// head of a fresh noun phrase, strings are classified as word or
    /// canned text.
    pub fn coerce_noun_phrase(&self, item: SpecItem) -> Option<Element> {
        match item {
            SpecItem::None => None,
            SpecItem::Elem(element) => match element {
                Element::Phrase(_) | Element::Coordinated(_) | Element::Str(_) => Some(element),
                word => {
                    let mut spec = NounPhraseSpec::new();
                    spec.set_head(word);
                    Some(spec.into())
                }
            },
            SpecItem::Text(text) => {
                let mut spec = NounPhraseSpec::new();
                if text.contains(' ') {
                    spec.set_head(Element::text(text));
                } else {
                    spec.set_head(self.create_word(&text, LexicalCategory::Noun));
                }
                Some(spec.into())
            }
        }
    }

    fn coerce_word(&self, item: SpecItem, category: LexicalCategory) -> Option<Element> {
        match item {
            SpecItem::None => None,
            SpecItem::Elem(element) => Some(element),
            SpecItem::Text(text) => Some(self.create_word(&text, category)),
        }
    }

    // ==================================================
    // Documents
    // ==================================================

    pub fn create_sentence(&self, components: Vec<Element>) -> Element {
        let mut sentence = DocumentElement::new(DocumentCategory::Sentence);
        for component in components {
            add_document_component(&mut sentence, component);
        }
        Element::Document(sentence)
    }

    pub fn create_paragraph(&self, components: Vec<Element>) -> Element {
        let mut paragraph = DocumentElement::new(DocumentCategory::Paragraph);
        for component in components {
            add_document_component(&mut paragraph, component);
        }
        Element::Document(paragraph)
    }

    pub fn create_document(&self, components: Vec<Element>) -> Element {
        let mut document = DocumentElement::new(DocumentCategory::Document);
        for component in components {
            add_document_component(&mut document, component);
        }
        Element::Document(document)
    }
}

/// Attach `child` under `parent`, promoting it through intermediate
/// document levels where needed. A child that cannot be promoted is
/// attached unchanged.
pub fn add_document_component(parent: &mut DocumentElement, child: Element) {
    let child_category = match &child {
        Element::Document(doc) => Some(doc.category),
        _ => None,
    };
    match child_category {
        Some(category) if parent.category.accepts(category) => parent.children.push(child),
        _ => {
            let promoted = promote(parent.category, child);
            parent.children.push(promoted);
        }
    }
}

fn promote(parent: DocumentCategory, child: Element) -> Element {
    match parent {
        DocumentCategory::Sentence => child,
        DocumentCategory::Paragraph => match child {
            Element::Document(_) => child,
            other => wrap(DocumentCategory::Sentence, other),
        },
        DocumentCategory::Document => match child {
            Element::Document(doc) if doc.category == DocumentCategory::Sentence => {
                wrap(DocumentCategory::Paragraph, Element::Document(doc))
            }
            Element::Document(_) => child,
            other => wrap(
                DocumentCategory::Paragraph,
                wrap(DocumentCategory::Sentence, other),
            ),
        },
    }
}

fn wrap(category: DocumentCategory, child: Element) -> Element {
    let mut wrapper = DocumentElement::new(category);
    wrapper.children.push(child);
    Element::Document(wrapper)
}

pub(crate) fn set_pronoun_features(word: &mut WordElement, base: &str) {
    word.category = LexicalCategory::Pronoun;
    if FIRST_PRONOUNS.contains(&base) {
        word.features.set(Feature::Person, Person::First);
    } else if SECOND_PRONOUNS.contains(&base) {
        word.features.set(Feature::Person, Person::Second);
        match base {
            "yourself" => word.features.set(Feature::Number, NumberAgr::Singular),
            "yourselves" => word.features.set(Feature::Number, NumberAgr::Plural),
            _ => word.features.set(Feature::Number, NumberAgr::Both),
        }
    } else {
        word.features.set(Feature::Person, Person::Third);
    }

    word.features
        .set(Feature::Reflexive, REFLEXIVE_PRONOUNS.contains(&base));

    if MASCULINE_PRONOUNS.contains(&base) {
        word.features.set(Feature::Gender, Gender::Masculine);
    } else if FEMININE_PRONOUNS.contains(&base) {
        word.features.set(Feature::Gender, Gender::Feminine);
    } else {
        word.features.set(Feature::Gender, Gender::Neuter);
    }

    word.features
        .set(Feature::Possessive, POSSESSIVE_PRONOUNS.contains(&base));

    if PLURAL_PRONOUNS.contains(&base) && !SECOND_PRONOUNS.contains(&base) {
        word.features.set(Feature::Number, NumberAgr::Plural);
    } else if !EITHER_NUMBER_PRONOUNS.contains(&base) && !SECOND_PRONOUNS.contains(&base) {
        word.features.set(Feature::Number, NumberAgr::Singular);
    }

    if EXPLETIVE_PRONOUNS.contains(&base) {
        word.features.set(Feature::NonMorph, true);
        word.features.set(Feature::Expletive, true);
        word.features.set(Feature::Number, NumberAgr::Both);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Tense;

    fn make_factory() -> NlgFactory {
        NlgFactory::new()
    }

    #[test]
    fn pronoun_classification() {
        let factory = make_factory();
        let she = factory.create_word("she", LexicalCategory::Any);
        assert_eq!(she.lexical_category(), Some(LexicalCategory::Pronoun));
        assert_eq!(
            she.features().gender(Feature::Gender),
            Some(Gender::Feminine)
        );
        assert!(!she.bool_feature(Feature::Possessive));

        let their = factory.create_word("their", LexicalCategory::Any);
        assert!(their.bool_feature(Feature::Possessive));
        assert!(their.is_plural());

        let there = factory.create_word("there", LexicalCategory::Any);
        assert!(there.bool_feature(Feature::Expletive));
        assert_eq!(
            there.features().number(Feature::Number),
            Some(NumberAgr::Both)
        );
    }

    #[test]
    fn multiword_input_becomes_canned_text() {
        let factory = make_factory();
        let element = factory.create_word("the whole phrase", LexicalCategory::Noun);
        assert!(matches!(element, Element::Str(_)));
    }

    #[test]
    fn verb_particle_split() {
        let factory = make_factory();
        let vp = factory.create_verb_phrase("pick up");
        let element = vp.to_element();
        let phrase = element.as_phrase().unwrap();
        assert_eq!(phrase.head().and_then(Element::base_form), Some("pick"));
        assert_eq!(phrase.features.text(Feature::Particle), Some("up"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let factory = make_factory();
        let result = factory.create_element("interjection", "wow");
        assert!(result.is_err());
    }

    #[test]
    fn clause_wires_subject_verb_object() {
        let factory = make_factory();
        let mut clause = factory.create_clause("the woman", "kiss", "the man");
        clause.set_tense(Tense::Past);
        assert_eq!(clause.subjects().len(), 1);
        let vp = clause.verb_phrase().unwrap();
        assert_eq!(vp.features().tense(Feature::Tense), Some(Tense::Past));
        assert_eq!(vp.features().elements(Feature::Complements).len(), 1);
    }

    #[test]
    fn bare_element_promotes_to_sentence_in_paragraph() {
        let factory = make_factory();
        let paragraph = factory.create_paragraph(vec![Element::text("hello")]);
        let children = paragraph.children();
        assert_eq!(children.len(), 1);
        match &children[0] {
            Element::Document(doc) => assert_eq!(doc.category, DocumentCategory::Sentence),
            other => panic!("expected promoted sentence, got {:?}", other),
        }
    }

    #[test]
    fn sentence_promotes_to_paragraph_in_document() {
        let factory = make_factory();
        let sentence = factory.create_sentence(vec![Element::text("hello")]);
        let document = factory.create_document(vec![sentence]);
        match &document.children()[0] {
            Element::Document(doc) => assert_eq!(doc.category, DocumentCategory::Paragraph),
            other => panic!("expected paragraph, got {:?}", other),
        }
    }
}
