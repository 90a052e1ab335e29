//! The element tree that phrase specs build and the realiser consumes.
//!
//! Everything the engine touches is an [`Element`]: a word waiting to be
//! inflected, a canned string, a phrase with structural slots, a
//! coordination, a list of realised parts, or a document node. Every
//! variant carries a [`FeatureMap`]; the variants differ only in what
//! else they hold.
//!
//! There are no parent pointers. Realisation passes take elements by
//! reference and return freshly built output, so realising the same
//! tree twice produces the same result.

use serde::{Deserialize, Serialize};

use crate::category::{DocumentCategory, LexicalCategory, PhraseCategory};
use crate::features::{Feature, FeatureMap, FeatureValue, NumberAgr};

/// A single word identified by its base form, not yet inflected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordElement {
    pub base: String,
    pub category: LexicalCategory,
    pub features: FeatureMap,
}

impl WordElement {
    pub fn new(base: impl Into<String>, category: LexicalCategory) -> Self {
        WordElement {
            base: base.into(),
            category,
            features: FeatureMap::new(),
        }
    }
}

/// A word scheduled for inflection, carrying the grammatical features
/// the morphology pass needs (tense, number, person, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflectedWordElement {
    pub base: String,
    pub category: LexicalCategory,
    pub features: FeatureMap,
}

impl InflectedWordElement {
    pub fn new(base: impl Into<String>, category: LexicalCategory) -> Self {
        InflectedWordElement {
            base: base.into(),
            category,
            features: FeatureMap::new(),
        }
    }

    /// Wrap a word for inflection, keeping all of its features.
    pub fn from_word(word: &WordElement) -> Self {
        InflectedWordElement {
            base: word.base.clone(),
            category: word.category,
            features: word.features.clone(),
        }
    }
}

/// Canned text. Passes through realisation untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringElement {
    pub text: String,
    pub features: FeatureMap,
}

impl StringElement {
    pub fn new(text: impl Into<String>) -> Self {
        StringElement {
            text: text.into(),
            features: FeatureMap::new(),
        }
    }
}

/// An ordered collection of realised parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListElement {
    pub children: Vec<Element>,
    pub features: FeatureMap,
}

impl ListElement {
    pub fn new() -> Self {
        ListElement::default()
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(element);
    }
}

/// A phrase with structural slots (head, specifier, modifiers,
/// complements) stored in its feature map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseElement {
    pub category: PhraseCategory,
    pub features: FeatureMap,
}

impl PhraseElement {
    pub fn new(category: PhraseCategory) -> Self {
        PhraseElement {
            category,
            features: FeatureMap::new(),
        }
    }

    pub fn head(&self) -> Option<&Element> {
        self.features.element(Feature::Head)
    }

    pub fn set_head(&mut self, mut head: Element) {
        head.set_feature(Feature::Function, crate::features::DiscourseFunction::Head);
        self.features.set(Feature::Head, head);
    }

    pub fn specifier(&self) -> Option<&Element> {
        self.features.element(Feature::Specifier)
    }

    pub fn complements(&self) -> &[Element] {
        self.features.elements(Feature::Complements)
    }

    pub fn add_complement(&mut self, complement: Element) {
        self.features.push_element(Feature::Complements, complement);
    }

    pub fn pre_modifiers(&self) -> &[Element] {
        self.features.elements(Feature::PreModifiers)
    }

    pub fn add_pre_modifier(&mut self, modifier: Element) {
        self.features.push_element(Feature::PreModifiers, modifier);
    }

    pub fn post_modifiers(&self) -> &[Element] {
        self.features.elements(Feature::PostModifiers)
    }

    pub fn add_post_modifier(&mut self, modifier: Element) {
        self.features.push_element(Feature::PostModifiers, modifier);
    }

    pub fn front_modifiers(&self) -> &[Element] {
        self.features.elements(Feature::FrontModifiers)
    }

    pub fn add_front_modifier(&mut self, modifier: Element) {
        self.features.push_element(Feature::FrontModifiers, modifier);
    }
}

/// Two or more elements joined by a conjunction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatedElement {
    pub children: Vec<Element>,
    pub features: FeatureMap,
}

impl CoordinatedElement {
    pub fn new(conjunction: impl Into<String>) -> Self {
        let mut features = FeatureMap::new();
        features.set(Feature::Conjunction, conjunction.into());
        CoordinatedElement {
            children: Vec::new(),
            features,
        }
    }

    pub fn conjunction(&self) -> &str {
        self.features.text(Feature::Conjunction).unwrap_or("")
    }

    /// Add a coordinate. Every clause after the first has its
    /// complementiser suppressed ("I think that he walks and she runs").
    pub fn add_coordinate(&mut self, mut coordinate: Element) {
        if !self.children.is_empty() && coordinate.is_clause() {
            coordinate.set_feature(Feature::SuppressedComplementiser, true);
        }
        self.children.push(coordinate);
    }
}

/// A document, paragraph, or sentence holding lower-level content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentElement {
    pub category: DocumentCategory,
    pub children: Vec<Element>,
    pub features: FeatureMap,
}

impl DocumentElement {
    pub fn new(category: DocumentCategory) -> Self {
        DocumentElement {
            category,
            children: Vec::new(),
            features: FeatureMap::new(),
        }
    }
}

/// Any node in the tree the realiser works on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Word(WordElement),
    Inflected(InflectedWordElement),
    Str(StringElement),
    List(ListElement),
    Phrase(PhraseElement),
    Coordinated(CoordinatedElement),
    Document(DocumentElement),
}

impl Element {
    pub fn word(base: impl Into<String>, category: LexicalCategory) -> Self {
        Element::Word(WordElement::new(base, category))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Element::Str(StringElement::new(text))
    }

    pub fn features(&self) -> &FeatureMap {
        match self {
            Element::Word(word) => &word.features,
            Element::Inflected(word) => &word.features,
            Element::Str(text) => &text.features,
            Element::List(list) => &list.features,
            Element::Phrase(phrase) => &phrase.features,
            Element::Coordinated(coord) => &coord.features,
            Element::Document(doc) => &doc.features,
        }
    }

    pub fn features_mut(&mut self) -> &mut FeatureMap {
        match self {
            Element::Word(word) => &mut word.features,
            Element::Inflected(word) => &mut word.features,
            Element::Str(text) => &mut text.features,
            Element::List(list) => &mut list.features,
            Element::Phrase(phrase) => &mut phrase.features,
            Element::Coordinated(coord) => &mut coord.features,
            Element::Document(doc) => &mut doc.features,
        }
    }

    pub fn set_feature(&mut self, key: Feature, value: impl Into<FeatureValue>) {
        self.features_mut().set(key, value);
    }

    pub fn feature(&self, key: Feature) -> Option<&FeatureValue> {
        self.features().get(key)
    }

    pub fn bool_feature(&self, key: Feature) -> bool {
        self.features().bool(key)
    }

    /// The base form this element would inflect from, if it is a word.
    pub fn base_form(&self) -> Option<&str> {
        match self {
            Element::Word(word) => Some(&word.base),
            Element::Inflected(word) => Some(&word.base),
            _ => None,
        }
    }

    pub fn lexical_category(&self) -> Option<LexicalCategory> {
        match self {
            Element::Word(word) => Some(word.category),
            Element::Inflected(word) => Some(word.category),
            _ => None,
        }
    }

    pub fn phrase_category(&self) -> Option<PhraseCategory> {
        match self {
            Element::Phrase(phrase) => Some(phrase.category),
            _ => None,
        }
    }

    pub fn is_clause(&self) -> bool {
        self.phrase_category() == Some(PhraseCategory::Clause)
    }

    pub fn is_noun_phrase(&self) -> bool {
        self.phrase_category() == Some(PhraseCategory::NounPhrase)
    }

    pub fn is_verb_phrase(&self) -> bool {
        self.phrase_category() == Some(PhraseCategory::VerbPhrase)
    }

    pub fn is_pronoun(&self) -> bool {
        self.lexical_category() == Some(LexicalCategory::Pronoun)
    }

    pub fn is_plural(&self) -> bool {
        self.features().number(Feature::Number) == Some(NumberAgr::Plural)
    }

    pub fn as_phrase(&self) -> Option<&PhraseElement> {
        match self {
            Element::Phrase(phrase) => Some(phrase),
            _ => None,
        }
    }

    pub fn as_phrase_mut(&mut self) -> Option<&mut PhraseElement> {
        match self {
            Element::Phrase(phrase) => Some(phrase),
            _ => None,
        }
    }

    /// Children of list-like variants; empty for leaves and phrases.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::List(list) => &list.children,
            Element::Coordinated(coord) => &coord.children,
            Element::Document(doc) => &doc.children,
            _ => &[],
        }
    }
}

impl From<WordElement> for Element {
    fn from(word: WordElement) -> Self {
        Element::Word(word)
    }
}

impl From<InflectedWordElement> for Element {
    fn from(word: InflectedWordElement) -> Self {
        Element::Inflected(word)
    }
}

impl From<StringElement> for Element {
    fn from(text: StringElement) -> Self {
        Element::Str(text)
    }
}

impl From<ListElement> for Element {
    fn from(list: ListElement) -> Self {
        Element::List(list)
    }
}

impl From<PhraseElement> for Element {
    fn from(phrase: PhraseElement) -> Self {
        Element::Phrase(phrase)
    }
}

impl From<CoordinatedElement> for Element {
    fn from(coord: CoordinatedElement) -> Self {
        Element::Coordinated(coord)
    }
}

impl From<DocumentElement> for Element {
    fn from(doc: DocumentElement) -> Self {
        Element::Document(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::DiscourseFunction;

    #[test]
    fn inflected_word_copies_features() {
        let mut word = WordElement::new("dog", LexicalCategory::Noun);
        word.features.set(Feature::Number, NumberAgr::Plural);
        let inflected = InflectedWordElement::from_word(&word);
        assert_eq!(inflected.features.number(Feature::Number), Some(NumberAgr::Plural));
        assert_eq!(inflected.base, "dog");
    }

    #[test]
    fn set_head_marks_discourse_function() {
        let mut phrase = PhraseElement::new(PhraseCategory::NounPhrase);
        phrase.set_head(Element::word("dog", LexicalCategory::Noun));
        let head = phrase.head().unwrap();
        assert_eq!(
            head.features().function(Feature::Function),
            Some(DiscourseFunction::Head)
        );
    }

    #[test]
    fn children_of_leaves_are_empty() {
        assert!(Element::text("hello").children().is_empty());
    }
}
