//! Feature keys and values carried by every element in the tree.
//!
//! A feature is a single grammatical fact about an element: its tense,
//! whether it is negated, which discourse slot it fills, and so on.
//! Keys are a closed enum rather than free-form strings so that a typo
//! is a compile error and the full vocabulary is visible in one place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Every feature key understood by the realiser.
///
/// Roughly three groups: user-facing controls set on phrase specs
/// (`Tense`, `Negated`, `Interrogative`, ...), structural slots managed
/// by the syntax pass (`Subjects`, `Specifier`, `NonMorph`, ...), and
/// lexical annotations on words (`Gender`, `PluralForm`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Feature {
    // ==== user-facing controls ====
    Tense,
    Perfect,
    Progressive,
    Passive,
    Negated,
    Modal,
    Person,
    Number,
    Possessive,
    Pronominal,
    Form,
    Interrogative,
    Particle,
    Complementiser,
    Conjunction,
    Elided,
    Appositive,
    AggregateAuxiliary,
    RealiseAuxiliary,
    AdjectiveOrdering,
    RaiseSpecifier,
    CuePhrase,

    // ==== structural slots and flags ====
    ClauseStatus,
    Function,
    Head,
    Specifier,
    Subjects,
    Complements,
    PreModifiers,
    PostModifiers,
    FrontModifiers,
    VerbPhrase,
    NonMorph,
    Raised,
    SuppressedComplementiser,
    IgnoreModal,
    InterrogativeSentence,

    // ==== lexical annotations ====
    Gender,
    Reflexive,
    Expletive,
    Acronym,
    Qualitative,
    Colour,
    Classifying,
    PluralForm,
    PastForm,
    PastParticipleForm,
    PresentParticipleForm,
    Present3sForm,
    ComparativeForm,
    SuperlativeForm,
    Comparative,
    Superlative,
}

/// Grammatical tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tense {
    Past,
    Present,
    Future,
}

/// Number agreement. `Both` is for words like "there" that agree with
/// either a singular or a plural verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberAgr {
    Singular,
    Plural,
    Both,
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// The form a verb group takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Form {
    Normal,
    Infinitive,
    BareInfinitive,
    Gerund,
    Imperative,
    PastParticiple,
    PresentParticiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClauseStatus {
    Matrix,
    Subordinate,
}

/// The slot an element fills within its enclosing phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscourseFunction {
    Subject,
    Object,
    IndirectObject,
    Head,
    Specifier,
    PreModifier,
    PostModifier,
    FrontModifier,
    Complement,
    CuePhrase,
    Conjunction,
    Auxiliary,
    VerbPhrase,
}

/// The kinds of question a clause can be turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterrogativeType {
    YesNo,
    How,
    HowPredicate,
    HowMany,
    WhatObject,
    WhatSubject,
    Where,
    WhoObject,
    WhoSubject,
    WhoIndirectObject,
    Why,
}

impl InterrogativeType {
    /// The WH word(s) fronted for this question type. `YesNo` fronts
    /// nothing.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            InterrogativeType::YesNo => None,
            InterrogativeType::How | InterrogativeType::HowPredicate => Some("how"),
            InterrogativeType::HowMany => Some("how"),
            InterrogativeType::WhatObject | InterrogativeType::WhatSubject => Some("what"),
            InterrogativeType::Where => Some("where"),
            InterrogativeType::WhoObject
            | InterrogativeType::WhoSubject
            | InterrogativeType::WhoIndirectObject => Some("who"),
            InterrogativeType::Why => Some("why"),
        }
    }

    /// Question types that ask for the direct object of the clause.
    pub fn is_object(self) -> bool {
        matches!(
            self,
            InterrogativeType::WhoObject | InterrogativeType::WhatObject
        )
    }

    /// Question types that ask for the indirect object of the clause.
    pub fn is_indirect_object(self) -> bool {
        matches!(self, InterrogativeType::WhoIndirectObject)
    }

    /// Question types that replace the subject of the clause.
    pub fn is_subject(self) -> bool {
        matches!(
            self,
            InterrogativeType::WhoSubject | InterrogativeType::WhatSubject
        )
    }
}

/// A value attached to a [`Feature`] key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureValue {
    Bool(bool),
    Text(String),
    Number(NumberAgr),
    Person(Person),
    Gender(Gender),
    Tense(Tense),
    Form(Form),
    ClauseStatus(ClauseStatus),
    Function(DiscourseFunction),
    Interrogative(InterrogativeType),
    Element(Box<Element>),
    Elements(Vec<Element>),
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<NumberAgr> for FeatureValue {
    fn from(value: NumberAgr) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<Person> for FeatureValue {
    fn from(value: Person) -> Self {
        FeatureValue::Person(value)
    }
}

impl From<Gender> for FeatureValue {
    fn from(value: Gender) -> Self {
        FeatureValue::Gender(value)
    }
}

impl From<Tense> for FeatureValue {
    fn from(value: Tense) -> Self {
        FeatureValue::Tense(value)
    }
}

impl From<Form> for FeatureValue {
    fn from(value: Form) -> Self {
        FeatureValue::Form(value)
    }
}

impl From<ClauseStatus> for FeatureValue {
    fn from(value: ClauseStatus) -> Self {
        FeatureValue::ClauseStatus(value)
    }
}

impl From<DiscourseFunction> for FeatureValue {
    fn from(value: DiscourseFunction) -> Self {
        FeatureValue::Function(value)
    }
}

impl From<InterrogativeType> for FeatureValue {
    fn from(value: InterrogativeType) -> Self {
        FeatureValue::Interrogative(value)
    }
}

impl From<Element> for FeatureValue {
    fn from(value: Element) -> Self {
        FeatureValue::Element(Box::new(value))
    }
}

impl From<Vec<Element>> for FeatureValue {
    fn from(value: Vec<Element>) -> Self {
        FeatureValue::Elements(value)
    }
}

/// The feature bag every element carries.
///
/// Typed getters never panic: a missing boolean reads `false`, a missing
/// list reads empty, everything else reads `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureMap {
    entries: BTreeMap<Feature, FeatureValue>,
}

impl FeatureMap {
    pub fn new() -> Self {
        FeatureMap::default()
    }

    pub fn set(&mut self, key: Feature, value: impl Into<FeatureValue>) {
        self.entries.insert(key, value.into());
    }

    pub fn remove(&mut self, key: Feature) -> Option<FeatureValue> {
        self.entries.remove(&key)
    }

    pub fn is_set(&self, key: Feature) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn get(&self, key: Feature) -> Option<&FeatureValue> {
        self.entries.get(&key)
    }

    pub fn bool(&self, key: Feature) -> bool {
        matches!(self.entries.get(&key), Some(FeatureValue::Bool(true)))
    }

    pub fn text(&self, key: Feature) -> Option<&str> {
        match self.entries.get(&key) {
            Some(FeatureValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn tense(&self, key: Feature) -> Option<Tense> {
        match self.entries.get(&key) {
            Some(FeatureValue::Tense(tense)) => Some(*tense),
            _ => None,
        }
    }

    pub fn number(&self, key: Feature) -> Option<NumberAgr> {
        match self.entries.get(&key) {
            Some(FeatureValue::Number(number)) => Some(*number),
            _ => None,
        }
    }

    pub fn person(&self, key: Feature) -> Option<Person> {
        match self.entries.get(&key) {
            Some(FeatureValue::Person(person)) => Some(*person),
            _ => None,
        }
    }

    pub fn gender(&self, key: Feature) -> Option<Gender> {
        match self.entries.get(&key) {
            Some(FeatureValue::Gender(gender)) => Some(*gender),
            _ => None,
        }
    }

    pub fn form(&self, key: Feature) -> Option<Form> {
        match self.entries.get(&key) {
            Some(FeatureValue::Form(form)) => Some(*form),
            _ => None,
        }
    }

    pub fn clause_status(&self, key: Feature) -> Option<ClauseStatus> {
        match self.entries.get(&key) {
            Some(FeatureValue::ClauseStatus(status)) => Some(*status),
            _ => None,
        }
    }

    pub fn function(&self, key: Feature) -> Option<DiscourseFunction> {
        match self.entries.get(&key) {
            Some(FeatureValue::Function(function)) => Some(*function),
            _ => None,
        }
    }

    pub fn interrogative(&self, key: Feature) -> Option<InterrogativeType> {
        match self.entries.get(&key) {
            Some(FeatureValue::Interrogative(kind)) => Some(*kind),
            _ => None,
        }
    }

    pub fn element(&self, key: Feature) -> Option<&Element> {
        match self.entries.get(&key) {
            Some(FeatureValue::Element(element)) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, key: Feature) -> Option<&mut Element> {
        match self.entries.get_mut(&key) {
            Some(FeatureValue::Element(element)) => Some(element),
            _ => None,
        }
    }

    pub fn elements(&self, key: Feature) -> &[Element] {
        match self.entries.get(&key) {
            Some(FeatureValue::Elements(elements)) => elements,
            _ => &[],
        }
    }

    pub fn push_element(&mut self, key: Feature, element: Element) {
        match self.entries.get_mut(&key) {
            Some(FeatureValue::Elements(elements)) => elements.push(element),
            _ => {
                self.entries.insert(key, FeatureValue::Elements(vec![element]));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Feature, &FeatureValue)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_bool_reads_false() {
        let map = FeatureMap::new();
        assert!(!map.bool(Feature::Negated));
    }

    #[test]
    fn unset_elements_read_empty() {
        let map = FeatureMap::new();
        assert!(map.elements(Feature::Subjects).is_empty());
    }

    #[test]
    fn typed_getter_ignores_mismatched_value() {
        let mut map = FeatureMap::new();
        map.set(Feature::Tense, "nonsense");
        assert_eq!(map.tense(Feature::Tense), None);
    }

    #[test]
    fn push_element_creates_list_on_demand() {
        let mut map = FeatureMap::new();
        map.push_element(Feature::Complements, Element::text("up"));
        map.push_element(Feature::Complements, Element::text("down"));
        assert_eq!(map.elements(Feature::Complements).len(), 2);
    }
}
