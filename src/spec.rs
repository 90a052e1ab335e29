//! Phrase spec builders: typed wrappers for assembling clauses, verb
//! phrases, and noun phrases before realisation.
//!
//! A spec owns a [`PhraseElement`] and exposes the slots that make sense
//! for its category. The clause spec additionally keeps its verb phrase
//! in sync: grammatical controls set on the clause (tense, negation,
//! passive, ...) are mirrored onto the verb phrase, which is where the
//! syntax pass reads them from.

use crate::category::PhraseCategory;
use crate::element::{Element, PhraseElement};
use crate::features::{
    ClauseStatus, DiscourseFunction, Feature, FeatureValue, Form, InterrogativeType, NumberAgr,
    Person, Tense,
};

/// Clause-level controls that live on the verb phrase. Setting one on
/// the clause writes it to both.
const VP_MIRRORED: &[Feature] = &[
    Feature::Modal,
    Feature::Tense,
    Feature::Negated,
    Feature::Number,
    Feature::Passive,
    Feature::Perfect,
    Feature::Particle,
    Feature::Person,
    Feature::Progressive,
    Feature::RealiseAuxiliary,
    Feature::Form,
    Feature::Interrogative,
];

// ==================================================
// Clause
// ==================================================

/// Builder for a clause: subject(s), a verb phrase, and clause-level
/// features.
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseSpec {
    inner: PhraseElement,
}

impl Default for ClauseSpec {
    fn default() -> Self {
        ClauseSpec::new()
    }
}

impl ClauseSpec {
    pub fn new() -> Self {
        let mut inner = PhraseElement::new(PhraseCategory::Clause);
        inner.features.set(Feature::Elided, false);
        inner.features.set(Feature::ClauseStatus, ClauseStatus::Matrix);
        inner.features.set(Feature::SuppressedComplementiser, false);
        inner.features.set(Feature::Complementiser, "that");
        ClauseSpec { inner }
    }

    /// Replace the subject list with a single subject.
    pub fn set_subject(&mut self, mut subject: Element) {
        subject.set_feature(Feature::Function, DiscourseFunction::Subject);
        self.inner.features.set(Feature::Subjects, vec![subject]);
    }

    pub fn add_subject(&mut self, mut subject: Element) {
        subject.set_feature(Feature::Function, DiscourseFunction::Subject);
        self.inner.features.push_element(Feature::Subjects, subject);
    }

    pub fn subjects(&self) -> &[Element] {
        self.inner.features.elements(Feature::Subjects)
    }

    /// Install the verb phrase. Mirrored clause features already set are
    /// copied down onto it.
    pub fn set_verb_phrase(&mut self, mut verb_phrase: Element) {
        verb_phrase.set_feature(Feature::Function, DiscourseFunction::VerbPhrase);
        for &key in VP_MIRRORED {
            if let Some(value) = self.inner.features.get(key).cloned() {
                verb_phrase.set_feature(key, value);
            }
        }
        self.inner.features.set(Feature::VerbPhrase, verb_phrase);
    }

    pub fn verb_phrase(&self) -> Option<&Element> {
        self.inner.features.element(Feature::VerbPhrase)
    }

    /// Add a direct object as a complement of the verb phrase.
    pub fn set_object(&mut self, mut object: Element) {
        object.set_feature(Feature::Function, DiscourseFunction::Object);
        if let Some(vp) = self.inner.features.element_mut(Feature::VerbPhrase) {
            vp.features_mut().push_element(Feature::Complements, object);
        }
    }

    pub fn set_indirect_object(&mut self, mut object: Element) {
        object.set_feature(Feature::Function, DiscourseFunction::IndirectObject);
        if let Some(vp) = self.inner.features.element_mut(Feature::VerbPhrase) {
            vp.features_mut().push_element(Feature::Complements, object);
        }
    }

    pub fn add_complement(&mut self, mut complement: Element) {
        if !complement.features().is_set(Feature::Function) {
            complement.set_feature(Feature::Function, DiscourseFunction::Object);
        }
        if let Some(vp) = self.inner.features.element_mut(Feature::VerbPhrase) {
            vp.features_mut().push_element(Feature::Complements, complement);
        } else {
            self.inner.add_complement(complement);
        }
    }

    pub fn add_front_modifier(&mut self, mut modifier: Element) {
        modifier.set_feature(Feature::Function, DiscourseFunction::FrontModifier);
        self.inner.add_front_modifier(modifier);
    }

    pub fn add_pre_modifier(&mut self, modifier: Element) {
        self.inner.add_pre_modifier(modifier);
    }

    pub fn add_post_modifier(&mut self, modifier: Element) {
        self.inner.add_post_modifier(modifier);
    }

    /// Set a feature, mirroring verb-group controls onto the verb
    /// phrase.
    pub fn set_feature(&mut self, key: Feature, value: impl Into<FeatureValue>) {
        let value = value.into();
        self.inner.features.set(key, value.clone());
        if VP_MIRRORED.contains(&key) {
            if let Some(vp) = self.inner.features.element_mut(Feature::VerbPhrase) {
                vp.set_feature(key, value);
            }
        }
    }

    /// Read a feature, preferring the verb phrase for mirrored keys.
    pub fn feature(&self, key: Feature) -> Option<&FeatureValue> {
        if VP_MIRRORED.contains(&key) {
            if let Some(vp) = self.inner.features.element(Feature::VerbPhrase) {
                if let Some(value) = vp.feature(key) {
                    return Some(value);
                }
            }
        }
        self.inner.features.get(key)
    }

    pub fn set_tense(&mut self, tense: Tense) {
        self.set_feature(Feature::Tense, tense);
    }

    pub fn set_negated(&mut self, negated: bool) {
        self.set_feature(Feature::Negated, negated);
    }

    pub fn set_passive(&mut self, passive: bool) {
        self.set_feature(Feature::Passive, passive);
    }

    pub fn set_perfect(&mut self, perfect: bool) {
        self.set_feature(Feature::Perfect, perfect);
    }

    pub fn set_progressive(&mut self, progressive: bool) {
        self.set_feature(Feature::Progressive, progressive);
    }

    pub fn set_modal(&mut self, modal: impl Into<String>) {
        self.set_feature(Feature::Modal, modal.into());
    }

    pub fn set_form(&mut self, form: Form) {
        self.set_feature(Feature::Form, form);
    }

    pub fn set_interrogative(&mut self, kind: InterrogativeType) {
        self.set_feature(Feature::Interrogative, kind);
    }

    pub fn set_clause_status(&mut self, status: ClauseStatus) {
        self.inner.features.set(Feature::ClauseStatus, status);
    }

    pub fn to_element(&self) -> Element {
        Element::Phrase(self.inner.clone())
    }
}

impl From<ClauseSpec> for Element {
    fn from(spec: ClauseSpec) -> Self {
        Element::Phrase(spec.inner)
    }
}

// ==================================================
// Verb phrase
// ==================================================

/// Builder for a verb phrase. Carries the verb-group defaults the
/// syntax pass expects.
#[derive(Debug, Clone, PartialEq)]
pub struct VerbPhraseSpec {
    inner: PhraseElement,
}

impl Default for VerbPhraseSpec {
    fn default() -> Self {
        VerbPhraseSpec::new()
    }
}

impl VerbPhraseSpec {
    pub fn new() -> Self {
        let mut inner = PhraseElement::new(PhraseCategory::VerbPhrase);
        inner.features.set(Feature::Tense, Tense::Present);
        inner.features.set(Feature::Person, Person::Third);
        inner.features.set(Feature::Form, Form::Normal);
        inner.features.set(Feature::RealiseAuxiliary, true);
        inner.features.set(Feature::Perfect, false);
        inner.features.set(Feature::Progressive, false);
        inner.features.set(Feature::Passive, false);
        inner.features.set(Feature::Negated, false);
        VerbPhraseSpec { inner }
    }

    pub fn set_head(&mut self, head: Element) {
        self.inner.set_head(head);
    }

    /// Install a verb word, splitting off a trailing particle:
    /// "pick up" becomes head "pick" with particle "up".
    pub fn set_verb_word(&mut self, head: Element, particle: Option<String>) {
        self.inner.set_head(head);
        if let Some(particle) = particle {
            self.inner.features.set(Feature::Particle, particle);
        }
    }

    pub fn add_complement(&mut self, mut complement: Element) {
        if !complement.features().is_set(Feature::Function) {
            complement.set_feature(Feature::Function, DiscourseFunction::Object);
        }
        self.inner.add_complement(complement);
    }

    pub fn add_pre_modifier(&mut self, modifier: Element) {
        self.inner.add_pre_modifier(modifier);
    }

    pub fn add_post_modifier(&mut self, modifier: Element) {
        self.inner.add_post_modifier(modifier);
    }

    pub fn set_feature(&mut self, key: Feature, value: impl Into<FeatureValue>) {
        self.inner.features.set(key, value);
    }

    pub fn set_tense(&mut self, tense: Tense) {
        self.inner.features.set(Feature::Tense, tense);
    }

    pub fn to_element(&self) -> Element {
        Element::Phrase(self.inner.clone())
    }
}

impl From<VerbPhraseSpec> for Element {
    fn from(spec: VerbPhraseSpec) -> Self {
        Element::Phrase(spec.inner)
    }
}

// ==================================================
// Noun phrase
// ==================================================

/// Builder for a noun phrase: specifier, premodifiers, head noun,
/// complements, postmodifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct NounPhraseSpec {
    inner: PhraseElement,
}

impl Default for NounPhraseSpec {
    fn default() -> Self {
        NounPhraseSpec::new()
    }
}

impl NounPhraseSpec {
    pub fn new() -> Self {
        let mut inner = PhraseElement::new(PhraseCategory::NounPhrase);
        inner.features.set(Feature::AdjectiveOrdering, true);
        NounPhraseSpec { inner }
    }

    pub fn set_head(&mut self, head: Element) {
        self.inner.set_head(head);
    }

    /// Install the specifier. A plural specifier ("these", "those")
    /// flips the whole phrase to plural.
    pub fn set_specifier(&mut self, mut specifier: Element) {
        specifier.set_feature(Feature::Function, DiscourseFunction::Specifier);
        if specifier.is_plural() && !self.inner.features.is_set(Feature::Number) {
            self.inner.features.set(Feature::Number, NumberAgr::Plural);
        }
        self.inner.features.set(Feature::Specifier, specifier);
    }

    pub fn add_pre_modifier(&mut self, modifier: Element) {
        self.inner.add_pre_modifier(modifier);
    }

    pub fn add_post_modifier(&mut self, modifier: Element) {
        self.inner.add_post_modifier(modifier);
    }

    pub fn add_complement(&mut self, complement: Element) {
        self.inner.add_complement(complement);
    }

    pub fn set_feature(&mut self, key: Feature, value: impl Into<FeatureValue>) {
        self.inner.features.set(key, value);
    }

    pub fn set_plural(&mut self, plural: bool) {
        let number = if plural {
            NumberAgr::Plural
        } else {
            NumberAgr::Singular
        };
        self.inner.features.set(Feature::Number, number);
    }

    pub fn set_pronominal(&mut self, pronominal: bool) {
        self.inner.features.set(Feature::Pronominal, pronominal);
    }

    pub fn to_element(&self) -> Element {
        Element::Phrase(self.inner.clone())
    }
}

impl From<NounPhraseSpec> for Element {
    fn from(spec: NounPhraseSpec) -> Self {
        Element::Phrase(spec.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_mirrors_tense_onto_verb_phrase() {
        let mut clause = ClauseSpec::new();
        let mut vp = VerbPhraseSpec::new();
        vp.set_head(Element::word("kiss", crate::category::LexicalCategory::Verb));
        clause.set_verb_phrase(vp.into());
        clause.set_tense(Tense::Past);

        let vp = clause.verb_phrase().unwrap();
        assert_eq!(vp.features().tense(Feature::Tense), Some(Tense::Past));
    }

    #[test]
    fn mirrored_feature_set_before_verb_installs_on_install() {
        let mut clause = ClauseSpec::new();
        clause.set_negated(true);
        clause.set_verb_phrase(VerbPhraseSpec::new().into());

        let vp = clause.verb_phrase().unwrap();
        assert!(vp.bool_feature(Feature::Negated));
    }

    #[test]
    fn clause_reads_mirrored_feature_through_verb_phrase() {
        let mut clause = ClauseSpec::new();
        clause.set_verb_phrase(VerbPhraseSpec::new().into());
        clause.set_feature(Feature::Passive, true);
        assert_eq!(
            clause.feature(Feature::Passive),
            Some(&FeatureValue::Bool(true))
        );
    }

    #[test]
    fn plural_specifier_makes_phrase_plural() {
        let mut np = NounPhraseSpec::new();
        let mut those = Element::word("those", crate::category::LexicalCategory::Determiner);
        those.set_feature(Feature::Number, NumberAgr::Plural);
        np.set_specifier(those);
        let element = np.to_element();
        assert!(element.is_plural());
    }
}
