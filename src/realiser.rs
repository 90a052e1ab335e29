//! The realiser facade: runs the syntax, morphology, and orthography
//! passes in order and hands back text.

use crate::category::DocumentCategory;
use crate::element::{DocumentElement, Element};
use crate::features::{Feature, FeatureValue};
use crate::lexicon::{Lexicon, SimpleLexicon};
use crate::morphology;
use crate::orthography;
use crate::syntax::Syntax;

/// Turns phrase specs and documents into English text. Realisation
/// never mutates its input, so the same spec can be realised twice.
#[derive(Debug, Default)]
pub struct Realiser<L: Lexicon = SimpleLexicon> {
    lexicon: L,
}

impl Realiser<SimpleLexicon> {
    pub fn new() -> Self {
        Realiser {
            lexicon: SimpleLexicon::new(),
        }
    }
}

impl<L: Lexicon> Realiser<L> {
    pub fn with_lexicon(lexicon: L) -> Self {
        Realiser { lexicon }
    }

    /// Run the full pipeline. Phrases come back as a string element
    /// holding their realisation; documents keep their structure with
    /// realised sentences inside.
    pub fn realise(&self, element: &Element) -> Element {
        let mut element = element.clone();
        mark_interrogative_sentences(&mut element);

        let syntax = Syntax {
            lexicon: &self.lexicon,
        };
        let realised = match syntax.realise(&element) {
            Some(realised) => realised,
            None => Element::text(""),
        };
        let realised = match morphology::realise(&realised) {
            Some(realised) => realised,
            None => Element::text(""),
        };
        orthography::realise(&realised)
    }

    /// Realise `element` as a complete sentence: wrapped in a sentence
    /// node if it is not a document already, capitalised and terminated.
    pub fn realise_sentence(&self, element: &Element) -> String {
        let sentence = match element {
            Element::Document(_) => element.clone(),
            other => {
                let mut wrapper = DocumentElement::new(DocumentCategory::Sentence);
                wrapper.children.push(other.clone());
                Element::Document(wrapper)
            }
        };
        collect_text(&self.realise(&sentence))
    }
}

/// Sentence text within documents, joined with spaces; paragraphs are
/// separated by blank lines.
fn collect_text(element: &Element) -> String {
    match element {
        Element::Str(text) => text.text.clone(),
        Element::Document(doc) => {
            let parts: Vec<String> = doc
                .children
                .iter()
                .map(collect_text)
                .filter(|part| !part.is_empty())
                .collect();
            match doc.category {
                DocumentCategory::Document => parts.join("\n\n"),
                DocumentCategory::Paragraph => parts.join(" "),
                DocumentCategory::Sentence => parts.join(" "),
            }
        }
        _ => String::new(),
    }
}

/// A question mark needs to survive from the clause that asked it up to
/// the sentence that ends with it. Sentence nodes are flagged up front
/// by scanning their content for an interrogative clause.
fn mark_interrogative_sentences(element: &mut Element) {
    if let Element::Document(doc) = element {
        if doc.category == DocumentCategory::Sentence
            && doc.children.iter().any(contains_interrogative)
        {
            doc.features.set(Feature::InterrogativeSentence, true);
        }
        for child in &mut doc.children {
            mark_interrogative_sentences(child);
        }
    }
}

fn contains_interrogative(element: &Element) -> bool {
    if element.features().is_set(Feature::Interrogative) {
        return true;
    }
    let in_features = element.features().iter().any(|(_, value)| match value {
        FeatureValue::Element(child) => contains_interrogative(child),
        FeatureValue::Elements(children) => children.iter().any(contains_interrogative),
        _ => false,
    });
    in_features || element.children().iter().any(contains_interrogative)
}
