//! Rule-based English surface realisation.
//!
//! Build a feature-annotated phrase tree with [`NlgFactory`] and the
//! phrase specs, then turn it into grammatical text with [`Realiser`]:
//!
//! ```
//! use phrasal::{NlgFactory, Realiser};
//!
//! let factory = NlgFactory::new();
//! let realiser = Realiser::new();
//!
//! let clause = factory.create_clause("the woman", "kiss", "the man");
//! assert_eq!(
//!     realiser.realise_sentence(&clause.to_element()),
//!     "The woman kisses the man."
//! );
//! ```
//!
//! Realisation runs three passes: syntax (ordering and verb-group
//! construction), morphology (inflection), and orthography (commas,
//! capitalisation, termination). None of them mutate the input, so a
//! spec can be reused and re-realised freely.

mod category;
mod element;
mod error;
mod factory;
mod features;
mod lexicon;
mod morphology;
mod orthography;
mod realiser;
mod spec;
mod syntax;

pub use category::{DocumentCategory, LexicalCategory, PhraseCategory};
pub use element::{
    CoordinatedElement, DocumentElement, Element, InflectedWordElement, ListElement,
    PhraseElement, StringElement, WordElement,
};
pub use error::RealiseError;
pub use factory::{add_document_component, NlgFactory, SpecItem};
pub use features::{
    ClauseStatus, DiscourseFunction, Feature, FeatureMap, FeatureValue, Form, Gender,
    InterrogativeType, NumberAgr, Person, Tense,
};
pub use lexicon::{Lexicon, SimpleLexicon};
pub use realiser::Realiser;
pub use spec::{ClauseSpec, NounPhraseSpec, VerbPhraseSpec};
