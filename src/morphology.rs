//! The morphology pass: inflects the words the syntax pass produced.
//!
//! Irregular forms attached to the word as features win over the
//! regular rules. The pass also handles determiner agreement, which
//! needs the realisation of the following word ("an owl", "some dogs").

use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::LexicalCategory;
use crate::element::{Element, InflectedWordElement, ListElement, StringElement};
use crate::features::{DiscourseFunction, Feature, Form, NumberAgr, Person, Tense};

// Pronoun lookup: [number][position][person], where position is
// subjective, objective, reflexive, possessive pronoun, possessive
// determiner, and third person fans out by gender.
const PRONOUNS: [[[&str; 5]; 5]; 2] = [
    [
        ["I", "you", "he", "she", "it"],
        ["me", "you", "him", "her", "it"],
        ["myself", "yourself", "himself", "herself", "itself"],
        ["mine", "yours", "his", "hers", "its"],
        ["my", "your", "his", "her", "its"],
    ],
    [
        ["we", "you", "they", "they", "they"],
        ["us", "you", "them", "them", "them"],
        ["ourselves", "yourselves", "themselves", "themselves", "themselves"],
        ["ours", "yours", "theirs", "theirs", "theirs"],
        ["our", "your", "their", "their", "their"],
    ],
];

const WH_PRONOUNS: &[&str] = &["who", "what", "which", "where", "why", "how", "how many"];

static CONSONANT_Y: Lazy<Regex> = Lazy::new(|| Regex::new(r"[b-df-hj-np-tv-z]y$").unwrap());
static SIBILANT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(s|z|x|ch|sh)$").unwrap());
static E_DROP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^iyeo]e$").unwrap());
static AN_AGREEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(a|e|i|o|u)").unwrap());
static AN_EXCEPTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(one|180|110)").unwrap());
static AN_NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(8|11|18)").unwrap());

/// Inflect a realised syntax tree. Structure is preserved; inflected
/// words come back as canned strings.
pub(crate) fn realise(element: &Element) -> Option<Element> {
    match element {
        Element::Inflected(word) => Some(do_morphology(word)),
        Element::Str(_) => Some(element.clone()),
        Element::Word(word) => Some(Element::text(word.base.clone())),
        Element::Document(doc) => {
            let mut out = doc.clone();
            out.children = realise_children(&doc.children);
            Some(Element::Document(out))
        }
        Element::List(list) => {
            let mut out = ListElement::new();
            out.features = list.features.clone();
            out.children = realise_children(&list.children);
            Some(Element::List(out))
        }
        Element::Coordinated(coord) => {
            let mut out = coord.clone();
            out.children = realise_children(&coord.children);
            Some(Element::Coordinated(out))
        }
        Element::Phrase(_) => Some(element.clone()),
    }
}

/// Realise every child, then patch determiners whose shape depends on
/// the word after them.
fn realise_children(elements: &[Element]) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    let mut determiner: Option<(usize, bool)> = None;
    let mut prev_was_string = false;

    for each in elements {
        let Some(mut current) = realise(each) else {
            prev_was_string = matches!(each, Element::Str(_));
            continue;
        };
        if each.bool_feature(Feature::Appositive) {
            current.set_feature(Feature::Appositive, true);
        }
        if let Some(function) = each.features().get(Feature::Function) {
            current.set_feature(Feature::Function, function.clone());
        }

        // Canned text ending in "a" directly before a noun still takes
        // part in a/an agreement.
        if prev_was_string
            && matches!(each, Element::Inflected(_))
            && each.lexical_category() == Some(LexicalCategory::Noun)
        {
            if let (Some(Element::Str(prev)), Some(np)) =
                (out.last_mut(), realisation_of(&current).map(str::to_string))
            {
                prev.text = check_ends_with_indefinite_article(&prev.text, &np);
            }
        }

        let is_specifier =
            current.features().function(Feature::Function) == Some(DiscourseFunction::Specifier);
        let index = out.len();
        out.push(current);

        if determiner.is_none() && is_specifier {
            determiner = Some((index, each.is_plural()));
        } else if let Some((det_index, plural)) = determiner.take() {
            if let Some(np) = realisation_of(&out[index]).map(str::to_string) {
                if let Some(Element::Str(det)) = out.get_mut(det_index) {
                    do_determiner_morphology(&mut det.text, plural, &np);
                }
            }
        }
        prev_was_string = matches!(each, Element::Str(_));
    }
    out
}

/// First bit of realised text under an element, for agreement checks.
fn realisation_of(element: &Element) -> Option<&str> {
    match element {
        Element::Str(text) => Some(&text.text),
        Element::List(list) => list.children.first().and_then(realisation_of),
        Element::Coordinated(coord) => coord.children.first().and_then(realisation_of),
        _ => None,
    }
}

fn do_morphology(element: &InflectedWordElement) -> Element {
    let realised = if element.features.bool(Feature::NonMorph) {
        element.base.clone()
    } else {
        match element.category {
            LexicalCategory::Pronoun => do_pronoun_morphology(element),
            LexicalCategory::Noun => do_noun_morphology(element),
            LexicalCategory::Verb => do_verb_morphology(element),
            LexicalCategory::Adjective => do_adjective_morphology(element),
            LexicalCategory::Adverb => do_adverb_morphology(element),
            _ => element.base.clone(),
        }
    };
    let mut out = StringElement::new(realised);
    if let Some(function) = element.features.get(Feature::Function) {
        out.features.set(Feature::Function, function.clone());
    }
    if let Some(number) = element.features.get(Feature::Number) {
        out.features.set(Feature::Number, number.clone());
    }
    Element::Str(out)
}

// ==================================================
// Nouns
// ==================================================

fn do_noun_morphology(element: &InflectedWordElement) -> String {
    let base = &element.base;
    let mut realised = if element.features.number(Feature::Number) == Some(NumberAgr::Plural) {
        match element.features.text(Feature::PluralForm) {
            Some(plural) => plural.to_string(),
            None => build_regular_plural_noun(base),
        }
    } else {
        base.clone()
    };
    check_possessive(element, &mut realised);
    realised
}

fn build_regular_plural_noun(base: &str) -> String {
    if CONSONANT_Y.is_match(base) {
        format!("{}ies", &base[..base.len() - 1])
    } else if SIBILANT.is_match(base) {
        format!("{base}es")
    } else {
        format!("{base}s")
    }
}

fn check_possessive(element: &InflectedWordElement, realised: &mut String) {
    if element.features.bool(Feature::Possessive) {
        if realised.ends_with('s') {
            realised.push('\'');
        } else {
            realised.push_str("'s");
        }
    }
}

// ==================================================
// Verbs
// ==================================================

fn do_verb_morphology(element: &InflectedWordElement) -> String {
    let base = &element.base;
    let number = element.features.number(Feature::Number);
    let person = element.features.person(Feature::Person);
    let tense = element.features.tense(Feature::Tense).unwrap_or(Tense::Present);
    let form = element.features.form(Feature::Form);

    if element.features.bool(Feature::Negated) || form == Some(Form::BareInfinitive) {
        base.clone()
    } else if form == Some(Form::PresentParticiple) {
        match element.features.text(Feature::PresentParticipleForm) {
            Some(participle) => participle.to_string(),
            None => build_present_participle(base),
        }
    } else if form == Some(Form::PastParticiple) {
        match element.features.text(Feature::PastParticipleForm) {
            Some(participle) => participle.to_string(),
            None if base.eq_ignore_ascii_case("be") => "been".to_string(),
            None => build_regular_past(base, number, person),
        }
    } else if tense == Tense::Past {
        match element.features.text(Feature::PastForm) {
            Some(past) => past.to_string(),
            None => build_regular_past(base, number, person),
        }
    } else if matches!(number, None | Some(NumberAgr::Singular))
        && matches!(person, None | Some(Person::Third))
        && tense == Tense::Present
    {
        match element.features.text(Feature::Present3sForm) {
            Some(present) => present.to_string(),
            None => build_present_3s(base),
        }
    } else if base.eq_ignore_ascii_case("be") {
        if person == Some(Person::First) && matches!(number, None | Some(NumberAgr::Singular)) {
            "am".to_string()
        } else {
            "are".to_string()
        }
    } else {
        base.clone()
    }
}

fn build_present_3s(base: &str) -> String {
    if base.eq_ignore_ascii_case("be") {
        "is".to_string()
    } else if SIBILANT.is_match(base) {
        format!("{base}es")
    } else if CONSONANT_Y.is_match(base) {
        format!("{}ies", &base[..base.len() - 1])
    } else {
        format!("{base}s")
    }
}

fn build_regular_past(base: &str, number: Option<NumberAgr>, person: Option<Person>) -> String {
    if base.eq_ignore_ascii_case("be") {
        if number == Some(NumberAgr::Plural) || person == Some(Person::Second) {
            "were".to_string()
        } else {
            "was".to_string()
        }
    } else if base.ends_with('e') {
        format!("{base}d")
    } else if CONSONANT_Y.is_match(base) {
        format!("{}ied", &base[..base.len() - 1])
    } else {
        format!("{base}ed")
    }
}

fn build_present_participle(base: &str) -> String {
    if base.eq_ignore_ascii_case("be") {
        "being".to_string()
    } else if base.ends_with("ie") {
        format!("{}ying", &base[..base.len() - 2])
    } else if E_DROP.is_match(base) {
        format!("{}ing", &base[..base.len() - 1])
    } else {
        format!("{base}ing")
    }
}

// ==================================================
// Adjectives and adverbs
// ==================================================

fn do_adjective_morphology(element: &InflectedWordElement) -> String {
    graded_morphology(element)
}

fn do_adverb_morphology(element: &InflectedWordElement) -> String {
    graded_morphology(element)
}

fn graded_morphology(element: &InflectedWordElement) -> String {
    let base = &element.base;
    if element.features.bool(Feature::Comparative) {
        match element.features.text(Feature::ComparativeForm) {
            Some(comparative) => comparative.to_string(),
            None => build_regular_comparative(base),
        }
    } else if element.features.bool(Feature::Superlative) {
        match element.features.text(Feature::SuperlativeForm) {
            Some(superlative) => superlative.to_string(),
            None => build_regular_superlative(base),
        }
    } else {
        base.clone()
    }
}

fn build_regular_comparative(base: &str) -> String {
    if CONSONANT_Y.is_match(base) {
        format!("{}ier", &base[..base.len() - 1])
    } else if base.ends_with('e') {
        format!("{base}r")
    } else {
        format!("{base}er")
    }
}

fn build_regular_superlative(base: &str) -> String {
    if CONSONANT_Y.is_match(base) {
        format!("{}iest", &base[..base.len() - 1])
    } else if base.ends_with('e') {
        format!("{base}st")
    } else {
        format!("{base}est")
    }
}

// ==================================================
// Pronouns
// ==================================================

fn do_pronoun_morphology(element: &InflectedWordElement) -> String {
    if WH_PRONOUNS.contains(&element.base.as_str()) {
        return element.base.clone();
    }

    let number_index = usize::from(element.features.number(Feature::Number) == Some(NumberAgr::Plural));
    let gender_index = match element.features.gender(Feature::Gender) {
        Some(crate::features::Gender::Masculine) => 0,
        Some(crate::features::Gender::Feminine) => 1,
        _ => 2,
    };
    let mut person_index = match element.features.person(Feature::Person) {
        Some(Person::First) => 0,
        Some(Person::Second) => 1,
        _ => 2,
    };
    if person_index == 2 {
        person_index += gender_index;
    }

    let function = element.features.function(Feature::Function);
    let passive = element.features.bool(Feature::Passive);
    let position_index = if element.features.bool(Feature::Reflexive) {
        2
    } else if element.features.bool(Feature::Possessive) {
        if function == Some(DiscourseFunction::Specifier) {
            4
        } else {
            3
        }
    } else if (function == Some(DiscourseFunction::Subject) && !passive)
        || (function == Some(DiscourseFunction::Object) && passive)
        || (function == Some(DiscourseFunction::Complement) && passive)
        || function == Some(DiscourseFunction::Specifier)
    {
        0
    } else {
        1
    };

    PRONOUNS[number_index][position_index][person_index].to_string()
}

// ==================================================
// Determiners
// ==================================================

fn do_determiner_morphology(determiner: &mut String, plural: bool, realisation: &str) {
    if determiner == "a" {
        if plural {
            *determiner = "some".to_string();
        } else if requires_an(realisation) {
            *determiner = "an".to_string();
        }
    } else if plural {
        if determiner == "that" {
            *determiner = "those".to_string();
        } else if determiner == "this" {
            *determiner = "these".to_string();
        }
    } else if determiner == "those" {
        *determiner = "that".to_string();
    } else if determiner == "these" {
        *determiner = "this".to_string();
    }
}

/// Whether a word takes "an": vowel-initial words minus exceptions like
/// "one", plus numbers read aloud with an initial vowel (8, 11, 18, 80-89
/// and their thousands).
pub(crate) fn requires_an(input: &str) -> bool {
    let lowercase = input.to_lowercase();
    if AN_AGREEMENT.is_match(&lowercase) && !AN_EXCEPTION.is_match(&lowercase) {
        return true;
    }
    match numeric_prefix(&lowercase) {
        Some(prefix) if AN_NUMERAL.is_match(&prefix) => match prefix.parse::<u64>() {
            Ok(num) => check_num(num),
            Err(_) => false,
        },
        _ => false,
    }
}

fn check_num(mut num: u64) -> bool {
    while num > 1000 {
        num /= 1000;
    }
    num == 11 || num == 18 || num == 8 || (80..90).contains(&num)
}

fn numeric_prefix(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let mut numeric = String::new();
    for (index, character) in trimmed.chars().enumerate() {
        if character.is_ascii_digit() {
            numeric.push(character);
        } else if character == ',' && index > 0 {
            continue;
        } else {
            break;
        }
    }
    if numeric.is_empty() {
        None
    } else {
        Some(numeric)
    }
}

fn check_ends_with_indefinite_article(text: &str, np: &str) -> String {
    match text.rsplit_once(' ') {
        Some((rest, last)) if last.eq_ignore_ascii_case("a") && requires_an(np) => {
            format!("{rest} an")
        }
        None if text.eq_ignore_ascii_case("a") && requires_an(np) => "an".to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals() {
        assert_eq!(build_regular_plural_noun("dog"), "dogs");
        assert_eq!(build_regular_plural_noun("baby"), "babies");
        assert_eq!(build_regular_plural_noun("box"), "boxes");
        assert_eq!(build_regular_plural_noun("church"), "churches");
        assert_eq!(build_regular_plural_noun("boy"), "boys");
    }

    #[test]
    fn regular_past_forms() {
        assert_eq!(build_regular_past("kiss", None, None), "kissed");
        assert_eq!(build_regular_past("love", None, None), "loved");
        assert_eq!(build_regular_past("cry", None, None), "cried");
        assert_eq!(
            build_regular_past("be", Some(NumberAgr::Plural), None),
            "were"
        );
        assert_eq!(build_regular_past("be", None, None), "was");
    }

    #[test]
    fn present_participles() {
        assert_eq!(build_present_participle("kiss"), "kissing");
        assert_eq!(build_present_participle("make"), "making");
        assert_eq!(build_present_participle("die"), "dying");
        assert_eq!(build_present_participle("be"), "being");
        assert_eq!(build_present_participle("free"), "freeing");
    }

    #[test]
    fn third_person_singular() {
        assert_eq!(build_present_3s("kiss"), "kisses");
        assert_eq!(build_present_3s("fly"), "flies");
        assert_eq!(build_present_3s("walk"), "walks");
        assert_eq!(build_present_3s("be"), "is");
    }

    #[test]
    fn an_agreement() {
        assert!(requires_an("owl"));
        assert!(requires_an("elephant"));
        assert!(!requires_an("cow"));
        assert!(!requires_an("one"));
        assert!(requires_an("18%"));
        assert!(!requires_an("180"));
        assert!(requires_an("11,000"));
    }

    #[test]
    fn determiner_some_and_an() {
        let mut det = "a".to_string();
        do_determiner_morphology(&mut det, false, "owl");
        assert_eq!(det, "an");

        let mut det = "a".to_string();
        do_determiner_morphology(&mut det, true, "dog");
        assert_eq!(det, "some");

        let mut det = "this".to_string();
        do_determiner_morphology(&mut det, true, "dogs");
        assert_eq!(det, "these");
    }
}
