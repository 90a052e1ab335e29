//! The orthography pass: flattens the inflected tree into text,
//! handling commas around appositives, whitespace, capitalisation, and
//! sentence termination.

use unicode_segmentation::UnicodeSegmentation;

use crate::category::DocumentCategory;
use crate::element::{Element, StringElement};
use crate::features::{DiscourseFunction, Feature};

pub(crate) fn realise(element: &Element) -> Element {
    match element {
        Element::Document(doc) => match doc.category {
            DocumentCategory::Sentence => {
                let mut text = String::new();
                realise_list(&mut text, &doc.children, "");
                let mut text = remove_punct_space(&text);
                strip_leading(&mut text);
                capitalise_first_letter(&mut text);
                terminate_sentence(
                    &mut text,
                    doc.features.bool(Feature::InterrogativeSentence),
                );
                let mut out = StringElement::new(text);
                out.features = doc.features.clone();
                Element::Str(out)
            }
            _ => {
                let mut out = doc.clone();
                out.children = doc.children.iter().map(realise).collect();
                Element::Document(out)
            }
        },
        _ => {
            let mut out = StringElement::new(remove_punct_space(&realise_text(element)));
            if let Some(function) = element.features().get(Feature::Function) {
                out.features.set(Feature::Function, function.clone());
            }
            Element::Str(out)
        }
    }
}

fn realise_text(element: &Element) -> String {
    match element {
        Element::Str(text) => text.text.clone(),
        Element::Word(word) => word.base.clone(),
        Element::Inflected(word) => word.base.clone(),
        Element::List(list) => {
            // A wrapped modifier list announces its slot through its
            // first child.
            let function = list
                .children
                .first()
                .and_then(|child| child.features().function(Feature::Function));
            let mut buffer = String::new();
            match function {
                Some(DiscourseFunction::PreModifier) => {
                    let all_appositives = !list.children.is_empty()
                        && list
                            .children
                            .iter()
                            .all(|child| child.bool_feature(Feature::Appositive));
                    if all_appositives {
                        buffer.push_str(", ");
                    }
                    realise_list(&mut buffer, &list.children, ",");
                    if all_appositives {
                        buffer.push_str(", ");
                    }
                }
                Some(DiscourseFunction::PostModifier) => {
                    realise_post_modifiers(&mut buffer, &list.children);
                }
                _ => realise_list(&mut buffer, &list.children, ""),
            }
            remove_punct_space(&buffer)
        }
        Element::Coordinated(coord) => {
            let mut buffer = String::new();
            realise_list(&mut buffer, &coord.children, "");
            remove_punct_space(&buffer)
        }
        Element::Document(_) => match realise(element) {
            Element::Str(text) => text.text,
            other => realise_text(&other),
        },
        Element::Phrase(_) => String::new(),
    }
}

/// Appositive postmodifiers are sandwiched in commas: "the dog, a
/// terrier, runs".
fn realise_post_modifiers(buffer: &mut String, children: &[Element]) {
    let len = children.len();
    for (index, child) in children.iter().enumerate() {
        let text = realise_text(child);
        if child.bool_feature(Feature::Appositive) {
            buffer.push_str(", ");
            buffer.push_str(&text);
            if index < len - 1 {
                buffer.push_str(", ");
            }
        } else if !text.is_empty() {
            buffer.push_str(&text);
            buffer.push(' ');
        }
    }
    while buffer.ends_with(' ') {
        buffer.pop();
    }
}

fn realise_list(buffer: &mut String, children: &[Element], separator: &str) {
    let len = children.len();
    for (index, child) in children.iter().enumerate() {
        let text = realise_text(child);
        if !text.trim().is_empty() {
            buffer.push_str(&text);
            if len > 1 && index < len - 1 {
                buffer.push_str(separator);
            }
            buffer.push(' ');
        }
    }
    if buffer.ends_with(' ') {
        buffer.pop();
    }
}

fn remove_punct_space(text: &str) -> String {
    let mut out = text.replace(" ,", ",");
    while out.contains(",,") {
        out = out.replace(",,", ",");
    }
    out
}

fn strip_leading(text: &mut String) {
    while text.starts_with(' ') || text.starts_with(',') {
        text.remove(0);
    }
}

fn capitalise_first_letter(text: &mut String) {
    if let Some(first) = text.graphemes(true).next() {
        if first.chars().all(char::is_lowercase) {
            let upper = first.to_uppercase();
            let len = first.len();
            text.replace_range(0..len, &upper);
        }
    }
}

fn terminate_sentence(text: &mut String, interrogative: bool) {
    if !text.ends_with('.') && !text.ends_with('?') {
        text.push(if interrogative { '?' } else { '.' });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punct_space_cleanup() {
        assert_eq!(remove_punct_space("the dog , a terrier ,, runs"), "the dog, a terrier, runs");
    }

    #[test]
    fn sentence_termination() {
        let mut text = "the woman kisses the man".to_string();
        terminate_sentence(&mut text, false);
        assert_eq!(text, "the woman kisses the man.");

        let mut question = "does the woman kiss the man".to_string();
        terminate_sentence(&mut question, true);
        assert_eq!(question, "does the woman kiss the man?");

        let mut done = "all set.".to_string();
        terminate_sentence(&mut done, false);
        assert_eq!(done, "all set.");
    }

    #[test]
    fn leading_commas_and_capital() {
        let mut text = " , however, she ran".to_string();
        strip_leading(&mut text);
        capitalise_first_letter(&mut text);
        assert_eq!(text, "However, she ran");
    }
}
