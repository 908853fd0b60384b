//! Rule-based pronoun and possessive rewriting.

use layered_annotation::{PartOfSpeech, Token};

use crate::replacement::{MapWriter, Rule};
use crate::CorefConfig;

/// Single left-to-right scan over the document's pronouns.
pub(crate) fn resolve_pronouns(writer: &mut MapWriter<'_>, config: &CorefConfig) {
    let document = writer.document();
    let mut prev_propn: Option<&Token> = None;

    for token in document.tokens() {
        match token.pos {
            PartOfSpeech::ProperNoun => prev_propn = Some(token),
            PartOfSpeech::Pronoun => match token.lower().as_str() {
                "me" => writer.write(token.index, config.first_person_token.clone(), Rule::FirstPerson),
                "i" => {
                    writer.write(token.index, config.first_person_token.clone(), Rule::FirstPerson);
                    if let Some(next) = document.next_token(token.index) {
                        if let Some(agreed) = third_person_verb(next) {
                            writer.write(next.index, agreed, Rule::VerbAgreement);
                        }
                    }
                }
                // A standalone "mine" ("the ring is mine" -> "the ring belongs to SPEAKER")
                // is never produced: this arm always claims "mine" first.
                "my" | "mine" => writer.write(token.index, config.possessive(), Rule::Possessive),
                "who" => {
                    if let Some(antecedent) = prev_propn {
                        writer.write(token.index, antecedent.text.clone(), Rule::RelativePronoun);
                    }
                }
                "we" => {
                    if let Some(group) = plural_antecedents(writer, token.index, config) {
                        writer.write(token.index, group, Rule::PluralWe);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
}

/// Naive present-tense agreement for the verb following "I".
fn third_person_verb(next: &Token) -> Option<String> {
    if next.text == "have" {
        Some("has".to_string())
    } else if next.pos == PartOfSpeech::Verb && next.text.ends_with('e') {
        Some(format!("{}s", next.text))
    } else {
        None
    }
}

/// Distinct nominals before `index`, rendered as a list, when at least two exist.
fn plural_antecedents(writer: &MapWriter<'_>, index: usize, config: &CorefConfig) -> Option<String> {
    let document = writer.document();
    let mut names: Vec<&str> = Vec::new();
    for token in &document.tokens()[..index] {
        if !(token.pos.is_nominal() || token.pos == PartOfSpeech::Pronoun) {
            continue;
        }
        let name = writer.map().resolved_text(document, token.index);
        if !names.contains(&name) {
            names.push(name);
        }
    }

    match names.split_last() {
        Some((last, rest)) if rest.len() >= 2 => {
            Some(format!("{}{}{}", rest.join(", "), config.join_token, last))
        }
        Some((last, [only])) => Some(format!("{}{}{}", only, config.join_token, last)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoopObserver, ReplacementMap};
    use layered_annotation::{dep, AnnotatedDocument, DocumentBuilder, PartOfSpeech::*};

    fn run(doc: &AnnotatedDocument, config: &CorefConfig) -> ReplacementMap {
        let mut writer = MapWriter::new(doc, &NoopObserver);
        resolve_pronouns(&mut writer, config);
        writer.finish()
    }

    #[test]
    fn test_first_person_and_agreement() {
        let doc = DocumentBuilder::new("I have it")
            .token("I", Pronoun, dep::NSUBJ, 1)
            .token("have", Verb, dep::ROOT, 1)
            .lemma("have")
            .token("it", Pronoun, dep::DOBJ, 1)
            .build()
            .unwrap();

        let map = run(&doc, &CorefConfig::default());
        assert_eq!(map.render(&doc), "SPEAKER has it");
    }

    #[test]
    fn test_agreement_skips_non_verbs_and_other_endings() {
        let doc = DocumentBuilder::new("I ran home")
            .token("I", Pronoun, dep::NSUBJ, 1)
            .token("ran", Verb, dep::ROOT, 1)
            .token("home", Noun, dep::DOBJ, 1)
            .build()
            .unwrap();
        assert_eq!(run(&doc, &CorefConfig::default()).render(&doc), "SPEAKER ran home");

        let doc = DocumentBuilder::new("I alone")
            .token("I", Pronoun, dep::ROOT, 0)
            .token("alone", Other, "advmod", 0)
            .build()
            .unwrap();
        assert_eq!(run(&doc, &CorefConfig::default()).render(&doc), "SPEAKER alone");
    }

    #[test]
    fn test_i_in_last_position() {
        let doc = DocumentBuilder::new("It was I")
            .token("It", Pronoun, dep::NSUBJ, 1)
            .token("was", Auxiliary, dep::ROOT, 1)
            .lemma("be")
            .token("I", Pronoun, dep::ATTR, 1)
            .build()
            .unwrap();

        let map = run(&doc, &CorefConfig::speaker("Miro"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.render(&doc), "It was Miro");
    }

    #[test]
    fn test_mine_is_possessive() {
        let doc = DocumentBuilder::new("The ring is mine")
            .token("The", Other, dep::DET, 1)
            .token("ring", Noun, dep::NSUBJ, 2)
            .token("is", Auxiliary, dep::ROOT, 2)
            .lemma("be")
            .token("mine", Pronoun, dep::ATTR, 2)
            .build()
            .unwrap();

        let map = run(&doc, &CorefConfig::speaker("Miro"));
        assert_eq!(map.render(&doc), "The ring is Miro's");
        assert_eq!(map.log()[0].rule, Rule::Possessive);
    }

    #[test]
    fn test_who_needs_preceding_proper_noun() {
        let doc = DocumentBuilder::new("who knows")
            .token("who", Pronoun, dep::NSUBJ, 1)
            .token("knows", Verb, dep::ROOT, 1)
            .build()
            .unwrap();
        assert!(run(&doc, &CorefConfig::default()).is_empty());
    }

    #[test]
    fn test_we_with_two_antecedents() {
        let doc = DocumentBuilder::new("Anna met Tom. We laughed")
            .token("Anna", ProperNoun, dep::NSUBJ, 1)
            .token("met", Verb, dep::ROOT, 1)
            .token("Tom", ProperNoun, dep::DOBJ, 1)
            .token(".", Other, dep::PUNCT, 1)
            .token("We", Pronoun, dep::NSUBJ, 5)
            .token("laughed", Verb, dep::ROOT, 5)
            .build()
            .unwrap();

        let map = run(&doc, &CorefConfig::default());
        assert_eq!(map.render(&doc), "Anna met Tom. Anna and Tom laughed");

        let map = run(&doc, &CorefConfig::default().with_join_token(" & "));
        assert_eq!(map.get(4), Some("Anna & Tom"));
    }

    #[test]
    fn test_we_is_ambiguous_with_one_antecedent() {
        let doc = DocumentBuilder::new("Anna left. Anna and we stayed")
            .token("Anna", ProperNoun, dep::NSUBJ, 1)
            .token("left", Verb, dep::ROOT, 1)
            .token(".", Other, dep::PUNCT, 1)
            .token("Anna", ProperNoun, dep::NSUBJ, 6)
            .token("and", Other, dep::CC, 3)
            .token("we", Pronoun, dep::CONJ, 3)
            .token("stayed", Verb, dep::ROOT, 6)
            .build()
            .unwrap();

        // both nominals render as "Anna"
        assert!(run(&doc, &CorefConfig::default()).is_empty());
    }
}
