//! Coreference-chain canonicalization.

use layered_annotation::{AnnotatedDocument, CoreferenceChain, PartOfSpeech, Token};

use crate::replacement::{MapWriter, Rule};
use crate::CorefConfig;

/// Point every mention of a single-token chain at the chain's canonical noun.
pub(crate) fn canonicalize_chains(writer: &mut MapWriter<'_>) {
    let document = writer.document();
    for chain in document.chains() {
        if chain.has_plural_mention() {
            continue;
        }
        let canonical = match canonical_token(document, chain) {
            Some(token) => token,
            None => continue,
        };
        for mention in chain.mentions() {
            let index = match mention.first() {
                Some(index) => index,
                None => continue,
            };
            if document[index].text != canonical.text {
                writer.write(index, canonical.text.clone(), Rule::ChainCanonical);
            }
        }
    }
}

/// Give single-token mentions of a plural chain the chain's longest mention.
///
/// Reads replacements recorded by earlier stages, so "he and his wife" with
/// "he" already resolved renders as "Peter and wife".
pub(crate) fn join_plural_chains(writer: &mut MapWriter<'_>, config: &CorefConfig) {
    let document = writer.document();
    for chain in document.chains() {
        if !chain.has_plural_mention() {
            continue;
        }
        let longest = match chain.longest_mention() {
            Some(mention) => mention,
            None => continue,
        };
        let joined = longest
            .indexes()
            .iter()
            .map(|&index| writer.map().resolved_text(document, index))
            .collect::<Vec<_>>()
            .join(&config.join_token);

        for mention in chain.mentions() {
            if let [index] = mention.indexes() {
                writer.write(*index, joined.clone(), Rule::PluralChain);
            }
        }
    }
}

/// Longest proper noun among the chain's tokens, else longest noun.
pub fn canonical_token<'a>(
    document: &'a AnnotatedDocument,
    chain: &CoreferenceChain,
) -> Option<&'a Token> {
    let candidates: Vec<&Token> = chain
        .mentions()
        .iter()
        .flat_map(|mention| mention.indexes())
        .map(|&index| &document[index])
        .filter(|token| token.pos.is_nominal())
        .collect();

    longest(
        candidates
            .iter()
            .copied()
            .filter(|token| token.pos == PartOfSpeech::ProperNoun),
    )
    .or_else(|| longest(candidates.iter().copied()))
}

/// First token with the most characters.
fn longest<'a>(tokens: impl Iterator<Item = &'a Token>) -> Option<&'a Token> {
    let mut best: Option<&'a Token> = None;
    for token in tokens {
        let longer = best.map_or(true, |best| {
            token.text.chars().count() > best.text.chars().count()
        });
        if longer {
            best = Some(token);
        }
    }
    best
}
