//! Dictionary lookups used to enrich a translation.
//!
//! Lookups are best effort: [`get_word_details`] never returns an error, it
//! returns no entries instead, so a dictionary outage cannot fail a
//! translation.

use crate::config::Config;
use crate::models::DictionaryEntry;
use tracing::{debug, warn};

/// Maximum number of usage examples returned to the caller
pub const MAX_EXAMPLES: usize = 3;

/// Build `<base>/<word>` with the word escaped as a single path segment
fn lookup_url(base_url: &str, word: &str) -> Option<reqwest::Url> {
    let mut url = reqwest::Url::parse(base_url).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push(word);
    Some(url)
}

/// Look up `word` in the dictionary provider
///
/// Returns an empty vector on any failure, including the provider's 404 for
/// unknown words.
pub async fn get_word_details(
    client: &reqwest::Client,
    config: &Config,
    word: &str,
) -> Vec<DictionaryEntry> {
    let Some(url) = lookup_url(&config.dictionary_api_url, word) else {
        warn!(
            "Dictionary API URL is not usable: {:?}",
            config.dictionary_api_url
        );
        return Vec::new();
    };

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Dictionary lookup for {:?} failed: {}", word, e);
            return Vec::new();
        }
    };

    if !response.status().is_success() {
        debug!(
            "Dictionary lookup for {:?} returned {}",
            word,
            response.status()
        );
        return Vec::new();
    }

    match response.json::<Vec<DictionaryEntry>>().await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to parse dictionary response for {:?}: {}", word, e);
            Vec::new()
        }
    }
}

/// First non-empty phonetic text of the first entry.
///
/// Later entries are never consulted, even when the first has no phonetics.
pub fn extract_pronunciation(entries: &[DictionaryEntry]) -> Option<String> {
    entries
        .first()?
        .phonetics
        .iter()
        .filter_map(|p| p.text.as_deref())
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Up to [`MAX_EXAMPLES`] usage examples, in source order across all entries,
/// meanings and definitions.
pub fn extract_examples(entries: &[DictionaryEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|entry| &entry.meanings)
        .flat_map(|meaning| &meaning.definitions)
        .filter_map(|definition| definition.example.as_deref())
        .filter(|example| !example.is_empty())
        .take(MAX_EXAMPLES)
        .map(str::to_string)
        .collect()
}
