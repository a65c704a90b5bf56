//! Audio responses: pick an archived audio item and play its voice rendition.

use rand::seq::SliceRandom;
use rand::Rng;
use speakhtml::{escape_attr, escape_xml, marker};
use tracing::info;
use url::Url;

use crate::config::SkillConfig;
use crate::source::{AudioArchive, AudioItem, AudioQuery};
use crate::texts::NO_MATCH_TEXT;
use crate::{Result, SkillError};

/// Suffix of the voice-ready rendition stored next to each upload
pub const AUDIO_RENDITION_SUFFIX: &str = "_Alexa_audio.mp3";

/// Speak a random audio item whose title contains `term`
pub fn play_audio<A, R>(
    audio: &A,
    config: &SkillConfig,
    term: Option<&str>,
    rng: &mut R,
) -> Result<String>
where
    A: AudioArchive + ?Sized,
    R: Rng + ?Sized,
{
    let items = audio.search_audio(&AudioQuery::default())?;
    let matching = matching_items(&items, term);
    info!(
        term = term.unwrap_or_default(),
        results = items.len(),
        matching = matching.len(),
        "searched audio items"
    );

    let Some(item) = matching.choose(rng) else {
        return Ok(NO_MATCH_TEXT.to_string());
    };

    let url = audio_url(&config.cdn_base_url, &item.s3_key)?;
    let byline = item
        .creators
        .first()
        .map(|creator| format!(" by {}", escape_xml(creator)))
        .unwrap_or_default();
    let audio_tag = marker("audio", &format!(r#" src="{}""#, escape_attr(url.as_str())));

    Ok(format!(
        "Playing an excerpt from {}{byline}. To listen to the full audio please visit {}. {audio_tag}",
        escape_xml(&item.title),
        config.site_name
    ))
}

/// Items whose title contains `term`, ignoring case; all items without a term
fn matching_items<'a>(items: &'a [AudioItem], term: Option<&str>) -> Vec<&'a AudioItem> {
    match term {
        Some(term) => {
            let needle = term.to_lowercase();
            items
                .iter()
                .filter(|item| item.title.to_lowercase().contains(&needle))
                .collect()
        }
        None => items.iter().collect(),
    }
}

/// URL of the voice rendition of an upload: the key loses its four-character
/// extension and gains [`AUDIO_RENDITION_SUFFIX`]. The result is parsed, so
/// spaces and non-ASCII characters come out percent-encoded.
pub fn audio_url(cdn_base: &str, s3_key: &str) -> Result<Url> {
    let keep = s3_key.chars().count().saturating_sub(4);
    let stem: String = s3_key.chars().take(keep).collect();
    let raw = format!(
        "{}/{}{}",
        cdn_base.trim_end_matches('/'),
        stem.trim_start_matches('/'),
        AUDIO_RENDITION_SUFFIX
    );
    Url::parse(&raw).map_err(|source| SkillError::InvalidAudioUrl { url: raw, source })
}
