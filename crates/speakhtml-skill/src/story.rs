//! Story responses: pick a post, name its authors and speak its body.

use rand::seq::SliceRandom;
use rand::Rng;
use speakhtml::{truncate_with, Filter, KeepAll, SpeechService};
use tracing::{debug, info};

use crate::config::SkillConfig;
use crate::source::{Post, StoryArchive};
use crate::texts::NO_MATCH_TEXT;
use crate::Result;

/// Pause placed after the byline and after an excerpt
pub const STRONG_BREAK: &str = r#"<break strength="strong"/>"#;

/// Speak a random story matching `term`
pub fn tell_story<S, R>(
    stories: &S,
    speech: &SpeechService,
    config: &SkillConfig,
    term: Option<&str>,
    rng: &mut R,
) -> Result<String>
where
    S: StoryArchive + ?Sized,
    R: Rng + ?Sized,
{
    let posts = stories.search_posts(term.unwrap_or_default())?;
    info!(term = term.unwrap_or_default(), results = posts.len(), "searched stories");

    let Some(post) = posts.choose(rng) else {
        return Ok(NO_MATCH_TEXT.to_string());
    };

    let authors = post_authors(stories, speech, post, config.author_category_parent)?;
    let title = speech.convert(&post.title, &KeepAll);
    let footnotes = Filter::tag_with_class("ul", &config.footnote_class);
    let body = speech.convert(&post.content, &footnotes);
    debug!(post = post.id, authors = authors.len(), chars = body.chars().count(), "converted story");

    Ok(story_speech(speech, config, &title, &authors, &body))
}

/// Names of the post's categories filed under the author category, in
/// category order
fn post_authors<S>(
    stories: &S,
    speech: &SpeechService,
    post: &Post,
    author_parent: u64,
) -> Result<Vec<String>>
where
    S: StoryArchive + ?Sized,
{
    let mut authors = Vec::new();
    for id in &post.categories {
        let category = stories.category(*id)?;
        if category.parent == author_parent {
            authors.push(speech.convert(&category.name, &KeepAll));
        }
    }
    Ok(authors)
}

/// `A`, `A and B`, `A, B and C`
pub fn speak_authors(authors: &[String]) -> String {
    match authors {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}

fn story_speech(
    speech: &SpeechService,
    config: &SkillConfig,
    title: &str,
    authors: &[String],
    body: &str,
) -> String {
    let byline = if authors.is_empty() {
        format!("{title}.")
    } else {
        format!("{title} by {}.{STRONG_BREAK}", speak_authors(authors))
    };

    if body.chars().count() > config.excerpt_budget {
        let excerpt = truncate_with(body, config.excerpt_budget, &speech.options().truncate);
        format!(
            "Playing you an excerpt from {byline} To read the full story, visit {}. {excerpt}{STRONG_BREAK}",
            config.site_name
        )
    } else {
        format!("{byline} {body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_speak_authors() {
        assert_eq!(speak_authors(&[]), "");
        assert_eq!(speak_authors(&names(&["Ana"])), "Ana");
        assert_eq!(speak_authors(&names(&["Ana", "Ben"])), "Ana and Ben");
        assert_eq!(speak_authors(&names(&["Ana", "Ben", "Cleo"])), "Ana, Ben and Cleo");
    }

    #[test]
    fn test_full_story_speech() {
        let speech = SpeechService::with_options(SkillConfig::default().speech);
        let config = SkillConfig::default();
        assert_eq!(
            story_speech(&speech, &config, "Tides", &names(&["Ana"]), "<p>Body</p>"),
            r#"Tides by Ana.<break strength="strong"/> <p>Body</p>"#
        );
        assert_eq!(
            story_speech(&speech, &config, "Tides", &[], "<p>Body</p>"),
            "Tides. <p>Body</p>"
        );
    }

    #[test]
    fn test_excerpt_story_speech() {
        let config = SkillConfig {
            excerpt_budget: 9,
            ..Default::default()
        };
        let speech = SpeechService::with_options(config.speech.clone());
        assert_eq!(
            story_speech(&speech, &config, "Tides", &[], "<p>Hello world</p>"),
            r#"Playing you an excerpt from Tides. To read the full story, visit Ocean-Archive.org. <p>Hello </p>.<break strength="strong"/>"#
        );
    }
}
