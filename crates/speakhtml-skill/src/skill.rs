//! Request dispatch.

use rand::Rng;
use speakhtml::SpeechService;
use tracing::{error, info, warn};

use crate::audio::play_audio;
use crate::config::SkillConfig;
use crate::request::{IntentRequest, Request};
use crate::response::Response;
use crate::source::{AudioArchive, StoryArchive};
use crate::story::tell_story;
use crate::texts::{ABOUT_TEXT, APOLOGY_TEXT, GOODBYE_TEXT, HELP_TEXT, LAUNCH_TEXT};
use crate::{Result, SkillError};

/// Intent names understood by the skill
pub mod intents {
    pub const AUDIO_ITEM: &str = "AudioItemIntent";
    pub const STORY_ITEM: &str = "StoryItemIntent";
    pub const ABOUT: &str = "AboutIntent";
    pub const HELP: &str = "AMAZON.HelpIntent";
    pub const CANCEL: &str = "AMAZON.CancelIntent";
    pub const STOP: &str = "AMAZON.StopIntent";
}

/// Slot carrying the search term
pub const KEYWORD_SLOT: &str = "keyword";

/// Voice skill over a story archive and an audio archive
pub struct Skill<S, A> {
    config: SkillConfig,
    speech: SpeechService,
    stories: S,
    audio: A,
}

impl<S, A> Skill<S, A>
where
    S: StoryArchive,
    A: AudioArchive,
{
    /// Create a skill with default configuration
    pub fn new(stories: S, audio: A) -> Self {
        Self::with_config(SkillConfig::default(), stories, audio)
    }

    pub fn with_config(config: SkillConfig, stories: S, audio: A) -> Self {
        let speech = SpeechService::with_options(config.speech.clone());
        Self {
            config,
            speech,
            stories,
            audio,
        }
    }

    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    /// Handle a request, picking items with the thread-local RNG
    pub fn handle(&self, request: &Request) -> Response {
        self.handle_with_rng(request, &mut rand::thread_rng())
    }

    /// Handle a request. Failures are logged and answered with an apology.
    pub fn handle_with_rng<R: Rng + ?Sized>(&self, request: &Request, rng: &mut R) -> Response {
        match self.dispatch(request, rng) {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "request failed");
                Response::builder()
                    .speak(APOLOGY_TEXT)
                    .reprompt(APOLOGY_TEXT)
                    .build()
            }
        }
    }

    fn dispatch<R: Rng + ?Sized>(&self, request: &Request, rng: &mut R) -> Result<Response> {
        match request {
            Request::Launch => Ok(prompt(LAUNCH_TEXT)),
            Request::SessionEnded => Ok(Response::default()),
            Request::Intent(intent) => self.dispatch_intent(intent, rng),
        }
    }

    fn dispatch_intent<R: Rng + ?Sized>(&self, intent: &IntentRequest, rng: &mut R) -> Result<Response> {
        info!(intent = %intent.name, "handling intent");
        let term = intent.slots.term(KEYWORD_SLOT);

        match intent.name.as_str() {
            intents::HELP => Ok(prompt(HELP_TEXT)),
            intents::ABOUT => Ok(prompt(ABOUT_TEXT)),
            intents::CANCEL | intents::STOP => Ok(Response::builder()
                .speak(GOODBYE_TEXT)
                .end_session(true)
                .build()),
            intents::STORY_ITEM => {
                let speech = tell_story(&self.stories, &self.speech, &self.config, term, rng)?;
                Ok(Response::builder().speak(speech).build())
            }
            intents::AUDIO_ITEM => {
                let speech = play_audio(&self.audio, &self.config, term, rng)?;
                Ok(Response::builder().speak(speech).build())
            }
            other => {
                warn!(intent = other, "no handler for intent");
                Err(SkillError::UnhandledIntent(other.to_string()))
            }
        }
    }
}

/// Speak `text` and repeat it as the reprompt
fn prompt(text: &str) -> Response {
    Response::builder().speak(text).reprompt(text).build()
}
