//! Fixed response texts.

pub const LAUNCH_TEXT: &str = "Welcome, you can search for a story about something, or listen to an item about something, or just ask to listen to a story, or listen to an item for a wider selection.";

pub const HELP_TEXT: &str = r#"The full set of requests I understand are "listen to an item about {keyword}", "listen to an item", "play an item about {keyword}", "play an item", "search items for {keyword}", "listen to a story about {keyword}", "listen to a story", "tell me a story about {keyword}", "tell me a story", or "search stories for {keyword}"."#;

pub const ABOUT_TEXT: &str = "Ocean-Archive.org is an archive of ocean pictures, movies, audio and stories developed by the TBA21 Academy in collaboration with Across the Cloud.";

pub const GOODBYE_TEXT: &str = "Goodbye!";

pub const APOLOGY_TEXT: &str = "Sorry, I had trouble doing what you asked. Please try again.";

pub const NO_MATCH_TEXT: &str = "Sorry, no matching items found.";
