//! Spoken responses.

/// Response returned to the platform adapter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Speech markup to speak
    pub speech: Option<String>,
    /// Speech markup spoken if the user stays silent
    pub reprompt: Option<String>,
    /// Whether the session should end after this response
    pub should_end_session: Option<bool>,
}

impl Response {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn speak(mut self, speech: impl Into<String>) -> Self {
        self.response.speech = Some(speech.into());
        self
    }

    pub fn reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.response.reprompt = Some(reprompt.into());
        self
    }

    pub fn end_session(mut self, end: bool) -> Self {
        self.response.should_end_session = Some(end);
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}
