use contracts::domain::a030_chat::ChatTranscript;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatWidgetVm {
    pub is_open: RwSignal<bool>,
    pub transcript: RwSignal<ChatTranscript>,
    pub input: RwSignal<String>,
}

impl ChatWidgetVm {
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
            transcript: RwSignal::new(ChatTranscript::new()),
            input: RwSignal::new(String::new()),
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.transcript.with(ChatTranscript::is_waiting)
    }
}

impl Default for ChatWidgetVm {
    fn default() -> Self {
        Self::new()
    }
}
