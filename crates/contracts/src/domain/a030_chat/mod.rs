pub mod transcript;

pub use transcript::{
    ChatMessage, ChatRequest, ChatResponse, ChatRole, ChatTranscript, FALLBACK, GREETING,
};
