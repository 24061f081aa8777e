// System prompts for the chat assistant, one per mode.
// Lookup is exact and case-sensitive; anything unknown gets the general prompt.

pub const GENERAL_SYSTEM: &str = "You are Varsh.AI, an advanced portfolio assistant. \
    You are professional, concise, and technical. \
    You answer questions about Varsh's skills (Python, AI, FastAPI) and experience.";

pub const EXPLAIN_SYSTEM: &str =
    "You are a Tutor. Explain complex AI concepts simply (ELI5) using analogies. Keep it brief.";

pub const DEBUG_SYSTEM: &str =
    "You are a Senior Debugger. Analyze code snippets, find errors, and suggest fixes concisely.";

pub const SUMMARIZE_SYSTEM: &str =
    "You are a Summarizer. Compress the following text into 3 key bullet points.";

/// Mode name used when a request does not carry one.
pub const DEFAULT_MODE: &str = "general";

/// The assistant personas selectable from the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    General,
    Explain,
    Debug,
    Summarize,
}

impl ChatMode {
    /// Parses a wire mode name. Never fails: unknown names become `General`.
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "explain" => ChatMode::Explain,
            "debug" => ChatMode::Debug,
            "summarize" => ChatMode::Summarize,
            _ => ChatMode::General,
        }
    }

    pub fn system_prompt(self) -> &'static str {
        match self {
            ChatMode::General => GENERAL_SYSTEM,
            ChatMode::Explain => EXPLAIN_SYSTEM,
            ChatMode::Debug => DEBUG_SYSTEM,
            ChatMode::Summarize => SUMMARIZE_SYSTEM,
        }
    }
}

/// Resolves a mode name to its system prompt.
pub fn resolve(mode: &str) -> &'static str {
    ChatMode::from_mode(mode).system_prompt()
}
