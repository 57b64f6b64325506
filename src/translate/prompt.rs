use super::interface::TranslateRequest;

pub const TONE_PLACEHOLDER: &str = "{TONE}";

pub const SYSTEM_PROMPT_TEMPLATE: &str = "\
You are a professional translator specialized in EN, JA, and zh-Hant (Traditional Chinese).
- Preserve emojis, line breaks, and playful formatting.
- Adapt tone to {TONE}: (Cute = kawaii, fluffy; Flirty = teasing, light spice; Sassy = playful attitude; Polite = soft and respectful).
- Keep messages short, natural, and chat-ready for DMs.
- If the source includes slang or teasing, mirror that energy appropriately in the target language.
- Never add content that changes meaning; do not remove emojis.
- When translating into Japanese: keep casual feminine kawaii speech if tone is Cute/Flirty.
- When translating into Traditional Chinese: keep chatty, sweet style used in Taiwan/HK; avoid Simplified forms.
- Return only the translated text.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn build_system_prompt(tone: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE.replacen(TONE_PLACEHOLDER, tone, 1)
}

/// The source text goes in verbatim after the `SOURCE:` marker.
pub fn build_user_prompt(from: &str, to: &str, text: &str) -> String {
    format!(
        "Translate the following from {} to {} in the requested tone.\n\nSOURCE:\n{}",
        from, to, text
    )
}

impl PromptPair {
    pub fn from_request(request: &TranslateRequest) -> Self {
        Self {
            system: build_system_prompt(&request.tone),
            user: build_user_prompt(request.direction.from, request.direction.to, &request.text),
        }
    }
}
