//! Prompt templates for name generation
//!
//! The system prompt fixes the persona and output language; the user prompt
//! carries the person's name and interests plus the exact JSON shape the
//! response parser expects.

const SYSTEM_PROMPT: &str = "You are an expert in Chinese naming and culture, creating names for \
English speakers. All explanations must be in English. Respond only with the exact JSON format \
requested.";

/// Number of names requested per generation
pub const SUGGESTION_COUNT: usize = 3;

/// System message sent with every request
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Build the user prompt for an English name and free-text interests
pub fn build_prompt(english_name: &str, interests: &str) -> String {
    let name = english_name.trim();
    let interests = interests.trim();

    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Create {} elegant and poetic Chinese names for someone named \"{}\" who is interested in {}.\n\n",
        SUGGESTION_COUNT, name, interests
    ));

    prompt.push_str("Key requirements:\n");
    prompt.push_str(&format!(
        "1. Create beautiful phonetic matches to \"{}\" using elegant characters\n",
        name
    ));
    prompt.push_str("   Example: For \"Emily\" -> 艾琳 (Ai Lin) - graceful and similar sound\n");
    prompt.push_str(&format!(
        "2. Create poetic names inspired by their interests in {}\n",
        interests
    ));
    prompt.push_str("   Example: For photography -> 慕影 (Mu Ying) - \"yearning for images\"\n");
    prompt.push_str("3. Focus on aesthetic beauty and artistic meaning\n");
    prompt.push_str("4. Use characters that create a sense of elegance and depth\n\n");

    prompt.push_str("For each name, provide:\n");
    prompt.push_str("- Chinese characters (2-3 characters)\n");
    prompt.push_str("- Pinyin (with tone marks)\n");
    prompt.push_str("- Individual character meanings (poetic interpretation of each character)\n");
    prompt.push_str(
        "- Overall meaning (the artistic connection to their personality and interests)\n",
    );
    prompt.push_str("- Cultural significance (the traditions or imagery the name draws on)\n");
    prompt.push_str("- Personality traits (the elegant qualities this name suggests)\n\n");

    prompt.push_str("Return ONLY a valid JSON object with this exact structure, no other text:\n");
    prompt.push_str(RESPONSE_EXAMPLE);

    prompt
}

const RESPONSE_EXAMPLE: &str = r#"{
  "suggestions": [
    {
      "chineseName": "艾琳",
      "pinyin": "Ài Lín",
      "explanation": {
        "individual": ["艾 - graceful, elegant", "琳 - beautiful jade, tinkling sound"],
        "overall": "A name that captures both the sound of Emily and the elegance of jade",
        "cultural": "Combines beauty and grace in a melodic way",
        "personality": "Elegant, refined, and naturally graceful"
      }
    }
  ]
}"#;

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
