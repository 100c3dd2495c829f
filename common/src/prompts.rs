//! プロンプト生成モジュール
//!
//! 生成サービスへ渡す文面とレスポンススキーマ:
//! - build_system_instruction: 役割・動画メタデータ・プラットフォーム別ガイドライン
//! - build_user_prompt: ユーザーターンの依頼文
//! - response_schema: GeneratedContent と同形の構造化出力スキーマ

use crate::types::PostingInput;
use serde_json::{json, Value};

/// Instagram allows at most 30 hashtags per reel.
pub const INSTAGRAM_MAX_HASHTAGS: usize = 30;

/// YouTube Shorts titles are cut off past this length.
pub const YOUTUBE_TITLE_MAX_CHARS: usize = 100;

fn or_na(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => "N/A",
    }
}

/// System instruction for one generation request
///
/// # Arguments
/// * `input` - 投稿入力（キーワード・イベント・場所・日付・言語）
pub fn build_system_instruction(input: &PostingInput) -> String {
    let language = input.language.name();
    let keyword = input.primary_keyword.trim();
    let event = or_na(input.event_name.as_deref());
    let location = or_na(input.location.as_deref());
    let date = or_na(input.date.as_deref());

    format!(
        r#"You are an expert social media manager for Indian Kushti (Wrestling).
Your task is to generate platform-specific content for a video.
Primary Keyword: {keyword}
Event: {event}
Location: {location}
Date: {date}
Target Language: {language}

Guidelines:
- YouTube Shorts: Title < {YOUTUBE_TITLE_MAX_CHARS} chars, SEO Desc, Tags (plain words, NO hashtags).
- Facebook Reels: Caption (engaging, {language}), Hashtags.
- Instagram Reels: Caption (short, emotional, {language}), up to {INSTAGRAM_MAX_HASHTAGS} Hashtags.
- WhatsApp: Status text (very short), Channel text (detailed + hashtags)."#
    )
}

pub fn build_user_prompt(input: &PostingInput) -> String {
    format!(
        "Generate social media content for this Kushti video based on the provided details. \
         Use {} as the primary storytelling language.",
        input.language.name()
    )
}

fn string_list() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// 構造化出力スキーマ（全フィールド必須）
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "youtube": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "tags": string_list()
                },
                "required": ["title", "description", "tags"]
            },
            "facebook": {
                "type": "OBJECT",
                "properties": {
                    "caption": { "type": "STRING" },
                    "hashtags": string_list()
                },
                "required": ["caption", "hashtags"]
            },
            "instagram": {
                "type": "OBJECT",
                "properties": {
                    "caption": { "type": "STRING" },
                    "hashtags": string_list()
                },
                "required": ["caption", "hashtags"]
            },
            "whatsapp": {
                "type": "OBJECT",
                "properties": {
                    "statusText": { "type": "STRING" },
                    "channelText": { "type": "STRING" }
                },
                "required": ["statusText", "channelText"]
            }
        },
        "required": ["youtube", "facebook", "instagram", "whatsapp"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn sample_input() -> PostingInput {
        PostingInput {
            primary_keyword: "Maharashtra Kesari".to_string(),
            location: Some("Kolhapur".to_string()),
            language: Language::Marathi,
            ..Default::default()
        }
    }

    #[test]
    fn test_system_instruction_embeds_metadata() {
        let prompt = build_system_instruction(&sample_input());
        assert!(prompt.contains("Primary Keyword: Maharashtra Kesari"));
        assert!(prompt.contains("Location: Kolhapur"));
        assert!(prompt.contains("Target Language: Marathi"));
        assert!(prompt.contains("up to 30 Hashtags"));
    }

    #[test]
    fn test_missing_fields_render_as_na() {
        let mut input = sample_input();
        input.event_name = Some("   ".to_string());
        let prompt = build_system_instruction(&input);
        assert!(prompt.contains("Event: N/A"));
        assert!(prompt.contains("Date: N/A"));
    }

    #[test]
    fn test_user_prompt_names_language() {
        let mut input = sample_input();
        input.language = Language::Hindi;
        assert!(build_user_prompt(&input).contains("Use Hindi"));
    }

    #[test]
    fn test_schema_requires_every_platform() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["youtube", "facebook", "instagram", "whatsapp"]);
        assert_eq!(schema["properties"]["whatsapp"]["required"][0], "statusText");
        assert_eq!(schema["properties"]["youtube"]["properties"]["tags"]["type"], "ARRAY");
    }
}
