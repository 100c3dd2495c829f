//! APIレスポンスパーサー
//!
//! 生成サービスのテキスト出力からJSONオブジェクトを抽出し、
//! GeneratedContent にパースする

use crate::error::{Error, Result};
use crate::types::GeneratedContent;

/// APIレスポンスからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Examples
/// ```
/// use kushti_post_common::extract_json_object;
///
/// let response = "{\"key\": \"value\"}";
/// let json = extract_json_object(response).unwrap();
/// assert!(json.contains("key"));
/// ```
pub fn extract_json_object(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::NoJsonObject)
}

/// 生成レスポンスをパース
///
/// 正規化は行わない。フィールド欠落・型不一致はすべてエラー
pub fn parse_generated_content(response: &str) -> Result<GeneratedContent> {
    let json_str = extract_json_object(response)?;
    Ok(serde_json::from_str(json_str.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r##"{
  "youtube": {"title": "Kesari Final", "description": "Bout of the year", "tags": ["kushti", "kesari"]},
  "facebook": {"caption": "Jabardast!", "hashtags": ["#Kushti"]},
  "instagram": {"caption": "Mitti cha khel", "hashtags": ["#Kushti", "#Pehelwan"]},
  "whatsapp": {"statusText": "Watch now", "channelText": "Full bout from Kolhapur #Kushti"}
}"##;

    // =============================================
    // extract_json_object テスト
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = format!("Here you go:\n```json\n{}\n```\nEnjoy.", FULL);
        let json = extract_json_object(&response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn test_extract_json_with_surrounding_text() {
        let response = r#"Result: {"a": {"b": 1}} done"#;
        assert_eq!(extract_json_object(response).unwrap(), r#"{"a": {"b": 1}}"#);
    }

    #[test]
    fn test_extract_json_error() {
        let result = extract_json_object("No JSON here, just plain text.");
        assert!(matches!(result, Err(Error::NoJsonObject)));
    }

    // =============================================
    // parse_generated_content テスト
    // =============================================

    #[test]
    fn test_parse_full_response() {
        let content = parse_generated_content(FULL).unwrap();
        assert_eq!(content.youtube.title, "Kesari Final");
        assert_eq!(content.youtube.tags, vec!["kushti", "kesari"]);
        assert_eq!(content.instagram.hashtags.len(), 2);
        assert_eq!(content.whatsapp.status_text, "Watch now");
    }

    #[test]
    fn test_parse_missing_nested_field_fails() {
        let response = FULL.replace(r#""statusText": "Watch now", "#, "");
        let result = parse_generated_content(&response);
        match result {
            Err(Error::Schema(e)) => assert!(e.to_string().contains("statusText")),
            other => panic!("Expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_platform_fails() {
        let response = r#"{"youtube": {"title": "t", "description": "d", "tags": []}}"#;
        assert!(parse_generated_content(response).is_err());
    }

    #[test]
    fn test_parse_wrong_type_fails() {
        let response = FULL.replace(r#"["kushti", "kesari"]"#, r#""kushti, kesari""#);
        assert!(parse_generated_content(&response).is_err());
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let response = FULL.replacen('{', r#"{"model": "x", "#, 1);
        assert!(parse_generated_content(&response).is_ok());
    }
}
