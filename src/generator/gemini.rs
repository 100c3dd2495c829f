//! Gemini API連携
//!
//! systemInstruction にメタデータとガイドライン、generationConfig に
//! responseSchema を載せて1回だけ呼び出す。

use super::ContentGenerator;
use crate::config::Config;
use crate::error::{GenerationError, Result};
use kushti_post_common::{
    build_system_instruction, build_user_prompt, parse_generated_content, response_schema,
    GeneratedContent, PostingInput,
};
use serde::{Deserialize, Serialize};

/// Gemini APIリクエスト
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

fn build_request(input: &PostingInput) -> GeminiRequest {
    GeminiRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: build_system_instruction(input),
            }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part {
                text: build_user_prompt(input),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    }
}

/// レスポンス本文から生成結果を取り出す
fn parse_response_body(body: &str) -> std::result::Result<GeneratedContent, GenerationError> {
    let response: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(format!("response envelope: {}", e)))?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.as_str())
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| GenerationError::MalformedResponse("empty response".into()))?;

    parse_generated_content(text).map_err(|e| GenerationError::MalformedResponse(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    /// 設定（と環境変数）から作成。APIキー未設定はエラー
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Ok(Self::new(api_key, config.model.clone(), config.api_base_url.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl ContentGenerator for GeminiClient {
    async fn generate(
        &self,
        input: &PostingInput,
    ) -> std::result::Result<GeneratedContent, GenerationError> {
        let request = build_request(input);
        tracing::info!(
            model = %self.model,
            keyword = %input.primary_keyword,
            language = %input.language,
            "requesting generated content"
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "generation response");

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kushti_post_common::Language;

    fn sample_input() -> PostingInput {
        PostingInput {
            primary_keyword: "Maharashtra Kesari".to_string(),
            location: Some("Kolhapur".to_string()),
            language: Language::Marathi,
            ..Default::default()
        }
    }

    #[test]
    fn test_request_shape() {
        let value = serde_json::to_value(build_request(&sample_input())).unwrap();

        let system = value["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
        assert!(system.contains("Maharashtra Kesari"));
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("k", "gemini-test", "http://localhost:1234/v1beta/");
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_parse_response_without_candidates() {
        let err = parse_response_body(r#"{"candidates": []}"#).unwrap_err();
        assert_eq!(err, GenerationError::MalformedResponse("empty response".into()));
    }

    #[test]
    fn test_parse_response_not_json() {
        let err = parse_response_body("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }
}
