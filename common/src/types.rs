//! 投稿データの型定義
//!
//! CLIと生成クライアントで共有される型:
//! - PostingInput: ユーザーが入力する動画メタデータ
//! - GeneratedContent: 生成サービスが返す4プラットフォーム分の文面

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Target language for generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[default]
    #[serde(rename = "mr")]
    Marathi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Marathi, Language::Hindi, Language::English];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            "mr" | "marathi" => Ok(Language::Marathi),
            _ => Err(format!("Unknown language: {}. Use en, hi, or mr", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 投稿入力（1セッション分）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingInput {
    /// Local video file; never uploaded, only checked and echoed back.
    pub video_file: Option<PathBuf>,
    pub primary_keyword: String,
    pub event_name: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub language: Language,
}

impl PostingInput {
    pub fn has_keyword(&self) -> bool {
        !self.primary_keyword.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeContent {
    pub title: String,
    pub description: String,
    /// Plain words, no leading '#'
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookContent {
    pub caption: String,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstagramContent {
    pub caption: String,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppContent {
    pub status_text: String,
    pub channel_text: String,
}

/// 生成結果。全フィールド必須（欠落はパースエラー）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub youtube: YouTubeContent,
    pub facebook: FacebookContent,
    pub instagram: InstagramContent,
    pub whatsapp: WhatsAppContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("mr".parse::<Language>().unwrap(), Language::Marathi);
        assert_eq!("Hindi".parse::<Language>().unwrap(), Language::Hindi);
        assert_eq!(" ENGLISH ".parse::<Language>().unwrap(), Language::English);
        assert!("tamil".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Marathi).unwrap();
        assert_eq!(json, "\"mr\"");
        let lang: Language = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(lang, Language::Hindi);
    }

    #[test]
    fn test_posting_input_default() {
        let input = PostingInput::default();
        assert_eq!(input.language, Language::Marathi);
        assert!(!input.has_keyword());
        assert!(input.video_file.is_none());
    }

    #[test]
    fn test_whitespace_keyword_is_empty() {
        let input = PostingInput {
            primary_keyword: "   ".to_string(),
            ..Default::default()
        };
        assert!(!input.has_keyword());
    }

    #[test]
    fn test_whatsapp_field_names() {
        let content = WhatsAppContent {
            status_text: "short".to_string(),
            channel_text: "long".to_string(),
        };
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value["statusText"], "short");
        assert_eq!(value["channelText"], "long");
    }
}
