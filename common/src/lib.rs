//! Kushti Post Common Library
//!
//! CLIと生成クライアントで共有される型・プロンプト・パーサー

pub mod types;
pub mod error;
pub mod keywords;
pub mod prompts;
pub mod parser;

pub use types::{
    FacebookContent, GeneratedContent, InstagramContent, Language, PostingInput,
    WhatsAppContent, YouTubeContent,
};
pub use error::{Error, Result};
pub use keywords::{DEFAULT_FOOTER, DEFAULT_HASHTAGS, KUSHTI_KEYWORDS};
pub use prompts::{build_system_instruction, build_user_prompt, response_schema};
pub use parser::{extract_json_object, parse_generated_content};
