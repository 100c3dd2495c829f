//! 投稿文面の生成
//!
//! 1セッションにつき1回、生成サービスへ構造化リクエストを送る。
//! リトライ・キャッシュなし。4プラットフォーム分すべて揃うか、エラーのどちらか。

mod gemini;

pub use gemini::GeminiClient;

use crate::error::GenerationError;
use kushti_post_common::{GeneratedContent, PostingInput};
use std::future::Future;

/// Produces all four platform payloads for one posting input.
pub trait ContentGenerator {
    fn generate(
        &self,
        input: &PostingInput,
    ) -> impl Future<Output = Result<GeneratedContent, GenerationError>>;
}
