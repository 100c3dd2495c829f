//! エラー型定義

use thiserror::Error;

/// 生成レスポンスの解釈エラー
#[derive(Error, Debug)]
pub enum Error {
    #[error("No JSON object in response")]
    NoJsonObject,

    #[error("Generated content does not match schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
