//! Kushti Post
//!
//! 短尺クシュティ動画を YouTube / Facebook / Instagram / WhatsApp へ
//! 手動で投稿するためのチェックリストツール

pub mod cli;
pub mod config;
pub mod copy;
pub mod error;
pub mod generator;
pub mod interactive;
pub mod media;
pub mod platform;
pub mod store;
pub mod wizard;
