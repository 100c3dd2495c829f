use clap::{Parser, Subcommand};
use kushti_post_common::Language;
use std::path::PathBuf;

use crate::store::Theme;

#[derive(Parser)]
#[command(name = "kushti")]
#[command(about = "Kushti video cross-posting assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding settings and report history
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate copy for a video and walk through posting it
    Post {
        /// Primary keyword (prefills the input screen)
        #[arg(short, long)]
        keyword: Option<String>,

        /// Event name
        #[arg(short, long)]
        event: Option<String>,

        /// Location (e.g. Pune, Kolhapur)
        #[arg(short, long)]
        location: Option<String>,

        /// Event date
        #[arg(short, long)]
        date: Option<String>,

        /// Language (en/hi/mr)
        #[arg(long)]
        language: Option<Language>,

        /// Video file to post
        #[arg(long)]
        video: Option<PathBuf>,
    },

    /// Show or edit saved settings
    Settings {
        /// Show current settings
        #[arg(long)]
        show: bool,

        /// Facebook Page name (use with --page-id)
        #[arg(long, requires = "page_id")]
        set_page: Option<String>,

        /// Facebook Page ID (found in Page About)
        #[arg(long, requires = "set_page")]
        page_id: Option<String>,

        /// Remove the selected Facebook Page
        #[arg(long, conflicts_with = "set_page")]
        clear_page: bool,

        /// Default posting footer
        #[arg(long)]
        footer: Option<String>,

        /// Theme (dark/light)
        #[arg(long)]
        theme: Option<Theme>,

        /// Save a hashtag
        #[arg(long)]
        add_hashtag: Vec<String>,

        /// Remove a saved hashtag
        #[arg(long)]
        remove_hashtag: Vec<String>,
    },

    /// List past posting reports (newest first)
    Reports {
        /// Show at most N reports
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// Generation model
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
