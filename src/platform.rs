//! 投稿先プラットフォームと投稿状況

use crate::store::AppSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    YouTube,
    Facebook,
    Instagram,
    WhatsApp,
}

impl Platform {
    /// 投稿順
    pub const ALL: [Platform; 4] = [
        Platform::YouTube,
        Platform::Facebook,
        Platform::Instagram,
        Platform::WhatsApp,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube Shorts",
            Platform::Facebook => "Facebook Reels",
            Platform::Instagram => "Instagram Reels",
            Platform::WhatsApp => "WhatsApp",
        }
    }

    /// Web entry point. Facebook needs a selected page.
    pub fn entry_url(&self, settings: &AppSettings) -> Option<String> {
        match self {
            Platform::YouTube => Some("https://studio.youtube.com".to_string()),
            Platform::Facebook => settings
                .facebook_page()
                .map(|page| format!("https://www.facebook.com/{}/reels_hub", page.id)),
            Platform::Instagram => Some("https://www.instagram.com/reels/create/".to_string()),
            Platform::WhatsApp => Some("https://web.whatsapp.com".to_string()),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// 手動投稿の完了フラグ（ユーザーの確認でのみ変化）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingStatus {
    pub youtube: bool,
    pub facebook: bool,
    pub instagram: bool,
    pub whatsapp: bool,
}

impl PostingStatus {
    pub fn get(&self, platform: Platform) -> bool {
        match platform {
            Platform::YouTube => self.youtube,
            Platform::Facebook => self.facebook,
            Platform::Instagram => self.instagram,
            Platform::WhatsApp => self.whatsapp,
        }
    }

    pub fn set(&mut self, platform: Platform, posted: bool) {
        let flag = match platform {
            Platform::YouTube => &mut self.youtube,
            Platform::Facebook => &mut self.facebook,
            Platform::Instagram => &mut self.instagram,
            Platform::WhatsApp => &mut self.whatsapp,
        };
        *flag = posted;
    }

    pub fn posted_count(&self) -> usize {
        Platform::ALL.iter().filter(|p| self.get(**p)).count()
    }
}

/// Opens a URL in a new browsing context. Result is never observed.
pub trait UrlOpener {
    fn open_url(&self, url: &str);
}

impl<F: Fn(&str)> UrlOpener for F {
    fn open_url(&self, url: &str) {
        self(url)
    }
}

/// System browser via the `open` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
    fn open_url(&self, url: &str) {
        if let Err(e) = open::that(url) {
            tracing::warn!(url, error = %e, "could not open browser");
        }
    }
}
