//! アプリ設定（Facebookページ・フッター・テーマ・保存ハッシュタグ）

use super::KeyValueStore;
use crate::error::{Result, ValidationError};
use kushti_post_common::{DEFAULT_FOOTER, DEFAULT_HASHTAGS};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const SETTINGS_KEY: &str = "kushti_post_settings";

lazy_static! {
    // 数値IDまたはページのユーザー名
    static ref PAGE_ID_RE: Regex = Regex::new(r"^[A-Za-z0-9._-]+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookPage {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!("Unknown theme: {}. Use dark or light", s)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(rename = "selectedFBPage")]
    pub selected_fb_page: Option<FacebookPage>,
    pub default_footer: String,
    pub theme: Theme,
    pub saved_hashtags: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            selected_fb_page: None,
            default_footer: DEFAULT_FOOTER.to_string(),
            theme: Theme::Dark,
            saved_hashtags: DEFAULT_HASHTAGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// "kushti", "#Kushti", " ##Kushti " → "#Kushti". Empty → None.
pub fn normalize_hashtag(tag: &str) -> Option<String> {
    let body: String = tag
        .trim()
        .trim_start_matches('#')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if body.is_empty() {
        None
    } else {
        Some(format!("#{}", body))
    }
}

impl AppSettings {
    pub fn facebook_page(&self) -> Option<&FacebookPage> {
        self.selected_fb_page.as_ref()
    }

    pub fn set_facebook_page(
        &mut self,
        name: &str,
        id: &str,
    ) -> std::result::Result<(), ValidationError> {
        let name = name.trim();
        let id = id.trim();
        if name.is_empty() || id.is_empty() {
            return Err(ValidationError::InvalidFacebookPage(
                "page name and page ID are both required".into(),
            ));
        }
        if !PAGE_ID_RE.is_match(id) {
            return Err(ValidationError::InvalidFacebookPage(format!(
                "'{}' is not a page ID or username",
                id
            )));
        }
        self.selected_fb_page = Some(FacebookPage {
            id: id.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }

    pub fn clear_facebook_page(&mut self) {
        self.selected_fb_page = None;
    }

    pub fn set_footer(&mut self, footer: &str) {
        self.default_footer = footer.to_string();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Returns false when the tag is empty or already saved (case-insensitive).
    pub fn add_hashtag(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_hashtag(tag) else {
            return false;
        };
        if self.saved_hashtags.iter().any(|t| same_hashtag(t, &tag)) {
            return false;
        }
        self.saved_hashtags.push(tag);
        true
    }

    /// 保存済みの表記（正規化前でも）と一致するタグを削除
    pub fn remove_hashtag(&mut self, tag: &str) -> bool {
        let target = normalize_hashtag(tag);
        let before = self.saved_hashtags.len();
        self.saved_hashtags.retain(|saved| {
            if saved == tag {
                return false;
            }
            match &target {
                Some(target) => !same_hashtag(saved, target),
                None => true,
            }
        });
        self.saved_hashtags.len() != before
    }
}

/// `normalized` は normalize_hashtag 済み
fn same_hashtag(saved: &str, normalized: &str) -> bool {
    normalize_hashtag(saved).is_some_and(|saved| saved.eq_ignore_ascii_case(normalized))
}

/// `settings` レコードの読み書き
pub struct SettingsStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> SettingsStore<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    /// 未保存ならデフォルト設定を返す
    pub fn load(&self) -> Result<AppSettings> {
        match self.kv.get(SETTINGS_KEY)? {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(AppSettings::default()),
        }
    }

    /// レコード全体を上書き
    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        let data = serde_json::to_string(settings)?;
        self.kv.set(SETTINGS_KEY, &data)?;
        let page = settings.facebook_page().map(|p| p.name.as_str());
        tracing::debug!(?page, "settings saved");
        Ok(())
    }

    /// 変更して即保存（ライトスルー）
    ///
    /// 保存に失敗したら `settings` は変更前のまま
    pub fn update<T>(
        &self,
        settings: &mut AppSettings,
        change: impl FnOnce(&mut AppSettings) -> T,
    ) -> Result<T> {
        let mut next = settings.clone();
        let out = change(&mut next);
        self.save(&next)?;
        *settings = next;
        Ok(out)
    }
}
