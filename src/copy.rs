//! 各プラットフォーム画面のコピー用テキスト
//!
//! 生成結果そのものは変更しない。表示時にフッターと保存ハッシュタグを合成する。

use crate::platform::Platform;
use crate::store::AppSettings;
use kushti_post_common::prompts::INSTAGRAM_MAX_HASHTAGS;
use kushti_post_common::GeneratedContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyBlock {
    pub label: &'static str,
    pub value: String,
}

impl CopyBlock {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// 画面上部に出す手順メモ
pub fn guide(platform: Platform) -> &'static str {
    match platform {
        Platform::YouTube => {
            "1. Open Studio. 2. Upload Video. 3. Paste Title/Desc. 4. Open \"Tags\" & paste the plain text tags."
        }
        Platform::Facebook => {
            "1. Open the Page's Reels. 2. Upload Video. 3. Paste Caption + Hashtags."
        }
        Platform::Instagram => {
            "1. Create a Reel. 2. Upload Video. 3. Paste Caption, then Hashtags."
        }
        Platform::WhatsApp => {
            "1. Post the short text to Status. 2. Post the detailed text to your Channel."
        }
    }
}

fn with_footer(text: &str, footer: &str) -> String {
    let footer = footer.trim();
    if footer.is_empty() || text.contains(footer) {
        text.to_string()
    } else {
        format!("{}\n\n{}", text.trim_end(), footer)
    }
}

/// 生成タグの後ろに保存タグを重複なしで追加
///
/// `limit` は保存タグの追加だけを止める。生成タグは削らない
pub fn merge_hashtags(generated: &[String], saved: &[String], limit: Option<usize>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(generated.len() + saved.len());
    for tag in generated {
        push_unique(&mut merged, tag);
    }
    for tag in saved {
        if limit.is_some_and(|limit| merged.len() >= limit) {
            break;
        }
        push_unique(&mut merged, tag);
    }
    merged
}

fn push_unique(merged: &mut Vec<String>, tag: &str) {
    let tag = tag.trim();
    if tag.is_empty() || merged.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
        return;
    }
    merged.push(tag.to_string());
}

pub fn copy_blocks(
    platform: Platform,
    content: &GeneratedContent,
    settings: &AppSettings,
) -> Vec<CopyBlock> {
    let footer = settings.default_footer.as_str();
    let saved = settings.saved_hashtags.as_slice();

    match platform {
        Platform::YouTube => vec![
            CopyBlock::new("SEO Title", content.youtube.title.clone()),
            CopyBlock::new("Description", content.youtube.description.clone()),
            CopyBlock::new("Plain Tags (No Hash)", content.youtube.tags.join(", ")),
        ],
        Platform::Facebook => vec![
            CopyBlock::new("Caption", with_footer(&content.facebook.caption, footer)),
            CopyBlock::new(
                "Hashtags",
                merge_hashtags(&content.facebook.hashtags, saved, None).join(" "),
            ),
        ],
        Platform::Instagram => vec![
            CopyBlock::new("Reel Caption", with_footer(&content.instagram.caption, footer)),
            CopyBlock::new(
                "Hashtags (SEO Optimized)",
                merge_hashtags(&content.instagram.hashtags, saved, Some(INSTAGRAM_MAX_HASHTAGS))
                    .join(" "),
            ),
        ],
        Platform::WhatsApp => vec![
            CopyBlock::new("Status Text (Short)", content.whatsapp.status_text.clone()),
            CopyBlock::new(
                "Channel Post (Detailed)",
                with_footer(&content.whatsapp.channel_text, footer),
            ),
        ],
    }
}
