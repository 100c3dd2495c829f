//! 対話式投稿ウィザード
//!
//! 画面の内容は Wizard の現在ステップだけで決まる。
//! 遷移の可否はすべて Wizard 側で判定し、ここでは結果を表示するだけ。

use crate::copy::{copy_blocks, guide};
use crate::error::{KushtiError, Result, ValidationError};
use crate::generator::ContentGenerator;
use crate::media::check_video_file;
use crate::platform::{Platform, PostingStatus, UrlOpener};
use crate::store::{AppSettings, KeyValueStore, PostingReport, ReportStore, SettingsStore, Theme};
use crate::wizard::{Step, Wizard};
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use kushti_post_common::{Language, PostingInput, KUSHTI_KEYWORDS};
use std::path::PathBuf;
use std::time::Duration;

const CUSTOM_KEYWORD: &str = "Custom...";

/// 画面ごとの操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// 生成開始
    Generate,
    /// 入力を編集
    EditInput,
    /// 投稿先を開く
    OpenPlatform(Platform),
    /// 投稿済みチェックを切り替え
    TogglePosted(Platform),
    /// 次のプラットフォームへ
    Next,
    /// レポート作成
    Finalize,
    /// 新しい投稿を開始
    StartNew,
    /// 設定を開く
    OpenSettings,
    Quit,
}

/// 設定画面の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    SetPage,
    RemovePage,
    EditFooter,
    ToggleTheme,
    AddHashtag,
    RemoveHashtag,
    Close,
}

fn next_label(step: Step) -> &'static str {
    match step {
        Step::YouTube => "Next: Facebook Reels →",
        Step::Facebook => "Next: Instagram →",
        Step::Instagram => "Next: WhatsApp →",
        _ => "Next →",
    }
}

/// 各ステップで選べる操作（表示ラベル付き）
pub fn screen_actions(step: Step, status: PostingStatus) -> Vec<(String, ScreenAction)> {
    match step {
        Step::Input => vec![
            ("Generate Content 🚀".to_string(), ScreenAction::Generate),
            ("Edit details".to_string(), ScreenAction::EditInput),
            ("Settings ⚙".to_string(), ScreenAction::OpenSettings),
            ("Quit".to_string(), ScreenAction::Quit),
        ],
        Step::YouTube | Step::Facebook | Step::Instagram | Step::WhatsApp => {
            let Some(platform) = step.platform() else {
                return Vec::new();
            };
            let check = if status.get(platform) { "[x]" } else { "[ ]" };
            let forward = if step == Step::WhatsApp {
                ("Finish & Report 🏁".to_string(), ScreenAction::Finalize)
            } else {
                (next_label(step).to_string(), ScreenAction::Next)
            };
            vec![
                (format!("Open {}", platform), ScreenAction::OpenPlatform(platform)),
                (
                    format!("{} I have published on {}", check, platform),
                    ScreenAction::TogglePosted(platform),
                ),
                forward,
                ("Settings ⚙".to_string(), ScreenAction::OpenSettings),
                ("Quit".to_string(), ScreenAction::Quit),
            ]
        }
        Step::Report => vec![
            ("Start New Post".to_string(), ScreenAction::StartNew),
            ("Quit".to_string(), ScreenAction::Quit),
        ],
        Step::Generating | Step::Settings => Vec::new(),
    }
}

pub fn settings_actions(settings: &AppSettings) -> Vec<(String, SettingsAction)> {
    let mut actions = Vec::new();
    if settings.facebook_page().is_some() {
        actions.push(("Remove Facebook Page".to_string(), SettingsAction::RemovePage));
    } else {
        actions.push(("Add Facebook Page".to_string(), SettingsAction::SetPage));
    }
    actions.push(("Edit default footer".to_string(), SettingsAction::EditFooter));
    let other = match settings.theme {
        Theme::Dark => Theme::Light,
        Theme::Light => Theme::Dark,
    };
    actions.push((format!("Switch theme to {}", other), SettingsAction::ToggleTheme));
    actions.push(("Add hashtag".to_string(), SettingsAction::AddHashtag));
    if !settings.saved_hashtags.is_empty() {
        actions.push(("Remove hashtag".to_string(), SettingsAction::RemoveHashtag));
    }
    actions.push(("Close".to_string(), SettingsAction::Close));
    actions
}

/// 空文字は None
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn select<T: Copy>(prompt: &str, items: &[(String, T)]) -> Result<T> {
    let labels: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(items[index].1)
}

fn text(prompt: &str, initial: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    Ok(input.interact_text()?)
}

/// 対話式で投稿ウィザードを実行
pub async fn run_wizard<G: ContentGenerator>(
    mut wizard: Wizard,
    kv: &dyn KeyValueStore,
    generator: &G,
    opener: &dyn UrlOpener,
) -> Result<()> {
    let settings_store = SettingsStore::new(kv);
    let reports = ReportStore::new(kv);
    let mut settings = settings_store.load()?;
    let mut last_report: Option<PostingReport> = None;

    println!("🤼 Kushti Assistant\n");

    loop {
        match wizard.step() {
            Step::Input => {
                if !wizard.input().has_keyword() {
                    edit_input(wizard.input_mut())?;
                }
                print_input_summary(wizard.input());

                match select("What next?", &screen_actions(Step::Input, wizard.status()))? {
                    ScreenAction::Generate => {
                        if let Err(e) = wizard.begin_generation() {
                            println!("⚠ {}\n", e);
                        }
                    }
                    ScreenAction::EditInput => edit_input(wizard.input_mut())?,
                    ScreenAction::OpenSettings => wizard.open_settings(),
                    _ => return Ok(()),
                }
            }

            Step::Generating => {
                let spinner =
                    spinner("Sharpening the wrestling techniques... (Generating AI Content)");
                let outcome = generator.generate(wizard.input()).await;
                spinner.finish_and_clear();

                match wizard.complete_generation(outcome) {
                    Ok(()) => println!("✔ Content generated\n"),
                    Err(KushtiError::Generation(e)) => {
                        println!("✖ Failed to generate content. Check API Key or Internet.");
                        println!("  {}\n", e);
                    }
                    Err(e) => return Err(e),
                }
            }

            step @ (Step::YouTube | Step::Facebook | Step::Instagram | Step::WhatsApp) => {
                print_platform_screen(&wizard, step, &settings);

                match select("Action", &screen_actions(step, wizard.status()))? {
                    ScreenAction::OpenPlatform(platform) => {
                        match wizard.open_platform(platform, &settings, opener) {
                            Some(url) => println!("↗ {}\n", url),
                            None => println!("⚠ {}\n", ValidationError::MissingFacebookPage),
                        }
                    }
                    ScreenAction::TogglePosted(platform) => {
                        wizard.toggle_posted(platform);
                    }
                    ScreenAction::Next => match wizard.advance(&settings) {
                        Ok(_) => {}
                        Err(KushtiError::Validation(e)) => println!("⚠ {}\n", e),
                        Err(e) => return Err(e),
                    },
                    ScreenAction::Finalize => match wizard.finalize(&settings, &reports) {
                        Ok(report) => last_report = Some(report),
                        // 保存失敗時は WHATSAPP のまま
                        Err(e) => println!("✖ Could not save the report: {}\n", e),
                    },
                    ScreenAction::OpenSettings => wizard.open_settings(),
                    _ => return Ok(()),
                }
            }

            Step::Report => {
                if let Some(report) = &last_report {
                    print_report_screen(report, &settings);
                }

                match select("Done", &screen_actions(Step::Report, wizard.status()))? {
                    ScreenAction::StartNew => {
                        last_report = None;
                        wizard.reset();
                    }
                    _ => return Ok(()),
                }
            }

            Step::Settings => {
                settings_screen(&settings_store, &mut settings)?;
                wizard.close_settings();
            }
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// 入力画面（キーワード・場所・イベント・日付・言語・動画）
fn edit_input(input: &mut PostingInput) -> Result<()> {
    println!("📝 New Post Details\n");

    // キーワード
    let mut items: Vec<&str> = KUSHTI_KEYWORDS.to_vec();
    items.push(CUSTOM_KEYWORD);
    let current = input.primary_keyword.trim().to_string();
    let default = KUSHTI_KEYWORDS
        .iter()
        .position(|k| *k == current)
        .unwrap_or(if current.is_empty() { 0 } else { items.len() - 1 });
    let index = Select::new()
        .with_prompt("Primary Keyword (Kushti Related)")
        .items(&items)
        .default(default)
        .interact()?;
    input.primary_keyword = if items[index] == CUSTOM_KEYWORD {
        let initial = (!current.is_empty() && !KUSHTI_KEYWORDS.contains(&current.as_str()))
            .then_some(current.as_str());
        text("Enter custom keyword", initial)?.trim().to_string()
    } else {
        items[index].to_string()
    };

    input.location = optional_text(&text(
        "Location (e.g. Pune, Kolhapur)",
        input.location.as_deref(),
    )?);
    input.event_name = optional_text(&text("Event", input.event_name.as_deref())?);
    input.date = optional_text(&text("Date", input.date.as_deref())?);

    // 言語
    let languages: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
    let default = Language::ALL.iter().position(|l| *l == input.language).unwrap_or(0);
    let index = Select::new()
        .with_prompt("Language")
        .items(&languages)
        .default(default)
        .interact()?;
    input.language = Language::ALL[index];

    // 動画（任意）
    loop {
        let current = input.video_file.as_ref().map(|p| p.display().to_string());
        let path = text("Video File (optional)", current.as_deref())?;
        let Some(path) = optional_text(&path) else {
            input.video_file = None;
            break;
        };
        match check_video_file(&PathBuf::from(path)) {
            Ok(video) => {
                input.video_file = Some(video);
                break;
            }
            Err(e) => println!("⚠ {}", e),
        }
    }

    println!();
    Ok(())
}

fn print_input_summary(input: &PostingInput) {
    let keyword = if input.has_keyword() {
        input.primary_keyword.as_str()
    } else {
        "(not set)"
    };
    println!("  Keyword:  {}", keyword);
    println!("  Event:    {}", input.event_name.as_deref().unwrap_or("-"));
    println!("  Location: {}", input.location.as_deref().unwrap_or("-"));
    println!("  Date:     {}", input.date.as_deref().unwrap_or("-"));
    println!("  Language: {}", input.language);
    if let Some(video) = &input.video_file {
        println!("  Video:    {}", video.display());
    }
    println!();
}

fn print_platform_screen(wizard: &Wizard, step: Step, settings: &AppSettings) {
    let (Some(platform), Some(content)) = (step.platform(), wizard.generated()) else {
        return;
    };
    let number = Platform::ALL.iter().position(|p| *p == platform).unwrap_or(0) + 1;

    match (platform, settings.facebook_page()) {
        (Platform::Facebook, Some(page)) => {
            println!("━━ Step {}: {} ({}) ━━", number, platform, page.name)
        }
        _ => println!("━━ Step {}: {} ━━", number, platform),
    }
    println!("💡 Guide: {}\n", guide(platform));

    for block in copy_blocks(platform, content, settings) {
        println!("── {} ──", block.label);
        println!("{}\n", block.value);
    }
}

fn print_report_screen(report: &PostingReport, settings: &AppSettings) {
    println!("━━ Posting Summary ✔ ━━");
    for platform in Platform::ALL {
        let mark = if report.status.get(platform) { "✔" } else { "…" };
        match (platform, settings.facebook_page()) {
            (Platform::Facebook, Some(page)) => println!("  {} Facebook ({})", mark, page.name),
            _ => println!("  {} {}", mark, platform),
        }
    }

    println!("\n  Date:        {}", report.date);
    println!("  Video Title: {}", report.title);
    println!("  Keyword:     {}", report.keyword);
    println!("  Posted:      {}/{}", report.status.posted_count(), Platform::ALL.len());
    println!("\n── Report Text ──\n{}\n", report.summary_text());
}

fn print_settings(settings: &AppSettings) {
    println!("━━ Settings ━━");
    match settings.facebook_page() {
        Some(page) => println!("  Facebook Page: {} (ID: {})", page.name, page.id),
        None => println!("  Facebook Page: (none)"),
    }
    println!("  Theme:         {}", settings.theme);
    println!("  Hashtags:      {}", settings.saved_hashtags.join(" "));
    println!("  Footer:\n{}\n", settings.default_footer);
}

/// 保存エラーは表示だけして画面に戻る
fn saved<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "settings not saved");
            println!("✖ Could not save settings: {}\n", e);
            None
        }
    }
}

/// 設定画面。変更のたびに保存する
fn settings_screen(store: &SettingsStore<'_>, settings: &mut AppSettings) -> Result<()> {
    loop {
        print_settings(settings);

        match select("Settings", &settings_actions(settings))? {
            SettingsAction::SetPage => {
                let name = text("Facebook Page Name", None)?;
                let id = text("Facebook Page ID (found in Page About)", None)?;
                match saved(store.update(settings, |s| s.set_facebook_page(&name, &id))) {
                    Some(Ok(())) => println!("✔ Page saved\n"),
                    Some(Err(e)) => println!("⚠ {}\n", e),
                    None => {}
                }
            }
            SettingsAction::RemovePage => {
                let confirmed = Confirm::new()
                    .with_prompt("Remove the selected Facebook Page?")
                    .default(false)
                    .interact()?;
                if confirmed {
                    saved(store.update(settings, |s| s.clear_facebook_page()));
                }
            }
            SettingsAction::EditFooter => {
                let footer = text("Default Posting Footer", Some(&settings.default_footer))?;
                saved(store.update(settings, |s| s.set_footer(&footer)));
            }
            SettingsAction::ToggleTheme => {
                let next = match settings.theme {
                    Theme::Dark => Theme::Light,
                    Theme::Light => Theme::Dark,
                };
                saved(store.update(settings, |s| s.set_theme(next)));
            }
            SettingsAction::AddHashtag => {
                let tag = text("Hashtag", None)?;
                if saved(store.update(settings, |s| s.add_hashtag(&tag))) == Some(false) {
                    println!("⚠ Empty or already saved\n");
                }
            }
            SettingsAction::RemoveHashtag => {
                let tags: Vec<(String, usize)> = settings
                    .saved_hashtags
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(i, t)| (t, i))
                    .collect();
                let index = select("Remove which hashtag?", &tags)?;
                let tag = settings.saved_hashtags[index].clone();
                if saved(store.update(settings, |s| s.remove_hashtag(&tag))) == Some(false) {
                    println!("⚠ {} was not removed\n", tag);
                }
            }
            SettingsAction::Close => return Ok(()),
        }
    }
}
