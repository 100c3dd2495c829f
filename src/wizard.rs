//! 投稿ウィザード（状態遷移とセッション状態）
//!
//! INPUT → GENERATING → YOUTUBE → FACEBOOK → INSTAGRAM → WHATSAPP → REPORT → (reset) → INPUT
//!
//! SETTINGS はどこからでも開けて、閉じると INPUT に戻る。
//! セッション状態（入力・生成結果・投稿状況）はこの構造体だけが持つ。

use crate::error::{GenerationError, Result, ValidationError};
use crate::generator::ContentGenerator;
use crate::platform::{Platform, PostingStatus, UrlOpener};
use crate::store::{AppSettings, PostingReport, ReportStore};
use kushti_post_common::{GeneratedContent, PostingInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    Input,
    Generating,
    YouTube,
    Facebook,
    Instagram,
    WhatsApp,
    Report,
    Settings,
}

impl Step {
    /// The platform whose copy this step shows, if any.
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Step::YouTube => Some(Platform::YouTube),
            Step::Facebook => Some(Platform::Facebook),
            Step::Instagram => Some(Platform::Instagram),
            Step::WhatsApp => Some(Platform::WhatsApp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Input => "input",
            Step::Generating => "generating",
            Step::YouTube => "youtube",
            Step::Facebook => "facebook",
            Step::Instagram => "instagram",
            Step::WhatsApp => "whatsapp",
            Step::Report => "report",
            Step::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    input: PostingInput,
    generated: Option<GeneratedContent>,
    status: PostingStatus,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session with a prefilled input (e.g. from command-line flags).
    pub fn with_input(input: PostingInput) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn input(&self) -> &PostingInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut PostingInput {
        &mut self.input
    }

    pub fn generated(&self) -> Option<&GeneratedContent> {
        self.generated.as_ref()
    }

    pub fn status(&self) -> PostingStatus {
        self.status
    }

    fn transition(&mut self, to: Step) {
        tracing::debug!(from = %self.step, to = %to, "wizard transition");
        self.step = to;
    }

    fn expect_step(
        &self,
        expected: Step,
        action: &'static str,
    ) -> std::result::Result<(), ValidationError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(ValidationError::InvalidTransition {
                from: self.step,
                action,
            })
        }
    }

    /// INPUT → GENERATING（キーワード必須）
    pub fn begin_generation(&mut self) -> Result<()> {
        self.expect_step(Step::Input, "start generation")?;
        if !self.input.has_keyword() {
            return Err(ValidationError::MissingKeyword.into());
        }
        // 前回の生成結果は残さない（全部か無しか）
        self.generated = None;
        self.transition(Step::Generating);
        Ok(())
    }

    /// GENERATING → YOUTUBE（成功）/ INPUT（失敗、入力は保持）
    pub fn complete_generation(
        &mut self,
        outcome: std::result::Result<GeneratedContent, GenerationError>,
    ) -> Result<()> {
        self.expect_step(Step::Generating, "complete generation")?;
        match outcome {
            Ok(content) => {
                self.generated = Some(content);
                self.transition(Step::YouTube);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "generation failed; back to input");
                self.transition(Step::Input);
                Err(e.into())
            }
        }
    }

    /// begin → generate → complete. The generator is called at most once.
    pub async fn generate<G: ContentGenerator>(&mut self, generator: &G) -> Result<()> {
        self.begin_generation()?;
        let outcome = generator.generate(&self.input).await;
        self.complete_generation(outcome)
    }

    /// プラットフォーム画面を1つ進める
    ///
    /// YOUTUBE → FACEBOOK はページ未選択なら SETTINGS へ飛ばしてエラーを返す。
    /// WHATSAPP からは `finalize` を使う。
    pub fn advance(&mut self, settings: &AppSettings) -> Result<Step> {
        let next = match self.step {
            Step::YouTube => {
                if settings.facebook_page().is_none() {
                    self.transition(Step::Settings);
                    return Err(ValidationError::MissingFacebookPage.into());
                }
                Step::Facebook
            }
            Step::Facebook => Step::Instagram,
            Step::Instagram => Step::WhatsApp,
            from => {
                return Err(ValidationError::InvalidTransition {
                    from,
                    action: "advance",
                }
                .into())
            }
        };
        self.transition(next);
        Ok(next)
    }

    /// 投稿済みフラグを設定（検証なし）
    pub fn set_posted(&mut self, platform: Platform, posted: bool) {
        self.status.set(platform, posted);
        tracing::debug!(%platform, posted, "posting status");
    }

    pub fn toggle_posted(&mut self, platform: Platform) -> bool {
        let posted = !self.status.get(platform);
        self.set_posted(platform, posted);
        posted
    }

    /// Opens the platform's web entry point; no session state changes.
    /// Returns the URL that was opened.
    pub fn open_platform(
        &self,
        platform: Platform,
        settings: &AppSettings,
        opener: &dyn UrlOpener,
    ) -> Option<String> {
        let url = platform.entry_url(settings)?;
        opener.open_url(&url);
        Some(url)
    }

    /// WHATSAPP → REPORT。レポートを作成・保存してから遷移
    pub fn finalize(
        &mut self,
        settings: &AppSettings,
        reports: &ReportStore<'_>,
    ) -> Result<PostingReport> {
        self.expect_step(Step::WhatsApp, "finalize")?;
        let report = PostingReport::new(
            &self.input.primary_keyword,
            self.generated.as_ref().map(|g| g.youtube.title.as_str()),
            settings.facebook_page().map(|p| p.name.as_str()),
            self.status,
        );
        let report = reports.append(&report)?;
        self.transition(Step::Report);
        Ok(report)
    }

    /// 入力・生成結果・投稿状況を初期化して INPUT へ。設定と履歴は触らない
    pub fn reset(&mut self) {
        self.input = PostingInput::default();
        self.generated = None;
        self.status = PostingStatus::default();
        self.transition(Step::Input);
    }

    pub fn open_settings(&mut self) {
        self.transition(Step::Settings);
    }

    pub fn close_settings(&mut self) {
        self.transition(Step::Input);
    }
}
