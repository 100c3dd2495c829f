//! 投稿レポート履歴（新しい順、最大50件）

use super::KeyValueStore;
use crate::error::Result;
use crate::platform::PostingStatus;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const REPORTS_KEY: &str = "kushti_post_reports";

/// 保持する最大件数
pub const MAX_REPORTS: usize = 50;

const UNTITLED: &str = "Untitled";
const NO_PAGE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingReport {
    /// ミリ秒タイムスタンプ
    pub id: String,
    pub date: String,
    pub keyword: String,
    pub title: String,
    pub fb_page: String,
    pub status: PostingStatus,
}

impl PostingReport {
    pub fn new(
        keyword: &str,
        title: Option<&str>,
        fb_page: Option<&str>,
        status: PostingStatus,
    ) -> Self {
        Self::at(Local::now(), keyword, title, fb_page, status)
    }

    pub fn at(
        now: DateTime<Local>,
        keyword: &str,
        title: Option<&str>,
        fb_page: Option<&str>,
        status: PostingStatus,
    ) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            date: now.format("%Y-%m-%d").to_string(),
            keyword: keyword.to_string(),
            title: title.unwrap_or(UNTITLED).to_string(),
            fb_page: fb_page.unwrap_or(NO_PAGE).to_string(),
            status,
        }
    }

    /// コピー用のレポート本文
    pub fn summary_text(&self) -> String {
        format!(
            "Posting Report: {}\nYouTube: {}\nFB: {}\nIG: {}\nWA: {}",
            self.title,
            self.status.youtube,
            self.status.facebook,
            self.status.instagram,
            self.status.whatsapp
        )
    }
}

fn next_id(id: &str) -> String {
    match id.parse::<i64>() {
        Ok(n) => (n + 1).to_string(),
        Err(_) => format!("{}-1", id),
    }
}

/// `reports` レコードの読み書き
pub struct ReportStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl<'a> ReportStore<'a> {
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    /// 先頭に追加し、古いものから切り捨てる
    ///
    /// 同じIDが既にあれば重ならない値までずらす。保存した内容を返す
    pub fn append(&self, report: &PostingReport) -> Result<PostingReport> {
        let mut reports = self.list()?;
        let mut report = report.clone();
        while reports.iter().any(|r| r.id == report.id) {
            report.id = next_id(&report.id);
        }
        reports.insert(0, report.clone());
        reports.truncate(MAX_REPORTS);

        let data = serde_json::to_string(&reports)?;
        self.kv.set(REPORTS_KEY, &data)?;
        tracing::info!(id = %report.id, kept = reports.len(), "report saved");
        Ok(report)
    }

    /// 新しい順。未保存なら空
    pub fn list(&self) -> Result<Vec<PostingReport>> {
        match self.kv.get(REPORTS_KEY)? {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 14, 18, 30, 0).unwrap()
    }

    #[test]
    fn test_report_fallbacks() {
        let report =
            PostingReport::at(fixed_time(), "Hind Kesari", None, None, PostingStatus::default());
        assert_eq!(report.title, "Untitled");
        assert_eq!(report.fb_page, "N/A");
        assert_eq!(report.date, "2026-01-14");
        assert_eq!(report.id, fixed_time().timestamp_millis().to_string());
    }

    #[test]
    fn test_summary_text() {
        let status = PostingStatus {
            youtube: true,
            facebook: false,
            instagram: true,
            whatsapp: false,
        };
        let report = PostingReport::at(fixed_time(), "k", Some("Dangal"), Some("Page"), status);
        assert_eq!(
            report.summary_text(),
            "Posting Report: Dangal\nYouTube: true\nFB: false\nIG: true\nWA: false"
        );
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id("1768383000000"), "1768383000001");
        assert_eq!(next_id("legacy"), "legacy-1");
    }

    #[test]
    fn test_serialized_field_names() {
        let status = PostingStatus::default();
        let report = PostingReport::at(fixed_time(), "k", Some("t"), Some("Page"), status);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["fbPage"], "Page");
        assert_eq!(value["status"]["whatsapp"], false);
    }
}
