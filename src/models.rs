//! データ構造体モジュール

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::utils::format::{format_thousands, format_timestamp_date, strip_html_tags, truncate_chars};

// ============================================
// 求人データ
// ============================================

/// 外部APIの求人レコード
///
/// `job_id` 以外のフィールドは解釈せず `fields` にそのまま保持し、保存時もそのまま書き戻す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Job {
    pub fn new(job_id: impl Into<String>) -> Self {
        Job {
            job_id: job_id.into(),
            fields: Map::new(),
        }
    }

    /// フィールドを追加 (テスト・サンプルデータ用)
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    fn f64_field(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    fn string_list(&self, key: &str) -> Vec<String> {
        self.fields
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.str_field("job_title").unwrap_or("Untitled position")
    }

    pub fn employer_name(&self) -> &str {
        self.str_field("employer_name").unwrap_or("")
    }

    pub fn employer_logo(&self) -> Option<&str> {
        self.str_field("employer_logo")
    }

    pub fn employer_website(&self) -> Option<&str> {
        self.str_field("employer_website")
    }

    pub fn employment_type(&self) -> Option<&str> {
        self.str_field("job_employment_type")
    }

    pub fn is_remote(&self) -> bool {
        self.fields
            .get("job_is_remote")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn apply_link(&self) -> Option<&str> {
        self.str_field("job_apply_link")
    }

    pub fn description(&self) -> &str {
        self.str_field("job_description").unwrap_or("")
    }

    pub fn required_skills(&self) -> Vec<String> {
        self.string_list("job_required_skills")
    }

    pub fn benefits(&self) -> Vec<String> {
        self.string_list("job_benefits")
    }

    /// `job_highlights` のセクション (Qualifications, Responsibilities, Benefits の順)
    pub fn highlights(&self) -> Vec<(String, Vec<String>)> {
        let Some(highlights) = self.fields.get("job_highlights").and_then(Value::as_object) else {
            return Vec::new();
        };
        ["Qualifications", "Responsibilities", "Benefits"]
            .iter()
            .filter_map(|section| {
                let items: Vec<String> = highlights
                    .get(*section)?
                    .as_array()?
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
                (!items.is_empty()).then(|| (section.to_string(), items))
            })
            .collect()
    }

    /// 市区・州・国をカンマ区切りで連結 (空は除外)
    pub fn format_location(&self) -> String {
        ["job_city", "job_state", "job_country"]
            .iter()
            .filter_map(|key| self.str_field(key))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// 上限・下限の両方がある場合のみ `$min - $max period`
    pub fn format_salary(&self) -> Option<String> {
        let min = self.f64_field("job_min_salary").filter(|v| *v != 0.0)?;
        let max = self.f64_field("job_max_salary").filter(|v| *v != 0.0)?;
        let period = self.str_field("job_salary_period").unwrap_or("per year");
        Some(format!(
            "${} - ${} {}",
            format_thousands(min),
            format_thousands(max),
            period
        ))
    }

    pub fn format_posted_date(&self) -> Option<String> {
        self.fields
            .get("job_posted_at_timestamp")
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .and_then(format_timestamp_date)
            .or_else(|| {
                self.str_field("job_posted_at_datetime_utc")
                    .map(|dt| dt.split('T').next().unwrap_or(dt).to_string())
            })
    }

    /// カード用の説明文 (タグ除去・200文字)
    pub fn description_preview(&self) -> String {
        truncate_chars(&strip_html_tags(self.description()), 200)
    }
}

// ============================================
// 検索APIレスポンス
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub num_pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub parameters: SearchParameters,
    #[serde(default)]
    pub data: Vec<Job>,
}

/// 詳細APIの `data` は単体オブジェクトか1要素配列のどちらか
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum JobDetailsData {
    Many(Vec<Job>),
    One(Job),
}

impl JobDetailsData {
    pub fn into_job(self) -> Option<Job> {
        match self {
            JobDetailsData::Many(jobs) => jobs.into_iter().next(),
            JobDetailsData::One(job) => Some(job),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobDetailsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub data: Option<JobDetailsData>,
}

/// 詳細APIのレスポンスボディを求人1件に正規化
///
/// `data` が配列・単体・欠落のいずれでも受け付け、`data` を持たないボディ自体が
/// 求人レコードである場合も扱う。該当なしは `Ok(None)`。
pub fn parse_job_details(body: Value) -> Result<Option<Job>, ApiError> {
    let is_envelope = body
        .as_object()
        .map(|obj| obj.contains_key("data"))
        .unwrap_or(false);

    if is_envelope {
        let response: JobDetailsResponse =
            serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(response.data.and_then(JobDetailsData::into_job));
    }

    let is_bare_job = body
        .as_object()
        .map(|obj| obj.contains_key("job_id"))
        .unwrap_or(false);
    if is_bare_job {
        let job: Job = serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(Some(job));
    }

    Ok(None)
}

// ============================================
// ユーザープロフィール
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub desired_job_title: String,
    pub about_me: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

pub const NAME_LIMITS: (usize, usize) = (2, 50);
pub const JOB_TITLE_LIMITS: (usize, usize) = (2, 100);
pub const ABOUT_ME_LIMITS: (usize, usize) = (10, 500);

fn check_length(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
    (min, max): (usize, usize),
) {
    let len = value.chars().count();
    let message = if len == 0 {
        format!("{} is required", label)
    } else if len < min {
        format!("{} must be at least {} characters", label, min)
    } else if len > max {
        format!("{} must be less than {} characters", label, max)
    } else {
        return;
    };
    errors.push(FieldError { field, message });
}

impl UserProfile {
    /// フォーム送信前の入力チェック (リポジトリは検証しない)
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_length(&mut errors, "name", "Name", &self.name, NAME_LIMITS);
        check_length(&mut errors, "desiredJobTitle", "Desired job title", &self.desired_job_title, JOB_TITLE_LIMITS);
        check_length(&mut errors, "aboutMe", "About me", &self.about_me, ABOUT_ME_LIMITS);
        errors
    }
}

// ============================================
// UI状態
// ============================================

/// 非同期取得の状態
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Failed(ApiError),
    Ready(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

// ============================================
// ビューモード
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    Search,
    Liked,
    Profile,
    JobDetails {
        job_id: String,
        back: Box<ViewMode>,
    },
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_job() -> Job {
        serde_json::from_value(json!({
            "job_id": "abc",
            "job_title": "Software Engineer",
            "employer_name": "Acme",
            "job_city": "Austin",
            "job_state": "",
            "job_country": "US",
            "job_min_salary": 90000,
            "job_max_salary": 120000,
            "job_posted_at_timestamp": 1709208000,
            "job_description": "<p>Write Rust</p>",
            "job_highlights": { "Qualifications": ["Rust"], "Benefits": [] }
        }))
        .unwrap()
    }

    #[test]
    fn test_job_keeps_unknown_fields() {
        let raw = json!({ "job_id": "x1", "custom": { "nested": [1, 2] } });
        let job: Job = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(job.job_id, "x1");
        assert_eq!(serde_json::to_value(&job).unwrap(), raw);
    }

    #[test]
    fn test_job_requires_id() {
        assert!(serde_json::from_value::<Job>(json!({ "job_title": "x" })).is_err());
    }

    #[test]
    fn test_job_display_helpers() {
        let job = sample_job();
        assert_eq!(job.title(), "Software Engineer");
        assert_eq!(job.format_location(), "Austin, US");
        assert_eq!(
            job.format_salary(),
            Some("$90,000 - $120,000 per year".to_string())
        );
        assert_eq!(job.format_posted_date(), Some("2024-02-29".to_string()));
        assert_eq!(job.description_preview(), "Write Rust");
        assert_eq!(
            job.highlights(),
            vec![("Qualifications".to_string(), vec!["Rust".to_string()])]
        );
        assert!(!job.is_remote());
    }

    #[test]
    fn test_salary_needs_both_bounds() {
        let job = Job::new("a").with_field("job_min_salary", json!(50000));
        assert_eq!(job.format_salary(), None);
    }

    #[test]
    fn test_details_single_object() {
        let body = json!({ "status": "OK", "data": { "job_id": "abc", "job_title": "Dev" } });
        let job = parse_job_details(body).unwrap().unwrap();
        assert_eq!(job.job_id, "abc");
        assert_eq!(job.title(), "Dev");
    }

    #[test]
    fn test_details_one_element_array() {
        let body = json!({ "status": "OK", "data": [{ "job_id": "abc" }] });
        assert_eq!(parse_job_details(body).unwrap(), Some(Job::new("abc")));
    }

    #[test]
    fn test_details_not_found() {
        assert_eq!(parse_job_details(json!({ "status": "OK", "data": [] })).unwrap(), None);
        assert_eq!(parse_job_details(json!({ "status": "OK", "data": null })).unwrap(), None);
        assert_eq!(parse_job_details(json!({ "status": "OK" })).unwrap(), None);
    }

    #[test]
    fn test_details_bare_job_body() {
        let body = json!({ "job_id": "abc", "job_title": "Dev" });
        assert_eq!(parse_job_details(body).unwrap().unwrap().job_id, "abc");
    }

    #[test]
    fn test_details_malformed_data() {
        let body = json!({ "data": "nope" });
        assert!(matches!(parse_job_details(body), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_search_response_decodes() {
        let body = json!({
            "status": "OK",
            "request_id": "r-1",
            "parameters": { "query": "rust", "page": 1, "num_pages": 1 },
            "data": [{ "job_id": "a" }, { "job_id": "b" }]
        });
        let response: JobSearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.parameters.query, "rust");
        assert_eq!(response.data.len(), 2);
    }

    #[test]
    fn test_profile_json_field_names() {
        let profile = UserProfile {
            name: "Ada".to_string(),
            desired_job_title: "Engineer".to_string(),
            about_me: "Likes engines".to_string(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value,
            json!({ "name": "Ada", "desiredJobTitle": "Engineer", "aboutMe": "Likes engines" })
        );
    }

    #[test]
    fn test_profile_validation() {
        let empty = UserProfile::default();
        let errors = empty.validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].message, "Name is required");

        let short = UserProfile {
            name: "A".to_string(),
            desired_job_title: "Dev".to_string(),
            about_me: "too short".to_string(),
        };
        let errors = short.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[1].message, "About me must be at least 10 characters");

        let long_title = UserProfile {
            name: "Ada".to_string(),
            desired_job_title: "x".repeat(101),
            about_me: "Ten chars!".to_string(),
        };
        let errors = long_title.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Desired job title must be less than 100 characters");
    }
}
