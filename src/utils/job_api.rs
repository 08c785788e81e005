//! 求人検索API (JSearch) 連携
//!
//! 検索と詳細取得の2つのGETのみ。リトライ・キャッシュは行わず、エラーはそのまま呼び出し側へ返す。

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{parse_job_details, Job, JobSearchResponse};
use crate::utils::log_trace::{log_debug, log_error_with_data, log_warn};

pub const SEARCH_PATH: &str = "/search";
pub const DETAILS_PATH: &str = "/job-details";

/// 検索リクエストのクエリパラメータ
pub fn search_params(query: &str, page: u32) -> Vec<(&'static str, String)> {
    vec![
        ("query", query.to_string()),
        ("page", page.to_string()),
        ("num_pages", "1".to_string()),
        ("country", "us".to_string()),
        ("date_posted", "all".to_string()),
    ]
}

/// 詳細リクエストのクエリパラメータ (`job_id` はURLデコード済みであること)
pub fn details_params(job_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("job_id", job_id.to_string()),
        ("country", "us".to_string()),
    ]
}

pub fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}{}?{}", base_url.trim_end_matches('/'), path, query)
}

#[cfg(target_arch = "wasm32")]
fn encode_component(value: &str) -> String {
    js_sys::encode_uri_component(value)
        .as_string()
        .unwrap_or_default()
}

// ネイティブビルドではJSを呼べないのでそのまま
#[cfg(not(target_arch = "wasm32"))]
fn encode_component(value: &str) -> String {
    value.to_string()
}

/// ルートパラメータ由来のIDをデコード (不正なエスケープはそのまま使う)
#[cfg(target_arch = "wasm32")]
pub fn decode_job_id(job_id: &str) -> String {
    match js_sys::decode_uri_component(job_id) {
        Ok(decoded) => decoded.as_string().unwrap_or_else(|| job_id.to_string()),
        Err(_) => {
            log_warn("job-api", &format!("job_idのデコード失敗: {}", job_id));
            job_id.to_string()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn decode_job_id(job_id: &str) -> String {
    job_id.to_string()
}

#[derive(Debug, Clone)]
pub struct JobApiClient {
    config: ApiConfig,
}

impl JobApiClient {
    pub fn new(config: ApiConfig) -> Self {
        if !config.has_api_key() {
            log_warn("job-api", "APIキーが設定されていません");
        }
        Self { config }
    }

    /// キーワード検索 (page は1始まり)
    pub async fn search_jobs(&self, query: &str, page: u32) -> Result<JobSearchResponse, ApiError> {
        let url = build_url(&self.config.base_url, SEARCH_PATH, &search_params(query, page));
        let response: JobSearchResponse = self.get_json(&url).await?;
        log_debug(
            "job-api",
            &format!("検索完了: query={} page={} 件数={}", query, page, response.data.len()),
        );
        Ok(response)
    }

    /// 求人詳細を取得。該当なしは `Ok(None)`
    pub async fn get_job_details(&self, job_id: &str) -> Result<Option<Job>, ApiError> {
        let decoded = decode_job_id(job_id);
        let url = build_url(&self.config.base_url, DETAILS_PATH, &details_params(&decoded));
        let body: serde_json::Value = self.get_json(&url).await?;
        let job = parse_job_details(body)?;
        if job.is_none() {
            log_debug("job-api", &format!("求人が見つかりません: {}", decoded));
        }
        Ok(job)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let result = self.fetch_json(url).await;
        if let Err(ref e) = result {
            log_error_with_data(
                "job-api",
                &format!("API呼び出し失敗: {}", e),
                serde_json::json!({ "url": url }),
            );
        }
        result
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let headers = request.headers();
        headers
            .set("X-RapidAPI-Key", &self.config.api_key)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        headers
            .set("X-RapidAPI-Host", &self.config.host)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("window is not available".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Upstream { status: resp.status() });
        }

        let json = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(format!("{:?}", e)))?)
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
