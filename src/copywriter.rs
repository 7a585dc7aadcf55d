// src/copywriter.rs

use crate::config::CopyWriterConfig;
use crate::errors::ValidationError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {status} - {body}")]
    ApiError { status: u16, body: String },
    #[error("the model returned no text")]
    EmptyCompletion,
}

/// Anything that turns a prompt into marketing text.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, CopyError>;
}

/// Composes the prompt sent to the generator.
pub fn build_prompt(topic: &str, tone: &str) -> Result<String, ValidationError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(ValidationError::Missing { field: "topic" });
    }
    let tone = match tone.trim() {
        "" => "friendly and professional",
        t => t,
    };

    Ok(format!(
        "Write a short marketing text (max 120 words) for a rental management company. \
         Topic: {topic}. Tone: {tone}. Address property owners directly and end with a call to action."
    ))
}

pub struct GeminiClient {
    endpoint: String,
    model: String,
    api_key: String,
    client: Client,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Returns `None` when no API key is configured.
    pub fn from_config(cfg: &CopyWriterConfig) -> Option<Self> {
        let api_key = cfg.api_key.clone().filter(|k| !k.trim().is_empty())?;
        Some(Self {
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            api_key,
            client: Client::new(),
        })
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, CopyError> {
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!("{}/{}:generateContent", self.endpoint, self.model);
        let resp = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .map_err(|e| CopyError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(CopyError::ApiError { status, body });
        }

        let parsed: GenerateResponse = resp
            .json()
            .map_err(|e| CopyError::RequestFailed(format!("invalid response body: {e}")))?;

        extract_text(parsed)
    }
}

fn extract_text(resp: GenerateResponse) -> Result<String, CopyError> {
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(CopyError::EmptyCompletion);
    }
    Ok(text.to_string())
}
