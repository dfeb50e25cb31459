use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use adcopy_gen::config::ProviderConfig;
use adcopy_gen::{AdCopyRequest, ProviderCopy};

/// Remote generative-copy provider speaking the chat-completions protocol.
/// Optional: when unconfigured, the template engine answers alone.
#[derive(Clone)]
pub struct ProviderClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl ProviderClient {
    pub fn from_env(config: &ProviderConfig, model_override: Option<String>) -> Option<Self> {
        let api_key = env::var("ADCOPY_API_KEY").ok()?;
        let api_base = env::var("ADCOPY_API_BASE").unwrap_or_else(|_| config.endpoint.clone());
        let model = model_override
            .or_else(|| env::var("ADCOPY_MODEL").ok())
            .unwrap_or_else(|| config.model.clone());
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .ok()?;
        Some(Self {
            client,
            api_key,
            api_base,
            model,
        })
    }

    pub async fn draft_copy(&self, request: &AdCopyRequest) -> Result<ProviderCopy, String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let body = ChatRequest {
            model: self.model.clone(),
            temperature: 0.7,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt(request),
                },
            ],
        };

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|err| format!("provider request failed: {}", err))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| String::new());
            let detail = error_body.trim();
            if detail.is_empty() {
                return Err(format!("provider API error: {}", status));
            }
            return Err(format!("provider API error: {} {}", status, detail));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|err| format!("provider response parse failed: {}", err))?;

        let content = body
            .choices
            .first()
            .ok_or_else(|| "provider response missing choices".to_string())?
            .message
            .content
            .trim()
            .to_string();

        let json =
            extract_json(&content).ok_or_else(|| "provider response missing JSON".to_string())?;
        let mut copy: ProviderCopy = serde_json::from_str(&json)
            .map_err(|err| format!("provider JSON parse failed: {}", err))?;

        copy.headline = clean_field(copy.headline, 40);
        copy.primary_text = clean_field(copy.primary_text, 100);
        copy.call_to_action = clean_field(copy.call_to_action, 30);
        copy.tagline = clean_field(copy.tagline, 80);
        copy.value_proposition = clean_field(copy.value_proposition, 160);
        copy.benefits = copy
            .benefits
            .into_iter()
            .map(|benefit| benefit.trim().to_string())
            .filter(|benefit| !benefit.is_empty())
            .take(5)
            .collect();

        Ok(copy)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

fn system_prompt() -> String {
    let prompt = r#"You are a strict JSON-only ad copywriter.
Return a single JSON object with these fields:
- headline (string, max 40 characters, must mention the product)
- primary_text (string, max 100 characters)
- call_to_action (short imperative phrase)
- tagline (string)
- value_proposition (one sentence)
- benefits (array of 3-5 short strings)
Rules:
- Output JSON only, no markdown or commentary.
- Match the requested tone and objective.
"#;
    prompt.to_string()
}

fn user_prompt(request: &AdCopyRequest) -> String {
    let mut prompt = format!(
        "Product: {}\nPlatform: {}\nObjective: {}\nTone: {}\nIndustry: {}",
        request.product_name.trim(),
        request.platform.label(),
        request.objective.label(),
        request.tone.label(),
        request.industry.trim(),
    );
    if !request.target_audience.trim().is_empty() {
        prompt.push_str(&format!("\nAudience: {}", request.target_audience.trim()));
    }
    if let Some(region) = request.region.as_deref() {
        if !region.trim().is_empty() {
            prompt.push_str(&format!("\nRegion: {}", region.trim()));
        }
    }
    if let Some(language) = request.language.as_deref() {
        if !language.trim().is_empty() {
            prompt.push_str(&format!("\nLanguage: {}", language.trim()));
        }
    }
    prompt
}

fn extract_json(text: &str) -> Option<String> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start >= end {
        return None;
    }
    Some(text[start..=end].to_string())
}

fn clean_field(value: Option<String>, max_chars: usize) -> Option<String> {
    value
        .map(|value| value.trim().chars().take(max_chars).collect::<String>())
        .filter(|value: &String| !value.is_empty())
}
