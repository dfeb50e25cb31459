use serde::{Deserialize, Serialize};

use adcopy_gen::insights::{
    ChannelPrediction, GlobalTargeting, OptimizationReport, OptimizeRequest, PackageRecommendation,
};
use adcopy_gen::{AdCopyRequest, AdCopyResponse, Objective, Platform, Tone};

#[derive(Debug, Deserialize)]
pub struct ApiCopyRequest {
    pub product_name: Option<String>,
    pub target_audience: Option<String>,
    pub platform: Option<String>,
    pub objective: Option<String>,
    pub tone: Option<String>,
    pub industry: Option<String>,
    pub max_length: Option<usize>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub budget: Option<f64>,
    pub use_ai: Option<bool>,
    pub request_id: Option<String>,
    pub seed: Option<u64>,
}

impl ApiCopyRequest {
    pub fn into_request(self) -> Result<AdCopyRequest, String> {
        let mut request = build_copy_request(
            self.product_name,
            self.target_audience,
            self.platform,
            self.objective,
            self.tone,
            self.industry,
        )?;
        request.max_length = self.max_length;
        request.language = self.language.filter(|value| !value.trim().is_empty());
        request.region = self.region.filter(|value| !value.trim().is_empty());
        request.budget = self.budget;
        Ok(request)
    }
}

fn build_copy_request(
    product_name: Option<String>,
    target_audience: Option<String>,
    platform: Option<String>,
    objective: Option<String>,
    tone: Option<String>,
    industry: Option<String>,
) -> Result<AdCopyRequest, String> {
    let product_name = product_name.unwrap_or_default().trim().to_string();
    if product_name.is_empty() {
        return Err("product_name is required".to_string());
    }

    let mut request = AdCopyRequest::default();
    request.product_name = product_name;
    request.target_audience = target_audience.unwrap_or_default().trim().to_string();
    if let Some(value) = platform.as_deref() {
        request.platform = Platform::parse_or_default(value);
    }
    if let Some(value) = objective.as_deref() {
        request.objective = Objective::parse_or_default(value);
    }
    if let Some(value) = tone.as_deref() {
        request.tone = Tone::parse_or_default(value);
    }
    if let Some(value) = industry {
        let trimmed = value.trim().to_string();
        if !trimmed.is_empty() {
            request.industry = trimmed;
        }
    }

    Ok(request)
}

#[derive(Debug, Serialize)]
pub struct ApiCopyResponse {
    pub success: bool,
    pub request_id: String,
    pub data: AdCopyResponse,
    pub warnings: Vec<String>,
}

impl ApiCopyResponse {
    pub fn from_response(
        response: AdCopyResponse,
        warnings: Vec<String>,
        request_id: String,
    ) -> Self {
        Self {
            success: true,
            request_id,
            data: response,
            warnings,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiHashtagRequest {
    pub content: Option<String>,
    pub platform: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ApiHashtagResponse {
    pub success: bool,
    pub hashtags: Vec<String>,
    pub count: usize,
}

impl ApiHashtagResponse {
    pub fn new(hashtags: Vec<String>) -> Self {
        let count = hashtags.len();
        Self {
            success: true,
            hashtags,
            count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiTargetingRequest {
    pub objective: Option<String>,
    pub platform: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ApiTargetingResponse {
    pub success: bool,
    pub data: GlobalTargeting,
}

#[derive(Debug, Deserialize)]
pub struct ApiPredictionRequest {
    pub budget: Option<f64>,
    pub platforms: Option<Vec<String>>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ApiPredictionResponse {
    pub success: bool,
    pub data: Vec<ChannelPrediction>,
}

#[derive(Debug, Deserialize)]
pub struct ApiPackageRequest {
    pub monthly_budget: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ApiPackageResponse {
    pub success: bool,
    pub data: PackageRecommendation,
}

#[derive(Debug, Deserialize)]
pub struct ApiOptimizeRequest {
    pub product_name: Option<String>,
    pub target_audience: Option<String>,
    pub platform: Option<String>,
    pub objective: Option<String>,
    pub tone: Option<String>,
    pub industry: Option<String>,
    pub current_ctr: Option<f64>,
    pub current_cpc: Option<f64>,
    pub daily_spend: Option<f64>,
    pub seed: Option<u64>,
}

impl ApiOptimizeRequest {
    pub fn into_request(self) -> Result<OptimizeRequest, String> {
        let copy_request = build_copy_request(
            self.product_name,
            self.target_audience,
            self.platform,
            self.objective,
            self.tone,
            self.industry,
        )?;
        Ok(OptimizeRequest {
            copy_request,
            current_ctr: self.current_ctr.unwrap_or(0.0).max(0.0),
            current_cpc: self.current_cpc.unwrap_or(0.0).max(0.0),
            daily_spend: self.daily_spend.unwrap_or(0.0).max(0.0),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiOptimizeResponse {
    pub success: bool,
    pub data: OptimizationReport,
}
