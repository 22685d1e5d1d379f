use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    #[serde(alias = "templeId")]
    pub location_id: String,
    pub date: String,
    #[serde(default)]
    pub festival_mode: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct HourlyPrediction {
    pub hour: u32,
    pub visitors: u64,
    pub confidence: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub location_id: String,
    pub date: String,
    pub predictions: Vec<HourlyPrediction>,
    pub total_predicted: u64,
    pub peak_hour: u32,
    pub peak_visitors: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub location_id: String,
    pub current_visitors: u64,
    pub queue_length: u64,
    pub occupancy_percent: u64,
    pub avg_wait_time: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SurgeRecord {
    pub location_id: String,
    pub surge_triggered: bool,
    pub new_visitor_count: u64,
    pub occupancy_percent: u64,
    pub alert: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
}
