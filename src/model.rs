use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract::{ExtractedTotal, Section, ToolStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub project: Project,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_total: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub code: String,
    #[serde(rename = "section", default)]
    pub section_label: String,
    pub description: String,
    #[serde(default)]
    pub default_description: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub price: f64,
}

impl LineItem {
    pub fn placeholder(code: &str, section_label: &str, description: String) -> Self {
        Self {
            code: code.to_string(),
            section_label: section_label.to_string(),
            default_description: Some(description.clone()),
            description,
            quantity: 1.0,
            unit_price: 0.0,
            price: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Warranty,
    Standard,
    ExtraWork,
}

impl ItemCategory {
    pub fn title(self) -> &'static str {
        match self {
            Self::Warranty => "WARRANTY ITEMS",
            Self::Standard => "STANDARD SCOPE",
            Self::ExtraWork => "EXTRA WORK / MODIFICATIONS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    Blue,
    Grey,
    LightYellow,
    Orange,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedLineItem {
    #[serde(flatten)]
    pub item: LineItem,
    pub final_description: String,
    pub category: ItemCategory,
    pub modified: bool,
    pub highlight_color: HighlightColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSource {
    Payload,
    Extracted,
    NoItems,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageRecord {
    pub page_number: usize,
    pub path: String,
    pub byte_len: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionCounts {
    pub page_count: usize,
    pub ocr_calls: usize,
    pub render_calls: usize,
    pub item_count: usize,
    pub image_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScopeSummaryManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub started_at: String,
    pub completed_at: String,
    pub source_pdf: Option<String>,
    pub source_sha256: Option<String>,
    pub tool_versions: BTreeMap<String, ToolStatus>,
    pub project: Project,
    pub item_source: ItemSource,
    pub line_item_section: Option<Section>,
    pub inspection_section: Option<Section>,
    pub extracted_total: Option<ExtractedTotal>,
    pub items: Vec<ProcessedLineItem>,
    pub images: Vec<ImageRecord>,
    pub contract_total: f64,
    pub counts: ExtractionCounts,
    pub warnings: Vec<String>,
}
