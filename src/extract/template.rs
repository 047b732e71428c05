use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub inspection: SectionHeadings,
    pub line_items: SectionHeadings,
    pub total_patterns: Vec<String>,
    pub summary_pattern: String,
    pub noise_labels: Vec<String>,
    pub organization_prefix: Option<String>,
    pub placeholder_code: String,
    pub placeholder_section: String,
    pub total_window_pages: usize,
    pub max_image_page_words: usize,
    pub title_break_chars: usize,
    pub title_max_chars: usize,
    pub scan_dpi: u32,
    pub image_dpi: u32,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            inspection: SectionHeadings {
                start: "INSPECTION".to_string(),
                end: strings(&[
                    "PREFERRED PACKAGE",
                    "STANDARD SCOPE",
                    "DRY ROT & EXTRA WORK",
                    "AUTHORIZATION PAGE",
                ]),
            },
            line_items: SectionHeadings {
                start: "PREFERRED PACKAGE".to_string(),
                end: strings(&[
                    "AUTHORIZATION PAGE",
                    "OPTIONAL ITEMS",
                    "DRY ROT & EXTRA WORK",
                ]),
            },
            total_patterns: strings(&[
                r"FINAL PRICE\s*\$?\s*([0-9,]+\.\d{2})",
                r"\bTOTAL\s*\$?\s*([0-9,]+\.\d{2})",
                r"ADJUSTED SUBTOTAL\s*\$?\s*([0-9,]+\.\d{2})",
                r"QUOTE SUBTOTAL\s*\$?\s*([0-9,]+\.\d{2})",
            ]),
            summary_pattern: r"QUOTE SUBTOTAL|ADJUSTED SUBTOTAL|FINAL PRICE|\bTOTAL\b".to_string(),
            noise_labels: strings(&[
                "PREFERRED PACKAGE",
                "DESCRIPTION",
                "QUOTE SUBTOTAL",
                "ADJUSTED SUBTOTAL",
                "TOTAL",
                "AUTHORIZATION PAGE",
                "OPTIONAL ITEMS",
            ]),
            organization_prefix: Some("GOGREEN".to_string()),
            placeholder_code: "STRD".to_string(),
            placeholder_section: "Preferred Package".to_string(),
            total_window_pages: 8,
            max_image_page_words: 120,
            title_break_chars: 90,
            title_max_chars: 140,
            scan_dpi: 150,
            image_dpi: 250,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl TemplateConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let template: Self = read_json(path)?;
        info!(path = %path.display(), "loaded template");
        Ok(template)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn compile(&self) -> Result<CompiledTemplate> {
        if self.scan_dpi == 0 || self.image_dpi == 0 {
            bail!("template dpi values must be positive");
        }
        if self.inspection.start.trim().is_empty() || self.line_items.start.trim().is_empty() {
            bail!("template start headings must not be empty");
        }
        if self.scan_dpi == self.image_dpi {
            warn!(
                dpi = self.scan_dpi,
                "scan and image dpi are equal; image capture will reuse scan resolution"
            );
        }

        let mut total_patterns = Vec::with_capacity(self.total_patterns.len());
        for source in &self.total_patterns {
            let regex = Regex::new(source)
                .with_context(|| format!("failed to compile total pattern {source:?}"))?;
            if regex.captures_len() < 2 {
                bail!("total pattern {source:?} has no capture group for the amount");
            }
            total_patterns.push(TotalPattern {
                source: source.clone(),
                regex,
            });
        }

        let segmenter = SegmenterRules {
            summary: Regex::new(&self.summary_pattern)
                .context("failed to compile summary pattern")?,
            dollar_amount: Regex::new(r"\$[0-9]").context("failed to compile dollar regex")?,
            monthly_payment: Regex::new(r"(?i)\bmo\b")
                .context("failed to compile monthly payment regex")?,
            title_max_chars: self.title_max_chars,
            title_break_chars: self.title_break_chars,
            placeholder_code: self.placeholder_code.clone(),
            placeholder_section: self.placeholder_section.clone(),
        };

        Ok(CompiledTemplate {
            config: self.clone(),
            total_patterns,
            segmenter,
            noise: NoiseFilter::new(&self.noise_labels, self.organization_prefix.as_deref()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    pub config: TemplateConfig,
    pub total_patterns: Vec<TotalPattern>,
    pub segmenter: SegmenterRules,
    pub noise: NoiseFilter,
}
