use super::*;

#[derive(Debug, Clone)]
pub struct TotalPattern {
    pub source: String,
    pub regex: Regex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedTotal {
    pub amount: f64,
    pub pattern: String,
    pub page_index: usize,
    pub from_fallback: bool,
}

pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn find_total_in_text<'p>(
    text_upper: &str,
    patterns: &'p [TotalPattern],
) -> Option<(f64, &'p TotalPattern)> {
    for pattern in patterns {
        let Some(captures) = pattern.regex.captures(text_upper) else {
            continue;
        };
        let Some(raw) = captures.get(1) else {
            continue;
        };

        match parse_amount(raw.as_str()) {
            Some(amount) => return Some((amount, pattern)),
            None => {
                debug!(pattern = %pattern.source, raw = raw.as_str(), "total matched but unparseable");
            }
        }
    }

    None
}

pub fn extract_total(
    pages: &mut DocumentPages<'_>,
    window_start: Option<usize>,
    template: &CompiledTemplate,
) -> Result<Option<ExtractedTotal>, ExtractError> {
    let page_count = pages.page_count();
    let dpi = template.config.scan_dpi;
    let patterns = &template.total_patterns;

    if let Some(start) = window_start {
        let window_end = page_count.min(start.saturating_add(template.config.total_window_pages));
        for page_index in start..window_end {
            let text = pages.upper_text(page_index, dpi)?;
            if let Some((amount, pattern)) = find_total_in_text(&text, patterns) {
                info!(amount, page = page_index, pattern = %pattern.source, "total found in window");
                return Ok(Some(ExtractedTotal {
                    amount,
                    pattern: pattern.source.clone(),
                    page_index,
                    from_fallback: false,
                }));
            }
        }
    }

    for page_index in 0..page_count {
        let text = pages.upper_text(page_index, dpi)?;
        if let Some((amount, pattern)) = find_total_in_text(&text, patterns) {
            info!(amount, page = page_index, pattern = %pattern.source, "total found by full rescan");
            return Ok(Some(ExtractedTotal {
                amount,
                pattern: pattern.source.clone(),
                page_index,
                from_fallback: true,
            }));
        }
    }

    info!(page_count, "no total found");
    Ok(None)
}
