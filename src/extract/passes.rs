use super::*;

#[derive(Debug, Clone, Default)]
pub struct LineItemExtraction {
    pub section: Option<Section>,
    pub items: Vec<LineItem>,
    pub total: Option<ExtractedTotal>,
}

pub fn extract_line_items(
    pages: &mut DocumentPages<'_>,
    template: &CompiledTemplate,
) -> Result<LineItemExtraction, ExtractError> {
    let dpi = template.config.scan_dpi;
    let Some(section) = locate_section(pages, &template.config.line_items, dpi)? else {
        warn!(
            heading = %template.config.line_items.start,
            "line-item heading not found; no items extracted"
        );
        return Ok(LineItemExtraction::default());
    };

    if section.runs_to_end() {
        warn!(
            start_page = section.start_page,
            "line-item section has no end heading; reading to end of document"
        );
    }

    let raw_lines = section_lines(pages, &section, dpi)?;
    let lines = template.noise.filter(&raw_lines);
    debug!(
        raw = raw_lines.len(),
        kept = lines.len(),
        "filtered line-item section"
    );

    let total = extract_total(pages, Some(section.start_page), template)?;
    let items = segment_items(&template.segmenter, &lines);
    info!(items = items.len(), "segmented line items");

    Ok(LineItemExtraction {
        section: Some(section),
        items,
        total,
    })
}

#[derive(Debug, Clone, Default)]
pub struct InspectionExtraction {
    pub section: Option<Section>,
    pub images: Vec<InspectionImage>,
}

pub fn extract_inspection(
    pages: &mut DocumentPages<'_>,
    template: &CompiledTemplate,
    capture_images: bool,
) -> Result<InspectionExtraction, ExtractError> {
    let section = locate_section(pages, &template.config.inspection, template.config.scan_dpi)?;

    let images = if capture_images {
        capture_inspection_images(pages, section.as_ref(), template)?
    } else {
        Vec::new()
    };

    Ok(InspectionExtraction { section, images })
}
