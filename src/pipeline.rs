use tracing::info;

use crate::extract::{
    CompiledTemplate, DocumentPages, ExtractError, ExtractedTotal, InspectionImage, PageSource,
    Section, extract_inspection, extract_line_items,
};
use crate::line_items::{contract_total, process_line_items};
use crate::model::{ItemSource, Payload, ProcessedLineItem, Project};

#[derive(Debug, Clone)]
pub struct ScopeSummary {
    pub project: Project,
    pub items: Vec<ProcessedLineItem>,
    pub item_source: ItemSource,
    pub line_item_section: Option<Section>,
    pub inspection_section: Option<Section>,
    pub extracted_total: Option<ExtractedTotal>,
    pub images: Vec<InspectionImage>,
    pub contract_total: f64,
    pub page_count: usize,
    pub ocr_calls: usize,
    pub render_calls: usize,
}

pub fn run_pipeline(
    payload: Payload,
    document: Option<&dyn PageSource>,
    template: &CompiledTemplate,
    capture_images: bool,
) -> Result<ScopeSummary, ExtractError> {
    let Payload {
        mut project,
        line_items,
    } = payload;

    let mut pages = document.map(DocumentPages::new);

    let mut line_item_section = None;
    let mut extracted_total = None;
    let (raw_items, item_source) = match pages.as_mut() {
        _ if !line_items.is_empty() => (line_items, ItemSource::Payload),
        Some(pages) => {
            info!("no line items in payload, extracting from document");
            let extraction = extract_line_items(pages, template)?;
            line_item_section = extraction.section;
            extracted_total = extraction.total;
            let source = if extraction.items.is_empty() {
                ItemSource::NoItems
            } else {
                ItemSource::Extracted
            };
            (extraction.items, source)
        }
        None => (Vec::new(), ItemSource::NoItems),
    };

    if let Some(total) = &extracted_total {
        project.extracted_total = Some(total.amount);
    }

    let items = process_line_items(raw_items);

    let (inspection_section, images) = match pages.as_mut() {
        Some(pages) => {
            let inspection = extract_inspection(pages, template, capture_images)?;
            (inspection.section, inspection.images)
        }
        None => (None, Vec::new()),
    };

    let contract_total = contract_total(&items, project.extracted_total);
    let (page_count, ocr_calls, render_calls) = pages
        .as_ref()
        .map(|pages| (pages.page_count(), pages.ocr_calls(), pages.render_calls()))
        .unwrap_or_default();

    info!(
        items = items.len(),
        images = images.len(),
        contract_total,
        ocr_calls,
        "scope summary ready"
    );

    Ok(ScopeSummary {
        project,
        items,
        item_source,
        line_item_section,
        inspection_section,
        extracted_total,
        images,
        contract_total,
        page_count,
        ocr_calls,
        render_calls,
    })
}
