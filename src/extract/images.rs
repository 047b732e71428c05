use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionImage {
    pub page_number: usize,
    pub image_bytes: Vec<u8>,
}

pub fn select_image_pages(
    pages: &mut DocumentPages<'_>,
    section: Option<&Section>,
    template: &CompiledTemplate,
) -> Result<Vec<usize>, ExtractError> {
    let Some(section) = section else {
        return Ok(Vec::new());
    };

    let threshold = template.config.max_image_page_words;
    let mut selected = Vec::new();
    for page_index in section.pages() {
        let word_count = pages.word_count(page_index, template.config.scan_dpi)?;
        if word_count > threshold {
            debug!(page = page_index, word_count, threshold, "rejected dense inspection page");
            continue;
        }
        selected.push(page_index);
    }

    Ok(selected)
}

pub fn capture_inspection_images(
    pages: &mut DocumentPages<'_>,
    section: Option<&Section>,
    template: &CompiledTemplate,
) -> Result<Vec<InspectionImage>, ExtractError> {
    let selected = select_image_pages(pages, section, template)?;

    let mut images = Vec::with_capacity(selected.len());
    for page_index in selected {
        let image_bytes = pages.render_jpeg(page_index, template.config.image_dpi)?;
        images.push(InspectionImage {
            page_number: page_index + 1,
            image_bytes,
        });
    }

    info!(images = images.len(), "captured inspection images");
    Ok(images)
}
