use anyhow::{Context, Result};
use tracing::info;

use crate::cli::LocateArgs;
use crate::extract::{
    DocumentPages, PageSource, PopplerTesseract, TemplateConfig, extract_total, locate_section,
};

pub fn run(args: LocateArgs) -> Result<()> {
    let template = TemplateConfig::load_or_default(args.template_path.as_deref())?
        .compile()
        .context("failed to compile template")?;
    let document = PopplerTesseract::open(&args.pdf, &args.ocr_lang)
        .with_context(|| format!("failed to open {}", args.pdf.display()))?;

    info!(
        path = %document.pdf_path().display(),
        page_count = document.page_count(),
        "locating sections"
    );

    let mut pages = DocumentPages::new(&document);
    let dpi = template.config.scan_dpi;

    let line_items = locate_section(&mut pages, &template.config.line_items, dpi)
        .context("failed to locate line-item section")?;
    let inspection = locate_section(&mut pages, &template.config.inspection, dpi)
        .context("failed to locate inspection section")?;
    let total = match &line_items {
        Some(section) => extract_total(&mut pages, Some(section.start_page), &template)
            .context("failed to extract total")?,
        None => None,
    };

    match &line_items {
        Some(section) => info!(
            start_page = section.start_page + 1,
            end_page = section.end_page,
            ended_by = section.ended_by.as_deref().unwrap_or("end of document"),
            "line-item section"
        ),
        None => info!("line-item section absent"),
    }
    match &inspection {
        Some(section) => info!(
            start_page = section.start_page + 1,
            end_page = section.end_page,
            ended_by = section.ended_by.as_deref().unwrap_or("end of document"),
            "inspection section"
        ),
        None => info!("inspection section absent"),
    }
    match &total {
        Some(total) => info!(
            amount = total.amount,
            page = total.page_index + 1,
            pattern = %total.pattern,
            from_fallback = total.from_fallback,
            "contract total"
        ),
        None => info!("contract total absent"),
    }

    info!(ocr_calls = pages.ocr_calls(), "locate completed");
    Ok(())
}
