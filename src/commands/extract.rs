use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use crate::cli::ExtractArgs;
use crate::extract::{
    InspectionImage, PageSource, PopplerTesseract, REQUIRED_TOOLS, TemplateConfig, ToolStatus,
    probe_tool,
};
use crate::model::{
    ExtractionCounts, ImageRecord, ItemCategory, ItemSource, Payload, ScopeSummaryManifest,
};
use crate::pipeline::{ScopeSummary, run_pipeline};
use crate::util::{
    ensure_directory, now_utc_string, read_json, sha256_file, utc_compact_string, write_bytes,
    write_json_pretty,
};

pub fn run(args: ExtractArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("run-{}", utc_compact_string(started_ts));

    let template = TemplateConfig::load_or_default(args.template_path.as_deref())?
        .compile()
        .context("failed to compile template")?;

    let payload = match &args.payload_path {
        Some(path) => read_json::<Payload>(path)?,
        None => Payload::default(),
    };

    ensure_directory(&args.output_dir)?;
    info!(run_id = %run_id, output_dir = %args.output_dir.display(), "starting extraction");

    let document = match &args.pdf {
        Some(path) => Some(
            PopplerTesseract::open(path, &args.ocr_lang)
                .with_context(|| format!("failed to open {}", path.display()))?,
        ),
        None => None,
    };
    let source_sha256 = args.pdf.as_deref().map(sha256_file).transpose()?;

    let summary = run_pipeline(
        payload,
        document.as_ref().map(|document| document as &dyn PageSource),
        &template,
        !args.skip_images,
    )
    .map_err(|error| {
        let kind = error.kind();
        anyhow::Error::new(error).context(format!("extraction failed ({})", kind.as_str()))
    })?;

    log_category_counts(&summary);

    let images = write_images(&args.output_dir, &summary.images)?;
    let warnings = collect_warnings(&summary, document.is_some(), args.skip_images);
    for warning in &warnings {
        warn!(warning = %warning, "extraction warning");
    }

    let manifest = ScopeSummaryManifest {
        manifest_version: 1,
        run_id: run_id.clone(),
        started_at,
        completed_at: now_utc_string(),
        source_pdf: args.pdf.as_ref().map(|path| path.display().to_string()),
        source_sha256,
        tool_versions: collect_tool_versions(),
        counts: ExtractionCounts {
            page_count: summary.page_count,
            ocr_calls: summary.ocr_calls,
            render_calls: summary.render_calls,
            item_count: summary.items.len(),
            image_count: images.len(),
        },
        project: summary.project,
        item_source: summary.item_source,
        line_item_section: summary.line_item_section,
        inspection_section: summary.inspection_section,
        extracted_total: summary.extracted_total,
        items: summary.items,
        images,
        contract_total: summary.contract_total,
        warnings,
    };

    let manifest_path = args
        .output_dir
        .join(format!("scope_summary_{}.json", utc_compact_string(started_ts)));
    write_json_pretty(&manifest_path, &manifest)?;

    info!(path = %manifest_path.display(), "wrote scope summary manifest");
    info!(
        run_id = %run_id,
        items = manifest.counts.item_count,
        images = manifest.counts.image_count,
        contract_total = manifest.contract_total,
        "extraction completed"
    );

    Ok(())
}

fn write_images(output_dir: &Path, images: &[InspectionImage]) -> Result<Vec<ImageRecord>> {
    let mut records = Vec::with_capacity(images.len());
    for image in images {
        let path = output_dir.join(format!("inspection_page_{:03}.jpg", image.page_number));
        write_bytes(&path, &image.image_bytes)?;
        records.push(ImageRecord {
            page_number: image.page_number,
            path: path.display().to_string(),
            byte_len: image.image_bytes.len(),
        });
    }
    Ok(records)
}

fn log_category_counts(summary: &ScopeSummary) {
    for category in [
        ItemCategory::Warranty,
        ItemCategory::Standard,
        ItemCategory::ExtraWork,
    ] {
        let count = summary
            .items
            .iter()
            .filter(|item| item.category == category)
            .count();
        if count > 0 {
            info!(section = category.title(), count, "report section");
        }
    }
}

fn collect_warnings(summary: &ScopeSummary, has_document: bool, skip_images: bool) -> Vec<String> {
    let mut warnings = Vec::new();
    if !has_document {
        warnings.push("no source document supplied; summary uses payload data only".to_string());
        return warnings;
    }

    if summary.item_source == ItemSource::NoItems {
        warnings.push("no line items in payload or document".to_string());
    }
    if summary.item_source == ItemSource::Extracted && summary.extracted_total.is_none() {
        warnings.push("no contract total found; price view sums item prices".to_string());
    }
    if summary.inspection_section.is_none() {
        warnings.push("no inspection section detected".to_string());
    } else if summary.images.is_empty() && !skip_images {
        warnings.push("inspection section contained no photo pages".to_string());
    }
    warnings
}

fn collect_tool_versions() -> BTreeMap<String, ToolStatus> {
    REQUIRED_TOOLS
        .iter()
        .map(|(program, version_args, hint)| {
            (program.to_string(), probe_tool(program, version_args, hint))
        })
        .collect()
}
