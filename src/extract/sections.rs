use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub start_page: usize,
    pub end_page: usize,
    pub ended_by: Option<String>,
}

impl Section {
    pub fn pages(&self) -> Range<usize> {
        self.start_page..self.end_page
    }

    pub fn runs_to_end(&self) -> bool {
        self.ended_by.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeadings {
    pub start: String,
    pub end: Vec<String>,
}

pub fn locate_section(
    pages: &mut DocumentPages<'_>,
    headings: &SectionHeadings,
    dpi: u32,
) -> Result<Option<Section>, ExtractError> {
    let page_count = pages.page_count();
    let mut start_page = None;

    for page_index in 0..page_count {
        let lines = pages.lines(page_index, dpi)?;

        let Some(start) = start_page else {
            if page_has_heading(lines, &headings.start) {
                debug!(heading = %headings.start, page = page_index, "section start found");
                start_page = Some(page_index);
            }
            continue;
        };

        if let Some(end_heading) = first_matching_heading(lines, &headings.end) {
            let section = Section {
                start_page: start,
                end_page: page_index,
                ended_by: Some(end_heading.to_string()),
            };
            info!(
                heading = %headings.start,
                start_page = section.start_page,
                end_page = section.end_page,
                ended_by = %end_heading,
                "section located"
            );
            return Ok(Some(section));
        }
    }

    match start_page {
        Some(start_page) => {
            info!(
                heading = %headings.start,
                start_page,
                end_page = page_count,
                "section runs to end of document"
            );
            Ok(Some(Section {
                start_page,
                end_page: page_count,
                ended_by: None,
            }))
        }
        None => {
            info!(heading = %headings.start, page_count, "section heading not found");
            Ok(None)
        }
    }
}
