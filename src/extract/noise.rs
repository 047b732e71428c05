use super::*;

#[derive(Debug, Clone, Default)]
pub struct NoiseFilter {
    labels: HashSet<String>,
    organization_prefix: Option<String>,
}

impl NoiseFilter {
    pub fn new(labels: &[String], organization_prefix: Option<&str>) -> Self {
        Self {
            labels: labels
                .iter()
                .map(|label| normalize_label(label))
                .filter(|label| !label.is_empty())
                .collect(),
            organization_prefix: organization_prefix
                .map(normalize_label)
                .filter(|prefix| !prefix.is_empty()),
        }
    }

    pub fn is_noise(&self, line: &str) -> bool {
        let label = normalize_label(line);
        if self.labels.contains(&label) {
            return true;
        }

        self.organization_prefix
            .as_deref()
            .is_some_and(|prefix| label.starts_with(prefix))
    }

    pub fn filter(&self, lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .filter(|line| !self.is_noise(line))
            .cloned()
            .collect()
    }
}

fn normalize_label(text: &str) -> String {
    collapse_whitespace(text)
        .to_uppercase()
        .trim_matches(':')
        .trim()
        .to_string()
}

pub fn section_lines(
    pages: &mut DocumentPages<'_>,
    section: &Section,
    dpi: u32,
) -> Result<Vec<String>, ExtractError> {
    let mut lines = Vec::new();
    for page_index in section.pages() {
        lines.extend(pages.lines(page_index, dpi)?.iter().cloned());
    }
    Ok(lines)
}
