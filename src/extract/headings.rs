use super::*;

pub fn normalize_heading(text: &str) -> String {
    let upper = collapse_whitespace(text).to_uppercase();
    match upper.strip_suffix(':') {
        Some(stripped) => stripped.to_string(),
        None => upper,
    }
}

pub fn matches_heading(line: &str, heading: &str) -> bool {
    let expected = collapse_whitespace(heading).to_uppercase();
    !expected.is_empty() && normalize_heading(line) == expected
}

pub fn page_has_heading(lines: &[String], heading: &str) -> bool {
    lines.iter().any(|line| matches_heading(line, heading))
}

pub fn first_matching_heading<'h>(lines: &[String], headings: &'h [String]) -> Option<&'h str> {
    headings
        .iter()
        .find(|heading| page_has_heading(lines, heading))
        .map(String::as_str)
}
