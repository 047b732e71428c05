use std::sync::Mutex;

use super::*;

pub struct FakeDocument {
    pages: Vec<String>,
    failing_page: Option<usize>,
    ocr_log: Mutex<Vec<(usize, u32)>>,
    render_log: Mutex<Vec<(usize, u32)>>,
}

impl FakeDocument {
    pub fn new(pages: Vec<&str>) -> Self {
        Self {
            pages: pages.into_iter().map(ToOwned::to_owned).collect(),
            failing_page: None,
            ocr_log: Mutex::new(Vec::new()),
            render_log: Mutex::new(Vec::new()),
        }
    }

    pub fn with_word_counts(heading_page: &str, word_counts: &[usize], end_page: &str) -> Self {
        let mut pages = vec![heading_page.to_string()];
        pages.extend(
            word_counts
                .iter()
                .map(|count| vec!["word"; *count].join(" ")),
        );
        pages.push(end_page.to_string());

        Self {
            pages,
            failing_page: None,
            ocr_log: Mutex::new(Vec::new()),
            render_log: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, page_index: usize) -> Self {
        self.failing_page = Some(page_index);
        self
    }

    pub fn ocr_log(&self) -> Vec<(usize, u32)> {
        self.ocr_log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    pub fn render_log(&self) -> Vec<(usize, u32)> {
        self.render_log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    pub fn max_ocr_page(&self) -> Option<usize> {
        self.ocr_log().iter().map(|(page, _)| *page).max()
    }
}

impl PageSource for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn ocr_text(&self, page_index: usize, dpi: u32) -> Result<String, ExtractError> {
        if let Ok(mut log) = self.ocr_log.lock() {
            log.push((page_index, dpi));
        }
        if self.failing_page == Some(page_index) {
            return Err(ExtractError::PageRender {
                page_number: page_index + 1,
                dpi,
                reason: "scripted failure".to_string(),
            });
        }

        self.pages
            .get(page_index)
            .cloned()
            .ok_or(ExtractError::PageOutOfRange {
                page_index,
                page_count: self.pages.len(),
            })
    }

    fn render_jpeg(&self, page_index: usize, dpi: u32) -> Result<Vec<u8>, ExtractError> {
        if let Ok(mut log) = self.render_log.lock() {
            log.push((page_index, dpi));
        }
        Ok(format!("jpeg:{}:{}", page_index, dpi).into_bytes())
    }
}
