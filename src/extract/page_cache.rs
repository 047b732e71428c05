use super::*;

pub struct DocumentPages<'a> {
    source: &'a dyn PageSource,
    lines: HashMap<(usize, u32), Vec<String>>,
    ocr_calls: usize,
    render_calls: usize,
}

impl<'a> DocumentPages<'a> {
    pub fn new(source: &'a dyn PageSource) -> Self {
        Self {
            source,
            lines: HashMap::new(),
            ocr_calls: 0,
            render_calls: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.source.page_count()
    }

    pub fn lines(&mut self, page_index: usize, dpi: u32) -> Result<&[String], ExtractError> {
        let key = (page_index, dpi);
        if !self.lines.contains_key(&key) {
            self.check_page(page_index)?;
            self.ocr_calls += 1;
            let text = self.source.ocr_text(page_index, dpi)?;
            let lines = normalize_ocr_lines(&text);
            debug!(page = page_index, dpi, lines = lines.len(), "ocr page");
            self.lines.insert(key, lines);
        }

        Ok(self.lines.get(&key).map(Vec::as_slice).unwrap_or_default())
    }

    pub fn upper_text(&mut self, page_index: usize, dpi: u32) -> Result<String, ExtractError> {
        Ok(self.lines(page_index, dpi)?.join("\n").to_uppercase())
    }

    pub fn word_count(&mut self, page_index: usize, dpi: u32) -> Result<usize, ExtractError> {
        Ok(self
            .lines(page_index, dpi)?
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum())
    }

    pub fn render_jpeg(&mut self, page_index: usize, dpi: u32) -> Result<Vec<u8>, ExtractError> {
        self.check_page(page_index)?;
        self.render_calls += 1;
        self.source.render_jpeg(page_index, dpi)
    }

    #[cfg(test)]
    pub fn is_cached(&self, page_index: usize, dpi: u32) -> bool {
        self.lines.contains_key(&(page_index, dpi))
    }

    pub fn ocr_calls(&self) -> usize {
        self.ocr_calls
    }

    pub fn render_calls(&self) -> usize {
        self.render_calls
    }

    fn check_page(&self, page_index: usize) -> Result<(), ExtractError> {
        let page_count = self.page_count();
        if page_index >= page_count {
            return Err(ExtractError::PageOutOfRange {
                page_index,
                page_count,
            });
        }
        Ok(())
    }
}

pub fn normalize_ocr_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<&str>>().join(" ")
}
