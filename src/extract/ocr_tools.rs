use super::*;

pub trait PageSource: Send + Sync {
    fn page_count(&self) -> usize;

    fn ocr_text(&self, page_index: usize, dpi: u32) -> Result<String, ExtractError>;

    fn render_jpeg(&self, page_index: usize, dpi: u32) -> Result<Vec<u8>, ExtractError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RasterFormat {
    Png,
    Jpeg,
}

impl RasterFormat {
    fn flag(self) -> &'static str {
        match self {
            Self::Png => "-png",
            Self::Jpeg => "-jpeg",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PopplerTesseract {
    pdf_path: PathBuf,
    page_count: usize,
    ocr_lang: String,
}

impl PopplerTesseract {
    pub fn open(pdf_path: &Path, ocr_lang: &str) -> Result<Self, ExtractError> {
        if !pdf_path.is_file() {
            return Err(ExtractError::UnreadableDocument {
                path: pdf_path.display().to_string(),
                reason: "file does not exist".to_string(),
            });
        }

        let page_count = read_page_count(pdf_path)?;
        debug!(path = %pdf_path.display(), page_count, "opened document");

        Ok(Self {
            pdf_path: pdf_path.to_path_buf(),
            page_count,
            ocr_lang: ocr_lang.to_string(),
        })
    }

    pub fn pdf_path(&self) -> &Path {
        &self.pdf_path
    }

    fn rasterize(
        &self,
        page_index: usize,
        dpi: u32,
        format: RasterFormat,
    ) -> Result<PathBuf, ExtractError> {
        let page_number = page_index + 1;
        let output_root = temp_raster_root(&self.pdf_path, page_number, dpi);
        let image_path = PathBuf::from(format!(
            "{}.{}",
            output_root.display(),
            format.extension()
        ));

        let mut command = Command::new("pdftoppm");
        command
            .arg("-f")
            .arg(page_number.to_string())
            .arg("-l")
            .arg(page_number.to_string())
            .arg("-r")
            .arg(dpi.to_string())
            .arg("-singlefile")
            .arg(format.flag())
            .arg(&self.pdf_path)
            .arg(&output_root);
        let output = run_tool("pdftoppm", POPPLER_HINT, &mut command)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::PageRender {
                page_number,
                dpi,
                reason: format!("pdftoppm exited with {}: {}", output.status, stderr.trim()),
            });
        }

        if !image_path.exists() {
            return Err(ExtractError::PageRender {
                page_number,
                dpi,
                reason: "pdftoppm did not produce the expected image".to_string(),
            });
        }

        Ok(image_path)
    }

    fn check_page(&self, page_index: usize) -> Result<(), ExtractError> {
        if page_index >= self.page_count {
            return Err(ExtractError::PageOutOfRange {
                page_index,
                page_count: self.page_count,
            });
        }
        Ok(())
    }
}

impl PageSource for PopplerTesseract {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn ocr_text(&self, page_index: usize, dpi: u32) -> Result<String, ExtractError> {
        self.check_page(page_index)?;
        let png_path = self.rasterize(page_index, dpi, RasterFormat::Png)?;

        let mut command = Command::new("tesseract");
        command
            .arg(&png_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.ocr_lang);
        let result = run_tool("tesseract", TESSERACT_HINT, &mut command);
        let _ = fs::remove_file(&png_path);
        let output = result?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::PageRender {
                page_number: page_index + 1,
                dpi,
                reason: format!("tesseract exited with {}: {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).replace('\u{0000}', ""))
    }

    fn render_jpeg(&self, page_index: usize, dpi: u32) -> Result<Vec<u8>, ExtractError> {
        self.check_page(page_index)?;
        let jpeg_path = self.rasterize(page_index, dpi, RasterFormat::Jpeg)?;
        let bytes = fs::read(&jpeg_path);
        let _ = fs::remove_file(&jpeg_path);
        Ok(bytes?)
    }
}

const POPPLER_HINT: &str = "install poppler-utils";
const TESSERACT_HINT: &str = "install tesseract-ocr";
const POPPLER_VERSION_EXIT_CODE: i32 = 99;

fn run_tool(
    tool: &'static str,
    hint: &str,
    command: &mut Command,
) -> Result<Output, ExtractError> {
    command.output().map_err(|error| {
        if error.kind() == ErrorKind::NotFound {
            ExtractError::ToolUnavailable {
                tool,
                hint: hint.to_string(),
            }
        } else {
            ExtractError::Io(error)
        }
    })
}

fn read_page_count(pdf_path: &Path) -> Result<usize, ExtractError> {
    let mut command = Command::new("pdfinfo");
    command.arg(pdf_path);
    let output = run_tool("pdfinfo", POPPLER_HINT, &mut command)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExtractError::UnreadableDocument {
            path: pdf_path.display().to_string(),
            reason: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .ok_or_else(|| ExtractError::UnreadableDocument {
            path: pdf_path.display().to_string(),
            reason: "pdfinfo reported no page count".to_string(),
        })
}

fn temp_raster_root(pdf_path: &Path, page_number: usize, dpi: u32) -> PathBuf {
    let pdf_stem = pdf_path
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("pdf");
    let safe_stem = pdf_stem
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() {
                character
            } else {
                '_'
            }
        })
        .collect::<String>();

    let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    std::env::temp_dir().join(format!(
        "scopesum_{}_{}_{}_{}_{}",
        safe_stem,
        std::process::id(),
        page_number,
        dpi,
        stamp
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ToolStatus {
    Available { version: String },
    Unavailable { hint: String },
    Failed { reason: String },
}

impl ToolStatus {
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Available { version } => Some(version),
            _ => None,
        }
    }
}

pub const REQUIRED_TOOLS: [(&str, &[&str], &str); 3] = [
    ("pdfinfo", &["-v"], POPPLER_HINT),
    ("pdftoppm", &["-v"], POPPLER_HINT),
    ("tesseract", &["--version"], TESSERACT_HINT),
];

pub fn probe_tool(program: &str, args: &[&str], hint: &str) -> ToolStatus {
    let output = match Command::new(program).args(args).output() {
        Ok(output) => output,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            return ToolStatus::Unavailable {
                hint: hint.to_string(),
            };
        }
        Err(error) => {
            return ToolStatus::Failed {
                reason: error.to_string(),
            };
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let source = if stdout.trim().is_empty() {
        stderr.trim()
    } else {
        stdout.trim()
    };

    let version = source
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .unwrap_or("unknown")
        .to_string();

    if output.status.success() || output.status.code() == Some(POPPLER_VERSION_EXIT_CODE) {
        ToolStatus::Available { version }
    } else {
        ToolStatus::Failed {
            reason: format!("{} exited with {}", program, output.status),
        }
    }
}
