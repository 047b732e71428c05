use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "scopesum",
    version,
    about = "Scope summary extraction from scanned, signed contracts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
    Locate(LocateArgs),
    Status(StatusArgs),
    Template(TemplateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(long)]
    pub pdf: Option<PathBuf>,

    #[arg(long)]
    pub payload_path: Option<PathBuf>,

    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    #[arg(long)]
    pub template_path: Option<PathBuf>,

    #[arg(long, default_value = "eng")]
    pub ocr_lang: String,

    #[arg(long, default_value_t = false)]
    pub skip_images: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LocateArgs {
    #[arg(long)]
    pub pdf: PathBuf,

    #[arg(long)]
    pub template_path: Option<PathBuf>,

    #[arg(long, default_value = "eng")]
    pub ocr_lang: String,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TemplateArgs {
    #[arg(long, default_value = "scope_template.json")]
    pub output: PathBuf,
}
