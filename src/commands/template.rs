use anyhow::Result;
use tracing::info;

use crate::cli::TemplateArgs;
use crate::extract::TemplateConfig;
use crate::util::write_json_pretty;

pub fn run(args: TemplateArgs) -> Result<()> {
    let template = TemplateConfig::default();
    template.compile()?;

    write_json_pretty(&args.output, &template)?;
    info!(path = %args.output.display(), "wrote default template");
    Ok(())
}
