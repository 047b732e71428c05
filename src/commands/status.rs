use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::extract::{REQUIRED_TOOLS, ToolStatus, probe_tool};

pub fn run(args: StatusArgs) -> Result<()> {
    let statuses = REQUIRED_TOOLS
        .iter()
        .map(|(program, version_args, hint)| (*program, probe_tool(program, version_args, hint)))
        .collect::<Vec<(&str, ToolStatus)>>();

    for (program, status) in &statuses {
        match status {
            ToolStatus::Available { version } => {
                info!(tool = program, version = %version, "tool available")
            }
            ToolStatus::Unavailable { hint } => {
                warn!(tool = program, hint = %hint, "tool unavailable")
            }
            ToolStatus::Failed { reason } => warn!(tool = program, reason = %reason, "tool failed"),
        }
    }

    if args.json {
        let report = statuses
            .iter()
            .map(|(program, status)| (program.to_string(), status.clone()))
            .collect::<std::collections::BTreeMap<String, ToolStatus>>();
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize tool status")?;
        println!("{rendered}");
    }

    let ready = statuses
        .iter()
        .all(|(_, status)| status.version().is_some());
    info!(ready, "status completed");
    Ok(())
}
