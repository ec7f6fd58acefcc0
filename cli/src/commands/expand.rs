use std::io;
use std::path::Path;

use anyhow::Context;
use scopr_common::network::scope::ScopeList;
use scopr_common::success;
use scopr_core::enumerate;

use crate::project;
use crate::terminal::events::TerminalSink;

/// Writes every in-scope address, one per line, to `output` or stdout.
pub fn expand(cidr_file: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let scope = ScopeList::load(cidr_file)
        .with_context(|| format!("loading scope from {}", cidr_file.display()))?;

    let expansion = enumerate::plan_expansion(&scope, &mut TerminalSink);

    match output {
        Some(path) => {
            let written = project::write_addresses(path, expansion.iter())?;
            success!(
                "Wrote a total of {} IPs to {} for a total of {} CIDRs",
                written,
                path.display(),
                scope.len()
            );
        }
        None => {
            project::write_addresses_to(io::stdout().lock(), expansion.iter())
                .context("writing addresses to stdout")?;
        }
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
