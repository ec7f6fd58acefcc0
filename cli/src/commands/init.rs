use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use colored::*;
use scopr_common::config::Config;
use scopr_common::network::scope::ScopeList;
use scopr_common::{info, success};
use scopr_core::enumerate;

use crate::commands::filter;
use crate::project::{self, ProjectLayout};
use crate::terminal::events::TerminalSink;
use crate::terminal::colors;
use crate::terminal::print::Panel;

pub struct InitOptions {
    pub cidr_file: Option<PathBuf>,
    pub known_ips: Option<PathBuf>,
    pub force: bool,
    pub resume: bool,
}

struct Summary {
    entries: usize,
    addresses: u64,
    known: Option<(usize, usize)>,
}

/// Creates (or refreshes) a project directory and writes every scope artifact.
pub fn init(directory: &Path, options: InitOptions, cfg: &Config) -> anyhow::Result<()> {
    let layout = ProjectLayout::new(directory);

    let cidr_source = prepare(&layout, &options)?;
    let scope = ScopeList::load(&cidr_source)
        .with_context(|| format!("loading scope from {}", cidr_source.display()))?;

    if !same_file(&cidr_source, &layout.cidr_file()) {
        project::write_scope(&layout.cidr_file(), &scope)?;
    }

    let expansion = enumerate::plan_expansion(&scope, &mut TerminalSink);
    let addresses = project::write_addresses(&layout.in_scope_ips_file(), expansion.iter())?;

    let known = match known_source(&layout, &options) {
        Some(path) => {
            let partition = filter::partition_file(&path, &scope)?;
            project::write_addresses(&layout.known_ips_file(), partition.in_scope.iter().copied())?;
            Some((partition.in_scope.len(), partition.out_of_scope.len()))
        }
        None => None,
    };

    project::write_amass_configs(&layout, &scope, &expansion)?;

    let summary = Summary {
        entries: scope.len(),
        addresses,
        known,
    };
    print_summary(&layout, &summary, cfg.quiet);
    Ok(())
}

/// Readies the directory tree and returns the scope file to read.
fn prepare(layout: &ProjectLayout, options: &InitOptions) -> anyhow::Result<PathBuf> {
    if options.resume {
        let existing = layout.cidr_file();
        if !existing.is_file() {
            bail!(
                "cannot resume: {} has no {}",
                layout.root().display(),
                project::CIDR_FILE
            );
        }
        layout.create_dirs()?;
        return Ok(options.cidr_file.clone().unwrap_or(existing));
    }

    let Some(cidr_file) = options.cidr_file.clone() else {
        bail!("a scope file is required unless resuming");
    };

    if layout.exists() {
        if !options.force {
            bail!(
                "{} already exists, use --force to recreate it or --resume to reuse it",
                layout.root().display()
            );
        }
        let inputs = std::iter::once(&cidr_file).chain(options.known_ips.as_ref());
        for input in inputs {
            if is_within(input, layout.root()) {
                bail!(
                    "{} lives inside {} and would be removed by --force",
                    input.display(),
                    layout.root().display()
                );
            }
        }
        info!("Removing existing project at {}", layout.root().display());
        layout.remove()?;
    }

    layout.create_dirs()?;
    Ok(cidr_file)
}

fn known_source(layout: &ProjectLayout, options: &InitOptions) -> Option<PathBuf> {
    if let Some(path) = &options.known_ips {
        return Some(path.clone());
    }
    let existing = layout.known_ips_file();
    (options.resume && existing.is_file()).then_some(existing)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn is_within(path: &Path, root: &Path) -> bool {
    match (fs::canonicalize(path), fs::canonicalize(root)) {
        (Ok(path), Ok(root)) => path.starts_with(root),
        _ => false,
    }
}

fn print_summary(layout: &ProjectLayout, summary: &Summary, q_level: u8) {
    success!(
        "Wrote a total of {} IPs to {} for a total of {} CIDRs",
        summary.addresses,
        project::IN_SCOPE_IPS_FILE,
        summary.entries
    );
    if let Some((kept, removed)) = summary.known {
        success!("{kept} known IPs in scope, {removed} removed");
    }

    if q_level > 0 {
        return;
    }

    let mut panel = Panel::new("Project ready")
        .row("Root", layout.root().display().to_string().color(colors::PRIMARY))
        .row("Scope entries", summary.entries.to_string().color(colors::IPV4_PREFIX))
        .row("Addresses", summary.addresses.to_string().color(colors::IPV4_ADDR));
    if let Some((kept, _)) = summary.known {
        panel = panel.row("Known in scope", kept.to_string().normal());
    }
    panel.print();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
