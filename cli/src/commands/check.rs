use std::path::Path;

use anyhow::Context;
use scopr_common::config::Config;
use scopr_common::debug;
use scopr_common::network::resolution::ResolutionResult;
use scopr_common::network::scope::ScopeList;
use scopr_core::classifier::{self, Classification, ClassificationRecord, Verdict};

use crate::records;
use crate::terminal::events::TerminalSink;

/// Where classification records get appended.
#[derive(Default, Clone, Copy)]
pub struct Outputs<'a> {
    pub keep: Option<&'a Path>,
    pub discard: Option<&'a Path>,
}

/// Ownership metadata for the hostname, obtained by the caller from an
/// external lookup. Attached to every persisted record.
#[derive(Default, Clone, Copy)]
pub struct Registration<'a> {
    pub organization: Option<&'a str>,
    pub registrar: Option<&'a str>,
}

/// Classifies one resolved hostname and persists the outcome.
///
/// An unresolved hostname is reported and ends the run successfully without
/// touching the scope file.
pub fn check(
    ip: &str,
    hostname: &str,
    cidr_file: &Path,
    outputs: Outputs,
    registration: Registration,
    cfg: &Config,
) -> anyhow::Result<()> {
    let resolution = ResolutionResult::parse(hostname, ip)
        .with_context(|| format!("parsing resolved addresses of {}", hostname.trim()))?;

    let scope = if resolution.is_resolved() {
        ScopeList::load(cidr_file)
            .with_context(|| format!("loading scope from {}", cidr_file.display()))?
    } else {
        ScopeList::default()
    };

    let classification = classifier::classify_resolution(&resolution, &scope, cfg.policy);
    classifier::report(&classification, &mut TerminalSink);
    persist(&classification, outputs, registration)
}

fn persist(classification: &Classification, outputs: Outputs, registration: Registration) -> anyhow::Result<()> {
    let lines: Vec<ClassificationRecord> = classification
        .records()
        .into_iter()
        .map(|record| {
            record.with_registration(
                registration.organization.map(str::to_string),
                registration.registrar.map(str::to_string),
            )
        })
        .collect();
    match classification.verdict {
        Verdict::InScope { .. } => {
            if let Some(path) = outputs.keep {
                records::append(path, &lines)?;
            }
        }
        Verdict::OutOfScope => {
            if let Some(path) = outputs.discard {
                debug!(
                    "Writing {} out-of-scope IP(s) to {}",
                    lines.len(),
                    path.display()
                );
                records::append(path, &lines)?;
            }
        }
        Verdict::Unresolved => {}
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
