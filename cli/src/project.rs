//! # Project Layout
//!
//! On-disk structure of a reconnaissance project and the scope artifacts
//! written into it for downstream tools.
//!
//! ```text
//! <root>/
//! ├── cidr.txt                  validated scope entries
//! ├── in-scope_ips.txt          scope expanded to single addresses
//! ├── known_in-scope_IPs.txt    a priori known addresses that are in scope
//! ├── amass/config.yml          scope as an address list
//! ├── amass/config.ini          scope in the legacy `cidr=` format
//! ├── crt.sh/ HostHunter/ dnsx-bruteforce/ screenshots/
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use scopr_common::network::scope::ScopeList;
use scopr_core::enumerate::Expansion;
use serde::{Serialize, Serializer};

pub const TOOL_DIRS: &[&str] = &["crt.sh", "amass", "HostHunter", "dnsx-bruteforce", "screenshots"];

pub const CIDR_FILE: &str = "cidr.txt";
pub const IN_SCOPE_IPS_FILE: &str = "in-scope_ips.txt";
pub const KNOWN_IPS_FILE: &str = "known_in-scope_IPs.txt";

pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    pub fn cidr_file(&self) -> PathBuf {
        self.root.join(CIDR_FILE)
    }

    pub fn in_scope_ips_file(&self) -> PathBuf {
        self.root.join(IN_SCOPE_IPS_FILE)
    }

    pub fn known_ips_file(&self) -> PathBuf {
        self.root.join(KNOWN_IPS_FILE)
    }

    pub fn amass_yaml(&self) -> PathBuf {
        self.root.join("amass").join("config.yml")
    }

    pub fn amass_ini(&self) -> PathBuf {
        self.root.join("amass").join("config.ini")
    }

    /// Creates the root and every tool directory. Existing ones are kept.
    pub fn create_dirs(&self) -> anyhow::Result<()> {
        for dir in TOOL_DIRS {
            let path = self.root.join(dir);
            fs::create_dir_all(&path)
                .with_context(|| format!("creating directory {}", path.display()))?;
        }
        Ok(())
    }

    pub fn remove(&self) -> anyhow::Result<()> {
        fs::remove_dir_all(&self.root)
            .with_context(|| format!("removing project directory {}", self.root.display()))
    }
}

#[derive(Serialize)]
struct AmassConfig<'a> {
    scope: AmassScope<'a>,
}

#[derive(Serialize)]
struct AmassScope<'a> {
    ips: AddressList<'a>,
}

/// Serializes an expansion as a sequence without collecting it first.
struct AddressList<'a>(&'a Expansion);

impl Serialize for AddressList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// One scope entry per line.
pub fn write_scope(path: &Path, scope: &ScopeList) -> anyhow::Result<()> {
    let content: String = scope.iter().map(|entry| format!("{entry}\n")).collect();
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

/// Writes one address per line and returns how many were written.
pub fn write_addresses<I>(path: &Path, addresses: I) -> anyhow::Result<u64>
where
    I: IntoIterator<Item = Ipv4Addr>,
{
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_addresses_to(BufWriter::new(file), addresses)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn write_addresses_to<W, I>(mut writer: W, addresses: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Ipv4Addr>,
{
    let mut count = 0;
    for addr in addresses {
        writeln!(writer, "{addr}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// `scope.ips` lists every expanded address.
pub fn write_amass_yaml<W: Write>(writer: W, expansion: &Expansion) -> anyhow::Result<()> {
    let config = AmassConfig {
        scope: AmassScope {
            ips: AddressList(expansion),
        },
    };
    serde_yaml::to_writer(writer, &config).context("serializing amass config")
}

/// Legacy amass configuration. Wildcards have no `cidr=` form and are left out.
pub fn amass_ini(scope: &ScopeList) -> String {
    let mut ini = String::from("[data_sources]\n\n[scope]\n");
    for prefix in scope.prefixes() {
        ini.push_str(&format!("cidr={prefix}\n"));
    }
    ini
}

pub fn write_amass_configs(layout: &ProjectLayout, scope: &ScopeList, expansion: &Expansion) -> anyhow::Result<()> {
    let yaml_path = layout.amass_yaml();
    let file = fs::File::create(&yaml_path).with_context(|| format!("creating {}", yaml_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_amass_yaml(&mut writer, expansion).with_context(|| format!("writing {}", yaml_path.display()))?;
    writer.flush().with_context(|| format!("writing {}", yaml_path.display()))?;

    let ini_path = layout.amass_ini();
    fs::write(&ini_path, amass_ini(scope)).with_context(|| format!("writing {}", ini_path.display()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use scopr_core::enumerate::plan_expansion;
    use scopr_core::events::ScopeEvent;
    use tempfile::tempdir;

    #[test]
    fn layout_paths() {
        let layout = ProjectLayout::new(Path::new("/tmp/acme"));
        assert_eq!(layout.cidr_file(), Path::new("/tmp/acme/cidr.txt"));
        assert_eq!(layout.in_scope_ips_file(), Path::new("/tmp/acme/in-scope_ips.txt"));
        assert_eq!(layout.known_ips_file(), Path::new("/tmp/acme/known_in-scope_IPs.txt"));
        assert_eq!(layout.amass_yaml(), Path::new("/tmp/acme/amass/config.yml"));
        assert_eq!(layout.amass_ini(), Path::new("/tmp/acme/amass/config.ini"));
    }

    #[test]
    fn create_dirs_builds_tool_tree() {
        let dir = tempdir().unwrap();
        let layout = ProjectLayout::new(&dir.path().join("acme"));

        layout.create_dirs().unwrap();

        for tool in TOOL_DIRS {
            assert!(layout.root().join(tool).is_dir(), "{tool} missing");
        }
    }

    #[test]
    fn amass_ini_lists_prefixes_only() {
        let scope = ScopeList::parse("10.0.0.0/24\n*\n192.168.1.5\n", "inline").unwrap();
        assert_eq!(
            amass_ini(&scope),
            "[data_sources]\n\n[scope]\ncidr=10.0.0.0/24\ncidr=192.168.1.5/32\n"
        );
    }

    #[test]
    fn amass_yaml_lists_expanded_addresses() {
        let scope = ScopeList::parse("10.0.0.0/30\n*\n", "inline").unwrap();
        let expansion = plan_expansion(&scope, &mut Vec::<ScopeEvent>::new());
        let mut buf = Vec::new();
        write_amass_yaml(&mut buf, &expansion).unwrap();
        let yaml = String::from_utf8(buf).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let ips: Vec<&str> = value["scope"]["ips"]
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(ips, vec!["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn write_addresses_one_per_line() {
        let mut buf = Vec::new();
        let written = write_addresses_to(&mut buf, [Ipv4Addr::new(1, 2, 3, 4), Ipv4Addr::new(1, 2, 3, 5)]).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "1.2.3.4\n1.2.3.5\n");
    }

    #[test]
    fn write_scope_is_reloadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CIDR_FILE);
        let scope = ScopeList::parse("10.0.0.0/8\n\n*\n172.16.0.1\n", "inline").unwrap();

        write_scope(&path, &scope).unwrap();

        assert_eq!(ScopeList::load(&path).unwrap(), scope);
    }
}
