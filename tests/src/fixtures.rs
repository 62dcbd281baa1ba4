use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A scratch directory holding the files a single run reads.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self { dir: TempDir::new()? })
    }

    /// Writes `contents` to `name` inside the fixture and returns its path.
    pub fn file(&self, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Builds an nmap report around the given `<host>` elements.
pub fn nmap_report(hosts: &[&str]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<nmaprun scanner="nmap" args="nmap -sT" version="7.94" xmloutputversion="1.05">
<scaninfo type="connect" protocol="tcp" numservices="1000" services="1-1000"/>
{}
<runstats><finished time="0" summary="done"/><hosts up="1" down="0" total="1"/></runstats>
</nmaprun>
"#,
        hosts.join("\n")
    )
}

/// A `<host>` element with the given state, IPv4 address and open TCP ports.
pub fn nmap_host(state: &str, ipv4: &str, ports: &[u16]) -> String {
    let ports: String = ports
        .iter()
        .map(|port| {
            format!(
                r#"<port protocol="tcp" portid="{port}"><state state="open" reason="syn-ack"/></port>"#
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r#"<host starttime="0" endtime="0"><status state="{state}" reason="syn-ack"/>
<address addr="{ipv4}" addrtype="ipv4"/>
<hostnames/>
<ports>
<extraports state="closed" count="998"/>
{ports}
</ports>
</host>"#
    )
}
