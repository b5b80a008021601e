use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub tables: TablesConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub keys: KeysConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Fallback refresh interval in milliseconds. Change notifications
    /// normally drive refreshes; this bounds staleness when they don't fire.
    pub refresh_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesConfig {
    /// Static mount table declaring the candidate entries.
    pub fstab: PathBuf,
    /// Live mount table reflecting what is currently mounted.
    pub mtab: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Command invoked as `<mount> <mountpoint>`.
    pub mount: String,
    /// Command invoked as `<umount> <mountpoint>`.
    pub umount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeysConfig {
    /// Bind a key that hides / shows the mount list.
    pub enable_list_shortcut: bool,
    /// The key bound when the shortcut is enabled.
    pub toggle_list: char,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            tables:  TablesConfig::default(),
            tools:   ToolsConfig::default(),
            keys:    KeysConfig::default(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { refresh_interval_ms: 2000 }
    }
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            fstab: PathBuf::from("/etc/fstab"),
            mtab:  PathBuf::from("/etc/mtab"),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self { mount: "mount".into(), umount: "umount".into() }
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self { enable_list_shortcut: true, toggle_list: 'm' }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(_) => {
                // Write defaults on first run (best-effort)
                let _ = try_write_defaults();
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mntui").join("mntui.toml"))
    }

    /// The visibility-shortcut key, or None when disabled in config.
    pub fn list_shortcut(&self) -> Option<char> {
        if self.keys.enable_list_shortcut {
            Some(self.keys.toggle_list)
        } else {
            None
        }
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# mntui configuration\n# Generated on first run — edit freely\n\n{}", text))?;
    Ok(())
}
