use crate::config::Config;
use crate::models::entry::MountEntry;
use crate::watch::MountWatch;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Source of truth for which mount points the user may toggle and whether
/// each one is currently mounted.
///
/// The entry list is built once from the static table and never changes at
/// runtime; only the `mounted` flags are mutated — authoritatively by
/// `refresh()`, optimistically by `toggle()`. All mutation happens on the
/// UI thread, the watcher only signals over a channel.
pub struct Catalog {
    pub entries: Vec<MountEntry>,
    mtab_path:  PathBuf,
    mount_cmd:  String,
    umount_cmd: String,
    watch:      Option<MountWatch>,
}

impl Catalog {
    pub fn new(cfg: &Config) -> Self {
        let mut cat = Self {
            entries:    load_entries(&cfg.tables.fstab),
            mtab_path:  cfg.tables.mtab.clone(),
            mount_cmd:  cfg.tools.mount.clone(),
            umount_cmd: cfg.tools.umount.clone(),
            watch:      None,
        };
        cat.refresh();
        cat
    }

    /// Re-read the live mount table and overwrite every `mounted` flag.
    /// An unreadable live table leaves prior flags untouched.
    pub fn refresh(&mut self) {
        if let Ok(live) = std::fs::read_to_string(&self.mtab_path) {
            apply_live(&mut self.entries, &live);
        }
    }

    /// Mount or unmount the entry at `idx` and flip its flag immediately,
    /// without waiting on the spawned tool. A failed mount/unmount leaves
    /// the flag wrong until the next live-table refresh overwrites it.
    pub fn toggle(&mut self, idx: usize) {
        let Some(entry) = self.entries.get_mut(idx) else { return };
        let tool = if entry.mounted { &self.umount_cmd } else { &self.mount_cmd };
        spawn_tool(tool, &entry.mount_point);
        entry.mounted = !entry.mounted;
    }

    /// Start the mount-change watcher. No-op when already watching.
    pub fn start_watching(&mut self) {
        if self.watch.is_none() {
            self.watch = Some(MountWatch::spawn(&self.mtab_path));
        }
    }

    /// Tear the watcher down. Safe to call repeatedly or when never started.
    pub fn stop_watching(&mut self) {
        if let Some(mut w) = self.watch.take() {
            w.stop();
        }
    }

    /// Drain pending change notifications; if any arrived, re-read the live
    /// table once. Returns true when the displayed list should rebuild.
    pub fn drain_events(&mut self) -> bool {
        let pending = self.watch.as_ref().is_some_and(|w| w.take_pending());
        if pending {
            self.refresh();
        }
        pending
    }

    pub fn mounted_count(&self) -> usize {
        self.entries.iter().filter(|e| e.mounted).count()
    }
}

fn load_entries(path: &Path) -> Vec<MountEntry> {
    // An unreadable static table means an empty catalog, not an error.
    match std::fs::read_to_string(path) {
        Ok(content) => parse_fstab(&content),
        Err(_) => Vec::new(),
    }
}

/// A line qualifies only with exactly six whitespace-separated fields and an
/// options field containing both `noauto` and `user` as substrings.
/// Substring, not token, match: an options field like `noauto,nouser` also
/// passes the `user` check. File order is preserved; duplicate mount points
/// are not de-duplicated.
pub fn parse_fstab(content: &str) -> Vec<MountEntry> {
    let mut out = Vec::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 6 {
            continue;
        }
        if !(fields[3].contains("noauto") && fields[3].contains("user")) {
            continue;
        }
        out.push(MountEntry {
            device:      fields[0].to_string(),
            mount_point: fields[1].to_string(),
            fs_type:     fields[2].to_string(),
            options:     fields[3].to_string(),
            mounted:     false,
        });
    }
    out
}

/// An entry is mounted iff its mount point appears anywhere in the raw
/// live-table text. Whole-file substring search, not per-line parsing:
/// `/mnt/data` also matches inside `/mnt/data2`.
pub fn apply_live(entries: &mut [MountEntry], live: &str) {
    for e in entries.iter_mut() {
        e.mounted = live.contains(&e.mount_point);
    }
}

/// Fire-and-forget: no output capture, no exit-status check. A spawn
/// failure (missing binary, permissions) is invisible here.
fn spawn_tool(tool: &str, mount_point: &str) {
    let _ = Command::new(tool)
        .arg(mount_point)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::{Duration, Instant};

    const TABLE: &str = "\
/dev/sdb1 /mnt/usb ext4 noauto,user 0 0
/dev/sda1 / ext4 defaults 0 1
UUID=ab12 /mnt/backup xfs noauto,user,ro 0 0
";

    fn test_config(dir: &tempfile::TempDir, fstab: &str, mtab: &str) -> Config {
        let fstab_path = dir.path().join("fstab");
        let mtab_path = dir.path().join("mtab");
        std::fs::write(&fstab_path, fstab).unwrap();
        std::fs::write(&mtab_path, mtab).unwrap();
        let mut cfg = Config::default();
        cfg.tables.fstab = fstab_path;
        cfg.tables.mtab = mtab_path;
        cfg.tools.mount = "true".into();
        cfg.tools.umount = "true".into();
        cfg
    }

    // ── parse_fstab ───────────────────────────────────────────────────

    #[test]
    fn options_filter_selects_noauto_user_lines() {
        let entries = parse_fstab(TABLE);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].device, "/dev/sdb1");
        assert_eq!(entries[0].mount_point, "/mnt/usb");
        assert_eq!(entries[1].device, "UUID=ab12");
        assert_eq!(entries[1].mount_point, "/mnt/backup");
        assert!(entries.iter().all(|e| !e.mounted));
    }

    #[test]
    fn field_count_must_be_exactly_six() {
        let five = "/dev/sdb1 /mnt/usb ext4 noauto,user 0";
        let seven = "/dev/sdb1 /mnt/usb ext4 noauto,user 0 0 extra";
        assert!(parse_fstab(five).is_empty());
        assert!(parse_fstab(seven).is_empty());
    }

    #[test]
    fn both_option_tokens_required() {
        assert!(parse_fstab("/dev/sdb1 /mnt/usb ext4 noauto 0 0").is_empty());
        assert!(parse_fstab("/dev/sdb1 /mnt/usb ext4 user 0 0").is_empty());
    }

    #[test]
    fn substring_match_accepts_nouser() {
        // "nouser" contains "user" — the permissive filter keeps the line.
        let entries = parse_fstab("/dev/sdb1 /mnt/usb ext4 noauto,nouser 0 0");
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn empty_and_comment_lines_skipped() {
        let content = "\n# /dev/sdb1 /mnt/usb ext4 noauto,user 0\n";
        assert!(parse_fstab(content).is_empty());
    }

    #[test]
    fn file_order_preserved_with_n_lines() {
        let mut content = String::new();
        for i in 0..5 {
            content.push_str(&format!("/dev/sd{i} /mnt/d{i} ext4 noauto,user 0 0\n"));
        }
        let entries = parse_fstab(&content);
        assert_eq!(entries.len(), 5);
        for (i, e) in entries.iter().enumerate() {
            assert_eq!(e.mount_point, format!("/mnt/d{i}"));
        }
    }

    #[test]
    fn duplicate_mount_points_both_kept() {
        let content = "\
/dev/sdb1 /mnt/usb ext4 noauto,user 0 0
/dev/sdc1 /mnt/usb vfat noauto,user 0 0
";
        let entries = parse_fstab(content);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].device, "/dev/sdb1");
        assert_eq!(entries[1].device, "/dev/sdc1");
    }

    // ── apply_live ────────────────────────────────────────────────────

    #[test]
    fn live_substring_sets_and_clears_mounted() {
        let mut entries = parse_fstab("/dev/sdb1 /mnt/data ext4 noauto,user 0 0");
        apply_live(&mut entries, "/dev/sdb1 /mnt/data ext4 rw 0 0\n");
        assert!(entries[0].mounted);
        apply_live(&mut entries, "/dev/sda1 / ext4 rw 0 0\n");
        assert!(!entries[0].mounted);
    }

    #[test]
    fn live_match_is_raw_substring_not_per_field() {
        // /mnt/data appears inside /mnt/data2 — a known false positive.
        let mut entries = parse_fstab("/dev/sdb1 /mnt/data ext4 noauto,user 0 0");
        apply_live(&mut entries, "/dev/sdc1 /mnt/data2 ext4 rw 0 0\n");
        assert!(entries[0].mounted);
    }

    // ── Catalog ───────────────────────────────────────────────────────

    #[test]
    fn unreadable_fstab_yields_empty_catalog() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut cfg = test_config(&dir, "", "");
        cfg.tables.fstab = dir.path().join("missing-fstab");
        let cat = Catalog::new(&cfg);
        assert!(cat.entries.is_empty());
    }

    #[test]
    fn initial_state_comes_from_live_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = test_config(&dir, TABLE, "/dev/sdb1 /mnt/usb ext4 rw 0 0\n");
        let cat = Catalog::new(&cfg);
        assert!(cat.entries[0].mounted);
        assert!(!cat.entries[1].mounted);
        assert_eq!(cat.mounted_count(), 1);
    }

    #[test]
    fn unreadable_mtab_keeps_prior_flags() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = test_config(&dir, TABLE, "/dev/sdb1 /mnt/usb ext4 rw 0 0\n");
        let mut cat = Catalog::new(&cfg);
        assert!(cat.entries[0].mounted);
        std::fs::remove_file(&cfg.tables.mtab).unwrap();
        cat.refresh();
        assert!(cat.entries[0].mounted);
    }

    #[test]
    fn toggle_flips_optimistically_both_ways() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = test_config(&dir, TABLE, "");
        let mut cat = Catalog::new(&cfg);
        assert!(!cat.entries[0].mounted);
        cat.toggle(0);
        assert!(cat.entries[0].mounted);
        cat.toggle(0);
        assert!(!cat.entries[0].mounted);
        // Out-of-range index is ignored.
        cat.toggle(99);
    }

    #[test]
    fn toggle_invokes_tool_with_mount_point_as_sole_argument() {
        // Using `touch` as the mount tool: the spawned process creates a
        // file at the mount-point path, proving both the tool choice and
        // its single argument.
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("mnt-target");
        let fstab = format!("/dev/sdz1 {} ext4 noauto,user 0 0\n", target.display());
        let mut cfg = test_config(&dir, &fstab, "");
        cfg.tools.mount = "touch".into();
        let mut cat = Catalog::new(&cfg);
        cat.toggle(0);
        assert!(cat.entries[0].mounted);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !target.exists() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
        }
        assert!(target.exists());
    }

    #[test]
    fn refresh_overwrites_optimistic_flip() {
        // The authoritative live table wins over a failed toggle.
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = test_config(&dir, TABLE, "");
        let mut cat = Catalog::new(&cfg);
        cat.toggle(0);
        assert!(cat.entries[0].mounted);
        cat.refresh();
        assert!(!cat.entries[0].mounted);
    }

    #[test]
    fn one_notification_one_refresh_one_rebuild_signal() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = test_config(&dir, TABLE, "");
        let mut cat = Catalog::new(&cfg);
        let (tx, rx) = mpsc::channel();
        cat.watch = Some(MountWatch::from_channel(rx));

        std::fs::write(&cfg.tables.mtab, "/dev/sdb1 /mnt/usb ext4 rw 0 0\n").unwrap();
        tx.send(()).unwrap();

        assert!(cat.drain_events());
        assert!(cat.entries[0].mounted);
        // No further events — no refresh, no rebuild.
        assert!(!cat.drain_events());
    }

    #[test]
    fn drain_without_watcher_is_quiet() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = test_config(&dir, TABLE, "");
        let mut cat = Catalog::new(&cfg);
        assert!(!cat.drain_events());
        cat.stop_watching();
        cat.stop_watching();
    }
}
