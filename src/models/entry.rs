/// One user-mountable fstab declaration with its cached live state.
///
/// `mounted` is a projection of the live mount table at the last refresh —
/// it can be briefly stale between a system mount event and the next re-read,
/// and it is flipped optimistically on a local toggle.
#[derive(Debug, Clone)]
pub struct MountEntry {
    pub device:      String,
    pub mount_point: String,
    pub fs_type:     String,
    pub options:     String,
    pub mounted:     bool,
}

impl MountEntry {
    pub fn state_label(&self) -> &'static str {
        if self.mounted { "mounted" } else { "unmounted" }
    }

    /// Short device name ("sdb1" from "/dev/sdb1"); UUID/LABEL refs unchanged.
    pub fn short_device(&self) -> &str {
        self.device.trim_start_matches("/dev/")
    }
}
