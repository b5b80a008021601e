use nix::poll::{poll, PollFd, PollFlags};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::os::fd::AsFd;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Background watcher for live mount-table changes.
///
/// The kernel flags a procfs-backed mount table (`/etc/mtab` →
/// `/proc/self/mounts`) with `POLLPRI` whenever a filesystem is mounted or
/// unmounted. Events carry no payload — the consumer re-reads the whole
/// table on each one. Notifications cross a channel drained only by the UI
/// thread, so entry state is never touched from here.
pub struct MountWatch {
    rx:     Receiver<()>,
    stop:   Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl MountWatch {
    pub fn spawn(path: &Path) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        let path = path.to_path_buf();
        let handle = std::thread::spawn(move || watch_loop(&path, tx, &flag));
        Self { rx, stop, handle: Some(handle) }
    }

    #[cfg(test)]
    pub fn from_channel(rx: Receiver<()>) -> Self {
        Self { rx, stop: Arc::new(AtomicBool::new(false)), handle: None }
    }

    /// True if at least one change notification is pending. Drains the whole
    /// backlog — a burst of events needs only one re-read of the live table.
    pub fn take_pending(&self) -> bool {
        let mut any = false;
        while self.rx.try_recv().is_ok() {
            any = true;
        }
        any
    }

    /// Stop the watcher thread. Safe to call repeatedly or when the thread
    /// never started.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

impl Drop for MountWatch {
    fn drop(&mut self) {
        self.stop();
    }
}

fn watch_loop(path: &Path, tx: Sender<()>, stop: &AtomicBool) {
    // No live table, no events — the periodic fallback refresh still runs.
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return,
    };

    // Short poll timeout so the stop flag is re-checked promptly.
    while !stop.load(Ordering::Relaxed) {
        let mut fds = [PollFd::new(
            file.as_fd(),
            PollFlags::POLLPRI | PollFlags::POLLERR,
        )];
        match poll(&mut fds, 500u16) {
            Ok(0) => continue,
            Ok(_) => {
                // Re-read to re-arm the POLLPRI condition before signalling,
                // otherwise poll() returns immediately forever.
                let mut sink = String::new();
                let _ = (&file).seek(SeekFrom::Start(0));
                let _ = (&file).read_to_string(&mut sink);
                if tx.send(()).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}
