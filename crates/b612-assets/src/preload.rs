//! Parallel preload with a failure-tolerant join.
//!
//! One thread per manifest entry, results collected over `mpsc`. The
//! join never blocks on a failure: a bad or missing file is logged,
//! recorded, and counted as done, exactly like a load error in a
//! browser loader callback. The caller sees progress reach 100% either
//! way and decides nothing — policy lives with the frontend.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::manifest::AssetSpec;
use crate::sniff;

/// Outcome of the preload join.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreloadReport {
    /// Number of manifest entries.
    pub total: usize,
    /// Entries loaded and format-checked successfully.
    pub loaded: usize,
    /// Paths that failed, with their error strings.
    pub failed: Vec<(String, String)>,
}

impl PreloadReport {
    fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Entries finished so far, successful or not.
    pub fn done(&self) -> usize {
        self.loaded + self.failed.len()
    }

    /// Aggregate progress in percent, rounded like the frontend shows it.
    pub fn progress(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.done() as f64 / self.total as f64) * 100.0).round() as u8
    }

    /// All entries accounted for (failures included).
    pub fn complete(&self) -> bool {
        self.done() >= self.total
    }
}

/// Read one asset and verify its magic bytes. Returns the byte count.
fn load_asset(root: &Path, spec: &AssetSpec) -> io::Result<usize> {
    let data = std::fs::read(root.join(spec.path))?;
    sniff::check_magic(spec.kind, &data)?;
    Ok(data.len())
}

/// Load every manifest entry in parallel and join.
///
/// `on_progress` fires once per finished entry with the report so far,
/// in completion order. The returned report is final.
pub fn preload_all(
    root: &Path,
    manifest: &[AssetSpec],
    mut on_progress: impl FnMut(&PreloadReport),
) -> PreloadReport {
    let mut report = PreloadReport::new(manifest.len());
    if manifest.is_empty() {
        return report;
    }

    let (tx, rx) = mpsc::channel::<(String, io::Result<usize>)>();
    let root: PathBuf = root.to_path_buf();

    let handles: Vec<_> = manifest
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let tx = tx.clone();
            let root = root.clone();
            let spec = spec.clone();
            std::thread::Builder::new()
                .name(format!("b612-preload-{i}"))
                .spawn(move || {
                    let result = load_asset(&root, &spec);
                    let _ = tx.send((spec.path.to_string(), result));
                })
                .expect("Failed to spawn preload thread")
        })
        .collect();
    drop(tx);

    for (path, result) in rx {
        match result {
            Ok(bytes) => {
                log::debug!("preloaded {path} ({bytes} bytes)");
                report.loaded += 1;
            }
            Err(e) => {
                log::warn!("failed to preload {path}: {e}");
                report.failed.push((path, e.to_string()));
            }
        }
        on_progress(&report);
    }

    for handle in handles {
        let _ = handle.join();
    }

    report
}
