use crate::find::{ScanError, list_subdirs};
use camino::{Utf8Path, Utf8PathBuf};
use datafix_types::ErrorPolicy;
use std::fmt::Display;
use tracing::{error, info};

/// Result of running the per-directory closure on one subdirectory.
#[derive(Debug)]
pub struct DirOutcome<T, E> {
    pub dir: Utf8PathBuf,
    pub result: Result<T, E>,
}

/// All outcomes of a dispatch, in directory order.
#[derive(Debug)]
pub struct Dispatch<T, E> {
    pub outcomes: Vec<DirOutcome<T, E>>,
    /// True when [`ErrorPolicy::FailFast`] stopped the run early.
    pub halted: bool,
}

impl<T, E> Dispatch<T, E> {
    pub fn failures(&self) -> impl Iterator<Item = (&Utf8Path, &E)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.dir.as_path(), e)))
    }
}

/// Run `f` on every immediate subdirectory of `root`, in sorted order.
///
/// Failing directories are logged. With [`ErrorPolicy::FailFast`] the first
/// failure ends the run; its outcome is still recorded. Listing `root` itself
/// failing is returned as an error regardless of policy.
pub fn dispatch_subdirs<T, E, F>(
    root: &Utf8Path,
    policy: ErrorPolicy,
    mut f: F,
) -> Result<Dispatch<T, E>, ScanError>
where
    E: Display,
    F: FnMut(&Utf8Path) -> Result<T, E>,
{
    let dirs = list_subdirs(root)?;
    info!(root = %root, dirs = dirs.len(), %policy, "dispatching");

    let mut outcomes = Vec::with_capacity(dirs.len());
    let mut halted = false;

    for dir in dirs {
        info!("{}", dir);
        let result = f(&dir);
        let failed = result.is_err();
        if let Err(e) = &result {
            error!(dir = %dir, "{}", e);
        }
        outcomes.push(DirOutcome { dir, result });

        if failed && policy == ErrorPolicy::FailFast {
            halted = true;
            break;
        }
    }

    Ok(Dispatch { outcomes, halted })
}
