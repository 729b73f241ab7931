use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

/// Files seeded from a sibling `<file>.default` when missing.
pub const DEFAULT_TARGETS: [&str; 4] = [
    ".vscode/settings.json",
    ".vscode/extensions.json",
    ".vscode/launch.json",
    ".env",
];

const DEFAULT_SUFFIX: &str = ".default";

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to inspect {}: {source}", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CopyOutcome {
    Copied { from: PathBuf, to: PathBuf },
    AlreadyPresent(PathBuf),
    NoDefault(PathBuf),
}

fn default_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(DEFAULT_SUFFIX);
    PathBuf::from(name)
}

fn exists(path: &Path) -> Result<bool, SetupError> {
    path.try_exists().map_err(|source| SetupError::Inspect {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy `<root>/<relative>.default` to `<root>/<relative>` unless the target
/// already exists. A missing default is not an error.
pub fn copy_from_default(root: &Path, relative: &str) -> Result<CopyOutcome, SetupError> {
    let target = root.join(relative);
    if exists(&target)? {
        debug!(path = %target.display(), "already present, leaving untouched");
        return Ok(CopyOutcome::AlreadyPresent(target));
    }

    let source = default_path(&target);
    if !exists(&source)? {
        debug!(path = %source.display(), "no default to copy from");
        return Ok(CopyOutcome::NoDefault(source));
    }

    fs::copy(&source, &target).map_err(|err| SetupError::Copy {
        from: source.clone(),
        to: target.clone(),
        source: err,
    })?;
    info!(from = %source.display(), to = %target.display(), "copied default");

    Ok(CopyOutcome::Copied {
        from: source,
        to: target,
    })
}

/// Seed every entry of [`DEFAULT_TARGETS`] under `root`, stopping at the first
/// I/O failure.
pub fn seed_defaults(root: &Path) -> Result<Vec<CopyOutcome>, SetupError> {
    DEFAULT_TARGETS
        .iter()
        .map(|relative| copy_from_default(root, relative))
        .collect()
}
