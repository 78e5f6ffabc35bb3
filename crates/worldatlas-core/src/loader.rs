// crates/worldatlas-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer: finding the dataset on disk and opening it.
//! Parsing is delegated to [`crate::normalize`].
//!
//! Two flavours are offered:
//! - **Strict** ([`Atlas::load_from_path`]) returns every I/O and parse
//!   error to the caller.
//! - **Degrading** ([`Atlas::load`]) never fails. It reports what happened
//!   through [`LoadOutcome`] and hands back an empty atlas when there is
//!   nothing usable.

use crate::error::{AtlasError, Result};
use crate::model::Atlas;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name the dataset is published under.
pub const DATASET_FILENAME: &str = "countries_by_continent.json";

/// How many directories above the application directory the fallback
/// copy lives (a development checkout's project root).
pub const FALLBACK_ASCENT: usize = 4;

// -----------------------------------------------------------------------------
// SOURCE RESOLUTION
// -----------------------------------------------------------------------------

/// Where to look for the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocator {
    pub file_name: String,
    pub base_dir: PathBuf,
    pub fallback_ascent: usize,
}

impl SourceLocator {
    /// Probes `base_dir` first, then its ancestor [`FALLBACK_ASCENT`] levels up.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            file_name: DATASET_FILENAME.to_string(),
            base_dir: base_dir.into(),
            fallback_ascent: FALLBACK_ASCENT,
        }
    }

    /// The production locator: rooted at the running executable's directory.
    ///
    /// If the executable path cannot be determined, the working directory
    /// is used instead.
    pub fn beside_executable() -> Self {
        Self::new(app_dir(std::env::current_exe().ok()))
    }

    /// Candidate paths in lookup order: primary, then fallback.
    ///
    /// When `base_dir` has fewer ancestors than `fallback_ascent`, the
    /// topmost one (the filesystem root) is used.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let primary = self.base_dir.join(&self.file_name);
        let fallback_dir = self
            .base_dir
            .ancestors()
            .take(self.fallback_ascent + 1)
            .last()
            .unwrap_or(&self.base_dir);
        let fallback = fallback_dir.join(&self.file_name);

        if fallback == primary {
            vec![primary]
        } else {
            vec![primary, fallback]
        }
    }

    /// First candidate that exists as a regular file.
    pub fn resolve(&self) -> Option<PathBuf> {
        self.candidates().into_iter().find(|p| p.is_file())
    }
}

/// Directory of `exe`, or the absolute working directory without one.
///
/// The base must be absolute so its ancestors reach past the working
/// directory.
fn app_dir(exe: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = exe.as_deref().and_then(Path::parent) {
        return dir.to_path_buf();
    }
    warn!("Could not determine executable directory, using working directory");
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

// -----------------------------------------------------------------------------
// LOAD OUTCOME
// -----------------------------------------------------------------------------

/// What the degrading loader found.
#[derive(Debug)]
pub enum LoadStatus {
    /// Parsed successfully from this file.
    Loaded(PathBuf),
    /// No candidate path held a file.
    Missing { searched: Vec<PathBuf> },
    /// A file was found but could not be read or parsed.
    Failed { path: PathBuf, error: AtlasError },
}

/// The atlas plus a record of where it came from.
///
/// `atlas` is always usable; it is empty unless `status` is `Loaded`.
#[derive(Debug)]
pub struct LoadOutcome {
    pub atlas: Atlas,
    pub status: LoadStatus,
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded(_))
    }

    pub fn source(&self) -> Option<&Path> {
        match &self.status {
            LoadStatus::Loaded(p) | LoadStatus::Failed { path: p, .. } => Some(p.as_path()),
            LoadStatus::Missing { .. } => None,
        }
    }
}

// -----------------------------------------------------------------------------
// LOADING
// -----------------------------------------------------------------------------

impl Atlas {
    /// Directory holding the sample dataset shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DATASET_FILENAME
    }

    /// **Strict Loader:** reads and parses exactly this file.
    ///
    /// A file that cannot be opened is [`AtlasError::NotFound`]; one that
    /// opens but cannot be read as UTF-8 text is [`AtlasError::Io`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AtlasError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        })?;
        let mut json = String::new();
        BufReader::new(file).read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// **Degrading Loader:** resolves the source and never fails.
    pub fn load(locator: &SourceLocator) -> LoadOutcome {
        let Some(path) = locator.resolve() else {
            let searched = locator.candidates();
            warn!(?searched, "Dataset not found, continuing without data");
            return LoadOutcome {
                atlas: Atlas::empty(),
                status: LoadStatus::Missing { searched },
            };
        };

        match Self::load_from_path(&path) {
            Ok(atlas) => {
                let stats = atlas.stats();
                info!(
                    path = %path.display(),
                    continents = stats.continents,
                    countries = stats.countries,
                    "Dataset loaded"
                );
                LoadOutcome {
                    atlas,
                    status: LoadStatus::Loaded(path),
                }
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "Dataset unusable, continuing without data");
                LoadOutcome {
                    atlas: Atlas::empty(),
                    status: LoadStatus::Failed { path, error },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_four_levels_up() {
        let locator = SourceLocator::new("/opt/app/target/x86_64/debug");
        assert_eq!(
            locator.candidates(),
            vec![
                PathBuf::from("/opt/app/target/x86_64/debug/countries_by_continent.json"),
                PathBuf::from("/opt/countries_by_continent.json"),
            ]
        );
    }

    #[test]
    fn shallow_base_falls_back_to_root() {
        let locator = SourceLocator::new("/srv/app");
        assert_eq!(
            locator.candidates()[1],
            PathBuf::from("/countries_by_continent.json")
        );

        let at_root = SourceLocator::new("/");
        assert_eq!(at_root.candidates().len(), 1);
    }

    #[test]
    fn strict_load_reports_missing_file() {
        let err = Atlas::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, AtlasError::NotFound(_)));
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATASET_FILENAME);
        std::fs::write(&path, [b'{', 0xff, 0xfe, b'}']).unwrap();

        let err = Atlas::load_from_path(&path).unwrap_err();
        assert!(matches!(err, AtlasError::Io(_)), "got {err:?}");
    }

    #[test]
    fn missing_executable_uses_absolute_working_dir() {
        let base = app_dir(None);
        assert!(base.is_absolute());
        assert_eq!(base, std::env::current_dir().unwrap());
        assert_eq!(
            app_dir(Some(PathBuf::from("/opt/app/bin/worldatlas"))),
            PathBuf::from("/opt/app/bin")
        );
    }

    #[test]
    fn bundled_sample_loads() {
        let path = Atlas::default_data_dir().join(Atlas::default_dataset_filename());
        let atlas = Atlas::load_from_path(path).unwrap();
        assert!(!atlas.is_empty());
    }
}
