//! Skyline service
//!
//! Reads building lists from files or inline text and builds skylines from them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{parse_building, Building, Skyline};
use crate::infrastructure::traits::FileSystem;

/// The seven buildings of the classic demo scene.
pub const SAMPLE_BUILDINGS: [Building; 7] = [
    Building::new(1.0, 4.0, 1.0),
    Building::new(2.0, 3.0, 2.0),
    Building::new(7.0, 8.0, 1.5),
    Building::new(5.5, 6.5, 1.0),
    Building::new(5.0, 7.0, 3.0),
    Building::new(3.5, 6.0, 1.5),
    Building::new(6.0, 9.0, 0.5),
];

/// Service for turning building input into skylines.
pub struct SkylineService {
    fs: Arc<dyn FileSystem>,
}

impl SkylineService {
    /// Create a new skyline service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Parse building lines from `content`.
    ///
    /// One building per line in the form `[start,end,height]`. Blank lines
    /// and lines starting with `#` are skipped, surrounding whitespace is
    /// ignored. The first bad line aborts with its 1-based line number.
    pub fn parse_source(&self, origin: &str, content: &str) -> ApplicationResult<Vec<Building>> {
        let mut buildings = Vec::new();

        for (n, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let building =
                parse_building(trimmed).map_err(|source| ApplicationError::InvalidInput {
                    origin: origin.to_string(),
                    line: n + 1,
                    source,
                })?;
            buildings.push(building);
        }

        debug!("parse_source: {} buildings from {}", buildings.len(), origin);
        Ok(buildings)
    }

    /// Read and parse a building file.
    #[instrument(level = "debug", skip(self))]
    pub fn load_file(&self, path: &Path) -> ApplicationResult<Vec<Building>> {
        if !self.fs.exists(path) || !self.fs.is_file(path) {
            return Err(ApplicationError::InputNotFound(path.to_path_buf()));
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read buildings", path)?;
        self.parse_source(&path.display().to_string(), &content)
    }

    /// Parse buildings given one per argument.
    pub fn parse_inline(&self, inline: &[String]) -> ApplicationResult<Vec<Building>> {
        inline
            .iter()
            .enumerate()
            .map(|(n, text)| {
                parse_building(text.trim()).map_err(|source| ApplicationError::InvalidInput {
                    origin: "argument".to_string(),
                    line: n + 1,
                    source,
                })
            })
            .collect()
    }

    /// Buildings from all `files` in order, followed by the `inline` ones.
    #[instrument(level = "debug", skip(self))]
    pub fn collect(&self, files: &[PathBuf], inline: &[String]) -> ApplicationResult<Vec<Building>> {
        let mut buildings = Vec::new();
        for file in files {
            buildings.extend(self.load_file(file)?);
        }
        buildings.extend(self.parse_inline(inline)?);
        Ok(buildings)
    }

    /// A fresh skyline with every building inserted.
    #[instrument(level = "debug", skip_all)]
    pub fn build<I>(&self, buildings: I) -> Skyline
    where
        I: IntoIterator<Item = Building>,
    {
        let skyline: Skyline = buildings.into_iter().collect();
        info!(
            "built skyline: {} segments, depth {}",
            skyline.len(),
            skyline.depth()
        );
        skyline
    }

    /// A balanced copy of `skyline`.
    pub fn balance(&self, skyline: &Skyline) -> ApplicationResult<Skyline> {
        Ok(skyline.balance()?)
    }
}
