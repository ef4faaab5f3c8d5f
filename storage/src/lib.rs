// storage persists finished heightmaps as grayscale rasters on disk

pub mod error;
pub mod pgm;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use plasma_core::Grid;
use plasma_core::utils::to_gray_image;

pub use error::StorageError;

pub const PGM_EXTENSION: &str = "pgm";

// Write `grid` as a P2 raster at `path`, replacing any existing file.
// Returns the number of bytes on disk.
pub fn save_pgm(path: impl AsRef<Path>, grid: &Grid) -> Result<u64, StorageError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    pgm::write_pgm(grid, BufWriter::new(file))?;
    let bytes = fs::metadata(path)?.len();
    tracing::info!(path = %path.display(), bytes, size = grid.size(), "saved raster");
    Ok(bytes)
}

pub fn load_pgm(path: impl AsRef<Path>) -> Result<Grid, StorageError> {
    let file = File::open(path.as_ref())?;
    pgm::read_pgm(BufReader::new(file))
}

// 8-bit grayscale PNG, format picked from the extension
pub fn save_png(path: impl AsRef<Path>, grid: &Grid) -> Result<(), StorageError> {
    let path = path.as_ref();
    to_gray_image(grid).save(path)?;
    tracing::info!(path = %path.display(), size = grid.size(), "exported image");
    Ok(())
}

// Directory of named rasters, one `<name>.pgm` file each
pub struct RasterStore {
    dir: PathBuf,
}

impl RasterStore {
    // Open the store, creating the directory if needed
    pub fn init(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "raster store ready");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, name: &str) -> Result<PathBuf, StorageError> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && !name.contains('\0');
        if !valid {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.{PGM_EXTENSION}")))
    }

    // Insert a raster; an existing one with the same name is replaced
    pub fn create(&self, name: &str, grid: &Grid) -> Result<PathBuf, StorageError> {
        let path = self.path_for(name)?;
        save_pgm(&path, grid)?;
        Ok(path)
    }

    pub fn read_by_name(&self, name: &str) -> Result<Option<Grid>, StorageError> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Ok(None);
        }
        load_pgm(&path).map(Some)
    }

    // Names of all stored rasters, sorted
    pub fn list_names(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(PGM_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    // Returns false when nothing was stored under `name`
    pub fn delete_by_name(&self, name: &str) -> Result<bool, StorageError> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }

    // PNG copy next to the raster, `<name>.png`
    pub fn export_png(&self, name: &str, grid: &Grid) -> Result<PathBuf, StorageError> {
        let path = self.path_for(name)?.with_extension("png");
        save_png(&path, grid)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{RasterStore, StorageError};

    #[test]
    fn store_rejects_path_like_names() {
        let store = RasterStore {
            dir: std::env::temp_dir(),
        };
        for name in ["", ".", "..", "a/b", "..\\up"] {
            assert!(matches!(
                store.path_for(name),
                Err(StorageError::InvalidName(_))
            ));
        }
        let path = store.path_for("plasma_1").unwrap();
        assert!(path.ends_with("plasma_1.pgm"));
    }
}
