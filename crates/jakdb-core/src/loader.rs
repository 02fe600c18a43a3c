// crates/jakdb-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional decompression, the binary
//! cache) and delegates payload parsing to serde. The source of truth is the
//! JSON export bundled under `data/`; a bincode cache is written beside it on
//! first load and reused while it stays fresh.

use crate::error::{JakDbError, Result};
use crate::model::{DefaultBackend, JakDb};
use crate::text::equals_folded;
use crate::traits::JakBackend;
use bincode::Options;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

static JAK_DB_CACHE: OnceCell<JakDb<DefaultBackend>> = OnceCell::new();

/// Decode limit for the binary cache. The directory is a few hundred
/// records; anything approaching this limit is a corrupt or hostile file.
const CACHE_DECODE_LIMIT: u64 = 64 * 1024 * 1024;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "jak.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.jak.bin";

impl<B: JakBackend> JakDb<B> {
    /// Keep only facilities whose district matches one of `districts`
    /// (folded comparison). `None` or an empty list keeps everything.
    fn retain_districts(self, filter: Option<&[&str]>) -> Self {
        let Some(filter) = filter.filter(|f| !f.is_empty()) else {
            return self;
        };
        let facilities = self
            .facilities
            .into_iter()
            .filter(|f| filter.iter().any(|d| equals_folded(f.district(), d)))
            .collect();
        JakDb { facilities }
    }
}

impl JakDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "jak_directory.json"
    }

    /// Load the bundled directory, caching the materialized database for the
    /// lifetime of the process. Subsequent calls clone the cached instance.
    pub fn load() -> Result<Self> {
        JAK_DB_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                let file = Self::default_dataset_filename();
                Self::load_from_path(dir.join(file), None)
            })
            .cloned()
    }

    /// Load the bundled directory restricted to the given districts.
    pub fn load_filtered_by_district(districts: &[&str]) -> Result<Self> {
        let dir = Self::default_data_dir();
        let file = Self::default_dataset_filename();
        Self::load_from_path(dir.join(file), Some(districts))
    }

    /// **Smart Loader:** checks the binary cache next to `path`, falls back
    /// to parsing the source JSON, and refreshes the cache on the way out.
    ///
    /// The cache always holds the unfiltered directory; the district filter
    /// is applied to whichever representation was read.
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = cache_path_for(path);

        if is_cache_fresh(path, &cache_path) {
            if let Ok(db) = Self::load_cache(&cache_path) {
                return Ok(db.retain_districts(filter));
            }
            // A stale or unreadable cache is not fatal; rebuild from source.
        }

        let db = Self::load_source_json(path)?;
        let _ = db.write_cache(&cache_path); // cache write is best-effort
        Ok(db.retain_districts(filter))
    }

    /// Parse a source JSON export.
    #[cfg(feature = "json")]
    fn load_source_json(path: &Path) -> Result<Self> {
        let reader = open_stream(path)?;
        Self::from_json_reader(reader)
    }

    #[cfg(not(feature = "json"))]
    fn load_source_json(path: &Path) -> Result<Self> {
        Err(JakDbError::UnsupportedFormat(format!(
            "JSON loading is disabled (feature `json`); no usable cache for {}",
            path.display()
        )))
    }

    /// Build a directory from any reader yielding the source JSON shape.
    #[cfg(feature = "json")]
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let raw: crate::raw::FacilitiesRaw = serde_json::from_reader(reader)?;
        Ok(crate::model::build_jakdb(raw))
    }

    /// Build a directory from an in-memory JSON string (used by the WASM
    /// bindings, which embed the dataset in the module).
    #[cfg(feature = "json")]
    pub fn from_json_str(data: &str) -> Result<Self> {
        let raw: crate::raw::FacilitiesRaw = serde_json::from_str(data)?;
        Ok(crate::model::build_jakdb(raw))
    }

    /// Reconstruct the directory from serialized cache bytes, optionally
    /// filtering by district.
    pub fn from_bytes(data: &[u8], filter: Option<&[&str]>) -> Result<Self> {
        let db: JakDb<DefaultBackend> = bincode::DefaultOptions::new()
            .with_limit(CACHE_DECODE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;
        Ok(db.retain_districts(filter))
    }

    fn load_cache(cache_path: &Path) -> Result<Self> {
        let file = File::open(cache_path).map_err(|e| {
            JakDbError::NotFound(format!("cache not found at {}: {e}", cache_path.display()))
        })?;

        #[cfg(feature = "compact")]
        let mut reader: Box<dyn Read> = Box::new(flate2::read::GzDecoder::new(BufReader::new(file)));
        #[cfg(not(feature = "compact"))]
        let mut reader: Box<dyn Read> = Box::new(BufReader::new(file));

        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data, None)
    }

    fn write_cache(&self, cache_path: &Path) -> Result<()> {
        let bytes = bincode::DefaultOptions::new()
            .with_limit(CACHE_DECODE_LIMIT)
            .serialize(self)?;
        let file = File::create(cache_path)?;

        #[cfg(feature = "compact")]
        {
            let mut encoder = flate2::write::GzEncoder::new(
                BufWriter::new(file),
                flate2::Compression::default(),
            );
            encoder.write_all(&bytes)?;
            encoder.finish()?;
        }

        #[cfg(not(feature = "compact"))]
        {
            let mut writer = BufWriter::new(file);
            writer.write_all(&bytes)?;
        }

        Ok(())
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// filename says so. Returns a generic reader so the caller doesn't care
/// about the compression.
#[cfg(feature = "json")]
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        JakDbError::NotFound(format!("dataset not found at {}: {e}", path.display()))
    })?;
    let reader = BufReader::new(file);

    let gzipped = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if gzipped {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(JakDbError::UnsupportedFormat(format!(
                "{} is gzip-compressed but the `compact` feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

fn cache_path_for(source: &Path) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{CACHE_SUFFIX}"))
}

/// A cache is fresh when it exists and is at least as new as the source.
fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let (Ok(src), Ok(dst)) = (std::fs::metadata(source), std::fs::metadata(cache)) else {
        return false;
    };
    match (src.modified(), dst.modified()) {
        (Ok(s), Ok(d)) => d >= s,
        _ => false,
    }
}
