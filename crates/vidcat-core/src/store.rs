// crates/vidcat-core/src/store.rs - Backing file persistence
//
// This is the "data access layer" of the catalog: it owns the path of the
// backing file and is the only code that reads or writes it.
//
// PERSISTENCE CONTRACT:
// Every mutating operation (add, update, delete) rewrites the whole file
// before it returns. There is no deferred or batched save, so the file on
// disk always matches the in-memory catalog after the last completed
// operation. One full rewrite per mutation is the accepted cost.
//
// ATOMIC WRITES:
// The JSON is written to a temporary file in the same directory and then
// renamed over the target. A failed save leaves the previous file intact.
// If the save fails, the in-memory mutation is undone as well.
//
// CONCURRENCY:
// None. Two processes pointed at the same file will clobber each other
// (last writer wins). No locking is attempted.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::position::Position;
use crate::record::Record;

/// Loads, saves and mutates the catalog against its backing file
///
/// The store does not hold the catalog itself; callers own it and pass it in.
/// That keeps the session free to borrow the catalog for display between
/// operations.
///
/// EXAMPLE USAGE:
/// ```rust,no_run
/// use vidcat_core::{CatalogConfig, CatalogStore, Record};
///
/// let store = CatalogStore::new(&CatalogConfig::default());
/// let mut catalog = store.load()?;
/// store.add(&mut catalog, Record::new("Intro", "3:00"))?;
/// # Ok::<(), vidcat_core::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
    pretty: bool,
}

impl CatalogStore {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            path: config.path.clone(),
            pretty: config.pretty,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the catalog from the backing file
    ///
    /// ERROR HANDLING:
    /// - File absent: not an error, returns an empty catalog (first run)
    /// - File unreadable: `CatalogError::Io`
    /// - Invalid JSON or UTF-8, wrong shape, or a record missing a field:
    ///   `CatalogError::Malformed`. An empty file counts as malformed.
    pub fn load(&self) -> CatalogResult<Catalog> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No catalog file yet, starting empty");
                return Ok(Catalog::new());
            }
            Err(err) => return Err(CatalogError::io(&self.path, err)),
        };

        let catalog: Catalog = serde_json::from_slice(&content)
            .map_err(|err| CatalogError::malformed(&self.path, err))?;

        debug!(
            path = %self.path.display(),
            records = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Overwrite the backing file with the full catalog
    ///
    /// Missing parent directories are created. On failure the previous file
    /// content is left as it was.
    pub fn save(&self, catalog: &Catalog) -> CatalogResult<()> {
        let json = if self.pretty {
            serde_json::to_vec_pretty(catalog)
        } else {
            serde_json::to_vec(catalog)
        }
        .map_err(|err| CatalogError::io(&self.path, err.into()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        fs::create_dir_all(dir).map_err(|err| CatalogError::io(&self.path, err))?;

        let mut temp =
            NamedTempFile::new_in(dir).map_err(|err| CatalogError::io(&self.path, err))?;
        temp.write_all(&json)
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|err| CatalogError::io(&self.path, err))?;
        self.carry_permissions(&temp)?;
        temp.persist(&self.path)
            .map_err(|err| CatalogError::io(&self.path, err.error))?;

        debug!(
            path = %self.path.display(),
            records = catalog.len(),
            bytes = json.len(),
            "Saved catalog"
        );
        Ok(())
    }

    /// Give the temp file the permissions the backing file should end up with
    ///
    /// `NamedTempFile` creates owner-only files, and the rename would carry
    /// that mode over to the catalog. An existing file keeps its mode; a new
    /// one gets the usual 0644 on Unix.
    fn carry_permissions(&self, temp: &NamedTempFile) -> CatalogResult<()> {
        let permissions = match fs::metadata(&self.path) {
            Ok(metadata) => metadata.permissions(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => match new_file_permissions() {
                Some(permissions) => permissions,
                None => return Ok(()),
            },
            Err(err) => return Err(CatalogError::io(&self.path, err)),
        };

        temp.as_file()
            .set_permissions(permissions)
            .map_err(|err| CatalogError::io(&self.path, err))
    }

    /// 1-based enumeration of the catalog for display
    pub fn list<'c>(&self, catalog: &'c Catalog) -> Vec<(Position, &'c Record)> {
        catalog.list().collect()
    }

    /// Append a record and persist, returning its position
    pub fn add(&self, catalog: &mut Catalog, record: Record) -> CatalogResult<Position> {
        catalog.push(record);
        let position = Position::from_index(catalog.len() - 1);

        if let Err(err) = self.save(catalog) {
            catalog.pop();
            return Err(err);
        }

        info!(%position, "Added record");
        Ok(position)
    }

    /// Replace the record at `position` and persist, returning the old record
    ///
    /// An out-of-range position fails with `InvalidPosition` before anything
    /// is touched; nothing is written in that case.
    pub fn update(
        &self,
        catalog: &mut Catalog,
        position: Position,
        record: Record,
    ) -> CatalogResult<Record> {
        let previous = catalog.replace(position, record)?;

        if let Err(err) = self.save(catalog) {
            catalog.replace(position, previous)?;
            return Err(err);
        }

        info!(%position, "Updated record");
        Ok(previous)
    }

    /// Remove the record at `position` and persist, returning it
    ///
    /// Later records move down one position. An out-of-range position fails
    /// with `InvalidPosition` and nothing is written.
    pub fn delete(&self, catalog: &mut Catalog, position: Position) -> CatalogResult<Record> {
        let removed = catalog.remove(position)?;

        if let Err(err) = self.save(catalog) {
            catalog.restore(position, removed);
            return Err(err);
        }

        info!(%position, remaining = catalog.len(), "Deleted record");
        Ok(removed)
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, CatalogStore) {
        let temp_dir = TempDir::new().unwrap();
        let config = CatalogConfig {
            path: temp_dir.path().join("youtube.txt"),
            pretty: false,
        };
        (temp_dir, CatalogStore::new(&config))
    }

    fn pos(n: usize) -> Position {
        Position::new(n).unwrap()
    }

    fn listed(store: &CatalogStore, catalog: &Catalog) -> Vec<(usize, String, String)> {
        store
            .list(catalog)
            .into_iter()
            .map(|(p, r)| (p.get(), r.name.clone(), r.duration.clone()))
            .collect()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        let catalog = store.load().unwrap();
        assert!(catalog.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_load_reads_original_format() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"[{"name": "Rust intro", "time": "12:30"}, {"name": "Ownership", "time": "20:00"}]"#,
        )
        .unwrap();

        let catalog = store.load().unwrap();
        assert_eq!(
            catalog.records(),
            &[
                Record::new("Rust intro", "12:30"),
                Record::new("Ownership", "20:00")
            ]
        );
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let (_temp_dir, store) = create_test_store();

        for content in ["not json", "", "{\"name\": \"A\"}", "[1, 2]"] {
            fs::write(store.path(), content).unwrap();
            let err = store.load().unwrap_err();
            assert!(
                matches!(err, CatalogError::Malformed { .. }),
                "expected malformed for {content:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_load_invalid_utf8_is_malformed() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), b"[{\"name\":\"\xff\xfe\",\"time\":\"1\"}]").unwrap();

        let err = store.load().unwrap_err();
        assert!(
            matches!(err, CatalogError::Malformed { .. }),
            "expected malformed, got {err:?}"
        );
    }

    #[test]
    fn test_load_record_missing_field_fails() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"[{"name": "A", "time": "1:00"}, {"name": "B"}]"#).unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            CatalogError::Malformed { .. }
        ));
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = CatalogConfig {
            path: temp_dir.path().to_path_buf(),
            pretty: false,
        };
        let store = CatalogStore::new(&config);

        assert!(matches!(store.load().unwrap_err(), CatalogError::Io { .. }));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_temp_dir, store) = create_test_store();
        let catalog = Catalog::from_records(vec![
            Record::new("A", "3:00"),
            Record::new("", ""),
            Record::new("Ünïcode \"quoted\"", "1h 2m"),
        ]);

        store.save(&catalog).unwrap();
        assert_eq!(store.load().unwrap(), catalog);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let config = CatalogConfig {
            path: temp_dir.path().join("nested").join("dir").join("videos.json"),
            pretty: true,
        };
        let store = CatalogStore::new(&config);

        store
            .save(&Catalog::from_records(vec![Record::new("A", "1")]))
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains('\n'), "pretty output spans lines");
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "[]").unwrap();
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o640)).unwrap();

        store
            .save(&Catalog::from_records(vec![Record::new("A", "1")]))
            .unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_new_file_is_not_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp_dir, store) = create_test_store();
        store.save(&Catalog::new()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_save_failure_leaves_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "i am a file").unwrap();

        let config = CatalogConfig {
            path: blocker.join("youtube.txt"),
            pretty: false,
        };
        let store = CatalogStore::new(&config);

        let err = store.save(&Catalog::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "i am a file");
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let (_temp_dir, store) = create_test_store();
        let mut catalog = store.load().unwrap();

        let position = store.add(&mut catalog, Record::new("A", "3:00")).unwrap();
        assert_eq!(position.get(), 1);
        assert_eq!(store.load().unwrap(), catalog);

        store.add(&mut catalog, Record::new("B", "4:00")).unwrap();
        assert_eq!(store.load().unwrap(), catalog);

        store
            .update(&mut catalog, pos(2), Record::new("B2", "4:30"))
            .unwrap();
        assert_eq!(store.load().unwrap(), catalog);

        store.delete(&mut catalog, pos(1)).unwrap();
        assert_eq!(store.load().unwrap(), catalog);
        assert_eq!(catalog.records(), &[Record::new("B2", "4:30")]);
    }

    #[test]
    fn test_add_update_delete_scenario() {
        let (_temp_dir, store) = create_test_store();
        let mut catalog = store.load().unwrap();

        store.add(&mut catalog, Record::new("A", "3:00")).unwrap();
        store.add(&mut catalog, Record::new("B", "4:00")).unwrap();
        assert_eq!(
            listed(&store, &catalog),
            vec![
                (1, "A".to_string(), "3:00".to_string()),
                (2, "B".to_string(), "4:00".to_string()),
            ]
        );

        let removed = store.delete(&mut catalog, pos(1)).unwrap();
        assert_eq!(removed, Record::new("A", "3:00"));
        assert_eq!(
            listed(&store, &catalog),
            vec![(1, "B".to_string(), "4:00".to_string())]
        );

        let previous = store
            .update(&mut catalog, pos(1), Record::new("C", "5:00"))
            .unwrap();
        assert_eq!(previous, Record::new("B", "4:00"));
        assert_eq!(
            listed(&store, &catalog),
            vec![(1, "C".to_string(), "5:00".to_string())]
        );

        assert_eq!(store.load().unwrap(), catalog);
    }

    #[test]
    fn test_invalid_position_writes_nothing() {
        let (_temp_dir, store) = create_test_store();
        let mut catalog = store.load().unwrap();
        store.add(&mut catalog, Record::new("A", "3:00")).unwrap();
        store.add(&mut catalog, Record::new("B", "4:00")).unwrap();

        let before_bytes = fs::read(store.path()).unwrap();
        let before = catalog.clone();

        let err = store
            .update(&mut catalog, pos(5), Record::new("C", "5:00"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.delete(&mut catalog, pos(3)).unwrap_err().is_validation());

        assert_eq!(catalog, before);
        assert_eq!(fs::read(store.path()).unwrap(), before_bytes);
    }

    #[test]
    fn test_failed_save_rolls_back_memory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = CatalogStore::new(&CatalogConfig {
            path: blocker.join("youtube.txt"),
            pretty: false,
        });

        let original = Catalog::from_records(vec![Record::new("A", "1"), Record::new("B", "2")]);

        let mut catalog = original.clone();
        assert!(store.add(&mut catalog, Record::new("C", "3")).is_err());
        assert_eq!(catalog, original);

        assert!(store
            .update(&mut catalog, pos(2), Record::new("X", "9"))
            .is_err());
        assert_eq!(catalog, original);

        assert!(store.delete(&mut catalog, pos(1)).is_err());
        assert_eq!(catalog, original);
    }
}
