//! Loads the SRD equipment and spell CSV exports into domain catalogs.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use sheetsmith_domain::{CatalogError, Catalogs, EquipmentCatalog, SpellCatalog, Table};

use crate::config::EngineConfig;

pub const DEFAULT_EQUIPMENT_FILE: &str = "5e-SRD-Equipment.csv";
pub const DEFAULT_SPELLS_FILE: &str = "5e-SRD-Spells.csv";

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Read a CSV source into a header row plus data rows.
///
/// Records may have different lengths; short rows are dealt with by the
/// catalog builders.
pub fn read_table<R: Read>(source: R) -> Result<Table, CatalogLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record?.iter().map(String::from).collect(),
        None => return Ok(Table::default()),
    };
    let rows = records
        .map(|record| record.map(|r| r.iter().map(String::from).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    Ok(Table::new(header, rows))
}

fn read_table_at(path: &Path) -> Result<Table, CatalogLoadError> {
    let file = File::open(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(file)
}

pub fn load_equipment_catalog(path: &Path) -> Result<EquipmentCatalog, CatalogLoadError> {
    Ok(EquipmentCatalog::from_table(&read_table_at(path)?)?)
}

pub fn load_spell_catalog(path: &Path) -> Result<SpellCatalog, CatalogLoadError> {
    Ok(SpellCatalog::from_table(&read_table_at(path)?)?)
}

/// Paths to try, in order: the configured path, then the default file name
/// in the working directory, `data/`, `Data/`, `DATA/`, next to the
/// executable and in the executable's `data/`.
pub fn candidate_paths(explicit: Option<&Path>, file_name: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = explicit.map(Path::to_path_buf).into_iter().collect();
    paths.push(PathBuf::from(file_name));
    for dir in ["data", "Data", "DATA"] {
        paths.push(Path::new(dir).join(file_name));
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        paths.push(exe_dir.join(file_name));
        paths.push(exe_dir.join("data").join(file_name));
    }
    paths
}

/// Load from the first candidate that parses. Failures are logged, not returned.
pub fn discover<T>(
    kind: &'static str,
    candidates: &[PathBuf],
    load: impl Fn(&Path) -> Result<T, CatalogLoadError>,
) -> Option<(PathBuf, T)> {
    for path in candidates {
        match load(path) {
            Ok(catalog) => return Some((path.clone(), catalog)),
            Err(CatalogLoadError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::trace!(kind, path = %path.display(), "Catalog candidate missing");
            }
            Err(e) => {
                tracing::debug!(kind, path = %path.display(), error = %e, "Catalog candidate rejected");
            }
        }
    }
    None
}

/// Load both catalogs, falling back to empty ones when no source loads.
pub fn load_catalogs(config: &EngineConfig) -> Catalogs {
    let equipment = match discover(
        "equipment",
        &candidate_paths(config.equipment_csv.as_deref(), DEFAULT_EQUIPMENT_FILE),
        load_equipment_catalog,
    ) {
        Some((path, catalog)) => {
            tracing::info!(path = %path.display(), entries = catalog.len(), "Loaded equipment catalog");
            catalog
        }
        None => {
            tracing::warn!("No equipment catalog found; item lookups will report unknown");
            EquipmentCatalog::default()
        }
    };

    let spells = match discover(
        "spells",
        &candidate_paths(config.spells_csv.as_deref(), DEFAULT_SPELLS_FILE),
        load_spell_catalog,
    ) {
        Some((path, catalog)) => {
            tracing::info!(path = %path.display(), entries = catalog.len(), "Loaded spell catalog");
            catalog
        }
        None => {
            tracing::warn!("No spell catalog found; spell lookups will report not found");
            SpellCatalog::default()
        }
    };

    Catalogs::new(equipment, spells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).expect("create file");
        file.write_all(contents.as_bytes()).expect("write file");
        path
    }

    #[test]
    fn reads_header_and_ragged_rows() {
        let table = read_table("name, type\nClub, Weapon\nTorch\n".as_bytes()).expect("table");
        assert_eq!(table.header, vec!["name", "type"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Club", "Weapon"]);
        assert_eq!(table.rows[1], vec!["Torch"]);
    }

    #[test]
    fn empty_source_is_an_empty_catalog_error() {
        let table = read_table("".as_bytes()).expect("table");
        assert!(matches!(
            EquipmentCatalog::from_table(&table),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn quoted_class_lists_stay_in_one_cell() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(
            &dir,
            DEFAULT_SPELLS_FILE,
            "name,level,class\n\"Cure Wounds\",1,\"Bard, Cleric, Druid\"\nFireball,3,Wizard\n",
        );
        let spells = load_spell_catalog(&path).expect("spells");
        assert_eq!(spells.level_of("cure wounds"), Some(1));
        assert_eq!(spells.spells_for_class("druid").len(), 1);
        assert_eq!(spells.spells_for_class("wizard")[0].name, "fireball");
    }

    #[test]
    fn missing_headers_surface_as_catalog_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "bad.csv", "title,cost\nClub,1 sp\n");
        let err = load_equipment_catalog(&path).expect_err("missing headers");
        assert!(matches!(
            err,
            CatalogLoadError::Catalog(CatalogError::MissingColumns { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().expect("temp dir");
        let err = load_equipment_catalog(&dir.path().join("nope.csv")).expect_err("missing");
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }

    #[test]
    fn candidates_start_with_explicit_path_then_defaults() {
        let paths = candidate_paths(Some(Path::new("/srv/equipment.csv")), DEFAULT_EQUIPMENT_FILE);
        assert_eq!(paths[0], PathBuf::from("/srv/equipment.csv"));
        assert_eq!(paths[1], PathBuf::from(DEFAULT_EQUIPMENT_FILE));
        assert_eq!(paths[2], Path::new("data").join(DEFAULT_EQUIPMENT_FILE));
        assert_eq!(paths[4], Path::new("DATA").join(DEFAULT_EQUIPMENT_FILE));
    }

    #[test]
    fn discover_skips_broken_candidates() {
        let dir = TempDir::new().expect("temp dir");
        let broken = write_file(&dir, "broken.csv", "title\nx\n");
        let good = write_file(&dir, "good.csv", "name,type\nPlate Armor,Armor\n");
        let candidates = vec![dir.path().join("absent.csv"), broken, good.clone()];

        let (path, catalog) =
            discover("equipment", &candidates, load_equipment_catalog).expect("found");
        assert_eq!(path, good);
        assert_eq!(catalog.item_type("plate armor"), Some("armor"));
    }

    #[test]
    fn discover_gives_up_quietly() {
        let dir = TempDir::new().expect("temp dir");
        let candidates = vec![dir.path().join("absent.csv")];
        assert!(discover("spells", &candidates, load_spell_catalog).is_none());
    }
}
