use super::RecordStore;
use crate::error::Result;
use crate::model::{Student, FIELDS};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn write_all(&self, students: &[Student]) -> Result<()> {
        self.ensure_parent_dir()?;

        // Header is written by hand so an empty roster still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(FIELDS)?;
        for student in students {
            writer.serialize(student)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl RecordStore for CsvStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn initialize(&mut self) -> Result<bool> {
        if self.path.exists() {
            debug!("data file already present");
            return Ok(false);
        }
        self.write_all(&[])?;
        info!("created data file with header row");
        Ok(true)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<Student>> {
        if !self.path.exists() {
            debug!("data file missing, treating as empty");
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        let students = reader
            .deserialize::<Student>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

        debug!(count = students.len(), "loaded students");
        Ok(students)
    }

    #[instrument(skip(self, students), fields(path = %self.path.display(), count = students.len()))]
    fn save(&mut self, students: &[Student]) -> Result<()> {
        self.write_all(students)?;
        debug!("saved students");
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CsvStore {
        CsvStore::new(dir.path().join("students.csv"))
    }

    #[test]
    fn initialize_creates_file_with_header() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert!(store.initialize().unwrap());
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "id,name,course,email\n");
    }

    #[test]
    fn initialize_leaves_existing_file_alone() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        fs::write(store.path(), "id,name,course,email\n7,Ada,,ada@x\n").unwrap();

        assert!(!store.initialize().unwrap());
        assert_eq!(store.load().unwrap(), vec![Student::new("7", "Ada", "", "ada@x")]);
    }

    #[test]
    fn initialize_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = CsvStore::new(dir.path().join("nested/deeper/students.csv"));

        assert!(store.initialize().unwrap());
        assert!(store.path().exists());
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_zero_byte_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_content() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let students = vec![
            Student::new("3", "Charlie", "Physics", "c@example.com"),
            Student::new("1", "Alice", "", "a@example.com"),
            Student::new("2", "Bob", "Math", "b@example.com"),
        ];

        store.save(&students).unwrap();
        assert_eq!(store.load().unwrap(), students);
    }

    #[test]
    fn save_empty_list_still_writes_header() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .save(&[Student::new("1", "Alice", "", "a@example.com")])
            .unwrap();

        store.save(&[]).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "id,name,course,email\n");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn fields_with_commas_and_quotes_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let students = vec![Student::new(
            "10",
            "Hopper, Grace",
            "Compilers \"advanced\"",
            "grace@example.com",
        )];

        store.save(&students).unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"Hopper, Grace\""));
        assert_eq!(store.load().unwrap(), students);
    }

    #[test]
    fn load_reads_hand_written_rows() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "id,name,course,email\n1,Alice,Math,a@x\n2,Bob,,b@x\n",
        )
        .unwrap();

        let students = store.load().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1], Student::new("2", "Bob", "", "b@x"));
    }

    #[test]
    fn load_rejects_rows_with_missing_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "id,name,course,email\n1,Alice\n").unwrap();

        assert!(store.load().is_err());
    }
}
