use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::store::RecordStore;

/// Finds the first student whose id equals `id`.
pub fn run<S: RecordStore>(store: &S, id: &str) -> Result<CmdResult> {
    let found = store
        .load()?
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| RosterError::StudentNotFound(id.to_string()))?;

    Ok(CmdResult::default().with_listed_students(vec![found]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_student_by_id() {
        let store = StoreFixture::new().with_students(3).store;
        let result = run(&store, "2").unwrap();

        assert_eq!(result.listed_students.len(), 1);
        assert_eq!(result.listed_students[0].name, "Student 2");
    }

    #[test]
    fn returns_first_match_when_file_has_duplicates() {
        // Hand-edited files can break uniqueness; the earliest row wins.
        let store = InMemoryStore::with_students(vec![
            Student::new("4", "First", "", "f@x"),
            Student::new("4", "Second", "", "s@x"),
        ]);
        let result = run(&store, "4").unwrap();
        assert_eq!(result.listed_students[0].name, "First");
    }

    #[test]
    fn matches_whole_id_only() {
        let store = StoreFixture::new().with_student("123", "Ada").store;
        assert!(matches!(
            run(&store, "12"),
            Err(RosterError::StudentNotFound(id)) if id == "12"
        ));
    }

    #[test]
    fn empty_store_reports_not_found() {
        let store = InMemoryStore::new();
        assert!(run(&store, "1").is_err());
    }
}
