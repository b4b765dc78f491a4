use super::RecordStore;
use crate::error::Result;
use crate::model::Student;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
    initialized: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students,
            initialized: true,
            saves: 0,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of times `save` was called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn initialize(&mut self) -> Result<bool> {
        let created = !self.initialized;
        self.initialized = true;
        Ok(created)
    }

    fn load(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        self.initialized = true;
        self.students = students.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` students with ids 1..=count.
        pub fn with_students(mut self, count: usize) -> Self {
            let mut students = self.store.load().unwrap();
            for i in 1..=count {
                students.push(Student::new(
                    i.to_string(),
                    format!("Student {}", i),
                    "General",
                    format!("student{}@example.com", i),
                ));
            }
            self.store.save(&students).unwrap();
            self
        }

        pub fn with_student(mut self, id: &str, name: &str) -> Self {
            let mut students = self.store.load().unwrap();
            students.push(Student::new(
                id,
                name,
                "",
                format!("{}@example.com", name.to_lowercase()),
            ));
            self.store.save(&students).unwrap();
            self
        }
    }
}
