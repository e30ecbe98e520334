//! Note repository implementation

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::models::{Note, NoteId};

/// Trait for note storage operations
pub trait NoteRepository: Send + Sync {
    /// Create a new note
    fn create(&self, title: &str, body: &str) -> Result<Note>;

    /// Get a note by ID
    fn get(&self, id: &NoteId) -> Result<Option<Note>>;

    /// List all notes, newest first
    fn list(&self) -> Result<Vec<Note>>;

    /// Update a note's title and body
    fn update(&self, id: &NoteId, title: &str, body: &str) -> Result<Note>;

    /// Delete a note
    fn delete(&self, id: &NoteId) -> Result<()>;
}

/// `SQLite` implementation of `NoteRepository`
pub struct SqliteNoteRepository {
    conn: Mutex<Connection>,
}

impl SqliteNoteRepository {
    /// Open (or create) a database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::bootstrap(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory database (used in tests)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn bootstrap(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn parse_row(
        id: String,
        title: String,
        body: String,
        created_at: i64,
        updated_at: i64,
    ) -> Result<Note> {
        let id = id
            .parse()
            .map_err(|_| Error::InvalidInput(format!("Invalid note ID: {id}")))?;
        Ok(Note {
            id,
            title,
            body,
            created_at,
            updated_at,
        })
    }
}

impl NoteRepository for SqliteNoteRepository {
    fn create(&self, title: &str, body: &str) -> Result<Note> {
        let note = Note::new(title, body);
        self.conn().execute(
            "INSERT INTO notes (id, title, body, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                note.id.as_str(),
                note.title,
                note.body,
                note.created_at,
                note.updated_at
            ],
        )?;
        tracing::debug!("Created note {}", note.id);
        Ok(note)
    }

    fn get(&self, id: &NoteId) -> Result<Option<Note>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, title, body, created_at, updated_at FROM notes WHERE id = ?1",
        )?;
        let row = stmt
            .query_row(params![id.as_str()], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })
            .map(Some)
            .or_else(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        row.map(|(id, title, body, created_at, updated_at)| {
            Self::parse_row(id, title, body, created_at, updated_at)
        })
        .transpose()
    }

    fn list(&self) -> Result<Vec<Note>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, title, body, created_at, updated_at FROM notes
             ORDER BY created_at DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(id, title, body, created_at, updated_at)| {
                Self::parse_row(id, title, body, created_at, updated_at)
            })
            .collect()
    }

    fn update(&self, id: &NoteId, title: &str, body: &str) -> Result<Note> {
        let updated_at = chrono::Utc::now().timestamp_millis();
        let affected = self.conn().execute(
            "UPDATE notes SET title = ?1, body = ?2, updated_at = ?3 WHERE id = ?4",
            params![title, body, updated_at, id.as_str()],
        )?;
        if affected == 0 {
            return Err(Error::NotFound(id.as_str()));
        }
        tracing::debug!("Updated note {id}");
        self.get(id)?.ok_or_else(|| Error::NotFound(id.as_str()))
    }

    fn delete(&self, id: &NoteId) -> Result<()> {
        let affected = self
            .conn()
            .execute("DELETE FROM notes WHERE id = ?1", params![id.as_str()])?;
        if affected == 0 {
            return Err(Error::NotFound(id.as_str()));
        }
        tracing::debug!("Deleted note {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repo() -> SqliteNoteRepository {
        SqliteNoteRepository::in_memory().unwrap()
    }

    #[test]
    fn create_and_get_roundtrip() {
        let repo = repo();
        let created = repo.create("Groceries", "Milk, eggs").unwrap();

        let found = repo.get(&created.id).unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[test]
    fn get_missing_note_returns_none() {
        let repo = repo();
        assert!(repo.get(&NoteId::new()).unwrap().is_none());
    }

    #[test]
    fn list_returns_newest_first() {
        let repo = repo();
        let mut first = repo.create("first", "a").unwrap();
        let mut second = repo.create("second", "b").unwrap();

        // Force distinct creation timestamps; two inserts can land on the
        // same millisecond.
        first.created_at -= 10;
        second.created_at += 10;
        repo.conn()
            .execute(
                "UPDATE notes SET created_at = ?1 WHERE id = ?2",
                params![first.created_at, first.id.as_str()],
            )
            .unwrap();
        repo.conn()
            .execute(
                "UPDATE notes SET created_at = ?1 WHERE id = ?2",
                params![second.created_at, second.id.as_str()],
            )
            .unwrap();

        let titles: Vec<String> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|note| note.title)
            .collect();
        assert_eq!(titles, vec!["second".to_string(), "first".to_string()]);
    }

    #[test]
    fn update_changes_fields_and_bumps_timestamp() {
        let repo = repo();
        let created = repo.create("Groceries", "Milk").unwrap();

        let updated = repo.update(&created.id, "Groceries", "Milk, eggs").unwrap();
        assert_eq!(updated.body, "Milk, eggs");
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_missing_note_fails() {
        let repo = repo();
        let err = repo.update(&NoteId::new(), "t", "b").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn delete_removes_note() {
        let repo = repo();
        let created = repo.create("Groceries", "Milk").unwrap();

        repo.delete(&created.id).unwrap();
        assert!(repo.get(&created.id).unwrap().is_none());
    }

    #[test]
    fn delete_missing_note_fails() {
        let repo = repo();
        let err = repo.delete(&NoteId::new()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn delete_ignores_draft_validity() {
        // Deletion must work even when the stored note would fail validation.
        let repo = repo();
        let created = repo.create("", "").unwrap();
        repo.delete(&created.id).unwrap();
        assert!(repo.get(&created.id).unwrap().is_none());
    }
}
