use std::fs::OpenOptions;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use enroll_api::auth::session::CreatedSession;
use enroll_api::users::User;
use enroll_lib::roles::Role;

use crate::error::{self, Context};

/// tokens issued by the backend along with the account they belong to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    pub issued_at: DateTime<Utc>,
}

/// a verified contact whose signup continues in the registration flow.
/// no credential exists yet so there is nothing to log in with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingRegistration {
    pub contact: String,
    pub role: Role,
    pub verified_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    session: Option<StoredSession>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pending_registration: Option<PendingRegistration>,
}

/// the locally persisted session file. loads lazily, saves explicitly,
/// and a missing file reads as an empty document
pub struct SessionStore {
    path: PathBuf,
    doc: SessionDocument,
}

impl SessionStore {
    pub fn load(path: PathBuf) -> error::Result<Self> {
        let doc = if path.try_exists()? {
            let file = OpenOptions::new()
                .read(true)
                .open(&path)
                .context("failed to open session file")?;

            serde_json::from_reader(BufReader::new(file))
                .context("session file contains invalid data")?
        } else {
            SessionDocument::default()
        };

        Ok(SessionStore { path, doc })
    }

    pub fn save(&self) -> error::Result {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .context("failed to open session file for writing")?;

        serde_json::to_writer_pretty(BufWriter::new(file), &self.doc)
            .context("failed to write session file")?;

        Ok(())
    }

    pub fn session(&self) -> Option<&StoredSession> {
        self.doc.session.as_ref()
    }

    pub fn pending_registration(&self) -> Option<&PendingRegistration> {
        self.doc.pending_registration.as_ref()
    }

    /// a fresh session replaces whatever was stored before, a pending
    /// registration marker included
    pub fn set_session(&mut self, created: CreatedSession, issued_at: DateTime<Utc>) {
        self.doc.session = Some(StoredSession {
            user: created.user,
            access_token: created.access_token,
            refresh_token: created.refresh_token,
            issued_at,
        });
        self.doc.pending_registration = None;
    }

    pub fn set_pending_registration(&mut self, contact: String, role: Role, verified_at: DateTime<Utc>) {
        self.doc.pending_registration = Some(PendingRegistration {
            contact,
            role,
            verified_at,
        });
    }

    /// logging out removes every stored value, not just the tokens
    pub fn clear(&mut self) {
        self.doc.session = None;
        self.doc.pending_registration = None;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("enroll_session_{}_{}.json", name, std::process::id()));
        path
    }

    fn created_session() -> CreatedSession {
        CreatedSession {
            user: User {
                id: 3,
                contact: String::from("asha@example.com"),
                user_type: Role::Host,
                first_name: Some(String::from("Asha")),
                last_name: Some(String::from("Rao")),
                profile_photo_url: None,
            },
            access_token: String::from("access"),
            refresh_token: String::from("refresh"),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let path = temp_path("missing");

        let store = SessionStore::load(path).unwrap();

        assert!(store.session().is_none());
        assert!(store.pending_registration().is_none());
    }

    #[test]
    fn save_and_reload_round_trip() {
        let path = temp_path("round_trip");
        let issued = Utc::now();

        let mut store = SessionStore::load(path.clone()).unwrap();
        store.set_session(created_session(), issued);
        store.save().unwrap();

        let loaded = SessionStore::load(path.clone()).unwrap();
        let session = loaded.session().unwrap();

        assert_eq!(session.user.contact, "asha@example.com");
        assert_eq!(session.access_token, "access");
        assert_eq!(session.refresh_token, "refresh");
        assert_eq!(session.issued_at, issued);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn clear_removes_everything() {
        let path = temp_path("clear");

        let mut store = SessionStore::load(path.clone()).unwrap();
        store.set_pending_registration(String::from("9876543210"), Role::Fellow, Utc::now());
        store.set_session(created_session(), Utc::now());
        store.clear();
        store.save().unwrap();

        let loaded = SessionStore::load(path.clone()).unwrap();

        assert!(loaded.session().is_none());
        assert!(loaded.pending_registration().is_none());

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn new_session_clears_pending_registration() {
        let path = temp_path("pending");

        let mut store = SessionStore::load(path).unwrap();
        store.set_pending_registration(String::from("9876543210"), Role::Fellow, Utc::now());
        assert!(store.pending_registration().is_some());

        store.set_session(created_session(), Utc::now());

        assert!(store.pending_registration().is_none());
        assert!(store.session().is_some());
    }
}
