//! Session store
//!
//! The store is the single writer of the client session. It owns the durable
//! storage handle and the in-memory [`Session`], and only two operations
//! mutate them: [`SessionStore::set_session`] and
//! [`SessionStore::clear_session`]. Readers receive `&Session` (or a clone)
//! and can never observe a token without its role or the reverse, because the
//! in-memory value is replaced in one assignment after storage is written.

use crate::error::SessionError;
use crate::role::Role;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Durable key holding the opaque session token
pub const STORAGE_TOKEN_KEY: &str = "token";
/// Durable key holding the role name (`admin` / `seller`)
pub const STORAGE_ROLE_KEY: &str = "role";

// =========================================================
// Session
// =========================================================

/// Client-held authentication state
///
/// `is_authenticated` is derived from the token, so the invariant
/// `is_authenticated == token.is_some()` cannot be broken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role: Option<Role>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Assembles a session from raw parts, as read back from storage.
    pub fn from_parts(token: Option<String>, role: Option<Role>) -> Self {
        Self { token, role }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

// =========================================================
// Durable storage seam
// =========================================================

/// String key/value medium the session is persisted to
///
/// Mirrors the browser `localStorage` surface: reads are infallible lookups,
/// writes report success as a `bool`.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

impl<S: SessionStorage + ?Sized> SessionStorage for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        (**self).remove(key)
    }
}

/// In-process storage, used on native targets and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        for (k, v) in entries {
            storage.set(k, v);
        }
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.borrow_mut().remove(key);
        true
    }
}

// =========================================================
// SessionStore
// =========================================================

pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Restores the session persisted in `storage`.
    ///
    /// A stored role that does not parse is discarded; the token alone still
    /// decides `is_authenticated`.
    pub fn initialize(storage: S) -> Self {
        let token = storage.get(STORAGE_TOKEN_KEY).filter(|t| !t.is_empty());
        let role = storage
            .get(STORAGE_ROLE_KEY)
            .and_then(|raw| match raw.parse::<Role>() {
                Ok(role) => Some(role),
                Err(err) => {
                    log::warn!("discarding stored role: {err}");
                    None
                }
            });
        let session = Session::from_parts(token, role);
        log::debug!(
            "session restored: authenticated={}, role={:?}",
            session.is_authenticated(),
            session.role()
        );
        Self { storage, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replaces the session after a successful login or signup.
    ///
    /// # Errors
    /// [`SessionError::EmptyToken`] if `token` is blank; nothing is written.
    /// [`SessionError::Persist`] if storage rejects a write; the previous
    /// session is kept in memory and in storage.
    pub fn set_session(&mut self, token: impl Into<String>, role: Role) -> Result<&Session, SessionError> {
        self.replace(token.into(), Some(role))
    }

    /// Starts a session from a token the server returned without a role.
    /// The stored role is removed so an earlier role never pairs with the new
    /// token; guarded pages answer such a session with Unauthorized.
    ///
    /// # Errors
    /// Same as [`set_session`](Self::set_session).
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<&Session, SessionError> {
        self.replace(token.into(), None)
    }

    fn replace(&mut self, token: String, role: Option<Role>) -> Result<&Session, SessionError> {
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        self.persist(&token, role)?;

        self.session = Session::from_parts(Some(token), role);
        match role {
            Some(role) => log::info!("session started for role {role}"),
            None => log::warn!("session started without a role"),
        }
        Ok(&self.session)
    }

    /// Writes both keys or neither. On a failed write the previous values are
    /// put back; if even that fails both keys are dropped, which reloads as
    /// signed out.
    fn persist(&self, token: &str, role: Option<Role>) -> Result<(), SessionError> {
        let previous_token = self.storage.get(STORAGE_TOKEN_KEY);
        let previous_role = self.storage.get(STORAGE_ROLE_KEY);

        let written = self.storage.set(STORAGE_TOKEN_KEY, token)
            && match role {
                Some(role) => self.storage.set(STORAGE_ROLE_KEY, role.as_str()),
                None => self.storage.remove(STORAGE_ROLE_KEY),
            };
        if written {
            return Ok(());
        }

        let restored = restore(&self.storage, STORAGE_TOKEN_KEY, previous_token.as_deref())
            & restore(&self.storage, STORAGE_ROLE_KEY, previous_role.as_deref());
        if !restored {
            self.storage.remove(STORAGE_TOKEN_KEY);
            self.storage.remove(STORAGE_ROLE_KEY);
        }
        log::error!("session could not be persisted; keeping the previous one");
        Err(SessionError::Persist)
    }

    /// Drops the session and the storage keys this store owns.
    pub fn clear_session(&mut self) {
        self.storage.remove(STORAGE_TOKEN_KEY);
        self.storage.remove(STORAGE_ROLE_KEY);
        if self.session.is_authenticated() {
            log::info!("session cleared");
        }
        self.session = Session::anonymous();
    }
}

fn restore<S: SessionStorage>(storage: &S, key: &str, value: Option<&str>) -> bool {
    match value {
        Some(value) => storage.get(key).as_deref() == Some(value) || storage.set(key, value),
        None => storage.remove(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Storage that refuses writes to one key
    struct RejectingStorage {
        inner: MemoryStorage,
        rejected_key: &'static str,
    }

    impl SessionStorage for RejectingStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> bool {
            key != self.rejected_key && self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> bool {
            self.inner.remove(key)
        }
    }

    fn shared_storage() -> Rc<MemoryStorage> {
        Rc::new(MemoryStorage::new())
    }

    #[test]
    fn empty_storage_yields_anonymous_session() {
        let store = SessionStore::initialize(MemoryStorage::new());
        assert_eq!(store.session(), &Session::anonymous());
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn set_session_survives_reload() {
        let storage = shared_storage();
        let mut store = SessionStore::initialize(Rc::clone(&storage));
        store.set_session("tok-123", Role::Seller).unwrap();

        let reloaded = SessionStore::initialize(Rc::clone(&storage));
        assert_eq!(reloaded.session().token(), Some("tok-123"));
        assert_eq!(reloaded.session().role(), Some(Role::Seller));
        assert!(reloaded.session().is_authenticated());
        assert_eq!(reloaded.session(), store.session());
    }

    #[test]
    fn blank_token_is_rejected_without_side_effects() {
        let storage = shared_storage();
        let mut store = SessionStore::initialize(Rc::clone(&storage));
        assert_eq!(store.set_session("  ", Role::Admin), Err(SessionError::EmptyToken));
        assert!(storage.is_empty());
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn clear_session_is_idempotent() {
        let storage = shared_storage();
        let mut store = SessionStore::initialize(Rc::clone(&storage));
        store.set_session("tok", Role::Admin).unwrap();

        store.clear_session();
        let once = store.session().clone();
        store.clear_session();

        assert_eq!(store.session(), &once);
        assert_eq!(once, Session::anonymous());
        assert!(storage.get(STORAGE_TOKEN_KEY).is_none());
        assert!(storage.get(STORAGE_ROLE_KEY).is_none());
    }

    #[test]
    fn clear_session_leaves_foreign_keys_alone() {
        let storage = Rc::new(MemoryStorage::with_entries([
            (STORAGE_TOKEN_KEY, "tok"),
            (STORAGE_ROLE_KEY, "admin"),
            ("theme", "dark"),
        ]));
        let mut store = SessionStore::initialize(Rc::clone(&storage));
        store.clear_session();
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn unknown_stored_role_keeps_token_authority() {
        let storage = MemoryStorage::with_entries([
            (STORAGE_TOKEN_KEY, "tok"),
            (STORAGE_ROLE_KEY, "superuser"),
        ]);
        let store = SessionStore::initialize(storage);
        assert!(store.session().is_authenticated());
        assert_eq!(store.session().role(), None);
    }

    #[test]
    fn role_without_token_is_not_authenticated() {
        let storage = MemoryStorage::with_entries([(STORAGE_ROLE_KEY, "admin")]);
        let store = SessionStore::initialize(storage);
        assert!(!store.session().is_authenticated());
        assert_eq!(store.session().role(), Some(Role::Admin));
    }

    #[test]
    fn failed_role_write_keeps_previous_session() {
        let storage = Rc::new(RejectingStorage {
            inner: MemoryStorage::with_entries([
                (STORAGE_TOKEN_KEY, "admin-token"),
                (STORAGE_ROLE_KEY, "admin"),
            ]),
            rejected_key: STORAGE_ROLE_KEY,
        });
        let mut store = SessionStore::initialize(Rc::clone(&storage));
        let before = store.session().clone();

        assert_eq!(
            store.set_session("seller-token", Role::Seller),
            Err(SessionError::Persist)
        );
        assert_eq!(store.session(), &before);

        let reloaded = SessionStore::initialize(Rc::clone(&storage));
        assert_eq!(reloaded.session().token(), Some("admin-token"));
        assert_eq!(reloaded.session().role(), Some(Role::Admin));
    }

    #[test]
    fn failed_token_write_leaves_storage_empty() {
        let storage = Rc::new(RejectingStorage {
            inner: MemoryStorage::new(),
            rejected_key: STORAGE_TOKEN_KEY,
        });
        let mut store = SessionStore::initialize(Rc::clone(&storage));

        assert_eq!(store.set_session("tok", Role::Admin), Err(SessionError::Persist));
        assert!(storage.inner.is_empty());
        assert!(!store.session().is_authenticated());
    }

    #[test]
    fn token_only_session_drops_the_stored_role() {
        let storage = Rc::new(MemoryStorage::with_entries([
            (STORAGE_TOKEN_KEY, "old"),
            (STORAGE_ROLE_KEY, "admin"),
        ]));
        let mut store = SessionStore::initialize(Rc::clone(&storage));

        store.set_token("fresh").unwrap();

        let reloaded = SessionStore::initialize(Rc::clone(&storage));
        assert_eq!(reloaded.session(), &Session::from_parts(Some("fresh".into()), None));
        assert_eq!(reloaded.session(), store.session());
    }

    #[test]
    fn later_write_wins() {
        let mut store = SessionStore::initialize(MemoryStorage::new());
        store.set_session("first", Role::Admin).unwrap();
        store.set_session("second", Role::Seller).unwrap();
        assert_eq!(store.session().token(), Some("second"));
        assert_eq!(store.storage().get(STORAGE_ROLE_KEY).as_deref(), Some("seller"));
    }
}
