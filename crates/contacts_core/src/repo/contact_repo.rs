//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - List contacts, look one up by identifier, and detect identifier
//!   collisions against other records.
//!
//! # Invariants
//! - A lookup that matches more than one row yields `None`, never an error
//!   and never an arbitrary row.
//! - No transactions are opened here; callers own transaction boundaries.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::contact::{Contact, ContactId};
use log::{debug, warn};
use rusqlite::{params, Connection, Params, Row, Statement};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT id, identifier FROM contacts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from contact repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "contact repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "contact repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "contact repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Outcome of a query that expects at most one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleRow<T> {
    None,
    One(T),
    /// More than one row matched.
    Multiple,
}

impl<T> SingleRow<T> {
    /// Collapses the outcome to an option, treating `Multiple` as absent.
    pub fn one_or_none(self) -> Option<T> {
        match self {
            Self::One(value) => Some(value),
            Self::None | Self::Multiple => None,
        }
    }
}

/// Read-only repository interface over stored contacts.
pub trait ContactRepository {
    /// Returns every contact ordered by ascending id.
    fn get_all(&self) -> RepoResult<Vec<Contact>>;
    /// Returns the single contact carrying `identifier`.
    ///
    /// Yields `None` both when nothing matches and when several rows match.
    fn get_by_identifier(&self, identifier: &str) -> RepoResult<Option<Contact>>;
    /// Returns true when a contact other than `contact` carries the same identifier.
    fn contact_with_same_identifier_exists(&self, contact: &Contact) -> RepoResult<bool>;
}

/// SQLite-backed contact repository borrowing a migrated connection.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Creates repository from migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema is incomplete.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_contact_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY id ASC;"))?;
        let contacts = stmt
            .query_map([], parse_contact_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "event=contact_list module=repo status=ok count={}",
            contacts.len()
        );
        Ok(contacts)
    }

    fn get_by_identifier(&self, identifier: &str) -> RepoResult<Option<Contact>> {
        let mut stmt = self.conn.prepare(&format!(
            "{CONTACT_SELECT_SQL}
             WHERE identifier = ?1
             ORDER BY id ASC
             LIMIT 2;"
        ))?;

        let outcome = fetch_single(&mut stmt, params![identifier])?;
        match &outcome {
            SingleRow::Multiple => {
                warn!("event=contact_lookup module=repo status=non_unique result=none");
            }
            SingleRow::One(_) => debug!("event=contact_lookup module=repo status=ok result=found"),
            SingleRow::None => debug!("event=contact_lookup module=repo status=ok result=none"),
        }

        Ok(outcome.one_or_none())
    }

    fn contact_with_same_identifier_exists(&self, contact: &Contact) -> RepoResult<bool> {
        let mut stmt = self.conn.prepare(
            "SELECT 1
             FROM contacts
             WHERE identifier = ?1
               AND id <> ?2
             LIMIT 1;",
        )?;

        let exists = stmt.exists(params![contact.identifier.as_str(), contact.id])?;
        debug!(
            "event=contact_duplicate_check module=repo status=ok contact_id={} exists={exists}",
            contact.id
        );
        Ok(exists)
    }
}

/// Runs a statement expected to match at most one row.
///
/// Reads at most two rows so the caller can tell `One` from `Multiple`
/// without scanning the whole result.
fn fetch_single<P: Params>(
    stmt: &mut Statement<'_>,
    params: P,
) -> RepoResult<SingleRow<Contact>> {
    let mut rows = stmt.query(params)?;
    let Some(first) = rows.next()? else {
        return Ok(SingleRow::None);
    };
    let contact = parse_contact_row(first)?;

    if rows.next()?.is_some() {
        return Ok(SingleRow::Multiple);
    }
    Ok(SingleRow::One(contact))
}

fn parse_contact_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get::<_, ContactId>("id")?,
        identifier: row.get("identifier")?,
    })
}

fn ensure_contact_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "contacts")? {
        return Err(RepoError::MissingRequiredTable("contacts"));
    }

    for column in ["id", "identifier"] {
        if !table_has_column(conn, "contacts", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "contacts",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::SingleRow;

    #[test]
    fn multiple_rows_collapse_to_none() {
        assert_eq!(SingleRow::<u8>::Multiple.one_or_none(), None);
        assert_eq!(SingleRow::<u8>::None.one_or_none(), None);
        assert_eq!(SingleRow::One(3_u8).one_or_none(), Some(3));
    }
}
