//! Parcel store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the six storage operations over the `parcel` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every mutation is a single SQL statement; no transactions are opened.
//! - Address changes and deletes only touch rows whose status is `registered`.
//! - Read paths reject rows with unknown status instead of masking them.
//! - Addresses never appear in log events.

use crate::db::DbError;
use crate::model::parcel::{
    ClientId, Parcel, ParcelNumber, ParcelStatus, ParcelValidationError,
};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PARCEL_TABLE: &str = "parcel";
const PARCEL_COLUMNS: [&str; 5] = ["number", "client", "status", "address", "created_at"];

const PARCEL_SELECT_SQL: &str = "SELECT
    number,
    client,
    status,
    address,
    created_at
FROM parcel";

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from parcel store operations.
#[derive(Debug)]
pub enum RepoError {
    /// Input parcel failed model validation.
    Validation(ParcelValidationError),
    /// Underlying SQLite failure.
    Db(DbError),
    /// No row with this number.
    NotFound(ParcelNumber),
    /// Guarded mutation attempted on a parcel that already left `registered`.
    NotRegistered {
        number: ParcelNumber,
        status: ParcelStatus,
    },
    /// Persisted row cannot be mapped to a valid `Parcel`.
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
            Self::NotRegistered { number, status } => write!(
                f,
                "parcel {number} has status `{status}`; only `registered` parcels can be changed or deleted"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted parcel data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "parcel store requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "parcel store requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParcelValidationError> for RepoError {
    fn from(value: ParcelValidationError) -> Self {
        Self::Validation(value)
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

/// Storage contract for parcels.
pub trait ParcelStore {
    /// Inserts `parcel` and returns the assigned number. `parcel.number` is ignored.
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber>;
    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel>;
    /// Deletes a `registered` parcel.
    fn delete(&self, number: ParcelNumber) -> RepoResult<()>;
    /// Replaces the address of a `registered` parcel.
    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()>;
    /// Sets any status; no transition graph is enforced.
    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()>;
    /// Returns the client's parcels ordered by number.
    fn get_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>>;
}

/// SQLite-backed parcel store borrowing a caller-owned connection.
#[derive(Debug)]
pub struct SqliteParcelStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParcelStore<'conn> {
    /// Creates a store after checking that the connection carries the parcel table.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_store_connection_ready(conn)?;
        Ok(Self { conn })
    }

    /// Explains why a guarded statement affected no rows.
    fn guard_failure(&self, number: ParcelNumber, event: &str) -> RepoError {
        match load_status(self.conn, number) {
            Ok(None) => RepoError::NotFound(number),
            Ok(Some(status)) => {
                warn!(
                    "event={event} module=repo status=error error_code=not_registered number={number} parcel_status={status}"
                );
                RepoError::NotRegistered { number, status }
            }
            Err(err) => err,
        }
    }
}

impl ParcelStore for SqliteParcelStore<'_> {
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber> {
        parcel.validate()?;

        let number: ParcelNumber = self.conn.query_row(
            "INSERT INTO parcel (client, status, address, created_at)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING number;",
            params![
                parcel.client,
                parcel.status.as_str(),
                parcel.address.as_str(),
                parcel.created_at.as_str(),
            ],
            |row| row.get(0),
        )?;

        debug!(
            "event=parcel_add module=repo status=ok number={number} client={} parcel_status={}",
            parcel.client, parcel.status
        );
        Ok(number)
    }

    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE number = ?1;"))?;

        let mut rows = stmt.query([number])?;
        match rows.next()? {
            Some(row) => parse_parcel_row(row),
            None => Err(RepoError::NotFound(number)),
        }
    }

    fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM parcel
             WHERE number = ?1
               AND status = ?2;",
            params![number, ParcelStatus::Registered.as_str()],
        )?;

        if changed == 0 {
            return Err(self.guard_failure(number, "parcel_delete"));
        }

        debug!("event=parcel_delete module=repo status=ok number={number}");
        Ok(())
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE parcel
             SET address = ?2
             WHERE number = ?1
               AND status = ?3;",
            params![number, address, ParcelStatus::Registered.as_str()],
        )?;

        if changed == 0 {
            return Err(self.guard_failure(number, "parcel_set_address"));
        }

        debug!("event=parcel_set_address module=repo status=ok number={number}");
        Ok(())
    }

    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE parcel
             SET status = ?2
             WHERE number = ?1;",
            params![number, status.as_str()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(number));
        }

        debug!(
            "event=parcel_set_status module=repo status=ok number={number} parcel_status={status}"
        );
        Ok(())
    }

    fn get_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PARCEL_SELECT_SQL}
             WHERE client = ?1
             ORDER BY number ASC;"
        ))?;

        let mut rows = stmt.query([client])?;
        let mut parcels = Vec::new();
        while let Some(row) = rows.next()? {
            parcels.push(parse_parcel_row(row)?);
        }

        Ok(parcels)
    }
}

fn parse_parcel_row(row: &Row<'_>) -> RepoResult<Parcel> {
    let number: ParcelNumber = row.get("number")?;
    let status_text: String = row.get("status")?;
    let status = status_text.parse::<ParcelStatus>().map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in parcel.status for number {number}"
        ))
    })?;

    let parcel = Parcel {
        number,
        client: row.get("client")?,
        status,
        address: row.get("address")?,
        created_at: row.get("created_at")?,
    };
    parcel
        .validate()
        .map_err(|err| RepoError::InvalidData(format!("parcel {number}: {err}")))?;
    Ok(parcel)
}

fn load_status(conn: &Connection, number: ParcelNumber) -> RepoResult<Option<ParcelStatus>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT status FROM parcel WHERE number = ?1;",
            [number],
            |row| row.get(0),
        )
        .optional()?;

    match value {
        None => Ok(None),
        Some(text) => text.parse::<ParcelStatus>().map(Some).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid status `{text}` in parcel.status for number {number}"
            ))
        }),
    }
}

fn ensure_store_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, PARCEL_TABLE)? {
        return Err(RepoError::MissingRequiredTable(PARCEL_TABLE));
    }

    for column in PARCEL_COLUMNS {
        if !table_has_column(conn, PARCEL_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: PARCEL_TABLE,
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
