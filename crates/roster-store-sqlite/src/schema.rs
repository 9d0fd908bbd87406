//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS person (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    address     TEXT NOT NULL,
    gender      TEXT NOT NULL,   -- free-form
    email       TEXT NOT NULL,
    -- Authoritative email uniqueness check; a violation surfaces as
    -- Error::DuplicateEmail.
    CONSTRAINT person_email_unique UNIQUE (email)
);

CREATE INDEX IF NOT EXISTS person_name_idx ON person(first_name, last_name);

PRAGMA user_version = 1;
";

/// Column list shared by every `SELECT`, in [`crate::store`] row order.
pub const PERSON_COLUMNS: &str = "id, first_name, last_name, address, gender, email";
