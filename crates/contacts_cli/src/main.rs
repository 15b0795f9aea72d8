//! CLI smoke entry point.
//!
//! Opens a contact store (file path or in-memory) and runs the core queries
//! once, to verify `contacts_core` wiring outside any host application.
//!
//! Usage: `contacts_cli [DB_PATH] [IDENTIFIER]`

use contacts_core::{
    open_db, open_db_in_memory, ContactRepository, DbResult, SqliteContactRepository,
};
use rusqlite::Connection;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let db_path = args.next();
    let identifier = args.next();

    match run(db_path.as_deref(), identifier.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("contacts_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: Option<&str>, identifier: Option<&str>) -> Result<(), Box<dyn Error>> {
    println!("contacts_core version={}", contacts_core::core_version());

    let conn = open_store(db_path)?;
    let repo = SqliteContactRepository::try_new(&conn)?;
    let contacts = repo.get_all()?;
    println!("contacts count={}", contacts.len());

    if let Some(identifier) = identifier {
        match repo.get_by_identifier(identifier)? {
            Some(contact) => {
                let duplicated = repo.contact_with_same_identifier_exists(&contact)?;
                println!("lookup id={} duplicated={duplicated}", contact.id);
            }
            None => println!("lookup result=none"),
        }
    }

    Ok(())
}

fn open_store(db_path: Option<&str>) -> DbResult<Connection> {
    match db_path {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
}
