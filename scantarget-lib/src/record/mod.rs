use std::fmt;

use serde::Serialize;
use tracing::debug;

/// Fabricated credentials for scanners to flag. Not real and never used
/// to authenticate anything.
pub const DATABASE_PASSWORD: &str = "admin123";
pub const API_KEY: &str = "sk-1234567890abcdef";

/// Name returned for every fetched record
pub const PLACEHOLDER_NAME: &str = "Demo User";

/// A fabricated user record echoing the requested identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
}

impl UserRecord {
    #[must_use]
    pub fn new(id: i64, name: String) -> Self {
        UserRecord { id, name }
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ id: {}, name: \"{}\" }}", self.id, self.name)
    }
}

/// Fetch the demo record for an identifier
///
/// No lookup happens: any integer is accepted and echoed back with the
/// placeholder name. The query string is built by formatting so scanners
/// see an injection-shaped statement; it is logged at debug level and
/// never executed.
#[must_use]
pub fn fetch_user_record(id: i64) -> UserRecord {
    let query = format!("SELECT * FROM users WHERE id = {id}");
    debug!("executing query: {query}");
    // Sensitive-value-in-logs marker, same demo purpose as the query line
    debug!("authenticating with api key {API_KEY}");
    UserRecord::new(id, PLACEHOLDER_NAME.to_string())
}
