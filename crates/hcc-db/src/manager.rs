//! r2d2 connection manager for Oracle catalog connections.

use hcc_config::DatabaseConfig;
use oracle::Connection;
use r2d2::ManageConnection;

/// Connection factory handed to the r2d2 pool.
///
/// Holds the credentials and easy-connect descriptor resolved at startup;
/// the pool calls back into it whenever it needs to open or validate a
/// catalog connection.
#[derive(Debug)]
pub struct CatalogConnectionManager {
    user: String,
    password: String,
    descriptor: String,
}

impl CatalogConnectionManager {
    /// Build a manager from the database configuration section.
    #[must_use]
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            user: config.user.clone(),
            password: config.password.clone(),
            descriptor: config.connect_descriptor(),
        }
    }

    /// The easy-connect descriptor this manager dials.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl ManageConnection for CatalogConnectionManager {
    type Connection = Connection;
    type Error = oracle::Error;

    fn connect(&self) -> Result<Self::Connection, Self::Error> {
        Connection::connect(&self.user, &self.password, &self.descriptor)
    }

    fn is_valid(&self, conn: &mut Self::Connection) -> Result<(), Self::Error> {
        conn.ping()
    }

    fn has_broken(&self, _conn: &mut Self::Connection) -> bool {
        false
    }
}
