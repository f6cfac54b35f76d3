use crate::Error;
use tokio_postgres::Client;
use tokio_postgres::Config;

/// Name reported to the server in `pg_stat_activity`.
pub const APPLICATION_NAME: &str = "materialize";

/// Connection parameters for a single run.
#[derive(Clone)]
pub struct Params {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Params {
    pub fn config(&self) -> Config {
        let mut config = Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.user)
            .password(&self.password)
            .application_name(APPLICATION_NAME);
        config
    }

    /// Open one connection and drive it on the current runtime.
    ///
    /// The connection task ends on its own once the returned client is
    /// dropped, which is what closes the session on every exit path.
    pub async fn connect(&self) -> Result<Client, Error> {
        log::info!(
            "connecting to {}@{}:{}/{}",
            self.user,
            self.host,
            self.port,
            self.database
        );
        let tls = tokio_postgres::tls::NoTls;
        let (client, connection) = self.config().connect(tls).await?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("connection error: {}", e);
            }
        });
        client
            .batch_execute("SET client_min_messages TO WARNING")
            .await?;
        Ok(client)
    }
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}
