use crate::Error;
use tokio_postgres::Transaction;

/// Session defines the one transaction a run writes through.
///
/// Dropping a session without calling [`Session::commit`] must discard
/// everything it executed.
#[async_trait::async_trait]
pub trait Session: Send {
    async fn run(&mut self, sql: &str) -> Result<(), Error>;
    async fn commit(self) -> Result<(), Error>;
}

#[async_trait::async_trait]
impl<'a> Session for Transaction<'a> {
    async fn run(&mut self, sql: &str) -> Result<(), Error> {
        Ok(self.batch_execute(sql).await?)
    }
    async fn commit(self) -> Result<(), Error> {
        Ok(Transaction::commit(self).await?)
    }
}
