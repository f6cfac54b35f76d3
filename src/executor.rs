use crate::Action;
use crate::Error;
use crate::Params;
use crate::Session;
use crate::Target;
use std::io::Write;

/// Runs an action's statements through a [`Session`], committing only
/// after every statement succeeded.
///
/// With `verbose` set, each statement is written to `echo` (one per line,
/// exactly as sent) before it is executed.
pub struct Executor<W> {
    verbose: bool,
    echo: W,
}

impl Executor<std::io::Stdout> {
    pub fn new(verbose: bool) -> Self {
        Self::with_echo(verbose, std::io::stdout())
    }
}

impl<W: Write> Executor<W> {
    pub fn with_echo(verbose: bool, echo: W) -> Self {
        Self { verbose, echo }
    }

    pub async fn apply<S: Session>(
        &mut self,
        mut session: S,
        action: Action,
        target: &Target,
    ) -> Result<(), Error> {
        log::info!("{} {}", action, target);
        for ref sql in action.plan(target) {
            if self.verbose {
                writeln!(self.echo, "{}", sql)?;
                self.echo.flush()?;
            }
            log::debug!("executing {}", sql);
            session.run(sql).await?;
        }
        session.commit().await?;
        log::info!("{} {} committed", action, target);
        Ok(())
    }
}

/// Connect, run `action` against `target` in one transaction, and commit.
///
/// On any failure the transaction and connection are dropped uncommitted,
/// so nothing from this run persists. Driver errors come back unchanged.
pub async fn execute(
    action: Action,
    target: &Target,
    params: &Params,
    verbose: bool,
) -> Result<(), Error> {
    let mut client = params.connect().await?;
    let transaction = client.transaction().await?;
    Executor::new(verbose)
        .apply(transaction, action, target)
        .await
}
