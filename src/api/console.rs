//! Interactive session bound to the process's standard streams.

use super::{dispatch::dispatch, types::Command};
use crate::storage::Store;
use anyhow::{Context, Result};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

const PROMPT: &[u8] = b"> ";

/// Prompt-driven session running the same read-dispatch-write loop as a
/// network connection, against an arbitrary input/output pair.
pub struct Console<R, W, S> {
    input: R,
    output: W,
    store: S,
}

impl<S> Console<BufReader<Stdin>, Stdout, S>
where
    S: Store<Err = anyhow::Error>,
{
    pub fn stdio(store: S) -> Self {
        Self::new(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            store,
        )
    }
}

impl<R, W, S> Console<R, W, S>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Store<Err = anyhow::Error>,
{
    pub fn new(input: R, output: W, store: S) -> Self {
        Self {
            input,
            output,
            store,
        }
    }

    /// Serves the session until the input stream ends.
    pub async fn run(mut self) -> Result<()> {
        let mut line = String::new();

        loop {
            self.output
                .write_all(PROMPT)
                .await
                .context("unable to write prompt")?;
            self.output.flush().await.context("unable to flush prompt")?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .await
                .context("unable to read console line")?;
            if read == 0 {
                return Ok(());
            }

            let reply = dispatch(Command::parse(&line), &mut self.store).await?;

            self.output
                .write_all(reply.as_bytes())
                .await
                .context("unable to write reply")?;
            self.output
                .write_all(b"\n")
                .await
                .context("unable to write reply")?;
            self.output.flush().await.context("unable to flush reply")?;
        }
    }
}
