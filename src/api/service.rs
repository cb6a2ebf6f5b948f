//! Communication gateway meant to mediate access to storage.

use super::{dispatch::dispatch, types::Command};
use crate::storage::Store;
use anyhow::Result;
use futures::{Sink, SinkExt, Stream, StreamExt};
use tracing::info;

#[derive(Debug)]
pub struct StoreService<F, S> {
    frames: F,
    store: S,
}

impl<F, S> StoreService<F, S>
where
    F: Stream<Item = anyhow::Result<Command>> + Sink<String, Error = anyhow::Error> + Unpin,
    S: Store<Err = anyhow::Error>,
{
    pub fn new(frames: F, store: S) -> Self {
        Self { frames, store }
    }

    pub async fn start(mut self) -> Result<()> {
        while let Some(command) = self.frames.next().await {
            let reply = self.process(command?).await?;
            self.frames.send(reply).await?;
        }
        Ok(())
    }

    async fn process(&mut self, command: Command) -> Result<String> {
        info!("command: {} args: {:?}", command.name, command.args);
        dispatch(command, &mut self.store).await
    }
}
