//! Network server meant to service requests from clients.

use crate::{
    api::{framed, StoreService},
    storage::Store,
};
use std::net::SocketAddr;
use tokio::{
    io::{AsyncRead, AsyncWrite},
    net::TcpListener,
};
use tracing::{error, info, span, Level};
use tracing_futures::Instrument;

pub struct Server<S> {
    listener: TcpListener,
    store: S,
}

impl<S> Server<S>
where
    S: Store<Err = anyhow::Error> + Clone + Send + Sync + 'static,
{
    pub fn new(listener: TcpListener, store: S) -> Self {
        Self { listener, store }
    }

    pub async fn start(self) {
        loop {
            match self.listener.accept().await {
                Ok((conn, peer_addr)) => self.handle(conn, peer_addr),
                Err(e) => error!(reason = %e, "unable to accept connection"),
            }
        }
    }

    fn handle<C>(&self, conn: C, peer_addr: SocketAddr)
    where
        C: AsyncRead + AsyncWrite + Send + Unpin + 'static,
    {
        let service = self.new_service(conn);

        let span = span!(Level::INFO, "connection", peer_addr = %peer_addr);

        tokio::spawn(
            async move {
                info!("serving new connection");

                match service.start().await {
                    Ok(_) => info!("bye"),
                    Err(e) => error!(reason = %e, "oops"),
                }
            }
            .instrument(span),
        );
    }

    fn new_service<C>(&self, conn: C) -> StoreService<C, S>
    where
        C: AsyncRead + AsyncWrite + Unpin,
    {
        StoreService::new(framed(conn), self.store.clone())
    }
}
