//! Codec for the wire protocol through which commands and replies are exchanged.
//!
//! The wire protocol is optimized for simplicity, where both request
//! and reply are line-delimited and the request is further split by
//! whitespaces into a command name and arguments.
//!
//! # Request
//!
//! - GET
//!     - `GET $key\n`
//! - SET
//!     - `SET $key $value\n`
//!
//! # Reply
//!
//! A single line carrying the computed reply:
//!
//! - `OK\n` for a well-formed SET
//! - `$value\n` for a GET whose key is present
//! - `nil\n` for a GET whose key is absent
//! - `\n` for a malformed or unrecognized command
//!
//! Decoding never rejects a line on content: every line becomes a
//! [`Command`], and arity or name problems are settled at dispatch.
//! Only line-level faults (for example invalid UTF-8) are codec errors.

use super::types::Command;
use anyhow::{Context, Result};
use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder, LinesCodec};

#[derive(Default, Debug)]
pub struct Codec {
    lines: LinesCodec,
}

impl Decoder for Codec {
    type Item = Command;

    type Error = anyhow::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let line = self
            .lines
            .decode(src)
            .context("unable to decode request line")?;

        Ok(line.as_deref().map(Command::parse))
    }
}

impl Encoder<String> for Codec {
    type Error = anyhow::Error;

    fn encode(&mut self, item: String, dst: &mut BytesMut) -> Result<(), Self::Error> {
        self.lines
            .encode(item, dst)
            .context("unable to encode reply line")
    }
}
