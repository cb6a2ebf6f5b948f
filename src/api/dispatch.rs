//! Command interpretation shared by the network and console sessions.

use super::types::Command;
use crate::storage::Store;

const OK: &str = "OK";
const NIL: &str = "nil";

/// Interprets one command against `store` and yields the reply line.
///
/// Unknown names, wrong arities, and empty commands all collapse to an
/// empty reply; the wire carries no richer error signal than a blank
/// line. Arguments to SET beyond the value are accepted and ignored.
pub async fn dispatch<S>(command: Command, store: &mut S) -> Result<String, S::Err>
where
    S: Store,
{
    match command.name.as_str() {
        "GET" => match command.args.as_slice() {
            [key] => {
                let value = store.get(key).await?;
                Ok(value.unwrap_or_else(|| NIL.to_owned()))
            }
            _ => Ok(String::new()),
        },
        "SET" => match command.args.as_slice() {
            [key, value, ..] => {
                store.set(key.clone(), value.clone()).await?;
                Ok(OK.to_owned())
            }
            _ => Ok(String::new()),
        },
        _ => Ok(String::new()),
    }
}
