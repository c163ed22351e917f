//! One TCP session with the daemon: dial, handshake, authenticate, and the
//! line-oriented command/response plumbing everything else is built on.

use std::collections::HashMap;
use std::io;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::player::PlayerError;

/// An open authenticated session. Dropping it closes the socket.
pub(crate) struct Connection {
    stream: BufReader<TcpStream>,
}

impl Connection {
    /// Dial `address`, consume the `OK MPD <version>` greeting and, when
    /// `password` is non-empty, authenticate before handing the session out.
    pub(crate) async fn open(address: &str, password: &str) -> Result<Self, PlayerError> {
        let stream = TcpStream::connect(address).await?;
        let mut conn = Self {
            stream: BufReader::new(stream),
        };

        let greeting = conn.read_line().await?;
        if !greeting.starts_with("OK MPD") {
            return Err(PlayerError::Protocol(format!(
                "unexpected greeting: {greeting}"
            )));
        }

        if !password.is_empty()
            && let Err(err) = conn.run(&format!("password {}", quote(password))).await
        {
            return Err(match err {
                PlayerError::Protocol(msg) => PlayerError::Auth(msg),
                other => other,
            });
        }

        Ok(conn)
    }

    /// Lightweight liveness probe.
    pub(crate) async fn ping(&mut self) -> Result<(), PlayerError> {
        self.run("ping").await.map(drop)
    }

    /// Send one command and collect its `key: value` response pairs until the
    /// terminating `OK`. An `ACK` line aborts with a protocol error.
    pub(crate) async fn run(
        &mut self,
        command: &str,
    ) -> Result<HashMap<String, String>, PlayerError> {
        self.stream.get_mut().write_all(command.as_bytes()).await?;
        self.stream.get_mut().write_all(b"\n").await?;

        let mut fields = HashMap::new();
        loop {
            let line = self.read_line().await?;
            if line == "OK" {
                return Ok(fields);
            }
            if let Some(msg) = line.strip_prefix("ACK") {
                return Err(PlayerError::Protocol(msg.trim_start().to_string()));
            }
            if let Some((key, value)) = line.split_once(": ") {
                fields.insert(key.to_string(), value.to_string());
            }
        }
    }

    async fn read_line(&mut self) -> Result<String, PlayerError> {
        let mut line = String::new();
        let read = self.stream.read_line(&mut line).await?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "daemon closed the connection",
            )
            .into());
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Quote a command argument per the MPD protocol: wrap in double quotes,
/// backslash-escape `\` and `"`.
fn quote(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    for c in arg.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_wraps_and_escapes() {
        assert_eq!(quote("hunter2"), "\"hunter2\"");
        assert_eq!(quote("pass word"), "\"pass word\"");
        assert_eq!(quote(r#"se"cret"#), r#""se\"cret""#);
        assert_eq!(quote(r"back\slash"), r#""back\\slash""#);
        assert_eq!(quote(""), "\"\"");
    }
}
