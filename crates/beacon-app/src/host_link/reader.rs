//! Inbound half of the host link.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use super::protocol::{parse_line, HostMessage};

/// Reads host messages line by line, skipping anything unparseable.
pub struct HostReader<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> HostReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
        }
    }

    /// The next well-formed message, or `None` at end of input.
    ///
    /// A read error is treated as end of input.
    pub async fn next_message(&mut self) -> Option<HostMessage> {
        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    if let Some(msg) = parse_line(&line) {
                        return Some(msg);
                    }
                }
                Ok(None) => return None,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read from host");
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn skips_garbage_until_eof() {
        let input = b"{\"type\":\"TabsCleared\"}\n\nnot json\n{\"type\":\"Shutdown\"}\n";
        let mut reader = HostReader::new(&input[..]);

        assert_eq!(reader.next_message().await, Some(HostMessage::TabsCleared));
        assert_eq!(reader.next_message().await, Some(HostMessage::Shutdown));
        assert_eq!(reader.next_message().await, None);
    }
}
