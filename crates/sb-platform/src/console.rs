//! Line-oriented console shared by the permission gateway and the shell.
//!
//! Blocking reads run on tokio's blocking pool so they never stall the
//! runtime's worker threads.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

struct ConsoleStreams {
    reader: Box<dyn BufRead + Send>,
    writer: Box<dyn Write + Send>,
}

#[derive(Clone)]
pub struct ConsoleIo {
    streams: Arc<Mutex<ConsoleStreams>>,
}

impl ConsoleIo {
    pub fn new(reader: impl BufRead + Send + 'static, writer: impl Write + Send + 'static) -> Self {
        Self {
            streams: Arc::new(Mutex::new(ConsoleStreams {
                reader: Box::new(reader),
                writer: Box::new(writer),
            })),
        }
    }

    /// Process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }

    /// Print `question`, then read one line. `Ok(None)` at end of input.
    pub async fn ask(&self, question: impl Into<String>) -> io::Result<Option<String>> {
        let question = question.into();
        self.with_streams(move |streams| {
            write!(streams.writer, "{question} ")?;
            streams.writer.flush()?;

            let mut line = String::new();
            if streams.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            Ok(Some(line.trim().to_string()))
        })
        .await
    }

    pub async fn say(&self, text: impl Into<String>) -> io::Result<()> {
        let text = text.into();
        self.with_streams(move |streams| {
            writeln!(streams.writer, "{text}")?;
            streams.writer.flush()
        })
        .await
    }

    async fn with_streams<T, F>(&self, f: F) -> io::Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut ConsoleStreams) -> io::Result<T> + Send + 'static,
    {
        let streams = Arc::clone(&self.streams);
        tokio::task::spawn_blocking(move || {
            let mut guard = streams
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "console lock poisoned"))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Writer whose output stays readable after being boxed.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(pub(crate) Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn ask_prints_question_and_trims_answer() {
        let out = SharedBuffer::default();
        let console = ConsoleIo::new(io::Cursor::new("  yes \n"), out.clone());

        let answer = console.ask("Allow? [y/n]").await.unwrap();

        assert_eq!(answer.as_deref(), Some("yes"));
        assert_eq!(out.contents(), "Allow? [y/n] ");
    }

    #[tokio::test]
    async fn ask_returns_none_at_end_of_input() {
        let console = ConsoleIo::new(io::Cursor::new(""), io::sink());

        assert_eq!(console.ask("?").await.unwrap(), None);
    }

    #[tokio::test]
    async fn lines_are_consumed_in_order_across_clones() {
        let console = ConsoleIo::new(io::Cursor::new("a\nb\n"), io::sink());
        let other = console.clone();

        assert_eq!(console.ask("").await.unwrap().as_deref(), Some("a"));
        assert_eq!(other.ask("").await.unwrap().as_deref(), Some("b"));
    }
}
