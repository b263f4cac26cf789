//! Debug log file writer.
//!
//! Entries are handed to a background thread over a bounded channel so the
//! TUI thread never blocks on disk. The writer buffers output and flushes
//! when enough bytes accumulate or the flush interval elapses. Logs land in
//! `~/.gwkit/logs/gwkit.log`.

use super::{LogError, LogLevel, formatter::LogFormatter};
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{
        Mutex,
        mpsc::{self, Receiver, RecvTimeoutError, SyncSender},
    },
    thread,
    time::{Duration, Instant},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

const FLUSH_BYTES: usize = 8 * 1024;
const FLUSH_INTERVAL: Duration = Duration::from_millis(200);
const QUEUE_CAPACITY: usize = 1024;
#[cfg(unix)]
const PRIVATE_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_FILE_MODE: u32 = 0o600;

enum WriterMessage {
    Entry(LogLevel, String),
    Flush(SyncSender<Result<(), String>>),
}

struct WriterState {
    writer: Option<BufWriter<File>>,
    unflushed_bytes: usize,
    last_flush: Instant,
    last_error: Option<String>,
}

pub(super) struct DebugLogger {
    formatter: LogFormatter,
    sender: Mutex<Option<SyncSender<WriterMessage>>>,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self {
            formatter: LogFormatter::new(),
            sender: Mutex::new(None),
        }
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let sender = self.writer_sender()?;
        sender
            .send(WriterMessage::Entry(level, message.to_string()))
            .map_err(|err| LogError::WorkerError(format!("failed to queue log entry: {}", err)))
    }

    pub(super) fn flush(&self) -> Result<(), LogError> {
        let sender = match self.sender.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        let Some(sender) = sender else {
            return Ok(());
        };

        let (ack_tx, ack_rx) = mpsc::sync_channel(0);
        sender
            .send(WriterMessage::Flush(ack_tx))
            .map_err(|err| LogError::WorkerError(format!("failed to queue log flush: {}", err)))?;

        match ack_rx.recv() {
            Ok(result) => result.map_err(LogError::WorkerError),
            Err(err) => Err(LogError::WorkerError(format!("log writer went away during flush: {}", err))),
        }
    }

    fn writer_sender(&self) -> Result<SyncSender<WriterMessage>, LogError> {
        let mut guard = match self.sender.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(sender) = guard.as_ref() {
            return Ok(sender.clone());
        }

        let (tx, rx) = mpsc::sync_channel(QUEUE_CAPACITY);
        let formatter = self.formatter.clone();
        thread::Builder::new()
            .name("gwkit-log-writer".to_string())
            .spawn(move || run_writer(rx, formatter))
            .map_err(|err| LogError::WorkerError(format!("failed to start log writer: {}", err)))?;

        *guard = Some(tx.clone());
        Ok(tx)
    }
}

fn log_file_path() -> Result<PathBuf, LogError> {
    let home = dirs::home_dir().ok_or_else(|| LogError::DirectoryCreationError("home directory not found".to_string()))?;
    let log_dir = home.join(".gwkit").join("logs");
    create_private_directory(&log_dir)?;
    Ok(log_dir.join("gwkit.log"))
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path).map_err(|err| LogError::DirectoryCreationError(format!("{}: {}", path.display(), err)))?;
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_DIR_MODE))?;
    }
    Ok(())
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        options.mode(PRIVATE_FILE_MODE);
    }
    let file = options.open(path)?;
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_FILE_MODE))?;
    }
    Ok(file)
}

fn run_writer(receiver: Receiver<WriterMessage>, formatter: LogFormatter) {
    let mut state = WriterState {
        writer: None,
        unflushed_bytes: 0,
        last_flush: Instant::now(),
        last_error: None,
    };

    loop {
        match receiver.recv_timeout(FLUSH_INTERVAL) {
            Ok(WriterMessage::Entry(level, message)) => {
                if let Err(err) = write_entry(&mut state, &formatter, level, &message) {
                    state.last_error = Some(err.to_string());
                }
            }
            Ok(WriterMessage::Flush(ack)) => {
                let mut result = flush_writer(&mut state).map_err(|err| err.to_string());
                if let (Ok(()), Some(previous)) = (&result, state.last_error.take()) {
                    result = Err(previous);
                }
                let _ = ack.send(result);
            }
            Err(RecvTimeoutError::Timeout) => {
                if should_flush(state.unflushed_bytes, state.last_flush.elapsed())
                    && let Err(err) = flush_writer(&mut state)
                {
                    state.last_error = Some(err.to_string());
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                let _ = flush_writer(&mut state);
                break;
            }
        }
    }
}

fn write_entry(state: &mut WriterState, formatter: &LogFormatter, level: LogLevel, message: &str) -> Result<(), LogError> {
    if state.writer.is_none() {
        let file = open_private_append_file(&log_file_path()?)?;
        state.writer = Some(BufWriter::new(file));
    }

    let line = formatter.format(Some(level), message);
    if let Some(writer) = state.writer.as_mut() {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    state.unflushed_bytes = state.unflushed_bytes.saturating_add(line.len() + 1);

    if should_flush(state.unflushed_bytes, state.last_flush.elapsed()) {
        flush_writer(state)?;
    }
    Ok(())
}

fn flush_writer(state: &mut WriterState) -> Result<(), LogError> {
    if let Some(writer) = state.writer.as_mut() {
        writer.flush()?;
    }
    state.unflushed_bytes = 0;
    state.last_flush = Instant::now();
    Ok(())
}

fn should_flush(unflushed_bytes: usize, since_last_flush: Duration) -> bool {
    unflushed_bytes >= FLUSH_BYTES || since_last_flush >= FLUSH_INTERVAL
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
