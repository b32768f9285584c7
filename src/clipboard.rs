//! [`Clipboard`] implementations.
//!
//! [`SystemClipboard`] tries a chain of [`Backend`]s in order and stops at
//! the first one that accepts the text.  The default chain pipes into
//! `wl-copy` first, whose forked server keeps the selection after we exit.
//! The native `arboard` clipboard comes second; its selection is served by
//! this process and therefore only lives as long as the session.

use crate::traits::Clipboard;
use log::{debug, warn};
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::{mpsc, OnceLock};

/// Errors produced while copying.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("native clipboard: {0}")]
    Native(#[from] arboard::Error),
    #[error("{program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Exit { program: String, status: String },
    #[error("no clipboard backend available ({0})")]
    Unavailable(String),
}

/// A clipboard tool that reads the text to copy from stdin.
#[derive(Debug, Clone)]
pub struct PipeBackend {
    program: String,
    args: Vec<String>,
}

impl PipeBackend {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Name of the underlying program.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn pipe(&self, text: &str) -> Result<(), ClipboardError> {
        let io_err = |source| ClipboardError::Io {
            program: self.program.clone(),
            source,
        };
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(io_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(io_err)?;
        }

        let status = child.wait().map_err(io_err)?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Exit {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }
}

type Request = (String, mpsc::Sender<Result<(), ClipboardError>>);

/// The platform clipboard.
///
/// A single `arboard::Clipboard` is opened on first use and owned by a
/// dedicated thread for the rest of the session, so the selection is not
/// dropped when the copy request returns.
#[derive(Debug, Default)]
pub struct NativeBackend {
    owner: OnceLock<mpsc::Sender<Request>>,
}

impl NativeBackend {
    fn owner(&self) -> &mpsc::Sender<Request> {
        self.owner.get_or_init(|| {
            let (tx, rx) = mpsc::channel::<Request>();
            std::thread::spawn(move || serve(rx));
            tx
        })
    }

    fn set(&self, text: &str) -> Result<(), ClipboardError> {
        let gone = || ClipboardError::Unavailable("native clipboard thread stopped".into());
        let (reply_tx, reply_rx) = mpsc::channel();
        self.owner()
            .send((text.to_string(), reply_tx))
            .map_err(|_| gone())?;
        reply_rx.recv().map_err(|_| gone())?
    }
}

/// Owner loop of the native clipboard handle.
fn serve(requests: mpsc::Receiver<Request>) {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            warn!("failed to open native clipboard: {}", e);
            None
        }
    };
    for (text, reply) in requests {
        let result = match clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(text).map_err(ClipboardError::from),
            None => Err(ClipboardError::Unavailable(
                "native clipboard could not be opened".into(),
            )),
        };
        let _ = reply.send(result);
    }
}

/// One way of reaching the clipboard.
#[derive(Debug)]
pub enum Backend {
    Native(NativeBackend),
    Pipe(PipeBackend),
}

impl Backend {
    pub fn name(&self) -> &str {
        match self {
            Backend::Native(_) => "arboard",
            Backend::Pipe(p) => p.program(),
        }
    }

    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        match self {
            Backend::Native(n) => n.set(text),
            Backend::Pipe(p) => p.pipe(text),
        }
    }
}

/// Ordered chain of clipboard backends.
pub struct SystemClipboard {
    backends: Vec<Backend>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_backends(vec![
            Backend::Pipe(PipeBackend::new("wl-copy", &[])),
            Backend::Native(NativeBackend::default()),
        ])
    }
}

impl SystemClipboard {
    pub fn with_backends(backends: Vec<Backend>) -> Self {
        Self { backends }
    }
}

impl Clipboard for SystemClipboard {
    type Error = ClipboardError;

    fn copy(&self, text: &str) -> Result<String, ClipboardError> {
        let mut failures = Vec::new();
        for backend in &self.backends {
            match backend.copy(text) {
                Ok(()) => {
                    debug!("copied {} bytes with {}", text.len(), backend.name());
                    return Ok(backend.name().to_string());
                }
                Err(e) => {
                    warn!("clipboard backend {} failed: {}", backend.name(), e);
                    failures.push(e.to_string());
                }
            }
        }
        Err(ClipboardError::Unavailable(failures.join("; ")))
    }
}
