//! [`DisplayServer`] implementation backed by Hyprland.
//!
//! Monitors are queried directly over Hyprland's command socket at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
//! Applying a layout runs the generated `hyprctl` command line through
//! `sh -c` so the operator sees exactly what they could paste into a shell.

use crate::command::MonitorInfo;
use crate::traits::DisplayServer;
use log::debug;
use serde::Deserialize;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::process::Command;

/// Hyprland-backed display server.
///
/// No connection is held open; each query opens a short-lived IPC request.
#[derive(Debug, Default)]
pub struct HyprlandDisplay;

/// Errors that can occur when talking to Hyprland.
#[derive(Debug, thiserror::Error)]
pub enum HyprlandError {
    #[error("hyprland IPC error: {0}")]
    Ipc(String),
    #[error("malformed monitor list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to run shell: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("command exited with {status}\n{output}")]
    Failed { status: String, output: String },
}

impl HyprlandDisplay {
    pub fn new() -> Self {
        Self
    }
}

//  Direct Hyprland IPC helpers

/// Resolve the Hyprland command socket path.
fn socket_path() -> Result<PathBuf, HyprlandError> {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .map_err(|_| HyprlandError::Ipc("XDG_RUNTIME_DIR not set".into()))?;
    let his = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
        .map_err(|_| HyprlandError::Ipc("HYPRLAND_INSTANCE_SIGNATURE not set".into()))?;
    Ok(PathBuf::from(format!(
        "{}/hypr/{}/.socket.sock",
        runtime_dir, his
    )))
}

/// Send a JSON data query (`j/<command>`) and return the raw response.
fn ipc_json(data_command: &str) -> Result<String, HyprlandError> {
    let path = socket_path()?;
    let mut stream = UnixStream::connect(&path)
        .map_err(|e| HyprlandError::Ipc(format!("connect to {}: {}", path.display(), e)))?;

    stream
        .write_all(format!("j/{}", data_command).as_bytes())
        .map_err(|e| HyprlandError::Ipc(format!("write: {}", e)))?;

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .map_err(|e| HyprlandError::Ipc(format!("read: {}", e)))?;

    String::from_utf8(response).map_err(|e| HyprlandError::Ipc(format!("utf-8: {}", e)))
}

/// Subset of the JSON object returned by `j/monitors`.
#[derive(Deserialize)]
struct MonitorJson {
    name: String,
    width: u32,
    height: u32,
    x: i32,
    y: i32,
}

/// Parse the `j/monitors` answer, dropping entries with a zero size.
fn parse_monitors(json: &str) -> Result<Vec<MonitorInfo>, HyprlandError> {
    let monitors: Vec<MonitorJson> = serde_json::from_str(json)?;
    Ok(monitors
        .into_iter()
        .filter(|m| m.width > 0 && m.height > 0)
        .map(|m| MonitorInfo {
            name: m.name,
            width: m.width,
            height: m.height,
            x: m.x,
            y: m.y,
        })
        .collect())
}

//  DisplayServer implementation

impl DisplayServer for HyprlandDisplay {
    type Error = HyprlandError;

    fn monitors(&self) -> Result<Vec<MonitorInfo>, Self::Error> {
        parse_monitors(&ipc_json("monitors")?)
    }

    fn apply(&self, command: &str) -> Result<String, Self::Error> {
        debug!("running: {}", command);
        let out = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(HyprlandError::Spawn)?;

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));

        if out.status.success() {
            Ok(output)
        } else {
            Err(HyprlandError::Failed {
                status: out.status.to_string(),
                output,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_real_monitor_answer() {
        let json = r#"[
            {"id": 0, "name": "eDP-1", "description": "BOE 0x0BCA", "width": 2256,
             "height": 1504, "refreshRate": 59.99, "x": 0, "y": 0, "scale": 1.5,
             "focused": true},
            {"id": 1, "name": "DP-3", "description": "Dell U2720Q", "width": 3840,
             "height": 2160, "refreshRate": 60.0, "x": -3840, "y": -200,
             "scale": 1.0, "focused": false}
        ]"#;
        let monitors = parse_monitors(json).unwrap();
        assert_eq!(monitors.len(), 2);
        assert_eq!(monitors[0].name, "eDP-1");
        assert_eq!(monitors[1].x, -3840);
        assert_eq!(monitors[1].y, -200);
        assert_eq!(monitors[1].width, 3840);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_monitors("ok"),
            Err(HyprlandError::Json(_))
        ));
    }

    #[test]
    fn parse_skips_zero_sized_outputs() {
        let json = r#"[{"name": "HEADLESS-1", "width": 0, "height": 0, "x": 0, "y": 0}]"#;
        assert!(parse_monitors(json).unwrap().is_empty());
    }

    #[test]
    fn apply_collects_output_on_success() {
        let out = HyprlandDisplay::new().apply("echo placed; echo warn >&2").unwrap();
        assert!(out.contains("placed"));
        assert!(out.contains("warn"));
    }

    #[test]
    fn apply_reports_failure_with_output() {
        let err = HyprlandDisplay::new()
            .apply("echo 'no such monitor'; exit 3")
            .unwrap_err();
        match err {
            HyprlandError::Failed { output, .. } => assert!(output.contains("no such monitor")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
