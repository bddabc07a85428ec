//! Single instance management for Emome.
//!
//! Ensures only one picker runs at a time using interprocess local sockets.
//! When a second instance starts (or `emome --toggle` runs), it asks the
//! first instance to toggle its window, then exits.

use interprocess::local_socket::{traits::ListenerExt, GenericFilePath, ListenerOptions, ToFsName};
use std::io::{BufRead, BufReader, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, info, warn};

use crate::error::{EmomeError, EmomeResult};

/// The socket name for Emome IPC.
const SOCKET_NAME: &str = "emome.sock";

/// Line sent to the primary instance.
const TOGGLE_COMMAND: &str = "toggle";

/// Messages from other Emome instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceMessage {
    /// Another instance asked to toggle the window.
    ToggleRequested,
}

/// Result of trying to become the primary instance.
pub enum InstanceResult {
    /// We are the primary instance. The receiver gets messages from other instances.
    Primary(Receiver<InstanceMessage>),
    /// Another instance is already running and has been signalled.
    Secondary,
}

/// Try to become the primary instance or signal an existing one.
pub fn acquire_or_signal() -> InstanceResult {
    if send_toggle().is_ok() {
        return InstanceResult::Secondary;
    }

    match start_listener(&socket_path()) {
        Ok(rx) => InstanceResult::Primary(rx),
        Err(e) => {
            // Lost a race with another starting instance, or the socket is unusable
            if send_toggle().is_ok() {
                InstanceResult::Secondary
            } else {
                warn!("Could not acquire single-instance lock: {}", e);
                let (_, rx) = mpsc::channel();
                InstanceResult::Primary(rx)
            }
        }
    }
}

/// Get the socket path for the current platform.
fn socket_path() -> String {
    #[cfg(target_os = "windows")]
    {
        format!("@{}", SOCKET_NAME)
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(runtime_dir) = dirs::runtime_dir() {
            runtime_dir.join(SOCKET_NAME).to_string_lossy().into_owned()
        } else if let Some(cache_dir) = dirs::cache_dir() {
            cache_dir.join(SOCKET_NAME).to_string_lossy().into_owned()
        } else {
            format!("/tmp/{}", SOCKET_NAME)
        }
    }
}

/// Ask a running instance to toggle its window.
pub fn send_toggle() -> EmomeResult<()> {
    send_toggle_to(&socket_path())
}

fn send_toggle_to(path: &str) -> EmomeResult<()> {
    use interprocess::local_socket::{traits::Stream as _, Stream};

    let name = path
        .to_fs_name::<GenericFilePath>()
        .map_err(|e| EmomeError::Ipc(format!("bad socket name: {}", e)))?;

    let mut stream =
        Stream::connect(name).map_err(|e| EmomeError::Ipc(format!("no running instance: {}", e)))?;
    stream.write_all(format!("{}\n", TOGGLE_COMMAND).as_bytes())?;
    info!("Signalled running instance to toggle");
    Ok(())
}

/// Start the IPC listener for receiving commands from other instances.
fn start_listener(path: &str) -> EmomeResult<Receiver<InstanceMessage>> {
    // Clean up a stale socket file (Unix only)
    #[cfg(not(target_os = "windows"))]
    {
        let _ = std::fs::remove_file(path);
    }

    let name = path
        .to_fs_name::<GenericFilePath>()
        .map_err(|e| EmomeError::Ipc(format!("bad socket name: {}", e)))?;
    let listener = ListenerOptions::new()
        .name(name)
        .create_sync()
        .map_err(|e| EmomeError::Ipc(format!("failed to listen on {}: {}", path, e)))?;

    let (tx, rx) = mpsc::channel();

    thread::Builder::new()
        .name("emome-instance".to_string())
        .spawn(move || listener_loop(listener, tx))?;

    info!("Single instance listener started at {}", path);
    Ok(rx)
}

/// The main listener loop (runs in background thread).
fn listener_loop(listener: interprocess::local_socket::Listener, tx: Sender<InstanceMessage>) {
    for conn in listener.incoming().filter_map(|c| c.ok()) {
        let tx = tx.clone();
        thread::spawn(move || {
            let reader = BufReader::new(conn);
            for line in reader.lines().map_while(Result::ok) {
                match parse_command(&line) {
                    Some(message) => {
                        let _ = tx.send(message);
                    }
                    None => debug!("Ignoring unknown instance command {:?}", line),
                }
            }
        });
    }
}

fn parse_command(line: &str) -> Option<InstanceMessage> {
    match line.trim() {
        TOGGLE_COMMAND => Some(InstanceMessage::ToggleRequested),
        _ => None,
    }
}

/// Clean up the socket file on shutdown.
pub fn cleanup() {
    #[cfg(not(target_os = "windows"))]
    {
        let _ = std::fs::remove_file(socket_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("toggle"), Some(InstanceMessage::ToggleRequested));
        assert_eq!(parse_command("  toggle\r"), Some(InstanceMessage::ToggleRequested));
        assert_eq!(parse_command("show"), None);
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_toggle_reaches_primary() {
        use std::time::Duration;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SOCKET_NAME).to_string_lossy().into_owned();

        assert!(send_toggle_to(&path).is_err());

        let rx = start_listener(&path).unwrap();
        send_toggle_to(&path).unwrap();
        send_toggle_to(&path).unwrap();

        for _ in 0..2 {
            let message = rx.recv_timeout(Duration::from_secs(5)).unwrap();
            assert_eq!(message, InstanceMessage::ToggleRequested);
        }
    }

    #[test]
    fn test_socket_path_names_the_app() {
        assert!(socket_path().ends_with(SOCKET_NAME));
    }
}
