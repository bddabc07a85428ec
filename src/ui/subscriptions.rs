//! Bridges from background-thread channels into iced subscriptions.

use iced::futures::stream;
use iced::futures::Stream;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};

/// Stream the messages of a `std::sync::mpsc` receiver fed by another thread.
///
/// Ends when the sending side hangs up.
pub fn channel_stream<T>(rx: Arc<Mutex<Receiver<T>>>) -> impl Stream<Item = T>
where
    T: Send + 'static,
{
    stream::unfold(rx, |rx| async move {
        loop {
            let result = {
                let guard = rx.lock().ok()?;
                guard.try_recv()
            };
            match result {
                Ok(msg) => return Some((msg, rx)),
                Err(mpsc::TryRecvError::Empty) => {
                    // Small delay to avoid busy-waiting
                    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    return None;
                }
            }
        }
    })
}
