//! Pair-file sink
//!
//! Single writer thread behind a bounded `std::sync::mpsc::sync_channel`
//! (`spec.md` §5: "worker threads pause on a bounded channel when the
//! sink lags"). Grounded on the teacher's own choice in
//! `features/points_to/infrastructure/parallel_andersen.rs` — "simpler
//! alternative to crossbeam::SegQueue" — rather than pulling in
//! `crossbeam-channel`, which the teacher does not depend on either.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::mpsc::{sync_channel, SyncSender};
use std::thread::JoinHandle;

use crate::error::CloneError;
use crate::shared::models::ClonePairResult;

/// Bounded buffer size between workers and the writer thread. Small
/// enough to cap memory on a lagging sink, large enough that workers
/// rarely block on a balanced partition.
const CHANNEL_CAPACITY: usize = 4096;

pub struct PairSink {
    sender: SyncSender<ClonePairResult>,
    writer: JoinHandle<Result<(), CloneError>>,
}

impl PairSink {
    /// Open `path` and spawn the writer thread.
    pub fn spawn(path: &Path) -> Result<Self, CloneError> {
        let file = File::create(path)?;
        let (sender, receiver) = sync_channel::<ClonePairResult>(CHANNEL_CAPACITY);

        let writer = std::thread::spawn(move || -> Result<(), CloneError> {
            let mut out = BufWriter::new(file);
            while let Ok(pair) = receiver.recv() {
                writeln!(out, "{}", pair.to_csv_line())?;
            }
            out.flush()?;
            Ok(())
        });

        Ok(Self { sender, writer })
    }

    /// A cloneable handle workers can send pairs through. `SyncSender`
    /// is itself `Clone + Send`, so every rayon worker gets its own.
    pub fn sender(&self) -> SyncSender<ClonePairResult> {
        self.sender.clone()
    }

    /// Drop the sink's own sender and join the writer thread, which
    /// exits once every cloned sender has also been dropped. Called
    /// both on the happy path and when flushing after an interrupt.
    pub fn finish(self) -> Result<(), CloneError> {
        drop(self.sender);
        match self.writer.join() {
            Ok(result) => result,
            Err(_) => Err(CloneError::Io(std::io::Error::other(
                "pair sink writer thread panicked",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_writes_pairs_in_received_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        let sink = PairSink::spawn(&path).unwrap();

        let tx = sink.sender();
        tx.send(ClonePairResult::new(0, 1, 100, None)).unwrap();
        tx.send(ClonePairResult::new(1, 2, 80, Some(75))).unwrap();
        drop(tx);

        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["0,1,100", "1,2,80,75"]);
    }

    #[test]
    fn test_empty_run_yields_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        let sink = PairSink::spawn(&path).unwrap();
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());
    }
}
