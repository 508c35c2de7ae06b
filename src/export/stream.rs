//! Draw-item stream between the producer and the layout engine.
//!
//! The stream is a strict one-producer/one-consumer rendezvous: items go
//! through a zero-capacity channel into a dedicated engine thread, so a
//! send blocks until the engine picks the item up, and because the engine
//! processes serially the next send waits until the previous item is fully
//! placed. At most one item is ever in flight and the single output surface
//! is touched by exactly one thread.
//!
//! Closing the stream (dropping the sender in [`SheetWriter::finish`])
//! makes the engine drain, finalize the last page and report back through
//! the thread join. An engine I/O failure tears the channel down; the
//! producer sees it on its next send or on `finish`.

use crate::export::engine::{SheetEngine, SheetOptions};
use crate::models::DrawItem;
use anyhow::{Context, Result};
use std::sync::mpsc::{self, SyncSender};
use std::thread::{self, JoinHandle};

/// Producer-side handle to a running layout engine.
pub struct SheetWriter {
    sender: Option<SyncSender<DrawItem>>,
    worker: Option<JoinHandle<Result<usize>>>,
}

impl SheetWriter {
    /// Validates the configuration, opens the first output surface and
    /// starts the engine thread.
    ///
    /// # Errors
    ///
    /// Configuration and first-surface errors are reported here, before any
    /// item can be sent.
    pub fn spawn(options: &SheetOptions) -> Result<Self> {
        let engine = SheetEngine::new(options)?;
        let (sender, receiver) = mpsc::sync_channel(0);
        let worker = thread::Builder::new()
            .name("sheet-layout".to_string())
            .spawn(move || engine.run(&receiver))
            .context("Failed to spawn the layout engine thread")?;
        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Sends one item, blocking until the engine has fully processed the
    /// previous one.
    ///
    /// # Errors
    ///
    /// If the engine died on an I/O failure, returns its root-cause error.
    pub fn put(&mut self, item: DrawItem) -> Result<()> {
        let Some(sender) = &self.sender else {
            anyhow::bail!("Draw stream is already closed");
        };
        if sender.send(item).is_err() {
            return Err(self.engine_failure());
        }
        Ok(())
    }

    /// Closes the stream and waits for the engine to finalize every page.
    /// Returns the number of pages written.
    pub fn finish(mut self) -> Result<usize> {
        self.sender = None;
        match self.worker.take() {
            Some(worker) => match worker.join() {
                Ok(result) => result,
                Err(_) => Err(anyhow::anyhow!("Layout engine thread panicked")),
            },
            None => Err(anyhow::anyhow!("Layout engine already joined")),
        }
    }

    /// Collects the error an already-dead engine thread left behind.
    fn engine_failure(&mut self) -> anyhow::Error {
        match self.worker.take() {
            Some(worker) => match worker.join() {
                Ok(Ok(_)) => anyhow::anyhow!("Layout engine stopped before the stream was closed"),
                Ok(Err(e)) => e,
                Err(_) => anyhow::anyhow!("Layout engine thread panicked"),
            },
            None => anyhow::anyhow!("Layout engine is gone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChordPad, Section};
    use std::fs;

    fn stdout_free_options(dir: &std::path::Path) -> SheetOptions {
        SheetOptions {
            target: dir.join("sheet0.svg").to_string_lossy().into_owned(),
            width_mm: 200,
            height_mm: 290,
            title: "stream test".to_string(),
        }
    }

    #[test]
    fn test_round_trip_through_the_stream() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = SheetWriter::spawn(&stdout_free_options(dir.path())).unwrap();
        writer
            .put(DrawItem::SectionHeader("Chords".to_string()))
            .unwrap();
        for legend in ["a", "b", "c"] {
            writer
                .put(DrawItem::Pad(ChordPad::new(Section::Finger, legend)))
                .unwrap();
        }
        let pages = writer.finish().unwrap();
        assert_eq!(pages, 1);
        let svg = fs::read_to_string(dir.path().join("sheet1.svg")).unwrap();
        assert_eq!(svg.matches("<g ").count(), 3);
        assert!(svg.contains(">Chords</text>"));
    }

    #[test]
    fn test_items_are_drawn_in_submission_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = SheetWriter::spawn(&stdout_free_options(dir.path())).unwrap();
        for legend in ["first", "second", "third"] {
            writer
                .put(DrawItem::Pad(ChordPad::new(Section::Finger, legend)))
                .unwrap();
        }
        writer.finish().unwrap();
        let svg = fs::read_to_string(dir.path().join("sheet1.svg")).unwrap();
        let first = svg.find(">first</text>").unwrap();
        let second = svg.find(">second</text>").unwrap();
        let third = svg.find(">third</text>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_config_errors_surface_at_spawn() {
        let options = SheetOptions {
            target: "pattern-without-extension".to_string(),
            width_mm: 200,
            height_mm: 290,
            title: String::new(),
        };
        assert!(SheetWriter::spawn(&options).is_err());
    }

    #[test]
    fn test_io_failure_reaches_the_producer() {
        let dir = tempfile::tempdir().unwrap();
        // A directory that disappears after the first page opens makes the
        // next page switch fail.
        let sub = dir.path().join("gone");
        fs::create_dir(&sub).unwrap();
        let mut writer = SheetWriter::spawn(&SheetOptions {
            target: sub.join("p0.svg").to_string_lossy().into_owned(),
            width_mm: 200,
            height_mm: 290,
            title: String::new(),
        })
        .unwrap();
        fs::remove_dir_all(&sub).unwrap();
        let mut failed = writer.put(DrawItem::PageBreak).is_err();
        if !failed {
            for i in 0..10 {
                if writer
                    .put(DrawItem::Pad(ChordPad::new(Section::Finger, format!("p{i}"))))
                    .is_err()
                {
                    failed = true;
                    break;
                }
            }
        }
        assert!(failed || writer.finish().is_err());
    }
}
