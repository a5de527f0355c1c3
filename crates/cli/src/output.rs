//! Streaming rendered terms to a writer.

use std::io::{self, Write};

use anyhow::{Context, Result};
use trnums::render::{render, RenderCfg};
use trnums::{BigRational, SequenceError};

/// Write up to `count` rendered terms (all of them when `None`), one per line.
///
/// A closed reader (broken pipe) ends the stream quietly. Sequence errors carry
/// the 1-based index of the failing term.
pub fn emit<I, W>(terms: I, count: Option<usize>, cfg: RenderCfg, out: &mut W) -> Result<usize>
where
    I: Iterator<Item = Result<BigRational, SequenceError>>,
    W: Write + ?Sized,
{
    let mut written = 0usize;
    for term in terms.take(count.unwrap_or(usize::MAX)) {
        let term = term.with_context(|| format!("computing term {}", written + 1))?;
        if let Err(err) = writeln!(out, "{}", render(&term, cfg)) {
            return closed_or(err, written);
        }
        written += 1;
    }
    if let Err(err) = out.flush() {
        return closed_or(err, written);
    }
    Ok(written)
}

fn closed_or(err: io::Error, written: usize) -> Result<usize> {
    if err.kind() == io::ErrorKind::BrokenPipe {
        tracing::debug!(written, "output closed");
        return Ok(written);
    }
    Err(err).context("writing term")
}
