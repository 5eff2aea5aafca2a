//! JSON output of chart descriptions

use super::{Attribution, ChartRenderer};
use crate::chart::ChartDescription;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct ChartDocument<'a> {
    chart: &'a ChartDescription,
}

#[derive(Serialize)]
struct LinkDocument<'a> {
    target: &'a str,
    attribution: &'a Attribution,
}

/// Writes one pretty-printed JSON document per chart as soon as it is
/// rendered. An appended link follows as its own `{target, attribution}`
/// document.
pub struct JsonRenderer<W: Write> {
    out: W,
    /// Target of the most recently written chart
    last_target: Option<String>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonRenderer {
            out,
            last_target: None,
        }
    }

    fn write_document<T: Serialize>(&mut self, document: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, document)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> ChartRenderer for JsonRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, chart: ChartDescription) -> io::Result<()> {
        self.write_document(&ChartDocument { chart: &chart })?;
        self.last_target = Some(chart.target);
        Ok(())
    }

    fn append_link(&mut self, target: &str, link: Attribution) -> io::Result<()> {
        if self.last_target.as_deref() != Some(target) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no chart rendered for '{}'", target),
            ));
        }
        self.write_document(&LinkDocument {
            target,
            attribution: &link,
        })
    }
}
