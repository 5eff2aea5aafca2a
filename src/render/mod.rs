//! Rendering entry points and the renderer capability
//!
//! The crate never draws anything itself. A [`ChartRenderer`] accepts a
//! finished [`ChartDescription`] and does whatever its backend does with it:
//!
//! - [`Surface`]: in-memory container tree keyed by identifier
//! - [`JsonRenderer`]: writes the description as JSON
//! - [`TerminalRenderer`]: draws it onto a ratatui terminal
//!
//! [`render`] and [`render_value`] are all-or-nothing: validation happens
//! before any description is built, and a failed validation never reaches
//! the renderer.

pub mod json;
pub mod surface;
pub mod terminal;

pub use json::JsonRenderer;
pub use surface::Surface;
pub use terminal::TerminalRenderer;

use crate::chart::{self, ChartDescription};
use crate::config::{ChartConfig, ValidationError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const ATTRIBUTION_TEXT: &str = "Made with framechart";
pub const ATTRIBUTION_HREF: &str = "https://crates.io/crates/framechart";

/// Link appended to a container after its chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub text: String,
    pub href: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Attribution {
            text: ATTRIBUTION_TEXT.to_string(),
            href: ATTRIBUTION_HREF.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Append an attribution link once the chart is rendered
    pub attribution: Option<Attribution>,
}

impl RenderOptions {
    pub fn with_attribution() -> Self {
        RenderOptions {
            attribution: Some(Attribution::default()),
        }
    }
}

/// Anything that can turn a chart description into output
pub trait ChartRenderer {
    type Error;

    /// Render `chart` into the container named by `chart.target`
    fn render(&mut self, chart: ChartDescription) -> Result<(), Self::Error>;

    /// Attach a link to an already rendered container.
    ///
    /// Renderers without a notion of child elements ignore it.
    fn append_link(&mut self, _target: &str, _link: Attribution) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum RenderError<E> {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("renderer failed: {0}")]
    Renderer(E),
}

/// Build the description for `config` and hand it to `renderer`
pub fn render<R: ChartRenderer>(
    config: &ChartConfig,
    renderer: &mut R,
    options: &RenderOptions,
) -> Result<(), R::Error> {
    let chart = chart::build(config);
    let target = chart.target.clone();

    tracing::info!(target_id = %target, frame_size = chart.frame_size, "rendering chart");
    renderer.render(chart)?;

    if let Some(link) = &options.attribution {
        tracing::debug!(target_id = %target, href = %link.href, "appending attribution");
        renderer.append_link(&target, link.clone())?;
    }

    Ok(())
}

/// Validate an untyped config, then [`render`] it
pub fn render_value<R: ChartRenderer>(
    value: &Value,
    renderer: &mut R,
    options: &RenderOptions,
) -> Result<(), RenderError<R::Error>> {
    let config = ChartConfig::from_value(value).map_err(|err| {
        tracing::warn!(field = %err.field, "config validation failed");
        err
    })?;
    render(&config, renderer, options).map_err(RenderError::Renderer)
}
