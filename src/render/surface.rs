//! In-memory container tree
//!
//! A [`Surface`] holds named containers, the way a page holds elements with
//! ids. Rendering into a container replaces its chart (last write wins);
//! appended links accumulate as children and survive re-rendering.

use super::{Attribution, ChartRenderer};
use crate::chart::ChartDescription;
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("no container with id '{0}'")]
    UnknownContainer(String),
}

/// Child element of a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Link(Attribution),
}

#[derive(Debug, Clone, Default)]
pub struct Container {
    pub chart: Option<ChartDescription>,
    pub children: Vec<Element>,
    /// Number of charts rendered into this container so far
    pub renders: usize,
}

#[derive(Debug, Default)]
pub struct Surface {
    containers: FxHashMap<String, Container>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut surface = Surface::new();
        for id in ids {
            surface.add_container(id);
        }
        surface
    }

    /// Register an empty container; an existing one is left untouched
    pub fn add_container(&mut self, id: impl Into<String>) {
        self.containers.entry(id.into()).or_default();
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn chart(&self, id: &str) -> Option<&ChartDescription> {
        self.containers.get(id).and_then(|c| c.chart.as_ref())
    }

    fn container_mut(&mut self, id: &str) -> Result<&mut Container, SurfaceError> {
        self.containers
            .get_mut(id)
            .ok_or_else(|| SurfaceError::UnknownContainer(id.to_string()))
    }
}

impl ChartRenderer for Surface {
    type Error = SurfaceError;

    fn render(&mut self, chart: ChartDescription) -> Result<(), SurfaceError> {
        let container = self.container_mut(&chart.target)?;
        container.renders += 1;
        container.chart = Some(chart);
        Ok(())
    }

    fn append_link(&mut self, target: &str, link: Attribution) -> Result<(), SurfaceError> {
        self.container_mut(target)?
            .children
            .push(Element::Link(link));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CallArgument, ChartConfig};
    use crate::render::{render, RenderOptions};

    fn config(id: &str, padding: u32) -> ChartConfig {
        ChartConfig {
            id: id.to_string(),
            title: "g(p)".to_string(),
            return_value_size: 8,
            return_value_on_call_stack: true,
            call_args: vec![CallArgument::new("p", 8, "green")],
            link_register: false,
            padding,
            y_max: 64.0,
        }
    }

    #[test]
    fn test_unknown_container() {
        let mut surface = Surface::new();
        let err = render(&config("missing", 0), &mut surface, &RenderOptions::default())
            .unwrap_err();
        assert_eq!(err, SurfaceError::UnknownContainer("missing".to_string()));
    }

    #[test]
    fn test_last_write_wins() {
        let mut surface = Surface::with_containers(["a", "b"]);
        let options = RenderOptions::default();
        render(&config("a", 0), &mut surface, &options).unwrap();
        render(&config("a", 8), &mut surface, &options).unwrap();

        let container = surface.container("a").unwrap();
        assert_eq!(container.renders, 2);
        assert_eq!(surface.chart("a").unwrap().frame_size, 8 + 8 + 4 + 8);
        assert!(surface.chart("b").is_none());
    }

    #[test]
    fn test_attribution_appended_as_child() {
        let mut surface = Surface::with_containers(["a"]);
        render(&config("a", 0), &mut surface, &RenderOptions::with_attribution()).unwrap();

        let container = surface.container("a").unwrap();
        assert_eq!(
            container.children,
            vec![Element::Link(Attribution::default())]
        );
    }
}
