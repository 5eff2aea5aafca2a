//! Declarative chart descriptions
//!
//! A [`ChartDescription`] is everything a renderer needs and nothing more:
//! labelled, colored, sized bar segments grouped into the three call phases,
//! plus axes, annotations and overlay shapes. It owns all of its data so it
//! can be handed to a renderer by value.
//!
//! Segments are stored bottom-to-top within each phase; renderers stack them
//! in iteration order.

pub mod build;
pub mod palette;

pub use build::build;

use crate::layout::FrameLayout;
use serde::Serialize;

/// Column of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CallPhase {
    BeforeCall,
    DuringCall,
    AfterCall,
}

impl CallPhase {
    pub const ALL: [CallPhase; 3] = [
        CallPhase::BeforeCall,
        CallPhase::DuringCall,
        CallPhase::AfterCall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CallPhase::BeforeCall => "Before Call",
            CallPhase::DuringCall => "During Call",
            CallPhase::AfterCall => "After Call",
        }
    }

    pub fn index(self) -> usize {
        match self {
            CallPhase::BeforeCall => 0,
            CallPhase::DuringCall => 1,
            CallPhase::AfterCall => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            CallPhase::BeforeCall => CallPhase::DuringCall,
            CallPhase::DuringCall => CallPhase::AfterCall,
            CallPhase::AfterCall => CallPhase::BeforeCall,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CallPhase::BeforeCall => CallPhase::AfterCall,
            CallPhase::DuringCall => CallPhase::BeforeCall,
            CallPhase::AfterCall => CallPhase::DuringCall,
        }
    }
}

/// What a segment stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentKind {
    /// The caller's variable receiving the result
    ReturnVariable,
    ReturnValue,
    LinkRegister,
    FramePointer,
    Argument,
    Padding,
}

/// Fill pattern; register-resident values are hatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Fill {
    Solid,
    Hatched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub phase: CallPhase,
    pub label: String,
    pub kind: SegmentKind,
    /// Height in bytes
    pub size: u32,
    pub color: String,
    pub fill: Fill,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub title: String,
    /// Category labels for a categorical axis, empty for a numeric one
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

/// Text placed at a y value inside a phase column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub text: String,
    pub phase: CallPhase,
    pub y: f64,
    /// Text rotation in degrees; -90 reads bottom-to-top
    pub angle: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dash {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    /// Horizontal line across every column
    Line { y: f64, dash: Dash, color: String },
    /// Rectangle bounding part of one column
    Rect {
        phase: CallPhase,
        y0: f64,
        y1: f64,
        dash: Dash,
        color: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLayout {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub annotations: Vec<Annotation>,
    pub shapes: Vec<Shape>,
}

/// Complete, renderer-independent description of one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescription {
    /// Identifier of the container to render into
    pub target: String,
    pub title: String,
    pub segments: Vec<Segment>,
    pub layout: ChartLayout,
    pub frame: FrameLayout,
    pub frame_size: u64,
}

impl ChartDescription {
    /// Segments of one column, bottom-to-top
    pub fn segments_in(&self, phase: CallPhase) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(move |s| s.phase == phase)
    }

    /// Height of a column's stacked bars in bytes
    pub fn stack_top(&self, phase: CallPhase) -> u64 {
        self.segments_in(phase).map(|s| u64::from(s.size)).sum()
    }

    /// Upper bound of the y-axis
    pub fn y_max(&self) -> f64 {
        self.layout.y_axis.range.map_or(0.0, |[_, max]| max)
    }

    /// Whether some column rises above the y-axis ceiling
    pub fn is_clipped(&self) -> bool {
        let y_max = self.y_max();
        CallPhase::ALL
            .iter()
            .any(|&phase| self.stack_top(phase) as f64 > y_max)
    }
}
