//! Segment assembly and layout metadata for one call

use super::palette::{
    FRAME_POINTER_COLOR, LINK_REGISTER_COLOR, OVERLAY_COLOR, PADDING_COLOR,
    RETURN_REGISTER_COLOR, RETURN_STACK_COLOR,
};
use super::{
    Annotation, Axis, CallPhase, ChartDescription, ChartLayout, Dash, Fill, Segment, SegmentKind,
    Shape,
};
use crate::config::ChartConfig;
use crate::layout::constants::{FRAME_POINTER_SIZE, LINK_REGISTER_SIZE};
use crate::layout::FrameLayout;

pub const X_AXIS_TITLE: &str = "Call State";
pub const Y_AXIS_TITLE: &str = "Stack Usage (Bytes)";
pub const FRAME_LABEL: &str = "Stack Frame";

fn segment(
    phase: CallPhase,
    label: impl Into<String>,
    kind: SegmentKind,
    size: u32,
    color: impl Into<String>,
    fill: Fill,
) -> Segment {
    Segment {
        phase,
        label: label.into(),
        kind,
        size,
        color: color.into(),
        fill,
    }
}

fn return_variable(phase: CallPhase, size: u32) -> Segment {
    segment(
        phase,
        "Return Variable",
        SegmentKind::ReturnVariable,
        size,
        RETURN_STACK_COLOR,
        Fill::Solid,
    )
}

/// Bottom-to-top contents of the "During Call" column
fn during_call(config: &ChartConfig) -> Vec<Segment> {
    let phase = CallPhase::DuringCall;
    let mut segments = Vec::with_capacity(config.call_args.len() + 5);

    segments.push(if config.return_value_on_call_stack {
        segment(
            phase,
            "Return Value",
            SegmentKind::ReturnValue,
            config.return_value_size,
            RETURN_STACK_COLOR,
            Fill::Solid,
        )
    } else {
        segment(
            phase,
            "Return Value (register)",
            SegmentKind::ReturnValue,
            config.return_value_size,
            RETURN_REGISTER_COLOR,
            Fill::Hatched,
        )
    });

    if config.link_register {
        segments.push(segment(
            phase,
            "Link Register",
            SegmentKind::LinkRegister,
            LINK_REGISTER_SIZE,
            LINK_REGISTER_COLOR,
            Fill::Solid,
        ));
    }

    segments.push(segment(
        phase,
        "Frame Pointer",
        SegmentKind::FramePointer,
        FRAME_POINTER_SIZE,
        FRAME_POINTER_COLOR,
        Fill::Solid,
    ));

    segments.extend(config.call_args.iter().map(|arg| {
        segment(
            phase,
            arg.name.clone(),
            SegmentKind::Argument,
            arg.size,
            arg.color.clone(),
            Fill::Solid,
        )
    }));

    if config.return_value_on_call_stack {
        segments.push(segment(
            phase,
            "Return Value",
            SegmentKind::ReturnValue,
            config.return_value_size,
            RETURN_STACK_COLOR,
            Fill::Solid,
        ));
    }

    segments.push(segment(
        phase,
        "Padding",
        SegmentKind::Padding,
        config.padding,
        PADDING_COLOR,
        Fill::Solid,
    ));

    segments
}

/// Build the chart description for `config`
pub fn build(config: &ChartConfig) -> ChartDescription {
    let frame = FrameLayout::from_config(config);
    let frame_size = frame.size();
    let (bottom, top) = frame.region(config.return_value_size);
    let (bottom, top) = (bottom as f64, top as f64);

    let mut segments = vec![return_variable(
        CallPhase::BeforeCall,
        config.return_value_size,
    )];
    segments.extend(during_call(config));
    segments.push(return_variable(
        CallPhase::AfterCall,
        config.return_value_size,
    ));

    let layout = ChartLayout {
        x_axis: Axis {
            title: X_AXIS_TITLE.to_string(),
            categories: CallPhase::ALL
                .iter()
                .map(|phase| phase.label().to_string())
                .collect(),
            range: None,
        },
        y_axis: Axis {
            title: Y_AXIS_TITLE.to_string(),
            categories: Vec::new(),
            range: Some([0.0, config.y_max]),
        },
        annotations: vec![
            Annotation {
                text: FRAME_LABEL.to_string(),
                phase: CallPhase::DuringCall,
                y: (bottom + top) / 2.0,
                angle: -90,
            },
            Annotation {
                text: format!("{} bytes", frame_size),
                phase: CallPhase::DuringCall,
                y: top,
                angle: 0,
            },
        ],
        shapes: vec![
            Shape::Line {
                y: bottom,
                dash: Dash::Solid,
                color: OVERLAY_COLOR.to_string(),
            },
            Shape::Rect {
                phase: CallPhase::DuringCall,
                y0: bottom,
                y1: top,
                dash: Dash::Dashed,
                color: OVERLAY_COLOR.to_string(),
            },
        ],
    };

    let chart = ChartDescription {
        target: config.id.clone(),
        title: config.title.clone(),
        segments,
        layout,
        frame,
        frame_size,
    };

    if chart.is_clipped() {
        tracing::warn!(
            target_id = %chart.target,
            y_max = config.y_max,
            stack_top = chart.stack_top(CallPhase::DuringCall),
            "chart exceeds yMax and will be truncated"
        );
    }
    tracing::debug!(target_id = %chart.target, frame_size, "built chart description");

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CallArgument;
    use pretty_assertions::assert_eq;

    fn config() -> ChartConfig {
        ChartConfig {
            id: "frame".to_string(),
            title: "f(x)".to_string(),
            return_value_size: 4,
            return_value_on_call_stack: false,
            call_args: vec![CallArgument::new("x", 4, "red")],
            link_register: true,
            padding: 4,
            y_max: 32.0,
        }
    }

    fn during(chart: &ChartDescription) -> Vec<(SegmentKind, &str, u32, Fill)> {
        chart
            .segments_in(CallPhase::DuringCall)
            .map(|s| (s.kind, s.label.as_str(), s.size, s.fill))
            .collect()
    }

    #[test]
    fn test_register_return_example() {
        let chart = build(&config());
        assert_eq!(chart.frame_size, 16);
        assert_eq!(
            during(&chart),
            vec![
                (
                    SegmentKind::ReturnValue,
                    "Return Value (register)",
                    4,
                    Fill::Hatched
                ),
                (SegmentKind::LinkRegister, "Link Register", 4, Fill::Solid),
                (SegmentKind::FramePointer, "Frame Pointer", 4, Fill::Solid),
                (SegmentKind::Argument, "x", 4, Fill::Solid),
                (SegmentKind::Padding, "Padding", 4, Fill::Solid),
            ]
        );
    }

    #[test]
    fn test_stack_return_is_duplicated() {
        let mut config = config();
        config.return_value_on_call_stack = true;
        let chart = build(&config);
        let returns: Vec<_> = chart
            .segments_in(CallPhase::DuringCall)
            .filter(|s| s.kind == SegmentKind::ReturnValue)
            .collect();
        assert_eq!(returns.len(), 2);
        assert!(returns
            .iter()
            .all(|s| s.fill == Fill::Solid && s.color == RETURN_STACK_COLOR));
        assert_eq!(chart.frame_size, 20);
    }

    #[test]
    fn test_no_link_register() {
        let mut config = config();
        config.link_register = false;
        let chart = build(&config);
        assert!(chart
            .segments
            .iter()
            .all(|s| s.kind != SegmentKind::LinkRegister));
        assert_eq!(chart.frame_size, 12);
    }

    #[test]
    fn test_before_and_after_columns() {
        let chart = build(&config());
        for phase in [CallPhase::BeforeCall, CallPhase::AfterCall] {
            let column: Vec<_> = chart.segments_in(phase).collect();
            assert_eq!(column.len(), 1);
            assert_eq!(column[0].kind, SegmentKind::ReturnVariable);
            assert_eq!(column[0].size, 4);
            assert_eq!(column[0].fill, Fill::Solid);
        }
    }

    #[test]
    fn test_layout_metadata() {
        let chart = build(&config());
        assert_eq!(chart.layout.x_axis.title, "Call State");
        assert_eq!(
            chart.layout.x_axis.categories,
            vec!["Before Call", "During Call", "After Call"]
        );
        assert_eq!(chart.layout.y_axis.title, "Stack Usage (Bytes)");
        assert_eq!(chart.layout.y_axis.range, Some([0.0, 32.0]));

        let texts: Vec<_> = chart
            .layout
            .annotations
            .iter()
            .map(|a| (a.text.as_str(), a.y, a.angle))
            .collect();
        assert_eq!(texts, vec![("Stack Frame", 12.0, -90), ("16 bytes", 20.0, 0)]);

        assert_eq!(
            chart.layout.shapes,
            vec![
                Shape::Line {
                    y: 4.0,
                    dash: Dash::Solid,
                    color: OVERLAY_COLOR.to_string(),
                },
                Shape::Rect {
                    phase: CallPhase::DuringCall,
                    y0: 4.0,
                    y1: 20.0,
                    dash: Dash::Dashed,
                    color: OVERLAY_COLOR.to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_y_max_is_not_clamped() {
        let mut config = config();
        config.y_max = 8.0;
        let chart = build(&config);
        assert_eq!(chart.layout.y_axis.range, Some([0.0, 8.0]));
        assert!(chart.is_clipped());
        assert!(!build(&self::config()).is_clipped());
    }
}
