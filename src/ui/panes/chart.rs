//! Stacked-bar chart pane
//!
//! Draws a [`ChartDescription`] as three stacked columns on a cell grid:
//!
//! ```text
//!  Stack Usage (Bytes)
//!   32 ┤            16 bytes
//!      │          ┌┄┄┄┄┄┄┐
//!      │          ┆ pad  ┆ S
//!   16 ┤          ┆  x   ┆ t
//!      │          ┆  fp  ┆ .
//!      │──────────┆  lr  ┆─────────
//!      │  ret     ╱╱╱╱╱╱╱╱   ret
//!    0 └─────────────────────────────
//!       Before Call  During Call  After Call
//!                 Call State
//! ```
//!
//! One byte maps to `height / yMax` rows. Anything above `yMax` is cut off,
//! which is the caller's choice of ceiling.

use crate::chart::{Annotation, CallPhase, ChartDescription, Dash, Fill, Segment, Shape};
use crate::ui::theme::{token_color, DEFAULT_THEME};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Cell geometry of the plot area
struct Plot {
    area: Rect,
    y_max: f64,
    /// `(x, width)` of each phase's bar, indexed by [`CallPhase::index`]
    bars: [(u16, u16); 3],
}

impl Plot {
    fn new(area: Rect, y_max: f64) -> Self {
        let slot = area.width / 3;
        let width = (slot / 2).max(1);
        let bars = [0u16, 1, 2].map(|i| (area.x + i * slot + (slot - width) / 2, width));
        Plot { area, y_max, bars }
    }

    /// Number of rows from the bottom that `value` bytes reach
    fn rows(&self, value: f64) -> u16 {
        if self.y_max <= 0.0 {
            return 0;
        }
        let rows = (value / self.y_max * f64::from(self.area.height)).round();
        rows.clamp(0.0, f64::from(u16::MAX)) as u16
    }

    /// Screen y of the `row`-th row from the bottom, if it is inside the plot
    fn y(&self, row: u16) -> Option<u16> {
        (row < self.area.height).then(|| self.area.bottom() - 1 - row)
    }

    fn bar(&self, phase: CallPhase) -> (u16, u16) {
        self.bars[phase.index()]
    }

    fn in_any_bar(&self, x: u16) -> bool {
        self.bars.iter().any(|&(bx, bw)| x >= bx && x < bx + bw)
    }
}

/// Render the chart pane
pub fn render_chart_pane(
    frame: &mut Frame,
    area: Rect,
    chart: Option<&ChartDescription>,
    selected: CallPhase,
) {
    let title = chart.map_or_else(|| " Chart ".to_string(), |c| format!(" {} ", c.title));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(chart) = chart else {
        frame.render_widget(
            Paragraph::new("(no chart)").style(Style::default().fg(DEFAULT_THEME.comment)),
            inner,
        );
        return;
    };

    draw_chart(frame.buffer_mut(), inner, chart, selected);
}

/// Draw `chart` into `area` of `buf`
pub fn draw_chart(buf: &mut Buffer, area: Rect, chart: &ChartDescription, selected: CallPhase) {
    let y_max = chart.y_max();
    let tick_labels = [y_max, y_max / 2.0, 0.0].map(format_tick);
    let gutter = tick_labels.iter().map(|l| l.len()).max().unwrap_or(1) as u16 + 2;

    // title row + axis row + category row + axis title row
    if area.height < 6 || area.width < gutter + 9 {
        buf.set_string(
            area.x,
            area.y,
            "(too small)",
            Style::default().fg(DEFAULT_THEME.comment),
        );
        return;
    }

    let comment = Style::default().fg(DEFAULT_THEME.comment);
    buf.set_string(area.x, area.y, &chart.layout.y_axis.title, comment);

    let plot = Plot::new(
        Rect {
            x: area.x + gutter,
            y: area.y + 1,
            width: area.width - gutter,
            height: area.height - 4,
        },
        y_max,
    );

    draw_axes(buf, &plot, &tick_labels, comment);

    for phase in CallPhase::ALL {
        let mut base = 0u64;
        for segment in chart.segments_in(phase) {
            let top = base + u64::from(segment.size);
            draw_segment(buf, &plot, phase, segment, base as f64, top as f64);
            base = top;
        }
    }

    for shape in &chart.layout.shapes {
        draw_shape(buf, &plot, shape);
    }
    for annotation in &chart.layout.annotations {
        draw_annotation(buf, &plot, annotation);
    }

    draw_categories(buf, area, &plot, chart, selected);
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn draw_axes(buf: &mut Buffer, plot: &Plot, ticks: &[String; 3], style: Style) {
    let axis_x = plot.area.x - 1;
    for y in plot.area.top()..plot.area.bottom() {
        buf.set_string(axis_x, y, "│", style);
    }

    let baseline = plot.area.bottom();
    buf.set_string(axis_x, baseline, "└", style);
    buf.set_string(
        plot.area.x,
        baseline,
        "─".repeat(plot.area.width as usize),
        style,
    );

    let top = plot.area.top();
    let middle = plot.area.top() + plot.area.height / 2;
    for (label, y) in ticks.iter().zip([top, middle, baseline]) {
        let x = axis_x.saturating_sub(label.len() as u16 + 1);
        buf.set_string(x, y, label, style);
        if y != baseline {
            buf.set_string(axis_x, y, "┤", style);
        }
    }
}

fn draw_segment(
    buf: &mut Buffer,
    plot: &Plot,
    phase: CallPhase,
    segment: &Segment,
    bottom: f64,
    top: f64,
) {
    let (x, width) = plot.bar(phase);
    let color = token_color(&segment.color);
    let (first, last) = (plot.rows(bottom), plot.rows(top));

    for row in first..last {
        let Some(y) = plot.y(row) else { break };
        match segment.fill {
            Fill::Solid => {
                buf.set_string(x, y, " ".repeat(width as usize), Style::default().bg(color));
            }
            Fill::Hatched => {
                buf.set_string(x, y, "╱".repeat(width as usize), Style::default().fg(color));
            }
        }
    }

    // Label on the middle visible row of the segment
    if last > first {
        let row = first + (last - first - 1) / 2;
        if let Some(y) = plot.y(row) {
            let text: String = segment.label.chars().take(width as usize).collect();
            let pad = (width as usize).saturating_sub(text.chars().count()) / 2;
            let style = match segment.fill {
                Fill::Solid => Style::default()
                    .bg(color)
                    .fg(DEFAULT_THEME.label_fg)
                    .add_modifier(Modifier::BOLD),
                Fill::Hatched => Style::default().fg(DEFAULT_THEME.fg),
            };
            buf.set_string(x + pad as u16, y, text, style);
        }
    }
}

fn draw_shape(buf: &mut Buffer, plot: &Plot, shape: &Shape) {
    match shape {
        Shape::Line { y, dash, color } => {
            let Some(screen_y) = plot.y(plot.rows(*y)) else {
                return;
            };
            let glyph = if *dash == Dash::Dashed { "┄" } else { "─" };
            let style = Style::default().fg(token_color(color));
            for x in plot.area.left()..plot.area.right() {
                if !plot.in_any_bar(x) {
                    buf.set_string(x, screen_y, glyph, style);
                }
            }
        }
        Shape::Rect {
            phase,
            y0,
            y1,
            dash,
            color,
        } => {
            let (bar_x, width) = plot.bar(*phase);
            let left = bar_x.saturating_sub(1).max(plot.area.left());
            let right = (bar_x + width).min(plot.area.right() - 1);
            let (side, edge) = match dash {
                Dash::Dashed => ("┆", "┄"),
                Dash::Solid => ("│", "─"),
            };
            let style = Style::default().fg(token_color(color));
            let (first, last) = (plot.rows(*y0), plot.rows(*y1));

            for row in first..last {
                let Some(y) = plot.y(row) else { break };
                buf.set_string(left, y, side, style);
                buf.set_string(right, y, side, style);
            }
            if let Some(y) = plot.y(last) {
                buf.set_string(left, y, "┌", style);
                buf.set_string(
                    left + 1,
                    y,
                    edge.repeat(right.saturating_sub(left + 1) as usize),
                    style,
                );
                buf.set_string(right, y, "┐", style);
            }
        }
    }
}

fn draw_annotation(buf: &mut Buffer, plot: &Plot, annotation: &Annotation) {
    let (bar_x, width) = plot.bar(annotation.phase);
    let style = Style::default()
        .fg(DEFAULT_THEME.overlay)
        .add_modifier(Modifier::BOLD);
    let row = plot.rows(annotation.y);

    if annotation.angle == 0 {
        // Above the point, clear of any outline drawn on that row
        let Some(y) = plot.y(row.saturating_add(1)) else {
            return;
        };
        let len = annotation.text.chars().count() as u16;
        let x = (bar_x + width / 2)
            .saturating_sub(len / 2)
            .max(plot.area.left());
        let room = plot.area.right().saturating_sub(x) as usize;
        let text: String = annotation.text.chars().take(room).collect();
        buf.set_string(x, y, text, style);
        return;
    }

    // Rotated text runs vertically just right of the column outline
    let x = bar_x + width + 1;
    if x >= plot.area.right() {
        return;
    }
    let chars: Vec<char> = annotation.text.chars().collect();
    let len = chars.len() as u16;
    let start = row.saturating_add(len / 2);
    for (i, ch) in chars.iter().enumerate() {
        // -90 reads bottom-to-top, +90 top-to-bottom
        let offset = if annotation.angle < 0 {
            start.checked_sub(len - 1 - i as u16)
        } else {
            start.checked_sub(i as u16)
        };
        if let Some(y) = offset.and_then(|r| plot.y(r)) {
            buf.set_string(x, y, ch.to_string(), style);
        }
    }
}

fn draw_categories(
    buf: &mut Buffer,
    area: Rect,
    plot: &Plot,
    chart: &ChartDescription,
    selected: CallPhase,
) {
    let label_y = plot.area.bottom() + 1;
    let slot = plot.area.width / 3;
    for phase in CallPhase::ALL {
        let label = chart
            .layout
            .x_axis
            .categories
            .get(phase.index())
            .map_or(phase.label(), String::as_str);
        let slot_x = plot.area.x + phase.index() as u16 * slot;
        let text: String = label.chars().take(slot as usize).collect();
        let x = slot_x + (slot.saturating_sub(text.chars().count() as u16)) / 2;
        let style = if phase == selected {
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        buf.set_string(x, label_y, text, style);
    }

    let title = &chart.layout.x_axis.title;
    let x = plot.area.x + plot.area.width.saturating_sub(title.len() as u16) / 2;
    buf.set_string(
        x.max(area.x),
        label_y + 1,
        title,
        Style::default().fg(DEFAULT_THEME.comment),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build;
    use crate::config::{CallArgument, ChartConfig};

    fn chart(y_max: f64) -> ChartDescription {
        build(&ChartConfig {
            id: "frame".to_string(),
            title: "f(x)".to_string(),
            return_value_size: 4,
            return_value_on_call_stack: false,
            call_args: vec![CallArgument::new("x", 4, "red")],
            link_register: true,
            padding: 4,
            y_max,
        })
    }

    fn text(buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_rows_scale_with_y_max() {
        let plot = Plot::new(Rect::new(0, 0, 30, 32), 32.0);
        assert_eq!(plot.rows(4.0), 4);
        assert_eq!(plot.rows(64.0), 64);
        assert_eq!(plot.y(0), Some(31));
        assert_eq!(plot.y(32), None);
    }

    #[test]
    fn test_draws_axes_labels_and_annotations() {
        let area = Rect::new(0, 0, 60, 36);
        let mut buf = Buffer::empty(area);
        draw_chart(&mut buf, area, &chart(32.0), CallPhase::DuringCall);
        let screen = text(&buf);

        assert!(screen.contains("Stack Usage (Bytes)"));
        assert!(screen.contains("Before Call"));
        assert!(screen.contains("During Call"));
        assert!(screen.contains("After Call"));
        assert!(screen.contains("Call State"));
        assert!(screen.contains("16 bytes"));
        assert!(screen.contains('┄'));
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(format_tick(32.0), "32");
        assert_eq!(format_tick(16.5), "16.5");
        assert_eq!(format_tick(1e20), "100000000000000000000");
    }

    #[test]
    fn test_tiny_area() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        draw_chart(&mut buf, area, &chart(32.0), CallPhase::BeforeCall);
        assert!(text(&buf).contains("(too small)"));
    }

    #[test]
    fn test_clipped_chart_still_draws() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        draw_chart(&mut buf, area, &chart(8.0), CallPhase::DuringCall);
        let screen = text(&buf);
        assert!(screen.contains("Call State"));
        // Frame top lies above the ceiling, so its size label is cut off
        assert!(!screen.contains("16 bytes"));
    }
}
