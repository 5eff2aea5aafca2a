//! Frame layout pane
//!
//! Lists the segments of the selected column top-to-bottom with their byte
//! offsets from the bottom of the stack, the same way a debugger lists the
//! slots of a frame. For the "During Call" column the per-slot totals of the
//! frame are appended.

use crate::chart::{CallPhase, ChartDescription, Fill};
use crate::ui::theme::{token_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the frame layout pane
pub fn render_frame_pane(
    frame: &mut Frame,
    area: Rect,
    chart: Option<&ChartDescription>,
    phase: CallPhase,
) {
    let block = Block::default()
        .title(format!(" {} ", phase.label()))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let content_width = area.width.saturating_sub(2) as usize;
    let items = match chart {
        Some(chart) => frame_items(chart, phase, content_width),
        None => vec![ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment))],
    };

    frame.render_widget(List::new(items).block(block), area);
}

fn frame_items(chart: &ChartDescription, phase: CallPhase, width: usize) -> Vec<ListItem<'static>> {
    let mut offsets = Vec::new();
    let mut base = 0u64;
    for segment in chart.segments_in(phase) {
        offsets.push((base, segment));
        base += u64::from(segment.size);
    }

    let mut items = Vec::with_capacity(offsets.len() + 8);

    // Top of the stack first
    for (offset, segment) in offsets.into_iter().rev() {
        let swatch = match segment.fill {
            Fill::Solid => "██",
            Fill::Hatched => "╱╱",
        };
        let size = format!("{} B", segment.size);
        // offset(8) + swatch(2) + spaces(2) = 12
        let left_width = 12 + segment.label.chars().count();
        let padding = width.saturating_sub(left_width + size.len());

        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("+0x{:04x} ", offset),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(swatch, Style::default().fg(token_color(&segment.color))),
            Span::raw(" "),
            Span::styled(segment.label.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::raw(" ".repeat(padding)),
            Span::styled(size, Style::default().fg(DEFAULT_THEME.type_name)),
        ])));
    }

    if items.is_empty() {
        items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    }

    if phase == CallPhase::DuringCall {
        items.push(ListItem::new(""));
        items.push(ListItem::new(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(
                format!("Frame size: {} bytes", chart.frame_size),
                Style::default()
                    .fg(DEFAULT_THEME.overlay)
                    .add_modifier(Modifier::BOLD),
            ),
        ])));

        let frame = &chart.frame;
        for (name, bytes) in [
            ("return value", frame.return_value),
            ("arguments", frame.arguments),
            ("link register", frame.link_register),
            ("frame pointer", frame.frame_pointer),
            ("padding", frame.padding),
        ] {
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("  {:<14}", name),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:>6}", bytes),
                    Style::default().fg(DEFAULT_THEME.type_name),
                ),
            ])));
        }
    }

    if chart.is_clipped() {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("  ⚠ stack exceeds yMax ({})", chart.y_max()),
            Style::default().fg(DEFAULT_THEME.error),
        ))));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build;
    use crate::config::{CallArgument, ChartConfig};

    #[test]
    fn test_during_call_lists_slots_and_totals() {
        let chart = build(&ChartConfig {
            id: "frame".to_string(),
            title: "f(x)".to_string(),
            return_value_size: 4,
            return_value_on_call_stack: false,
            call_args: vec![CallArgument::new("x", 4, "red")],
            link_register: true,
            padding: 4,
            y_max: 32.0,
        });

        // 5 segments, blank line, size header, 5 totals
        assert_eq!(frame_items(&chart, CallPhase::DuringCall, 40).len(), 12);
        assert_eq!(frame_items(&chart, CallPhase::AfterCall, 40).len(), 1);
    }
}
