//! Drawing the node view.

use crate::messages::MessageEntry;
use crate::options::{ExclusiveChoice, WILDCARD};
use crate::surface::ChoiceSurface;
use crate::tabs::Panel;
use crate::view::NodeView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Tabs};

/// Shown in place of the wildcard option.
const EVERYONE: &str = "(everyone)";

/// Marker in front of private messages.
const PRIVATE_MARKER: &str = "[private] ";

/// Draw the whole screen.
pub fn ui(frame: &mut Frame<'_>, view: &NodeView, input: &str) {
    let [tabs_area, body, input_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_tabs(frame, tabs_area, view);
    match view.active_panel() {
        Panel::Messages => render_messages(frame, body, view),
        Panel::Peers => render_peers(frame, body, view),
        Panel::Files => render_files(frame, body, view),
    }
    render_input(frame, input_area, view.active_panel(), input);
    render_status(frame, status_area, view);
}

fn render_tabs(frame: &mut Frame<'_>, area: Rect, view: &NodeView) {
    let titles: Vec<String> = view.tabs.iter().map(|(panel, _)| panel.to_string()).collect();
    let tabs = Tabs::new(titles)
        .select(view.tabs.active_index())
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .block(Block::bordered().title(format!(" peerster · {} ", view.node_id)));
    frame.render_widget(tabs, area);
}

fn render_messages(frame: &mut Frame<'_>, area: Rect, view: &NodeView) {
    let [log_area, picker_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(24)]).areas(area);

    let visible = usize::from(log_area.height.saturating_sub(2));
    let entries = view.messages.entries();
    let start = entries.len().saturating_sub(visible);
    let items: Vec<ListItem<'_>> = entries[start..].iter().map(message_line).collect();
    frame.render_widget(List::new(items).block(Block::bordered().title(" Messages ")), log_area);

    render_picker(frame, picker_area, " Send to ", &view.send_to);
}

/// One log line: colored origin, label, text.
pub fn message_line(entry: &MessageEntry) -> ListItem<'_> {
    let mut spans = Vec::with_capacity(5);
    if entry.kind.is_private() {
        spans.push(Span::styled(PRIVATE_MARKER, Style::default().fg(Color::Magenta)));
    }
    spans.push(Span::styled(format!(" {} ", entry.origin), entry.colors.style()));
    spans.push(Span::styled(
        format!(" {}: ", entry.label),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(entry.text.as_str()));
    ListItem::new(Line::from(spans))
}

fn render_peers(frame: &mut Frame<'_>, area: Rect, view: &NodeView) {
    let items: Vec<ListItem<'_>> = view
        .peers
        .iter()
        .map(|peer| ListItem::new(peer.as_str()))
        .collect();
    let title = format!(" Peers ({}) ", view.peers.len());
    frame.render_widget(List::new(items).block(Block::bordered().title(title)), area);
}

fn render_files(frame: &mut Frame<'_>, area: Rect, view: &NodeView) {
    let [list_area, picker_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(24)]).areas(area);

    let items: Vec<ListItem<'_>> = view
        .files
        .iter()
        .map(|file| {
            ListItem::new(Line::from(vec![
                Span::styled(file.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(file.hash.as_str(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items).block(Block::bordered().title(" Files ")), list_area);

    render_picker(frame, picker_area, " Request from ", &view.request_from);
}

fn render_picker(frame: &mut Frame<'_>, area: Rect, title: &str, picker: &ExclusiveChoice) {
    let selected = picker.selected();
    let items: Vec<ListItem<'_>> = picker
        .options()
        .iter()
        .map(|option| {
            let label = option_label(option);
            if Some(option.as_str()) == selected {
                ListItem::new(format!("> {label}"))
                    .style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                ListItem::new(format!("  {label}"))
            }
        })
        .collect();
    frame.render_widget(List::new(items).block(Block::bordered().title(title)), area);
}

/// Display text for a picker option.
pub fn option_label(option: &str) -> &str {
    if option == WILDCARD { EVERYONE } else { option }
}

fn render_input(frame: &mut Frame<'_>, area: Rect, panel: Panel, input: &str) {
    let hint = match panel {
        Panel::Messages => " Message (Enter to send) ",
        Panel::Peers => " Add peer ip:port ",
        Panel::Files => " share <name> | get <hash> [save-as] ",
    };
    frame.render_widget(Paragraph::new(input).block(Block::bordered().title(hint)), area);
}

fn render_status(frame: &mut Frame<'_>, area: Rect, view: &NodeView) {
    let status = &view.status;
    let mut spans = vec![Span::raw(format!("tick {}", status.ticks))];
    for (section, error) in &status.failures {
        spans.push(Span::styled(
            format!("  {section} stale: {error}"),
            Style::default().fg(Color::Red),
        ));
    }
    if let Some(notice) = &status.notice {
        spans.push(Span::styled(
            format!("  {notice}"),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
