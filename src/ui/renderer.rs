use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    App,
    config::SAMPLE_FORMULAS,
    formula::DisambiguationPolicy,
    ui::{create_breakdown_display, create_composition_display, create_message_display, format_weight},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let main_horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .margin(2)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Percentage(35),
        ])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(main_horizontal_split[0]);

    render_title(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_breakdown(f, app, chunks[2]);
    render_total(f, app, chunks[3]);
    render_right_panel(f, app, main_horizontal_split[1]);
    render_status_bar(f, app, chunks[4]);
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let spans = vec![
        Span::styled("Molweight", Style::default().fg(Color::Cyan)),
        Span::raw("   "),
        Span::styled(
            format!("{} elements loaded", app.table().len()),
            Style::default().fg(Color::Green)
        ),
        Span::raw("   Policy: "),
        Span::styled(app.policy.name(), Style::default().fg(Color::Yellow)),
        Span::raw("   Sample: "),
        Span::styled(
            format!("{}/{}", app.sample_index + 1, SAMPLE_FORMULAS.len()),
            Style::default().fg(Color::DarkGray)
        ),
    ];

    let title_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title_widget, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::raw("Formula: "),
        Span::styled(app.input.clone(), Style::default().fg(Color::Green)),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ];

    if let Some(calculation) = &app.calculation {
        if calculation.canonical != app.input.trim() {
            spans.push(Span::raw("   read as "));
            spans.push(Span::styled(calculation.canonical.clone(), Style::default().fg(Color::Cyan)));
        }
    }

    let input_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(input_widget, area);
}

fn render_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.calculation {
        Some(calculation) => create_breakdown_display(calculation, app.precision),
        None => vec![Line::from(vec![
            Span::styled("Type a formula such as Fe2(SO4)3 or CuSO4·5H2O", Style::default().fg(Color::DarkGray)),
        ])],
    };

    let breakdown_widget = Paragraph::new(lines)
        .block(Block::default().title("Element Breakdown").borders(Borders::ALL))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(breakdown_widget, area);
}

fn render_total(f: &mut Frame, app: &App, area: Rect) {
    let spans = match &app.calculation {
        Some(calculation) if calculation.is_complete() => vec![
            Span::raw("Molecular Weight: "),
            Span::styled(format_weight(calculation.total, app.precision), Style::default().fg(Color::Green)),
        ],
        Some(calculation) => vec![
            Span::raw("Molecular Weight: "),
            Span::styled(format_weight(calculation.total, app.precision), Style::default().fg(Color::Yellow)),
            Span::styled("  (incomplete)", Style::default().fg(Color::Red)),
        ],
        None => vec![Span::styled("Molecular Weight: -", Style::default().fg(Color::DarkGray))],
    };

    let total_widget = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(total_widget, area);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let right_panel_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Min(8),
        ])
        .split(area);

    render_messages(f, app, right_panel_chunks[0]);
    render_composition(f, app, right_panel_chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.calculation {
        Some(calculation) => create_message_display(calculation),
        None => Vec::new(),
    };

    let messages_widget = Paragraph::new(lines)
        .block(Block::default().title("Messages").borders(Borders::ALL))
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(messages_widget, area);
}

fn render_composition(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.calculation {
        Some(calculation) => create_composition_display(calculation),
        None => Vec::new(),
    };

    let composition_widget = Paragraph::new(lines)
        .block(Block::default().title("Composition (mass %)").borders(Borders::ALL));
    f.render_widget(composition_widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = if app.input.is_empty() {
        "Type a formula. Tab: next sample, F2: policy, Esc: quit."
    } else {
        "Tab/Shift-Tab: samples, F2: policy, Del: clear, Esc: quit."
    };

    let status_widget = Paragraph::new(vec![Line::from(vec![
        Span::styled(status_text, Style::default().fg(Color::White)),
    ])])
    .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status_widget, area);
}
