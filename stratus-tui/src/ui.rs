use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, Focus, Phase};

/// Screen regions the mouse handler hit-tests. Computed from the same layout
/// the renderer uses, so clicks and pixels cannot disagree.
pub struct Zones {
    pub input: Rect,
    pub search_button: Rect,
    pub suggestions: Rect,
    pub main: Rect,
    pub footer: Rect,
}

pub fn zones(area: Rect, app: &App) -> Zones {
    let suggestion_rows = if app.suggestions.is_visible() {
        app.suggestions.matches().len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(suggestion_rows),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(chunks[0]);

    Zones {
        input: top[0],
        search_button: top[1],
        suggestions: chunks[1],
        main: chunks[2],
        footer: chunks[3],
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let zones = zones(frame.area(), app);

    render_input_bar(frame, app, zones.input, zones.search_button);
    if app.suggestions.is_visible() {
        render_suggestions(frame, app, zones.suggestions);
    }
    match &app.phase {
        Phase::Loading => render_loading(frame, zones.main),
        Phase::Error(message) => render_error(frame, message, zones.main),
        Phase::Ready => render_conditions(frame, app, zones.main),
    }
    render_footer(frame, app, zones.footer);
}

fn render_input_bar(frame: &mut Frame, app: &App, input_area: Rect, button_area: Rect) {
    let focused = app.focus == Focus::Input;

    let text = if focused {
        Span::styled(format!("{}█", app.input), Style::default().fg(Color::Yellow))
    } else if app.input.is_empty() {
        Span::styled("Enter city name...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.input.clone())
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let input = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search City"),
    );
    frame.render_widget(input, input_area);

    let button = Paragraph::new("Search")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, button_area);
}

fn render_suggestions(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .matches()
        .iter()
        .enumerate()
        .map(|(i, city)| {
            let style = if app.suggestions.highlighted_index() == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{} ({})", city.name, city.country)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Suggestions (Up/Down to select, Enter to search)"),
    );
    frame.render_widget(list, area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Fetching weather data...")
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(loading, area);
}

fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    let error = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title("Error"))
        .wrap(Wrap { trim: true });
    frame.render_widget(error, area);
}

fn render_conditions(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(3)])
        .split(area);

    let snap = &app.snapshot;
    let mut lines: Vec<Line> = app
        .icon
        .art()
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Yellow))))
        .collect();

    lines.push(Line::from(vec![
        Span::styled(
            format!("{}°C  ", snap.temperature_c),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            snap.location.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        snap.description.clone(),
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Humidity: ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{}%", snap.humidity_pct)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Wind Speed: ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{} km/h", snap.wind_kmh)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Observed: ", Style::default().fg(Color::Cyan)),
        Span::raw(snap.observed_at.format("%H:%M UTC").to_string()),
    ]));

    let summary = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Current Weather"),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(summary, chunks[0]);

    let cards = [
        ("Feels Like", format!("{}°C", snap.feels_like_c)),
        ("Pressure", format!("{} hPa", snap.pressure_hpa)),
        ("Visibility", format!("{} km", snap.visibility_km)),
        ("UV Index", snap.uv_index.clone()),
    ];

    let grid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[1]);

    for ((label, value), cell) in cards.into_iter().zip(grid.iter()) {
        let card = Paragraph::new(value)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(label));
        frame.render_widget(card, *cell);
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.focus {
        Focus::Input => {
            "Type to search | Up/Down select | Enter search | Esc close/quit | Tab to panel"
        }
        Focus::Panel => "Tab or i to search | q or Esc to quit",
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
