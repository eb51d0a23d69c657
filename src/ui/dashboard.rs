use crate::calculator::{Emphasis, InfoCard, Tier};
use crate::config::charts::{palette, ChartKind};
use crate::config::{category_color, ReferenceChart, Rgb, REFERENCE_CHARTS};
use crate::ui::app::{App, Field, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, List,
        ListItem, Paragraph, Row, Table, Wrap,
    },
    Frame,
};

const BRAND_DARK: Color = Color::Rgb(0x0A, 0x0E, 0x27); // #0a0e27 - page background
const BRAND_TEXT: Color = Color::Rgb(0x88, 0x92, 0xB0); // #8892b0 - chart text
const BRAND_ACCENT: Color = Color::Rgb(0x64, 0xFF, 0xDA); // #64ffda - headings
const BRAND_SELECT_BG: Color = Color::Rgb(0x1E, 0x29, 0x4B); // #1e294b - selection
const BRAND_WARN: Color = Color::Rgb(0xFF, 0xA5, 0x00); // #ffa500 - AI note
const BRAND_MUTED: Color = Color::Rgb(0x4A, 0x51, 0x6B); // #4a516b - faded cards, footer

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_ACCENT)
    .add_modifier(Modifier::BOLD);
const SECTION_STYLE: Style = Style::new().fg(BRAND_TEXT).add_modifier(Modifier::ITALIC);

/// Bars carry integers; values are stored in tenths to keep one decimal.
const BAR_SCALE: f64 = 10.0;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn bar_value(value: f64) -> u64 {
    (value.max(0.0) * BAR_SCALE).round() as u64
}

pub fn draw_calculator(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Form + results
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);

    let main = Layout::horizontal([
        Constraint::Percentage(38), // Form
        Constraint::Percentage(62), // Results
    ])
    .split(chunks[1]);

    draw_form(frame, main[0], app);
    draw_results(frame, main[1], app);

    let help = match &app.status {
        Some(status) => format!(" {status} "),
        None => " ↑↓ Field | 0-9 Edit | ←→ Choice | a AI section | Tab Reference | q Quit "
            .to_string(),
    };
    draw_footer(frame, chunks[2], &help);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let result = &app.report.result;
    let title = format!(
        " Energy Footprint | {:.1} kWh/day | {}% of average ",
        result.grand_total, app.report.comparison.percentage
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.selected();
    let mut items: Vec<ListItem> = Vec::new();
    let mut last_section = None;

    for field in Field::ALL {
        let section = field.section();

        // Section header, with a fold marker for the AI section
        if last_section != Some(section) {
            let title = if section == Section::Ai {
                let marker = if app.prefs.ai_section_collapsed {
                    "▸"
                } else {
                    "▾"
                };
                format!("── {marker} {} ──", section.title())
            } else {
                format!("── {} ──", section.title())
            };
            items.push(ListItem::new(Line::from(Span::styled(title, SECTION_STYLE))));
            last_section = Some(section);
        }

        if section == Section::Ai && app.prefs.ai_section_collapsed {
            continue;
        }

        let is_selected = field == selected;
        let style = if is_selected {
            SELECTED_STYLE
        } else {
            Style::default()
        };

        let mut value = app.field_text(field);
        if field.choices().is_some() {
            value = format!("◂ {value} ▸");
        } else if is_selected {
            value.push('▏');
        }

        let marker = if is_selected { " ◄" } else { "" };
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("{:<26}", field.label()), style),
            Span::styled(value, style),
            Span::styled(marker, Style::default().fg(BRAND_WARN)),
        ])));
    }

    let list = List::new(items).block(
        Block::default()
            .title(" Your Habits ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_ACCENT)),
    );

    frame.render_widget(list, area);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(9), // Totals table
        Constraint::Length(6), // Breakdown chart
        Constraint::Min(5),    // Comparison message
        Constraint::Length(5), // Info cards
    ])
    .split(area);

    draw_totals(frame, chunks[0], app);
    draw_breakdown_chart(frame, chunks[1], app);
    draw_comparison(frame, chunks[2], app);
    draw_info_cards(frame, chunks[3], app);
}

fn draw_totals(frame: &mut Frame, area: Rect, app: &App) {
    let result = &app.report.result;

    let header = Row::new(vec!["Category", "kWh/day", "Share"])
        .style(HEADER_STYLE)
        .height(1);

    let mut rows: Vec<Row> = result
        .shares()
        .iter()
        .map(|(category, share)| {
            Row::new(vec![
                category.label().to_string(),
                format!("{:.1}", result.subtotal(*category)),
                format!("{share:.1}%"),
            ])
            .style(Style::default().fg(color(category_color(*category))))
        })
        .collect();

    rows.push(
        Row::new(vec![
            "  of which AI".to_string(),
            format!("{:.1}", result.ai_subtotal),
            String::new(),
        ])
        .style(Style::default().fg(BRAND_TEXT)),
    );
    rows.push(
        Row::new(vec![
            "Total".to_string(),
            format!("{:.1}", result.grand_total),
            String::new(),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Results ").borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn draw_breakdown_chart(frame: &mut Frame, area: Rect, app: &App) {
    let result = &app.report.result;

    let bars: Vec<Bar> = result
        .shares()
        .iter()
        .map(|(category, share)| {
            let value = result.subtotal(*category);
            let fg = color(category_color(*category));
            Bar::default()
                .value(bar_value(value))
                .label(Line::from(category.label()))
                .text_value(format!("{value:.1} kWh ({share:.1}%)"))
                .style(Style::default().fg(fg))
                .value_style(Style::default().fg(BRAND_DARK).bg(fg))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Your Personal Energy Breakdown ")
                .borders(Borders::ALL),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn draw_comparison(frame: &mut Frame, area: Rect, app: &App) {
    let comparison = &app.report.comparison;

    let headline_color = match comparison.tier {
        Tier::Excellent => color(palette::FOOD),
        Tier::Good => BRAND_ACCENT,
        Tier::Average => color(palette::HOME),
        Tier::AboveAverage => color(palette::GOODS),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            comparison.headline,
            Style::default()
                .fg(headline_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(comparison.body.as_str()),
    ])];

    if let Some(note) = &comparison.ai_note {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            note.as_str(),
            Style::default().fg(BRAND_WARN),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Comparison ").borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn card_style(card: &InfoCard) -> Style {
    match card.emphasis {
        Emphasis::Highlighted => Style::default().add_modifier(Modifier::BOLD),
        Emphasis::Partial => Style::default(),
        Emphasis::Faded => Style::default().fg(BRAND_MUTED),
    }
}

fn draw_info_cards(frame: &mut Frame, area: Rect, app: &App) {
    let cards = app.cards.all();
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let slots = Layout::horizontal(constraints).split(area);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        let style = card_style(card);
        let text = vec![
            Line::from(vec![
                Span::styled(card.value.as_str(), style),
                Span::styled(" kWh/day", Style::default().fg(BRAND_TEXT)),
            ]),
            Line::from(Span::styled(
                card.description.as_str(),
                Style::default().fg(BRAND_TEXT),
            )),
        ];

        let widget = Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(format!(" {} ", card.title))
                .borders(Borders::ALL)
                .border_style(style),
        );
        frame.render_widget(widget, *slot);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

pub fn draw_reference(frame: &mut Frame, app: &App) {
    let chart = &REFERENCE_CHARTS[app.reference_page];

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Chart
        Constraint::Length(4), // Averages
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let header = Paragraph::new(format!(
        " Reference {}/{} | {} ",
        app.reference_page + 1,
        REFERENCE_CHARTS.len(),
        chart.title
    ))
    .style(HEADER_STYLE)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    match chart.kind {
        ChartKind::Line => draw_line_chart(frame, chunks[1], chart),
        ChartKind::Bar | ChartKind::Doughnut | ChartKind::Radar | ChartKind::PolarArea => {
            draw_bar_chart(frame, chunks[1], chart);
        }
    }

    draw_averages(frame, chunks[2], app);

    draw_footer(
        frame,
        chunks[3],
        " ←→ Chart | Tab Calculator | q Quit ",
    );
}

fn draw_bar_chart(frame: &mut Frame, area: Rect, chart: &ReferenceChart) {
    let mut barchart = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} ({}) ", chart.title, chart.unit))
                .borders(Borders::ALL),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1);

    for (i, label) in chart.labels.iter().enumerate() {
        let bars: Vec<Bar> = chart
            .datasets
            .iter()
            .map(|dataset| {
                let value = dataset.values[i];
                let fg = chart
                    .label_colors
                    .and_then(|colors| colors.get(i))
                    .map_or_else(|| color(dataset.color), |c| color(*c));
                let bar_label = if chart.datasets.len() > 1 {
                    format!("{label} · {}", dataset.label)
                } else {
                    (*label).to_string()
                };
                Bar::default()
                    .value(bar_value(value))
                    .label(Line::from(bar_label))
                    .text_value(format!("{value}"))
                    .style(Style::default().fg(fg))
                    .value_style(Style::default().fg(BRAND_DARK).bg(fg))
            })
            .collect();

        barchart = barchart.data(BarGroup::default().bars(&bars));
    }

    frame.render_widget(barchart, area);
}

fn draw_line_chart(frame: &mut Frame, area: Rect, chart: &ReferenceChart) {
    let points: Vec<Vec<(f64, f64)>> = chart
        .datasets
        .iter()
        .map(|dataset| {
            dataset
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = chart
        .datasets
        .iter()
        .zip(points.iter())
        .map(|(dataset, data)| {
            Dataset::default()
                .name(dataset.label)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color(dataset.color)))
                .data(data)
        })
        .collect();

    let max = chart
        .datasets
        .iter()
        .flat_map(|d| d.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let y_top = (max / 10.0).ceil() * 10.0;
    let x_top = chart.labels.len().saturating_sub(1) as f64;

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", chart.title))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(BRAND_TEXT))
                .bounds([0.0, x_top])
                .labels(chart.labels.iter().step_by(3).copied()),
        )
        .y_axis(
            Axis::default()
                .title(chart.unit)
                .style(Style::default().fg(BRAND_TEXT))
                .bounds([0.0, y_top])
                .labels(["0".to_string(), format!("{}", y_top / 2.0), format!("{y_top}")]),
        );

    frame.render_widget(widget, area);
}

fn draw_averages(frame: &mut Frame, area: Rect, app: &App) {
    let averages = &app.config.averages;
    let text = vec![
        Line::from(format!(
            "Typical daily total: {}-{} kWh  |  Reference average: {} kWh/day",
            averages.total_daily.min, averages.total_daily.max, averages.american_daily
        )),
        Line::from(format!(
            "Annual: {}-{} MWh  |  Daily cost: ${}-{}  |  Annual CO2: {}-{} t",
            averages.annual_mwh.min,
            averages.annual_mwh.max,
            averages.daily_cost.min,
            averages.daily_cost.max,
            averages.annual_co2.min,
            averages.annual_co2.max
        )),
    ];

    let widget = Paragraph::new(text)
        .style(Style::default().fg(BRAND_TEXT))
        .block(Block::default().title(" Averages ").borders(Borders::ALL));

    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnergyConfig;
    use crate::ui::app::default_form;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, draw: fn(&mut Frame, &App)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn calculator_view_shows_totals_and_message() {
        let app = App::new(EnergyConfig::default(), default_form());

        let screen = render(&app, draw_calculator);

        assert!(screen.contains("Energy Footprint | 45.0 kWh/day | 35% of average"));
        assert!(screen.contains("Your Habits"));
        assert!(screen.contains("Excellent!"));
        assert!(screen.contains("No AI usage"));
    }

    #[test]
    fn collapsed_ai_section_hides_its_fields() {
        let mut app = App::new(EnergyConfig::default(), default_form());
        app.handle_key(KeyCode::Char('a'));

        let screen = render(&app, draw_calculator);

        assert!(screen.contains("▸ AI Usage"));
        assert!(!screen.contains("AI chat (hrs/day)"));
    }

    #[test]
    fn every_reference_page_renders() {
        let mut app = App::new(EnergyConfig::default(), default_form());
        app.handle_key(KeyCode::Tab);

        for chart in REFERENCE_CHARTS {
            let screen = render(&app, draw_reference);
            assert!(screen.contains(chart.title), "{}", chart.title);
            app.handle_key(KeyCode::Right);
        }
    }
}
