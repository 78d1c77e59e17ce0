//! Dashboard layout: header, KPI row, depth chart, trade tape, footer

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};

use super::app::TuiApp;
use crate::driver::DashboardFrame;
use crate::orderbook::BookSide;
use crate::trades::TradeSide;

const GREEN: Color = Color::Rgb(0, 255, 136);
const RED: Color = Color::Rgb(255, 51, 102);
const BLUE: Color = Color::Rgb(0, 212, 255);
const MUTED: Color = Color::Rgb(125, 133, 144);

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // KPI row
            Constraint::Min(0),    // Chart + tape
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    let Some(data) = app.frame.as_ref() else {
        let waiting = Paragraph::new(" Waiting for first cycle...")
            .style(Style::default().fg(MUTED))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(waiting, chunks[2]);
        return;
    };

    draw_kpis(frame, data, chunks[1]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    draw_depth_chart(frame, data, main[0]);
    draw_trades(frame, data, app.view.trade_rows, main[1]);
    draw_footer(frame, app, data, chunks[3]);
}

fn draw_header(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let cycle = app.frame.as_ref().map(|f| f.cycle).unwrap_or(0);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", app.view.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" TARGET_ASSET: ", Style::default().fg(MUTED)),
            Span::raw(app.view.asset.clone()),
            Span::styled(" | STATUS: ", Style::default().fg(MUTED)),
            Span::styled("● SYNTHETIC_FEED", Style::default().fg(GREEN)),
            Span::styled(format!(" | CYCLE: {}", cycle), Style::default().fg(MUTED)),
        ]),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(BLUE)),
    );
    frame.render_widget(header, area);
}

fn draw_kpis(frame: &mut Frame, data: &DashboardFrame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let book = &data.book;
    let kpis = [
        ("MID PRICE", format_price(Some(book.mid_price)), Color::White),
        ("BEST BID", format_price(book.best_bid()), GREEN),
        ("BEST ASK", format_price(book.best_ask()), RED),
        (
            "SPREAD (BPS)",
            book.spread_bps()
                .map(|bps| format!("{:.2}", bps))
                .unwrap_or_else(|| "-".to_string()),
            BLUE,
        ),
    ];

    for ((label, value, color), area) in kpis.into_iter().zip(columns.iter()) {
        let widget = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", label))
                .title_style(Style::default().fg(MUTED)),
        );
        frame.render_widget(widget, *area);
    }
}

fn draw_depth_chart(frame: &mut Frame, data: &DashboardFrame, area: Rect) {
    let book = &data.book;
    let bids = book.depth_points(BookSide::Bid);
    let asks = book.depth_points(BookSide::Ask);

    let mut x_min = bids.last().map(|p| p.0).unwrap_or(book.mid_price);
    let mut x_max = asks.last().map(|p| p.0).unwrap_or(book.mid_price);
    if x_max <= x_min {
        // zero spread with a single level collapses the axis
        let pad = book.mid_price.abs().max(1.0) * 0.001;
        x_min -= pad;
        x_max += pad;
    }
    let y_max = book
        .total_volume(BookSide::Bid)
        .max(book.total_volume(BookSide::Ask))
        .max(1.0)
        * 1.05;
    let mid_line = [(book.mid_price, 0.0), (book.mid_price, y_max)];

    let datasets = vec![
        Dataset::default()
            .name("BIDS")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(GREEN))
            .data(&bids),
        Dataset::default()
            .name("ASKS")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(RED))
            .data(&asks),
        Dataset::default()
            .name(format!("MID {:.4}", book.mid_price))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(BLUE))
            .data(&mid_line),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" DEPTH CHART ")
                .title_style(Style::default().fg(MUTED)),
        )
        .x_axis(
            Axis::default()
                .title("PRICE")
                .style(Style::default().fg(MUTED))
                .bounds([x_min, x_max])
                .labels([
                    format!("{:.2}", x_min),
                    format!("{:.2}", book.mid_price),
                    format!("{:.2}", x_max),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("CUMULATIVE VOLUME")
                .style(Style::default().fg(MUTED))
                .bounds([0.0, y_max])
                .labels([
                    "0".to_string(),
                    group_thousands(&format!("{:.0}", y_max / 2.0)),
                    group_thousands(&format!("{:.0}", y_max)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn draw_trades(frame: &mut Frame, data: &DashboardFrame, max_rows: usize, area: Rect) {
    let shown = data.trades.len().min(max_rows);
    let header = Row::new(["TIME", "SIDE", "PRICE", "VOLUME", "VALUE"])
        .style(Style::default().fg(MUTED).add_modifier(Modifier::BOLD));

    let rows = data.trades.iter().take(shown).map(|t| {
        let side = match t.side {
            TradeSide::Buy => Span::styled(
                format!("▲ {}", t.side),
                Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
            ),
            TradeSide::Sell => Span::styled(
                format!("▼ {}", t.side),
                Style::default().fg(RED).add_modifier(Modifier::BOLD),
            ),
        };
        Row::new(vec![
            Cell::from(t.timestamp.format("%H:%M:%S%.3f").to_string()),
            Cell::from(side),
            Cell::from(format!("{:.4}", t.price)),
            Cell::from(group_thousands(&format!("{:.2}", t.volume))),
            Cell::from(Span::styled(
                format!("${}", group_thousands(&format!("{:.2}", t.value))),
                Style::default().fg(BLUE),
            )),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12), // Time
            Constraint::Length(6),  // Side
            Constraint::Length(9),  // Price
            Constraint::Length(8),  // Volume
            Constraint::Min(11),    // Value
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" TRADE HISTORY ")
            .title_style(Style::default().fg(MUTED))
            .title_bottom(
                Line::from(format!(" LAST {} EXECUTIONS ", shown)).right_aligned(),
            ),
    );

    frame.render_widget(table, area);
}

fn draw_footer(frame: &mut Frame, app: &TuiApp, data: &DashboardFrame, area: Rect) {
    let mut text = format!(
        " LAST UPDATE: {} UTC | q=quit",
        data.generated_at.format("%Y-%m-%d %H:%M:%S%.3f")
    );
    if app.render_failures > 0 {
        text.push_str(&format!(" | render failures: {}", app.render_failures));
    }

    let footer = Paragraph::new(text)
        .style(Style::default().fg(MUTED))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

fn format_price(price: Option<f64>) -> String {
    price
        .map(|p| format!("{:.4}", p))
        .unwrap_or_else(|| "-".to_string())
}

/// Insert thousands separators into a formatted decimal number
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
