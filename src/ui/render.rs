use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::braille::{BrailleCanvas, Ink};
use crate::config::types::DisplayConfig;
use crate::game::{Orientation, Paddle, Side, WorldState};

// Layout: score row, controls row, then the bordered field
const UI_HEADER_ROWS: u16 = 2;

// Center divider pattern in field units
const DIVIDER_DASH: f64 = 5.0;
const DIVIDER_GAP: f64 = 15.0;

pub fn render(frame: &mut Frame, world: &WorldState, display: &DisplayConfig, controls: &str) {
    let area = frame.area();

    // Wipe the previous frame, then paint true black
    frame.render_widget(Clear, area);
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    draw_scores(frame, world, display, area);
    draw_controls(frame, controls, area);

    if area.height <= UI_HEADER_ROWS {
        return;
    }
    let field_area = Rect {
        x: area.x,
        y: area.y + UI_HEADER_ROWS,
        width: area.width,
        height: area.height - UI_HEADER_ROWS,
    };
    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = border.inner(field_area);
    frame.render_widget(border, field_area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let canvas = draw_field(world, inner.width as usize, inner.height as usize);
    render_braille_canvas(frame, &canvas, display, inner);
}

/// Rasterize the world into a Braille canvas of the given cell size
pub fn draw_field(world: &WorldState, width: usize, height: usize) -> BrailleCanvas {
    let mut canvas = BrailleCanvas::new(width, height);
    let rules = &world.rules;

    // Calculate scale from field units to Braille pixels
    let scale_x = canvas.pixel_width() as f64 / rules.field_width;
    let scale_y = canvas.pixel_height() as f64 / rules.field_height;

    canvas.set_ink(Ink::Divider);
    match rules.orientation {
        Orientation::Portrait => {
            let y = (rules.field_height / 2.0 * scale_y) as usize;
            canvas.dashed_horizontal_line(y, to_pixels(DIVIDER_DASH, scale_x), to_pixels(DIVIDER_GAP, scale_x));
        }
        Orientation::Landscape => {
            let x = (rules.field_width / 2.0 * scale_x) as usize;
            canvas.dashed_vertical_line(x, to_pixels(DIVIDER_DASH, scale_y), to_pixels(DIVIDER_GAP, scale_y));
        }
    }

    canvas.set_ink(Ink::Paddle);
    draw_paddle(&mut canvas, &world.player, scale_x, scale_y);
    draw_paddle(&mut canvas, &world.computer, scale_x, scale_y);

    canvas.set_ink(Ink::Ball);
    let ball = &world.ball;
    canvas.fill_ellipse(
        ball.x * scale_x,
        ball.y * scale_y,
        ball.radius * scale_x,
        ball.radius * scale_y,
    );

    canvas
}

// Anything visible gets at least one pixel
fn to_pixels(units: f64, scale: f64) -> usize {
    ((units * scale).round() as usize).max(1)
}

fn draw_paddle(canvas: &mut BrailleCanvas, paddle: &Paddle, scale_x: f64, scale_y: f64) {
    let pixel_x = (paddle.x * scale_x).max(0.0) as usize;
    let pixel_y = (paddle.y * scale_y).max(0.0) as usize;
    canvas.fill_rect(
        pixel_x,
        pixel_y,
        to_pixels(paddle.width, scale_x),
        to_pixels(paddle.height, scale_y),
    );
}

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}

fn render_braille_canvas(
    frame: &mut Frame,
    canvas: &BrailleCanvas,
    display: &DisplayConfig,
    area: Rect,
) {
    let style_for = |ink: Ink| match ink {
        Ink::Blank => Style::default(),
        Ink::Divider => Style::default().fg(rgb(display.center_line_color)),
        Ink::Paddle => Style::default().fg(rgb(display.paddle_color)),
        Ink::Ball => Style::default().fg(rgb(display.ball_color)),
    };

    // Group runs of equally-colored cells into spans
    let mut lines = Vec::with_capacity(canvas.height());
    for y in 0..canvas.height() {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_ink = canvas.ink_at(0, y);

        for x in 0..canvas.width() {
            let ink = canvas.ink_at(x, y);
            if ink != run_ink {
                spans.push(Span::styled(std::mem::take(&mut run), style_for(run_ink)));
                run_ink = ink;
            }
            run.push(canvas.to_char(x, y));
        }
        spans.push(Span::styled(run, style_for(run_ink)));
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_scores(frame: &mut Frame, world: &WorldState, display: &DisplayConfig, area: Rect) {
    let text = format!(
        "YOU {:>3}   |   CPU {:>3}",
        world.score(Side::Player),
        world.score(Side::Computer)
    );
    let scores = Paragraph::new(text)
        .style(Style::default().fg(rgb(display.score_color)))
        .alignment(Alignment::Center);

    let score_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.min(1),
    };
    frame.render_widget(scores, score_area);
}

fn draw_controls(frame: &mut Frame, controls: &str, area: Rect) {
    if area.height < 2 {
        return;
    }
    let hint = Paragraph::new(controls.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    let controls_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 1,
    };
    frame.render_widget(hint, controls_area);
}
