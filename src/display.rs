use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color as TermColor, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use network_ai::{Board, Color, BOARD_SIZE};

fn background(x: usize, y: usize) -> TermColor {
    if Board::is_corner(x, y) {
        TermColor::Black
    } else if Color::White.in_goal(x, y) || Color::Black.in_goal(x, y) {
        TermColor::DarkGreen
    } else {
        TermColor::DarkBlue
    }
}

/// Draws the board with column numbers (x) across the top and row numbers (y) down the side
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let columns: String = (0..BOARD_SIZE).map(|x| format!("{} ", x)).collect();
    stdout.queue(PrintStyledContent(style(format!("\n  {}\n", columns))))?;

    for y in 0..BOARD_SIZE {
        stdout.queue(PrintStyledContent(style(format!("{} ", y))))?;
        for x in 0..BOARD_SIZE {
            let (glyph, foreground) = match board.color_at(x, y) {
                Some(Color::White) => ("W", TermColor::White),
                Some(Color::Black) => ("B", TermColor::Yellow),
                None => (".", TermColor::Grey),
            };
            stdout.queue(PrintStyledContent(
                style(format!("{} ", glyph))
                    .attribute(Attribute::Bold)
                    .on(background(x, y))
                    .with(foreground),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
