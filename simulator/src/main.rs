//! Chore board simulator for desktop.
//!
//! Renders the built-in demo boards with the same layout code the board
//! uses and shows the two-tone result in an SDL window.
//!
//! Keys: `Space` next board, `Esc` quit.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

mod demo;
mod timing;

use std::thread;

use chores_common::colors::{PAPER_RGB, composite};
use chores_common::{Board, BoardData, Canvas, FontSet};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::demo::{Scenario, scenarios};
use crate::timing::POLL_TIME;

/// Copy both planes of `canvas` onto `display` as preview colours.
fn blit(
    canvas: &Canvas,
    display: &mut SimulatorDisplay<Rgb565>,
) {
    let size = canvas.size();
    let pixels = (0..size.height as i32).flat_map(|y| {
        (0..size.width as i32).map(move |x| {
            let point = Point::new(x, y);
            Pixel(point, composite(canvas.primary.pixel(point), canvas.accent.pixel(point)))
        })
    });
    display.draw_iter(pixels).ok();
}

/// Render `scenario` as the panel receives it.
fn show(
    window: &mut Window,
    board: &Board,
    fonts: &FontSet,
    scenario: &Scenario,
) -> SimulatorDisplay<Rgb565> {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(board.panel_size());
    display.clear(PAPER_RGB).ok();

    let data = BoardData {
        tally: &scenario.tally,
        sections: &scenario.sections,
        date: scenario.date,
        weather: scenario.weather,
    };
    match board.render(&data, fonts) {
        Ok(canvas) => {
            blit(&canvas, &mut display);
            println!(
                "{}: {} primary / {} accent pixels",
                scenario.name,
                canvas.primary.ink_count(),
                canvas.accent.ink_count()
            );
        }
        Err(e) => println!("{}: render failed: {e}", scenario.name),
    }
    window.update(&display);
    display
}

fn main() {
    let board = Board::default();
    let fonts = FontSet::default();
    let boards = scenarios();

    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Chore Board", &output_settings);

    let mut current = 0;
    let mut display = show(&mut window, &board, &fonts, &boards[current]);

    loop {
        let mut redraw = false;
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return,
                        Keycode::Space => {
                            current = (current + 1) % boards.len();
                            redraw = true;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if redraw {
            display = show(&mut window, &board, &fonts, &boards[current]);
        } else {
            window.update(&display);
        }
        thread::sleep(POLL_TIME);
    }
}
