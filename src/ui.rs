#![cfg(feature = "std")]

//! Text rendering of boards, ship lists and events for terminal front ends.

use std::fmt::Write;

use crate::{
    common::{AttackOutcome, CellState, GameError, Rejection, Side, Winner},
    config::BOARD_SIZE,
    events::GameEvent,
    game::{Phase, StandardGame, Turn},
    grid::Grid,
    ship::ShipStatus,
};

type G = Grid<BOARD_SIZE>;

/// Format an index as a column letter and 1-based row, e.g. `A1`.
pub fn coord_to_string(index: usize) -> String {
    let col = (b'A' + G::col_of(index) as u8) as char;
    format!("{}{}", col, G::row_of(index) + 1)
}

/// Parse `A1`-style coordinates (case-insensitive) into a cell index.
pub fn parse_coord(input: &str) -> Option<usize> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    G::index(row - 1, col)
}

fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Occupied => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Flagged => 'F',
    }
}

/// Render cell states as a lettered grid.
pub fn render_board(cells: &[CellState]) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let state = cells.get(r * BOARD_SIZE + c).copied().unwrap_or(CellState::Empty);
            let _ = write!(out, " {}", glyph(state));
        }
        out.push('\n');
    }
    out
}

/// Ship list: one block per cell while afloat, `[X]` once destroyed.
pub fn render_ship_list(status: &[ShipStatus]) -> String {
    let mut out = String::new();
    for ship in status {
        let marks = if ship.destroyed {
            String::from("X")
        } else {
            "■".repeat(ship.size)
        };
        let _ = writeln!(out, "  {:<14} [{}]", ship.name, marks);
    }
    out
}

/// Both boards plus the opponent ship list, as the player sees them.
pub fn render_view(game: &StandardGame) -> String {
    let mut out = String::new();
    if game.phase() != Phase::Placement {
        out.push_str("Enemy waters:\n");
        out.push_str(&render_board(&game.cells(Side::Opponent)));
        out.push_str("Enemy fleet:\n");
        out.push_str(&render_ship_list(&game.fleet_status(Side::Opponent)));
        out.push('\n');
    }
    out.push_str("Your fleet:\n");
    out.push_str(&render_board(&game.cells(Side::Player)));
    out
}

/// One-line prompt describing what the game expects next.
pub fn prompt(game: &StandardGame) -> String {
    match game.phase() {
        Phase::Placement => match game.next_ship() {
            Some(class) => format!(
                "Place {} (size {}, {:?}) [coord | r | enter=random | auto]: ",
                class.name(),
                class.size(),
                game.orientation()
            ),
            None => String::from("All ships placed. Type 'start' to begin: "),
        },
        Phase::Battle => match game.turn() {
            Some(Turn::PlayerTurn) => String::from("Your shot [coord | f coord | forfeit]: "),
            _ => String::from("Enemy is firing...\n"),
        },
        Phase::Terminal(_) => String::from("Game over. Type 'restart' or 'quit': "),
    }
}

/// Message for an event, if it deserves one.
pub fn describe_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::PlacementRejected { reason, .. } => Some(String::from(match reason {
            Rejection::Touches | Rejection::Overlaps => {
                "Vessels cannot be placed next to each other!"
            }
            _ => "That vessel does not fit there!",
        })),
        GameEvent::CellResolved {
            side: Side::Player,
            index,
            outcome,
        } => Some(format!(
            "Enemy fires at {}: {}",
            coord_to_string(*index),
            outcome_word(*outcome)
        )),
        GameEvent::CellResolved {
            side: Side::Opponent,
            index,
            outcome,
        } => Some(format!(
            "You fire at {}: {}",
            coord_to_string(*index),
            outcome_word(*outcome)
        )),
        GameEvent::ShipDestroyed {
            side: Side::Opponent,
            name,
            ..
        } => Some(format!("You sank the enemy {}!", name)),
        GameEvent::ShipDestroyed {
            side: Side::Player,
            name,
            ..
        } => Some(format!("Your {} was sunk!", name)),
        GameEvent::ForfeitAvailable => Some(String::from("You may now forfeit.")),
        GameEvent::GameOver {
            winner: Winner::Player,
            ..
        } => Some(String::from(
            "Congratulations! You have sunk all enemy vessels. You won!",
        )),
        GameEvent::GameOver {
            winner: Winner::Bot,
            forfeit: true,
        } => Some(String::from("You surrendered. The enemy wins.")),
        GameEvent::GameOver {
            winner: Winner::Bot,
            forfeit: false,
        } => Some(String::from("The enemy has sunk all your vessels. You lost!")),
        _ => None,
    }
}

/// Notice for an error returned by a command. Rejected placements are
/// already reported through their event.
pub fn describe_error(err: &GameError) -> Option<String> {
    match err {
        GameError::PlacementRejected(_) => None,
        GameError::AlreadyResolved => Some(String::from("You have already hit this spot!")),
        GameError::NotAllShipsPlaced => Some(String::from("Place all your ships first!")),
        other => Some(other.to_string()),
    }
}

fn outcome_word(outcome: AttackOutcome) -> &'static str {
    match outcome {
        AttackOutcome::Hit => "hit",
        AttackOutcome::Miss => "miss",
        AttackOutcome::AlreadyResolved => "already resolved",
    }
}
