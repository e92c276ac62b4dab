#![cfg(feature = "std")]

//! Interactive terminal game against the bot.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    common::{AttackOutcome, GameError},
    events::GameEvent,
    game::{Phase, Turn},
    session::{EventSink, Session},
    ui::{describe_error, describe_event, parse_coord, prompt, render_view},
};

const HELP: &str = "\
Placement:  <coord> place next ship (e.g. A5) | r rotate | enter or 'random' random spot
            auto random layout for the whole fleet | start
Battle:     <coord> fire | f <coord> toggle flag | forfeit
Any time:   show | restart | help | quit";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next ship (placement) or fire (battle) at a cell.
    At(usize),
    Random,
    /// Lay out the whole fleet randomly.
    Auto,
    Rotate,
    Start,
    Flag(usize),
    Forfeit,
    Restart,
    Show,
    Help,
    Quit,
}

/// Parse a line of input. Empty input means `Random`.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Some(Command::Random);
    };
    let cmd = match head.to_ascii_lowercase().as_str() {
        "r" | "rotate" => Command::Rotate,
        "random" => Command::Random,
        "auto" => Command::Auto,
        "start" => Command::Start,
        "f" | "flag" => Command::Flag(parts.next().and_then(parse_coord)?),
        "forfeit" | "surrender" => Command::Forfeit,
        "restart" => Command::Restart,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::At(parse_coord(head)?),
    };
    Some(cmd)
}

async fn execute<S: EventSink>(session: &Session<S>, cmd: Command) -> Result<(), GameError> {
    let phase = session.read(|g| g.phase()).await;
    match cmd {
        Command::At(index) if phase == Phase::Placement => {
            session.place_next(index).await.map(drop)
        }
        Command::At(index) => match session.attack_cell(index).await? {
            AttackOutcome::AlreadyResolved => Err(GameError::AlreadyResolved),
            _ => Ok(()),
        },
        Command::Random if phase == Phase::Placement => session.place_random().await.map(drop),
        Command::Auto => session.randomize_fleet().await,
        Command::Rotate => {
            session.toggle_orientation().await;
            Ok(())
        }
        Command::Start => session.begin_battle().await,
        Command::Flag(index) => session.toggle_flag(index).await.map(drop),
        Command::Forfeit => {
            session.forfeit().await;
            Ok(())
        }
        Command::Restart => {
            session.restart().await;
            Ok(())
        }
        Command::Help => {
            println!("{}", HELP);
            Ok(())
        }
        Command::Random | Command::Show | Command::Quit => Ok(()),
    }
}

fn print_event(event: &GameEvent) {
    if let Some(msg) = describe_event(event) {
        println!("{}", msg);
    }
}

async fn redraw<S: EventSink>(session: &Session<S>) {
    let (view, line) = session.read(|g| (render_view(g), prompt(g))).await;
    println!("{}", view);
    print!("{}", line);
    let _ = std::io::stdout().flush();
}

/// Run the game loop until the player quits or stdin closes.
pub async fn run<S: EventSink>(
    session: Session<S>,
    mut events: UnboundedReceiver<GameEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", HELP);
    redraw(&session).await;
    loop {
        tokio::select! {
            Some(event) = events.recv() => {
                print_event(&event);
                if matches!(
                    event,
                    GameEvent::TurnChanged(Turn::PlayerTurn) | GameEvent::GameOver { .. } | GameEvent::ForfeitAvailable
                ) {
                    redraw(&session).await;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(cmd) = parse_command(&line) else {
                    println!("Unknown command, type 'help'");
                    continue;
                };
                if cmd == Command::Quit {
                    break;
                }
                let result = execute(&session, cmd).await;
                while let Ok(event) = events.try_recv() {
                    print_event(&event);
                }
                if let Err(e) = result {
                    if let Some(msg) = describe_error(&e) {
                        println!("{}", msg);
                    }
                    if matches!(e, GameError::PlacementExhausted { .. }) {
                        println!("Type 'auto' for a complete random layout or 'restart' to start over.");
                    }
                }
                redraw(&session).await;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(""), Some(Command::Random));
        assert_eq!(parse_command("b3"), Some(Command::At(21)));
        assert_eq!(parse_command("f J10"), Some(Command::Flag(99)));
        assert_eq!(parse_command("R"), Some(Command::Rotate));
        assert_eq!(parse_command("auto"), Some(Command::Auto));
        assert_eq!(parse_command("f"), None);
        assert_eq!(parse_command("z9"), None);
    }
}
