//! Start/pause control read from the terminal

use std::{
    io::BufRead,
    thread::{self, JoinHandle},
};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::Command;

/// Map one input line to a command
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "" | "p" | "s" | "toggle" => Some(Command::Toggle),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Forward commands from `reader` until EOF, a quit, or the driver going away
pub fn read_commands<R: BufRead>(reader: R, commands: &mpsc::Sender<Command>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        };

        let Some(command) = parse_command(&line) else {
            warn!("Ignoring unknown input: {:?}", line.trim());
            continue;
        };

        debug!("Input command: {:?}", command);
        if commands.blocking_send(command).is_err() {
            debug!("Cycle driver gone, stopping input reader");
            return;
        }
        if command == Command::Quit {
            return;
        }
    }
    info!("Input closed");
}

/// Read stdin on a dedicated thread so blocking reads never hold up the runtime
pub fn spawn_stdin_reader(commands: mpsc::Sender<Command>) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-input".to_string())
        .spawn(move || read_commands(std::io::stdin().lock(), &commands))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(""), Some(Command::Toggle));
        assert_eq!(parse_command("  P \n"), Some(Command::Toggle));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("Quit"), Some(Command::Quit));
        assert_eq!(parse_command("hello"), None);
    }

    #[test]
    fn test_read_commands_skips_unknown_and_stops_at_quit() {
        let (tx, mut rx) = mpsc::channel(8);
        read_commands(Cursor::new("\nbogus\np\nq\n\n"), &tx);

        assert_eq!(rx.try_recv().unwrap(), Command::Toggle);
        assert_eq!(rx.try_recv().unwrap(), Command::Toggle);
        assert_eq!(rx.try_recv().unwrap(), Command::Quit);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_read_commands_stops_when_driver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        read_commands(Cursor::new("\n\n\n"), &tx);
    }
}
