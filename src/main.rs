use actix::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use log::{info, warn};
use std::io::BufRead;
use std::thread;

use fast_tapper::console::{Command, CommandError, ConsoleView};
use fast_tapper::models::{Close, Restart, Start, Subscribe, Tap};
use fast_tapper::session::TapperSession;

const USAGE: &str = "commands: start | 1 (tap one) | 2 (tap two) | restart | quit";

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let session = TapperSession::new().start();
    let view = ConsoleView.start();
    if let Err(e) = session.send(Subscribe(view.recipient())).await {
        warn!("Could not subscribe console view: {}", e);
        return Ok(());
    }

    // Stdin blocks, so read it off the runtime and hand commands over a channel
    let (tx, mut rx) = mpsc::unbounded::<Command>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Error reading stdin: {}", e);
                    break;
                }
            };
            match line.parse::<Command>() {
                Ok(command) => {
                    if tx.unbounded_send(command).is_err() {
                        break;
                    }
                }
                Err(CommandError::Empty) => {}
                Err(e) => {
                    warn!("{}", e);
                    println!("{}", USAGE);
                }
            }
        }
    });

    println!("{}", USAGE);
    while let Some(command) = rx.next().await {
        let delivered = match command {
            Command::Start => session.send(Start).await,
            Command::Restart => session.send(Restart).await,
            Command::Tap(player) => session.send(Tap(player)).await,
            Command::Quit => break,
        };
        if let Err(e) = delivered {
            warn!("Session unavailable: {}", e);
            break;
        }
    }

    info!("Shutting down");
    if let Err(e) = session.send(Close).await {
        warn!("Session already stopped: {}", e);
    }
    System::current().stop();
    Ok(())
}
