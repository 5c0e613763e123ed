use std::io::{self, BufRead, Write};

use colored::Colorize;
use ss_content::Dungeon;
use ss_game::{GameConfig, Session};

use crate::render;

pub fn run(dungeon: Dungeon, config: GameConfig) -> Result<(), String> {
    let mut session = Session::new(dungeon, config);

    println!("{}", render::banner());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_finished() {
        for output in session.prompt() {
            print_rendered(&render::render(&output));
        }
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                println!();
                break; // EOF
            }
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(outputs) => {
                for output in &outputs {
                    print_rendered(&render::render(output));
                }
            }
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }

    tracing::debug!(seed = ?session.seed(), "session closed");
    Ok(())
}

fn print_rendered(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}
