use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use std::io::{stdin, stdout, Write};

use network_ai::{
    evaluator::winner,
    search::DEFAULT_SEARCH_DEPTH,
    selfplay::{play_game, GameResult, DEFAULT_MAX_PLIES},
    *,
};

mod display;
use display::*;

fn prompt(question: &str) -> Result<String> {
    print!("{}", question);
    stdout().flush()?;
    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        match prompt(&format!("{} y/n: ", question))?
            .to_lowercase()
            .chars()
            .next()
        {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_number(question: &str, default: usize) -> Result<usize> {
    loop {
        let answer = prompt(&format!("{} [{}]: ", question, default))?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse::<usize>() {
            Ok(number) => return Ok(number),
            Err(_) => println!("Invalid number: {}", answer),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    println!("Welcome to Network\n");

    let depth = ask_number("Search depth", DEFAULT_SEARCH_DEPTH)?;

    if ask_yes_no("Run a batch of games against a random player?")? {
        run_batch(depth)
    } else {
        play_interactive(depth)
    }
}

fn run_batch(depth: usize) -> Result<()> {
    let runs = ask_number("Enter the number of runs", 10)?;

    let progress = ProgressBar::new(runs as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let results = (0..runs)
        .into_par_iter()
        .map(|run| -> Result<bool> {
            // alternate which colour the machine plays
            let machine_color = if run % 2 == 0 {
                Color::White
            } else {
                Color::Black
            };
            let mut machine = MachinePlayer::new(machine_color, depth);
            let mut random = RandomPlayer::new(machine_color.flip(), rand::thread_rng());

            let record = match machine_color {
                Color::White => play_game(&mut machine, &mut random, DEFAULT_MAX_PLIES)?,
                Color::Black => play_game(&mut random, &mut machine, DEFAULT_MAX_PLIES)?,
            };
            progress.inc(1);
            Ok(record.result == GameResult::Win(machine_color))
        })
        .collect::<Result<Vec<bool>>>()?;
    progress.finish();

    let won = results.iter().filter(|&&won| won).count();
    println!("Won {} games out of {}", won, runs);
    println!("{:.1}% win rate", 100.0 * won as f64 / runs.max(1) as f64);
    Ok(())
}

fn play_interactive(depth: usize) -> Result<()> {
    let human = if ask_yes_no("Do you want to play white (white moves first)?")? {
        Color::White
    } else {
        Color::Black
    };
    let mut machine = MachinePlayer::new(human.flip(), depth).parallel(true);
    let mut board = Board::new();
    let mut side = Color::White;

    println!("You are {}. Enter moves as 'add X Y', 'step X Y FROM_X FROM_Y' or 'quit'", human);

    // game loop
    loop {
        display(&board)?;

        let next_move = if side == human {
            if generate_moves(&board, human).is_empty() {
                println!("You have no legal moves, the machine wins!");
                break;
            }

            let input = prompt("Move input > ")?;
            let next_move = match input.parse::<Move>() {
                Ok(next_move) => next_move,
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            };
            if next_move == Move::Quit {
                println!("You resigned, the machine wins!");
                break;
            }
            if !board.is_legal_move(next_move, human) || !machine.opponent_move(next_move) {
                println!("Illegal move: {}", next_move);
                // try the move again
                continue;
            }
            next_move
        } else {
            println!("Machine is thinking...");
            match machine.choose_move() {
                Ok(next_move) => {
                    println!("Machine plays: {} ({} nodes searched so far)", next_move, machine.node_count);
                    next_move
                }
                Err(EngineError::NoLegalMoves(_)) => {
                    println!("The machine has no legal moves, you win!");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        };

        board.perform_valid_move(next_move, side);

        // end states
        if let Some(color) = winner(&board, side) {
            display(&board)?;
            if color == human {
                println!("You win!");
            } else {
                println!("The machine wins!");
            }
            break;
        }
        side = side.flip();
    }
    Ok(())
}
