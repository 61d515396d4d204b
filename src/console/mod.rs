//! Interactive console game.
//!
//! Runs Othello between any mix of human and computer players: setup
//! prompts, turn sequencing with pass and game-over detection, board
//! rendering with candidate moves marked, and computer moves driven by
//! the search engine. A computer's difficulty is the search depth it
//! plays at; difficulty 0 picks a uniformly random legal move instead
//! of searching.

pub mod input;
mod render;

use rand::Rng;

use crate::board::{find_best_move, Board, Color, Coord, MoveMap};

use input::{parse_entry, prompt, Entry, MAX_DIFFICULTY};

/// One seat at the table.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer { difficulty: usize },
}

impl Player {
    fn human(name: String) -> Self {
        Player {
            name,
            kind: PlayerKind::Human,
        }
    }

    fn computer(name: &str, difficulty: usize) -> Self {
        Player {
            name: name.to_string(),
            kind: PlayerKind::Computer { difficulty },
        }
    }
}

/// Run the interactive game: prompt for setup, then play to completion.
pub fn run() {
    println!("Welcome to the game of Othello!");
    let Some(mut players) = setup_players() else {
        return;
    };

    // Random draw for who takes Black and moves first.
    let mut rng = rand::thread_rng();
    if rng.gen_range(0..2) == 1 {
        players.swap(0, 1);
    }
    println!("By random draw, {} moves first!", players[0].name);

    play(players, &mut rng);
}

/// Prompt for the game mode, player names, and computer difficulties.
/// Returns `None` when stdin closes mid-setup.
fn setup_players() -> Option<[Player; 2]> {
    let mode = loop {
        let line = prompt(
            "Enter 1 for a player vs player game, 2 for player vs computer, \
             or 3 for computer vs computer: ",
        )?;
        match line.trim() {
            "1" | "2" | "3" => break line.trim().to_string(),
            _ => continue,
        }
    };

    match mode.as_str() {
        "1" => {
            let first = prompt("Enter name for Player 1: ")?.trim().to_string();
            let second = prompt("Enter name for Player 2: ")?.trim().to_string();
            Some([Player::human(first), Player::human(second)])
        }
        "2" => {
            let name = prompt("Enter name for Player 1: ")?.trim().to_string();
            let difficulty = prompt_difficulty("the computer")?;
            Some([
                Player::human(name),
                Player::computer("Computer", difficulty),
            ])
        }
        _ => {
            let first = prompt_difficulty("computer #1")?;
            let second = prompt_difficulty("computer #2")?;
            Some([
                Player::computer("Computer1", first),
                Player::computer("Computer2", second),
            ])
        }
    }
}

fn prompt_difficulty(who: &str) -> Option<usize> {
    loop {
        let line = prompt(&format!(
            "Enter a difficulty for {who} from 0 (easiest) to {MAX_DIFFICULTY} (hardest): "
        ))?;
        if let Ok(level) = line.trim().parse::<usize>() {
            if level <= MAX_DIFFICULTY {
                return Some(level);
            }
        }
    }
}

/// The turn loop. Black is seat 0 and moves on even turns.
fn play(mut players: [Player; 2], rng: &mut impl Rng) {
    let mut board = Board::new();
    let mut debug = false;
    let mut consecutive_passes = 0;
    let mut turn = 0usize;

    loop {
        let seat = turn % 2;
        let color = if seat == 0 { Color::Black } else { Color::White };
        let moves = board.legal_moves(color);
        turn += 1;

        render::print_turn_rule();

        if moves.is_empty() && !board.is_full() {
            consecutive_passes += 1;
            println!("\nPlayer {} can not move anywhere.", players[seat].name);
        }

        let game_over = board.is_full() || consecutive_passes == 2;
        if game_over {
            println!("Game over!");
        } else {
            println!(
                "\nIt is {}'s turn to move as the color {}.",
                players[seat].name,
                color.to_char()
            );
        }
        render::print_score(&players, &board);
        render::print_board(&board, &moves);

        if game_over {
            announce_winner(&players, &board);
            return;
        }
        if moves.is_empty() {
            continue;
        }

        let selected = match players[seat].kind {
            PlayerKind::Computer { difficulty } => {
                let Some(mv) = computer_move(&board, color, &moves, difficulty, debug, rng) else {
                    continue;
                };
                println!("{} selected the move: {mv}.", players[seat].name);
                mv
            }
            PlayerKind::Human => {
                match human_move(&mut players, &board, color, &moves, &mut debug) {
                    Some(mv) => mv,
                    None => return,
                }
            }
        };

        if let Err(err) = board.play(color, selected, &moves) {
            println!("{err}");
            continue;
        }
        consecutive_passes = 0;
    }
}

/// Pick a computer move: random at difficulty 0, minimax otherwise.
/// A failed search falls back to the first legal move. Returns `None`
/// only when the move map is empty, which the turn loop rules out.
fn computer_move(
    board: &Board,
    color: Color,
    moves: &MoveMap,
    difficulty: usize,
    debug: bool,
    rng: &mut impl Rng,
) -> Option<Coord> {
    let fallback = moves.first()?.dest;
    if difficulty == 0 {
        let idx = rng.gen_range(0..moves.len());
        return Some(moves.destinations().nth(idx).unwrap_or(fallback));
    }
    match find_best_move(board, color, moves, difficulty) {
        Ok(result) => {
            if debug {
                render::print_evaluations(&result.evaluations);
            }
            Some(result.best_move)
        }
        Err(_) => Some(fallback),
    }
}

/// Prompt a human until they enter a legal move. Difficulty digits and
/// the debug toggle are handled in place. Returns `None` on EOF.
fn human_move(
    players: &mut [Player; 2],
    board: &Board,
    color: Color,
    moves: &MoveMap,
    debug: &mut bool,
) -> Option<Coord> {
    loop {
        println!(
            "Enter 'D' to toggle debug mode or a number from 0 to {MAX_DIFFICULTY} \
             to change the difficulty of the computer."
        );
        let options: Vec<String> = moves.destinations().map(|mv| mv.to_string()).collect();
        if *debug {
            if let Ok(result) = find_best_move(board, color, moves, current_difficulty(players)) {
                render::print_evaluations(&result.evaluations);
            }
        }
        let line = prompt(&format!(
            "... or select one of the possible moves [{}]: ",
            options.join(", ")
        ))?;

        match parse_entry(&line) {
            Some(Entry::Move(mv)) if moves.contains(mv) => return Some(mv),
            Some(Entry::Move(_)) | None => continue,
            Some(Entry::Difficulty(level)) => {
                for player in players.iter_mut() {
                    if let PlayerKind::Computer { difficulty } = &mut player.kind {
                        *difficulty = level;
                    }
                }
                println!("Computer difficulty set to: {level}");
            }
            Some(Entry::ToggleDebug) => {
                *debug = !*debug;
                println!("Debug mode: {debug}");
            }
        }
    }
}

/// The difficulty a debug-mode evaluation runs at: the first computer
/// seat's setting, or 1 in an all-human game.
fn current_difficulty(players: &[Player; 2]) -> usize {
    players
        .iter()
        .find_map(|p| match p.kind {
            PlayerKind::Computer { difficulty } => Some(difficulty.max(1)),
            PlayerKind::Human => None,
        })
        .unwrap_or(1)
}

fn announce_winner(players: &[Player; 2], board: &Board) {
    let (black, white) = board.score();
    if black > white {
        println!("{} wins {black} to {white}!", players[0].name);
    } else if white > black {
        println!("{} wins {white} to {black}!", players[1].name);
    } else {
        println!("The game is a draw, {black} all.");
    }
}
