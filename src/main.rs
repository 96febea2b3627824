//! `ttt`: play tic-tac-toe against minimax, or inspect its search.

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_ttt::core::{Action, Board, GameRng, Mark, MarkMap};
use rust_ttt::game::{play_series, GameSession, MatchConfig, MinimaxPolicy, MovePolicy, SessionError};
use rust_ttt::rules::{winning_line, LineKind, Outcome};
use rust_ttt::search::{best_move, compare_pruning, search_parallel, SearchConfig, SearchStats};

use cli::{Cli, Command, Mode, SearchArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            human_mark,
            opening_random_moves,
            seed,
            games,
            search,
        } => {
            if search.depth == Some(0) {
                anyhow::bail!("--depth must be at least 1 to play a game");
            }
            let config = MatchConfig::default()
                .with_opening_random_moves(opening_random_moves)
                .with_seed(seed)
                .with_search(search_config(search));
            match mode {
                Mode::Human => play_human(config, human_mark),
                Mode::Computer if games > 1 => run_series(config, games),
                Mode::Computer => play_computer(config),
            }
        }
        Command::Best {
            board,
            perspective,
            parallel,
            search,
        } => run_best(&board, perspective.unwrap_or_else(|| board.mover()), parallel, search),
        Command::Prove { board, depth } => run_prove(&board, depth),
    }
}

fn search_config(args: SearchArgs) -> SearchConfig {
    SearchConfig {
        depth_limit: args.depth,
        use_pruning: !args.no_pruning,
    }
}

/// Reads moves from stdin as `row col`, both 0-2.
struct HumanPolicy;

impl MovePolicy for HumanPolicy {
    fn choose_action(&mut self, board: &Board, _rng: &mut GameRng) -> Option<Action> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("{} to move (row col, q to quit): ", board.mover());
            io::stdout().flush().ok()?;

            let line = lines.next()?.ok()?;
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") {
                return None;
            }

            match parse_action(line) {
                Some(action) => match board.apply(action) {
                    Ok(_) => return Some(action),
                    Err(err) => println!("{}", err),
                },
                None => println!("expected two numbers between 0 and 2, e.g. \"1 1\""),
            }
        }
    }

    fn is_automated(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "human"
    }
}

fn parse_action(input: &str) -> Option<Action> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .map(str::parse::<u8>);
    let row = parts.next()?.ok()?;
    let col = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    let action = Action::new(row, col);
    action.in_bounds().then_some(action)
}

fn print_board(board: &Board) {
    println!("{}\n", board);
}

fn print_outcome(board: &Board, outcome: Outcome) {
    println!("{}", outcome);
    if let Some((_, line)) = winning_line(board) {
        let label = match line.kind {
            LineKind::Row(r) => format!("row {}", r),
            LineKind::Column(c) => format!("column {}", c),
            LineKind::Diagonal => "diagonal".to_string(),
            LineKind::AntiDiagonal => "anti-diagonal".to_string(),
        };
        let cells: Vec<String> = line.cells.iter().map(ToString::to_string).collect();
        println!("Winning line: {} {}", label, cells.join(" "));
    }
}

fn play_human(config: MatchConfig, human_mark: Mark) -> Result<()> {
    let mut players: MarkMap<Box<dyn MovePolicy>> = MarkMap::new(|mark| {
        if mark == human_mark {
            Box::new(HumanPolicy) as Box<dyn MovePolicy>
        } else {
            Box::new(MinimaxPolicy::new(config.search))
        }
    });

    println!("You are {}. Cells are addressed as row col, from 0 0 to 2 2.\n", human_mark);
    let mut session = GameSession::new(config);
    print_board(session.board());

    match session.play_out(&mut players, |board, _| print_board(board)) {
        Ok(record) => {
            print_outcome(&record.board, record.outcome);
            Ok(())
        }
        Err(SessionError::NoAction { mark }) if mark == human_mark => {
            println!("\nGame abandoned.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn play_computer(config: MatchConfig) -> Result<()> {
    let mut players: MarkMap<Box<dyn MovePolicy>> =
        MarkMap::new(|_| Box::new(MinimaxPolicy::new(config.search)) as Box<dyn MovePolicy>);

    let mut session = GameSession::new(config);
    let record = session.play_out(&mut players, |board, _| print_board(board))?;

    let moves: Vec<String> = record
        .history
        .iter()
        .map(|r| format!("{}{}", r.mark, r.action))
        .collect();
    println!("Moves: {}", moves.join(" "));
    print_outcome(&record.board, record.outcome);
    Ok(())
}

fn run_series(config: MatchConfig, games: u32) -> Result<()> {
    let mut players: MarkMap<Box<dyn MovePolicy>> =
        MarkMap::new(|_| Box::new(MinimaxPolicy::new(config.search)) as Box<dyn MovePolicy>);

    info!(games, seed = config.seed, "starting series");
    let summary = play_series(config, games, &mut players)?;

    println!("Games:  {}", summary.games());
    for (mark, wins) in summary.wins.iter() {
        println!("{} wins: {}", mark, wins);
    }
    println!("Draws:  {}", summary.draws);
    Ok(())
}

fn print_stats(stats: &SearchStats) {
    println!("Nodes visited:    {}", stats.nodes_visited);
    println!("Leaves evaluated: {}", stats.leaves_evaluated);
    println!("Cutoffs:          {}", stats.cutoffs);
    println!("Deepest ply:      {}", stats.max_ply);
    println!("Time:             {} us", stats.time_us);
    println!("Nodes per second: {:.0}", stats.nodes_per_second());
}

fn run_best(board: &Board, perspective: Mark, parallel: bool, args: SearchArgs) -> Result<()> {
    let config = search_config(args);
    print_board(board);

    let (result, stats) = if parallel {
        search_parallel(board, perspective, &config)
    } else {
        let mut stats = SearchStats::new();
        let result = rust_ttt::search::search(board, perspective, &config, &mut stats);
        (result, stats)
    };

    println!("Perspective: {}", perspective);
    println!("Score:       {}", result.score);
    match result.action {
        Some(action) => println!("Best move:   {}", action),
        None => println!("Best move:   none (game over)"),
    }
    print_stats(&stats);

    // The parallel search does not share bounds, so cross-check the move.
    if parallel {
        let sequential = best_move(board, perspective, config.depth_limit, config.use_pruning);
        if sequential != result {
            anyhow::bail!("parallel result {:?} differs from sequential {:?}", result, sequential);
        }
    }
    Ok(())
}

fn run_prove(board: &Board, depth: u32) -> Result<()> {
    let perspective = board.mover();
    print_board(board);
    println!("Perspective: {}, depth limit: {}\n", perspective, depth);

    let report = compare_pruning(board, perspective, Some(depth));

    println!("Without pruning: score {}, move {:?}", report.unpruned.score, report.unpruned.action);
    print_stats(&report.unpruned_stats);
    println!();
    println!("With pruning:    score {}, move {:?}", report.pruned.score, report.pruned.action);
    print_stats(&report.pruned_stats);
    println!();

    println!("Results agree:   {}", report.results_agree());
    println!("Nodes saved:     {:.1}%", report.savings() * 100.0);

    if !report.results_agree() {
        anyhow::bail!("pruned and unpruned searches disagree");
    }
    Ok(())
}
