//! Ten-pin scorer (default binary).
//!
//! With roll tokens on the command line (`tenpin x 7 / 9 0 ...`) it scores
//! them and prints the scorecard. Without arguments it runs an interactive
//! terminal scorecard driven by single keys.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tenpin::core::Game;
use tenpin::input::{handle_key_event, should_quit};
use tenpin::play;
use tenpin::term::{FrameBuffer, ScorecardView, TerminalRenderer, Viewport};
use tenpin::{Config, OutputFormat};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);
    tracing::debug!(?config, "configuration loaded");

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    if tokens.is_empty() {
        return run_interactive();
    }
    run_batch(&tokens, &config)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(tenpin::config::DEFAULT_LOG_FILTER));
    // Ignore a second init (only possible if a test harness set one up).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_batch(tokens: &[String], config: &Config) -> Result<()> {
    let mut game = Game::new();
    for (i, token) in tokens.iter().enumerate() {
        play::apply_token(&mut game, token)
            .with_context(|| format!("roll #{} (`{token}`) rejected", i + 1))?;
    }

    match config.format {
        OutputFormat::Text => {
            println!("{game}");
            if !game.is_game_over() {
                println!("In progress: {} so far", game.final_score());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        }
    }
    Ok(())
}

fn run_interactive() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new();
    let view = ScorecardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status: Option<String> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), status.as_deref(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    status = play::apply(&mut game, action)
                        .err()
                        .map(|err| err.to_string());
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
