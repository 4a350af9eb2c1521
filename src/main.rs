use std::error::Error;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::info;

use molweight::{
    calculate,
    config::{Config, DEFAULT_PRECISION},
    formula::PolicyKind,
    logging,
    ui::{render_report, render_ui, TerminalGuard},
    App, SymbolTable,
};

#[derive(Parser)]
#[command(
    name = "molweight",
    version = env!("CARGO_PKG_VERSION"),
    about = "Molecular weight calculator for chemical formulas"
)]
struct Cli {
    /// Formulas to weigh; starts the interactive calculator when omitted
    formulas: Vec<String>,

    /// How to read letters that spell both one and two element symbols
    #[arg(long, value_enum, env = "MOLWEIGHT_POLICY", default_value_t = PolicyKind::CaseAware)]
    policy: PolicyKind,

    /// Decimal places shown for weights
    #[arg(long, env = "MOLWEIGHT_PRECISION", default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    human_panic::setup_panic!();
    let cli = Cli::parse();

    logging::set_log_level();
    if let Err(e) = logging::init_logging() {
        eprintln!("Logging disabled: {e}");
    }
    logging::log_system_info();

    let config = Config {
        policy: cli.policy,
        precision: cli.precision,
    };

    let result = if cli.formulas.is_empty() {
        run_interactive(config)
    } else {
        run_batch(&cli.formulas, config)
    };

    match result {
        Ok(all_complete) => {
            logging::log_shutdown();
            if !all_complete {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            logging::log_critical_error(&e.to_string(), Some("main"));
            Err(e)
        }
    }
}

/// Print a report for each formula. Returns whether all of them computed fully.
fn run_batch(formulas: &[String], config: Config) -> Result<bool, Box<dyn Error>> {
    let table = SymbolTable::standard();
    let mut all_complete = true;

    for (i, formula) in formulas.iter().enumerate() {
        let calculation = calculate(formula, &table, &config.policy);
        all_complete &= calculation.is_complete();
        if i > 0 {
            println!("{}", "-".repeat(40));
        }
        print!("{}", render_report(&calculation, config.precision));
    }

    Ok(all_complete)
}

fn run_interactive(config: Config) -> Result<bool, Box<dyn Error>> {
    info!("Starting interactive calculator");
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(config);

    loop {
        guard.terminal().draw(|f| render_ui(f, &app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Tab => app.next_sample(),
                KeyCode::BackTab => app.prev_sample(),
                KeyCode::F(2) => app.cycle_policy(),
                KeyCode::Delete => app.clear_input(),
                KeyCode::Backspace => app.on_backspace(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.on_key(c),
                _ => {}
            }
        }
    }

    drop(guard);
    Ok(true)
}
