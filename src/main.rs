use std::process::ExitCode;

use plum_rules::terminal::terminal_top::{parse_rules_config, run_stdio_loop};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let rules = match parse_rules_config(&args, |key| std::env::var(key).ok()) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("{err}");
            eprintln!(
                "usage: plum_rules [--compatible|--strict] [--wrap-pawn-captures|--edge-pawn-captures] [--reject-self-check|--permit-self-check]"
            );
            return ExitCode::from(2);
        }
    };

    println!(
        "info rules pawn_captures={:?} self_check={:?}",
        rules.pawn_captures, rules.self_check
    );

    match run_stdio_loop(rules) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("io error: {err}");
            ExitCode::FAILURE
        }
    }
}
