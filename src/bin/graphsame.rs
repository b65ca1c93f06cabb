use std::{env, io, process};

use graphsame::{
    SameError,
    cli::{CommandLineConfig, evaluate_input, render},
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    if config.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(io::stderr)
            .init();
    }

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(config: &CommandLineConfig) -> Result<(), SameError> {
    let text = match &config.input {
        Some(text) => text.clone(),
        None => io::read_to_string(io::stdin()).map_err(|e| SameError::decode(e.to_string()))?,
    };
    let verdict = evaluate_input(&text, &config.fields)?;
    println!("{}", render(verdict.tri_state())?);
    if config.explain {
        println!("{verdict}");
    }
    Ok(())
}
