//! firkin demonstration CLI
//!
//! A minimal application built on the library, used by the integration
//! tests to exercise the full dispatch surface end to end.

use firkin::{ArgumentSet, Dispatcher, FirkinError, HandlerError, RegistryError};
use std::process;

fn main() {
    let dispatcher = match build_dispatcher() {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            let e = FirkinError::from(e);
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    process::exit(dispatcher.run_env());
}

fn build_dispatcher() -> Result<Dispatcher, RegistryError> {
    let mut dispatcher = Dispatcher::new("firkin-demo");
    dispatcher.register("greet", "Greet someone by name", greet)?;
    dispatcher.register("add", "Sum integer arguments", add)?;
    Ok(dispatcher)
}

/// `greet <name> [--shout]`
fn greet(args: &ArgumentSet) -> Result<i32, HandlerError> {
    let name = args.positional(0).ok_or("missing name to greet")?;
    let mut greeting = format!("Hello, {}!", name);
    if args.is_set("shout") {
        greeting = greeting.to_uppercase();
    }
    println!("{}", greeting);
    Ok(0)
}

/// `add <n>... [--base=N]`
fn add(args: &ArgumentSet) -> Result<i32, HandlerError> {
    if args.positionals().is_empty() {
        return Err("nothing to add".into());
    }

    let mut total: i64 = args.parsed_flag("base")?.unwrap_or(0);
    for index in 0..args.positionals().len() {
        total += args.parsed_positional::<i64>(index)?.unwrap_or(0);
    }

    println!("{}", total);
    Ok(0)
}
