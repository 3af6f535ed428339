use std::env;
use std::ffi::OsStr;

use anyhow::Context as _;
use log::{error, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use immutable_date::{DateDuration, DateInput, ImmutableDate};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "warn");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use log::error;
    use seahorse::Context;

    /// Ends the process when an action failed.
    pub fn exit_on_error(result: anyhow::Result<()>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn single_arg(&self) -> anyhow::Result<&str> {
            match self.context().args.as_slice() {
                [arg] => Ok(arg.as_str()),
                [] => Err(anyhow::anyhow!("missing date argument")),
                _ => Err(anyhow::anyhow!("expected a single date argument")),
            }
        }

        fn optional_int_flag(&self, name: &str) -> anyhow::Result<i64> {
            match self.context().int_flag(name) {
                Ok(value) => Ok(value as i64),
                Err(seahorse::error::FlagError::NotFound) => Ok(0),
                Err(e) => Err(anyhow::anyhow!("invalid flag \"{}\": {:?}", name, e)),
            }
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

/// Reads a date from the command line: integers are timestamps, JSON objects
/// and arrays are objects and components, everything else is a date string.
fn parse_input(arg: &str) -> anyhow::Result<ImmutableDate> {
    let trimmed = arg.trim();

    let input = if let Ok(timestamp) = trimmed.parse::<i64>() {
        DateInput::Timestamp(timestamp)
    } else if trimmed.starts_with('{') || trimmed.starts_with('[') {
        let value: serde_json::Value = serde_json::from_str(trimmed)
            .with_context(|| format!("failed to parse \"{}\" as json", arg))?;
        DateInput::try_from(&value).with_context(|| format!("invalid date \"{}\"", arg))?
    } else {
        DateInput::Text(arg.to_string())
    };

    info!("interpreting \"{}\" as {:?}", arg, input);

    Ok(ImmutableDate::from(input))
}

fn print_date(date: &ImmutableDate, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&date.to_object())?);
        return Ok(());
    }

    match date.to_object() {
        Some(components) => {
            println!("{}", components);
            println!("{}", date.to_iso_string().unwrap_or_default());
            println!("{}", date.to_timestamp().unwrap_or_default());
            println!("{}", date);
        }
        None => println!("{}", date),
    }

    Ok(())
}

fn show(context: &Context) -> anyhow::Result<()> {
    let date = parse_input(context.single_arg()?)?;
    print_date(&date, context.bool_flag("json"))
}

fn shift(context: &Context) -> anyhow::Result<()> {
    let date = parse_input(context.single_arg()?)?;

    let duration = DateDuration {
        years: context.optional_int_flag("years")?,
        months: context.optional_int_flag("months")?,
        days: context.optional_int_flag("days")?,
        hours: context.optional_int_flag("hours")?,
        minutes: context.optional_int_flag("minutes")?,
        seconds: context.optional_int_flag("seconds")?,
        milliseconds: context.optional_int_flag("milliseconds")?,
    };

    let shifted = if context.bool_flag("subtract") {
        date.subtract(duration)
    } else {
        date.add(duration)
    };

    print_date(&shifted, context.bool_flag("json"))
}

fn show_action(context: &Context) {
    exit_on_error(show(context));
}

fn shift_action(context: &Context) {
    exit_on_error(shift(context));
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let json_flag = || {
        Flag::new("json", FlagType::Bool).description("[optional] Prints the components as json.")
    };

    let show_command = Command::new("show")
        .usage(format!("{} show [args] <date>", program))
        .description("Prints the components of a date.")
        .flag(json_flag())
        .action(show_action);

    let mut shift_command = Command::new("shift")
        .usage(format!("{} shift [args] <date>", program))
        .description("Adds a duration to a date and prints the result.")
        .flag(json_flag())
        .flag(
            Flag::new("subtract", FlagType::Bool)
                .description("[optional] Subtracts the duration instead of adding it."),
        );

    for unit in [
        "years",
        "months",
        "days",
        "hours",
        "minutes",
        "seconds",
        "milliseconds",
    ] {
        shift_command = shift_command.flag(
            Flag::new(unit, FlagType::Int).description(format!("[optional] Number of {}.", unit)),
        );
    }

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", program))
        .command(show_command)
        .command(shift_command.action(shift_action));

    app.run(args);

    Ok(())
}
