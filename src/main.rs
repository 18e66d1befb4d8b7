// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::FluentArgs;
use krishi_i18n::config::{self, Config};
use krishi_i18n::crops::{self, SeasonFilter};
use krishi_i18n::error::{Error, Result};
use krishi_i18n::i18n::{keys, I18n, Locale};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: krishi_i18n [--lang CODE] [--config PATH] [--save] <command>

Commands:
  tr KEY...                           Print each key in the active language
  dashboard                           Print the dashboard menu
  crops [--season S] [--search TEXT]  List crops (S: all, kharif, rabi, summer)
  locales                             List supported languages
  check                               Report keys missing from any language
";

struct Flags {
    lang: Option<String>,
    config_path: Option<PathBuf>,
    save: bool,
    command: Option<String>,
    args: pico_args::Arguments,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    match parse_flags(args).and_then(run) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags> {
    let lang = args.opt_value_from_str("--lang").map_err(usage_error)?;
    let config_path: Option<PathBuf> =
        args.opt_value_from_str("--config").map_err(usage_error)?;
    let save = args.contains("--save");
    let command = args.subcommand().map_err(usage_error)?;

    Ok(Flags {
        lang,
        config_path,
        save,
        command,
        args,
    })
}

fn usage_error(err: pico_args::Error) -> Error {
    Error::Config(err.to_string())
}

fn run(flags: Flags) -> Result<ExitCode> {
    let Flags {
        lang,
        config_path,
        save,
        command,
        mut args,
    } = flags;

    let mut cfg = match &config_path {
        Some(path) if path.exists() => config::load_from_path(path)?,
        Some(_) => Config::default(),
        None => config::load().unwrap_or_default(),
    };
    let i18n = I18n::new(lang, &cfg)?;

    if save {
        cfg.remember_locale(i18n.current_locale());
        match &config_path {
            Some(path) => config::save_to_path(&cfg, path)?,
            None => config::save(&cfg)?,
        }
    }

    let code = match command.as_deref() {
        Some("tr") => {
            for key in args.finish() {
                println!("{}", i18n.tr(&key.to_string_lossy()));
            }
            ExitCode::SUCCESS
        }
        Some("dashboard") => {
            print_dashboard(&i18n);
            ExitCode::SUCCESS
        }
        Some("crops") => {
            let season = args
                .opt_value_from_str::<_, SeasonFilter>("--season")
                .map_err(usage_error)?
                .unwrap_or_default();
            let search: Option<String> =
                args.opt_value_from_str("--search").map_err(usage_error)?;
            print_crops(&i18n, season, search.as_deref().unwrap_or(""))?;
            ExitCode::SUCCESS
        }
        Some("locales") => {
            print_locales(&i18n);
            ExitCode::SUCCESS
        }
        Some("check") => check(&i18n),
        Some(other) => {
            eprint!("Unknown command: {}\n\n{}", other, HELP);
            ExitCode::FAILURE
        }
        None => {
            print!("{}", HELP);
            ExitCode::SUCCESS
        }
    };
    Ok(code)
}

fn print_dashboard(i18n: &I18n) {
    println!("{}", i18n.tr(keys::DASHBOARD_TITLE));
    println!("{}\n", i18n.tr(keys::DASHBOARD_SUBTITLE));
    for (title, description) in keys::DASHBOARD_FEATURES {
        println!("  {:<28} {}", i18n.tr(title), i18n.tr(description));
    }
}

fn print_crops(i18n: &I18n, season: SeasonFilter, search: &str) -> Result<()> {
    let all = crops::load_embedded()?;
    let found = crops::filter(&all, i18n, season, search);

    println!("{} ({})", i18n.tr(keys::CROPS_TITLE), i18n.tr(season.i18n_key()));
    println!("{}", i18n.tr(keys::CROPS_SUBTITLE));

    if found.is_empty() {
        println!("\n{}", i18n.tr(keys::CROPS_EMPTY));
        return Ok(());
    }

    let mut count = FluentArgs::new();
    count.set("count", found.len());
    println!("{}\n", i18n.tr_with_args(keys::CROPS_COUNT, &count));

    for crop in found {
        println!(
            "{} [{}]",
            i18n.localized(&crop.name),
            i18n.tr(crop.season.i18n_key())
        );
        println!("  {}", i18n.localized(&crop.description));
        println!("  {}: {}", i18n.tr(keys::CROPS_SOWING_PERIOD), crop.sowing_period);
        println!("  {}: {}", i18n.tr(keys::CROPS_HARVEST_PERIOD), crop.harvest_period);
        println!("  {}: {}", i18n.tr(keys::CROPS_SOIL_TYPE), crop.soil_type);
        println!("  {}: {}", i18n.tr(keys::CROPS_WATER_NEEDS), crop.water_needs);
        println!("  {}: {}\n", i18n.tr(keys::CROPS_YIELD), crop.expected_yield);
    }
    Ok(())
}

fn print_locales(i18n: &I18n) {
    println!("{}", i18n.tr(keys::COMMON_LANGUAGE));
    for locale in i18n.available_locales() {
        let marker = if *locale == i18n.current_locale() { "*" } else { " " };
        println!(
            "{} {}  {} ({})",
            marker,
            locale.code(),
            locale.english_name(),
            locale.label()
        );
    }
}

fn check(i18n: &I18n) -> ExitCode {
    let table = i18n.table();
    let mut complete = true;
    for locale in Locale::ALL {
        let missing = table.missing_keys(locale, keys::ALL);
        if missing.is_empty() {
            println!("{}: complete ({} keys)", locale, keys::ALL.len());
        } else {
            complete = false;
            println!("{}: {} missing", locale, missing.len());
            for key in missing {
                println!("  {}", key);
            }
        }
    }
    if complete {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
