use anyhow::{bail, Context};
use clap::Parser;
use heaty_utils::utils::{logger, validation::Validate};
use heaty_utils::{
    escape_var_name, expand_range_string, format_time, parse_time_string, CliConfig, Command,
    TimeFormat, TimeOfDay, UtilConfig,
};
use std::collections::BTreeSet;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置，沒有指定檔案時使用預設值
    let config = match &cli.config {
        Some(path) => UtilConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => UtilConfig::default(),
    };

    // 驗證配置
    config.validate().context("Configuration validation failed")?;

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let format = match cli.command.format_override() {
        Some(pattern) => TimeFormat::new(pattern)?,
        None => config.time_format()?,
    };

    match &cli.command {
        Command::Escape { name } => {
            let escaped = escape_var_name(name);
            if cli.json {
                println!("{}", serde_json::to_string(&escaped)?);
            } else {
                println!("{}", escaped);
            }
        }
        Command::Expand { expression } => {
            let numbers = expand_range_string(expression)
                .with_context(|| format!("Cannot expand '{}'", expression))?;
            print_numbers(&numbers, cli.json)?;
        }
        Command::ExpandNamed { name } => {
            let numbers = config.expand_named_range(name)?;
            print_numbers(&numbers, cli.json)?;
        }
        Command::FormatTime {
            hour,
            minute,
            second,
            ..
        } => {
            let Some(when) = TimeOfDay::from_hms(*hour, *minute, *second) else {
                bail!("{:02}:{:02}:{:02} is not a valid time of day", hour, minute, second);
            };
            let rendered = format_time(&when, &format);
            if cli.json {
                println!("{}", serde_json::to_string(&rendered)?);
            } else {
                println!("{}", rendered);
            }
        }
        Command::ParseTime { text, .. } => match parse_time_string(text, &format) {
            Some(when) if cli.json => println!("{}", serde_json::to_string(&when)?),
            Some(when) => println!("{}", when.as_naive_time()),
            None => {
                tracing::info!("'{}' does not match format '{}'", text, format);
                if cli.json {
                    println!("null");
                } else {
                    println!("no match");
                }
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn print_numbers(numbers: &BTreeSet<i64>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(numbers)?);
    } else {
        let joined: Vec<String> = numbers.iter().map(ToString::to_string).collect();
        println!("{}", joined.join(","));
    }
    Ok(())
}
