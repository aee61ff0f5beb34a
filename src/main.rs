use anyhow::Result;
use pico_args::Arguments;
use prompt_powerline::*;
use std::env;
use std::path::PathBuf;

#[derive(Debug)]
struct Args {
    theme: Option<String>,
    style: Option<String>,
    config: Option<PathBuf>,
    help: bool,
    basename: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        Ok(Self {
            help: args.contains(["-h", "--help"]),
            basename: args.contains("--basename"),
            theme: args.opt_value_from_str("--theme")?,
            style: args.opt_value_from_str("--style")?,
            config: args
                .opt_value_from_str::<_, PathBuf>("--config")?
                .or_else(|| env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from)),
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    let mut config = config::load_config(args.config).await?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(style) = args.style {
        config.style = style;
    }

    // Override directory config with CLI flag
    if args.basename {
        config
            .segments
            .directory
            .get_or_insert_with(SegmentConfig::default)
            .properties
            .set(Property::Basename, true);
    }

    debug(&format!("Rendering with theme={}, style={}", config.theme, config.style));

    let env = ShellEnvironment::new();

    // Prompts are captured by the shell, so the tty check in `colored` would
    // always turn colors off. ColorMode already applied NO_COLOR and TERM.
    if ColorMode::detect(&env) != ColorMode::Off {
        colored::control::set_override(true);
    }

    println!("{}", generate_prompt(&config, &env));

    Ok(())
}

fn print_help() {
    println!("Prompt Powerline - Fast powerline-style shell prompt");
    println!();
    println!("USAGE:");
    println!("    prompt-powerline [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --theme <THEME>        Theme: dark, light, nord, tokyo-night, rose-pine [default: dark]");
    println!("    --style <STYLE>        Style: minimal, powerline [default: minimal]");
    println!("    --config <FILE>        Custom config file path");
    println!("    --basename             Show only directory name instead of full path");
    println!("    -h, --help             Show this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    PROMPT_POWERLINE_THEME     Override theme");
    println!("    PROMPT_POWERLINE_STYLE     Override style");
    println!("    PROMPT_POWERLINE_CONFIG    Override config path");
    println!("    PROMPT_POWERLINE_DEBUG     Enable debug logging");
    println!("    AZ_SUBSCRIPTION_NAME       Azure subscription name (skips `az`)");
    println!("    AZ_SUBSCRIPTION_ID         Azure subscription id (skips `az`)");
}
