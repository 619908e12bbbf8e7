use clap::Parser;
use euclid::Control;
use euclid_gtk::config;
use euclid_gtk::gui::app::{AppInit, AppModel};
use euclid_gtk::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "euclid-gtk", version, about, long_about = None)]
struct Cli {
    /// Config file to load and watch (defaults to the user config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Initial value, overriding the config file
    #[arg(short = 'v', long, allow_negative_numbers = true)]
    value: Option<f64>,

    /// Write the default config file if none exists, print its path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if cli.write_config {
        config::write_default_config(&config_path)?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let mut settings = config::load_or_default(&config_path);
    if cli.value.is_some() {
        settings.value = cli.value;
    }

    let mut control = Control::default();
    if let Err(e) = settings.apply(&mut control) {
        log::error!("Ignoring invalid config {}: {}", config_path.display(), e);
    }

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(config_path.clone(), tx);

    let app = RelmApp::new("org.euclid.slider");

    app.with_args(Vec::new()).run::<AppModel>(AppInit {
        control,
        config_path,
        rx,
    });
    Ok(())
}
