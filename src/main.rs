use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use localquest::app::App;
use localquest::audio::{self, Sequencer, SilentOutput, ToneOutput};
use localquest::build_info;
use localquest::config::Config;
use localquest::constants::{CONFIG_FILE, INPUT_POLL_MS};
use localquest::input::map_key;
use localquest::logging::init_logging;
use localquest::persistence::{default_data_dir, OnboardingFlag};
use localquest::ui::draw_ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "localquest")]
#[command(about = "Turn everyday chores into quests")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Configuration file (default: <data-dir>/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the onboarding flag, config and log (default: ~/.localquest)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Never open the audio device
    #[arg(long)]
    mute: bool,

    /// Show the opening greeting again
    #[arg(long)]
    replay_opening: bool,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print version and build information
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("localquest {}", build_info::version_line());
        return Ok(());
    }

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir().context("cannot locate the data directory")?,
    };
    init_logging(&data_dir, cli.verbose).context("failed to set up logging")?;
    log::info!("Starting localquest {}", build_info::version_line());

    let config_path = cli
        .config
        .unwrap_or_else(|| data_dir.join(CONFIG_FILE));
    let mut config = Config::load(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    if cli.mute {
        config.audio.muted = true;
    }

    let onboarding = OnboardingFlag::in_dir(&data_dir);
    if cli.replay_opening {
        if let Err(e) = onboarding.reset() {
            log::warn!("Could not reset the opening flag: {}", e);
        }
    }

    let output: Box<dyn ToneOutput> = if config.audio.muted {
        Box::new(SilentOutput::new())
    } else {
        audio::open_output(config.audio.volume)
    };
    let sequencer = Sequencer::with_tempo(output, config.audio.tempo());
    let mut app = App::new(sequencer, onboarding, config, Instant::now());

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore the terminal before reporting any loop error
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    log::info!("Goodbye");
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        let view = app.view();
        terminal.draw(|f| draw_ui(f, &view))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                app.handle(map_key(key_event), Instant::now());
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}
