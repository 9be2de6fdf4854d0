pub mod dice;
pub mod gameplay;
pub mod players;
pub mod sampling;

/// Cash balances and scores in the market game.
pub type Credits = i64;
/// Share counts held or traded.
pub type Shares = i64;
/// Card values, quoted prices, and dice totals.
pub type Value = i64;
/// Dice bankrolls are fractional because Kelly stakes are fractions.
pub type Bankroll = f64;

// ============================================================================
// MARKET GAME PARAMETERS
// ============================================================================
/// Smallest divisor in the bot order-sizing rule.
pub const SIZING_DIVISOR: Value = 10;
/// Width of the random increment added to the sizing divisor, exclusive.
pub const SIZING_JITTER: Value = 3;
/// Default number of bot traders at the table.
pub const DEFAULT_BOTS: usize = 3;
/// Default number of quoting rounds per game.
pub const DEFAULT_ROUNDS: usize = 5;
/// Default lower bound on sampled values, inclusive.
pub const DEFAULT_MIN: Value = 0;
/// Default upper bound on sampled values, exclusive.
pub const DEFAULT_MAX: Value = 1000;

// ============================================================================
// DICE TABLE PARAMETERS
// ============================================================================
/// Starting bankroll at the dice table.
pub const BANKROLL: Bankroll = 1000.0;
/// Default number of hands in a batch simulation.
pub const DEFAULT_HANDS: usize = 1000;
/// Standard deviation of the multiplicative noise on posted payouts.
pub const PAYOUT_NOISE: f64 = 0.1;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
