//! Replays the decorator lessons: every lesson prints its demo output
//! while the decorators report through `tracing`.

mod lesson;

use clap::Parser;
use lesson::Lesson;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
#[command(name = "micro-decor-showcase", version, about)]
struct Options {
    /// which lesson to run
    #[arg(short, long, value_enum, default_value_t = Lesson::All)]
    lesson: Lesson,

    /// repeat count used by the parameterized decorator lesson, may be negative to see it rejected
    #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
    times: i64,

    /// max level of the decorator diagnostics
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() {
    let options = Options::parse();

    let subscriber = FmtSubscriber::builder().with_max_level(options.log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    for lesson in options.lesson.expand() {
        info!(lesson = ?lesson, "start lesson");
        if let Err(e) = lesson.run(&options) {
            error!(lesson = ?lesson, cause = %e, "lesson failed");
        }
    }
}
