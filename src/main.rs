use clap::Parser;

use gigboard::cli::Cli;
use gigboard::core::error::GigError;
use gigboard::core::session::{self, Session, SessionEvent};
use gigboard::core::source;
use gigboard::{report, tui};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GigError> {
    let args = Cli::parse();
    let filter = args.status_filter()?;
    let records = match &args.file {
        Some(path) => source::load_applications(path)?,
        None => source::sample_applications(),
    };
    let session_rx = session::spawn_provider(args.session_profile());

    if args.plain {
        // Block until the provider resolves, then print one snapshot.
        let session = match session_rx.recv() {
            Ok(SessionEvent::Resolved(profile)) => Session::resolve(profile),
            Err(_) => Session::Loading,
        };
        print!("{}", report::render(&session, &records, &args.search, filter));
        return Ok(());
    }

    tui::run(records, args.search, filter, session_rx)
}
