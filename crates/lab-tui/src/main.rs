//! Standalone TUI binary for the Analysis Lab.

use std::process;

use clap::Parser;

use lab_core::{Intent, Session};
use lab_tui::app::LabApp;
use lab_tui::sound::{NullSound, SoundPort, TerminalBell};

#[derive(Parser)]
#[command(
    name = "lab-tui",
    about = "Interactive critical-thinking exercises in the terminal",
    version
)]
struct Args {
    /// Jump straight into a module (cause-effect, argument, systems, scientific)
    #[arg(long)]
    module: Option<String>,

    /// Start with the terminal-bell sound muted
    #[arg(long)]
    mute: bool,

    /// List the available modules and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    let args = Args::parse();
    let mut session = Session::builtin();

    if args.list {
        for module in session.catalog().modules() {
            println!(
                "{:<14} {} ({}, {} pts)",
                module.id, module.title, module.kind, module.points
            );
        }
        return;
    }

    if let Some(id) = args.module
        && !session.apply(Intent::StartModule { id: id.clone() }).is_accepted()
    {
        eprintln!("error: unknown module '{id}' (try --list)");
        process::exit(1);
    }

    let sound: Box<dyn SoundPort> = if args.mute {
        Box::new(NullSound)
    } else {
        Box::new(TerminalBell)
    };
    let app = LabApp::new(session, sound, !args.mute);

    if let Err(e) = lab_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
