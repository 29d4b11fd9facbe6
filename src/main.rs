use std::path::Path;

use visiframe::cli::{self, CliAction};
use visiframe::Viewer;

fn main() {
    env_logger::init();

    // Determine the name under which the program is being executed.
    let args: Vec<String> = std::env::args().collect();
    let exec_name = args
        .first()
        .map(|arg0| {
            Path::new(arg0)
                .file_name()
                .map_or_else(|| arg0.clone(), |n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());

    match cli::parse(&args[1..]) {
        CliAction::Help => println!("{}", cli::help_text(&exec_name)),
        CliAction::Usage => println!("{}", cli::usage_text(&exec_name)),
        CliAction::Version => println!("{}", cli::version_text(&exec_name)),
        CliAction::Unknown(unknown) => {
            eprintln!("Unknown options: {}", unknown.join(" "));
            eprintln!("{}", cli::short_help_text(&exec_name));
            std::process::exit(1);
        }
        CliAction::Run => {
            if let Err(e) = Viewer::builder()
                .with_title(env!("CARGO_PKG_NAME"))
                .build()
                .run()
            {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    }
}
