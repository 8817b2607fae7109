use anyhow::Result;
use arc_core::{detect_all, Detection};
use clap::Parser;

mod present;

use present::{presenter, Presenter};

const TITLE: &str = "arc";
const USAGE: &str = "Usage: arc [-g|--gui] file.exe [file2.exe ...]";

/// PE architecture inspector
#[derive(Parser)]
#[command(
    name = "arc",
    about = "Report the target CPU architecture of Windows executables",
    version,
    author
)]
struct Cli {
    /// Show results in a dialog box instead of on the console
    #[arg(short = 'g', long = "gui")]
    gui: bool,

    /// Executable files to inspect
    path: Vec<std::path::PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let sink = presenter();

    if cli.path.is_empty() {
        if cli.gui {
            sink.present(
                TITLE,
                &format!(
                    "{USAGE}\n\nDrag and drop executable files or specify them as command line arguments."
                ),
            );
        } else {
            println!("{USAGE}");
        }
        return Ok(());
    }

    if cli.gui {
        let results = detect_all(&cli.path);
        let message = results
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        sink.present(TITLE, &message);
    } else {
        // Console mode reports each file as soon as it is inspected.
        for path in &cli.path {
            println!("{}", Detection::run(path));
        }
    }

    Ok(())
}
