use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use genui::{verify, Arguments, FromArguments, GenericUi, Nargs, Parameter, Result, Widget};
use genui_cli::report::report_error;
use log::{debug, warn};

struct Example {
    file_path: PathBuf,
    option: bool,
}

impl FromArguments for Example {
    fn names() -> Option<&'static [&'static str]> {
        Some(&["file_path", "option"])
    }

    fn from_arguments(mut arguments: Arguments) -> Result<Self> {
        Ok(Self {
            file_path: arguments.take("file_path")?,
            option: arguments.take("option")?,
        })
    }
}

fn parameters() -> Vec<Parameter> {
    vec![
        Parameter::new("file_path")
            .meta("input file")
            .verify(verify::is_file())
            .help("path to the input file")
            .widget(Widget::File),
        Parameter::new("option")
            .short('o')
            .long("option")
            .nargs(Nargs::Flag)
            .default(false)
            .help("an option that can left out to be set to False"),
    ]
}

fn describe(example: Example) -> Result<()> {
    let size = fs::metadata(&example.file_path).map_err(|e| {
        genui::Error::io_error(
            "input".to_string(),
            example.file_path.display().to_string(),
            e,
        )
    })?;
    println!(
        "{}: {} bytes, option {}",
        example.file_path.display(),
        size.len(),
        if example.option { "set" } else { "not set" }
    );
    Ok(())
}

fn run() -> Result<()> {
    let mut ui = GenericUi::new(parameters(), describe)?
        .title("Example")
        .version("1.0");

    match ui.run()?.completed() {
        Some(result) => result,
        None => {
            debug!("Nothing to do");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_input_error() {
                debug!("Input rejected: {:?}", e);
            } else {
                warn!("Run failed: {:?}", e);
            }
            report_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
