//! CLI logic for the Limner tool.
//!
//! Each subcommand runs one stage of the [`DiagramPipeline`] and writes its
//! result to a file or stdout. A stage that finds nothing writes nothing.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use limner::{
    DiagramPipeline, LimnerError,
    diagram::{DiagramRequest, DiagramType},
};

/// Run the Limner CLI application
///
/// Loads configuration, builds a [`DiagramPipeline`] and dispatches on
/// [`Command`].
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `LimnerError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unknown `--type` values
pub fn run(args: &Args) -> Result<(), LimnerError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let pipeline = DiagramPipeline::new(app_config);

    match &args.command {
        Command::Detect { text } => {
            let report = pipeline.detect(text).map(|request| format_detection(&request));
            write_output(report.as_deref(), None)
        }
        Command::Prompt {
            text,
            diagram_type,
            with_system,
            output,
        } => {
            let request = match diagram_type {
                Some(name) => {
                    let diagram_type: DiagramType =
                        name.parse().map_err(LimnerError::DiagramType)?;
                    Some(pipeline.request_as(text, diagram_type))
                }
                None => pipeline.detect(text),
            };

            let prompt = request.map(|request| {
                let prompt = pipeline.prompt_for(&request);
                if *with_system {
                    format!("{}\n\n{prompt}", pipeline.system_prompt())
                } else {
                    prompt
                }
            });
            write_output(prompt.as_deref(), output.as_deref())
        }
        Command::Extract { input, output } => {
            info!(input_path = input; "Extracting diagram from reply");
            let reply = read_input(input)?;
            let source = pipeline.extract(&reply);
            write_output(source.as_deref(), output.as_deref())
        }
    }
}

/// Renders a detected request as `key: value` lines.
fn format_detection(request: &DiagramRequest) -> String {
    format!(
        "type: {}\ndescription: {}",
        request.diagram_type(),
        request.description()
    )
}

/// Reads a reply from a file, or from stdin when `input` is `-`.
fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(input)
    }
}

fn write_output(content: Option<&str>, output: Option<&str>) -> Result<(), LimnerError> {
    let Some(content) = content else {
        info!("Nothing to write");
        return Ok(());
    };

    match output {
        Some(path) => {
            fs::write(path, format!("{content}\n"))?;
            info!(output_file = path; "Output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        let request = DiagramRequest::new(
            DiagramType::Flowchart,
            "a for my morning routine",
            "Create a flowchart for my morning routine",
        );
        assert_eq!(
            format_detection(&request),
            "type: flowchart\ndescription: a for my morning routine"
        );
    }

    #[test]
    fn test_missing_input_file_is_io_error() {
        let err = read_input("does/not/exist.md").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
