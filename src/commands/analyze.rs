//! The `analyze` command: one submission in, one result out

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

use crate::io::{create_writer, OutputFormat};
use crate::request::AssessmentRequest;

/// Read a JSON submission from a file or stdin, run the pipeline, and write
/// the result in the requested format
pub fn analyze_submission(
    input: Option<&Path>,
    format: OutputFormat,
    output: Option<&PathBuf>,
) -> anyhow::Result<()> {
    let raw = read_input(input)?;
    let request: AssessmentRequest =
        serde_json::from_str(&raw).context("failed to parse assessment submission")?;

    let errors = request.validate();
    if !errors.is_empty() {
        bail!("invalid assessment submission:\n  {}", errors.join("\n  "));
    }

    let result = request.analyze()?;

    let mut writer = match output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            create_writer(file, format)
        }
        None => create_writer(std::io::stdout(), format),
    };
    writer.write_result(&result)
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
