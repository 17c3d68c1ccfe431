//! Interactive build command

use anyhow::{Context, Result};
use schema_core::{Config, Confirmation, Document, InputReader, LineReader, Origin, Session};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Run an interactive session on stdin/stdout against `path`
pub fn cmd_build(path: &Path, overwrite: bool, config: &Config) -> Result<()> {
  let stdout = std::io::stdout();
  run_build(path, overwrite, config, LineReader::stdin(), stdout.lock())?;
  Ok(())
}

/// Load (or start fresh), populate, confirm and maybe persist.
///
/// Returns the operator's answer to the write prompt.
fn run_build<R: InputReader, W: Write>(
  path: &Path,
  overwrite: bool,
  config: &Config,
  input: R,
  mut output: W,
) -> Result<Confirmation> {
  let initial = if overwrite {
    writeln!(output, "In OVERWRITE mode")?;
    Document::new()
  } else {
    writeln!(output, "In \"Append\" mode")?;
    let (document, origin) = Document::load_or_create(path).context("Failed to load schema")?;
    if origin == Origin::Created {
      writeln!(output, "File does not exist")?;
    }
    document
  };

  let mut session = Session::new(input, output, config.registry(), config.session.clone());
  let document = session.interactive_populate(Some(initial)).map_err(session_aborted)?;
  let answer = session.confirm_persist(path).map_err(session_aborted)?;
  match answer {
    Confirmation::Persist => {
      document
        .persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Confirmation::Discard => info!("Discarded changes"),
    Confirmation::Ignored => info!("Unrecognized answer, nothing written"),
  }

  Ok(answer)
}

/// Input failures get their own message so the operator knows nothing was written
fn session_aborted(err: schema_core::Error) -> anyhow::Error {
  if err.is_input_failure() {
    anyhow::Error::new(err).context("Invalid or missing input, nothing was written")
  } else {
    anyhow::Error::new(err).context("Interactive session aborted")
  }
}
