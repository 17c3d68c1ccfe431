//! Line-oriented operator input.

use crate::error::{Error, Result};
use std::io::BufRead;
use std::str::FromStr;

/// Source of operator answers, one line per prompt
pub trait InputReader {
  /// Next line without its terminator, or `None` once input is exhausted
  fn read_line(&mut self) -> Result<Option<String>>;

  /// Next line as free text; end of input is an error
  fn read_text(&mut self) -> Result<String> {
    self.read_line()?.ok_or(Error::InputClosed)
  }

  /// Next line converted to `T`, ignoring surrounding whitespace
  fn read_typed<T: FromStr>(&mut self) -> Result<T> {
    let line = self.read_text()?;
    line.trim().parse::<T>().map_err(|_| Error::InvalidInput {
      expected: std::any::type_name::<T>(),
      input: line,
    })
  }
}

/// [`InputReader`] over any buffered reader (stdin, or a `Cursor` in tests)
pub struct LineReader<R> {
  inner: R,
}

impl<R: BufRead> LineReader<R> {
  pub fn new(inner: R) -> Self {
    Self { inner }
  }
}

impl LineReader<std::io::StdinLock<'static>> {
  pub fn stdin() -> Self {
    Self::new(std::io::stdin().lock())
  }
}

impl<R: BufRead> InputReader for LineReader<R> {
  fn read_line(&mut self) -> Result<Option<String>> {
    let mut line = String::new();
    if self.inner.read_line(&mut line)? == 0 {
      return Ok(None);
    }

    if line.ends_with('\n') {
      line.pop();
      if line.ends_with('\r') {
        line.pop();
      }
    }
    Ok(Some(line))
  }
}
