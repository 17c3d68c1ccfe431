//! Interactive question/answer session that fills in a schema document.

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::input::InputReader;
use crate::schema::{Document, Slot};
use crate::slot_type::{SlotTypeSelector, SlotTypes};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Operator's answer to the final "write to file?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
  Persist,
  Discard,
  /// Neither `y` nor `n`; nothing is written and nothing fails
  Ignored,
}

impl Confirmation {
  pub fn parse(answer: &str) -> Self {
    match answer.trim().to_lowercase().as_str() {
      "y" => Confirmation::Persist,
      "n" => Confirmation::Discard,
      _ => Confirmation::Ignored,
    }
  }
}

/// Drives prompts on `output` and reads answers from `input`
pub struct Session<R, W> {
  input: R,
  output: W,
  registry: Box<dyn SlotTypes>,
  config: SessionConfig,
}

impl<R: InputReader, W: Write> Session<R, W> {
  pub fn new(input: R, output: W, registry: impl SlotTypes + 'static, config: SessionConfig) -> Self {
    Self {
      input,
      output,
      registry: Box::new(registry),
      config,
    }
  }

  /// Ask how many intents to add, then collect each one and append it to the document.
  ///
  /// Starts from `initial`, or an empty document when none is given.
  pub fn interactive_populate(&mut self, initial: Option<Document>) -> Result<Document> {
    let mut document = initial.unwrap_or_default();

    let count = self.read_count("How many intents would you like to add")?;
    for number in 1..=count {
      self.add_intent_interactive(&mut document, number)?;
    }

    debug!(added = count, total = document.intents().len(), "Session complete");
    Ok(document)
  }

  fn add_intent_interactive(&mut self, document: &mut Document, number: usize) -> Result<()> {
    writeln!(self.output, "Name of intent number : {number}")?;
    self.output.flush()?;
    let intent_name = self.input.read_text()?;

    let num_slots = self.read_count("How many slots?")?;
    let mut slots = Vec::new();
    for slot_number in 1..=num_slots {
      slots.push(self.read_slot(slot_number)?);
    }

    document.add_intent(intent_name, slots);
    Ok(())
  }

  fn read_slot(&mut self, number: usize) -> Result<Slot> {
    writeln!(self.output, "Slot name no. {number}")?;
    self.output.flush()?;
    let slot_name = self.input.read_text()?.trim().to_string();

    writeln!(
      self.output,
      "Slot type? Enter a number for AMAZON supported types below, else enter a string for a Custom Slot"
    )?;
    write!(self.output, "{}", self.registry.render_all())?;
    self.output.flush()?;
    let raw = self.input.read_text()?;

    let selector = SlotTypeSelector::parse(&raw, &*self.registry);
    debug!(slot = %slot_name, ?selector, "Resolved slot type");
    Ok(Document::build_slot(slot_name, selector.into_type_name()))
  }

  /// Prompt for a non-negative integer, re-asking on malformed answers
  fn read_count(&mut self, prompt: &str) -> Result<usize> {
    let max_attempts = self.config.max_attempts.max(1);
    let mut attempt = 1;
    loop {
      writeln!(self.output, "{prompt}")?;
      self.output.flush()?;

      match self.input.read_typed::<usize>() {
        Ok(count) => return Ok(count),
        Err(Error::InvalidInput { input, .. }) if attempt < max_attempts => {
          warn!(%input, attempt, max_attempts, "Rejected non-numeric answer");
          writeln!(self.output, "Please enter a whole number (0 or more), got {input:?}")?;
          attempt += 1;
        }
        Err(e) => return Err(e),
      }
    }
  }

  /// Ask whether to write the document to `path`
  pub fn confirm_persist(&mut self, path: &Path) -> Result<Confirmation> {
    writeln!(self.output, "Write to file: {} ? (y/n)", path.display())?;
    self.output.flush()?;
    let answer = self.input.read_text()?;
    Ok(Confirmation::parse(&answer))
  }

  /// Give back the prompt writer
  pub fn into_output(self) -> W {
    self.output
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::input::LineReader;
  use crate::slot_type::Registry;
  use pretty_assertions::assert_eq;
  use std::io::Cursor;

  type TestSession = Session<LineReader<Cursor<Vec<u8>>>, Vec<u8>>;

  fn session(script: &str) -> TestSession {
    session_with(script, SessionConfig::default())
  }

  fn session_with(script: &str, config: SessionConfig) -> TestSession {
    let input = LineReader::new(Cursor::new(script.as_bytes().to_vec()));
    Session::new(input, Vec::new(), Registry::builtin(), config)
  }

  /// Registry stand-in with a single code
  struct OneType;

  impl SlotTypes for OneType {
    fn describe(&self, code: u32) -> Result<(&str, &str)> {
      match code {
        42 => Ok(("TEST.ANSWER", "the answer")),
        _ => Err(Error::NotFound { code }),
      }
    }

    fn render_all(&self) -> String {
      "  42: TEST.ANSWER\n".to_string()
    }
  }

  #[test]
  fn test_single_intent_without_slots() {
    let doc = session("1\nHello\n0\n").interactive_populate(None).unwrap();
    assert_eq!(doc.intents().len(), 1);
    assert_eq!(doc.intents()[0].name(), "Hello");
    assert!(doc.intents()[0].slots().is_empty());
  }

  #[test]
  fn test_slot_types_registered_and_custom() {
    let script = "1\nOrder\n2\n  quantity \n2\nflavor\nFooType\n";
    let doc = session(script).interactive_populate(None).unwrap();

    let slots = doc.intents()[0].slots();
    assert_eq!(slots[0], Slot::new("quantity", "AMAZON.NUMBER"));
    assert_eq!(slots[1], Slot::new("flavor", "FooType"));
  }

  #[test]
  fn test_appends_to_initial_document() {
    let mut initial = Document::new();
    initial.add_intent("Existing", vec![]);

    let doc = session("2\nFirst\n0\nSecond\n0\n")
      .interactive_populate(Some(initial))
      .unwrap();
    let names: Vec<_> = doc.intents().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["Existing", "First", "Second"]);
  }

  #[test]
  fn test_zero_intents() {
    let doc = session("0\n").interactive_populate(None).unwrap();
    assert!(doc.intents().is_empty());
  }

  #[test]
  fn test_reprompts_on_bad_count() {
    let mut session = session("lots\n1\nHello\nnone\n0\n");
    let doc = session.interactive_populate(None).unwrap();
    assert_eq!(doc.intents()[0].name(), "Hello");

    let output = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(output.matches("How many intents would you like to add").count(), 2);
    assert_eq!(output.matches("How many slots?").count(), 2);
  }

  #[test]
  fn test_gives_up_after_max_attempts() {
    let config = SessionConfig { max_attempts: 2 };
    let err = session_with("x\ny\n1\n", config).interactive_populate(None).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { ref input, .. } if input == "y"));
  }

  #[test]
  fn test_single_attempt_fails_immediately() {
    let config = SessionConfig { max_attempts: 1 };
    let err = session_with("x\n1\n", config).interactive_populate(None).unwrap_err();
    assert!(err.is_input_failure());
  }

  #[test]
  fn test_input_closed_mid_intent() {
    let err = session("1\nHello\n").interactive_populate(None).unwrap_err();
    assert!(matches!(err, Error::InputClosed));
  }

  #[test]
  fn test_huge_slot_count_then_input_closed() {
    let err = session("1\nHello\n18446744073709551615\n")
      .interactive_populate(None)
      .unwrap_err();
    assert!(matches!(err, Error::InputClosed));
  }

  #[test]
  fn test_prompts_list_registry() {
    let mut session = session("1\nWeather\n1\ncity\n6\n");
    session.interactive_populate(None).unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("Name of intent number : 1"));
    assert!(output.contains("Slot name no. 1"));
    assert!(output.contains("6: AMAZON.US_CITY"));
  }

  #[test]
  fn test_substitute_registry() {
    let input = LineReader::new(Cursor::new(b"1\nAsk\n2\nq\n42\nr\n2\n".to_vec()));
    let mut session = Session::new(input, Vec::new(), OneType, SessionConfig::default());
    let doc = session.interactive_populate(None).unwrap();

    let slots = doc.intents()[0].slots();
    assert_eq!(slots[0].type_name(), "TEST.ANSWER");
    assert_eq!(slots[1].type_name(), "2");
  }

  #[test]
  fn test_confirmation_answers() {
    assert_eq!(Confirmation::parse("y"), Confirmation::Persist);
    assert_eq!(Confirmation::parse(" Y \n"), Confirmation::Persist);
    assert_eq!(Confirmation::parse("n"), Confirmation::Discard);
    assert_eq!(Confirmation::parse("yes"), Confirmation::Ignored);
    assert_eq!(Confirmation::parse(""), Confirmation::Ignored);
  }

  #[test]
  fn test_confirm_persist_prompt() {
    let mut session = session("N\n");
    let answer = session.confirm_persist(Path::new("schema.json")).unwrap();
    assert_eq!(answer, Confirmation::Discard);

    let output = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(output, "Write to file: schema.json ? (y/n)\n");
  }
}
