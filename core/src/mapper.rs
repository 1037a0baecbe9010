use crate::error::{MapperError, Result};
use crate::input::{loose_flag_values, MapperInput};
use crate::label::Label;
use crate::summary::{BatchReport, FlagSummary};
use serde_json::Value;
use tracing::{debug, trace};

pub fn summarize(input: Option<&MapperInput>) -> FlagSummary {
    match input {
        Some(input) => tally(input.flag_values()),
        None => FlagSummary::default(),
    }
}

pub fn summarize_value(input: &Value) -> FlagSummary {
    tally(loose_flag_values(input))
}

/// Parses `text` as JSON and summarizes it. Blank text counts as no input.
pub fn summarize_str(text: &str) -> Result<FlagSummary> {
    if text.trim().is_empty() {
        return Ok(FlagSummary::default());
    }
    let input: Value =
        serde_json::from_str(text).map_err(|err| MapperError::Deserialize(err.to_string()))?;
    Ok(summarize_value(&input))
}

#[cfg(feature = "yaml")]
pub fn summarize_yaml(text: &str) -> Result<FlagSummary> {
    if text.trim().is_empty() {
        return Ok(FlagSummary::default());
    }
    let input: Value = serde_yaml::from_str(text)
        .map_err(|err| MapperError::Deserialize(format!("yaml parse error: {err}")))?;
    Ok(summarize_value(&input))
}

pub fn summarize_batch(inputs: &[Value]) -> Vec<FlagSummary> {
    inputs.iter().map(summarize_value).collect()
}

pub fn report_batch(inputs: &[Value]) -> BatchReport {
    let report = BatchReport::new(summarize_batch(inputs));
    debug!(documents = report.summaries.len(), worst = ?report.worst, "batch summarized");
    report
}

/// Tallies raw label text. `None` marks a value that was not a string.
pub fn summarize_labels<I, S>(labels: I) -> FlagSummary
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut summary = FlagSummary::default();
    let mut skipped = 0usize;
    for text in labels {
        let text: Option<&str> = text.as_ref().map(|text| text.as_ref());
        match text.and_then(Label::from_str_exact) {
            Some(label) => summary.record(label),
            None => {
                trace!(value = ?text, "ignoring unknown flag value");
                skipped += 1;
            }
        }
    }
    debug!(
        critical = summary.critical,
        red = summary.red,
        amber = summary.amber,
        green = summary.green,
        skipped,
        "flags summarized"
    );
    summary
}

fn tally<'a, I>(values: I) -> FlagSummary
where
    I: IntoIterator<Item = &'a Value>,
{
    summarize_labels(values.into_iter().map(Value::as_str))
}
