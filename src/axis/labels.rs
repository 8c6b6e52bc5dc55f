//! Label text to numbers

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::config::AxisConfig;
use crate::errors::CalibrationError;
use crate::primitives::{Linker, TextRun};

#[derive(Parser)]
#[grammar = "axis/labels.pest"]
struct LabelParser;

fn invalid(text: &str) -> CalibrationError {
    CalibrationError::InvalidLabel {
        text: text.to_string(),
    }
}

fn number_value(pair: Pair<Rule>) -> Option<f64> {
    let normalized: String = pair
        .as_str()
        .chars()
        .map(|c| if c == '\u{2212}' { '-' } else { c })
        .collect();
    normalized.parse().ok()
}

/// Parse a run holding exactly one number.
pub fn parse_label(text: &str) -> Result<f64, CalibrationError> {
    let pairs = LabelParser::parse(Rule::label, text).map_err(|_| invalid(text))?;
    pairs
        .flatten()
        .find(|p| p.as_rule() == Rule::number)
        .and_then(number_value)
        .ok_or_else(|| invalid(text))
}

/// Parse whitespace-separated numbers.
pub fn parse_scale(text: &str) -> Result<Vec<f64>, CalibrationError> {
    let pairs = LabelParser::parse(Rule::scale, text).map_err(|_| invalid(text))?;
    pairs
        .flatten()
        .filter(|p| p.as_rule() == Rule::number)
        .map(|p| number_value(p).ok_or_else(|| invalid(text)))
        .collect()
}

/// Merge runs along one baseline into words, in reading order.
///
/// Adjacent runs join, runs a space apart keep one space between them, and
/// wider gaps start a new word.
pub fn build_words(runs: &[TextRun], config: &AxisConfig) -> Vec<String> {
    let mut ordered: Vec<&TextRun> = runs.iter().collect();
    ordered.sort_by(|a, b| a.reading_position().total_cmp(&b.reading_position()));

    let mut words: Vec<String> = Vec::new();
    let mut previous: Option<&TextRun> = None;
    for run in ordered {
        let linker = previous.map_or(Linker::Break, |p| p.linker_to(run, config));
        match (linker, words.last_mut()) {
            (Linker::Join, Some(word)) => word.push_str(&run.content),
            (Linker::Space, Some(word)) => {
                word.push(' ');
                word.push_str(&run.content);
            }
            _ => words.push(run.content.clone()),
        }
        previous = Some(run);
    }
    words
}

/// Values of a horizontal axis: merge runs into words, then read every number.
pub fn horizontal_values(
    runs: &[TextRun],
    config: &AxisConfig,
) -> Result<(Vec<String>, Vec<f64>), CalibrationError> {
    if runs.is_empty() {
        return Err(CalibrationError::NoLabels);
    }
    let words = build_words(runs, config);
    let mut values = Vec::new();
    for word in &words {
        values.extend(parse_scale(word)?);
    }
    if values.is_empty() {
        return Err(CalibrationError::NoLabels);
    }
    Ok((words, values))
}

/// Values of a vertical axis: one number per run, top to bottom.
pub fn vertical_values(runs: &[TextRun]) -> Result<(Vec<String>, Vec<f64>), CalibrationError> {
    if runs.is_empty() {
        return Err(CalibrationError::NoLabels);
    }
    let mut ordered: Vec<&TextRun> = runs.iter().collect();
    ordered.sort_by(|a, b| a.anchor.y.total_cmp(&b.anchor.y));
    let words: Vec<String> = ordered.iter().map(|r| r.content.clone()).collect();
    let values = words
        .iter()
        .map(|w| parse_label(w))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((words, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    // ==================== Grammar ====================

    #[test]
    fn single_labels() {
        assert_eq!(parse_label("42"), Ok(42.0));
        assert_eq!(parse_label(" -3.5 "), Ok(-3.5));
        assert_eq!(parse_label("+7"), Ok(7.0));
        assert_eq!(parse_label("\u{2212}20"), Ok(-20.0));
        assert_eq!(parse_label(".25"), Ok(0.25));
        assert_eq!(parse_label("1.5e3"), Ok(1500.0));
        assert_eq!(parse_label("2E-2"), Ok(0.02));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(
            parse_label("Time"),
            Err(CalibrationError::InvalidLabel {
                text: "Time".to_string()
            })
        );
        assert!(parse_label("1 2").is_err());
        assert!(parse_label("-").is_err());
        assert!(parse_label("").is_err());
    }

    #[test]
    fn scale_reads_every_number() {
        assert_eq!(parse_scale("0 10 20"), Ok(vec![0.0, 10.0, 20.0]));
        assert_eq!(parse_scale(""), Ok(vec![]));
        assert!(parse_scale("0 10 x").is_err());
        assert_eq!(parse_scale("  0 \u{A0}10 "), Ok(vec![0.0, 10.0]));
    }

    #[test]
    fn scale_needs_gaps_between_numbers() {
        assert!(parse_scale("10-20").is_err());
        assert!(parse_scale("1.5.5").is_err());
        assert_eq!(parse_scale("10 -20"), Ok(vec![10.0, -20.0]));
    }

    // ==================== Phrases ====================

    fn run(x: f64, s: &str) -> TextRun {
        TextRun::new(dvec2(x, 120.0), 10.0, s)
    }

    #[test]
    fn characters_merge_into_numbers() {
        let config = AxisConfig::default();
        // "1" and "0" abut, then a wide gap before "2" "0"
        let runs = vec![run(30.0, "2"), run(0.0, "1"), run(5.6, "0"), run(35.6, "0")];
        assert_eq!(build_words(&runs, &config), vec!["10", "20"]);
    }

    #[test]
    fn rotated_characters_merge_in_reading_order() {
        use crate::primitives::TextRotation;

        let config = AxisConfig::default();
        let up = |y: f64, s: &str| {
            TextRun::new(dvec2(5.0, y), 10.0, s).with_rotation(TextRotation::RotatedPositive)
        };
        // reads bottom to top: "1" then "0", then "2" "5" further up
        let runs = vec![up(94.4, "0"), up(100.0, "1"), up(54.4, "5"), up(60.0, "2")];
        assert_eq!(build_words(&runs, &config), vec!["10", "25"]);

        let down = |y: f64, s: &str| {
            TextRun::new(dvec2(5.0, y), 10.0, s).with_rotation(TextRotation::RotatedNegative)
        };
        let runs = vec![down(5.6, "0"), down(0.0, "1")];
        assert_eq!(build_words(&runs, &config), vec!["10"]);
    }

    #[test]
    fn horizontal_values_from_runs() {
        let config = AxisConfig::default();
        let runs: Vec<_> = [0.0, 25.0, 50.0]
            .iter()
            .zip(["0", "10", "20"])
            .map(|(&x, s)| run(x, s))
            .collect();
        let (_, values) = horizontal_values(&runs, &config).unwrap();
        assert_eq!(values, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn vertical_values_ordered_by_y() {
        let runs = vec![
            TextRun::new(dvec2(-20.0, 103.0), 10.0, "0"),
            TextRun::new(dvec2(-20.0, 3.0), 10.0, "100"),
            TextRun::new(dvec2(-20.0, 53.0), 10.0, "50"),
        ];
        let (_, values) = vertical_values(&runs).unwrap();
        assert_eq!(values, vec![100.0, 50.0, 0.0]);
    }

    #[test]
    fn no_runs_no_labels() {
        assert_eq!(vertical_values(&[]), Err(CalibrationError::NoLabels));
        assert_eq!(
            horizontal_values(&[], &AxisConfig::default()),
            Err(CalibrationError::NoLabels)
        );
    }
}
