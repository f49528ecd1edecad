// src/render/mod.rs

pub mod term;

use crate::records::{FetchOutcome, Record};

/// Column headers, in display order.
pub const HEADERS: [&str; 6] = [
    "Year",
    "Semester",
    "College",
    "Program",
    "Nationality",
    "Number of Students",
];

/// Placeholder for absent or null fields.
pub const PLACEHOLDER: &str = "N/A";

/// Body text shown for an empty result set.
pub const NO_DATA_TEXT: &str = "No data found";

/// One instruction to the display surface. The renderer only emits these;
/// an adapter owns the actual surface. Tests inspect the emitted list
/// instead of a live display.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    /// Drop every body row from the previous render.
    ClearBody,
    /// Drop any previous failure notice.
    ClearNotice,
    /// Append one six-cell body row.
    Row([String; 6]),
    /// Append one row whose single cell spans all six columns.
    SpanRow(String),
    /// Show a message on the failure surface.
    Notice(String),
}

/// Translate one fetch outcome into surface instructions.
///
/// Success and empty outcomes fully replace prior content, so replaying
/// the list never accumulates rows. A failure touches only the notice
/// region; body rows from the previous render stay as they are instead of
/// being half-overwritten.
pub fn render(outcome: &FetchOutcome) -> Vec<RenderOp> {
    match outcome {
        FetchOutcome::Success(records) if !records.is_empty() => {
            let mut ops = Vec::with_capacity(records.len() + 2);
            ops.push(RenderOp::ClearNotice);
            ops.push(RenderOp::ClearBody);
            ops.extend(records.iter().map(|r| RenderOp::Row(row_cells(r))));
            ops
        }
        FetchOutcome::Success(_) | FetchOutcome::Empty => vec![
            RenderOp::ClearNotice,
            RenderOp::ClearBody,
            RenderOp::SpanRow(NO_DATA_TEXT.to_string()),
        ],
        FetchOutcome::Failure(message) => {
            vec![RenderOp::Notice(format!("Error: {}", message))]
        }
    }
}

fn row_cells(record: &Record) -> [String; 6] {
    [
        cell(record.year.as_ref()),
        cell(record.semester.as_ref()),
        cell(record.college.as_ref()),
        cell(record.program.as_ref()),
        cell(record.nationality.as_ref()),
        cell(record.student_count.as_ref()),
    ]
}

fn cell<T: std::fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Scalar;

    fn sample_record() -> Record {
        Record {
            year: Some(Scalar::Int(2023)),
            semester: Some("Fall".to_string()),
            college: Some("IT".to_string()),
            program: Some("Bachelor of CS".to_string()),
            nationality: Some("Bahraini".to_string()),
            student_count: Some(42),
        }
    }

    #[test]
    fn success_renders_one_row_per_record() {
        let outcome = FetchOutcome::Success(vec![sample_record()]);
        let ops = render(&outcome);

        assert_eq!(
            ops,
            vec![
                RenderOp::ClearNotice,
                RenderOp::ClearBody,
                RenderOp::Row([
                    "2023".to_string(),
                    "Fall".to_string(),
                    "IT".to_string(),
                    "Bachelor of CS".to_string(),
                    "Bahraini".to_string(),
                    "42".to_string(),
                ]),
            ]
        );
    }

    #[test]
    fn absent_fields_render_as_placeholder() {
        let record = Record {
            semester: None,
            student_count: Some(10),
            ..sample_record()
        };
        let ops = render(&FetchOutcome::Success(vec![record]));

        match &ops[2] {
            RenderOp::Row(cells) => {
                assert_eq!(cells[1], PLACEHOLDER);
                assert_eq!(cells[5], "10");
            }
            other => panic!("expected a row, got {:?}", other),
        }
    }

    #[test]
    fn rows_keep_input_order() {
        let mut second = sample_record();
        second.nationality = Some("Omani".to_string());
        let ops = render(&FetchOutcome::Success(vec![sample_record(), second]));

        let nationalities: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::Row(cells) => Some(cells[4].as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(nationalities, ["Bahraini", "Omani"]);
    }

    #[test]
    fn empty_outcome_renders_span_row() {
        let expected = vec![
            RenderOp::ClearNotice,
            RenderOp::ClearBody,
            RenderOp::SpanRow(NO_DATA_TEXT.to_string()),
        ];
        assert_eq!(render(&FetchOutcome::Empty), expected);
        // A successful response with zero records renders the same way.
        assert_eq!(render(&FetchOutcome::Success(vec![])), expected);
    }

    #[test]
    fn failure_emits_only_a_notice() {
        let outcome = FetchOutcome::Failure("HTTP error! status: 503".to_string());
        let ops = render(&outcome);

        assert_eq!(
            ops,
            vec![RenderOp::Notice(
                "Error: HTTP error! status: 503".to_string()
            )]
        );
    }
}
