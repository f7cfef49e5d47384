//! CSV Output
//!
//! Fixed header, one row per reported dataset, in report order.

use crate::format::format_rate;
use crate::report::DatasetRow;

/// Column header of the CSV artifact
pub const CSV_HEADER: [&str; 5] = [
    "dataset",
    "correct",
    "time_mean_std",
    "explore_nodes_mean_std",
    "pos_per_sec",
];

/// Generate the CSV artifact for a sequence of rows
pub fn generate_csv_report(rows: &[DatasetRow]) -> String {
    let mut output = String::new();
    push_record(&mut output, CSV_HEADER.iter().copied());

    for row in rows {
        let rate = format_rate(row.pos_per_sec);
        push_record(
            &mut output,
            [
                row.dataset.as_str(),
                row.correct.as_str(),
                row.time_mean_std.as_str(),
                row.explore_nodes_mean_std.as_str(),
                rate.as_str(),
            ],
        );
    }

    output
}

fn push_record<'a>(output: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        output.push_str(&escape_field(field));
    }
    output.push_str("\r\n");
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(dataset: &str) -> DatasetRow {
        DatasetRow {
            dataset: dataset.to_string(),
            correct: "2/2".to_string(),
            time_mean_std: "1.25ms ± 1.06ms".to_string(),
            explore_nodes_mean_std: "75.00 ± 35.36".to_string(),
            pos_per_sec: 800.0,
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(
            generate_csv_report(&[]),
            "dataset,correct,time_mean_std,explore_nodes_mean_std,pos_per_sec\r\n"
        );
    }

    #[test]
    fn test_rows_in_order() {
        let csv = generate_csv_report(&[row("a.txt"), row("b.txt")]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "a.txt,2/2,1.25ms ± 1.06ms,75.00 ± 35.36,800.0");
        assert!(lines[2].starts_with("b.txt,"));
    }

    #[test]
    fn test_fields_with_separators_are_quoted() {
        let csv = generate_csv_report(&[row("odd, \"name\".txt")]);
        let data = csv.lines().nth(1).unwrap();
        assert!(data.starts_with("\"odd, \"\"name\"\".txt\",2/2,"));
    }

    #[test]
    fn test_zero_rate_renders_as_integer() {
        let mut zero = row("instant.txt");
        zero.pos_per_sec = 0.0;
        let csv = generate_csv_report(&[zero]);
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "instant.txt,2/2,1.25ms ± 1.06ms,75.00 ± 35.36,0"
        );
    }
}
