//! Display formatting functions for the UI and the plain-text report

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::ui::colors::{get_advisory_color, get_part_color, ERROR_COLOR};
use crate::weight::{BreakdownRow, Calculation};

/// Format a weight with the given number of decimals, e.g. `18.015 g/mol`
pub fn format_weight(value: f64, precision: usize) -> String {
    format!("{value:.precision$} g/mol")
}

/// Format one breakdown row as `Fe × 2 → 55.845 × 2 = 111.690 g/mol`
pub fn format_row(row: &BreakdownRow, precision: usize) -> String {
    format!(
        "{} × {} → {} × {} = {}",
        row.symbol,
        row.count,
        row.weight,
        row.count,
        format_weight(row.line_weight, precision)
    )
}

/// Create the per-part element breakdown
pub fn create_breakdown_display(calculation: &Calculation, precision: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, part) in calculation.parts.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(vec![Span::raw("")]));
        }
        lines.push(Line::from(vec![Span::styled(
            part.text.clone(),
            Style::default().fg(get_part_color(index)),
        )]));

        match &part.outcome {
            Ok(breakdown) => {
                for row in &breakdown.rows {
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(format_row(row, precision), Style::default().fg(Color::White)),
                        Span::styled(format!("  {}", row.name), Style::default().fg(Color::DarkGray)),
                    ]));
                }
                lines.push(Line::from(vec![
                    Span::raw("  Subtotal: "),
                    Span::styled(format_weight(breakdown.subtotal, precision), Style::default().fg(Color::Yellow)),
                ]));
            }
            Err(e) => {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("Error: {e}"), Style::default().fg(ERROR_COLOR)),
                ]));
            }
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            "Nothing to weigh",
            Style::default().fg(Color::DarkGray),
        )]));
    }

    lines
}

/// Create the advisory and error list
pub fn create_message_display(calculation: &Calculation) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = calculation
        .advisories
        .iter()
        .map(|advisory| {
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", advisory.kind.label()),
                    Style::default().fg(get_advisory_color(advisory.kind)),
                ),
                Span::raw(advisory.note.clone()),
            ])
        })
        .collect();

    for (text, err) in calculation.errors() {
        lines.push(Line::from(vec![
            Span::styled("[error] ", Style::default().fg(ERROR_COLOR)),
            Span::raw(format!("{text}: {err}")),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(vec![Span::styled("No messages", Style::default().fg(Color::DarkGray))]));
    }

    lines
}

/// Create the combined composition with mass percentages
pub fn create_composition_display(calculation: &Calculation) -> Vec<Line<'static>> {
    let Some(composition) = calculation.composition() else {
        return vec![Line::from(vec![Span::styled(
            "Atom counts too large to combine",
            Style::default().fg(ERROR_COLOR),
        )])];
    };
    let percentages = calculation.mass_percentages();

    composition
        .iter()
        .map(|(symbol, count)| {
            let percent = percentages
                .iter()
                .find(|(share_symbol, _)| share_symbol == symbol)
                .map_or(0.0, |(_, percent)| *percent);
            Line::from(vec![
                Span::styled(format!("{symbol:<3}"), Style::default().fg(Color::Cyan)),
                Span::raw(format!("{count:>6}  ")),
                Span::styled(format!("{percent:>6.2}%"), Style::default().fg(Color::Green)),
            ])
        })
        .collect()
}

/// Plain-text report of a calculation, used outside the interactive UI
pub fn render_report(calculation: &Calculation, precision: usize) -> String {
    let mut lines = vec![format!("Formula: {}", calculation.input.trim())];
    if calculation.canonical != calculation.input.trim() {
        lines.push(format!("Read as: {}", calculation.canonical));
    }

    lines.extend(calculation.advisories.iter().map(ToString::to_string));

    for part in &calculation.parts {
        lines.push(String::new());
        lines.push(part.text.clone());
        match &part.outcome {
            Ok(breakdown) => {
                lines.extend(breakdown.rows.iter().map(|row| format!("  {}", format_row(row, precision))));
                lines.push(format!("  Subtotal: {}", format_weight(breakdown.subtotal, precision)));
            }
            Err(e) => lines.push(format!("  Error: {e}")),
        }
    }

    lines.push(String::new());
    lines.push(format!("Molecular weight: {}", format_weight(calculation.total, precision)));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::SymbolTable;
    use crate::formula::PolicyKind;
    use crate::weight::calculate;

    fn calc(raw: &str) -> Calculation {
        calculate(raw, &SymbolTable::standard(), &PolicyKind::CaseAware)
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(18.01528, 3), "18.015 g/mol");
        assert_eq!(format_weight(18.01528, 1), "18.0 g/mol");
    }

    #[test]
    fn test_format_row() {
        let calculation = calc("Fe2");
        let breakdown = calculation.parts[0].outcome.as_ref().unwrap();
        assert_eq!(format_row(&breakdown.rows[0], 3), "Fe × 2 → 55.845 × 2 = 111.690 g/mol");
    }

    #[test]
    fn test_report_lists_parts_and_total() {
        let report = render_report(&calc("CuSO4.5H2O"), 3);
        assert!(report.contains("Read as: CuSO4·5H2O"));
        assert!(report.contains("  Subtotal: 159.602 g/mol"));
        assert!(report.contains("  H × 10 → 1.008 × 10 = 10.080 g/mol"));
        assert!(report.ends_with("Molecular weight: 249.677 g/mol\n"));
    }

    #[test]
    fn test_report_shows_errors_and_advisories() {
        let report = render_report(&calc("no2·(H2"), 3);
        assert!(report.contains("[ambiguous]"));
        assert!(report.contains("  Error: unclosed `(` at position 0"));
        assert!(report.ends_with("Molecular weight: 46.005 g/mol\n"));
    }

    #[test]
    fn test_message_display_counts() {
        assert_eq!(create_message_display(&calc("H2O")).len(), 1);
        // ambiguous + autocorrected + error
        assert_eq!(create_message_display(&calc("no2·(H2")).len(), 3);
    }

    #[test]
    fn test_composition_display_one_line_per_element() {
        assert_eq!(create_composition_display(&calc("CuSO4·5H2O")).len(), 4);
        assert!(create_composition_display(&calc("")).is_empty());
    }

    #[test]
    fn test_composition_display_reports_overflow() {
        let lines = create_composition_display(&calc("H18446744073709551615·H2"));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), "Atom counts too large to combine");
    }

    #[test]
    fn test_report_line_layout() {
        let report = render_report(&calc("H2"), 3);
        assert_eq!(
            report,
            "Formula: H2\n\nH2\n  H × 2 → 1.008 × 2 = 2.016 g/mol\n  Subtotal: 2.016 g/mol\n\nMolecular weight: 2.016 g/mol\n"
        );
    }
}
