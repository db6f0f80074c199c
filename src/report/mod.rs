use crate::domain::model::SourceReport;
use comfy_table::{presets::ASCII_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

/// Render one board's statistics as an ASCII table under a title line.
pub fn render(title: &str, report: &SourceReport) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Language",
        "Vacancies found",
        "Vacancies processed",
        "Average salary",
    ]);

    for (language, stats) in report {
        let mut row = Row::new();
        row.add_cell(Cell::new(language).set_alignment(CellAlignment::Left));
        row.add_cell(
            Cell::new(stats.vacancies_found.to_string()).set_alignment(CellAlignment::Right),
        );
        row.add_cell(
            Cell::new(stats.vacancies_processed.to_string()).set_alignment(CellAlignment::Right),
        );
        row.add_cell(
            Cell::new(stats.average_salary.to_string()).set_alignment(CellAlignment::Right),
        );
        table.add_row(row);
    }

    format!("{}\n{}", title, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LanguageStats;

    fn stats(found: u64, processed: u64, average: u64) -> LanguageStats {
        LanguageStats {
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary: average,
        }
    }

    #[test]
    fn test_render_has_title_header_and_rows_in_order() {
        let report = vec![
            ("Python".to_string(), stats(120, 80, 185000)),
            ("Go".to_string(), stats(40, 25, 210000)),
        ];

        let rendered = render("HeadHunter Moscow", &report);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "HeadHunter Moscow");
        assert!(rendered.contains("Language"));
        assert!(rendered.contains("Average salary"));

        let python_line = lines.iter().position(|l| l.contains("Python")).unwrap();
        let go_line = lines.iter().position(|l| l.contains("Go")).unwrap();
        assert!(python_line < go_line);
        assert!(lines[python_line].contains("185000"));
        assert!(lines[go_line].contains("210000"));
    }

    #[test]
    fn test_render_empty_report_is_header_only() {
        let rendered = render("SuperJob Moscow", &vec![]);
        assert!(rendered.starts_with("SuperJob Moscow"));
        assert!(rendered.contains("Language"));
    }
}
