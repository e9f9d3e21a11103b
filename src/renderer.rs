//! Work-list renderer — converts validated Work records into the final
//! wiki table document.
//!
//! The renderer is purely in-memory: it assembles the complete document
//! string (header, one row block per work, footer) and leaves all file
//! I/O to the caller, so a failed run can never leave a partial file
//! behind.

use crate::formatter::{
    format_catalogue_number, format_date, format_key, format_title, resolve_composer,
};
use crate::model::{ListConfig, Work};

/// Marker starting each table row.
const ROW_SEPARATOR: &str = "|-\n";
/// Closing line of the wiki table.
const PAGE_FOOTER: &str = "|}\n";

/// Render one work as a six-column row block. Columns are fixed:
/// catalogue number, title, key, date, genre, notes.
pub fn render_row(work: &Work, config: &ListConfig) -> String {
    let composer = resolve_composer(work, config);
    format!(
        "{}| {}\n| {}\n| {}\n| {}\n| {}\n| {}\n",
        ROW_SEPARATOR,
        format_catalogue_number(&work.catalogue),
        format_title(work.title_imslp.as_deref(), &work.title, &composer),
        format_key(&work.key),
        format_date(&work.date),
        work.genre,
        work.notes.as_deref().unwrap_or(""),
    )
}

/// Assemble the full document: page header, all rows in input order,
/// closing footer. A header that does not end with a newline gets one,
/// so the first row separator always starts on its own line.
pub fn render_document(works: &[Work], config: &ListConfig) -> String {
    let mut document = String::with_capacity(config.page_header.len() + works.len() * 128);
    document.push_str(&config.page_header);
    if !config.page_header.ends_with('\n') {
        document.push('\n');
    }
    for work in works {
        document.push_str(&render_row(work, config));
    }
    document.push_str(PAGE_FOOTER);
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CatalogueNumber, WorkDate};
    use pretty_assertions::assert_eq;

    fn test_config() -> ListConfig {
        ListConfig {
            composer_imslp: "Haydn, Michael".into(),
            page_header: "{| class=\"wikitable\"\n! MH !! Title !! Key !! Date !! Genre !! Notes\n".into(),
        }
    }

    fn work(number: u32, title: &str) -> Work {
        Work {
            catalogue: CatalogueNumber { number, suffix: None },
            title: title.into(),
            title_imslp: None,
            composer_imslp: None,
            key: "E-flat major".into(),
            date: WorkDate::Text("c. 1760".into()),
            genre: "Symphonies".into(),
            notes: None,
        }
    }

    #[test]
    fn row_has_six_columns_in_order() {
        let rendered = render_row(&work(5, "Symphony No.1"), &test_config());
        assert_eq!(
            rendered,
            "|-\n| {{Hs|00}}5\n| Symphony No.1\n| E{{flat}} major\n| c. 1760\n| Symphonies\n| \n"
        );
    }

    #[test]
    fn absent_notes_render_empty() {
        let mut w = work(5, "Symphony No.1");
        w.notes = Some("autograph lost".into());
        let rendered = render_row(&w, &test_config());
        assert!(rendered.ends_with("| autograph lost\n"), "got: {rendered}");
    }

    #[test]
    fn document_is_header_rows_footer_in_order() {
        let works = vec![work(5, "First"), work(42, "Second")];
        let config = test_config();
        let document = render_document(&works, &config);

        let expected = format!(
            "{}{}{}{}",
            config.page_header,
            render_row(&works[0], &config),
            render_row(&works[1], &config),
            "|}\n"
        );
        assert_eq!(document, expected);

        // Input order is preserved
        let first = document.find("First").unwrap();
        let second = document.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn header_without_trailing_newline_gets_one() {
        let config = ListConfig {
            composer_imslp: "Haydn, Michael".into(),
            page_header: "{| class=\"wikitable\"".into(),
        };
        let document = render_document(&[work(1, "Only")], &config);
        assert!(document.starts_with("{| class=\"wikitable\"\n|-\n"), "got: {document}");
    }
}
