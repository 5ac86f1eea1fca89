//! Page markup writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use quick_xml::escape::escape;

use crate::error::HtmlResult;
use pagecalc_core::{Page, ERROR_COLOR};

/// Page markup writer
///
/// Emits a normalized standalone document: the page's input fields followed
/// by its formula elements with their current display state. Unrelated
/// source markup is not preserved.
pub struct HtmlWriter;

impl HtmlWriter {
    /// Write a page to a file path
    pub fn write_file<P: AsRef<Path>>(page: &Page, path: P) -> HtmlResult<()> {
        let file = File::create(path)?;
        Self::write(page, file)
    }

    /// Write a page to a writer
    pub fn write<W: Write>(page: &Page, mut writer: W) -> HtmlResult<()> {
        writer.write_all(Self::render(page).as_bytes())?;
        Ok(())
    }

    /// Render a page as markup text
    pub fn render(page: &Page) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<body>\n");

        for input in page.inputs() {
            out.push_str(&format!(
                "<input id=\"{}\" value=\"{}\"/>\n",
                escape(input.id()),
                escape(input.value())
            ));
        }

        for (_, formula) in page.formulas() {
            out.push_str("<formula");
            if let Some(expression) = formula.expression() {
                out.push_str(&format!(" evaluator=\"{}\"", escape(expression)));
            }
            if formula.is_error() {
                out.push_str(&format!(" style=\"color: {}\"", ERROR_COLOR));
            }
            out.push_str(&format!(">{}</formula>\n", escape(formula.text())));
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::HtmlReader;
    use pagecalc_core::FormulaElement;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_page() {
        let mut page = Page::new();
        page.add_input("a", "1").unwrap();
        let key = page.add_formula(FormulaElement::new(Some("a*2".into())));
        page.formula_mut(key).unwrap().set_text("2");

        let markup = HtmlWriter::render(&page);
        assert!(markup.contains("<input id=\"a\" value=\"1\"/>"));
        assert!(markup.contains("<formula evaluator=\"a*2\">2</formula>"));
    }

    #[test]
    fn test_render_error_state() {
        let mut page = Page::new();
        let key = page.add_formula(FormulaElement::new(Some("a+b".into())));
        page.formula_mut(key).unwrap().set_error("Invalid Formula");

        let markup = HtmlWriter::render(&page);
        assert!(markup.contains("style=\"color: #ff4444\""));
        assert!(markup.contains(">Invalid Formula</formula>"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let mut page = Page::new();
        page.add_input("a", "<b>&\"").unwrap();

        let markup = HtmlWriter::render(&page);
        assert!(markup.contains("value=\"&lt;b&gt;&amp;&quot;\""));

        // The rendered document reads back cleanly
        let round = HtmlReader::read_str(&markup).unwrap();
        assert_eq!(round.input("a").unwrap().value(), "<b>&\"");
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");

        let mut page = Page::new();
        page.add_input("a", "1").unwrap();
        HtmlWriter::write_file(&page, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }
}
