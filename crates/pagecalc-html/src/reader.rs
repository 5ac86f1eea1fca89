//! Page markup reader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{HtmlError, HtmlResult};
use pagecalc_core::{FormulaElement, Page};

/// Page markup reader
pub struct HtmlReader;

impl HtmlReader {
    /// Read a page from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> HtmlResult<Page> {
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Read a page from markup text
    pub fn read_str(markup: &str) -> HtmlResult<Page> {
        Self::read(markup.as_bytes())
    }

    /// Read a page from a reader
    pub fn read<R: Read>(reader: R) -> HtmlResult<Page> {
        let reader = BufReader::new(reader);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut page = Page::new();
        let mut buf = Vec::new();

        // (expression attribute, accumulated text) of the open formula element
        let mut open_formula: Option<(Option<String>, String)> = None;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"input" => Self::collect_input(&e, &mut page)?,
                    b"formula" => {
                        if open_formula.is_some() {
                            return Err(HtmlError::InvalidFormat(
                                "Nested formula elements are not supported".into(),
                            ));
                        }
                        open_formula = Some((Self::attr(&e, b"evaluator"), String::new()));
                    }
                    _ => {}
                },

                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"input" => Self::collect_input(&e, &mut page)?,
                    b"formula" => {
                        if open_formula.is_some() {
                            return Err(HtmlError::InvalidFormat(
                                "Nested formula elements are not supported".into(),
                            ));
                        }
                        page.add_formula(FormulaElement::new(Self::attr(&e, b"evaluator")));
                    }
                    _ => {}
                },

                Ok(Event::Text(e)) => {
                    if let Some((_, text)) = open_formula.as_mut() {
                        if let Ok(unescaped) = e.unescape() {
                            text.push_str(&unescaped);
                        }
                    }
                }

                Ok(Event::End(e)) => {
                    if e.name().as_ref() == b"formula" {
                        if let Some((expression, text)) = open_formula.take() {
                            page.add_formula(FormulaElement::with_text(expression, text));
                        }
                    }
                }

                Ok(Event::Eof) => break,
                Err(e) => return Err(HtmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        if open_formula.is_some() {
            return Err(HtmlError::InvalidFormat("Unclosed formula element".into()));
        }

        Ok(page)
    }

    /// Collect an `<input>` element into the page
    ///
    /// Inputs without an id are not bindable and are skipped. On duplicate
    /// ids the first occurrence wins, matching browser id resolution.
    fn collect_input(e: &quick_xml::events::BytesStart, page: &mut Page) -> HtmlResult<()> {
        let id = match Self::attr(e, b"id") {
            Some(id) if !id.is_empty() => id,
            _ => {
                tracing::debug!("Skipping input element without id");
                return Ok(());
            }
        };
        let value = Self::attr(e, b"value").unwrap_or_default();

        if page.has_input(&id) {
            tracing::warn!("Duplicate input id '{}', keeping first occurrence", id);
            return Ok(());
        }

        page.add_input(id, value)?;
        Ok(())
    }

    /// Get an attribute value by name
    fn attr(e: &quick_xml::events::BytesStart, name: &[u8]) -> Option<String> {
        for attr in e.attributes().flatten() {
            if attr.key.as_ref() == name {
                return attr.unescape_value().ok().map(|s| s.to_string());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_basic_page() {
        let page = HtmlReader::read_str(
            r#"<html><body>
                <input id="a" value="1"/>
                <input id="b" value="2"/>
                <formula evaluator="a+b">pending</formula>
            </body></html>"#,
        )
        .unwrap();

        assert_eq!(page.input_count(), 2);
        assert_eq!(page.formula_count(), 1);
        assert_eq!(page.input("a").unwrap().value(), "1");

        let (_, formula) = page.formulas().next().unwrap();
        assert_eq!(formula.expression(), Some("a+b"));
        assert_eq!(formula.text(), "pending");
    }

    #[test]
    fn test_read_nested_markup() {
        let page = HtmlReader::read_str(
            r#"<html><body>
                <div><p><input id="x" value="5"/></p></div>
                <section><formula evaluator="x*2"></formula></section>
            </body></html>"#,
        )
        .unwrap();

        assert_eq!(page.input_count(), 1);
        assert_eq!(page.formula_count(), 1);
    }

    #[test]
    fn test_read_missing_attributes() {
        let page = HtmlReader::read_str(
            r#"<body>
                <input value="no id"/>
                <input id="a"/>
                <formula></formula>
            </body>"#,
        )
        .unwrap();

        // Inputs without id are skipped; missing value defaults to empty
        assert_eq!(page.input_count(), 1);
        assert_eq!(page.input("a").unwrap().value(), "");

        // Missing evaluator attribute is preserved as None
        let (_, formula) = page.formulas().next().unwrap();
        assert_eq!(formula.expression(), None);
    }

    #[test]
    fn test_read_duplicate_id_first_wins() {
        let page = HtmlReader::read_str(
            r#"<body>
                <input id="a" value="1"/>
                <input id="a" value="2"/>
            </body>"#,
        )
        .unwrap();

        assert_eq!(page.input_count(), 1);
        assert_eq!(page.input("a").unwrap().value(), "1");
    }

    #[test]
    fn test_read_escaped_attribute() {
        let page = HtmlReader::read_str(r#"<body><formula evaluator="a &lt; 1"/></body>"#).unwrap();

        let (_, formula) = page.formulas().next().unwrap();
        assert_eq!(formula.expression(), Some("a < 1"));
    }

    #[test]
    fn test_read_malformed_markup() {
        assert!(HtmlReader::read_str("<body><formula evaluator=\"a\"></body>").is_err());
        assert!(HtmlReader::read_str("<body><formula><formula/></formula></body>").is_err());
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(
            &path,
            r#"<html><body><input id="n" value="3"/><formula evaluator="n"/></body></html>"#,
        )
        .unwrap();

        let page = HtmlReader::read_file(&path).unwrap();
        assert_eq!(page.input_count(), 1);
        assert_eq!(page.formula_count(), 1);
    }
}
