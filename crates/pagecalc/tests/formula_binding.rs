//! End-to-end tests: read markup, bind formulas, drive input changes

use pagecalc::prelude::*;

const PAGE: &str = r#"<html>
<body>
    <p>Unit price: <input id="price" value="12.50"/></p>
    <p>Quantity: <input id="qty" value="4"/></p>
    <p>Discount: <input id="discount" value="0"/></p>
    <formula evaluator="price * qty"></formula>
    <formula evaluator="price * qty - discount"></formula>
    <formula evaluator="total + 1"></formula>
</body>
</html>"#;

fn formula_keys(page: &Page) -> Vec<FormulaKey> {
    page.formulas().map(|(key, _)| key).collect()
}

#[test]
fn test_read_bind_and_render() {
    let mut page = HtmlReader::read_str(PAGE).unwrap();
    let (_, stats) = page.bind();

    assert_eq!(stats.formula_count, 3);
    assert_eq!(stats.bound, 2);
    // The third formula references an input that does not exist
    assert_eq!(stats.errors, 1);

    let keys = formula_keys(&page);
    assert_eq!(page.formula(keys[0]).unwrap().text(), "50");
    assert_eq!(page.formula(keys[1]).unwrap().text(), "50");

    let broken = page.formula(keys[2]).unwrap();
    assert!(broken.is_error());
    assert_eq!(broken.text(), "Invalid Formula");
}

#[test]
fn test_input_change_refreshes_dependents() {
    let mut page = HtmlReader::read_str(PAGE).unwrap();
    let (binder, _) = page.bind();
    let keys = formula_keys(&page);

    let refreshed = binder.set_value(&mut page, "discount", "2.5").unwrap();
    assert_eq!(refreshed, 1);
    assert_eq!(page.formula(keys[0]).unwrap().text(), "50");
    assert_eq!(page.formula(keys[1]).unwrap().text(), "47.50");

    let refreshed = binder.set_value(&mut page, "qty", "2").unwrap();
    assert_eq!(refreshed, 2);
    assert_eq!(page.formula(keys[0]).unwrap().text(), "25");
    assert_eq!(page.formula(keys[1]).unwrap().text(), "22.50");
}

#[test]
fn test_blank_input_shows_error_until_corrected() {
    let mut page = HtmlReader::read_str(PAGE).unwrap();
    let (binder, _) = page.bind();
    let keys = formula_keys(&page);

    binder.set_value(&mut page, "qty", "").unwrap();
    assert!(page.formula(keys[0]).unwrap().is_error());
    assert!(page.formula(keys[1]).unwrap().is_error());

    binder.set_value(&mut page, "qty", "3").unwrap();
    let element = page.formula(keys[0]).unwrap();
    assert!(!element.is_error());
    assert_eq!(element.text(), "37.50");
}

#[test]
fn test_rendered_output_carries_state() {
    let mut page = HtmlReader::read_str(PAGE).unwrap();
    let (_, _) = page.bind();

    let markup = HtmlWriter::render(&page);
    assert!(markup.contains("<formula evaluator=\"price * qty\">50</formula>"));
    assert!(markup.contains("style=\"color: #ff4444\""));
}

#[test]
fn test_open_and_save_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoice.html");
    std::fs::write(&path, PAGE).unwrap();

    let mut page = Page::open(&path).unwrap();
    let (_, stats) = page.bind();
    assert_eq!(stats.bound, 2);

    let out = dir.path().join("rendered.html");
    page.save(&out).unwrap();
    let rendered = std::fs::read_to_string(&out).unwrap();
    assert!(rendered.contains(">50</formula>"));

    assert!(Page::open(dir.path().join("invoice.txt")).is_err());
}
