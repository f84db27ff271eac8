//! Small query helpers over `scraper` documents.

use crate::error::ParseError;
use scraper::{ElementRef, Html, Selector};

/// Compile a CSS selector.
pub fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::Selector(css.to_string()))
}

/// First element under `scope` matching `css`, if any.
pub fn find_first<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>, ParseError> {
    let sel = selector(css)?;
    let found = scope.select(&sel).next();
    Ok(found)
}

/// All elements under `scope` matching `css`, in document order.
pub fn find_all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>, ParseError> {
    let sel = selector(css)?;
    let found = scope.select(&sel).collect();
    Ok(found)
}

/// Concatenated text of an element and its descendants.
pub fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Text of the document's `<title>`, or an empty string when absent.
pub fn title_text(document: &Html) -> String {
    let Ok(sel) = selector("title") else {
        return String::new();
    };
    let title = document.select(&sel).next().map(text_of);
    title.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_of_joins_descendants() {
        let doc = Html::parse_fragment("<div><b>CS301</b> - <i>Data</i></div>");
        let div = find_first(doc.root_element(), "div").unwrap().unwrap();
        assert_eq!(text_of(div), "CS301 - Data");
    }

    #[test]
    fn test_title_text() {
        let doc = Html::parse_document("<html><head><title> Portal </title></head></html>");
        assert_eq!(title_text(&doc), " Portal ");

        let untitled = Html::parse_document("<html><body></body></html>");
        assert_eq!(title_text(&untitled), "");
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Html::parse_fragment("<p></p>");
        let err = find_first(doc.root_element(), "p[").unwrap_err();
        assert_eq!(err, ParseError::Selector("p[".into()));
    }
}
