//! Read the month/semester/year dropdowns the portal echoes back.

use crate::attendance::dom;
use crate::attendance::report::SelectedOption;
use crate::error::ParseError;
use scraper::{ElementRef, Html};

/// The three echoed selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPeriod {
    pub month: SelectedOption,
    pub semester: SelectedOption,
    pub year: String,
}

/// Extract all three selections from the page.
pub fn extract_period(document: &Html) -> Result<SelectedPeriod, ParseError> {
    let root = document.root_element();

    let month = selected_option(root, "month")?;
    let semester = selected_option(root, "semester")?;
    let year = dom::text_of(selected_element(root, "year")?).trim().to_string();

    Ok(SelectedPeriod {
        month,
        semester,
        year,
    })
}

/// Label (lower-cased) and value of a control's selected option.
fn selected_option(root: ElementRef, name: &'static str) -> Result<SelectedOption, ParseError> {
    let option = selected_element(root, name)?;
    let code = option
        .value()
        .attr("value")
        .ok_or(ParseError::MetadataMissing(name))?
        .to_string();

    Ok(SelectedOption {
        label: dom::text_of(option).trim().to_lowercase(),
        code,
    })
}

fn selected_element<'a>(root: ElementRef<'a>, name: &'static str) -> Result<ElementRef<'a>, ParseError> {
    let control = dom::find_first(root, &format!(r#"select[name="{name}"]"#))?
        .ok_or(ParseError::MetadataMissing(name))?;
    dom::find_first(control, "option[selected]")?.ok_or(ParseError::MetadataMissing(name))
}
