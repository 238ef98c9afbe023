//! Candidate app extraction from the catalog page markup.
//!
//! The catalog lists every app with Points Shop items as `<option>` entries
//! of a `<select>` control: the `value` attribute carries the app id (or a
//! slug containing it) and the text carries the display name. A leading
//! placeholder option with an empty value is common and is left for the
//! planner to skip.

use scraper::{Html, Selector};

use crate::error::ScraperError;

/// Selector matching the catalog's app options.
pub const DEFAULT_OPTION_SELECTOR: &str = "select option";

/// One `<option>` from the catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Raw `value` attribute, untrimmed.
    pub value: String,
    /// Option text with surrounding whitespace removed.
    pub label: String,
}

/// Extracts `(value, label)` entries in document order.
///
/// An option without a `value` attribute uses its text as the value, as
/// browsers do.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidSelector`] if `selector` is not valid CSS.
pub fn extract_catalog_entries(
    html: &str,
    selector: &str,
) -> Result<Vec<CatalogEntry>, ScraperError> {
    let option_sel = Selector::parse(selector).map_err(|e| ScraperError::InvalidSelector {
        selector: selector.to_owned(),
        reason: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let entries: Vec<CatalogEntry> = document
        .select(&option_sel)
        .map(|element| {
            let label = element.text().collect::<String>().trim().to_owned();
            let value = element
                .value()
                .attr("value")
                .map_or_else(|| label.clone(), str::to_owned);
            CatalogEntry { value, label }
        })
        .collect();

    tracing::debug!(options = entries.len(), selector, "extracted catalog options");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
        <html><body>
          <form>
            <select name="appid">
              <option value="">Select a game</option>
              <option value="1435780">Farm Frenzy Refreshed</option>
              <option value="440">
                Team Fortress 2
              </option>
              <option value="92800">SpaceChem</option>
            </select>
          </form>
        </body></html>
    "#;

    #[test]
    fn extracts_options_in_document_order() {
        let entries = extract_catalog_entries(CATALOG, DEFAULT_OPTION_SELECTOR).unwrap();
        let values: Vec<&str> = entries.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["", "1435780", "440", "92800"]);
    }

    #[test]
    fn trims_option_text() {
        let entries = extract_catalog_entries(CATALOG, DEFAULT_OPTION_SELECTOR).unwrap();
        assert_eq!(entries[2].label, "Team Fortress 2");
    }

    #[test]
    fn option_without_value_uses_text() {
        let html = "<select><option>440</option></select>";
        let entries = extract_catalog_entries(html, DEFAULT_OPTION_SELECTOR).unwrap();
        assert_eq!(entries[0].value, "440");
    }

    #[test]
    fn page_without_select_yields_nothing() {
        let entries =
            extract_catalog_entries("<p>maintenance</p>", DEFAULT_OPTION_SELECTOR).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn invalid_selector_is_reported() {
        let err = extract_catalog_entries(CATALOG, "option[value").unwrap_err();
        assert!(
            matches!(err, ScraperError::InvalidSelector { .. }),
            "expected InvalidSelector, got: {err:?}"
        );
    }
}
