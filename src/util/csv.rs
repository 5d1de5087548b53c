//! CSV building and the browser download trigger for list exports.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

/// Quote a field when it contains a delimiter, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}

/// Build CSV text with a header row. Rows shorter than the header are padded
/// with empty fields so every line has the same width.
pub fn build(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(
        &headers
            .iter()
            .map(|header| escape(header))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push('\n');

    for row in rows {
        let mut fields: Vec<String> = row.iter().map(|field| escape(field)).collect();
        while fields.len() < headers.len() {
            fields.push(String::new());
        }
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Trigger a browser download of `contents` as `filename` via a Blob object
/// URL and a synthetic anchor click. No-op outside the browser.
pub fn download(filename: &str, contents: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, contents);
    }
}
