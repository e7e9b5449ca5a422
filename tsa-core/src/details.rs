//! Analysis detail modal.
//!
//! Only the loading notice is rendered here; fetching the details
//! themselves belongs to the analysis backend.

use crate::dom::Page;

/// Id of the modal body the notice is written into.
pub const DETAILS_CONTAINER_ID: &str = "analysisDetails";

/// The placeholder shown while details for `analysis_id` load.
pub fn detail_notice(analysis_id: &str) -> String {
    format!(
        r#"<div class="alert alert-info">Loading details for analysis #{}...</div>"#,
        escape_html(analysis_id)
    )
}

/// Replace the modal body with the loading notice.
///
/// Returns false when the container is not on the page.
pub fn load_analysis_details<P: Page>(page: &P, analysis_id: &str) -> bool {
    page.replace_content(DETAILS_CONTAINER_ID, &detail_notice(analysis_id))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePage;

    #[test]
    fn writes_notice_into_container() {
        let page = FakePage::with_elements(&[DETAILS_CONTAINER_ID]);
        assert!(load_analysis_details(&page, "42"));
        assert_eq!(
            page.content(DETAILS_CONTAINER_ID).unwrap(),
            r#"<div class="alert alert-info">Loading details for analysis #42...</div>"#
        );
    }

    #[test]
    fn replaces_previous_content() {
        let page = FakePage::with_elements(&[DETAILS_CONTAINER_ID]);
        load_analysis_details(&page, "1");
        load_analysis_details(&page, "2");
        assert!(page.content(DETAILS_CONTAINER_ID).unwrap().contains("#2..."));
        assert!(!page.content(DETAILS_CONTAINER_ID).unwrap().contains("#1..."));
    }

    #[test]
    fn markup_in_the_id_is_escaped() {
        let notice = detail_notice("<b>7</b>");
        assert!(notice.contains("#&lt;b&gt;7&lt;/b&gt;..."));
    }

    #[test]
    fn missing_container_is_a_no_op() {
        let page = FakePage::default();
        assert!(!load_analysis_details(&page, "42"));
        assert!(page.mutations.borrow().is_empty());
    }
}
