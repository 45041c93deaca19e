use dioxus::document::eval;

pub(super) fn focus_script(element_id: &str) -> String {
    format!("document.getElementById({element_id:?})?.focus();")
}

pub(super) fn focus_element(element_id: &str) {
    let _ = eval(&focus_script(element_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_script_quotes_the_id() {
        assert_eq!(
            focus_script("round-input-3"),
            r#"document.getElementById("round-input-3")?.focus();"#
        );
    }
}
