// Link and title helpers for the page templates.

use url::form_urlencoded;

/// `path?key=value&...` with form encoding.
pub fn link(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        query.append_pair(key, value);
    }
    format!("{}?{}", path, query.finish())
}

/// "spring_promo" -> "Spring Promo"
pub fn display_title(template_id: &str) -> String {
    template_id
        .replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_encodes_values() {
        assert_eq!(link("/browse", &[]), "/browse");
        assert_eq!(
            link("/download", &[("category", "holiday"), ("template", "a b&c")]),
            "/download?category=holiday&template=a+b%26c"
        );
    }

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("new_year_celebration"), "New Year Celebration");
        assert_eq!(display_title("NPS_survey"), "Nps Survey");
    }
}
