/// Replaces every `{{key}}` token for each `(key, value)` pair, in the order
/// the pairs are yielded. Tokens without a matching key are left as-is.
pub fn render<I, K, V>(template: &str, variables: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    variables
        .into_iter()
        .fold(template.to_string(), |acc, (key, value)| {
            let token = format!("{{{{{}}}}}", key.as_ref());
            acc.replace(&token, value.as_ref())
        })
}

/// Variables of an offer letter, in substitution order.
pub fn offer_variables<'a>(
    name: &'a str,
    position: &'a str,
    salary: &'a str,
) -> [(&'static str, &'a str); 3] {
    [("name", name), ("position", position), ("salary", salary)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn unknown_placeholders_stay() {
        let out = render("Hi {{name}}, role {{role}}", [("name", "Ann")]);
        assert_eq!(out, "Hi Ann, role {{role}}");
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = render("{{name}} / {{name}}", [("name", "Bo")]);
        assert_eq!(out, "Bo / Bo");
    }

    #[test]
    fn rendering_twice_changes_nothing() {
        let vars = BTreeMap::from([("name", "Ann"), ("salary", "90k")]);
        let once = render("Dear {{name}}, {{salary}} {{bonus}}", &vars);
        let twice = render(&once, &vars);
        assert_eq!(once, twice);
        assert_eq!(once, "Dear Ann, 90k {{bonus}}");
    }

    #[test]
    fn keys_are_literal_not_patterns() {
        let out = render("{{a.b}} {{axb}}", [("a.b", "1")]);
        assert_eq!(out, "1 {{axb}}");
    }

    #[test]
    fn offer_letter() {
        let out = render(
            "Dear {{name}}, we offer you {{position}} at {{salary}}.",
            offer_variables("Ann", "Senior .NET Engineer", "$90,000"),
        );
        assert_eq!(out, "Dear Ann, we offer you Senior .NET Engineer at $90,000.");
    }
}
