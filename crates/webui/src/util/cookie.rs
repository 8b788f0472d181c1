use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Looks up a cookie value in a `document.cookie` style string.
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Reads a cookie visible to scripts. httpOnly cookies always read as `None`.
pub fn read_cookie(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    find_cookie(&cookies, name).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("token=abc", Some("abc"))]
    #[case("theme=dark; token=abc.def=; lang=en", Some("abc.def="))]
    #[case("mytoken=abc", None)]
    #[case("token=", None)]
    #[case("", None)]
    fn finds_named_cookie(#[case] cookies: &str, #[case] expected: Option<&str>) {
        assert_eq!(expected, find_cookie(cookies, "token"));
    }
}
