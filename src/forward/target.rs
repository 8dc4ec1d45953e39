//! Target URL construction.

use std::collections::HashMap;

use url::Url;

/// Collapse a raw query string to one value per key.
///
/// The last value for a repeated key wins; keys keep the position of their
/// first occurrence.
pub fn collapse_query(query: Option<&str>) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();
    let Some(query) = query else {
        return params;
    };

    let mut index: HashMap<String, usize> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match index.get(&*key) {
            Some(&pos) => params[pos].1 = value.into_owned(),
            None => {
                index.insert(key.to_string(), params.len());
                params.push((key.into_owned(), value.into_owned()));
            }
        }
    }
    params
}

/// Append `suffix` verbatim to `base` and attach the collapsed query.
pub fn build_target_url(base: &str, suffix: &str, query: Option<&str>) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{}/{}", base.trim_end_matches('/'), suffix))?;

    let params = collapse_query(query);
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }

    Ok(url)
}
