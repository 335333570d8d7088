use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// 与浏览器 `encodeURIComponent` 一致的转义集合：除字母数字外只保留 `- _ . ! ~ * ' ( )`。
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 按 URI 组件规则转义，空格转为 `%20` 而不是 `+`。
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// 拼接 `base + path`，有参数时追加 `?k1=v1&k2=v2`，保持参数顺序，只转义值。
pub fn build_url(base_url: &str, path: &str, params: &[(&str, &str)]) -> String {
    let mut url = String::with_capacity(128);
    url.push_str(base_url);
    url.push_str(path);

    if params.is_empty() {
        return url;
    }

    url.push('?');
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            url.push('&');
        }
        url.push_str(key);
        url.push('=');
        url.push_str(&encode_uri_component(value));
    }

    url
}
