//! Naming and version string transforms shared by the artifact templates.
//!
//! Everything here is a pure function of its input. The one version
//! convention used across paths, namespaces and class-name suffixes is the
//! full dotted version rendered as `v{major}_{minor}_{patch}`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::ApiVersion;

static BEFORE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid regex"));

static AFTER_LOWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

static API_VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_v\d+_\d+_\d+$").expect("valid regex"));

/// Convert a CamelCase name to a lower-case hyphenated URL segment.
///
/// | Input | Output |
/// |-------|--------|
/// | `CreateOrder` | `create-order` |
/// | `HTTPHandler` | `http-handler` |
/// | `GetV2Prices` | `get-v2-prices` |
pub fn camel_to_snake_hyphen(name: &str) -> String {
    let s1 = BEFORE_WORD.replace_all(name, "${1}-${2}");
    AFTER_LOWER
        .replace_all(&s1, "${1}-${2}")
        .to_lowercase()
}

/// Remove a trailing `_vD_D_D` suffix from a type name.
///
/// `Forecast_v1_0_0` becomes `Forecast`; names without the suffix are
/// returned unchanged.
pub fn strip_api_version_suffix(type_name: &str) -> &str {
    match API_VERSION_SUFFIX.find(type_name) {
        Some(m) => &type_name[..m.start()],
        None => type_name,
    }
}

/// Whether a key under `Adapters.Http` names a version block.
pub fn is_http_version_key(key: &str) -> bool {
    key.parse::<ApiVersion>().is_ok()
}

/// Lower-case the first character: `OrderId` → `orderId`.
pub fn first_char_lower(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a private member name from a `_{Name}{suffix}` token by
/// lower-casing the character after the underscore.
///
/// `("PlaceOrder", "Action")` → `_placeOrderAction`
pub fn member_var_name(name: &str, suffix: &str) -> String {
    format!("_{}{}", first_char_lower(name), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenates_simple_camel_case() {
        assert_eq!(camel_to_snake_hyphen("CreateOrder"), "create-order");
        assert_eq!(camel_to_snake_hyphen("PredictWeather"), "predict-weather");
    }

    #[test]
    fn hyphenates_capital_runs_without_leading_hyphen() {
        assert_eq!(camel_to_snake_hyphen("HTTPHandler"), "http-handler");
        assert_eq!(camel_to_snake_hyphen("GetHTTPStatus"), "get-http-status");
        assert_eq!(camel_to_snake_hyphen("Order"), "order");
    }

    #[test]
    fn hyphenates_after_digits() {
        assert_eq!(camel_to_snake_hyphen("GetV2Prices"), "get-v2-prices");
    }

    #[test]
    fn hyphenated_segments_rejoin_to_lowercase_original() {
        for name in ["CreateOrder", "HTTPHandler", "A", "ListAllCustomerOrders", "X509Cert"] {
            let out = camel_to_snake_hyphen(name);
            assert_eq!(out, out.to_lowercase(), "not lowercase: {out}");
            assert!(!out.starts_with('-'), "leading hyphen: {out}");
            assert_eq!(out.replace('-', ""), name.to_lowercase());
        }
    }

    #[test]
    fn strips_version_suffix() {
        assert_eq!(strip_api_version_suffix("Forecast_v1_0_0"), "Forecast");
        assert_eq!(strip_api_version_suffix("OrderView_v10_2_33"), "OrderView");
        assert_eq!(strip_api_version_suffix("OrderId"), "OrderId");
        assert_eq!(strip_api_version_suffix("Order_v1_0"), "Order_v1_0");
    }

    #[test]
    fn recognizes_version_keys() {
        assert!(is_http_version_key("1.0.0"));
        assert!(!is_http_version_key("BuildingBlockTranslators"));
        assert!(!is_http_version_key("CommandTranslators"));
        assert!(!is_http_version_key("1.0"));
    }

    #[test]
    fn member_names_lower_second_char() {
        assert_eq!(member_var_name("PlaceOrder", "Action"), "_placeOrderAction");
        assert_eq!(
            member_var_name("PlaceOrder", "CommandTranslator"),
            "_placeOrderCommandTranslator"
        );
        assert_eq!(first_char_lower(""), "");
    }
}
