use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::Product;

/// Interaction reported to the logging endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Hover,
    Buy,
    EnterProductDetails,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Hover => "HOVER",
            Action::Buy => "BUY",
            Action::EnterProductDetails => "ENTER_PRODUCT_DETAILS",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form key/value context merged into a [`LogEvent`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDetails(Map<String, Value>);

impl EventDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// `product` and, when known, `price`.
    pub fn for_product(product: &Product) -> Self {
        Self::new()
            .with("product", product.title.as_str())
            .with_opt("price", product.price)
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Adds `key` only when `value` is present, so absent values are dropped
    /// from the body rather than sent as `null`.
    pub fn with_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// A structured interaction event. Built once, sent once.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub action: Action,
    pub details: EventDetails,
    pub route: String,
    pub agent: String,
}

impl LogEvent {
    /// JSON body for the logging endpoint: `action`, then the details, then
    /// `route` and `agent`. Later keys overwrite earlier ones.
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        body.insert("action".to_string(), Value::from(self.action.as_str()));
        for (key, value) in self.details.iter() {
            body.insert(key.clone(), value.clone());
        }
        body.insert("route".to_string(), Value::from(self.route.as_str()));
        body.insert("agent".to_string(), Value::from(self.agent.as_str()));
        Value::Object(body)
    }

    pub fn product(&self) -> Option<&str> {
        self.details.get("product").and_then(Value::as_str)
    }
}

impl Serialize for LogEvent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book(price: Option<f64>) -> Product {
        Product {
            title: "The Hobbit".to_string(),
            price,
            image: String::new(),
            description: None,
        }
    }

    #[test]
    fn test_action_wire_names() {
        assert_eq!(Action::Hover.to_string(), "HOVER");
        assert_eq!(Action::Buy.to_string(), "BUY");
        assert_eq!(
            Action::EnterProductDetails.to_string(),
            "ENTER_PRODUCT_DETAILS"
        );
        assert_eq!(
            serde_json::to_value(Action::EnterProductDetails).unwrap(),
            json!("ENTER_PRODUCT_DETAILS")
        );
    }

    #[test]
    fn test_event_body_shape() {
        let event = LogEvent {
            action: Action::Buy,
            details: EventDetails::for_product(&book(Some(12.5))),
            route: "Books home".to_string(),
            agent: "Firefox".to_string(),
        };
        assert_eq!(
            event.to_json(),
            json!({
                "action": "BUY",
                "product": "The Hobbit",
                "price": 12.5,
                "route": "Books home",
                "agent": "Firefox"
            })
        );
        assert_eq!(event.product(), Some("The Hobbit"));
    }

    #[test]
    fn test_missing_price_is_omitted() {
        let event = LogEvent {
            action: Action::Hover,
            details: EventDetails::for_product(&book(None)),
            route: "Books home".to_string(),
            agent: "Unknown".to_string(),
        };
        let body = event.to_json();
        assert!(body.get("price").is_none());
        assert_eq!(body["product"], "The Hobbit");
    }

    #[test]
    fn test_route_and_agent_win_over_details() {
        let event = LogEvent {
            action: Action::Hover,
            details: EventDetails::new()
                .with("route", "spoofed")
                .with("action", "SPOOFED"),
            route: "Clothes home".to_string(),
            agent: "Chrome".to_string(),
        };
        let body = event.to_json();
        assert_eq!(body["route"], "Clothes home");
        // details are merged after the action, matching object-spread order
        assert_eq!(body["action"], "SPOOFED");
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let event = LogEvent {
            action: Action::EnterProductDetails,
            details: EventDetails::new().with("product", "Mug"),
            route: "Clothes details".to_string(),
            agent: "Safari".to_string(),
        };
        let serialized = serde_json::to_value(&event).unwrap();
        assert_eq!(serialized, event.to_json());
    }
}
