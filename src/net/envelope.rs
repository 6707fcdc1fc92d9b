//! Response wrapper returned by every backend route.

use serde::{Deserialize, Serialize};

use super::error::NetError;

/// `{ "code": 0, "message": null, "data": ... }`
///
/// `code == 0` is the only success marker. The backend writes its message
/// under `msg` and leaves out null fields, so both spellings are accepted
/// and both optional fields read as `None` when absent. `data` carries no
/// `default` attribute so `T` itself needs no `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default, alias = "msg", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: None,
            data: Some(data),
        }
    }

    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Payload of a successful envelope, or the reported failure.
    pub fn into_data(self) -> Result<Option<T>, NetError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(NetError::Protocol {
                code: self.code,
                message: self.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn parses_full_envelope() {
        let env: Envelope<Value> =
            serde_json::from_value(json!({"code": 0, "message": null, "data": {"a": 1}}))
                .expect("parse");
        assert!(env.is_success());
        assert_eq!(env.into_data().expect("ok"), Some(json!({"a": 1})));
    }

    #[test]
    fn accepts_msg_alias_and_missing_fields() {
        let env: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"code": 7, "msg": "denied"}"#).expect("parse");
        assert_eq!(env.message.as_deref(), Some("denied"));
        assert!(env.data.is_none());

        match env.into_data() {
            Err(NetError::Protocol { code, message }) => {
                assert_eq!(code, 7);
                assert_eq!(message.as_deref(), Some("denied"));
            }
            other => panic!("expected protocol error, got {:?}", other),
        }
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Info {
        id: String,
    }

    #[test]
    fn missing_data_parses_for_payload_without_default() {
        let env: Envelope<Info> = serde_json::from_str(r#"{"code": 0}"#).expect("parse");
        assert_eq!(env.into_data().expect("ok"), None);

        let env: Envelope<Info> =
            serde_json::from_str(r#"{"code": 0, "data": {"id": "p1"}}"#).expect("parse");
        assert_eq!(
            env.into_data().expect("ok"),
            Some(Info {
                id: "p1".to_string()
            })
        );
    }

    #[test]
    fn missing_code_is_rejected() {
        let parsed = serde_json::from_str::<Envelope<Value>>(r#"{"data": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn success_serializes_without_null_fields() {
        let body = serde_json::to_value(Envelope::success(vec![1, 2])).expect("serialize");
        assert_eq!(body, json!({"code": 0, "data": [1, 2]}));

        let body = serde_json::to_value(Envelope::<()>::failure(3, "bad")).expect("serialize");
        assert_eq!(body, json!({"code": 3, "message": "bad"}));
    }
}
