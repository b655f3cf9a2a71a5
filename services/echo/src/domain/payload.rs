// エコーペイロード
//
// リクエストボディの解釈結果を表す。JSONとして解釈できたかどうかは
// 実行時にしか決まらないため、列挙型で表現しuntaggedでシリアライズする。

use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use serde::Serialize;
use serde_json::Value;

/// JSONとして解釈できなかったボディを格納するキー
pub const RAW_BODY_KEY: &str = "raw_body";

/// レスポンスの`event`フィールドに格納されるペイロード
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// ボディが空の場合、受信したリクエスト全体
    Request(Box<ApiGatewayProxyRequest>),

    /// JSONとしてパースできたボディ（オブジェクト、配列、スカラー）
    Json(Value),

    /// JSONとしてパースできなかったボディ: {"raw_body": "<text>"}
    Raw { raw_body: String },
}

impl Payload {
    /// テキストボディからペイロードを生成
    ///
    /// JSONとしてパースできればその値を、できなければ生テキストを
    /// `raw_body`キーで包んだ値を返す。パース失敗はエラーにしない。
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Raw {
                raw_body: text.to_string(),
            },
        }
    }

    /// リクエスト全体をペイロードとして包む
    pub fn from_request(request: ApiGatewayProxyRequest) -> Self {
        Payload::Request(Box::new(request))
    }

    /// ログ出力用のペイロード種別名
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Request(_) => "request",
            Payload::Json(_) => "json",
            Payload::Raw { .. } => "raw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_text_parses_object() {
        let payload = Payload::from_text(r#"{"name":"alice","age":30}"#);
        assert_eq!(payload, Payload::Json(json!({"name": "alice", "age": 30})));
    }

    #[test]
    fn test_from_text_parses_array_and_scalars() {
        assert_eq!(Payload::from_text("[1,2,3]"), Payload::Json(json!([1, 2, 3])));
        assert_eq!(Payload::from_text("42"), Payload::Json(json!(42)));
        assert_eq!(Payload::from_text("true"), Payload::Json(json!(true)));
        assert_eq!(Payload::from_text("null"), Payload::Json(Value::Null));
        assert_eq!(Payload::from_text(r#""quoted""#), Payload::Json(json!("quoted")));
    }

    /// JSONでないテキストはraw_bodyに包まれる
    #[test]
    fn test_from_text_wraps_non_json() {
        let payload = Payload::from_text("hello world");
        assert_eq!(
            payload,
            Payload::Raw {
                raw_body: "hello world".to_string()
            }
        );
    }

    /// 途中で切れたJSONもエラーではなくraw_bodyになる
    #[test]
    fn test_from_text_wraps_truncated_json() {
        let payload = Payload::from_text(r#"{"a":"#);
        assert_eq!(payload.kind(), "raw");
    }

    #[test]
    fn test_raw_serializes_with_fixed_key() {
        let payload = Payload::from_text("not json");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"raw_body": "not json"}));
        assert_eq!(value[RAW_BODY_KEY], "not json");
    }

    /// Json値はラップされずにそのままシリアライズされる
    #[test]
    fn test_json_serializes_transparently() {
        let payload = Payload::Json(json!({"nested": {"list": [1, "two", null]}}));
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"nested": {"list": [1, "two", null]}}));
    }

    #[test]
    fn test_request_serializes_as_request_event() {
        let mut request = ApiGatewayProxyRequest::default();
        request.path = Some("/echo".to_string());
        request.is_base64_encoded = false;

        let expected = serde_json::to_value(&request).unwrap();
        let payload = Payload::from_request(request);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value, expected);
        assert_eq!(value["path"], "/echo");
    }

    #[test]
    fn test_kind() {
        assert_eq!(Payload::from_request(ApiGatewayProxyRequest::default()).kind(), "request");
        assert_eq!(Payload::from_text("{}").kind(), "json");
        assert_eq!(Payload::from_text("plain").kind(), "raw");
    }
}
