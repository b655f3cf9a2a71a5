// レスポンスエンベロープ
//
// 呼び出し元に返すJSONのトップレベル構造を定義する。
// 1回の呼び出しにつき成功・エラーのどちらか一方のみを生成する。

use serde::Serialize;

use super::Payload;

/// 成功レスポンスに含める固定メッセージ
pub const GREETING_MESSAGE: &str = "Hello again from the pikin Lambda!";

/// 成功エンベロープの`statusCode`フィールドの値
pub const SUCCESS_STATUS_CODE: u16 = 200;

/// エラーエンベロープ自体のエンコードに失敗した場合の代替ボディ
pub const FALLBACK_ERROR_BODY: &str = r#"{"error":"Failed to marshal response"}"#;

/// 成功エンベロープ
///
/// `{"message": ..., "event": <payload>, "statusCode": 200}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessEnvelope {
    /// 固定の挨拶メッセージ
    pub message: String,

    /// エコーするペイロード
    pub event: Payload,

    /// 常に200
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl SuccessEnvelope {
    pub fn new(event: Payload) -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            event,
            status_code: SUCCESS_STATUS_CODE,
        }
    }
}

/// エラーエンベロープ: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// JSON文字列に変換
    ///
    /// エンコードに失敗した場合は`FALLBACK_ERROR_BODY`を返すため、
    /// 呼び出し側は常にJSONボディを得られる。
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| FALLBACK_ERROR_BODY.to_string())
    }
}
