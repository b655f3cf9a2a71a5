/// リクエストエコーハンドラー
///
/// API Gatewayプロキシ統合のリクエストを受け取り、ボディを解釈して
/// エンベロープに包んだJSONレスポンスを生成する。
/// どの経路でも必ずレスポンスを返し、呼び出し自体を失敗させない。
use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use http::header::{HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::{ErrorEnvelope, Payload, SuccessEnvelope};

/// リクエストボディ用のBase64エンジン
///
/// 標準アルファベットでパディング必須。末尾の余りビットが0でなくても受け付ける。
const BODY_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// エコー処理のエラー
///
/// Display文字列がそのままエラーエンベロープの`error`になる。
#[derive(Debug, Error)]
pub enum EchoError {
    /// isBase64Encodedなボディのデコードに失敗
    #[error("failed to decode base64 body: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// 成功エンベロープのシリアライズに失敗
    #[error("Failed to marshal response")]
    Serialization(#[from] serde_json::Error),
}

impl EchoError {
    /// 呼び出し元に返すHTTPステータス
    pub fn status_code(&self) -> StatusCode {
        match self {
            EchoError::Base64Decode(_) | EchoError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// リクエストエコーハンドラー
pub struct EchoHandler;

impl EchoHandler {
    /// リクエストを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. 受信リクエストをログに記録
    /// 2. ボディをペイロードに解決（失敗時は500のエラーエンベロープ）
    /// 3. 成功エンベロープをシリアライズして200で返却
    pub fn handle(request: ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        info!(
            http_method = %request.http_method,
            path = request.path.as_deref().unwrap_or(""),
            resource = request.resource.as_deref().unwrap_or(""),
            is_base64_encoded = request.is_base64_encoded,
            body_length = request.body.as_ref().map_or(0, String::len),
            header_count = request.headers.len(),
            "リクエスト受信"
        );
        debug!(request = ?request, "受信リクエスト全体");

        let payload = match Self::resolve_payload(request) {
            Ok(payload) => payload,
            Err(err) => {
                error!(error = %err, "リクエストボディの処理に失敗");
                return Self::error_response(&err);
            }
        };

        debug!(payload_kind = payload.kind(), "ペイロード解決完了");

        Self::render(&SuccessEnvelope::new(payload))
    }

    /// リクエストボディをペイロードに解決
    ///
    /// - ボディが無い/空: リクエスト全体
    /// - isBase64Encoded: Base64デコード後のテキストを解釈（デコード失敗はエラー）
    /// - JSONとしてパース可能: パース結果
    /// - それ以外: `{"raw_body": <text>}`
    ///
    /// # 戻り値
    /// * `Ok(Payload)` - 解決したペイロード
    /// * `Err(EchoError::Base64Decode)` - Base64デコード失敗時
    pub fn resolve_payload(request: ApiGatewayProxyRequest) -> Result<Payload, EchoError> {
        if request.body.as_deref().is_none_or(str::is_empty) {
            return Ok(Payload::from_request(request));
        }

        let is_base64_encoded = request.is_base64_encoded;
        let body = request.body.unwrap_or_default();

        let text = if is_base64_encoded {
            // 改行（\r, \n）は読み飛ばす
            let encoded: Vec<u8> = body
                .bytes()
                .filter(|b| !matches!(b, b'\r' | b'\n'))
                .collect();
            let decoded = BODY_BASE64.decode(&encoded)?;
            // 不正なUTF-8は置換文字に変換し、JSONパース失敗としてraw_bodyに落とす
            String::from_utf8_lossy(&decoded).into_owned()
        } else {
            body
        };

        Ok(Payload::from_text(&text))
    }

    /// エンベロープをシリアライズして200レスポンスにする
    ///
    /// シリアライズに失敗した場合は固定メッセージの500レスポンスを返す。
    pub fn render<T: Serialize>(envelope: &T) -> ApiGatewayProxyResponse {
        match serde_json::to_string(envelope) {
            Ok(body) => Self::json_response(StatusCode::OK, body),
            Err(err) => {
                error!(error = %err, "レスポンスのシリアライズに失敗");
                Self::error_response(&EchoError::from(err))
            }
        }
    }

    /// エラーからエラーエンベロープのレスポンスを生成
    pub fn error_response(err: &EchoError) -> ApiGatewayProxyResponse {
        let body = ErrorEnvelope::new(err.to_string()).to_json();
        Self::json_response(err.status_code(), body)
    }

    /// レスポンスヘッダーを生成
    ///
    /// 成功・エラーの両方で共通:
    /// - Content-Type: application/json
    /// - Access-Control-Allow-Origin: *
    pub fn build_response_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

        headers
    }

    fn json_response(status: StatusCode, body: String) -> ApiGatewayProxyResponse {
        let mut response = ApiGatewayProxyResponse::default();
        response.status_code = i64::from(status.as_u16());
        response.headers = Self::build_response_headers();
        response.body = Some(Body::Text(body));
        response.is_base64_encoded = false;
        response
    }
}
