/// ローカル実行
///
/// API GatewayプロキシリクエストのイベントJSONを読み込み、
/// Lambdaと同じハンドラーで処理してレスポンスJSONを返す。
use std::io::Read;

use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use thiserror::Error;
use tracing::info;

use crate::application::EchoHandler;

/// ローカル実行のエラー
#[derive(Debug, Error)]
pub enum LocalInvokeError {
    /// イベントの読み込みに失敗
    #[error("failed to read event: {0}")]
    Read(#[from] std::io::Error),

    /// イベントJSONがAPI Gatewayプロキシリクエストとして不正
    #[error("failed to parse event: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    /// レスポンスのエンコードに失敗
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// 入力からイベントを読み込んでハンドラーを実行する
///
/// # Arguments
/// * `reader` - イベントJSONの入力元（ファイルまたは標準入力）
/// * `pretty` - レスポンスを整形して出力するか
///
/// # Returns
/// シリアライズしたAPI Gatewayプロキシレスポンス
pub fn invoke_from_reader<R: Read>(
    mut reader: R,
    pretty: bool,
) -> Result<String, LocalInvokeError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let request: ApiGatewayProxyRequest =
        serde_json::from_str(&input).map_err(LocalInvokeError::InvalidEvent)?;

    let response = EchoHandler::handle(request);

    info!(status_code = response.status_code, "ローカル実行完了");

    let output = if pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };

    output.map_err(LocalInvokeError::Encode)
}
