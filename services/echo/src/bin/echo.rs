/// リクエストエコーLambda関数
///
/// API Gatewayプロキシ統合のリクエストボディを解釈し、
/// 固定メッセージと共にJSONで返却する。
/// Lambda関数としても、ローカルスクリプトとしても実行可能。
///
/// # 環境変数
/// - BUCKET_NAME: ストレージバケット名（任意、ログ出力のみ）
/// - TABLE_NAME: テーブル名（任意、ログ出力のみ）
/// - RUST_LOG: ログレベル（デフォルト: info）
///
/// # ローカル実行
/// ```bash
/// # ファイルからイベントを読み込み
/// cargo run --bin echo -- --event event.json --pretty
///
/// # 標準入力からイベントを読み込み
/// cat event.json | cargo run --bin echo
/// ```
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use clap::Parser;
use echo::application::EchoHandler;
use echo::infrastructure::{init_logging, invoke_from_reader, is_lambda_environment, FunctionConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::{error, info};

/// コマンドライン引数（ローカル実行用）
#[derive(Parser, Debug)]
#[command(name = "echo")]
#[command(about = "API GatewayプロキシイベントJSONをローカルでエコー処理")]
struct CliArgs {
    /// イベントJSONファイルのパス（省略時は標準入力から読み込む）
    #[arg(long, short = 'e')]
    event: Option<PathBuf>,

    /// レスポンスJSONを整形して出力
    #[arg(long, short = 'p')]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // デプロイ設定はログに記録するのみ
    FunctionConfig::from_env().log();

    if is_lambda_environment() {
        info!("Lambda関数として起動");
        let func = service_fn(handler);
        lambda_runtime::run(func).await?;
    } else {
        info!("ローカルスクリプトとして起動");
        run_local(CliArgs::parse())?;
    }

    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// エコー処理はエラー時も500レスポンスとして完結するため、常にOkを返す。
async fn handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);
    let _guard = span.enter();

    let response = EchoHandler::handle(event.payload);

    info!(status_code = response.status_code, "レスポンス送信");

    Ok(response)
}

/// ローカル実行
///
/// イベントJSONを読み込んでハンドラーを実行し、レスポンスを標準出力に書き出す。
fn run_local(args: CliArgs) -> Result<(), Error> {
    let output = match &args.event {
        Some(path) => {
            info!(path = %path.display(), "イベントファイルを読み込み");
            let file = File::open(path)?;
            invoke_from_reader(file, args.pretty)
        }
        None => invoke_from_reader(io::stdin().lock(), args.pretty),
    };

    let output = output.inspect_err(|err| error!(error = %err, "ローカル実行に失敗"))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;

    Ok(())
}
