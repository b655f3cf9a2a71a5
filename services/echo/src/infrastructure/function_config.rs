// 関数設定
//
// デプロイ時に環境変数で渡される設定を読み込む。
// ハンドラーの処理には使わず、コールドスタート時のログにのみ出力する。

use tracing::info;

/// バケット名の環境変数
pub const BUCKET_NAME_ENV: &str = "BUCKET_NAME";

/// テーブル名の環境変数
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

/// Lambda実行環境で設定される関数名の環境変数
pub const LAMBDA_FUNCTION_NAME_ENV: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// 関数設定
///
/// 未設定・空文字の値は`None`として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionConfig {
    /// ストレージバケット名 (BUCKET_NAME環境変数)
    pub bucket_name: Option<String>,
    /// キーバリューテーブル名 (TABLE_NAME環境変数)
    pub table_name: Option<String>,
}

impl FunctionConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Self {
        let get_optional_string = |key: &str| -> Option<String> {
            std::env::var(key).ok().filter(|s| !s.trim().is_empty())
        };

        Self {
            bucket_name: get_optional_string(BUCKET_NAME_ENV),
            table_name: get_optional_string(TABLE_NAME_ENV),
        }
    }

    /// テスト用に明示的な値で作成
    pub fn new(bucket_name: Option<String>, table_name: Option<String>) -> Self {
        Self {
            bucket_name,
            table_name,
        }
    }

    /// 読み込んだ設定をログに記録
    pub fn log(&self) {
        info!(
            bucket_name = self.bucket_name.as_deref().unwrap_or("(unset)"),
            table_name = self.table_name.as_deref().unwrap_or("(unset)"),
            "関数設定を読み込み"
        );
    }
}

/// Lambda実行環境で動作しているかどうか
pub fn is_lambda_environment() -> bool {
    std::env::var(LAMBDA_FUNCTION_NAME_ENV).is_ok()
}
