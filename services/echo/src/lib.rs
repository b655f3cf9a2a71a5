// ドメイン層: エンベロープとペイロード
pub mod domain;

// アプリケーション層: リクエストエコーハンドラー
pub mod application;

// インフラストラクチャ層: ログ、設定、ローカル実行
pub mod infrastructure;
