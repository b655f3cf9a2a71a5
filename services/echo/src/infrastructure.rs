// インフラストラクチャ層モジュール
pub mod function_config;
pub mod local_invoke;
pub mod logging;

// 再エクスポート
pub use function_config::{is_lambda_environment, FunctionConfig};
pub use local_invoke::{invoke_from_reader, LocalInvokeError};
pub use logging::init_logging;
#[cfg(test)]
pub use logging::init_test_logging;
