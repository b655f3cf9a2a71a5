// ドメイン層モジュール
pub mod envelope;
pub mod payload;

// 再エクスポート
pub use envelope::{
    ErrorEnvelope, SuccessEnvelope, FALLBACK_ERROR_BODY, GREETING_MESSAGE, SUCCESS_STATUS_CODE,
};
pub use payload::{Payload, RAW_BODY_KEY};
