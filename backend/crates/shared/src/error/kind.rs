//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every crate in the workspace.
//! The presentation layer decides how each kind is displayed; the core only
//! says whether the user can simply retry.

use serde::Serialize;

/// エラー種別の列挙体
///
/// コアが返すすべてのエラーの分類です。
/// 表示方法はプレゼンテーション層が決定します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Conflict;
/// assert!(kind.is_recoverable());
/// assert_eq!(kind.as_str(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 入力が不正（空のユーザー名、パスワード不一致など）
    Validation,
    /// 認証に失敗、またはセッションが存在しない
    Unauthorized,
    /// 対象が見つからない
    NotFound,
    /// 現在の状態と競合（ユーザー名の重複など）
    Conflict,
    /// 計測時間が不正（経過時間が 0 以下）
    InvalidTiming,
    /// ストレージに到達できない
    StorageUnavailable,
    /// 内部エラー
    Internal,
}

impl ErrorKind {
    /// 安定した文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidTiming.as_str(), "Invalid Timing");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Validation",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InvalidTiming => "Invalid Timing",
            ErrorKind::StorageUnavailable => "Storage Unavailable",
            ErrorKind::Internal => "Internal",
        }
    }

    /// ユーザーが再入力・再試行で回復できるかどうか
    ///
    /// `false` の場合は現在の操作が失敗したことをユーザーに表示すべきです。
    #[inline]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Validation
                | ErrorKind::Unauthorized
                | ErrorKind::NotFound
                | ErrorKind::Conflict
                | ErrorKind::InvalidTiming
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
